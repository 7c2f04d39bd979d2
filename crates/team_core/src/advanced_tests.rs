use super::*;
use crate::{team_score, SkillLevel};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn player(id: u32, weight: i32) -> Player {
    Player::new(id, format!("p{id}"), weight, SkillLevel::Weak, SkillLevel::Weak)
}

#[test]
fn test_advanced_never_worse_than_start() {
    let roster: Vec<Player> = (1..=10).map(|id| player(id, (id * 7 % 10) as i32 + 1)).collect();

    for seed in 0..100 {
        let start = halves_split(&roster, 2, &mut StdRng::seed_from_u64(seed));
        let result = balance_advanced(&roster, 2, DEFAULT_ITERATIONS, &mut StdRng::seed_from_u64(seed));
        assert!(result.balance <= start.balance, "seed {seed}");
        assert_eq!(result.team1.len(), start.team1.len());
        assert_eq!(result.team2.len(), start.team2.len());
    }
}

#[test]
fn test_hill_climb_stops_at_local_optimum() {
    // team1 = [10, 1], team2 = [2, 1]; gap 8.
    // Every single swap leaves the gap at 8 or widens it to 10, so the start
    // is already a local optimum.
    let start = Partition::scored(
        vec![player(1, 8), player(2, -1)],
        vec![player(3, 0), player(4, -1)],
        1,
    );
    let result = hill_climb(start.clone(), 1, DEFAULT_ITERATIONS);
    assert_eq!(result, start);
}

#[test]
fn test_hill_climb_takes_first_improving_swap() {
    // scores: team1 = [6, 10], team2 = [5, 1]; gap 10.
    // Pair (0, 0) narrows the gap to 8 and comes first, pair (1, 0) would
    // close it. One round must commit (0, 0).
    let start = Partition::scored(
        vec![player(1, 4), player(2, 8)],
        vec![player(3, 3), player(4, -1)],
        1,
    );

    let one = hill_climb(start.clone(), 1, 1);
    let ids1: Vec<u32> = one.team1.iter().map(|p| p.id).collect();
    let ids2: Vec<u32> = one.team2.iter().map(|p| p.id).collect();
    assert_eq!(ids1, vec![3, 2]);
    assert_eq!(ids2, vec![1, 4]);
    assert_eq!(one.balance, 8);

    let full = hill_climb(start, 1, DEFAULT_ITERATIONS);
    assert_eq!(full.balance, 0);
}

#[test]
fn test_hill_climb_swap_keeps_positions() {
    // scores: team1 = [12, 12, 2], team2 = [2, 2]; gap 22.
    // first improving pair is (0, 0): [2, 12, 2] vs [12, 2], gap 2.
    // Next round: no single swap gets below 2.
    let start = Partition::scored(
        vec![player(1, 10), player(2, 10), player(3, 0)],
        vec![player(4, 0), player(5, 0)],
        1,
    );
    let result = hill_climb(start, 1, DEFAULT_ITERATIONS);

    let ids1: Vec<u32> = result.team1.iter().map(|p| p.id).collect();
    let ids2: Vec<u32> = result.team2.iter().map(|p| p.id).collect();
    assert_eq!(ids1, vec![4, 2, 3]);
    assert_eq!(ids2, vec![1, 5]);
    assert_eq!(result.balance, 2);
}

#[test]
fn test_hill_climb_zero_iterations_returns_start() {
    let start = Partition::scored(
        vec![player(1, 10), player(2, 10)],
        vec![player(3, 0), player(4, 0)],
        1,
    );
    let result = hill_climb(start.clone(), 1, 0);
    assert_eq!(result, start);
}

#[test]
fn test_hill_climb_respects_round_cap() {
    // each committed swap is one round; with a cap of 1 at most one swap happens
    let start = Partition::scored(
        vec![player(1, 10), player(2, 9), player(3, 8)],
        vec![player(4, 0), player(5, 1), player(6, 2)],
        1,
    );
    let one = hill_climb(start.clone(), 1, 1);
    let moved = one.team1.iter().filter(|p| p.id >= 4).count();
    assert!(moved <= 1);
}

#[test]
fn test_advanced_scores_are_consistent() {
    let roster: Vec<Player> = (1..=8).map(|id| player(id, id as i32)).collect();
    let mut rng = StdRng::seed_from_u64(17);
    let result = balance_advanced(&roster, 3, DEFAULT_ITERATIONS, &mut rng);
    assert_eq!(result.team1_score, team_score(&result.team1, 3));
    assert_eq!(result.team2_score, team_score(&result.team2, 3));
    assert_eq!(result.balance, (result.team1_score - result.team2_score).abs());
}

#[test]
fn test_advanced_single_and_empty_roster() {
    let mut rng = StdRng::seed_from_u64(0);

    let empty = balance_advanced(&[], 2, DEFAULT_ITERATIONS, &mut rng);
    assert!(empty.is_empty());

    let solo = vec![Player::new(1, "solo", 5, SkillLevel::Strong, SkillLevel::Average)];
    let result = balance_advanced(&solo, 2, DEFAULT_ITERATIONS, &mut rng);
    assert_eq!(result.team1.len(), 1);
    assert!(result.team2.is_empty());
    assert_eq!(result.balance, 15);
}
