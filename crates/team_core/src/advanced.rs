//! Hill-climbing refinement of a random split.
//!
//! Starting from random contiguous halves, the climber repeatedly commits the
//! first cross-team swap (team 1 index outer, team 2 index inner) that strictly
//! narrows the score gap. It stops after `iterations` committed swaps or as
//! soon as a full scan finds nothing better, whichever comes first.

use rand::Rng;
use tracing::debug;

use crate::partition::Partition;
use crate::shuffle::shuffled_halves;
use crate::skill::score;
use crate::types::Player;

#[cfg(test)]
#[path = "advanced_tests.rs"]
mod advanced_tests;

/// Default round cap for [`balance_advanced`]
pub const DEFAULT_ITERATIONS: u32 = 100;

/// A player carried together with its score for the duration of a climb.
struct Scored {
    player: Player,
    score: i64,
}

/// Random starting point of the advanced strategy: shuffled contiguous halves,
/// first ceil(n/2) players in team 1.
pub fn halves_split<R: Rng + ?Sized>(
    roster: &[Player],
    weight_multiplier: u32,
    rng: &mut R,
) -> Partition {
    let (team1, team2) = shuffled_halves(roster, rng);
    Partition::scored(team1, team2, weight_multiplier)
}

/// Runs [`halves_split`] followed by [`hill_climb`].
pub fn balance_advanced<R: Rng + ?Sized>(
    roster: &[Player],
    weight_multiplier: u32,
    iterations: u32,
    rng: &mut R,
) -> Partition {
    let start = halves_split(roster, weight_multiplier, rng);
    hill_climb(start, weight_multiplier, iterations)
}

/// Greedy first-improvement local search over single swaps.
///
/// Team sizes never change. The returned balance is never larger than the
/// balance of `start` under `weight_multiplier`.
pub fn hill_climb(start: Partition, weight_multiplier: u32, iterations: u32) -> Partition {
    let mut team1 = with_scores(start.team1, weight_multiplier);
    let mut team2 = with_scores(start.team2, weight_multiplier);

    let mut sum1: i64 = team1.iter().map(|s| s.score).sum();
    let mut sum2: i64 = team2.iter().map(|s| s.score).sum();
    let initial_diff = (sum1 - sum2).abs();
    let mut best_diff = initial_diff;
    let mut swaps = 0u32;

    for _ in 0..iterations {
        let Some((i, j)) = first_improving_swap(&team1, &team2, sum1, sum2, best_diff) else {
            break;
        };

        let from1 = team1.remove(i);
        let from2 = team2.remove(j);
        sum1 += from2.score - from1.score;
        sum2 += from1.score - from2.score;
        team1.insert(i, from2);
        team2.insert(j, from1);

        best_diff = (sum1 - sum2).abs();
        swaps += 1;
    }

    debug!(
        players = team1.len() + team2.len(),
        swaps,
        initial_diff,
        balance = best_diff,
        "advanced balance"
    );

    let team1 = team1.into_iter().map(|s| s.player).collect();
    let team2 = team2.into_iter().map(|s| s.player).collect();
    Partition::scored(team1, team2, weight_multiplier)
}

fn with_scores(players: Vec<Player>, weight_multiplier: u32) -> Vec<Scored> {
    players
        .into_iter()
        .map(|player| Scored {
            score: score(&player, weight_multiplier),
            player,
        })
        .collect()
}

/// First (i, j) in row-major order whose swap beats `best_diff`.
fn first_improving_swap(
    team1: &[Scored],
    team2: &[Scored],
    sum1: i64,
    sum2: i64,
    best_diff: i64,
) -> Option<(usize, usize)> {
    for (i, a) in team1.iter().enumerate() {
        for (j, b) in team2.iter().enumerate() {
            let diff = ((sum1 - a.score + b.score) - (sum2 - b.score + a.score)).abs();
            if diff < best_diff {
                return Some((i, j));
            }
        }
    }
    None
}
