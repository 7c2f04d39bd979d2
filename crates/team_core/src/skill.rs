//! Skill scoring shared by every strategy.

use crate::types::Player;

#[cfg(test)]
#[path = "skill_tests.rs"]
mod skill_tests;

/// Skill score of a single player.
///
/// `weight * weight_multiplier + level(aim) + level(game_sense)`, where the
/// levels are weak = 1, average = 2, strong = 3. Recomputed on every call.
pub fn score(player: &Player, weight_multiplier: u32) -> i64 {
    i64::from(player.weight) * i64::from(weight_multiplier)
        + player.aim.level()
        + player.game_sense.level()
}

/// Aggregate score of a team.
pub fn team_score(players: &[Player], weight_multiplier: u32) -> i64 {
    players.iter().map(|p| score(p, weight_multiplier)).sum()
}
