//! Best-of-N random sampling.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::partition::Partition;
use crate::types::Player;

#[cfg(test)]
#[path = "basic_tests.rs"]
mod basic_tests;

/// Default number of random splits tried by [`balance_basic`]
pub const DEFAULT_ATTEMPTS: u32 = 10;

/// One random trial: shuffle, then deal players alternately.
///
/// Even positions go to team 1 and odd positions to team 2, so team 1 holds
/// the extra player on odd rosters.
pub fn parity_split<R: Rng + ?Sized>(
    roster: &[Player],
    weight_multiplier: u32,
    rng: &mut R,
) -> Partition {
    let mut shuffled = roster.to_vec();
    shuffled.shuffle(rng);

    let mut team1 = Vec::with_capacity(shuffled.len().div_ceil(2));
    let mut team2 = Vec::with_capacity(shuffled.len() / 2);
    for (index, player) in shuffled.into_iter().enumerate() {
        if index % 2 == 0 {
            team1.push(player);
        } else {
            team2.push(player);
        }
    }

    Partition::scored(team1, team2, weight_multiplier)
}

/// Keeps the best of `attempts` random parity splits.
///
/// Only a strictly smaller balance replaces the current best, so the earliest
/// trial wins ties. `attempts == 0` still runs one trial.
pub fn balance_basic<R: Rng + ?Sized>(
    roster: &[Player],
    weight_multiplier: u32,
    attempts: u32,
    rng: &mut R,
) -> Partition {
    let mut best = parity_split(roster, weight_multiplier, rng);

    for _ in 1..attempts {
        let candidate = parity_split(roster, weight_multiplier, rng);
        if candidate.balance < best.balance {
            best = candidate;
        }
    }

    debug!(
        players = roster.len(),
        attempts,
        balance = best.balance,
        "basic balance"
    );
    best
}
