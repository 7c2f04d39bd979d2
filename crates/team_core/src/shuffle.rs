//! Skill-blind splitting.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::partition::Partition;
use crate::types::Player;

#[cfg(test)]
#[path = "shuffle_tests.rs"]
mod shuffle_tests;

/// Shuffles the roster and cuts it into contiguous halves.
///
/// The first half gets the extra player when the roster size is odd.
pub(crate) fn shuffled_halves<R: Rng + ?Sized>(
    roster: &[Player],
    rng: &mut R,
) -> (Vec<Player>, Vec<Player>) {
    let mut team1 = roster.to_vec();
    team1.shuffle(rng);
    let midpoint = team1.len().div_ceil(2);
    let team2 = team1.split_off(midpoint);
    (team1, team2)
}

/// Splits the roster uniformly at random without looking at skills.
///
/// The result is unevaluated: scores and balance are zero and mean
/// "not computed", not "perfectly balanced". Call [`Partition::evaluate`]
/// to score it afterwards.
pub fn shuffle_split<R: Rng + ?Sized>(roster: &[Player], rng: &mut R) -> Partition {
    let (team1, team2) = shuffled_halves(roster, rng);
    debug!(team1 = team1.len(), team2 = team2.len(), "shuffle split");
    Partition::unscored(team1, team2)
}
