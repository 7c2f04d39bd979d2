//! The two-team split produced by every strategy.

use serde::{Deserialize, Serialize};

use crate::error::BalanceError;
use crate::skill::team_score;
use crate::types::{Player, PlayerId};

#[cfg(test)]
#[path = "partition_tests.rs"]
mod partition_tests;

/// One of the two generated teams.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Team1,
    Team2,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Team1 => Side::Team2,
            Side::Team2 => Side::Team1,
        }
    }
}

/// Two disjoint teams covering the whole roster, with their scores.
///
/// Equality ignores the order of players inside a team.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partition {
    pub team1: Vec<Player>,
    pub team2: Vec<Player>,
    pub team1_score: i64,
    pub team2_score: i64,
    /// Absolute difference of the two team scores
    pub balance: i64,
    /// Multiplier the scores were computed with (None = balance not evaluated)
    pub weight_multiplier: Option<u32>,
}

impl Partition {
    /// Teams with all scores left at zero.
    pub fn unscored(team1: Vec<Player>, team2: Vec<Player>) -> Self {
        Self {
            team1,
            team2,
            team1_score: 0,
            team2_score: 0,
            balance: 0,
            weight_multiplier: None,
        }
    }

    pub fn scored(team1: Vec<Player>, team2: Vec<Player>, weight_multiplier: u32) -> Self {
        let team1_score = team_score(&team1, weight_multiplier);
        let team2_score = team_score(&team2, weight_multiplier);
        Self {
            team1,
            team2,
            team1_score,
            team2_score,
            balance: (team1_score - team2_score).abs(),
            weight_multiplier: Some(weight_multiplier),
        }
    }

    /// Scores this partition (again) with the given multiplier.
    pub fn evaluate(self, weight_multiplier: u32) -> Self {
        Self::scored(self.team1, self.team2, weight_multiplier)
    }

    pub fn is_evaluated(&self) -> bool {
        self.weight_multiplier.is_some()
    }

    /// Total number of players across both teams.
    pub fn len(&self) -> usize {
        self.team1.len() + self.team2.len()
    }

    pub fn is_empty(&self) -> bool {
        self.team1.is_empty() && self.team2.is_empty()
    }

    pub fn team(&self, side: Side) -> &[Player] {
        match side {
            Side::Team1 => &self.team1,
            Side::Team2 => &self.team2,
        }
    }

    pub fn side_of(&self, player_id: PlayerId) -> Option<Side> {
        if self.team1.iter().any(|p| p.id == player_id) {
            Some(Side::Team1)
        } else if self.team2.iter().any(|p| p.id == player_id) {
            Some(Side::Team2)
        } else {
            None
        }
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.team1.iter().chain(self.team2.iter())
    }
}

impl PartialEq for Partition {
    fn eq(&self, other: &Self) -> bool {
        self.team1_score == other.team1_score
            && self.team2_score == other.team2_score
            && self.balance == other.balance
            && self.weight_multiplier == other.weight_multiplier
            && same_members(&self.team1, &other.team1)
            && same_members(&self.team2, &other.team2)
    }
}

impl Eq for Partition {}

fn same_members(a: &[Player], b: &[Player]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut a: Vec<&Player> = a.iter().collect();
    let mut b: Vec<&Player> = b.iter().collect();
    a.sort_by_key(|p| p.id);
    b.sort_by_key(|p| p.id);
    a == b
}

/// Moves one player to the other team and rescores both sides.
///
/// The player is appended to the end of the receiving team. A partition that
/// was never evaluated stays unevaluated.
///
/// # Errors
/// `BalanceError::PlayerNotFound` when the id is on neither team, which
/// usually means the caller is holding a stale partition.
pub fn move_player(partition: &Partition, player_id: PlayerId) -> Result<Partition, BalanceError> {
    let mut team1 = partition.team1.clone();
    let mut team2 = partition.team2.clone();

    if let Some(index) = team1.iter().position(|p| p.id == player_id) {
        let player = team1.remove(index);
        team2.push(player);
    } else if let Some(index) = team2.iter().position(|p| p.id == player_id) {
        let player = team2.remove(index);
        team1.push(player);
    } else {
        return Err(BalanceError::PlayerNotFound { id: player_id });
    }

    Ok(match partition.weight_multiplier {
        Some(weight_multiplier) => Partition::scored(team1, team2, weight_multiplier),
        None => Partition::unscored(team1, team2),
    })
}
