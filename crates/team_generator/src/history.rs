//! Match records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use team_core::{Partition, Side};

use crate::error::{read_file, GeneratorError, Result};

/// Winning side of a recorded match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    #[serde(rename = "Team 1")]
    Team1,
    #[serde(rename = "Team 2")]
    Team2,
}

impl Winner {
    pub fn side(self) -> Side {
        match self {
            Winner::Team1 => Side::Team1,
            Winner::Team2 => Side::Team2,
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Team1 => f.write_str("Team 1"),
            Winner::Team2 => f.write_str("Team 2"),
        }
    }
}

impl FromStr for Winner {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "Team 1" => Ok(Winner::Team1),
            "Team 2" => Ok(Winner::Team2),
            other => Err(GeneratorError::InvalidWinner(other.to_string())),
        }
    }
}

/// A played match, with teams stored as comma-separated names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub id: u64,
    pub timestamp: DateTime<Utc>,
    pub map_name: String,
    pub team1: String,
    pub team2: String,
    /// e.g. `Team 1: 42, Team 2: 40`
    pub team_scores: String,
    pub winner: Winner,
}

impl MatchRecord {
    pub fn from_partition(
        id: u64,
        map_name: &str,
        partition: &Partition,
        winner: Winner,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            timestamp,
            map_name: map_name.to_string(),
            team1: join_names(partition, Side::Team1),
            team2: join_names(partition, Side::Team2),
            team_scores: format!(
                "Team 1: {}, Team 2: {}",
                partition.team1_score, partition.team2_score
            ),
            winner,
        }
    }

    pub fn team1_players(&self) -> Vec<&str> {
        split_names(&self.team1)
    }

    pub fn team2_players(&self) -> Vec<&str> {
        split_names(&self.team2)
    }

    pub fn players(&self, side: Side) -> Vec<&str> {
        match side {
            Side::Team1 => self.team1_players(),
            Side::Team2 => self.team2_players(),
        }
    }
}

/// Load exported match records from a JSON file
pub fn load_matches(path: &Path) -> Result<Vec<MatchRecord>> {
    let contents = read_file(path)?;
    Ok(serde_json::from_str(&contents)?)
}

fn join_names(partition: &Partition, side: Side) -> String {
    partition
        .team(side)
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn split_names(joined: &str) -> Vec<&str> {
    joined
        .split(", ")
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect()
}
