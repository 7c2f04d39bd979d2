//! Team generation driven by user settings

use chrono::{DateTime, Utc};
use rand::RngCore;
use team_core::{move_player, Partition, Player, PlayerId};
use tracing::{info, warn};

use crate::error::{GeneratorError, Result};
use crate::history::{MatchRecord, Winner};
use crate::settings::Settings;

#[cfg(test)]
#[path = "generator_tests.rs"]
mod generator_tests;

/// Smallest roster teams are generated for
pub const MIN_PLAYERS: usize = 2;

/// Generates, adjusts and records teams for one settings profile
pub struct TeamGenerator {
    settings: Settings,
}

impl TeamGenerator {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Split the roster with the strategy the settings select.
    pub fn generate(&self, roster: &[Player], rng: &mut dyn RngCore) -> Result<Partition> {
        if roster.len() < MIN_PLAYERS {
            warn!(players = roster.len(), "not enough players to generate teams");
            return Err(GeneratorError::NotEnoughPlayers {
                required: MIN_PLAYERS,
                found: roster.len(),
            });
        }

        let balancer = self.settings.balancer();
        let partition = balancer.balance(roster, rng);

        info!(
            method = balancer.name(),
            players = roster.len(),
            team1 = partition.team1.len(),
            team2 = partition.team2.len(),
            balance = partition.balance,
            "generated teams"
        );
        Ok(partition)
    }

    /// Move one player to the other team.
    pub fn swap(&self, partition: &Partition, player_id: PlayerId) -> Result<Partition> {
        let moved = move_player(partition, player_id)?;
        info!(player_id, balance = moved.balance, "moved player");
        Ok(moved)
    }

    /// Build the record for a finished match; the id is the timestamp in milliseconds.
    pub fn record(
        &self,
        partition: &Partition,
        map_name: &str,
        winner: Winner,
        timestamp: DateTime<Utc>,
    ) -> MatchRecord {
        let id = u64::try_from(timestamp.timestamp_millis()).unwrap_or_default();
        MatchRecord::from_partition(id, map_name, partition, winner, timestamp)
    }
}
