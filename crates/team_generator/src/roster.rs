//! Validated player roster

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;
use team_core::{Player, PlayerId};

use crate::error::{read_file, GeneratorError, Result};
use crate::skill_history::SkillChange;

#[cfg(test)]
#[path = "roster_tests.rs"]
mod roster_tests;

/// Bounds the entry form puts on a player's weight
pub const MIN_WEIGHT: i32 = 1;
pub const MAX_WEIGHT: i32 = 10;

/// Players eligible for team generation.
///
/// Names are unique case-insensitively and ids are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Build a roster from a non-empty player list
    pub fn new(players: Vec<Player>) -> Result<Self> {
        if players.is_empty() {
            return Err(GeneratorError::InvalidRoster("roster has no players".to_string()));
        }
        let mut roster = Roster::default();
        for player in players {
            roster.add(player)?;
        }
        Ok(roster)
    }

    /// Parse a JSON array of players
    pub fn from_json(contents: &str) -> Result<Self> {
        let players: Vec<Player> = serde_json::from_str(contents)?;
        Self::new(players)
    }

    /// Load a roster from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        Self::from_json(&read_file(path)?)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Player> {
        let name = name.trim().to_lowercase();
        self.players.iter().find(|p| p.name.to_lowercase() == name)
    }

    /// Players in alphabetical order, as listed on the management page.
    pub fn sorted_by_name(&self) -> Vec<&Player> {
        let mut players: Vec<&Player> = self.players.iter().collect();
        players.sort_by_key(|p| p.name.to_lowercase());
        players
    }

    pub fn add(&mut self, player: Player) -> Result<()> {
        check_player(&player)?;
        if self.get(player.id).is_some() {
            return Err(GeneratorError::InvalidRoster(format!(
                "duplicate player id {}",
                player.id
            )));
        }
        if self.find_by_name(&player.name).is_some() {
            return Err(GeneratorError::InvalidRoster(format!(
                "player with name '{}' already exists",
                player.name
            )));
        }
        self.players.push(player);
        Ok(())
    }

    /// Replace a player's record.
    ///
    /// Returns the skill change when weight, aim or game sense differ from the
    /// stored record.
    pub fn update(&mut self, player: Player, timestamp: DateTime<Utc>) -> Result<Option<SkillChange>> {
        check_player(&player)?;
        let name_taken = self
            .find_by_name(&player.name)
            .is_some_and(|existing| existing.id != player.id);
        if name_taken {
            return Err(GeneratorError::InvalidRoster(format!(
                "player with name '{}' already exists",
                player.name
            )));
        }

        let slot = self
            .players
            .iter_mut()
            .find(|p| p.id == player.id)
            .ok_or_else(|| GeneratorError::InvalidRoster(format!("player {} not found", player.id)))?;

        let change = SkillChange::between(slot, &player, timestamp);
        *slot = player;
        Ok(change)
    }

    pub fn remove(&mut self, id: PlayerId) -> Option<Player> {
        let index = self.players.iter().position(|p| p.id == id)?;
        Some(self.players.remove(index))
    }
}

fn check_player(player: &Player) -> Result<()> {
    if player.name.trim().is_empty() {
        return Err(GeneratorError::InvalidRoster(format!(
            "player {} has an empty name",
            player.id
        )));
    }
    if !(MIN_WEIGHT..=MAX_WEIGHT).contains(&player.weight) {
        return Err(GeneratorError::InvalidRoster(format!(
            "weight of '{}' must be between {} and {}, got {}",
            player.name, MIN_WEIGHT, MAX_WEIGHT, player.weight
        )));
    }
    Ok(())
}
