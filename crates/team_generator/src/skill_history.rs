//! Skill-change records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use team_core::{Player, PlayerId, SkillLevel};

/// Old and new skill attributes of a player after an edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillChange {
    pub player_id: PlayerId,
    pub player_name: String,
    pub old_weight: i32,
    pub new_weight: i32,
    pub old_aim: SkillLevel,
    pub new_aim: SkillLevel,
    pub old_game_sense: SkillLevel,
    pub new_game_sense: SkillLevel,
    pub timestamp: DateTime<Utc>,
}

impl SkillChange {
    /// `None` when none of the skill attributes changed; name and avatar edits
    /// are not skill changes.
    pub fn between(old: &Player, new: &Player, timestamp: DateTime<Utc>) -> Option<Self> {
        let unchanged = old.weight == new.weight
            && old.aim == new.aim
            && old.game_sense == new.game_sense;
        if unchanged {
            return None;
        }

        Some(Self {
            player_id: old.id,
            player_name: old.name.clone(),
            old_weight: old.weight,
            new_weight: new.weight,
            old_aim: old.aim,
            new_aim: new.aim,
            old_game_sense: old.game_sense,
            new_game_sense: new.game_sense,
            timestamp,
        })
    }

    /// One line per changed attribute, e.g. `Weight: 5 -> 7`.
    pub fn describe(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if self.old_weight != self.new_weight {
            lines.push(format!("Weight: {} -> {}", self.old_weight, self.new_weight));
        }
        if self.old_aim != self.new_aim {
            lines.push(format!("Aim: {} -> {}", self.old_aim, self.new_aim));
        }
        if self.old_game_sense != self.new_game_sense {
            lines.push(format!("Game Sense: {} -> {}", self.old_game_sense, self.new_game_sense));
        }
        lines
    }
}

/// Newest first, as the history view lists them.
pub fn newest_first(changes: &mut [SkillChange]) {
    changes.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}
