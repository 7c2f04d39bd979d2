use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BalanceError;

pub type PlayerId = u32;

/// Ordinal rating used for both aim and game sense.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SkillLevel {
    Weak,
    Average,
    Strong,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 3] = [SkillLevel::Weak, SkillLevel::Average, SkillLevel::Strong];

    /// Points this level contributes to a skill score.
    pub fn level(self) -> i64 {
        match self {
            SkillLevel::Weak => 1,
            SkillLevel::Average => 2,
            SkillLevel::Strong => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SkillLevel::Weak => "weak",
            SkillLevel::Average => "average",
            SkillLevel::Strong => "strong",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts the English labels and the German ones older rosters were saved with.
impl FromStr for SkillLevel {
    type Err = BalanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weak" | "schwach" => Ok(SkillLevel::Weak),
            "average" | "durchschnittlich" => Ok(SkillLevel::Average),
            "strong" | "stark" => Ok(SkillLevel::Strong),
            _ => Err(BalanceError::InvalidSkillLevel(s.to_string())),
        }
    }
}

impl TryFrom<String> for SkillLevel {
    type Error = BalanceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SkillLevel> for String {
    fn from(level: SkillLevel) -> Self {
        level.label().to_string()
    }
}

/// A rostered player as the balancer sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Subjective overall strength, 1-10 by convention
    pub weight: i32,
    pub aim: SkillLevel,
    pub game_sense: SkillLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Player {
    pub fn new<S: Into<String>>(
        id: PlayerId,
        name: S,
        weight: i32,
        aim: SkillLevel,
        game_sense: SkillLevel,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            weight,
            aim,
            game_sense,
            avatar: None,
        }
    }

    /// Builds a player from free-form skill labels, as entered in a form.
    pub fn from_labels<S: Into<String>>(
        id: PlayerId,
        name: S,
        weight: i32,
        aim: &str,
        game_sense: &str,
    ) -> Result<Self, BalanceError> {
        Ok(Self::new(id, name, weight, aim.parse()?, game_sense.parse()?))
    }

    pub fn with_avatar<S: Into<String>>(mut self, avatar: S) -> Self {
        self.avatar = Some(avatar.into());
        self
    }
}
