//! User settings for team generation

use serde::{Deserialize, Serialize};
use std::path::Path;
use team_core::{BalanceMethod, Balancer, ShuffleBalancer, DEFAULT_ATTEMPTS, DEFAULT_ITERATIONS};

use crate::error::{read_file, GeneratorError, Result};

#[cfg(test)]
#[path = "settings_tests.rs"]
mod settings_tests;

/// Allowed range for the weight multiplier
pub const WEIGHT_MULTIPLIER_RANGE: std::ops::RangeInclusive<u32> = 1..=10;

/// Settings, loaded from TOML. Missing keys take their defaults.
///
/// ```toml
/// weight_multiplier = 3
/// method = "advanced"
/// show_score = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Multiplier applied to player weight in the skill score
    pub weight_multiplier: u32,
    /// Ignore skills entirely and split by shuffle
    pub use_only_name: bool,
    /// Show each player's score in team listings
    pub show_score: bool,
    pub method: BalanceMethod,
    /// Random splits tried by the basic method
    pub attempts: u32,
    /// Round cap of the advanced method
    pub iterations: u32,
}

/// Values set on the command line. Unset fields leave the settings untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    pub method: Option<BalanceMethod>,
    pub weight_multiplier: Option<u32>,
    pub use_only_name: bool,
    pub show_score: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            weight_multiplier: 2,
            use_only_name: false,
            show_score: false,
            method: BalanceMethod::Basic,
            attempts: DEFAULT_ATTEMPTS,
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

impl Settings {
    /// Load settings from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        Self::from_toml(&read_file(path)?)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(contents)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if !WEIGHT_MULTIPLIER_RANGE.contains(&self.weight_multiplier) {
            return Err(GeneratorError::InvalidSettings(format!(
                "weight_multiplier must be between {} and {}, got {}",
                WEIGHT_MULTIPLIER_RANGE.start(),
                WEIGHT_MULTIPLIER_RANGE.end(),
                self.weight_multiplier
            )));
        }
        Ok(())
    }

    /// Apply command line values on top of these settings, then validate.
    pub fn with_overrides(mut self, overrides: &SettingsOverrides) -> Result<Self> {
        if let Some(method) = overrides.method {
            self.method = method;
        }
        if let Some(weight_multiplier) = overrides.weight_multiplier {
            self.weight_multiplier = weight_multiplier;
        }
        self.use_only_name |= overrides.use_only_name;
        self.show_score |= overrides.show_score;
        self.validate()?;
        Ok(self)
    }

    /// Strategy these settings select.
    pub fn balancer(&self) -> Box<dyn Balancer> {
        if self.use_only_name {
            Box::new(ShuffleBalancer::names_only())
        } else {
            self.method
                .balancer(self.weight_multiplier, self.attempts, self.iterations)
        }
    }
}
