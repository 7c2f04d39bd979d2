// =============================================================================
// Balancer trait, implemented by every partition strategy
// =============================================================================

use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::advanced::{balance_advanced, DEFAULT_ITERATIONS};
use crate::basic::{balance_basic, DEFAULT_ATTEMPTS};
use crate::error::BalanceError;
use crate::partition::Partition;
use crate::shuffle::shuffle_split;
use crate::types::Player;

#[cfg(test)]
#[path = "balancer_tests.rs"]
mod balancer_tests;

/// Trait that all team balancing strategies implement.
///
/// This allows the shell to swap between sampling, local search and plain
/// shuffling without knowing which one it holds.
pub trait Balancer {
    /// Split the roster into two teams.
    ///
    /// # Arguments
    /// * `roster` - Players to distribute; order does not matter
    /// * `rng` - Source of randomness for the shuffle(s)
    fn balance(&self, roster: &[Player], rng: &mut dyn RngCore) -> Partition;

    /// Short name for logs and reports
    fn name(&self) -> &str;
}

/// Best of N random parity splits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasicBalancer {
    pub weight_multiplier: u32,
    pub attempts: u32,
}

impl BasicBalancer {
    pub fn new(weight_multiplier: u32) -> Self {
        Self {
            weight_multiplier,
            attempts: DEFAULT_ATTEMPTS,
        }
    }

    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.attempts = attempts;
        self
    }
}

impl Balancer for BasicBalancer {
    fn balance(&self, roster: &[Player], rng: &mut dyn RngCore) -> Partition {
        balance_basic(roster, self.weight_multiplier, self.attempts, rng)
    }

    fn name(&self) -> &str {
        "basic"
    }
}

/// Random halves refined by hill climbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvancedBalancer {
    pub weight_multiplier: u32,
    pub iterations: u32,
}

impl AdvancedBalancer {
    pub fn new(weight_multiplier: u32) -> Self {
        Self {
            weight_multiplier,
            iterations: DEFAULT_ITERATIONS,
        }
    }

    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }
}

impl Balancer for AdvancedBalancer {
    fn balance(&self, roster: &[Player], rng: &mut dyn RngCore) -> Partition {
        balance_advanced(roster, self.weight_multiplier, self.iterations, rng)
    }

    fn name(&self) -> &str {
        "advanced"
    }
}

/// Plain shuffle; scored afterwards only when a multiplier is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShuffleBalancer {
    pub weight_multiplier: Option<u32>,
}

impl ShuffleBalancer {
    /// Skill-blind split, reported as "balance not evaluated".
    pub fn names_only() -> Self {
        Self {
            weight_multiplier: None,
        }
    }

    /// Random split that still reports team scores.
    pub fn scored(weight_multiplier: u32) -> Self {
        Self {
            weight_multiplier: Some(weight_multiplier),
        }
    }
}

impl Balancer for ShuffleBalancer {
    fn balance(&self, roster: &[Player], rng: &mut dyn RngCore) -> Partition {
        let partition = shuffle_split(roster, rng);
        match self.weight_multiplier {
            Some(weight_multiplier) => partition.evaluate(weight_multiplier),
            None => partition,
        }
    }

    fn name(&self) -> &str {
        match self.weight_multiplier {
            Some(_) => "random",
            None => "names-only",
        }
    }
}

/// Skill-aware balancing method selectable from settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceMethod {
    #[default]
    Basic,
    Advanced,
    Random,
}

impl BalanceMethod {
    /// Build the strategy for this method.
    ///
    /// `attempts` only affects `Basic` and `iterations` only `Advanced`.
    pub fn balancer(self, weight_multiplier: u32, attempts: u32, iterations: u32) -> Box<dyn Balancer> {
        match self {
            BalanceMethod::Basic => {
                Box::new(BasicBalancer::new(weight_multiplier).with_attempts(attempts))
            }
            BalanceMethod::Advanced => {
                Box::new(AdvancedBalancer::new(weight_multiplier).with_iterations(iterations))
            }
            BalanceMethod::Random => Box::new(ShuffleBalancer::scored(weight_multiplier)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BalanceMethod::Basic => "basic",
            BalanceMethod::Advanced => "advanced",
            BalanceMethod::Random => "random",
        }
    }
}

impl fmt::Display for BalanceMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BalanceMethod {
    type Err = BalanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Ok(BalanceMethod::Basic),
            "advanced" => Ok(BalanceMethod::Advanced),
            "random" => Ok(BalanceMethod::Random),
            _ => Err(BalanceError::UnknownMethod(s.to_string())),
        }
    }
}
