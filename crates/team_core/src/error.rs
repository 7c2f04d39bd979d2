//! Error types for the balancing core.

use thiserror::Error;

use crate::types::PlayerId;

/// Errors surfaced by scoring inputs, swaps and method selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BalanceError {
    /// A skill label that is not one of the three recognized levels.
    #[error("invalid skill level '{0}', expected weak, average or strong")]
    InvalidSkillLevel(String),

    /// A manual move named a player that is on neither team.
    #[error("player {id} is not on either team")]
    PlayerNotFound {
        /// Id that was looked up.
        id: PlayerId,
    },

    /// A balancing method name that no strategy answers to.
    #[error("unknown balancing method '{0}', expected basic, advanced or random")]
    UnknownMethod(String),
}

pub type BalanceResult<T> = Result<T, BalanceError>;
