//! Errors for roster, settings and match handling.

use std::path::PathBuf;
use team_core::BalanceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings: {0}")]
    Settings(#[from] toml::de::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    #[error("invalid roster: {0}")]
    InvalidRoster(String),

    #[error("at least {required} players are required to generate teams, got {found}")]
    NotEnoughPlayers { required: usize, found: usize },

    #[error("winner must be 'Team 1' or 'Team 2', got '{0}'")]
    InvalidWinner(String),

    #[error(transparent)]
    Balance(#[from] BalanceError),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Reads a whole file, keeping the path in the error.
pub(crate) fn read_file(path: &std::path::Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| GeneratorError::Io {
        path: path.to_path_buf(),
        source,
    })
}
