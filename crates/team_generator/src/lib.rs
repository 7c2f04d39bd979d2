//! Team Generator for recreational matches
//!
//! This crate provides infrastructure for:
//! - Loading rosters and settings
//! - Generating two teams with the `team_core` strategies
//! - Recording match results and skill changes
//! - Computing per-player and partner-synergy metrics from past matches
//!
//! # Usage
//!
//! ```bash
//! # Split a roster with the hill-climbing method
//! cargo run -p team_generator -- generate roster.json --method advanced
//!
//! # Show win rates and synergy from exported matches
//! cargo run -p team_generator -- stats matches.json --search alice
//! ```

mod error;
mod generator;
mod history;
mod maps;
mod metrics;
mod report;
mod roster;
mod settings;
mod skill_history;

pub use error::*;
pub use generator::*;
pub use history::*;
pub use maps::*;
pub use metrics::*;
pub use report::*;
pub use roster::*;
pub use settings::*;
pub use skill_history::*;
