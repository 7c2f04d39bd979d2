//! Team balancing core
//!
//! This crate provides:
//! - Skill scoring for players rated by weight, aim and game sense
//! - Three ways of splitting a roster into two teams (basic, advanced, shuffle)
//! - Manual moves of a single player between the generated teams
//!
//! Every strategy takes the random generator as a parameter, so callers pick
//! `rand::thread_rng()` for play and a seeded `StdRng` for reproducible runs.
//!
//! # Usage
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use team_core::{balance_advanced, move_player, Player, SkillLevel, DEFAULT_ITERATIONS};
//!
//! let roster = vec![
//!     Player::new(1, "alice", 7, SkillLevel::Strong, SkillLevel::Average),
//!     Player::new(2, "bob", 4, SkillLevel::Weak, SkillLevel::Strong),
//!     Player::new(3, "carol", 5, SkillLevel::Average, SkillLevel::Average),
//!     Player::new(4, "dave", 6, SkillLevel::Average, SkillLevel::Weak),
//! ];
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let teams = balance_advanced(&roster, 2, DEFAULT_ITERATIONS, &mut rng);
//! assert_eq!(teams.len(), 4);
//!
//! let moved = move_player(&teams, 1).unwrap();
//! assert_eq!(moved.len(), 4);
//! ```

mod advanced;
mod balancer;
mod basic;
mod error;
mod partition;
mod shuffle;
mod skill;
mod types;

pub use advanced::*;
pub use balancer::*;
pub use basic::*;
pub use error::*;
pub use partition::*;
pub use shuffle::*;
pub use skill::*;
pub use types::*;
