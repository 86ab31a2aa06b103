//! Core types: RNG, configuration, errors.
//!
//! These are shared by every other module and depend on nothing
//! game-specific except the card id and mode used in error messages.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{GameConfig, Thresholds};
pub use error::{GuessError, Result};
pub use rng::{GameRng, GameRngState};
