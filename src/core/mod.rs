//! Core engine types: players, dice RNG, configuration, errors.
//!
//! These building blocks carry no game rules; scoring and strategy live in
//! their own modules.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{GameConfig, MAX_ROLLS_PER_TURN};
pub use error::{EngineError, Result};
pub use player::{PlayerId, PlayerMap};
pub use rng::{DiceRng, DiceRngState};
