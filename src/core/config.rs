//! Game configuration.
//!
//! The engine itself is stateless apart from the scorecard; `GameConfig`
//! only shapes the driver in `game`: how many players share the card, how
//! many rolls a turn allows and which seed drives the dice.

use serde::{Deserialize, Serialize};

use super::{EngineError, Result};

/// Most rolls a turn can take.
pub const MAX_ROLLS_PER_TURN: u8 = 3;

/// Complete game configuration.
///
/// Deserializing checks the same ranges as the constructors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawConfig")]
pub struct GameConfig {
    /// Number of players sharing the scorecard.
    pub player_count: usize,

    /// Rolls allowed per turn (1..=3).
    pub max_rolls: u8,

    /// Seed for the dice generator.
    /// Same seed produces the same game when the same choices are made.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 2,
            max_rolls: MAX_ROLLS_PER_TURN,
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Create a configuration for `player_count` players.
    pub fn new(player_count: usize) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        Self {
            player_count,
            ..Self::default()
        }
    }

    /// Set the number of rolls per turn.
    #[must_use]
    pub fn with_max_rolls(mut self, max_rolls: u8) -> Self {
        assert!(
            (1..=MAX_ROLLS_PER_TURN).contains(&max_rolls),
            "max_rolls must be 1-3"
        );
        self.max_rolls = max_rolls;
        self
    }

    /// Set the dice seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check the player count (1..=255) and rolls per turn (1..=3).
    pub fn validate(&self) -> Result<()> {
        if !(1..=255).contains(&self.player_count) {
            return Err(EngineError::InvalidConfig(format!(
                "player_count {} outside 1-255",
                self.player_count
            )));
        }
        if !(1..=MAX_ROLLS_PER_TURN).contains(&self.max_rolls) {
            return Err(EngineError::InvalidConfig(format!(
                "max_rolls {} outside 1-{}",
                self.max_rolls, MAX_ROLLS_PER_TURN
            )));
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct RawConfig {
    player_count: usize,
    max_rolls: u8,
    seed: u64,
}

impl TryFrom<RawConfig> for GameConfig {
    type Error = EngineError;

    fn try_from(raw: RawConfig) -> Result<Self> {
        let config = Self {
            player_count: raw.player_count,
            max_rolls: raw.max_rolls,
            seed: raw.seed,
        };
        config.validate()?;
        Ok(config)
    }
}
