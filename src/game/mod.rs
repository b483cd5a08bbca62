//! Playing the game: turns, the driver, saved games and a thread-shared card.

pub mod driver;
pub mod shared;
pub mod snapshot;
pub mod turn;

pub use driver::{Game, GameBuilder, GameResult, TurnOutcome};
pub use shared::SharedScoreCard;
pub use snapshot::{Snapshot, SnapshotEntry};
pub use turn::Turn;
