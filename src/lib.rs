//! # yahtzee-duel
//!
//! Scoring and dice-retention engine for a two-player dice game in which
//! both players race to claim twelve categories on one shared scorecard.
//!
//! ## Design
//!
//! 1. **Owned state**: the `ScoreCard` is a plain value passed to whoever
//!    needs it. `claim` is its only mutation.
//!
//! 2. **One decision table**: the computer's keep/reroll choices after the
//!    first and second roll come from the same prioritised table. The second
//!    roll only adds a provenance filter so locked dice are never rerolled.
//!
//! 3. **Injected dice**: randomness comes from a `DiceSource`. `DiceRng` is
//!    a seeded ChaCha8 generator; `ScriptedDice` replays fixed faces.
//!
//! 4. **Observable, not noisy**: decisions report through a
//!    `DecisionObserver`. The default one emits `tracing` events.
//!
//! ## Modules
//!
//! - `core`: players, dice RNG, configuration, errors
//! - `dice`: hands, face tallies, multiset helpers, dice sources
//! - `scoring`: categories, point rules, the scorecard
//! - `strategy`: the retention strategy and its observers
//! - `advisor`: hints for human players from the same strategy
//! - `game`: turns, the game driver, snapshots, a thread-shared card

pub mod advisor;
pub mod core;
pub mod dice;
pub mod game;
pub mod scoring;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{
    DiceRng, DiceRngState, EngineError, GameConfig, PlayerId, PlayerMap, Result,
    MAX_ROLLS_PER_TURN,
};

pub use crate::dice::{DiceSource, DiceVec, Face, FaceCounts, Hand, ScriptedDice, HAND_SIZE};

pub use crate::scoring::{points_for, BestHand, Category, ScoreCard, ScoreCardEntry};

pub use crate::strategy::{
    Decision, DecisionObserver, Intent, NoopObserver, RetentionStrategy, TracingObserver,
};

pub use crate::advisor::{Advisor, ClaimAdvice, PotentialPoints, RollAdvice};

pub use crate::game::{
    Game, GameBuilder, GameResult, SharedScoreCard, Snapshot, SnapshotEntry, Turn, TurnOutcome,
};
