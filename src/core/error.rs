//! Engine error types.
//!
//! Every error is local and recoverable: the caller (UI, CLI, server) decides
//! how to surface it. Nothing here is fatal to the process.

use thiserror::Error;

use super::PlayerId;
use crate::scoring::Category;

/// Errors surfaced by the scoring engine, the turn state and persistence.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid category: {0:?}")]
    InvalidCategory(String),

    #[error("category already claimed: {0}")]
    CategoryAlreadyClaimed(Category),

    #[error("malformed dice set: {0}")]
    MalformedDiceSet(String),

    #[error("roll limit reached ({max} rolls per turn)")]
    RollLimitReached { max: u8 },

    #[error("die {0} is locked and cannot be rerolled")]
    LockedDieRerolled(u8),

    #[error("{0} is not in this game")]
    UnknownPlayer(PlayerId),

    #[error("invalid game config: {0}")]
    InvalidConfig(String),

    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("snapshot codec error: {0}")]
    Codec(#[from] bincode::Error),
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, EngineError>;
