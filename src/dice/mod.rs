//! Dice: faces, hands, multiset helpers and dice sources.

pub mod hand;
pub mod multiset;
pub mod source;

use smallvec::SmallVec;

/// A single die face, 1..=6.
pub type Face = u8;

/// A dice multiset. Never holds more than a hand.
pub type DiceVec = SmallVec<[Face; HAND_SIZE]>;

/// Dice in a hand.
pub const HAND_SIZE: usize = 5;

pub use hand::{FaceCounts, Hand};
pub use multiset::{
    is_sub_multiset, is_subset, longest_consecutive_run, multiset_difference,
    multiset_intersection,
};
pub use source::{DiceSource, ScriptedDice};
