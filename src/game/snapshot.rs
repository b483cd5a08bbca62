//! Saved games.
//!
//! A snapshot holds everything that outlives a turn: the round counter,
//! every scorecard row and, optionally, where the dice generator stands.
//! Turns in progress are not saved; a restored game starts a fresh turn.

use serde::{Deserialize, Serialize};

use crate::core::{DiceRngState, EngineError, PlayerId, Result};
use crate::scoring::{Category, ScoreCard, ScoreCardEntry};

/// One scorecard row as saved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub category: Category,
    pub claimant: Option<PlayerId>,
    pub points: u32,
    /// Round the category was claimed in.
    pub round: u32,
}

/// Persistent game state.
///
/// ```
/// use yahtzee_duel::game::Snapshot;
/// use yahtzee_duel::scoring::ScoreCard;
///
/// let snapshot = Snapshot::capture(&ScoreCard::new(), 1, None);
/// let bytes = snapshot.to_bytes().unwrap();
/// assert_eq!(Snapshot::from_bytes(&bytes).unwrap(), snapshot);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub round: u32,
    pub entries: Vec<SnapshotEntry>,
    pub rng: Option<DiceRngState>,
}

impl Snapshot {
    /// Capture a scorecard and round counter.
    pub fn capture(card: &ScoreCard, round: u32, rng: Option<DiceRngState>) -> Self {
        let entries = card
            .entries()
            .map(|(category, entry)| SnapshotEntry {
                category,
                claimant: entry.claimant,
                points: entry.points,
                round: entry.round,
            })
            .collect();

        Self { round, entries, rng }
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode with bincode and validate.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let snapshot: Snapshot = bincode::deserialize(bytes)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Check the snapshot describes a real scorecard: each category exactly
    /// once, and open categories carrying no points.
    pub fn validate(&self) -> Result<()> {
        if self.entries.len() != Category::COUNT {
            return Err(EngineError::InvalidSnapshot(format!(
                "expected {} entries, found {}",
                Category::COUNT,
                self.entries.len()
            )));
        }

        let mut seen = [false; Category::COUNT];
        for entry in &self.entries {
            let slot = &mut seen[entry.category.index()];
            if *slot {
                return Err(EngineError::InvalidSnapshot(format!(
                    "category {} appears twice",
                    entry.category
                )));
            }
            *slot = true;

            if entry.claimant.is_none() && (entry.points != 0 || entry.round != 0) {
                return Err(EngineError::InvalidSnapshot(format!(
                    "open category {} carries points",
                    entry.category
                )));
            }
            if entry.claimant.is_some() && entry.round > self.round {
                return Err(EngineError::InvalidSnapshot(format!(
                    "category {} claimed in round {} after current round {}",
                    entry.category, entry.round, self.round
                )));
            }
        }
        Ok(())
    }

    /// Rebuild the scorecard.
    pub fn to_scorecard(&self) -> Result<ScoreCard> {
        self.validate()?;

        let mut entries = [ScoreCardEntry::default(); Category::COUNT];
        for entry in &self.entries {
            entries[entry.category.index()] = ScoreCardEntry {
                claimant: entry.claimant,
                points: entry.points,
                round: entry.round,
            };
        }
        Ok(ScoreCard::from_entries(entries))
    }

    /// Highest player index that claimed anything.
    pub fn max_claimant(&self) -> Option<PlayerId> {
        self.entries.iter().filter_map(|e| e.claimant).max()
    }
}
