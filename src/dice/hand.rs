//! A validated hand of five dice and its face tally.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{DiceVec, Face, HAND_SIZE};
use crate::core::{EngineError, Result};

/// Exactly five dice, each in 1..=6.
///
/// Order is irrelevant to scoring but preserved, so a hand built from
/// `locked` then `just_rolled` dice still reads the way it was rolled.
///
/// ```
/// use yahtzee_duel::dice::Hand;
///
/// let hand = Hand::new(&[3, 3, 3, 2, 2]).unwrap();
/// assert_eq!(hand.sum(), 13);
/// assert!(Hand::new(&[1, 2, 3]).is_err());
/// assert!(Hand::new(&[0, 2, 3, 4, 5]).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Face; HAND_SIZE]")]
pub struct Hand([Face; HAND_SIZE]);

impl Hand {
    /// Validate and build a hand.
    pub fn new(faces: &[Face]) -> Result<Self> {
        if faces.len() != HAND_SIZE {
            return Err(EngineError::MalformedDiceSet(format!(
                "expected {} dice, got {}",
                HAND_SIZE,
                faces.len()
            )));
        }
        if let Some(bad) = faces.iter().find(|f| !(1..=6).contains(*f)) {
            return Err(EngineError::MalformedDiceSet(format!(
                "face {} is outside 1-6",
                bad
            )));
        }

        let mut dice = [0; HAND_SIZE];
        dice.copy_from_slice(faces);
        Ok(Self(dice))
    }

    /// Build a hand from the two partitions of an in-progress turn.
    pub fn from_parts(locked: &[Face], just_rolled: &[Face]) -> Result<Self> {
        let all: DiceVec = locked.iter().chain(just_rolled).copied().collect();
        Self::new(&all)
    }

    /// The dice in roll order.
    #[must_use]
    pub fn faces(&self) -> &[Face; HAND_SIZE] {
        &self.0
    }

    /// The dice in ascending order.
    #[must_use]
    pub fn sorted(&self) -> [Face; HAND_SIZE] {
        let mut dice = self.0;
        dice.sort_unstable();
        dice
    }

    /// Distinct faces, ascending.
    #[must_use]
    pub fn distinct(&self) -> DiceVec {
        let mut faces: DiceVec = SmallVec::from_slice(&self.sorted());
        faces.dedup();
        faces
    }

    /// Sum of all five dice.
    #[must_use]
    pub fn sum(&self) -> u32 {
        self.0.iter().map(|&f| u32::from(f)).sum()
    }

    /// Count of each face.
    #[must_use]
    pub fn counts(&self) -> FaceCounts {
        FaceCounts::of(&self.0)
    }
}

impl TryFrom<&[Face]> for Hand {
    type Error = EngineError;

    fn try_from(faces: &[Face]) -> Result<Self> {
        Self::new(faces)
    }
}

impl TryFrom<[Face; HAND_SIZE]> for Hand {
    type Error = EngineError;

    fn try_from(faces: [Face; HAND_SIZE]) -> Result<Self> {
        Self::new(&faces)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", join_faces(&self.0))
    }
}

/// Render faces space-separated, `None` when empty.
pub(crate) fn join_faces(faces: &[Face]) -> String {
    if faces.is_empty() {
        return "None".to_string();
    }
    faces
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// How many times each face 1..=6 occurs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FaceCounts([u8; 7]);

impl FaceCounts {
    /// Tally a slice of faces. Out-of-range faces are ignored.
    #[must_use]
    pub fn of(faces: &[Face]) -> Self {
        let mut counts = [0u8; 7];
        for &face in faces {
            if (1..=6).contains(&face) {
                counts[face as usize] += 1;
            }
        }
        Self(counts)
    }

    /// Occurrences of `face`.
    #[must_use]
    pub fn count(&self, face: Face) -> u8 {
        self.0.get(face as usize).copied().unwrap_or(0)
    }

    /// Largest count of any face.
    #[must_use]
    pub fn max_count(&self) -> u8 {
        self.0[1..].iter().copied().max().unwrap_or(0)
    }

    /// Faces occurring at least `n` times, ascending.
    #[must_use]
    pub fn faces_with_at_least(&self, n: u8) -> DiceVec {
        (1..=6).filter(|&f| self.count(f) >= n && n > 0).collect()
    }

    /// Faces occurring exactly `n` times, ascending.
    #[must_use]
    pub fn faces_with_exactly(&self, n: u8) -> DiceVec {
        (1..=6).filter(|&f| n > 0 && self.count(f) == n).collect()
    }

    /// Highest face occurring at least `n` times.
    #[must_use]
    pub fn face_with_at_least(&self, n: u8) -> Option<Face> {
        self.faces_with_at_least(n).last().copied()
    }
}
