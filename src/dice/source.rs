//! Where dice come from.
//!
//! The engine never owns randomness: a `DiceSource` is handed in by the
//! caller. `DiceRng` is the seeded default; `ScriptedDice` replays a fixed
//! sequence so games and tests can be reproduced face for face.

use std::collections::VecDeque;

use super::{DiceVec, Face};
use crate::core::DiceRng;

/// Produces independent dice rolls in 1..=6.
pub trait DiceSource {
    /// Roll `n` dice.
    fn roll(&mut self, n: usize) -> DiceVec;
}

impl DiceSource for DiceRng {
    fn roll(&mut self, n: usize) -> DiceVec {
        (0..n).map(|_| self.roll_die()).collect()
    }
}

/// Replays a predetermined sequence of faces.
///
/// ```
/// use yahtzee_duel::dice::{DiceSource, ScriptedDice};
///
/// let mut dice = ScriptedDice::new([6, 6, 6, 6, 6, 1]);
/// assert_eq!(dice.roll(5).as_slice(), &[6, 6, 6, 6, 6]);
/// assert_eq!(dice.remaining(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedDice {
    faces: VecDeque<Face>,
}

impl ScriptedDice {
    /// Create a script from faces in the order they will be rolled.
    pub fn new(faces: impl IntoIterator<Item = Face>) -> Self {
        let faces: VecDeque<Face> = faces.into_iter().collect();
        assert!(
            faces.iter().all(|f| (1..=6).contains(f)),
            "Scripted faces must be 1-6"
        );
        Self { faces }
    }

    /// Faces left in the script.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.faces.len()
    }
}

impl DiceSource for ScriptedDice {
    /// Hands back fewer than `n` dice once the script runs out.
    fn roll(&mut self, n: usize) -> DiceVec {
        (0..n).map_while(|_| self.faces.pop_front()).collect()
    }
}
