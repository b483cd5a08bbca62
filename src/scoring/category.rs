//! The twelve scoring categories.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::EngineError;
use crate::dice::Face;

/// A scoring category.
///
/// The declaration order is the enumeration order used for tie-breaks in
/// `ScoreCard::best_available_hand`; `Ord` follows it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    // Upper section
    Aces,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    // Lower section
    ThreeOfAKind,
    FourOfAKind,
    FullHouse,
    FourStraight,
    FiveStraight,
    Yahtzee,
}

impl Category {
    /// Number of categories on a scorecard.
    pub const COUNT: usize = 12;

    /// Every category in enumeration order.
    pub const ALL: [Category; Category::COUNT] = [
        Category::Aces,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
        Category::ThreeOfAKind,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::FourStraight,
        Category::FiveStraight,
        Category::Yahtzee,
    ];

    /// The upper-section categories, Aces through Sixes.
    pub const UPPER: [Category; 6] = [
        Category::Aces,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
    ];

    /// Position in enumeration order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn is_upper(self) -> bool {
        self.face().is_some()
    }

    /// The face an upper-section category counts.
    #[must_use]
    pub fn face(self) -> Option<Face> {
        match self {
            Category::Aces => Some(1),
            Category::Twos => Some(2),
            Category::Threes => Some(3),
            Category::Fours => Some(4),
            Category::Fives => Some(5),
            Category::Sixes => Some(6),
            _ => None,
        }
    }

    /// The upper-section category counting `face`.
    #[must_use]
    pub fn for_face(face: Face) -> Option<Category> {
        Category::UPPER.get(usize::from(face).checked_sub(1)?).copied()
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Aces => "Aces",
            Category::Twos => "Twos",
            Category::Threes => "Threes",
            Category::Fours => "Fours",
            Category::Fives => "Fives",
            Category::Sixes => "Sixes",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::FourOfAKind => "Four of a Kind",
            Category::FullHouse => "Full House",
            Category::FourStraight => "Four Straight",
            Category::FiveStraight => "Five Straight",
            Category::Yahtzee => "Yahtzee",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Parses `"ThreeOfAKind"`, `"Three of a Kind"` or `"three_of_a_kind"`.
impl FromStr for Category {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Category::ALL
            .into_iter()
            .find(|c| normalize(c.display_name()) == wanted)
            .ok_or_else(|| EngineError::InvalidCategory(s.to_string()))
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
