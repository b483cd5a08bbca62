//! Plans, intents and the decisions they become.

use serde::{Deserialize, Serialize};

use crate::dice::{hand::join_faces, DiceVec, Face};
use crate::scoring::{BestHand, Category};

/// What a plan is trying to achieve.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    /// Keep every die. Carries the category the hand would score in, if any.
    Stand(Option<Category>),
    /// Reroll toward these categories, most wanted first.
    Pursue(Vec<Category>),
    /// Reroll low dice for a higher sum in an already-made category.
    RaiseSum(Category),
    /// Reroll every die that does not show the target face.
    ChaseFace(Face),
    /// Nothing worth keeping.
    RerollAll,
}

impl Intent {
    #[must_use]
    pub fn is_stand(&self) -> bool {
        matches!(self, Intent::Stand(_))
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::Stand(Some(category)) => write!(f, "You should stand with {}.", category),
            Intent::Stand(None) => write!(f, "You should keep all dice."),
            Intent::Pursue(targets) => {
                let names: Vec<&str> = targets.iter().map(|c| c.display_name()).collect();
                write!(f, "You might pursue {}!", names.join(" | "))
            }
            Intent::RaiseSum(category) => write!(
                f,
                "You might reroll to try to get a higher die to add to {}!",
                category
            ),
            Intent::ChaseFace(face) => write!(
                f,
                "You might reroll the dice that are not {} to try to get a better hand!",
                face
            ),
            Intent::RerollAll => write!(f, "You might reroll all dice to try to get a better hand!"),
        }
    }
}

/// A candidate in the decision table: an intent and the dice it wants rerolled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plan {
    pub intent: Intent,
    /// Dice values to reroll, before any provenance filtering.
    pub reroll: DiceVec,
}

impl Plan {
    pub fn stand(category: Option<Category>) -> Self {
        Self {
            intent: Intent::Stand(category),
            reroll: DiceVec::new(),
        }
    }

    pub fn reroll(intent: Intent, reroll: DiceVec) -> Self {
        Self { intent, reroll }
    }

    /// Whether the plan keeps every die.
    #[must_use]
    pub fn is_stand(&self) -> bool {
        self.reroll.is_empty()
    }
}

/// The outcome of a keep/reroll decision.
///
/// `keep` and `reroll` split the decided hand exactly, counted with
/// multiplicity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub keep: DiceVec,
    pub reroll: DiceVec,
    pub intent: Intent,
    /// Best open category for the hand the decision was made on.
    pub best: BestHand,
}

impl Decision {
    /// Whether nothing is rerolled.
    #[must_use]
    pub fn stands(&self) -> bool {
        self.reroll.is_empty()
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (keep: {}; reroll: {})",
            self.intent,
            join_faces(&self.keep),
            join_faces(&self.reroll)
        )
    }
}
