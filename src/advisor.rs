//! Human-readable hints built from the computer's own decisions.
//!
//! The advisor never has a strategy of its own: it runs the same
//! `RetentionStrategy` the computer plays with and describes the result.

use crate::core::Result;
use crate::dice::{hand::join_faces, Face, Hand};
use crate::scoring::{BestHand, Category, ScoreCard};
use crate::strategy::{Decision, DecisionObserver, NoopObserver, RetentionStrategy};

/// Advice for the keep/reroll step after the first or second roll.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RollAdvice {
    pub decision: Decision,
    /// Open categories the current dice score in, with their points.
    pub potential: PotentialPoints,
    /// Categories worth chasing from the current dice.
    pub pursue: Vec<Category>,
}

impl std::fmt::Display for RollAdvice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let best = &self.decision.best;
        match best.category {
            Some(category) => writeln!(
                f,
                "Your best category after this roll is: {} with {} points.",
                category, best.points
            )?,
            None => writeln!(f, "You have no available categories to choose from!")?,
        }
        writeln!(f, "{}", self.decision.intent)?;
        writeln!(f, "You should keep these dice: {}", join_faces(&self.decision.keep))?;
        write!(f, "You should reroll these dice: {}", join_faces(&self.decision.reroll))
    }
}

/// Advice once the dice are final: which category to claim.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimAdvice {
    pub best: BestHand,
}

impl std::fmt::Display for ClaimAdvice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.best.category {
            Some(category) => write!(
                f,
                "You should choose {} with {} points.",
                category, self.best.points
            ),
            None => write!(f, "There are no available categories to score."),
        }
    }
}

/// Points the dice would score in each open category.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PotentialPoints(pub Vec<(Category, u32)>);

impl std::fmt::Display for PotentialPoints {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Potential points in available categories:")?;
        for (category, points) in &self.0 {
            write!(f, "\n{}: {}", category, points)?;
        }
        Ok(())
    }
}

/// Explains what the computer would do with a human's dice.
///
/// ```
/// use yahtzee_duel::advisor::Advisor;
/// use yahtzee_duel::dice::Hand;
/// use yahtzee_duel::scoring::ScoreCard;
///
/// let advisor = Advisor::new();
/// let card = ScoreCard::new();
/// let advice = advisor.first_roll(&Hand::new(&[2, 2, 2, 2, 2]).unwrap(), &card);
/// assert!(advice.to_string().starts_with("Your best category after this roll is: Yahtzee"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Advisor<O = NoopObserver> {
    strategy: RetentionStrategy<O>,
}

impl Advisor<NoopObserver> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_strategy(RetentionStrategy::with_observer(NoopObserver))
    }
}

impl<O: DecisionObserver> Advisor<O> {
    pub fn with_strategy(strategy: RetentionStrategy<O>) -> Self {
        Self { strategy }
    }

    /// Hint after the opening roll.
    pub fn first_roll(&self, hand: &Hand, card: &ScoreCard) -> RollAdvice {
        let decision = self.strategy.decide_first_roll(hand, card);
        Self::describe(hand, card, decision)
    }

    /// Hint after a reroll, where `locked` dice can no longer move.
    pub fn second_roll(
        &self,
        just_rolled: &[Face],
        locked: &[Face],
        card: &ScoreCard,
    ) -> Result<RollAdvice> {
        let decision = self.strategy.decide_second_roll(just_rolled, locked, card)?;
        let hand = Hand::from_parts(locked, just_rolled)?;
        Ok(Self::describe(&hand, card, decision))
    }

    /// Hint once no rerolls remain.
    pub fn final_roll(&self, hand: &Hand, card: &ScoreCard) -> ClaimAdvice {
        ClaimAdvice {
            best: card.best_available_hand(hand),
        }
    }

    fn describe(hand: &Hand, card: &ScoreCard, decision: Decision) -> RollAdvice {
        RollAdvice {
            decision,
            potential: potential_points(hand, card),
            pursue: card.categories_to_pursue(hand),
        }
    }
}

/// Listing of what `hand` scores in each open category.
#[must_use]
pub fn potential_points(hand: &Hand, card: &ScoreCard) -> PotentialPoints {
    PotentialPoints(card.potential_points(hand))
}
