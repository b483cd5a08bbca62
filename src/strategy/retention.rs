//! The computer player's keep/reroll strategy.

use super::observer::{DecisionObserver, TracingObserver};
use super::plan::{Decision, Intent};
use super::provenance;
use super::table::candidate_plans;
use crate::core::Result;
use crate::dice::{multiset_difference, DiceVec, Face, Hand};
use crate::scoring::ScoreCard;

/// Decides which dice to keep and which to reroll.
///
/// Both rolls of a turn go through the same decision table; they differ
/// only in the provenance filter applied to each candidate's rerolls.
///
/// ```
/// use yahtzee_duel::dice::Hand;
/// use yahtzee_duel::scoring::ScoreCard;
/// use yahtzee_duel::strategy::RetentionStrategy;
///
/// let strategy = RetentionStrategy::new();
/// let card = ScoreCard::new();
///
/// let decision = strategy.decide_first_roll(&Hand::new(&[5, 5, 5, 5, 2]).unwrap(), &card);
/// assert_eq!(decision.reroll.as_slice(), &[2]);
///
/// // The 2 was locked earlier, so it cannot be rerolled now
/// let decision = strategy.decide_second_roll(&[5, 5, 5, 5], &[2], &card).unwrap();
/// assert!(decision.reroll.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct RetentionStrategy<O = TracingObserver> {
    observer: O,
}

impl RetentionStrategy<TracingObserver> {
    /// A strategy that reports through `tracing`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            observer: TracingObserver,
        }
    }
}

impl<O: DecisionObserver> RetentionStrategy<O> {
    pub fn with_observer(observer: O) -> Self {
        Self { observer }
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Decide on five freshly rolled dice. Any die may be rerolled.
    pub fn decide_first_roll(&self, hand: &Hand, card: &ScoreCard) -> Decision {
        self.decide_with(hand, card, provenance::any_die())
    }

    /// Decide after a reroll. Only dice in `just_rolled` may be rerolled;
    /// `locked` dice are always kept.
    ///
    /// Fails with `MalformedDiceSet` unless the two sets make five valid dice.
    pub fn decide_second_roll(
        &self,
        just_rolled: &[Face],
        locked: &[Face],
        card: &ScoreCard,
    ) -> Result<Decision> {
        let hand = Hand::from_parts(locked, just_rolled)?;
        Ok(self.decide_with(&hand, card, provenance::just_rolled(just_rolled)))
    }

    /// Walk the decision table for `hand`, taking the first plan with at
    /// least one reroll that `allowed` lets through. A plan that rerolls
    /// nothing always qualifies, and the table always ends with one.
    pub fn decide_with<F>(&self, hand: &Hand, card: &ScoreCard, allowed: F) -> Decision
    where
        F: Fn(&[Face]) -> DiceVec,
    {
        let best = card.best_available_hand(hand);
        self.observer.best_hand(hand, &best);

        let decision = candidate_plans(hand, card, best)
            .into_iter()
            .find_map(|plan| {
                let reroll = allowed(&plan.reroll);
                if !plan.is_stand() && reroll.is_empty() {
                    self.observer.plan_skipped(&plan);
                    return None;
                }
                Some(Decision {
                    keep: multiset_difference(hand.faces(), &reroll),
                    reroll,
                    intent: plan.intent,
                    best,
                })
            })
            .unwrap_or_else(|| Decision {
                keep: hand.faces().iter().copied().collect(),
                reroll: DiceVec::new(),
                intent: Intent::Stand(best.category),
                best,
            });

        self.observer.decided(hand, &decision);
        decision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;
    use crate::scoring::Category;
    use crate::strategy::{ObservedEvent, RecordingObserver};

    fn hand(faces: [u8; 5]) -> Hand {
        Hand::new(&faces).unwrap()
    }

    #[test]
    fn test_first_roll_partitions_hand() {
        let strategy = RetentionStrategy::with_observer(crate::strategy::NoopObserver);
        let card = ScoreCard::new();
        let h = hand([6, 6, 1, 3, 5]);
        let decision = strategy.decide_first_roll(&h, &card);

        let mut all: Vec<u8> = decision.keep.iter().chain(&decision.reroll).copied().collect();
        all.sort_unstable();
        assert_eq!(all, h.sorted().to_vec());
        assert_eq!(decision.keep.as_slice(), &[6, 6]);
    }

    #[test]
    fn test_second_roll_never_rerolls_locked() {
        let strategy = RetentionStrategy::new();
        let card = ScoreCard::new();
        // Locked 6,6 then rolled 1,3,5: the set plan wants 1,3,5, all fresh
        let decision = strategy.decide_second_roll(&[1, 3, 5], &[6, 6], &card).unwrap();
        assert_eq!(decision.reroll.as_slice(), &[1, 3, 5]);

        // Locked 1,3,5 then rolled 6,6: the set plan wants 1,3,5, all locked
        let decision = strategy.decide_second_roll(&[6, 6], &[1, 3, 5], &card).unwrap();
        assert!(decision.stands());
    }

    #[test]
    fn test_second_roll_falls_through_to_stand() {
        let strategy = RetentionStrategy::with_observer(RecordingObserver::new());
        let card = ScoreCard::new();
        let decision = strategy.decide_second_roll(&[5, 5, 5, 5], &[2], &card).unwrap();

        assert!(decision.stands());
        assert_eq!(decision.intent, Intent::Stand(Some(Category::FourOfAKind)));
        assert_eq!(decision.keep.len(), 5);

        let events = strategy.observer().events();
        assert!(matches!(events[0], ObservedEvent::BestHand(_)));
        assert!(matches!(events[1], ObservedEvent::PlanSkipped(_)));
        assert!(matches!(events.last(), Some(ObservedEvent::Decided(_))));
    }

    #[test]
    fn test_second_roll_partial_filter() {
        let strategy = RetentionStrategy::with_observer(RecordingObserver::new());
        let card = ScoreCard::new();
        // Set plan wants 1,3,5 rerolled; only the 3 is fresh
        let decision = strategy.decide_second_roll(&[3, 6], &[6, 1, 5], &card).unwrap();
        assert_eq!(decision.reroll.as_slice(), &[3]);
        assert_eq!(decision.keep.len(), 4);
    }

    #[test]
    fn test_second_roll_rejects_bad_parts() {
        let strategy = RetentionStrategy::new();
        let card = ScoreCard::new();
        assert!(strategy.decide_second_roll(&[1, 2], &[3], &card).is_err());
        assert!(strategy.decide_second_roll(&[1, 2, 9], &[3, 4], &card).is_err());
    }

    #[test]
    fn test_no_category_with_full_card() {
        let strategy = RetentionStrategy::new();
        let mut card = ScoreCard::new();
        for c in Category::ALL {
            card.claim(c, &hand([1, 1, 1, 1, 1]), PlayerId::new(0), 1).unwrap();
        }
        let decision = strategy.decide_first_roll(&hand([2, 3, 3, 4, 6]), &card);
        assert!(decision.best.is_none());
        assert_eq!(decision.intent, Intent::RerollAll);
        assert_eq!(decision.reroll.len(), 5);
    }
}
