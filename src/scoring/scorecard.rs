//! The shared scorecard both players claim categories from.

use serde::{Deserialize, Serialize};

use super::{points_for, Category};
use crate::core::{EngineError, PlayerId, Result};
use crate::dice::{is_subset, longest_consecutive_run, Hand};

/// One scorecard row. Written once by `ScoreCard::claim`, never changed after.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreCardEntry {
    /// Who claimed the category, `None` while it is open.
    pub claimant: Option<PlayerId>,
    pub points: u32,
    /// Round in which the claim happened; 0 while open.
    pub round: u32,
}

impl ScoreCardEntry {
    #[must_use]
    pub fn is_claimed(&self) -> bool {
        self.claimant.is_some()
    }
}

/// Highest-scoring open category for a hand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestHand {
    /// `None` when no open category scores above zero.
    pub category: Option<Category>,
    pub points: u32,
}

impl BestHand {
    /// Nothing scores.
    pub const NONE: BestHand = BestHand {
        category: None,
        points: 0,
    };

    #[must_use]
    pub fn is_none(&self) -> bool {
        self.category.is_none()
    }
}

/// Twelve entries indexed by `Category`.
///
/// The card is an owned value: games, tests and strategies each hold their
/// own, and the only mutation is `claim`.
///
/// ```
/// use yahtzee_duel::core::PlayerId;
/// use yahtzee_duel::dice::Hand;
/// use yahtzee_duel::scoring::{Category, ScoreCard};
///
/// let mut card = ScoreCard::new();
/// let hand = Hand::new(&[4, 4, 4, 4, 4]).unwrap();
/// assert_eq!(card.best_available_hand(&hand).category, Some(Category::Yahtzee));
///
/// card.claim(Category::Yahtzee, &hand, PlayerId::new(0), 1).unwrap();
/// assert!(!card.is_available(Category::Yahtzee));
/// assert!(card.claim(Category::Yahtzee, &hand, PlayerId::new(1), 1).is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCard {
    entries: [ScoreCardEntry; Category::COUNT],
}

impl ScoreCard {
    /// A card with every category open.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a card from raw entries in enumeration order.
    #[must_use]
    pub fn from_entries(entries: [ScoreCardEntry; Category::COUNT]) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn entry(&self, category: Category) -> &ScoreCardEntry {
        &self.entries[category.index()]
    }

    /// Every row in enumeration order.
    pub fn entries(&self) -> impl Iterator<Item = (Category, &ScoreCardEntry)> + '_ {
        Category::ALL.into_iter().zip(self.entries.iter())
    }

    #[must_use]
    pub fn is_available(&self, category: Category) -> bool {
        !self.entry(category).is_claimed()
    }

    /// The game ends once this holds.
    #[must_use]
    pub fn is_all_filled(&self) -> bool {
        self.entries.iter().all(ScoreCardEntry::is_claimed)
    }

    /// Open categories in enumeration order.
    #[must_use]
    pub fn available_categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|&c| self.is_available(c))
            .collect()
    }

    /// Claim `category` for `claimant`, scoring `hand`.
    ///
    /// Returns the points written. A claimed category is left untouched and
    /// reported as `CategoryAlreadyClaimed`. A hand that scores zero may
    /// still be claimed.
    pub fn claim(
        &mut self,
        category: Category,
        hand: &Hand,
        claimant: PlayerId,
        round: u32,
    ) -> Result<u32> {
        let entry = &mut self.entries[category.index()];
        if entry.is_claimed() {
            return Err(EngineError::CategoryAlreadyClaimed(category));
        }

        let points = points_for(category, hand);
        *entry = ScoreCardEntry {
            claimant: Some(claimant),
            points,
            round,
        };
        Ok(points)
    }

    /// The open category this hand scores best in.
    ///
    /// Scans in enumeration order and replaces the running best whenever a
    /// category scores at least as much, so the later category wins a tie.
    #[must_use]
    pub fn best_available_hand(&self, hand: &Hand) -> BestHand {
        let mut best = BestHand::NONE;
        for category in Category::ALL {
            if !self.is_available(category) {
                continue;
            }
            let points = points_for(category, hand);
            if points > 0 && points >= best.points {
                best = BestHand {
                    category: Some(category),
                    points,
                };
            }
        }
        best
    }

    /// Sum of the points `claimant` has claimed.
    #[must_use]
    pub fn total_score(&self, claimant: PlayerId) -> u32 {
        self.entries
            .iter()
            .filter(|e| e.claimant == Some(claimant))
            .map(|e| e.points)
            .sum()
    }

    /// Open categories in which `hand` scores above zero.
    #[must_use]
    pub fn scorable_categories(&self, hand: &Hand) -> Vec<Category> {
        self.potential_points(hand)
            .into_iter()
            .map(|(category, _)| category)
            .collect()
    }

    /// `(category, points)` for each open category `hand` scores in.
    #[must_use]
    pub fn potential_points(&self, hand: &Hand) -> Vec<(Category, u32)> {
        Category::ALL
            .into_iter()
            .filter(|&c| self.is_available(c))
            .map(|c| (c, points_for(c, hand)))
            .filter(|&(_, points)| points > 0)
            .collect()
    }

    /// Categories worth chasing from `hand`, most promising kind first:
    /// straights when the faces are near a run, the set categories when a
    /// pair exists, then the best open upper-section category. The upper
    /// category is listed even when it would score nothing, as long as one
    /// is open.
    #[must_use]
    pub fn categories_to_pursue(&self, hand: &Hand) -> Vec<Category> {
        let mut pursue = Vec::new();
        let push = |pursue: &mut Vec<Category>, category: Category| {
            if self.is_available(category) && !pursue.contains(&category) {
                pursue.push(category);
            }
        };

        let distinct = hand.distinct();
        let counts = hand.counts();
        let five_open = self.is_available(Category::FiveStraight);
        let four_open = self.is_available(Category::FourStraight);
        let near_run = is_subset(hand.faces(), &[1, 2, 3, 4, 5])
            || is_subset(hand.faces(), &[2, 3, 4, 5, 6]);

        if distinct.len() == 5 {
            push(&mut pursue, Category::FiveStraight);
            push(&mut pursue, Category::FourStraight);
        } else if distinct.len() == 4 && near_run {
            if five_open {
                push(&mut pursue, Category::FiveStraight);
            } else {
                push(&mut pursue, Category::FourStraight);
            }
        }

        let run = longest_consecutive_run(&distinct);
        if four_open
            && run.len() == 3
            && (is_subset(&run, &[1, 2, 3, 4])
                || is_subset(&run, &[2, 3, 4, 5])
                || is_subset(&run, &[3, 4, 5, 6]))
        {
            push(&mut pursue, Category::FourStraight);
        }

        if counts.max_count() >= 2 {
            for category in [
                Category::Yahtzee,
                Category::FullHouse,
                Category::FourOfAKind,
                Category::ThreeOfAKind,
            ] {
                push(&mut pursue, category);
            }
        }

        let best_upper = Category::UPPER
            .into_iter()
            .filter(|&c| self.is_available(c))
            .map(|c| (c, points_for(c, hand)))
            // First category wins ties, zero points included
            .fold(None::<(Category, u32)>, |best, (c, points)| match best {
                Some((_, best_points)) if best_points >= points => best,
                _ => Some((c, points)),
            });
        if let Some((category, _)) = best_upper {
            push(&mut pursue, category);
        }

        pursue
    }

    /// Reopen every category.
    pub fn clear(&mut self) {
        self.entries = Default::default();
    }
}
