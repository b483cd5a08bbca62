//! A scorecard shared between threads.
//!
//! For hosting several concurrent turns against one card. Every claim runs
//! under the lock, so the availability check and the write happen together
//! and a category is never claimed twice.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::core::{PlayerId, Result};
use crate::dice::Hand;
use crate::scoring::{BestHand, Category, ScoreCard};

/// Cloneable handle to a locked `ScoreCard`.
#[derive(Clone, Debug, Default)]
pub struct SharedScoreCard {
    inner: Arc<Mutex<ScoreCard>>,
}

impl SharedScoreCard {
    pub fn new(card: ScoreCard) -> Self {
        Self {
            inner: Arc::new(Mutex::new(card)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ScoreCard> {
        // A panic while holding the lock cannot leave a half-written entry
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Claim `category` if it is still open. Fails with
    /// `CategoryAlreadyClaimed` when another claim got there first.
    pub fn claim(
        &self,
        category: Category,
        hand: &Hand,
        claimant: PlayerId,
        round: u32,
    ) -> Result<u32> {
        let mut card = self.lock();
        let points = card.claim(category, hand, claimant, round)?;
        tracing::info!(%claimant, %category, points, round, "category claimed");
        Ok(points)
    }

    /// Claim the best open category for `hand`, if any scores.
    pub fn claim_best(
        &self,
        hand: &Hand,
        claimant: PlayerId,
        round: u32,
    ) -> Result<Option<(Category, u32)>> {
        let mut card = self.lock();
        let BestHand {
            category: Some(category),
            ..
        } = card.best_available_hand(hand)
        else {
            return Ok(None);
        };
        let points = card.claim(category, hand, claimant, round)?;
        Ok(Some((category, points)))
    }

    pub fn is_available(&self, category: Category) -> bool {
        self.lock().is_available(category)
    }

    pub fn best_available_hand(&self, hand: &Hand) -> BestHand {
        self.lock().best_available_hand(hand)
    }

    pub fn total_score(&self, claimant: PlayerId) -> u32 {
        self.lock().total_score(claimant)
    }

    pub fn is_all_filled(&self) -> bool {
        self.lock().is_all_filled()
    }

    /// A copy of the card as it stands.
    pub fn snapshot(&self) -> ScoreCard {
        self.lock().clone()
    }
}
