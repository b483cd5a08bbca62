//! Hooks for watching decisions being made.
//!
//! The decision table itself has no side effects; anything that wants to
//! log, trace or record what happened implements `DecisionObserver`.

use std::sync::Mutex;

use super::plan::{Decision, Plan};
use crate::dice::Hand;
use crate::scoring::BestHand;

/// Receives decision events. Every hook defaults to doing nothing.
pub trait DecisionObserver: Send + Sync {
    /// The best open category for the hand under consideration.
    fn best_hand(&self, _hand: &Hand, _best: &BestHand) {}

    /// A plan was passed over because none of its rerolls were allowed.
    fn plan_skipped(&self, _plan: &Plan) {}

    /// The final decision.
    fn decided(&self, _hand: &Hand, _decision: &Decision) {}
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl DecisionObserver for NoopObserver {}

/// Emits events through `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl DecisionObserver for TracingObserver {
    fn best_hand(&self, hand: &Hand, best: &BestHand) {
        match best.category {
            Some(category) => tracing::debug!(
                %hand,
                %category,
                points = best.points,
                "best available category"
            ),
            None => tracing::debug!(%hand, "no available category scores"),
        }
    }

    fn plan_skipped(&self, plan: &Plan) {
        tracing::trace!(
            intent = %plan.intent,
            wanted = ?plan.reroll.as_slice(),
            "plan skipped, no wanted die was just rolled"
        );
    }

    fn decided(&self, hand: &Hand, decision: &Decision) {
        tracing::debug!(
            %hand,
            keep = ?decision.keep.as_slice(),
            reroll = ?decision.reroll.as_slice(),
            intent = %decision.intent,
            "decision"
        );
    }
}

/// A recorded observer event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ObservedEvent {
    BestHand(BestHand),
    PlanSkipped(Plan),
    Decided(Decision),
}

/// Keeps every event in memory, in order.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<ObservedEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events seen so far.
    #[must_use]
    pub fn events(&self) -> Vec<ObservedEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    fn record(&self, event: ObservedEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl DecisionObserver for RecordingObserver {
    fn best_hand(&self, _hand: &Hand, best: &BestHand) {
        self.record(ObservedEvent::BestHand(*best));
    }

    fn plan_skipped(&self, plan: &Plan) {
        self.record(ObservedEvent::PlanSkipped(plan.clone()));
    }

    fn decided(&self, _hand: &Hand, decision: &Decision) {
        self.record(ObservedEvent::Decided(decision.clone()));
    }
}

impl<O: DecisionObserver + ?Sized> DecisionObserver for &O {
    fn best_hand(&self, hand: &Hand, best: &BestHand) {
        (**self).best_hand(hand, best);
    }

    fn plan_skipped(&self, plan: &Plan) {
        (**self).plan_skipped(plan);
    }

    fn decided(&self, hand: &Hand, decision: &Decision) {
        (**self).decided(hand, decision);
    }
}
