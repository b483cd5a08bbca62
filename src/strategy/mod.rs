//! Retention strategy: which dice to keep and which to reroll.
//!
//! - `table`: the prioritised keep/reroll plans for a hand
//! - `provenance`: filters limiting rerolls to dice that may be rerolled
//! - `retention`: `RetentionStrategy`, walking the table under a filter
//! - `observer`: hooks for logging and recording decisions

pub mod observer;
pub mod plan;
pub mod provenance;
pub mod retention;
pub mod table;

pub use observer::{
    DecisionObserver, NoopObserver, ObservedEvent, RecordingObserver, TracingObserver,
};
pub use plan::{Decision, Intent, Plan};
pub use retention::RetentionStrategy;
pub use table::candidate_plans;
