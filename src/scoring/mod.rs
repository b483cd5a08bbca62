//! Scoring rules and the shared scorecard.

pub mod category;
pub mod points;
pub mod scorecard;

pub use category::Category;
pub use points::{
    points_for, FIVE_STRAIGHT_POINTS, FOUR_STRAIGHT_POINTS, FULL_HOUSE_POINTS, YAHTZEE_POINTS,
};
pub use scorecard::{BestHand, ScoreCard, ScoreCardEntry};
