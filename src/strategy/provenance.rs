//! Provenance filters: which of a plan's rerolls may actually be rerolled.
//!
//! On the first roll every die is fresh. Later in the turn only dice from
//! the most recent roll may go back in the cup; locked dice stay put.

use crate::dice::{multiset_intersection, DiceVec, Face};

/// Every die may be rerolled.
pub fn any_die() -> impl Fn(&[Face]) -> DiceVec {
    |wanted| wanted.iter().copied().collect()
}

/// Only dice matched one-for-one in `just_rolled` may be rerolled.
pub fn just_rolled(just_rolled: &[Face]) -> impl Fn(&[Face]) -> DiceVec + '_ {
    move |wanted| multiset_intersection(wanted, just_rolled)
}
