//! Pure helpers over dice multisets.
//!
//! Dice are compared by value only; which physical die a value came from is
//! tracked by the caller (see `strategy::provenance`).

use super::{DiceVec, Face};

/// Longest run of strictly consecutive values in `distinct_sorted`.
///
/// Ties keep the first run found scanning left to right.
///
/// ```
/// use yahtzee_duel::dice::longest_consecutive_run;
///
/// assert_eq!(longest_consecutive_run(&[1, 2, 4, 5]).as_slice(), &[1, 2]);
/// assert_eq!(longest_consecutive_run(&[1, 3, 4, 5]).as_slice(), &[3, 4, 5]);
/// ```
#[must_use]
pub fn longest_consecutive_run(distinct_sorted: &[Face]) -> DiceVec {
    let Some((&first, rest)) = distinct_sorted.split_first() else {
        return DiceVec::new();
    };

    let mut longest = DiceVec::new();
    let mut current: DiceVec = smallvec::smallvec![first];

    for &face in rest {
        if current.last().is_some_and(|&last| face == last + 1) {
            current.push(face);
        } else {
            if current.len() > longest.len() {
                longest = current.clone();
            }
            current.clear();
            current.push(face);
        }
    }

    if current.len() > longest.len() {
        longest = current;
    }
    longest
}

/// Whether every distinct value of `a` occurs somewhere in `b`.
///
/// Multiplicity is ignored. Empty inputs are never subsets.
#[must_use]
pub fn is_subset(a: &[Face], b: &[Face]) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.iter().all(|value| b.contains(value))
}

/// Remove from `a` one occurrence of each element of `b`.
///
/// Elements of `b` missing from `a` are ignored.
///
/// ```
/// use yahtzee_duel::dice::multiset_difference;
///
/// assert_eq!(multiset_difference(&[2, 2, 3, 4, 2], &[2, 4]).as_slice(), &[2, 3, 2]);
/// ```
#[must_use]
pub fn multiset_difference(a: &[Face], b: &[Face]) -> DiceVec {
    let mut result: DiceVec = a.iter().copied().collect();
    for value in b {
        if let Some(pos) = result.iter().position(|v| v == value) {
            result.remove(pos);
        }
    }
    result
}

/// Elements of `wanted` that can be matched one-for-one against `pool`.
///
/// Order follows `wanted`.
#[must_use]
pub fn multiset_intersection(wanted: &[Face], pool: &[Face]) -> DiceVec {
    let mut remaining: DiceVec = pool.iter().copied().collect();
    let mut result = DiceVec::new();
    for value in wanted {
        if let Some(pos) = remaining.iter().position(|v| v == value) {
            remaining.remove(pos);
            result.push(*value);
        }
    }
    result
}

/// Whether `sub` can be matched one-for-one against `pool`.
#[must_use]
pub fn is_sub_multiset(sub: &[Face], pool: &[Face]) -> bool {
    multiset_intersection(sub, pool).len() == sub.len()
}
