//! Point values of a hand in each category.

use super::Category;
use crate::dice::{longest_consecutive_run, Hand};

pub const FULL_HOUSE_POINTS: u32 = 25;
pub const FOUR_STRAIGHT_POINTS: u32 = 30;
pub const FIVE_STRAIGHT_POINTS: u32 = 40;
pub const YAHTZEE_POINTS: u32 = 50;

/// Points `hand` would score in `category`. Zero means "does not qualify".
///
/// ```
/// use yahtzee_duel::dice::Hand;
/// use yahtzee_duel::scoring::{points_for, Category};
///
/// let hand = Hand::new(&[2, 2, 2, 3, 3]).unwrap();
/// assert_eq!(points_for(Category::FullHouse, &hand), 25);
/// assert_eq!(points_for(Category::Twos, &hand), 6);
/// ```
#[must_use]
pub fn points_for(category: Category, hand: &Hand) -> u32 {
    let counts = hand.counts();

    match category {
        Category::Aces
        | Category::Twos
        | Category::Threes
        | Category::Fours
        | Category::Fives
        | Category::Sixes => {
            let face = category.face().unwrap_or(0);
            u32::from(face) * u32::from(counts.count(face))
        }
        Category::ThreeOfAKind => {
            if counts.max_count() >= 3 {
                hand.sum()
            } else {
                0
            }
        }
        Category::FourOfAKind => {
            if counts.max_count() >= 4 {
                hand.sum()
            } else {
                0
            }
        }
        Category::FullHouse => {
            // Count 3 and count 2 on different faces; five of a kind never qualifies
            let has_three = !counts.faces_with_exactly(3).is_empty();
            let has_two = !counts.faces_with_exactly(2).is_empty();
            if has_three && has_two {
                FULL_HOUSE_POINTS
            } else {
                0
            }
        }
        Category::FourStraight => {
            if longest_consecutive_run(&hand.distinct()).len() >= 4 {
                FOUR_STRAIGHT_POINTS
            } else {
                0
            }
        }
        Category::FiveStraight => {
            let sorted = hand.sorted();
            if sorted == [1, 2, 3, 4, 5] || sorted == [2, 3, 4, 5, 6] {
                FIVE_STRAIGHT_POINTS
            } else {
                0
            }
        }
        Category::Yahtzee => {
            if counts.max_count() == 5 {
                YAHTZEE_POINTS
            } else {
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(faces: [u8; 5]) -> Hand {
        Hand::new(&faces).unwrap()
    }

    #[test]
    fn test_upper_section() {
        let h = hand([1, 1, 3, 6, 6]);
        assert_eq!(points_for(Category::Aces, &h), 2);
        assert_eq!(points_for(Category::Twos, &h), 0);
        assert_eq!(points_for(Category::Threes, &h), 3);
        assert_eq!(points_for(Category::Sixes, &h), 12);
    }

    #[test]
    fn test_of_a_kind_sums_all_dice() {
        assert_eq!(points_for(Category::ThreeOfAKind, &hand([4, 4, 4, 1, 2])), 15);
        assert_eq!(points_for(Category::ThreeOfAKind, &hand([4, 4, 1, 1, 2])), 0);
        assert_eq!(points_for(Category::FourOfAKind, &hand([5, 5, 5, 5, 2])), 22);
        assert_eq!(points_for(Category::FourOfAKind, &hand([5, 5, 5, 2, 2])), 0);
        assert_eq!(points_for(Category::FourOfAKind, &hand([3, 3, 3, 3, 3])), 15);
    }

    #[test]
    fn test_full_house() {
        assert_eq!(points_for(Category::FullHouse, &hand([2, 2, 2, 3, 3])), 25);
        assert_eq!(points_for(Category::FullHouse, &hand([3, 6, 3, 6, 6])), 25);
        assert_eq!(points_for(Category::FullHouse, &hand([2, 2, 2, 2, 2])), 0);
        assert_eq!(points_for(Category::FullHouse, &hand([2, 2, 2, 2, 3])), 0);
    }

    #[test]
    fn test_four_straight() {
        assert_eq!(points_for(Category::FourStraight, &hand([1, 2, 3, 4, 6])), 30);
        assert_eq!(points_for(Category::FourStraight, &hand([3, 4, 5, 6, 6])), 30);
        assert_eq!(points_for(Category::FourStraight, &hand([2, 3, 4, 5, 6])), 30);
        assert_eq!(points_for(Category::FourStraight, &hand([1, 2, 3, 5, 6])), 0);
    }

    #[test]
    fn test_five_straight() {
        assert_eq!(points_for(Category::FiveStraight, &hand([1, 2, 3, 4, 5])), 40);
        assert_eq!(points_for(Category::FiveStraight, &hand([6, 5, 4, 3, 2])), 40);
        assert_eq!(points_for(Category::FiveStraight, &hand([1, 2, 3, 4, 6])), 0);
    }

    #[test]
    fn test_yahtzee() {
        assert_eq!(points_for(Category::Yahtzee, &hand([4, 4, 4, 4, 4])), 50);
        assert_eq!(points_for(Category::Yahtzee, &hand([4, 4, 4, 4, 3])), 0);
    }
}
