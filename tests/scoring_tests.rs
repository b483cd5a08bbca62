//! Scoring engine tests.
//!
//! Point rules for every category, best-hand selection against a partly
//! claimed card, and filling the whole card between two players.

use proptest::prelude::*;

use yahtzee_duel::core::{EngineError, PlayerId};
use yahtzee_duel::dice::Hand;
use yahtzee_duel::scoring::{points_for, BestHand, Category, ScoreCard};

fn hand(faces: [u8; 5]) -> Hand {
    Hand::new(&faces).unwrap()
}

fn dice_strategy() -> impl Strategy<Value = [u8; 5]> {
    prop::array::uniform5(1..=6u8)
}

/// Category masks: bit `i` set means `Category::ALL[i]` is claimed.
fn claimed_strategy() -> impl Strategy<Value = u16> {
    0..(1u16 << Category::COUNT)
}

fn card_with_claimed(mask: u16) -> ScoreCard {
    let mut card = ScoreCard::new();
    let filler = hand([1, 2, 3, 4, 6]);
    for (i, category) in Category::ALL.into_iter().enumerate() {
        if mask & (1 << i) != 0 {
            card.claim(category, &filler, PlayerId::new(0), 1).unwrap();
        }
    }
    card
}

#[test]
fn test_points_fixtures() {
    let cases = [
        (Category::Aces, [1, 1, 2, 3, 1], 3),
        (Category::Sixes, [6, 5, 6, 2, 1], 12),
        (Category::ThreeOfAKind, [4, 4, 4, 2, 1], 15),
        (Category::ThreeOfAKind, [4, 4, 2, 2, 1], 0),
        (Category::FourOfAKind, [3, 3, 3, 3, 6], 18),
        (Category::FullHouse, [2, 2, 5, 5, 5], 25),
        (Category::FullHouse, [5, 5, 5, 5, 5], 0),
        (Category::FourStraight, [1, 2, 3, 4, 6], 30),
        (Category::FourStraight, [3, 4, 5, 6, 6], 30),
        (Category::FourStraight, [1, 2, 3, 5, 6], 0),
        (Category::FiveStraight, [2, 3, 4, 5, 6], 40),
        (Category::FiveStraight, [1, 2, 3, 4, 6], 0),
        (Category::Yahtzee, [2, 2, 2, 2, 2], 50),
        (Category::Yahtzee, [2, 2, 2, 2, 3], 0),
    ];

    for (category, faces, expected) in cases {
        assert_eq!(
            points_for(category, &hand(faces)),
            expected,
            "{category} on {faces:?}"
        );
    }
}

#[test]
fn test_best_hand_skips_claimed() {
    let mut card = ScoreCard::new();
    let yahtzee = hand([6, 6, 6, 6, 6]);
    assert_eq!(
        card.best_available_hand(&yahtzee),
        BestHand {
            category: Some(Category::Yahtzee),
            points: 50
        }
    );

    card.claim(Category::Yahtzee, &yahtzee, PlayerId::new(1), 1).unwrap();
    let best = card.best_available_hand(&yahtzee);
    assert_eq!(best.category, Some(Category::FourOfAKind));
    assert_eq!(best.points, 30);
}

#[test]
fn test_already_claimed_leaves_entry() {
    let mut card = ScoreCard::new();
    card.claim(Category::Fives, &hand([5, 5, 5, 1, 2]), PlayerId::new(0), 2)
        .unwrap();
    let before = *card.entry(Category::Fives);

    let err = card
        .claim(Category::Fives, &hand([5, 5, 5, 5, 5]), PlayerId::new(1), 3)
        .unwrap_err();
    assert!(matches!(err, EngineError::CategoryAlreadyClaimed(Category::Fives)));
    assert_eq!(*card.entry(Category::Fives), before);
    assert_eq!(card.total_score(PlayerId::new(1)), 0);
}

/// Two players alternate until all twelve categories are gone.
#[test]
fn test_fill_card_between_two_players() {
    let mut card = ScoreCard::new();
    let alice = PlayerId::new(0);
    let bob = PlayerId::new(1);

    let turns = [
        (alice, [6, 6, 6, 6, 6], Category::Yahtzee, 50),
        (bob, [2, 3, 4, 5, 6], Category::FiveStraight, 40),
        (alice, [1, 2, 3, 4, 4], Category::FourStraight, 30),
        (bob, [3, 3, 3, 5, 5], Category::FullHouse, 25),
        (alice, [4, 4, 4, 4, 1], Category::FourOfAKind, 17),
        (bob, [5, 5, 5, 2, 1], Category::ThreeOfAKind, 18),
        (alice, [6, 6, 6, 1, 2], Category::Sixes, 18),
        (bob, [5, 5, 1, 2, 3], Category::Fives, 10),
        (alice, [4, 4, 4, 1, 2], Category::Fours, 12),
        (bob, [3, 3, 1, 2, 6], Category::Threes, 6),
        (alice, [2, 2, 2, 1, 6], Category::Twos, 6),
        (bob, [1, 1, 1, 1, 6], Category::Aces, 4),
    ];

    for (round, (player, faces, expected, points)) in turns.into_iter().enumerate() {
        let h = hand(faces);
        let best = card.best_available_hand(&h);
        assert_eq!(best.category, Some(expected), "turn {round}: {h}");
        assert_eq!(best.points, points);
        card.claim(expected, &h, player, round as u32 / 2 + 1).unwrap();
    }

    assert!(card.is_all_filled());
    assert_eq!(card.total_score(alice), 50 + 30 + 17 + 18 + 12 + 6);
    assert_eq!(card.total_score(bob), 40 + 25 + 18 + 10 + 6 + 4);
    assert_eq!(card.best_available_hand(&hand([6, 6, 6, 6, 6])), BestHand::NONE);
}

proptest! {
    #[test]
    fn points_bounded(dice in dice_strategy()) {
        let h = Hand::new(&dice).unwrap();
        for category in Category::ALL {
            let points = points_for(category, &h);
            prop_assert!(points <= 50, "{} scored {} on {:?}", category, points, dice);
            if let Some(face) = category.face() {
                prop_assert_eq!(points % u32::from(face), 0);
            }
        }
    }

    #[test]
    fn best_hand_is_open_and_maximal(dice in dice_strategy(), mask in claimed_strategy()) {
        let card = card_with_claimed(mask);
        let h = Hand::new(&dice).unwrap();
        let best = card.best_available_hand(&h);

        let top = card.potential_points(&h).into_iter().map(|(_, p)| p).max();
        match best.category {
            Some(category) => {
                prop_assert!(card.is_available(category));
                prop_assert_eq!(Some(best.points), top);
                prop_assert_eq!(best.points, points_for(category, &h));
            }
            None => prop_assert_eq!(top, None),
        }
    }

    #[test]
    fn scorable_categories_are_open(dice in dice_strategy(), mask in claimed_strategy()) {
        let card = card_with_claimed(mask);
        let h = Hand::new(&dice).unwrap();
        for category in card.scorable_categories(&h) {
            prop_assert!(card.is_available(category));
            prop_assert!(points_for(category, &h) > 0);
        }
    }
}
