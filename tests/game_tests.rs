//! Whole-game tests.
//!
//! Computer players sharing one card from first roll to final total, saved
//! games resuming face for face, and claims racing across threads.

use std::thread;

use yahtzee_duel::core::{EngineError, GameConfig, PlayerId};
use yahtzee_duel::dice::{Hand, ScriptedDice};
use yahtzee_duel::game::{Game, GameBuilder, GameResult, SharedScoreCard, Snapshot};
use yahtzee_duel::scoring::{Category, ScoreCard};
use yahtzee_duel::strategy::NoopObserver;

/// Rounds before a game is assumed stuck.
const ROUND_LIMIT: u32 = 2_000;

fn play_out(game: &mut Game<NoopObserver>) -> GameResult {
    let players = game.config().player_count;
    while !game.is_over() {
        assert!(game.round() <= ROUND_LIMIT, "game never finished");
        for player in PlayerId::all(players) {
            if game.is_over() {
                break;
            }
            let outcome = game.play_computer_turn(player).unwrap();
            assert_eq!(outcome.player, player);
            assert!(!outcome.rolls.is_empty());
            assert!(outcome.rolls.len() <= 3);
        }
        game.advance_round();
    }
    game.result().unwrap()
}

#[test]
fn test_two_computers_fill_the_card() {
    let mut game = GameBuilder::new().seed(7).build_with_observer(NoopObserver);
    let result = play_out(&mut game);

    assert!(game.card().is_all_filled());
    let totals = game.totals();
    let sum: u32 = game.card().entries().map(|(_, e)| e.points).sum();
    assert_eq!(*totals.get(PlayerId::new(0)) + *totals.get(PlayerId::new(1)), sum);

    match result {
        GameResult::Winner(p) => {
            let other = PlayerId::new(1 - p.0);
            assert!(totals.get(p) > totals.get(other));
        }
        GameResult::Draw => assert_eq!(totals.get(PlayerId::new(0)), totals.get(PlayerId::new(1))),
        GameResult::Winners(_) => panic!("two players cannot share a partial lead"),
    }
}

#[test]
fn test_same_seed_same_game() {
    let mut a = GameBuilder::new().seed(1234).build_with_observer(NoopObserver);
    let mut b = GameBuilder::new().seed(1234).build_with_observer(NoopObserver);
    play_out(&mut a);
    play_out(&mut b);
    assert_eq!(a.card(), b.card());
    assert_eq!(a.round(), b.round());
}

#[test]
fn test_solo_game() {
    let mut game = GameBuilder::new()
        .player_count(1)
        .seed(3)
        .build_with_observer(NoopObserver);
    assert_eq!(play_out(&mut game), GameResult::Winner(PlayerId::new(0)));
}

#[test]
fn test_computer_turn_with_scripted_dice() {
    let mut game = GameBuilder::new().build_with_observer(NoopObserver);

    // Four fives chase the Yahtzee and get it on the second roll
    let mut dice = ScriptedDice::new([5, 5, 5, 5, 2, 5]);
    let outcome = game
        .play_computer_turn_with(PlayerId::new(0), &mut dice)
        .unwrap();

    assert_eq!(outcome.rolls.len(), 2);
    assert_eq!(outcome.hand, Hand::new(&[5, 5, 5, 5, 5]).unwrap());
    assert_eq!(outcome.claim, Some((Category::Yahtzee, 50)));
    assert_eq!(dice.remaining(), 0);
    assert!(!game.card().is_available(Category::Yahtzee));
}

#[test]
fn test_unknown_player_rejected() {
    let mut game = GameBuilder::new().build_with_observer(NoopObserver);
    let err = game.play_computer_turn(PlayerId::new(2)).unwrap_err();
    assert!(matches!(err, EngineError::UnknownPlayer(p) if p == PlayerId::new(2)));
    assert_eq!(game.card(), &ScoreCard::new());
}

/// A game saved mid-way and resumed plays the same rolls as one that never
/// stopped.
#[test]
fn test_snapshot_resume_mid_game() {
    let config = GameConfig::default().with_seed(99);
    let mut original = GameBuilder::new()
        .config(config.clone())
        .build_with_observer(NoopObserver);

    for _ in 0..3 {
        for player in PlayerId::all(2) {
            original.play_computer_turn(player).unwrap();
        }
        original.advance_round();
    }

    let bytes = original.snapshot().to_bytes().unwrap();
    let snapshot = Snapshot::from_bytes(&bytes).unwrap();
    let mut resumed = Game::restore(config, &snapshot, NoopObserver).unwrap();

    assert_eq!(resumed.card(), original.card());
    assert_eq!(resumed.round(), original.round());

    for player in PlayerId::all(2) {
        let a = original.play_computer_turn(player).unwrap();
        let b = resumed.play_computer_turn(player).unwrap();
        assert_eq!(a, b);
    }
    assert_eq!(resumed.card(), original.card());
}

#[test]
fn test_restore_rejects_extra_claimant() {
    let mut game = GameBuilder::new()
        .player_count(3)
        .build_with_observer(NoopObserver);
    game.claim(Category::Aces, &Hand::new(&[1, 1, 2, 3, 4]).unwrap(), PlayerId::new(2))
        .unwrap();

    let err = Game::restore(GameConfig::new(2), &game.snapshot(), NoopObserver).unwrap_err();
    assert!(matches!(err, EngineError::InvalidSnapshot(_)));
}

#[test]
fn test_shared_card_single_winner_per_category() {
    let shared = SharedScoreCard::default();
    let hand = Hand::new(&[3, 3, 3, 3, 3]).unwrap();

    let handles: Vec<_> = (0..4u8)
        .map(|i| {
            let shared = shared.clone();
            thread::spawn(move || {
                Category::ALL
                    .into_iter()
                    .filter(|&c| shared.claim(c, &hand, PlayerId::new(i), 1).is_ok())
                    .count()
            })
        })
        .collect();

    let claimed: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
    assert_eq!(claimed, Category::COUNT);
    assert!(shared.is_all_filled());

    let card = shared.snapshot();
    let total: u32 = (0..4u8).map(|i| card.total_score(PlayerId::new(i))).sum();
    let expected: u32 = Category::ALL
        .into_iter()
        .map(|c| yahtzee_duel::scoring::points_for(c, &hand))
        .sum();
    assert_eq!(total, expected);
}
