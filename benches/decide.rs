use criterion::{black_box, criterion_group, criterion_main, Criterion};

use yahtzee_duel::core::PlayerId;
use yahtzee_duel::dice::Hand;
use yahtzee_duel::scoring::{Category, ScoreCard};
use yahtzee_duel::strategy::{NoopObserver, RetentionStrategy};

fn all_hands() -> Vec<Hand> {
    let mut hands = Vec::with_capacity(6usize.pow(5));
    for i in 0..6u32.pow(5) {
        let mut faces = [0u8; 5];
        let mut n = i;
        for face in &mut faces {
            *face = (n % 6) as u8 + 1;
            n /= 6;
        }
        if let Ok(hand) = Hand::new(&faces) {
            hands.push(hand);
        }
    }
    hands
}

fn half_claimed_card() -> ScoreCard {
    let mut card = ScoreCard::new();
    let filler = Hand::new(&[1, 2, 3, 4, 6]).unwrap();
    for category in Category::ALL.into_iter().step_by(2) {
        card.claim(category, &filler, PlayerId::new(0), 1).unwrap();
    }
    card
}

fn bench_decide(c: &mut Criterion) {
    let strategy = RetentionStrategy::with_observer(NoopObserver);
    let hands = all_hands();
    let open = ScoreCard::new();
    let half = half_claimed_card();

    c.bench_function("decide_first_roll/open_card", |b| {
        b.iter(|| {
            for hand in &hands {
                black_box(strategy.decide_first_roll(black_box(hand), &open));
            }
        })
    });

    c.bench_function("decide_first_roll/half_claimed", |b| {
        b.iter(|| {
            for hand in &hands {
                black_box(strategy.decide_first_roll(black_box(hand), &half));
            }
        })
    });

    c.bench_function("decide_second_roll/two_locked", |b| {
        b.iter(|| {
            for hand in &hands {
                let (locked, just_rolled) = hand.faces().split_at(2);
                black_box(strategy.decide_second_roll(just_rolled, locked, &open).ok());
            }
        })
    });
}

criterion_group!(benches, bench_decide);
criterion_main!(benches);
