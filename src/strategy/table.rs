//! The keep/reroll decision table.
//!
//! `candidate_plans` turns a hand and the open categories into plans in
//! priority order. The list always ends with a stand, so a caller that
//! filters rerolls by provenance can walk it until a plan survives.

use smallvec::smallvec;

use super::plan::{Intent, Plan};
use crate::dice::{longest_consecutive_run, multiset_difference, DiceVec, Face, FaceCounts, Hand};
use crate::scoring::{points_for, BestHand, Category, ScoreCard, FULL_HOUSE_POINTS};

/// Plans for `hand` in priority order, dispatching on its best open category.
#[must_use]
pub fn candidate_plans(hand: &Hand, card: &ScoreCard, best: BestHand) -> Vec<Plan> {
    let mut table = Table::new(hand, card);

    match best.category {
        Some(Category::Yahtzee | Category::FiveStraight | Category::FullHouse) => {}
        Some(Category::FourStraight) => table.four_straight(),
        Some(Category::FourOfAKind) => table.four_of_a_kind(),
        Some(Category::ThreeOfAKind) => table.three_of_a_kind(best.points),
        Some(upper) => table.upper_section(upper.face()),
        None => table.upper_section(None),
    }

    table.finish(best.category)
}

struct Table<'a> {
    hand: &'a Hand,
    card: &'a ScoreCard,
    counts: FaceCounts,
    plans: Vec<Plan>,
}

impl<'a> Table<'a> {
    fn new(hand: &'a Hand, card: &'a ScoreCard) -> Self {
        Self {
            hand,
            card,
            counts: hand.counts(),
            plans: Vec::new(),
        }
    }

    fn open(&self, category: Category) -> bool {
        self.card.is_available(category)
    }

    fn open_of(&self, categories: &[Category]) -> Vec<Category> {
        categories.iter().copied().filter(|&c| self.open(c)).collect()
    }

    /// Queue a rerolling plan. Plans that would reroll nothing are dropped;
    /// the trailing stand covers them.
    fn push(&mut self, intent: Intent, reroll: DiceVec) {
        if !reroll.is_empty() {
            self.plans.push(Plan::reroll(intent, reroll));
        }
    }

    fn finish(mut self, category: Option<Category>) -> Vec<Plan> {
        self.plans.push(Plan::stand(category));
        self.plans
    }

    /// Every die not showing `face`.
    fn all_but(&self, face: Face) -> DiceVec {
        self.hand.faces().iter().copied().filter(|&f| f != face).collect()
    }

    /// Every die not showing one of `faces`.
    fn all_but_any(&self, faces: &[Face]) -> DiceVec {
        self.hand
            .faces()
            .iter()
            .copied()
            .filter(|f| !faces.contains(f))
            .collect()
    }

    fn four_straight(&mut self) {
        if !self.open(Category::FiveStraight) {
            return;
        }

        let distinct = self.hand.distinct();
        let reroll: DiceVec = if distinct.len() == 4 {
            // One pair: reroll one copy of it
            self.counts.faces_with_exactly(2).into_iter().take(1).collect()
        } else {
            // Five distinct faces: reroll the one outside the four-long run
            let run = longest_consecutive_run(&distinct);
            multiset_difference(&distinct, &run)
        };
        self.push(Intent::Pursue(vec![Category::FiveStraight]), reroll);
    }

    fn four_of_a_kind(&mut self) {
        let Some(kind) = self.counts.face_with_at_least(4) else {
            return;
        };

        match self.counts.faces_with_exactly(1).first().copied() {
            Some(single) => {
                if self.open(Category::Yahtzee) {
                    self.push(Intent::Pursue(vec![Category::Yahtzee]), smallvec![single]);
                } else if single < 6 {
                    self.push(Intent::RaiseSum(Category::FourOfAKind), smallvec![single]);
                }
            }
            None => {
                // Five of a kind scored as four of a kind
                if kind < 4 {
                    self.push(Intent::RaiseSum(Category::FourOfAKind), smallvec![kind]);
                }
            }
        }
    }

    fn three_of_a_kind(&mut self, points: u32) {
        let Some(kind) = self.counts.face_with_at_least(3) else {
            return;
        };

        let full_house = points_for(Category::FullHouse, self.hand);
        if full_house == FULL_HOUSE_POINTS && points > full_house {
            return;
        }

        let yahtzee_open = self.open(Category::Yahtzee);
        let full_house_open = self.open(Category::FullHouse);
        if yahtzee_open || full_house_open {
            let mut targets = Vec::new();
            if yahtzee_open {
                targets.push(Category::Yahtzee);
            }
            if full_house_open && (!yahtzee_open || self.counts.count(kind) == 3) {
                targets.push(Category::FullHouse);
            }
            let reroll = self.all_but(kind);
            self.push(Intent::Pursue(targets), reroll);
        } else {
            let reroll: DiceVec = self
                .hand
                .faces()
                .iter()
                .copied()
                .filter(|&f| f != kind && f < 6)
                .collect();
            self.push(Intent::RaiseSum(Category::ThreeOfAKind), reroll);
        }
    }

    /// Upper-section categories, and hands that score nowhere (`target` is
    /// `None`).
    fn upper_section(&mut self, target: Option<Face>) {
        let pairs = self.counts.faces_with_at_least(2);
        let singles = self.counts.faces_with_exactly(1);

        match pairs.len() {
            0 => self.no_pairs(),
            1 => self.one_pair(pairs[0], singles.len()),
            _ => self.two_pairs(pairs[0], pairs[1], singles.len(), target),
        }

        self.fallback(target);
    }

    fn fallback(&mut self, target: Option<Face>) {
        match target {
            Some(face) => {
                let reroll = self.all_but(face);
                self.push(Intent::ChaseFace(face), reroll);
            }
            None => {
                let reroll = self.hand.faces().iter().copied().collect();
                self.push(Intent::RerollAll, reroll);
            }
        }
    }

    fn no_pairs(&mut self) {
        let straights = self.open_of(&[Category::FiveStraight, Category::FourStraight]);
        if straights.is_empty() {
            return;
        }
        // A five-distinct hand that is not already a straight always holds a 1
        let low = self.hand.sorted()[0];
        self.push(Intent::Pursue(straights), smallvec![low]);
    }

    fn one_pair(&mut self, pair: Face, singles: usize) {
        let distinct = self.hand.distinct();

        if self.open(Category::FiveStraight) && straight_possible(&distinct) {
            self.push(Intent::Pursue(vec![Category::FiveStraight]), smallvec![pair]);
        }

        let run = longest_consecutive_run(&distinct);
        if self.open(Category::FourStraight) && run.len() == 3 {
            let reroll = multiset_difference(self.hand.faces(), &run);
            self.push(Intent::Pursue(vec![Category::FourStraight]), reroll);
        }

        match singles {
            3 => {
                let targets = self.open_of(&[
                    Category::Yahtzee,
                    Category::FourOfAKind,
                    Category::ThreeOfAKind,
                    Category::FullHouse,
                ]);
                if !targets.is_empty() {
                    let reroll = self.all_but(pair);
                    self.push(Intent::Pursue(targets), reroll);
                }
            }
            2 => {
                let targets = self.open_of(&[
                    Category::Yahtzee,
                    Category::FourOfAKind,
                    Category::FullHouse,
                ]);
                if !targets.is_empty() {
                    let reroll = self.all_but(pair);
                    self.push(Intent::Pursue(targets), reroll);
                }
            }
            1 => {
                if self.open(Category::Yahtzee) {
                    let reroll = self.all_but(pair);
                    self.push(Intent::Pursue(vec![Category::Yahtzee]), reroll);
                } else if self.open(Category::FullHouse) {
                    // Four of a kind plus a single: turn one of the four
                    self.push(Intent::Pursue(vec![Category::FullHouse]), smallvec![pair]);
                }
            }
            _ => {
                // Five of a kind: nothing to gain in the upper section
                self.plans.push(Plan::stand(Category::for_face(pair)));
            }
        }
    }

    fn two_pairs(&mut self, low: Face, high: Face, singles: usize, target: Option<Face>) {
        if singles == 1 {
            if self.open(Category::FullHouse) {
                let reroll = self.all_but_any(&[low, high]);
                self.push(Intent::Pursue(vec![Category::FullHouse]), reroll);
            }

            let straights = self.open_of(&[Category::FiveStraight, Category::FourStraight]);
            // Duplicates break the run here, so 2 2 3 3 4 is no draw
            let run = longest_consecutive_run(&self.hand.sorted());
            if !straights.is_empty() && run.len() == 3 {
                let reroll = multiset_difference(self.hand.faces(), &run);
                self.push(Intent::Pursue(straights), reroll);
            }

            let sets = self.open_of(&[
                Category::Yahtzee,
                Category::FourOfAKind,
                Category::ThreeOfAKind,
            ]);
            if let Some(&first) = sets.first() {
                let keep = match target {
                    Some(face) if face == low || face == high => face,
                    _ => high,
                };
                let reroll = self.all_but(keep);
                self.push(Intent::Pursue(vec![first]), reroll);
            }
        } else {
            // Three of one face and two of another
            let sets = self.open_of(&[
                Category::Yahtzee,
                Category::FourOfAKind,
                Category::ThreeOfAKind,
            ]);
            let triple = if self.counts.count(low) == 3 { low } else { high };
            if let Some(&first) = sets.first() {
                let reroll = self.all_but(triple);
                self.push(Intent::Pursue(vec![first]), reroll);
            }
        }
    }
}

/// Four distinct faces that fit inside 1..=5 or 2..=6.
fn straight_possible(distinct: &[Face]) -> bool {
    let within = |lo: Face, hi: Face| distinct.iter().filter(|&&f| (lo..=hi).contains(&f)).count();
    within(1, 5) == 4 || within(2, 6) == 4
}
