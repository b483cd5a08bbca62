//! One player's turn: up to three rolls with a growing set of locked dice.

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, PlayerId, Result, MAX_ROLLS_PER_TURN};
use crate::dice::{is_sub_multiset, multiset_difference, DiceSource, DiceVec, Face, Hand, HAND_SIZE};
use crate::strategy::Decision;

/// Transient state of a turn in progress.
///
/// After every roll `locked` and `just_rolled` together hold five dice.
/// `locked` only grows, and only `just_rolled` dice can go back in the cup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TurnState")]
pub struct Turn {
    player: PlayerId,
    max_rolls: u8,
    rolls: u8,
    locked: DiceVec,
    just_rolled: DiceVec,
}

/// A saved turn as read back, before its counts are checked.
#[derive(Deserialize)]
struct TurnState {
    player: PlayerId,
    max_rolls: u8,
    rolls: u8,
    locked: DiceVec,
    just_rolled: DiceVec,
}

impl TryFrom<TurnState> for Turn {
    type Error = EngineError;

    fn try_from(state: TurnState) -> Result<Self> {
        if !(1..=MAX_ROLLS_PER_TURN).contains(&state.max_rolls) || state.rolls > state.max_rolls {
            return Err(EngineError::MalformedDiceSet(format!(
                "turn at roll {} of {}",
                state.rolls, state.max_rolls
            )));
        }
        let dice = state.locked.len() + state.just_rolled.len();
        let faces_ok = state
            .locked
            .iter()
            .chain(&state.just_rolled)
            .all(|f| (1..=6).contains(f));
        if dice > HAND_SIZE || !faces_ok {
            return Err(EngineError::MalformedDiceSet(format!(
                "turn holds locked {:?} and just rolled {:?}",
                state.locked.as_slice(),
                state.just_rolled.as_slice()
            )));
        }

        Ok(Self {
            player: state.player,
            max_rolls: state.max_rolls,
            rolls: state.rolls,
            locked: state.locked,
            just_rolled: state.just_rolled,
        })
    }
}

impl Turn {
    /// A fresh turn with nothing rolled and nothing locked.
    pub fn start(player: PlayerId, max_rolls: u8) -> Self {
        Self {
            player,
            max_rolls,
            rolls: 0,
            locked: DiceVec::new(),
            just_rolled: DiceVec::new(),
        }
    }

    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// Rolls taken so far.
    pub fn rolls(&self) -> u8 {
        self.rolls
    }

    pub fn max_rolls(&self) -> u8 {
        self.max_rolls
    }

    pub fn rolls_left(&self) -> u8 {
        self.max_rolls.saturating_sub(self.rolls)
    }

    pub fn locked(&self) -> &[Face] {
        &self.locked
    }

    pub fn just_rolled(&self) -> &[Face] {
        &self.just_rolled
    }

    /// Roll every die that is not locked.
    ///
    /// Fails with `RollLimitReached` once the turn's rolls are used up, and
    /// with `MalformedDiceSet` if the source hands back the wrong dice.
    pub fn roll<S: DiceSource + ?Sized>(&mut self, source: &mut S) -> Result<&[Face]> {
        if self.rolls >= self.max_rolls {
            return Err(EngineError::RollLimitReached {
                max: self.max_rolls,
            });
        }

        let count = HAND_SIZE.checked_sub(self.locked.len()).ok_or_else(|| {
            EngineError::MalformedDiceSet(format!(
                "{} dice locked",
                self.locked.len()
            ))
        })?;
        let rolled = source.roll(count);
        if rolled.len() != count || rolled.iter().any(|f| !(1..=6).contains(f)) {
            return Err(EngineError::MalformedDiceSet(format!(
                "dice source returned {:?} for {} dice",
                rolled.as_slice(),
                count
            )));
        }

        self.rolls += 1;
        self.just_rolled = rolled;
        tracing::debug!(
            player = %self.player,
            roll = self.rolls,
            locked = ?self.locked.as_slice(),
            rolled = ?self.just_rolled.as_slice(),
            "rolled dice"
        );
        Ok(&self.just_rolled)
    }

    /// Lock the decision's kept dice and clear the just-rolled set.
    ///
    /// The decision must split the current five dice exactly and keep every
    /// die that is already locked.
    pub fn apply(&mut self, decision: &Decision) -> Result<()> {
        let hand = self.hand()?;

        let mut split: DiceVec = decision.keep.iter().chain(&decision.reroll).copied().collect();
        split.sort_unstable();
        if split.as_slice() != &hand.sorted()[..] {
            return Err(EngineError::MalformedDiceSet(format!(
                "keep {:?} and reroll {:?} do not split {}",
                decision.keep.as_slice(),
                decision.reroll.as_slice(),
                hand
            )));
        }

        if !is_sub_multiset(&self.locked, &decision.keep) {
            let unlocked = multiset_difference(&self.locked, &decision.keep);
            return Err(EngineError::LockedDieRerolled(unlocked.first().copied().unwrap_or(0)));
        }

        self.locked = decision.keep.clone();
        self.just_rolled.clear();
        Ok(())
    }

    /// The five dice currently showing.
    ///
    /// Fails with `MalformedDiceSet` before the first roll and between a
    /// reroll decision and the roll that follows it.
    pub fn hand(&self) -> Result<Hand> {
        Hand::from_parts(&self.locked, &self.just_rolled)
    }
}
