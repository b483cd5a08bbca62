//! The game driver: a shared scorecard, a round counter and seeded dice.

use crate::core::{DiceRng, EngineError, GameConfig, PlayerId, PlayerMap, Result};
use crate::dice::{DiceSource, DiceVec, Hand};
use crate::scoring::{Category, ScoreCard};
use crate::strategy::{Decision, DecisionObserver, RetentionStrategy, TracingObserver};

use super::snapshot::Snapshot;
use super::turn::Turn;

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Every player finished level.
    Draw,
    /// Several players share the top score, but not all of them.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
            GameResult::Draw => false,
        }
    }
}

/// Everything that happened in one computer turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    pub player: PlayerId,
    /// Faces produced by each roll, in order.
    pub rolls: Vec<DiceVec>,
    /// Keep/reroll decisions, one per roll that was followed by a choice.
    pub decisions: Vec<Decision>,
    /// The dice the turn ended on.
    pub hand: Hand,
    /// Category claimed and points scored; `None` if nothing open scored.
    pub claim: Option<(Category, u32)>,
}

/// Builder for creating a `Game`.
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player_count(mut self, count: usize) -> Self {
        assert!((1..=255).contains(&count), "Player count must be 1-255");
        self.config.player_count = count;
        self
    }

    pub fn max_rolls(mut self, max_rolls: u8) -> Self {
        self.config = self.config.with_max_rolls(max_rolls);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Use a whole config.
    ///
    /// # Panics
    ///
    /// Panics if the config is out of range, like the other setters.
    pub fn config(mut self, config: GameConfig) -> Self {
        if let Err(err) = config.validate() {
            panic!("{err}");
        }
        self.config = config;
        self
    }

    /// Build a game that reports decisions through `tracing`.
    pub fn build(self) -> Game {
        self.build_with_observer(TracingObserver)
    }

    /// Build a game whose strategy reports to `observer`.
    pub fn build_with_observer<O: DecisionObserver>(self, observer: O) -> Game<O> {
        Game {
            rng: DiceRng::new(self.config.seed),
            config: self.config,
            card: ScoreCard::new(),
            round: 1,
            strategy: RetentionStrategy::with_observer(observer),
        }
    }
}

/// A game in progress.
///
/// Turn order is up to the caller: the game only tracks the card, the round
/// and the dice. Computer turns run start to finish through
/// `play_computer_turn`; human turns drive a `Turn` and call `claim`.
#[derive(Clone, Debug)]
pub struct Game<O = TracingObserver> {
    config: GameConfig,
    card: ScoreCard,
    round: u32,
    rng: DiceRng,
    strategy: RetentionStrategy<O>,
}

impl<O: DecisionObserver> Game<O> {
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn card(&self) -> &ScoreCard {
        &self.card
    }

    /// Current round, starting at 1.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn strategy(&self) -> &RetentionStrategy<O> {
        &self.strategy
    }

    /// The game's own dice, for driving a human turn.
    pub fn dice(&mut self) -> &mut DiceRng {
        &mut self.rng
    }

    /// Begin a turn for `player`.
    pub fn start_turn(&self, player: PlayerId) -> Turn {
        Turn::start(player, self.config.max_rolls)
    }

    /// Claim `category` for `player` in the current round.
    pub fn claim(&mut self, category: Category, hand: &Hand, player: PlayerId) -> Result<u32> {
        self.check_player(player)?;
        let points = self.card.claim(category, hand, player, self.round)?;
        tracing::info!(
            %player,
            %category,
            points,
            round = self.round,
            "category claimed"
        );
        Ok(points)
    }

    /// Move on to the next round.
    pub fn advance_round(&mut self) {
        self.round += 1;
        tracing::debug!(round = self.round, "round started");
    }

    /// Whether every category has been claimed.
    pub fn is_over(&self) -> bool {
        self.card.is_all_filled()
    }

    /// Each player's score so far.
    pub fn totals(&self) -> PlayerMap<u32> {
        PlayerMap::new(self.config.player_count, |p| self.card.total_score(p))
    }

    /// The outcome, once every category is claimed.
    pub fn result(&self) -> Option<GameResult> {
        if !self.is_over() {
            return None;
        }

        let totals = self.totals();
        let top = totals.iter().map(|(_, &score)| score).max()?;
        let leaders: Vec<PlayerId> = totals
            .iter()
            .filter(|(_, &score)| score == top)
            .map(|(p, _)| p)
            .collect();

        Some(match leaders.len() {
            1 => GameResult::Winner(leaders[0]),
            n if n == totals.player_count() => GameResult::Draw,
            _ => GameResult::Winners(leaders),
        })
    }

    /// Play a whole computer turn with the game's dice.
    pub fn play_computer_turn(&mut self, player: PlayerId) -> Result<TurnOutcome> {
        let mut rng = self.rng.clone();
        let outcome = self.play_computer_turn_with(player, &mut rng);
        self.rng = rng;
        outcome
    }

    /// Play a whole computer turn with dice from `source`.
    ///
    /// Rolls, decides and rerolls until the strategy stands or the rolls run
    /// out, then claims the best open category. If nothing open scores, the
    /// turn ends without a claim.
    pub fn play_computer_turn_with<S: DiceSource + ?Sized>(
        &mut self,
        player: PlayerId,
        source: &mut S,
    ) -> Result<TurnOutcome> {
        self.check_player(player)?;

        let mut turn = self.start_turn(player);
        let mut rolls = Vec::new();
        let mut decisions = Vec::new();

        let hand = loop {
            rolls.push(DiceVec::from_slice(turn.roll(source)?));
            let hand = turn.hand()?;
            if turn.rolls_left() == 0 {
                break hand;
            }

            let decision = if turn.rolls() == 1 {
                self.strategy.decide_first_roll(&hand, &self.card)
            } else {
                self.strategy
                    .decide_second_roll(turn.just_rolled(), turn.locked(), &self.card)?
            };
            turn.apply(&decision)?;
            let stands = decision.stands();
            decisions.push(decision);
            if stands {
                break hand;
            }
        };

        let best = self.card.best_available_hand(&hand);
        let claim = match best.category {
            Some(category) => Some((category, self.claim(category, &hand, player)?)),
            None => {
                tracing::info!(%player, %hand, "no open category scores, nothing claimed");
                None
            }
        };

        Ok(TurnOutcome {
            player,
            rolls,
            decisions,
            hand,
            claim,
        })
    }

    /// Capture the card, round and dice position.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.card, self.round, Some(self.rng.state()))
    }

    /// Resume from a snapshot. The dice continue where the snapshot left
    /// them, or restart from the config seed when it saved no position.
    pub fn restore(config: GameConfig, snapshot: &Snapshot, observer: O) -> Result<Self> {
        config.validate()?;
        let card = snapshot.to_scorecard()?;
        if let Some(player) = snapshot.max_claimant() {
            if player.index() >= config.player_count {
                return Err(EngineError::InvalidSnapshot(format!(
                    "{} claimed a category but the game has {} players",
                    player, config.player_count
                )));
            }
        }

        let rng = match &snapshot.rng {
            Some(state) => DiceRng::from_state(state),
            None => DiceRng::new(config.seed),
        };

        Ok(Self {
            config,
            card,
            round: snapshot.round.max(1),
            rng,
            strategy: RetentionStrategy::with_observer(observer),
        })
    }

    fn check_player(&self, player: PlayerId) -> Result<()> {
        if player.index() >= self.config.player_count {
            return Err(EngineError::UnknownPlayer(player));
        }
        Ok(())
    }
}
