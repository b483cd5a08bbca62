//! Who claimed what.
//!
//! The shared card only stores a `PlayerId` per claimed category; totals and
//! results are read back per seat through a `PlayerMap`.

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// A seat at the table, counted from zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Seat number as a `usize`, for indexing.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Every seat in a game of `player_count` players, in turn order.
    ///
    /// ```
    /// use yahtzee_duel::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(2).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One value per seat, such as a running total.
///
/// ```
/// use yahtzee_duel::core::{PlayerId, PlayerMap};
///
/// let totals = PlayerMap::new(2, |p| if p.index() == 1 { 25u32 } else { 0 });
/// assert_eq!(totals[PlayerId::new(1)], 25);
/// assert_eq!(totals.player_count(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    seats: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Fill every seat from `value_for`.
    ///
    /// # Panics
    ///
    /// Panics unless `player_count` is 1-255.
    pub fn new(player_count: usize, value_for: impl Fn(PlayerId) -> T) -> Self {
        assert!(
            (1..=255).contains(&player_count),
            "Player count must be 1-255"
        );
        Self {
            seats: PlayerId::all(player_count).map(value_for).collect(),
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.len()
    }

    /// The seat's value. Panics for a seat outside the map.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.seats[player.index()]
    }

    /// Seats with their values, in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all(self.seats.len()).zip(&self.seats)
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &T {
        self.get(player)
    }
}
