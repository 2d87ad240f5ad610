//! Player identification, per-player storage, and the player record.
//!
//! ## PlayerId
//!
//! Seat index into the roster. Seat order is fixed at setup.
//!
//! ## PlayerMap
//!
//! Per-seat data storage backed by `Vec` for O(1) access.
//!
//! ## Player
//!
//! Color, name, four tokens, and the extra-roll bookkeeping fields.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::token::{Position, Token, TokenId, TOKENS_PER_PLAYER};
use crate::board::Color;

/// Seat identifier, 0-based in setup order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Index into the roster.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat that plays after this one in a game of `player_count`.
    ///
    /// ```
    /// use rust_ludo::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(1).next(4), PlayerId::new(2));
    /// assert_eq!(PlayerId::new(2).next(3), PlayerId::new(0));
    /// ```
    #[must_use]
    pub fn next(self, player_count: usize) -> PlayerId {
        PlayerId(((self.index() + 1) % player_count.max(1)) as u8)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One value per seat, indexed by `PlayerId`.
///
/// ```
/// use rust_ludo::core::{PlayerId, PlayerMap};
///
/// let mut sixes = PlayerMap::new(2, |_| 0u32);
/// sixes[PlayerId::new(1)] += 1;
/// assert_eq!(sixes[PlayerId::new(1)], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    seats: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Build one entry per seat. Panics outside 1..=4 seats.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(
            (1..=Color::ALL.len()).contains(&player_count),
            "Seat count must be 1-4, got {player_count}"
        );
        Self {
            seats: (0..player_count as u8).map(|i| factory(PlayerId(i))).collect(),
        }
    }

    /// Seats in order with their values.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        (0u8..).map(PlayerId).zip(&self.seats)
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, seat: PlayerId) -> &T {
        &self.seats[seat.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, seat: PlayerId) -> &mut T {
        &mut self.seats[seat.index()]
    }
}

/// A seated player.
///
/// Token positions are private to the crate: the move engine is the only
/// code that changes them. The six bookkeeping fields are maintained by
/// `rules::turn`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub color: Color,
    pub name: String,
    tokens: [Token; TOKENS_PER_PLAYER],
    /// The last roll was a six and the extra roll is still owed.
    pub has_rolled_six: bool,
    /// Consecutive sixes rolled this turn.
    pub six_streak: u8,
    /// Computer-controlled seat.
    pub is_ai: bool,
}

impl Player {
    /// A player with all four tokens in base.
    pub fn new(color: Color, name: impl Into<String>, is_ai: bool) -> Self {
        Self {
            color,
            name: name.into(),
            tokens: [0, 1, 2, 3].map(|i| Token::new(TokenId(i))),
            has_rolled_six: false,
            six_streak: 0,
            is_ai,
        }
    }

    /// Replace token positions, in token-id order.
    ///
    /// Used to restore a session or set up a position; gameplay itself
    /// only moves tokens through `rules::execute_move`.
    #[must_use]
    pub fn with_positions(mut self, positions: [i16; TOKENS_PER_PLAYER]) -> Self {
        for (token, raw) in self.tokens.iter_mut().zip(positions) {
            token.set_position(Position::from_raw(raw));
        }
        self
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token; TOKENS_PER_PLAYER] {
        &self.tokens
    }

    #[must_use]
    pub fn token(&self, id: TokenId) -> Option<&Token> {
        self.tokens.get(id.index())
    }

    pub(crate) fn token_mut(&mut self, id: TokenId) -> Option<&mut Token> {
        self.tokens.get_mut(id.index())
    }

    /// Raw encoded positions in token-id order.
    #[must_use]
    pub fn positions(&self) -> [i16; TOKENS_PER_PLAYER] {
        self.tokens.map(|t| t.position().raw())
    }

    /// Number of finished tokens.
    #[must_use]
    pub fn finished_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.position().is_finished()).count()
    }
}
