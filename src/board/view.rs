//! Derived board view.
//!
//! There is no board object in the game state. `BoardView` is computed from
//! token positions whenever someone needs to ask "who is on square N?":
//! the capture check, the computer player, and display code.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::topology::is_safe;
use crate::core::{Player, PlayerId, TokenId};

/// A token resting on a shared square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Occupant {
    pub player: PlayerId,
    pub token: TokenId,
}

/// Tokens on one square. Four covers the common case without allocating.
pub type Occupants = SmallVec<[Occupant; 4]>;

/// Snapshot of shared-path occupancy.
#[derive(Clone, Debug, Default)]
pub struct BoardView {
    squares: FxHashMap<i16, Occupants>,
}

impl BoardView {
    /// Build the view from a roster.
    #[must_use]
    pub fn from_players(players: &[Player]) -> Self {
        let mut squares: FxHashMap<i16, Occupants> = FxHashMap::default();

        for (seat, player) in players.iter().enumerate() {
            for token in player.tokens() {
                if let Some(square) = token.position().path_square() {
                    squares.entry(square).or_default().push(Occupant {
                        player: PlayerId::new(seat as u8),
                        token: token.id,
                    });
                }
            }
        }

        Self { squares }
    }

    /// Tokens on a shared square, in seat then token-id order.
    #[must_use]
    pub fn occupants(&self, square: i16) -> &[Occupant] {
        self.squares.get(&square).map(|o| o.as_slice()).unwrap_or(&[])
    }

    /// Occupants of `square` that belong to someone other than `player`.
    #[must_use]
    pub fn foreign_occupants(&self, square: i16, player: PlayerId) -> Occupants {
        self.occupants(square)
            .iter()
            .copied()
            .filter(|o| o.player != player)
            .collect()
    }

    /// Two or more tokens of one player on the same square.
    #[must_use]
    pub fn is_block(&self, square: i16) -> bool {
        is_uniform_block(self.occupants(square))
    }

    /// Whether `player` landing on `square` would capture anything.
    ///
    /// Safe squares never capture. A single foreign token (or a mixed stack)
    /// is captured; a foreign same-color block of two or more is immune.
    #[must_use]
    pub fn would_capture(&self, square: i16, player: PlayerId) -> bool {
        if is_safe(square) {
            return false;
        }
        let foreign = self.foreign_occupants(square, player);
        !foreign.is_empty() && !is_uniform_block(&foreign)
    }

    /// Occupied squares, ascending.
    #[must_use]
    pub fn occupied_squares(&self) -> Vec<i16> {
        let mut squares: Vec<_> = self.squares.keys().copied().collect();
        squares.sort_unstable();
        squares
    }
}

/// A stack of two or more tokens all owned by the same player.
fn is_uniform_block(occupants: &[Occupant]) -> bool {
    occupants.len() > 1 && occupants.iter().all(|o| o.player == occupants[0].player)
}
