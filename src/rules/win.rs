//! Win detection.

use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerId};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: PlayerId,
    /// Turn on which the last token finished.
    pub turn: u32,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }
}

/// A player has won once all four tokens are finished.
#[must_use]
pub fn has_won(player: &Player) -> bool {
    player.tokens().iter().all(|t| t.position().is_finished())
}

/// First seat whose tokens are all finished.
#[must_use]
pub fn find_winner(players: &[Player]) -> Option<PlayerId> {
    players
        .iter()
        .position(has_won)
        .map(|seat| PlayerId::new(seat as u8))
}
