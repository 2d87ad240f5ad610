//! Move records for history tracking.
//!
//! Every roll the turn driver resolves leaves one `MoveRecord`, including
//! rolls that moved nothing (no legal token, or a forfeited six streak).
//! History is used for replay, debugging, and session broadcast.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::token::TokenId;

/// How a roll was resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RollResolution {
    /// A token moved.
    Moved { token: TokenId, captured: bool },
    /// No token could move with this roll.
    NoMove,
    /// Too many sixes in a row; the turn was forfeited.
    Forfeit,
}

/// A recorded roll with metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who rolled.
    pub player: PlayerId,

    /// The die value.
    pub die: u8,

    pub resolution: RollResolution,

    /// Turn number when the roll happened.
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl MoveRecord {
    #[must_use]
    pub fn new(
        player: PlayerId,
        die: u8,
        resolution: RollResolution,
        turn: u32,
        sequence: u32,
    ) -> Self {
        Self {
            player,
            die,
            resolution,
            turn,
            sequence,
        }
    }

    /// The token that moved, if any.
    #[must_use]
    pub fn token(&self) -> Option<TokenId> {
        match self.resolution {
            RollResolution::Moved { token, .. } => Some(token),
            _ => None,
        }
    }

    #[must_use]
    pub fn captured(&self) -> bool {
        matches!(self.resolution, RollResolution::Moved { captured: true, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moved_record() {
        let record = MoveRecord::new(
            PlayerId::new(1),
            4,
            RollResolution::Moved { token: TokenId::new(2), captured: true },
            3,
            0,
        );

        assert_eq!(record.token(), Some(TokenId::new(2)));
        assert!(record.captured());
        assert_eq!(record.turn, 3);
    }

    #[test]
    fn test_unmoved_records() {
        let none = MoveRecord::new(PlayerId::new(0), 2, RollResolution::NoMove, 1, 0);
        assert_eq!(none.token(), None);
        assert!(!none.captured());

        let forfeit = MoveRecord::new(PlayerId::new(0), 6, RollResolution::Forfeit, 1, 2);
        assert_eq!(forfeit.token(), None);
    }

    #[test]
    fn test_record_serialization() {
        let record = MoveRecord::new(
            PlayerId::new(1),
            6,
            RollResolution::Moved { token: TokenId::new(0), captured: false },
            2,
            1,
        );

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
