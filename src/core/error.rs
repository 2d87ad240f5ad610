//! Error types for setup, turn driving, and snapshots.
//!
//! The move engine itself never fails: illegal inputs degrade to no-ops.
//! Only the layers around it report errors.

use super::player::PlayerId;
use super::token::TokenId;
use super::config::GameMode;
use crate::board::Color;

/// Invalid game configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("{mode:?} mode does not support {count} players")]
    PlayerCount { mode: GameMode, count: usize },
    #[error("expected {expected} player names, got {actual}")]
    NameCount { expected: usize, actual: usize },
    #[error("computer seat {seat} is out of range for {count} players")]
    ComputerSeat { seat: usize, count: usize },
    #[error("six-streak limit must be at least 1")]
    SixStreakLimit,
}

/// A turn-driver call that does not fit the current turn.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error("no die has been rolled for {0}")]
    NoPendingRoll(PlayerId),
    #[error("{player} must move for the pending roll of {die} first")]
    RollPending { player: PlayerId, die: u8 },
    #[error("{token} cannot move with a roll of {die}")]
    IllegalMove { token: TokenId, die: u8 },
    #[error("game is already won by {0}")]
    GameOver(PlayerId),
}

/// Failure to encode or restore a session snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot codec error: {0}")]
    Codec(#[from] bincode::Error),
    #[error("snapshot has {0} players, expected 2 to 4")]
    PlayerCount(usize),
    #[error("snapshot seat {0} is out of range")]
    Seat(PlayerId),
    #[error("snapshot seats {0} twice")]
    DuplicateColor(Color),
    #[error("snapshot {seat} holds {found} in slot {slot}")]
    TokenSlot { seat: PlayerId, slot: usize, found: TokenId },
    #[error("snapshot {seat} has {token} at invalid position {raw}")]
    Position { seat: PlayerId, token: TokenId, raw: i16 },
    #[error("snapshot pending roll of {die} cannot be played by {player}")]
    PendingRoll { player: PlayerId, die: u8 },
    #[error("snapshot winner {0} has not finished all tokens")]
    Winner(PlayerId),
    #[error("snapshot records no winner but {0} has finished all tokens")]
    UnrecordedWinner(PlayerId),
}
