//! # rust-ludo
//!
//! Rules engine for a four-player race game in the Ludo family.
//!
//! ## Design Principles
//!
//! 1. **Positions are the board**: a token's encoded position is the only
//!    source of truth. Occupancy is derived on demand (`board::BoardView`).
//!
//! 2. **Copy-on-write moves**: `rules::execute_move` borrows the roster and
//!    returns a new one, so speculative evaluation needs no undo logic.
//!
//! 3. **Total rules**: illegal inputs to the move engine are no-ops, never
//!    errors. Only setup, the turn driver, and snapshots can fail.
//!
//! ## Modules
//!
//! - `board`: static topology (path, stretches, safe squares) and occupancy view
//! - `core`: players, tokens, dice, configuration, history, state, errors
//! - `rules`: setup, movable tokens, move execution, extra rolls, win check
//! - `ai`: computer move selection
//! - `game`: turn driver and session snapshots

pub mod board;
pub mod core;
pub mod rules;
pub mod ai;
pub mod game;

// Re-export commonly used types
pub use crate::board::{is_safe, BoardView, Color, HOME_LEN, PATH_LEN, SAFE_SQUARES};

pub use crate::core::{
    ExtraRollPolicy, GameMode, GameRng, GameRngState, GameState, LudoConfig, MoveRecord, Player,
    PlayerId, PlayerMap, Position, RollResolution, SetupError, SnapshotError, Token, TokenId,
    TurnError,
};

pub use crate::rules::{
    execute_move, has_won, initialize, movable_tokens, GameResult, Movable, MoveOutcome,
};

pub use crate::ai::{select_ai_move, HeuristicPolicy, MovePolicy, RandomPolicy};

pub use crate::game::{LudoGame, RollOutcome, Snapshot, TurnReport};
