//! Core types: players, tokens, RNG, configuration, history, state, errors.

pub mod player;
pub mod token;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;
pub mod error;

pub use player::{Player, PlayerId, PlayerMap};
pub use token::{Position, Token, TokenId, TOKENS_PER_PLAYER};
pub use rng::{GameRng, GameRngState, DIE_FACES};
pub use config::{ExtraRollPolicy, GameMode, LudoConfig};
pub use action::{MoveRecord, RollResolution};
pub use state::GameState;
pub use error::{SetupError, SnapshotError, TurnError};
