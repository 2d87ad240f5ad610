//! Computer opponents.
//!
//! `select_ai_move` is the fixed-priority heuristic the versus-computer mode
//! uses. The `MovePolicy` trait lets the turn driver and the `simulate`
//! binary swap in other strategies per seat.

pub mod policy;

pub use policy::{select_ai_move, HeuristicPolicy, MovePolicy, RandomPolicy};
