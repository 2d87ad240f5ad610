//! Rules of the race: setup, movement, captures, extra rolls, winning.
//!
//! Every function here is a pure computation over borrowed state. The turn
//! driver in `game` calls into these rules but never reimplements them.

pub mod setup;
pub mod movement;
pub mod turn;
pub mod win;

pub use setup::{initialize, roster};
pub use movement::{destination, execute_move, is_movable, movable_tokens, Movable, MoveOutcome};
pub use turn::{end_turn, grants_extra_roll, register_roll, RollVerdict};
pub use win::{find_winner, has_won, GameResult};
