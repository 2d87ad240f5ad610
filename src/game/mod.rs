//! Turn driver and session snapshots.
//!
//! The rules are pure functions; this module sequences them into a game:
//! - Roll dice from the state's deterministic RNG
//! - Enforce the six-streak forfeit and the extra-roll policy
//! - Record history and stop when someone wins
//!
//! Supports 2-4 seats in any mix of humans and computer players.

mod driver;
mod snapshot;

pub use driver::{LudoGame, RollOutcome, TurnReport};
pub use snapshot::Snapshot;
