//! Extra-roll bookkeeping.
//!
//! The per-player state machine lives in two fields rather than an enum:
//! `has_rolled_six` and `six_streak`. These helpers keep them consistent;
//! the turn driver decides what to do with the verdicts.

use crate::core::{ExtraRollPolicy, Player, DIE_FACES};

/// What a roll means for the current turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RollVerdict {
    /// Resolve the roll normally.
    Play,
    /// The six-streak limit was reached; the turn is lost.
    Forfeit,
}

/// Update the six bookkeeping for a new roll.
///
/// A six raises the streak; reaching `limit` consecutive sixes forfeits
/// the turn and clears the streak. Any other value clears both fields.
pub fn register_roll(player: &mut Player, die: u8, limit: u8) -> RollVerdict {
    if die != DIE_FACES {
        player.has_rolled_six = false;
        player.six_streak = 0;
        return RollVerdict::Play;
    }

    player.six_streak = player.six_streak.saturating_add(1);
    if player.six_streak >= limit {
        end_turn(player);
        RollVerdict::Forfeit
    } else {
        player.has_rolled_six = true;
        RollVerdict::Play
    }
}

/// Whether the player rolls again after resolving `die`.
#[must_use]
pub fn grants_extra_roll(die: u8, captured: bool, policy: ExtraRollPolicy) -> bool {
    die == DIE_FACES || (captured && policy == ExtraRollPolicy::SixOrCapture)
}

/// Clear the bookkeeping when the turn passes.
pub fn end_turn(player: &mut Player) {
    player.has_rolled_six = false;
    player.six_streak = 0;
}
