//! Session snapshots.
//!
//! Multiplayer lobbies keep their state in an external session store that
//! persists and broadcasts whatever the engine produces. `Snapshot` is that
//! opaque payload: serde-serializable, `bincode` on the wire, and complete
//! enough that a restored game keeps rolling the same dice.
//!
//! The byte layout is not a stable persistence format.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::board::Color;
use crate::core::{GameRng, GameRngState, GameState, MoveRecord, Player, PlayerId, SnapshotError};
use crate::rules::{find_winner, has_won, movable_tokens};

/// Serializable copy of a `GameState`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub players: Vec<Player>,
    pub active_player: PlayerId,
    pub turn_number: u32,
    pub action_sequence: u32,
    pub pending_roll: Option<u8>,
    pub winner: Option<PlayerId>,
    pub history: Vector<MoveRecord>,
    pub rng: GameRngState,
}

impl Snapshot {
    /// Encode with `bincode`.
    pub fn encode(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode bytes produced by `encode`.
    pub fn decode(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl GameState {
    /// Capture the full state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            players: self.players.clone(),
            active_player: self.active_player,
            turn_number: self.turn_number,
            action_sequence: self.action_sequence,
            pending_roll: self.pending_roll,
            winner: self.winner,
            history: self.history.clone(),
            rng: self.rng.state(),
        }
    }

    /// Restore a state, rejecting snapshots the engine could not play on.
    ///
    /// Checks, in order: seat count, seat references, one seat per color,
    /// token slots and positions, the recorded winner, and the pending roll.
    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self, SnapshotError> {
        validate(&snapshot)?;

        Ok(Self {
            players: snapshot.players,
            active_player: snapshot.active_player,
            turn_number: snapshot.turn_number,
            action_sequence: snapshot.action_sequence,
            pending_roll: snapshot.pending_roll,
            winner: snapshot.winner,
            history: snapshot.history,
            rng: GameRng::from_state(&snapshot.rng),
        })
    }
}

fn validate(snapshot: &Snapshot) -> Result<(), SnapshotError> {
    let players = &snapshot.players;
    let count = players.len();
    if !(2..=Color::ALL.len()).contains(&count) {
        return Err(SnapshotError::PlayerCount(count));
    }
    for seat in std::iter::once(snapshot.active_player).chain(snapshot.winner) {
        if seat.index() >= count {
            return Err(SnapshotError::Seat(seat));
        }
    }

    let mut colors = FxHashSet::default();
    for (seat, player) in (0u8..).map(PlayerId::new).zip(players) {
        if !colors.insert(player.color) {
            return Err(SnapshotError::DuplicateColor(player.color));
        }
        for (slot, token) in player.tokens().iter().enumerate() {
            if token.id.index() != slot {
                return Err(SnapshotError::TokenSlot { seat, slot, found: token.id });
            }
            if !token.position().is_valid_for(token.id) {
                return Err(SnapshotError::Position {
                    seat,
                    token: token.id,
                    raw: token.position().raw(),
                });
            }
        }
    }

    match snapshot.winner {
        Some(winner) if !has_won(&players[winner.index()]) => {
            return Err(SnapshotError::Winner(winner));
        }
        None => {
            if let Some(finished) = find_winner(players) {
                return Err(SnapshotError::UnrecordedWinner(finished));
            }
        }
        Some(_) => {}
    }

    if let Some(die) = snapshot.pending_roll {
        let player = snapshot.active_player;
        let playable = snapshot.winner.is_none()
            && !movable_tokens(&players[player.index()], die).is_empty();
        if !playable {
            return Err(SnapshotError::PendingRoll { player, die });
        }
    }

    Ok(())
}
