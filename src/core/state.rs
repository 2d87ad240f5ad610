//! Game state held by the turn driver.
//!
//! ## GameState
//!
//! - Roster of players in fixed seat order (the only board data; squares are
//!   derived from token positions)
//! - Active player, turn and roll counters
//! - The die rolled but not yet spent
//! - Roll history and the deterministic dice
//!
//! History uses an `im` persistent vector so cloning a state is cheap.

use im::Vector;

use super::action::{MoveRecord, RollResolution};
use super::player::{Player, PlayerId};
use super::rng::GameRng;

/// Full state of one game.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) players: Vec<Player>,

    pub(crate) active_player: PlayerId,

    /// Turn number (starts at 1, increments when the turn passes).
    pub turn_number: u32,

    /// Roll sequence within the current turn.
    pub action_sequence: u32,

    pub(crate) pending_roll: Option<u8>,

    pub(crate) winner: Option<PlayerId>,

    /// Every resolved roll, oldest first.
    pub history: Vector<MoveRecord>,

    pub(crate) rng: GameRng,
}

impl GameState {
    /// Create a state for a freshly initialized roster. Seat 0 starts.
    #[must_use]
    pub fn new(players: Vec<Player>, seed: u64) -> Self {
        assert!(!players.is_empty(), "Must have at least 1 player");

        Self {
            players,
            active_player: PlayerId::new(0),
            turn_number: 1,
            action_sequence: 0,
            pending_roll: None,
            winner: None,
            history: Vector::new(),
            rng: GameRng::new(seed),
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Roster in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Seat whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active_player
    }

    #[must_use]
    pub fn active(&self) -> &Player {
        self.player(self.active_player)
    }

    /// Die rolled by the active player and not yet spent on a move.
    #[must_use]
    pub fn pending_roll(&self) -> Option<u8> {
        self.pending_roll
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    pub(crate) fn active_mut(&mut self) -> &mut Player {
        &mut self.players[self.active_player.index()]
    }

    /// Install the roster produced by the move engine.
    pub(crate) fn replace_players(&mut self, players: Vec<Player>) {
        debug_assert_eq!(players.len(), self.players.len());
        self.players = players;
    }

    /// Append a history record for the active player.
    pub(crate) fn record(&mut self, die: u8, resolution: RollResolution) {
        let sequence = self.action_sequence;
        self.action_sequence += 1;
        self.history.push_back(MoveRecord::new(
            self.active_player,
            die,
            resolution,
            self.turn_number,
            sequence,
        ));
    }

    /// Pass the turn to the next seat.
    pub(crate) fn advance_turn(&mut self) {
        self.active_player = self.active_player.next(self.players.len());
        self.turn_number += 1;
        self.action_sequence = 0;
        self.pending_roll = None;
    }
}
