//! Game configuration.
//!
//! `LudoConfig` describes a game at setup time:
//! - `GameMode`: versus-computer or offline hot-seat
//! - seat names and which seats the computer plays
//! - dice seed and the extra-roll policy the turn driver enforces
//!
//! The move engine does not read the configuration; only setup and the
//! turn driver do.

use serde::{Deserialize, Serialize};

use super::error::SetupError;
use crate::board::Color;

/// How seats are assigned at setup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// One human (Red) against one computer player on the opposing color.
    VersusAi,
    /// Two to four players sharing one device, colors in table order.
    #[default]
    Offline,
}

impl GameMode {
    /// Whether this mode can seat `count` players.
    #[must_use]
    pub fn supports(self, count: usize) -> bool {
        match self {
            GameMode::VersusAi => count == 2,
            GameMode::Offline => (2..=Color::ALL.len()).contains(&count),
        }
    }
}

/// When a player gets to roll again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExtraRollPolicy {
    /// Only a six grants another roll.
    SixOnly,
    /// A six or a capture grants another roll.
    #[default]
    SixOrCapture,
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LudoConfig {
    pub mode: GameMode,

    /// Number of seats (2-4).
    pub player_count: usize,

    /// Display names in seat order. `None` uses mode defaults.
    pub names: Option<Vec<String>>,

    /// Extra seats played by the computer, on top of the mode's own.
    pub computer_seats: Vec<usize>,

    /// Dice seed.
    pub seed: u64,

    /// Consecutive sixes that forfeit the turn.
    pub six_streak_limit: u8,

    pub extra_roll: ExtraRollPolicy,
}

impl Default for LudoConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::Offline,
            player_count: 4,
            names: None,
            computer_seats: Vec::new(),
            seed: 0,
            six_streak_limit: 3,
            extra_roll: ExtraRollPolicy::SixOrCapture,
        }
    }
}

impl LudoConfig {
    /// Offline game with `player_count` human seats.
    pub fn offline(player_count: usize) -> Self {
        Self {
            player_count,
            ..Self::default()
        }
    }

    /// Human against the computer.
    pub fn versus_ai() -> Self {
        Self {
            mode: GameMode::VersusAi,
            player_count: 2,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Let the computer play an additional seat.
    #[must_use]
    pub fn with_computer_seat(mut self, seat: usize) -> Self {
        if !self.computer_seats.contains(&seat) {
            self.computer_seats.push(seat);
        }
        self
    }

    /// Let the computer play every seat.
    #[must_use]
    pub fn all_computer(mut self) -> Self {
        self.computer_seats = (0..self.player_count).collect();
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_six_streak_limit(mut self, limit: u8) -> Self {
        self.six_streak_limit = limit;
        self
    }

    #[must_use]
    pub fn with_extra_roll(mut self, policy: ExtraRollPolicy) -> Self {
        self.extra_roll = policy;
        self
    }

    /// Check that the configuration describes a playable game.
    pub fn validate(&self) -> Result<(), SetupError> {
        if !self.mode.supports(self.player_count) {
            return Err(SetupError::PlayerCount {
                mode: self.mode,
                count: self.player_count,
            });
        }

        if let Some(names) = &self.names {
            if names.len() != self.player_count {
                return Err(SetupError::NameCount {
                    expected: self.player_count,
                    actual: names.len(),
                });
            }
        }

        if let Some(&seat) = self.computer_seats.iter().find(|&&s| s >= self.player_count) {
            return Err(SetupError::ComputerSeat {
                seat,
                count: self.player_count,
            });
        }

        if self.six_streak_limit == 0 {
            return Err(SetupError::SixStreakLimit);
        }

        Ok(())
    }
}
