//! Turn driver.
//!
//! Sequences one roll at a time over the rules:
//! roll -> movable tokens -> (choice) -> execute -> win check -> extra roll
//! or next seat. The driver owns the policy decisions the rules leave open:
//! the six-streak forfeit and whether a capture earns another roll.
//!
//! Interactive callers use `roll` / `apply_roll` and `commit_move`;
//! automated play uses `play_turn` and `play_to_completion`.

use tracing::{debug, info};

use crate::ai::{HeuristicPolicy, MovePolicy, RandomPolicy};
use crate::core::{
    GameState, LudoConfig, PlayerId, PlayerMap, RollResolution, SetupError, TokenId, TurnError,
};
use crate::rules::{
    end_turn, execute_move, grants_extra_roll, has_won, movable_tokens, register_roll, roster,
    GameResult, Movable, RollVerdict,
};

/// What happened when a die was applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RollOutcome {
    /// Pick one of `movable` and call `commit_move`.
    Moves { die: u8, movable: Movable },
    /// Nothing could move; the turn passed.
    NoMoves { die: u8 },
    /// The six-streak limit was reached; the turn passed.
    Forfeit { die: u8 },
}

impl RollOutcome {
    #[must_use]
    pub fn die(&self) -> u8 {
        match self {
            RollOutcome::Moves { die, .. }
            | RollOutcome::NoMoves { die }
            | RollOutcome::Forfeit { die } => *die,
        }
    }
}

/// Summary of one resolved roll.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub player: PlayerId,
    pub die: u8,
    pub resolution: RollResolution,
    /// The same player rolls again.
    pub extra_roll: bool,
    /// Set when this roll won the game.
    pub winner: Option<PlayerId>,
}

/// A configured game. The mutable part lives in `GameState`.
#[derive(Clone, Debug)]
pub struct LudoGame {
    config: LudoConfig,
}

impl LudoGame {
    /// Validate the configuration and build the initial state.
    pub fn new(config: LudoConfig) -> Result<(Self, GameState), SetupError> {
        let players = roster(&config)?;
        let state = GameState::new(players, config.seed);
        Ok((Self { config }, state))
    }

    #[must_use]
    pub fn config(&self) -> &LudoConfig {
        &self.config
    }

    /// `Some(result)` once a player has finished all four tokens.
    #[must_use]
    pub fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state.winner.map(|winner| GameResult {
            winner,
            turn: state.turn_number,
        })
    }

    /// Tokens the active player may move with the pending roll.
    #[must_use]
    pub fn legal_moves(&self, state: &GameState) -> Movable {
        state
            .pending_roll
            .map(|die| movable_tokens(state.active(), die))
            .unwrap_or_default()
    }

    /// Roll the state's dice for the active player.
    pub fn roll(&self, state: &mut GameState) -> Result<RollOutcome, TurnError> {
        self.check_can_roll(state)?;
        let die = state.rng.roll_die();
        self.apply_roll(state, die)
    }

    /// Apply a die value rolled elsewhere (e.g. by a session host).
    pub fn apply_roll(&self, state: &mut GameState, die: u8) -> Result<RollOutcome, TurnError> {
        self.check_can_roll(state)?;
        let player = state.active_player;

        let verdict = register_roll(state.active_mut(), die, self.config.six_streak_limit);
        if verdict == RollVerdict::Forfeit {
            debug!(%player, die, "six streak forfeits the turn");
            state.record(die, RollResolution::Forfeit);
            self.pass_turn(state);
            return Ok(RollOutcome::Forfeit { die });
        }

        let movable = movable_tokens(state.active(), die);
        if movable.is_empty() {
            debug!(%player, die, "no movable tokens");
            state.record(die, RollResolution::NoMove);
            self.pass_turn(state);
            return Ok(RollOutcome::NoMoves { die });
        }

        state.pending_roll = Some(die);
        Ok(RollOutcome::Moves { die, movable })
    }

    /// Spend the pending roll on `token`.
    pub fn commit_move(
        &self,
        state: &mut GameState,
        token: TokenId,
    ) -> Result<TurnReport, TurnError> {
        if let Some(winner) = state.winner {
            return Err(TurnError::GameOver(winner));
        }
        let player = state.active_player;
        let die = state.pending_roll.ok_or(TurnError::NoPendingRoll(player))?;
        if !movable_tokens(state.active(), die).contains(&token) {
            return Err(TurnError::IllegalMove { token, die });
        }

        let outcome = execute_move(state.players(), player, token, die);
        let captured = outcome.captured;
        state.replace_players(outcome.players);
        state.pending_roll = None;

        let resolution = RollResolution::Moved { token, captured };
        state.record(die, resolution);

        if has_won(state.active()) {
            info!(%player, turn = state.turn_number, "game won");
            state.winner = Some(player);
            return Ok(TurnReport {
                player,
                die,
                resolution,
                extra_roll: false,
                winner: Some(player),
            });
        }

        let extra_roll = grants_extra_roll(die, captured, self.config.extra_roll);
        if !extra_roll {
            self.pass_turn(state);
        }

        Ok(TurnReport {
            player,
            die,
            resolution,
            extra_roll,
            winner: None,
        })
    }

    /// Roll once for the active player and let `policy` pick the token.
    pub fn play_turn(
        &self,
        state: &mut GameState,
        policy: &dyn MovePolicy,
    ) -> Result<TurnReport, TurnError> {
        let player = state.active_player;

        let (die, resolution) = match self.roll(state)? {
            RollOutcome::Moves { die, movable } => {
                let choice = policy
                    .choose(&state.players, player, die, &movable, &mut state.rng)
                    .filter(|id| movable.contains(id))
                    .unwrap_or(movable[0]);
                return self.commit_move(state, choice);
            }
            RollOutcome::NoMoves { die } => (die, RollResolution::NoMove),
            RollOutcome::Forfeit { die } => (die, RollResolution::Forfeit),
        };

        Ok(TurnReport {
            player,
            die,
            resolution,
            extra_roll: false,
            winner: None,
        })
    }

    /// Play until someone wins or `max_rolls` rolls have been resolved.
    pub fn play_to_completion(
        &self,
        state: &mut GameState,
        policies: &PlayerMap<Box<dyn MovePolicy>>,
        max_rolls: usize,
    ) -> Option<GameResult> {
        for _ in 0..max_rolls {
            if self.is_terminal(state).is_some() {
                break;
            }
            let policy = policies[state.active_player].as_ref();
            if let Err(err) = self.play_turn(state, policy) {
                debug!(%err, "stopping play-out");
                break;
            }
        }
        self.is_terminal(state)
    }

    /// Default policy per seat: the heuristic for computer seats, random
    /// choices standing in for humans.
    #[must_use]
    pub fn seat_policies(&self, state: &GameState) -> PlayerMap<Box<dyn MovePolicy>> {
        PlayerMap::new(state.player_count(), |seat| -> Box<dyn MovePolicy> {
            if state.player(seat).is_ai {
                Box::new(HeuristicPolicy)
            } else {
                Box::new(RandomPolicy)
            }
        })
    }

    fn check_can_roll(&self, state: &GameState) -> Result<(), TurnError> {
        if let Some(winner) = state.winner {
            return Err(TurnError::GameOver(winner));
        }
        if let Some(die) = state.pending_roll {
            return Err(TurnError::RollPending {
                player: state.active_player,
                die,
            });
        }
        Ok(())
    }

    fn pass_turn(&self, state: &mut GameState) {
        end_turn(state.active_mut());
        state.advance_turn();
        debug!(next = %state.active_player, turn = state.turn_number, "turn passed");
    }
}
