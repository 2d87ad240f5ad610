//! Move policies for computer-controlled seats.
//!
//! Policies are trait-based so the turn driver does not care who decides:
//! - `HeuristicPolicy`: fixed-priority rules (capture, leave base, advance)
//! - `RandomPolicy`: uniform choice among movable tokens
//!
//! Policies only ever see the movable set produced by the move engine, so
//! whatever they return is legal.

use std::cmp::Reverse;

use tracing::trace;

use crate::core::{GameRng, Player, PlayerId, Position, TokenId, DIE_FACES};
use crate::rules::{execute_move, movable_tokens};

/// Policy for choosing which token to move.
pub trait MovePolicy: Send + Sync {
    /// Pick one of `movable` for `player`, or `None` if `movable` is empty.
    fn choose(
        &self,
        players: &[Player],
        player: PlayerId,
        die: u8,
        movable: &[TokenId],
        rng: &mut GameRng,
    ) -> Option<TokenId>;

    /// Short name for logs and reports.
    fn name(&self) -> &'static str;
}

/// Priority rules, first rule with a candidate wins:
///
/// 1. A move that captures an opponent (first by token id).
/// 2. On a six, bring a token out of base.
/// 3. The shared-path token with the largest square number.
/// 4. The token with the largest position overall.
///
/// Ties go to the lowest token id.
#[derive(Clone, Debug, Default)]
pub struct HeuristicPolicy;

impl MovePolicy for HeuristicPolicy {
    fn choose(
        &self,
        players: &[Player],
        player: PlayerId,
        die: u8,
        movable: &[TokenId],
        _rng: &mut GameRng,
    ) -> Option<TokenId> {
        choose_heuristic(players, player, die, movable)
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}

/// Uniform random choice.
#[derive(Clone, Debug, Default)]
pub struct RandomPolicy;

impl MovePolicy for RandomPolicy {
    fn choose(
        &self,
        _players: &[Player],
        _player: PlayerId,
        _die: u8,
        movable: &[TokenId],
        rng: &mut GameRng,
    ) -> Option<TokenId> {
        rng.choose(movable).copied()
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// Choose the computer player's move for `die`.
///
/// Returns `None` only when no token can move; the caller should then pass
/// the turn without executing anything.
#[must_use]
pub fn select_ai_move(players: &[Player], player: PlayerId, die: u8) -> Option<TokenId> {
    let me = players.get(player.index())?;
    let movable = movable_tokens(me, die);
    choose_heuristic(players, player, die, &movable)
}

fn choose_heuristic(
    players: &[Player],
    player: PlayerId,
    die: u8,
    movable: &[TokenId],
) -> Option<TokenId> {
    let me = players.get(player.index())?;
    let candidates: Vec<(TokenId, Position)> = movable
        .iter()
        .filter_map(|&id| me.token(id).map(|t| (id, t.position())))
        .collect();

    if candidates.is_empty() {
        return None;
    }

    // Speculative execution is safe: the roster is only borrowed.
    if let Some(&(id, _)) = candidates
        .iter()
        .find(|&&(id, _)| execute_move(players, player, id, die).captured)
    {
        trace!(%player, token = %id, die, "ai: capture");
        return Some(id);
    }

    if die == DIE_FACES {
        if let Some(&(id, _)) = candidates.iter().find(|(_, pos)| pos.is_base()) {
            trace!(%player, token = %id, "ai: leave base");
            return Some(id);
        }
    }

    // min_by_key keeps the first of equal keys, so Reverse gives first-max.
    let most_advanced = candidates
        .iter()
        .filter_map(|&(id, pos)| pos.path_square().map(|square| (id, square)))
        .min_by_key(|&(_, square)| Reverse(square));
    if let Some((id, square)) = most_advanced {
        trace!(%player, token = %id, square, "ai: advance");
        return Some(id);
    }

    let furthest = candidates
        .iter()
        .min_by_key(|&&(_, pos)| Reverse(pos))
        .map(|&(id, _)| id);
    trace!(%player, token = ?furthest, "ai: furthest");
    furthest
}
