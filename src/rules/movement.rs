//! Move engine: which tokens may move, and what a move does.
//!
//! ## Copy-on-write
//!
//! `execute_move` borrows the roster and returns a fresh one. The caller's
//! snapshot is never touched, which is what lets the computer player try
//! every candidate move and throw the results away.
//!
//! ## Degradation
//!
//! Inputs that `movable_tokens` would have rejected (unknown seat or token,
//! a base token without a six, a finished token, an overshooting stretch
//! move) are not errors: the move is a no-op and nothing is captured.

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::board::{BoardView, Color, HOME_LEN, PATH_LEN};
use crate::core::{Player, PlayerId, Position, Token, TokenId, DIE_FACES};

/// Tokens that can move for one roll, in token-id order.
pub type Movable = SmallVec<[TokenId; 4]>;

/// Result of `execute_move`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Roster after the move.
    pub players: Vec<Player>,
    /// At least one foreign token was sent back to base.
    pub captured: bool,
}

/// Where `token` ends up after rolling `die`, or `None` if it cannot move.
///
/// Applies the path, home-stretch, and finish transitions but not captures.
#[must_use]
pub fn destination(color: Color, token: &Token, die: u8) -> Option<Position> {
    if !(1..=DIE_FACES).contains(&die) {
        return None;
    }
    let die = i16::from(die);
    let position = token.position();

    let landed = if position.is_finished() {
        return None;
    } else if position.is_base() {
        if die != i16::from(DIE_FACES) {
            return None;
        }
        Position::on_path(color.path_entry())
    } else if let Some(index) = position.stretch_index() {
        if index + die >= HOME_LEN {
            return None;
        }
        Position::in_stretch(index + die)
    } else {
        let square = position.path_square()?;
        let to_entry = (color.home_entry() - square).rem_euclid(PATH_LEN);
        let steps_past_entry = die - to_entry - 1;

        if die > to_entry && steps_past_entry < HOME_LEN {
            Position::in_stretch(steps_past_entry)
        } else {
            // Overshooting the stretch keeps going round the shared path.
            Position::on_path(square + die)
        }
    };

    if landed.stretch_index() == Some(HOME_LEN - 1) {
        Some(Position::finished(token.id))
    } else {
        Some(landed)
    }
}

/// Whether a single token may move with `die`.
///
/// Shared-path tokens are always movable; landing rules are resolved at
/// execute time.
#[must_use]
pub fn is_movable(token: &Token, die: u8) -> bool {
    if !(1..=DIE_FACES).contains(&die) {
        return false;
    }
    let position = token.position();

    if position.is_finished() {
        false
    } else if position.is_base() {
        die == DIE_FACES
    } else if let Some(index) = position.stretch_index() {
        index + i16::from(die) < HOME_LEN
    } else {
        position.is_on_path()
    }
}

/// Tokens of `player` that may move this roll. No side effects.
#[must_use]
pub fn movable_tokens(player: &Player, die: u8) -> Movable {
    player
        .tokens()
        .iter()
        .filter(|t| is_movable(t, die))
        .map(|t| t.id)
        .collect()
}

/// Move one token and resolve captures, returning a new roster.
///
/// The input roster is never modified.
#[must_use]
pub fn execute_move(players: &[Player], player: PlayerId, token: TokenId, die: u8) -> MoveOutcome {
    let mut next = players.to_vec();

    let Some(landed) = move_token(&mut next, player, token, die) else {
        trace!(%player, %token, die, "move is a no-op");
        return MoveOutcome { players: next, captured: false };
    };

    let captured = landed
        .path_square()
        .is_some_and(|square| capture_on(&mut next, square, player));

    debug!(%player, %token, die, to = %landed, captured, "executed move");
    MoveOutcome { players: next, captured }
}

fn move_token(
    players: &mut [Player],
    player: PlayerId,
    token: TokenId,
    die: u8,
) -> Option<Position> {
    let mover = players.get_mut(player.index())?;
    let color = mover.color;
    let token = mover.token_mut(token)?;
    let landed = destination(color, token, die)?;
    token.set_position(landed);
    Some(landed)
}

/// Send foreign tokens on `square` back to base unless the square is safe
/// or they form a block.
fn capture_on(players: &mut [Player], square: i16, mover: PlayerId) -> bool {
    let view = BoardView::from_players(players);
    if !view.would_capture(square, mover) {
        return false;
    }

    for occupant in view.foreign_occupants(square, mover) {
        if let Some(victim) = players[occupant.player.index()].token_mut(occupant.token) {
            victim.set_position(Position::BASE);
            debug!(victim = %occupant.player, token = %occupant.token, square, "captured");
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red(positions: [i16; 4]) -> Player {
        Player::new(Color::Red, "Red", false).with_positions(positions)
    }

    fn green(positions: [i16; 4]) -> Player {
        Player::new(Color::Green, "Green", false).with_positions(positions)
    }

    fn token_at(id: u8, raw: i16) -> Token {
        Token::at(TokenId::new(id), Position::from_raw(raw))
    }

    const RED: PlayerId = PlayerId::new(0);
    const GREEN: PlayerId = PlayerId::new(1);

    #[test]
    fn test_destination_leave_base() {
        assert_eq!(destination(Color::Red, &token_at(0, -1), 6), Some(Position::on_path(0)));
        assert_eq!(destination(Color::Blue, &token_at(0, -1), 6), Some(Position::on_path(39)));
        assert_eq!(destination(Color::Red, &token_at(0, -1), 5), None);
    }

    #[test]
    fn test_destination_wraps_shared_path() {
        // Green's home entry is 11, so 49 -> 3 stays on the path.
        assert_eq!(destination(Color::Green, &token_at(0, 49), 6), Some(Position::on_path(3)));
    }

    #[test]
    fn test_destination_turns_into_stretch() {
        // Red home entry 50: landing on it stays on the path.
        assert_eq!(destination(Color::Red, &token_at(0, 47), 3), Some(Position::on_path(50)));
        // One past the entry is stretch index 0.
        assert_eq!(destination(Color::Red, &token_at(0, 47), 4), Some(Position::in_stretch(0)));
        assert_eq!(destination(Color::Red, &token_at(0, 50), 3), Some(Position::in_stretch(2)));
        // Green turns off after square 11.
        assert_eq!(destination(Color::Green, &token_at(0, 9), 5), Some(Position::in_stretch(2)));
    }

    #[test]
    fn test_destination_finishes() {
        let finished = |id| Some(Position::finished(TokenId::new(id)));
        assert_eq!(destination(Color::Red, &token_at(3, 102), 3), finished(3));
        assert_eq!(destination(Color::Red, &token_at(1, 50), 6), finished(1));
        assert_eq!(destination(Color::Red, &token_at(0, 103), 3), None);
        assert_eq!(destination(Color::Red, &token_at(0, 201), 1), None);
    }

    #[test]
    fn test_destination_rejects_bad_die() {
        assert_eq!(destination(Color::Red, &token_at(0, 10), 0), None);
        assert_eq!(destination(Color::Red, &token_at(0, 10), 7), None);
    }

    #[test]
    fn test_movable_tokens() {
        let player = red([-1, 10, 103, 200]);

        assert_eq!(movable_tokens(&player, 2).as_slice(), &[TokenId::new(1), TokenId::new(2)]);
        assert_eq!(movable_tokens(&player, 3).as_slice(), &[TokenId::new(1)]);
        assert_eq!(movable_tokens(&player, 6).as_slice(), &[TokenId::new(0), TokenId::new(1)]);
    }

    #[test]
    fn test_base_needs_six() {
        let player = red([-1, -1, -1, -1]);
        for die in 1..=5 {
            assert!(movable_tokens(&player, die).is_empty());
        }
        assert_eq!(movable_tokens(&player, 6).len(), 4);
    }

    #[test]
    fn test_execute_leave_base() {
        let players = vec![red([-1, -1, -1, -1]), green([-1, -1, -1, -1])];
        let outcome = execute_move(&players, RED, TokenId::new(0), 6);

        assert_eq!(outcome.players[0].positions(), [0, -1, -1, -1]);
        assert!(!outcome.captured);
        assert_eq!(players[0].positions(), [-1, -1, -1, -1]);
    }

    #[test]
    fn test_execute_capture_single() {
        let players = vec![red([2, -1, -1, -1]), green([5, -1, -1, -1])];
        let outcome = execute_move(&players, RED, TokenId::new(0), 3);

        assert!(outcome.captured);
        assert_eq!(outcome.players[0].positions()[0], 5);
        assert_eq!(outcome.players[1].positions()[0], -1);
    }

    #[test]
    fn test_execute_no_capture_on_safe_square() {
        // Square 13 is Green's entry.
        let players = vec![red([10, -1, -1, -1]), green([13, -1, -1, -1])];
        let outcome = execute_move(&players, RED, TokenId::new(0), 3);

        assert!(!outcome.captured);
        assert_eq!(outcome.players[1].positions()[0], 13);
    }

    #[test]
    fn test_execute_block_is_immune() {
        let players = vec![red([2, -1, -1, -1]), green([5, 5, -1, -1])];
        let outcome = execute_move(&players, RED, TokenId::new(0), 3);

        assert!(!outcome.captured);
        assert_eq!(outcome.players[1].positions(), [5, 5, -1, -1]);
        assert_eq!(outcome.players[0].positions()[0], 5);
    }

    #[test]
    fn test_execute_own_tokens_stack() {
        let players = vec![red([2, 5, -1, -1]), green([-1, -1, -1, -1])];
        let outcome = execute_move(&players, RED, TokenId::new(0), 3);

        assert!(!outcome.captured);
        assert_eq!(outcome.players[0].positions(), [5, 5, -1, -1]);
    }

    #[test]
    fn test_execute_degrades_to_noop() {
        let players = vec![red([-1, 104, 201, 30]), green([-1, -1, -1, -1])];

        for (token, die) in [(0, 3), (1, 2), (2, 1), (9, 1)] {
            let outcome = execute_move(&players, RED, TokenId::new(token), die);
            assert_eq!(outcome.players, players);
            assert!(!outcome.captured);
        }

        let outcome = execute_move(&players, PlayerId::new(7), TokenId::new(3), 2);
        assert_eq!(outcome.players, players);
    }

    #[test]
    fn test_execute_stretch_is_private() {
        // Green token in its own stretch is never captured by Red.
        let players = vec![red([100, -1, -1, -1]), green([100, -1, -1, -1])];
        let outcome = execute_move(&players, GREEN, TokenId::new(0), 1);

        assert!(!outcome.captured);
        assert_eq!(outcome.players[0].positions()[0], 100);
        assert_eq!(outcome.players[1].positions()[0], 101);
    }
}
