//! Tokens and their position encoding.
//!
//! ## Position Encoding
//!
//! A single integer is the sole source of truth for where a token is:
//!
//! | Range              | Meaning                                        |
//! |--------------------|------------------------------------------------|
//! | `-1`               | In home base, not yet entered play             |
//! | `0..52`            | Absolute square on the shared circular path    |
//! | `100..106`         | Index into the owner's private home stretch    |
//! | `200..`            | Finished (`200 + token id`)                    |
//!
//! Positions serialize as plain integers so snapshots stay readable by
//! other participants of a session.

use serde::{Deserialize, Serialize};

use crate::board::{HOME_LEN, PATH_LEN};

/// Token identifier, unique within its owning player (0-3).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TokenId(pub u8);

impl TokenId {
    /// Create a new token ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over the four token IDs of a player.
    pub fn all() -> impl Iterator<Item = TokenId> {
        (0..TOKENS_PER_PLAYER as u8).map(TokenId)
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {}", self.0)
    }
}

/// Number of tokens each player owns.
pub const TOKENS_PER_PLAYER: usize = 4;

/// Encoded token position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Position(i16);

impl Position {
    /// In home base.
    pub const BASE: Position = Position(-1);

    /// First private home-stretch square.
    pub const STRETCH_START: i16 = 100;

    /// Lowest finished encoding.
    pub const FINISHED_START: i16 = 200;

    /// Wrap a raw encoded value.
    #[must_use]
    pub const fn from_raw(raw: i16) -> Self {
        Self(raw)
    }

    /// Shared-path square `square mod PATH_LEN`.
    #[must_use]
    pub const fn on_path(square: i16) -> Self {
        Self(square.rem_euclid(PATH_LEN))
    }

    /// Home-stretch square at relative `index`.
    #[must_use]
    pub const fn in_stretch(index: i16) -> Self {
        Self(Self::STRETCH_START + index)
    }

    /// Finished encoding for a token.
    #[must_use]
    pub const fn finished(token: TokenId) -> Self {
        Self(Self::FINISHED_START + token.0 as i16)
    }

    #[must_use]
    pub const fn raw(self) -> i16 {
        self.0
    }

    #[must_use]
    pub const fn is_base(self) -> bool {
        self.0 == -1
    }

    #[must_use]
    pub const fn is_finished(self) -> bool {
        self.0 >= Self::FINISHED_START
    }

    /// Shared-path square, if the token is on the shared path.
    #[must_use]
    pub const fn path_square(self) -> Option<i16> {
        if self.0 >= 0 && self.0 < PATH_LEN {
            Some(self.0)
        } else {
            None
        }
    }

    /// Relative home-stretch index, if the token is in its stretch.
    #[must_use]
    pub const fn stretch_index(self) -> Option<i16> {
        if self.0 >= Self::STRETCH_START && self.0 < Self::STRETCH_START + HOME_LEN {
            Some(self.0 - Self::STRETCH_START)
        } else {
            None
        }
    }

    /// Whether a token can rest here: base, a path square, a stretch square
    /// short of the last one (reaching it finishes), or exactly `200 + id`.
    #[must_use]
    pub const fn is_valid_for(self, token: TokenId) -> bool {
        let resting_in_stretch = match self.stretch_index() {
            Some(index) => index < HOME_LEN - 1,
            None => false,
        };
        self.is_base()
            || self.is_on_path()
            || resting_in_stretch
            || self.0 == Self::finished(token).0
    }

    #[must_use]
    pub const fn is_on_path(self) -> bool {
        self.path_square().is_some()
    }

    #[must_use]
    pub const fn is_in_stretch(self) -> bool {
        self.stretch_index().is_some()
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::BASE
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_base() {
            f.write_str("base")
        } else if let Some(square) = self.path_square() {
            write!(f, "square {square}")
        } else if let Some(index) = self.stretch_index() {
            write!(f, "stretch {index}")
        } else if self.is_finished() {
            f.write_str("finished")
        } else {
            write!(f, "invalid({})", self.0)
        }
    }
}

/// A single token.
///
/// The position is readable by anyone but only the move engine can change it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub id: TokenId,
    position: Position,
}

impl Token {
    /// A token waiting in base.
    #[must_use]
    pub const fn new(id: TokenId) -> Self {
        Self {
            id,
            position: Position::BASE,
        }
    }

    /// A token at an arbitrary position (session restore, fixtures).
    #[must_use]
    pub const fn at(id: TokenId, position: Position) -> Self {
        Self { id, position }
    }

    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_ranges() {
        assert!(Position::BASE.is_base());
        assert!(!Position::BASE.is_on_path());

        let square = Position::on_path(51);
        assert_eq!(square.path_square(), Some(51));
        assert!(!square.is_in_stretch());

        let stretch = Position::in_stretch(3);
        assert_eq!(stretch.raw(), 103);
        assert_eq!(stretch.stretch_index(), Some(3));
        assert!(!stretch.is_on_path());

        let done = Position::finished(TokenId::new(2));
        assert_eq!(done.raw(), 202);
        assert!(done.is_finished());
        assert_eq!(done.stretch_index(), None);
    }

    #[test]
    fn test_valid_resting_positions() {
        let id = TokenId::new(2);
        for raw in [-1, 0, 51, 100, 104, 202] {
            assert!(Position::from_raw(raw).is_valid_for(id), "{raw}");
        }
        for raw in [-5, -2, 52, 75, 99, 105, 150, 200, 203] {
            assert!(!Position::from_raw(raw).is_valid_for(id), "{raw}");
        }
    }

    #[test]
    fn test_on_path_wraps() {
        assert_eq!(Position::on_path(52).raw(), 0);
        assert_eq!(Position::on_path(55).raw(), 3);
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::BASE.to_string(), "base");
        assert_eq!(Position::on_path(7).to_string(), "square 7");
        assert_eq!(Position::in_stretch(1).to_string(), "stretch 1");
        assert_eq!(Position::finished(TokenId::new(0)).to_string(), "finished");
    }

    #[test]
    fn test_position_serializes_as_integer() {
        let json = serde_json::to_string(&Position::in_stretch(2)).unwrap();
        assert_eq!(json, "102");
        let back: Position = serde_json::from_str("-1").unwrap();
        assert_eq!(back, Position::BASE);
    }

    #[test]
    fn test_token_ids() {
        let ids: Vec<_> = TokenId::all().collect();
        assert_eq!(ids.len(), TOKENS_PER_PLAYER);
        assert_eq!(ids[3], TokenId::new(3));
        assert_eq!(format!("{}", ids[1]), "Token 1");
        assert_eq!(Token::new(TokenId::new(0)).position(), Position::BASE);
    }
}
