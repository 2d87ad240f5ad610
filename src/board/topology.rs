//! Static board topology.
//!
//! The board is a shared circular path of [`PATH_LEN`] squares plus one
//! private home stretch of [`HOME_LEN`] squares per color. Colors are spaced
//! [`COLOR_SPACING`] squares apart around the path.
//!
//! ## Layout
//!
//! - Each color enters the shared path at its *path-entry* square.
//! - A token travels clockwise until its *home entry*, the last shared square
//!   before it turns off into its private stretch.
//! - Safe squares (each color's entry plus the square seven stops further
//!   along) can never host a capture.
//!
//! Everything here is `const` data keyed by [`Color`]; there are no
//! operations beyond lookup.

use serde::{Deserialize, Serialize};

/// Number of squares on the shared circular path.
pub const PATH_LEN: i16 = 52;

/// Number of squares in each color's private home stretch.
pub const HOME_LEN: i16 = 6;

/// Distance between consecutive colors' entry squares.
pub const COLOR_SPACING: i16 = PATH_LEN / 4;

/// Offset of the second safe square from a color's entry square.
pub const SAFE_OFFSET: i16 = 7;

/// Number of safe squares on the shared path.
pub const SAFE_SQUARE_COUNT: usize = 8;

/// Shared-path indices on which no capture can ever happen.
pub const SAFE_SQUARES: [i16; SAFE_SQUARE_COUNT] = safe_squares();

/// Player color, in canonical table order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

/// Per-color lookup entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorSpec {
    /// Display name.
    pub name: &'static str,
    /// Shared square where tokens appear when leaving base.
    pub path_entry: i16,
    /// Last shared square before the private stretch.
    pub home_entry: i16,
}

const fn spec(index: i16, name: &'static str) -> ColorSpec {
    let path_entry = index * COLOR_SPACING;
    ColorSpec {
        name,
        path_entry,
        home_entry: (path_entry + PATH_LEN - 2) % PATH_LEN,
    }
}

/// Lookup table indexed by `Color::index()`.
pub const COLOR_TABLE: [ColorSpec; 4] = [
    spec(0, "Red"),
    spec(1, "Green"),
    spec(2, "Yellow"),
    spec(3, "Blue"),
];

const fn safe_squares() -> [i16; SAFE_SQUARE_COUNT] {
    let mut out = [0i16; SAFE_SQUARE_COUNT];
    let mut i = 0;
    while i < 4 {
        let entry = i as i16 * COLOR_SPACING;
        out[i * 2] = entry;
        out[i * 2 + 1] = (entry + SAFE_OFFSET) % PATH_LEN;
        i += 1;
    }
    out
}

impl Color {
    /// All colors in canonical table order.
    pub const ALL: [Color; 4] = [Color::Red, Color::Green, Color::Yellow, Color::Blue];

    /// Position in the canonical table order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Color at a table index, if in range.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < 4 {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    #[must_use]
    pub const fn spec(self) -> ColorSpec {
        COLOR_TABLE[self.index()]
    }

    /// Display name ("Red", "Green", ...).
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.spec().name
    }

    /// Shared square where this color's tokens enter play.
    #[must_use]
    pub const fn path_entry(self) -> i16 {
        self.spec().path_entry
    }

    /// Last shared square before this color's private stretch.
    #[must_use]
    pub const fn home_entry(self) -> i16 {
        self.spec().home_entry
    }

    /// The color seated across the board.
    #[must_use]
    pub const fn opposite(self) -> Self {
        Self::ALL[(self.index() + 2) % 4]
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Check whether a shared-path square is safe.
#[must_use]
pub fn is_safe(square: i16) -> bool {
    SAFE_SQUARES.contains(&square)
}
