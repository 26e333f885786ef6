//! `Direction`: the four moves of the blank.

use std::fmt;

/// Direction the blank travels when it swaps with a neighbor.
///
/// `Left` swaps the blank with the tile to its left, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions in expansion order.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];

    /// The move that undoes this one.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// Cell reached from `(row, col)` on a board of side `side`, if any.
    #[must_use]
    pub const fn step(self, row: usize, col: usize, side: usize) -> Option<(usize, usize)> {
        match self {
            Self::Left if col > 0 => Some((row, col - 1)),
            Self::Right if col + 1 < side => Some((row, col + 1)),
            Self::Up if row > 0 => Some((row - 1, col)),
            Self::Down if row + 1 < side => Some((row + 1, col)),
            _ => None,
        }
    }

    /// Upper-case label used in rendered paths.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Up => "UP",
            Self::Down => "DOWN",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
