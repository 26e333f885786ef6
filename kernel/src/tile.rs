//! `Tile`: the unit stored inside a grid.

/// A tile value and the cell it currently occupies.
///
/// Value `0` is reserved for the blank. Tiles carry no identity beyond
/// these three fields, so two tiles compare equal iff all fields match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub value: u32,
    pub row: usize,
    pub col: usize,
}

impl Tile {
    /// Value reserved for the blank cell.
    pub const BLANK: u32 = 0;

    #[must_use]
    pub const fn new(value: u32, row: usize, col: usize) -> Self {
        Self { value, row, col }
    }

    #[must_use]
    pub const fn is_blank(&self) -> bool {
        self.value == Self::BLANK
    }

    /// Cell where this tile belongs in the canonical goal of side `side`.
    ///
    /// The goal is row-major: value `v` sits at `(v / side, v % side)`.
    #[must_use]
    pub const fn goal_position(&self, side: usize) -> (usize, usize) {
        let v = self.value as usize;
        (v / side, v % side)
    }

    /// Manhattan distance from the current cell to the goal cell.
    #[must_use]
    pub const fn goal_distance(&self, side: usize) -> usize {
        let (goal_row, goal_col) = self.goal_position(side);
        self.row.abs_diff(goal_row) + self.col.abs_diff(goal_col)
    }

    /// Whether the tile is away from its goal cell.
    #[must_use]
    pub const fn is_misplaced(&self, side: usize) -> bool {
        let (goal_row, goal_col) = self.goal_position(side);
        self.row != goal_row || self.col != goal_col
    }
}
