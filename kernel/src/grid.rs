//! `Grid`: an immutable N×N sliding-tile state.
//!
//! # Layout
//!
//! Cells are stored row-major: cell `(r, c)` lives at index `r * side + c`.
//! The blank is cached as a [`Tile`] and the four movability flags are
//! computed once, at construction, from the blank's position. There is no
//! separate "refresh" step, so neighbor queries can never observe stale
//! flags.
//!
//! # Immutability
//!
//! No method mutates a grid. [`Grid::with_move`] builds a fresh grid, which
//! keeps sibling search subtrees from corrupting each other.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::direction::Direction;
use crate::error::GridError;
use crate::fingerprint::{fingerprint_cells, StateFingerprint};
use crate::tile::Tile;

/// Which directions the blank can currently travel.
///
/// A flag is `false` exactly when the blank sits on that border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Movable {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Movable {
    fn at(row: usize, col: usize, side: usize) -> Self {
        Self {
            up: row != 0,
            down: row != side - 1,
            left: col != 0,
            right: col != side - 1,
        }
    }

    #[must_use]
    pub const fn allows(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// Number of legal moves (2 in a corner, 3 on an edge, 4 inside).
    #[must_use]
    pub fn count(&self) -> usize {
        [self.up, self.down, self.left, self.right]
            .iter()
            .filter(|&&flag| flag)
            .count()
    }
}

/// A square arrangement of the values `0..side*side`, `0` being the blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    side: usize,
    cells: Vec<u32>,
    blank: Tile,
    movable: Movable,
}

impl Grid {
    /// Build a grid from explicit rows.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] unless `rows` is an N×N permutation of
    /// `0..N*N` with `N >= 2`.
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self, GridError> {
        let side = rows.len();
        let (total, _) = cell_count(side)?;
        let mut cells = Vec::with_capacity(total);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != side {
                return Err(GridError::NotSquare {
                    row,
                    len: values.len(),
                    side,
                });
            }
            cells.extend_from_slice(values);
        }
        Self::from_cells(side, cells)
    }

    /// Build a grid from a flat row-major slice.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Grid::from_rows`], plus
    /// [`GridError::LengthMismatch`] if `values.len() != side * side`.
    pub fn from_values(side: usize, values: &[u32]) -> Result<Self, GridError> {
        let (total, _) = cell_count(side)?;
        if values.len() != total {
            return Err(GridError::LengthMismatch {
                expected: total,
                actual: values.len(),
            });
        }
        Self::from_cells(side, values.to_vec())
    }

    fn from_cells(side: usize, cells: Vec<u32>) -> Result<Self, GridError> {
        let total = cells.len();
        let mut seen = vec![false; total];
        let mut blank = None;
        for (index, &value) in cells.iter().enumerate() {
            let (row, col) = (index / side, index % side);
            let slot = value as usize;
            if slot >= total {
                return Err(GridError::ValueOutOfRange {
                    value,
                    row,
                    col,
                    side,
                });
            }
            if seen[slot] {
                return Err(GridError::DuplicateValue { value });
            }
            seen[slot] = true;
            if value == Tile::BLANK {
                blank = Some(Tile::new(value, row, col));
            }
        }
        // A full in-range permutation always contains the blank.
        let blank = blank.ok_or(GridError::DuplicateValue { value: 0 })?;
        Ok(Self::assemble(side, cells, blank))
    }

    fn assemble(side: usize, cells: Vec<u32>, blank: Tile) -> Self {
        Self {
            side,
            cells,
            blank,
            movable: Movable::at(blank.row, blank.col, side),
        }
    }

    /// The canonical goal: cell `(r, c)` holds `r * side + c`, blank at `(0, 0)`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::TooSmall`] if `side < 2`, or
    /// [`GridError::TooLarge`] if `side * side` does not fit a `u32`.
    pub fn goal(side: usize) -> Result<Self, GridError> {
        let (_, total) = cell_count(side)?;
        let cells = (0..total).collect();
        Ok(Self::assemble(side, cells, Tile::new(Tile::BLANK, 0, 0)))
    }

    /// A shuffled grid with the blank in the middle cell.
    ///
    /// No solvability check is performed; roughly half of these grids
    /// cannot reach the goal.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Grid::goal`].
    pub fn random<G: Rng + ?Sized>(side: usize, rng: &mut G) -> Result<Self, GridError> {
        let (_, total) = cell_count(side)?;
        let mut tiles: Vec<u32> = (1..total).collect();
        tiles.shuffle(rng);
        let middle = (side / 2) * side + side / 2;
        tiles.insert(middle, Tile::BLANK);
        Self::from_cells(side, tiles)
    }

    /// Walk the blank `moves` random steps away from the goal, never undoing
    /// the previous step. The result is solvable in at most `moves` moves.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Grid::goal`].
    pub fn scrambled<G: Rng + ?Sized>(
        side: usize,
        moves: usize,
        rng: &mut G,
    ) -> Result<Self, GridError> {
        let mut grid = Self::goal(side)?;
        let mut previous: Option<Direction> = None;
        for _ in 0..moves {
            let options: Vec<Direction> = Direction::ALL
                .into_iter()
                .filter(|&d| {
                    grid.movable.allows(d) && previous.map(Direction::opposite) != Some(d)
                })
                .collect();
            let Some(&direction) = options.choose(rng) else {
                break;
            };
            if let Some(next) = grid.with_move(direction) {
                grid = next;
                previous = Some(direction);
            }
        }
        Ok(grid)
    }

    #[must_use]
    pub const fn side(&self) -> usize {
        self.side
    }

    #[must_use]
    pub const fn blank(&self) -> Tile {
        self.blank
    }

    #[must_use]
    pub const fn movable(&self) -> Movable {
        self.movable
    }

    /// Row-major cell values.
    #[must_use]
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// The tile at `(row, col)`, or `None` outside the grid.
    #[must_use]
    pub fn tile_at(&self, row: usize, col: usize) -> Option<Tile> {
        if row >= self.side || col >= self.side {
            return None;
        }
        Some(Tile::new(self.cells[row * self.side + col], row, col))
    }

    /// Every tile, row-major.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &value)| Tile::new(value, i / self.side, i % self.side))
    }

    /// Cell values as nested rows.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<u32>> {
        self.cells.chunks(self.side).map(<[u32]>::to_vec).collect()
    }

    /// True iff every cell holds the same value as in `other`.
    #[must_use]
    pub fn is_goal(&self, other: &Grid) -> bool {
        self.side == other.side && self.cells == other.cells
    }

    /// The tile the blank would swap with when moving in `direction`.
    #[must_use]
    pub fn neighbor(&self, direction: Direction) -> Option<Tile> {
        if !self.movable.allows(direction) {
            return None;
        }
        let (row, col) = direction.step(self.blank.row, self.blank.col, self.side)?;
        self.tile_at(row, col)
    }

    #[must_use]
    pub fn neighbor_above(&self) -> Option<Tile> {
        self.neighbor(Direction::Up)
    }

    #[must_use]
    pub fn neighbor_below(&self) -> Option<Tile> {
        self.neighbor(Direction::Down)
    }

    #[must_use]
    pub fn neighbor_left(&self) -> Option<Tile> {
        self.neighbor(Direction::Left)
    }

    #[must_use]
    pub fn neighbor_right(&self) -> Option<Tile> {
        self.neighbor(Direction::Right)
    }

    /// Tiles adjacent to the blank, in expansion order.
    pub fn neighbors(&self) -> impl Iterator<Item = Tile> + '_ {
        Direction::ALL.into_iter().filter_map(|d| self.neighbor(d))
    }

    /// A new grid with the blank swapped with its neighbor in `direction`.
    ///
    /// Returns `None` if the blank sits on that border.
    #[must_use]
    pub fn with_move(&self, direction: Direction) -> Option<Self> {
        let target = self.neighbor(direction)?;
        let mut cells = self.cells.clone();
        cells.swap(
            self.blank.row * self.side + self.blank.col,
            target.row * self.side + target.col,
        );
        let blank = Tile::new(Tile::BLANK, target.row, target.col);
        Some(Self::assemble(self.side, cells, blank))
    }

    /// Apply `moves` in order. Returns `None` at the first blocked move.
    #[must_use]
    pub fn apply_moves<I: IntoIterator<Item = Direction>>(&self, moves: I) -> Option<Self> {
        moves
            .into_iter()
            .try_fold(self.clone(), |grid, direction| grid.with_move(direction))
    }

    #[must_use]
    pub fn fingerprint(&self) -> StateFingerprint {
        fingerprint_cells(self.side, &self.cells)
    }
}

/// Cell count of a `side`×`side` grid, as `usize` and as the largest
/// value bound.
fn cell_count(side: usize) -> Result<(usize, u32), GridError> {
    if side < 2 {
        return Err(GridError::TooSmall { side });
    }
    let total = side
        .checked_mul(side)
        .ok_or(GridError::TooLarge { side })?;
    let bound = u32::try_from(total).map_err(|_| GridError::TooLarge { side })?;
    Ok((total, bound))
}

impl fmt::Display for Grid {
    /// One line per row; each cell as `[ v ]`, the blank as `[ # ]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.side) {
            for &value in row {
                if value == Tile::BLANK {
                    f.write_str("[ # ]")?;
                } else {
                    write!(f, "[ {value} ]")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
