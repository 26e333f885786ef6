//! Slidetile Kernel: the sliding-tile puzzle state.
//!
//! # API Surface
//!
//! - [`grid::Grid`] -- an immutable N×N arrangement of tiles with one blank
//! - [`direction::Direction`] -- the four ways the blank can travel
//! - [`tile::Tile`] -- a value together with its current position
//! - [`fingerprint::StateFingerprint`] -- digest of a grid, pinned in fixture output
//!
//! # Module Dependency Direction
//!
//! `tile` ← `direction` ← `grid` ← `fingerprint`
//!
//! Grids are never mutated after construction. A move produces a new grid,
//! so a grid can be shared freely between search nodes and threads.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod direction;
pub mod error;
pub mod fingerprint;
pub mod grid;
pub mod tile;
