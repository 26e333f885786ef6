//! Slidetile Search: uninformed and informed tree search over puzzle states.
//!
//! This crate provides the search layer. It depends only on
//! `slidetile_kernel`; it does NOT depend on `slidetile_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! slidetile_kernel  ←  slidetile_search  ←  slidetile_harness
//! (grid, tiles)        (tree, frontier)      (config, runner, report)
//! ```
//!
//! # Key types
//!
//! - [`SearchNode`](node::SearchNode): a state plus parent handle, depth, cost and move label
//! - [`SearchTree`](tree::SearchTree): node arena; children point at parents, never the reverse
//! - [`Heuristic`](heuristic::Heuristic): pluggable cost estimate for best-first search
//! - [`SearchPolicy`](policy::SearchPolicy): budget, dedup and shuffle-seed configuration
//! - [`SearchEngine`](search::SearchEngine): the four strategies

#![forbid(unsafe_code)]

pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod node;
pub mod policy;
pub mod search;
pub mod strategy;
pub mod tree;
