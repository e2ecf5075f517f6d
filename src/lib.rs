//! # 8-Puzzle Solver Library
//!
//! This library solves the 3x3 sliding tile puzzle with a family of
//! graph-search strategies and reports comparative statistics (path
//! length, path cost, frontier size, nodes expanded) across them.
//!
//! It is used by two binaries:
//! - `solve`: runs one or more search flavors on a start state and prints
//!   a comparison table.
//! - `scramble`: generates reproducible start states by seeded random
//!   walks from the goal.
//!
//! The transition cost of a slide is the square of the moving tile's
//! value, so uniform-cost and A* search favor shuffling the low-valued
//! tiles while breadth-first search minimizes the raw number of moves.
//!
//! ## Modules
//! - `board`: the immutable `EightPuzzleBoard` state, the `Move` type,
//!   successor generation, parsing, and scrambling.
//! - `frontier`: the FIFO and min-priority frontier containers, including
//!   the by-key lookup/removal the priority-update strategies need.
//! - `heuristics`: the closed `Heuristic` family (misplaced tiles,
//!   Manhattan distance, cost-weighted Manhattan distance).
//! - `search`: the `Strategy` flavors, the shared search bookkeeping, and
//!   the `solve` entry point.
//! - `report`: comparison-table formatting.
//! - `utils`: solvability (parity) testing and sample puzzles.

pub mod board;
pub mod frontier;
pub mod heuristics;
pub mod report;
pub mod search;
pub mod utils;

// Items from sub-modules, if public, should be accessed via their full
// path, e.g., `eightpuzzle_solver::search::solve()`. This keeps the
// top-level library namespace cleaner.
