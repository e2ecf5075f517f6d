//! Heuristic estimates for greedy best-first and A* search.
//!
//! The three heuristics form a closed set selected by tag (`h1`, `h2`,
//! `h3`). Each is a pure function of a state and the goal; the goal is
//! always passed explicitly rather than read from a global.
//!
//! `h1` and `h2` are admissible for the squared-tile-value cost model
//! (every misplaced tile must slide at least its Manhattan distance, and
//! each slide costs at least 1), so A* with either is cost-optimal. `h3`
//! weights each tile's distance by the square of its value; it is not
//! provably admissible and A*-h3 carries no optimality guarantee.

use crate::board::{EightPuzzleBoard, BOARD_SIDE};
use std::fmt;

/// The closed family of 8-puzzle heuristics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// `h1`: number of non-blank tiles out of their goal position.
    MisplacedTiles,
    /// `h2`: total Manhattan distance of non-blank tiles to their goal
    /// coordinates.
    ManhattanDistance,
    /// `h3`: Manhattan distance weighted by the square of each tile's
    /// value. Tracks the transition-cost rule but is not admissible.
    WeightedManhattan,
}

impl Heuristic {
    /// Resolves a heuristic tag (`h1`, `h2`, or `h3`).
    ///
    /// # Examples
    /// ```
    /// use eightpuzzle_solver::heuristics::Heuristic;
    /// assert_eq!(Heuristic::from_tag("h2"), Ok(Heuristic::ManhattanDistance));
    /// assert!(Heuristic::from_tag("h4").is_err());
    /// ```
    pub fn from_tag(tag: &str) -> Result<Self, String> {
        match tag {
            "h1" => Ok(Heuristic::MisplacedTiles),
            "h2" => Ok(Heuristic::ManhattanDistance),
            "h3" => Ok(Heuristic::WeightedManhattan),
            _ => Err(format!(
                "Unknown heuristic tag '{}'. Expected one of: h1, h2, h3",
                tag
            )),
        }
    }

    /// Returns the short tag for this heuristic.
    pub fn tag(&self) -> &'static str {
        match self {
            Heuristic::MisplacedTiles => "h1",
            Heuristic::ManhattanDistance => "h2",
            Heuristic::WeightedManhattan => "h3",
        }
    }

    /// Evaluates the heuristic for `state` relative to `goal`.
    pub fn evaluate(&self, state: &EightPuzzleBoard, goal: &EightPuzzleBoard) -> u64 {
        match self {
            Heuristic::MisplacedTiles => misplaced_tiles(state, goal),
            Heuristic::ManhattanDistance => manhattan_distance(state, goal),
            Heuristic::WeightedManhattan => weighted_manhattan(state, goal),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Counts the tiles (excluding the blank) that are not in their goal cell.
fn misplaced_tiles(state: &EightPuzzleBoard, goal: &EightPuzzleBoard) -> u64 {
    let mut misplaced = 0;
    for x in 0..BOARD_SIDE {
        for y in 0..BOARD_SIDE {
            let tile = state.get_tile(x, y);
            if tile != 0 && tile != goal.get_tile(x, y) {
                misplaced += 1;
            }
        }
    }
    misplaced
}

/// Sums the Manhattan distances of the non-blank tiles to their goal
/// coordinates.
fn manhattan_distance(state: &EightPuzzleBoard, goal: &EightPuzzleBoard) -> u64 {
    let mut distance = 0u64;
    for x in 0..BOARD_SIDE {
        for y in 0..BOARD_SIDE {
            let tile = state.get_tile(x, y);
            if tile == 0 {
                continue;
            }
            let (gx, gy) = goal
                .find(tile)
                .expect("goal board must contain every tile of a valid state");
            distance += (x.abs_diff(gx) + y.abs_diff(gy)) as u64;
        }
    }
    distance
}

/// Sums `tile_value^2 * manhattan_distance(tile)` over the tiles. The
/// blank's term is always zero, so it needs no special case.
fn weighted_manhattan(state: &EightPuzzleBoard, goal: &EightPuzzleBoard) -> u64 {
    let mut weighted = 0u64;
    for x in 0..BOARD_SIDE {
        for y in 0..BOARD_SIDE {
            let tile = state.get_tile(x, y);
            let (gx, gy) = goal
                .find(tile)
                .expect("goal board must contain every tile of a valid state");
            let distance = (x.abs_diff(gx) + y.abs_diff(gy)) as u64;
            weighted += (tile as u64) * (tile as u64) * distance;
        }
    }
    weighted
}
