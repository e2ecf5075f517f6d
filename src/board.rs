//! 8-puzzle board representation.
//!
//! This module defines the puzzle's fundamental components:
//! - `Move`: the four sliding directions, named for the motion of the tile
//!   (not the blank).
//! - `EightPuzzleBoard`: an immutable 3x3 tile layout with successor
//!   generation, tile lookup, string parsing/serialization, and seeded
//!   scrambling.
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::str::FromStr;

/// Width and height of the board. The puzzle is always 3x3.
pub const BOARD_SIDE: usize = 3;

/// Number of cells on the board, including the blank.
pub const NUM_CELLS: usize = BOARD_SIDE * BOARD_SIDE;

/// A single sliding move, named for the direction the tile travels.
///
/// `Move::Up` means the tile *below* the blank slides upward into it, and
/// so on. The blank always travels in the opposite direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Move {
    /// The tile below the blank slides up.
    Up,
    /// The tile above the blank slides down.
    Down,
    /// The tile right of the blank slides left.
    Left,
    /// The tile left of the blank slides right.
    Right,
}

impl Move {
    /// Returns the lowercase move name used in path output.
    ///
    /// # Examples
    ///
    /// ```
    /// use eightpuzzle_solver::board::Move;
    /// assert_eq!(Move::Up.as_str(), "up");
    /// assert_eq!(Move::Right.as_str(), "right");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Move::Up => "up",
            Move::Down => "down",
            Move::Left => "left",
            Move::Right => "right",
        }
    }

    /// Returns the move that undoes this one when applied to the successor.
    pub fn inverse(&self) -> Move {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An immutable 8-puzzle state: a 3x3 grid holding the tiles 1-8 and the
/// blank (stored as 0).
///
/// Two boards compare equal iff their tile layouts are identical; equality,
/// hashing, and ordering all derive from the layout, which is what makes
/// boards usable as set/map keys and as tie-breakers in the priority
/// frontier.
///
/// Coordinates are `(x, y)` with `x` the column (0..3, left to right) and
/// `y` the row counted *from the bottom* (0..3). The canonical string form
/// is row-major from the top, so `"012345678"` puts the blank in the
/// top-left corner at `(0, 2)`.
///
/// # Examples
/// ```
/// use eightpuzzle_solver::board::EightPuzzleBoard;
///
/// let goal = EightPuzzleBoard::goal();
/// assert_eq!(goal.to_string(), "012345678");
/// assert_eq!(goal.get_tile(0, 2), 0); // blank, top-left
/// assert_eq!(goal.get_tile(2, 0), 8); // bottom-right
///
/// // The blank in a corner has exactly two legal slides.
/// assert_eq!(goal.successors().len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EightPuzzleBoard {
    tiles: [u8; NUM_CELLS],
}

/// Maps an `(x, y)` coordinate to an index into the row-major tile array.
fn cell_index(x: usize, y: usize) -> usize {
    (BOARD_SIDE - 1 - y) * BOARD_SIDE + x
}

impl EightPuzzleBoard {
    /// Returns the canonical goal configuration, `"012345678"`.
    pub fn goal() -> Self {
        EightPuzzleBoard {
            tiles: [0, 1, 2, 3, 4, 5, 6, 7, 8],
        }
    }

    /// Returns the tile value at the given coordinate (0 for the blank).
    ///
    /// # Panics
    /// Panics if `x` or `y` are outside `0..BOARD_SIDE`.
    pub fn get_tile(&self, x: usize, y: usize) -> u8 {
        assert!(
            x < BOARD_SIDE && y < BOARD_SIDE,
            "coordinate ({}, {}) is outside the {}x{} board",
            x,
            y,
            BOARD_SIDE,
            BOARD_SIDE
        );
        self.tiles[cell_index(x, y)]
    }

    /// Locates a tile value (or the blank, for `0`) on the board.
    ///
    /// Returns `None` only for values that are not part of the puzzle
    /// (anything above 8); every valid board contains each of 0-8 exactly
    /// once.
    pub fn find(&self, tile: u8) -> Option<(usize, usize)> {
        self.tiles.iter().position(|&t| t == tile).map(|i| {
            let x = i % BOARD_SIDE;
            let y = BOARD_SIDE - 1 - i / BOARD_SIDE;
            (x, y)
        })
    }

    /// Returns the blank's coordinate.
    pub fn blank_position(&self) -> (usize, usize) {
        self.find(0)
            .expect("a valid board always contains the blank tile")
    }

    /// Enumerates every state reachable with one legal slide, paired with
    /// the move that produces it.
    ///
    /// Successors are returned in the fixed order Up, Down, Left, Right
    /// (skipping illegal directions), so iteration order is deterministic.
    /// A corner blank yields 2 entries, an edge blank 3, a center blank 4.
    pub fn successors(&self) -> Vec<(Move, EightPuzzleBoard)> {
        let (bx, by) = self.blank_position();
        let mut succs = Vec::with_capacity(4);

        // Each move swaps the blank with the tile it slides out of.
        if by > 0 {
            succs.push((Move::Up, self.with_swapped(bx, by, bx, by - 1)));
        }
        if by < BOARD_SIDE - 1 {
            succs.push((Move::Down, self.with_swapped(bx, by, bx, by + 1)));
        }
        if bx < BOARD_SIDE - 1 {
            succs.push((Move::Left, self.with_swapped(bx, by, bx + 1, by)));
        }
        if bx > 0 {
            succs.push((Move::Right, self.with_swapped(bx, by, bx - 1, by)));
        }

        succs
    }

    /// Returns the move that transforms `self` into `other`, or `None` if
    /// the two boards are not exactly one legal slide apart.
    ///
    /// Used for path reconstruction display, not for search itself.
    pub fn get_move(&self, other: &EightPuzzleBoard) -> Option<Move> {
        self.successors()
            .into_iter()
            .find(|(_, succ)| succ == other)
            .map(|(mv, _)| mv)
    }

    /// Produces a new board scrambled by a seeded random walk of `steps`
    /// legal moves starting from `self`.
    ///
    /// The walk never immediately undoes its previous move, so short walks
    /// do not collapse back onto the start. The same seed always yields the
    /// same board. Because scrambling only applies legal moves, the result
    /// is always solvable back to `self`.
    pub fn scrambled_from(&self, steps: usize, seed: u64) -> EightPuzzleBoard {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut current = self.clone();
        let mut last_move: Option<Move> = None;

        for _ in 0..steps {
            let mut candidates: Vec<(Move, EightPuzzleBoard)> = current
                .successors()
                .into_iter()
                .filter(|(mv, _)| last_move != Some(mv.inverse()))
                .collect();
            // At most one successor is the undo, and every blank position
            // has at least two legal moves, so candidates is never empty.
            let pick = rng.gen_range(0..candidates.len());
            let (mv, next) = candidates.swap_remove(pick);
            last_move = Some(mv);
            current = next;
        }

        current
    }

    /// Renders the board as a 3-line grid with `.` for the blank.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in 0..BOARD_SIDE {
            for col in 0..BOARD_SIDE {
                let tile = self.tiles[row * BOARD_SIDE + col];
                if col > 0 {
                    out.push(' ');
                }
                if tile == 0 {
                    out.push('.');
                } else {
                    out.push((b'0' + tile) as char);
                }
            }
            if row < BOARD_SIDE - 1 {
                out.push('\n');
            }
        }
        out
    }

    fn with_swapped(&self, x1: usize, y1: usize, x2: usize, y2: usize) -> EightPuzzleBoard {
        let mut tiles = self.tiles;
        tiles.swap(cell_index(x1, y1), cell_index(x2, y2));
        EightPuzzleBoard { tiles }
    }
}

impl FromStr for EightPuzzleBoard {
    type Err = String;

    /// Parses a board from its canonical 9-character string form: the
    /// digits 0-8 in row-major order from the top-left, each appearing
    /// exactly once, with 0 standing for the blank.
    ///
    /// # Examples
    /// ```
    /// use eightpuzzle_solver::board::EightPuzzleBoard;
    ///
    /// let board: EightPuzzleBoard = "142375608".parse().unwrap();
    /// assert_eq!(board.to_string(), "142375608");
    ///
    /// assert!("12345678".parse::<EightPuzzleBoard>().is_err()); // too short
    /// assert!("112345678".parse::<EightPuzzleBoard>().is_err()); // duplicate
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() != NUM_CELLS {
            return Err(format!(
                "Invalid board string '{}'. Expected exactly {} characters, found {}",
                s,
                NUM_CELLS,
                s.chars().count()
            ));
        }

        let mut tiles = [0u8; NUM_CELLS];
        let mut seen = [false; NUM_CELLS];
        for (i, ch) in s.chars().enumerate() {
            let tile = match ch.to_digit(10) {
                Some(d) if (d as usize) < NUM_CELLS => d as u8,
                _ => {
                    return Err(format!(
                        "Invalid character '{}' in board string '{}'. Expected digits 0-8",
                        ch, s
                    ))
                }
            };
            if seen[tile as usize] {
                return Err(format!(
                    "Duplicate tile '{}' in board string '{}'. Each of 0-8 must appear exactly once",
                    tile, s
                ));
            }
            seen[tile as usize] = true;
            tiles[i] = tile;
        }

        Ok(EightPuzzleBoard { tiles })
    }
}

impl fmt::Display for EightPuzzleBoard {
    /// Formats the board as its canonical 9-character string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &tile in &self.tiles {
            write!(f, "{}", tile)?;
        }
        Ok(())
    }
}
