//! Solvability testing and sample puzzles.

use crate::board::{EightPuzzleBoard, BOARD_SIDE};

/// Reports whether `goal` is reachable from `start`.
///
/// The 8-puzzle's state space splits into two halves that no sequence of
/// slides connects. For an odd-width board the half a state belongs to is
/// determined by the parity of its tile inversions (the blank's position
/// does not matter), so two states are mutually reachable iff their
/// parities agree.
///
/// # Examples
/// ```
/// use eightpuzzle_solver::board::EightPuzzleBoard;
/// use eightpuzzle_solver::utils::is_solvable;
///
/// let goal = EightPuzzleBoard::goal();
/// let solvable: EightPuzzleBoard = "142375608".parse().unwrap();
/// let swapped: EightPuzzleBoard = "021345678".parse().unwrap();
/// assert!(is_solvable(&solvable, &goal));
/// assert!(!is_solvable(&swapped, &goal));
/// ```
pub fn is_solvable(start: &EightPuzzleBoard, goal: &EightPuzzleBoard) -> bool {
    inversion_parity(start) == inversion_parity(goal)
}

/// Parity (true = odd) of the inversion count over the non-blank tiles
/// read in row-major order from the top-left.
fn inversion_parity(board: &EightPuzzleBoard) -> bool {
    let mut tiles = Vec::with_capacity(BOARD_SIDE * BOARD_SIDE - 1);
    for row in (0..BOARD_SIDE).rev() {
        for col in 0..BOARD_SIDE {
            let tile = board.get_tile(col, row);
            if tile != 0 {
                tiles.push(tile);
            }
        }
    }

    let mut inversions = 0usize;
    for i in 0..tiles.len() {
        for j in (i + 1)..tiles.len() {
            if tiles[i] > tiles[j] {
                inversions += 1;
            }
        }
    }
    inversions % 2 == 1
}

/// Returns three sample start states with optimal solution lengths of
/// 3, 12, and 25 moves respectively, covering the short / medium / long
/// bands used when comparing strategies.
pub fn sample_puzzles() -> [EightPuzzleBoard; 3] {
    let parse = |s: &str| {
        s.parse()
            .expect("sample puzzle strings are valid board layouts")
    };
    [
        parse("142375608"),
        parse("415328067"),
        parse("802356174"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> EightPuzzleBoard {
        s.parse().unwrap()
    }

    #[test]
    fn test_goal_is_solvable_from_itself() {
        let goal = EightPuzzleBoard::goal();
        assert!(is_solvable(&goal, &goal));
    }

    #[test]
    fn test_adjacent_tile_swap_flips_parity() {
        let goal = EightPuzzleBoard::goal();
        // Swapping two tiles (not the blank) is a single transposition,
        // which always changes the reachable half.
        assert!(!is_solvable(&board("021345678"), &goal));
        assert!(!is_solvable(&board("012345687"), &goal));
        // Swapping twice restores it.
        assert!(is_solvable(&board("021345687"), &goal));
    }

    #[test]
    fn test_sliding_preserves_solvability() {
        let goal = EightPuzzleBoard::goal();
        let mut current = board("802356174");
        assert!(is_solvable(&current, &goal));
        for _ in 0..6 {
            current = current.successors().remove(0).1;
            assert!(is_solvable(&current, &goal));
        }
    }

    #[test]
    fn test_sample_puzzles_are_solvable_and_distinct() {
        let goal = EightPuzzleBoard::goal();
        let samples = sample_puzzles();
        for puzzle in &samples {
            assert!(is_solvable(puzzle, &goal), "{}", puzzle);
        }
        assert_ne!(samples[0], samples[1]);
        assert_ne!(samples[1], samples[2]);
    }
}
