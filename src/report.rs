//! Comparison-table formatting for search results.
//!
//! One column per flavor, one row per statistic. Failed searches show
//! `n/a` for the path-dependent rows while their counters stay visible,
//! so exhausted searches remain comparable.

use crate::search::Solution;

const LABEL_WIDTH: usize = 8;
const COLUMN_WIDTH: usize = 12;

/// Formats a comparison table for a set of `(flavor tag, solution)` pairs.
///
/// Columns are sorted by tag; the cost and counter cells use comma
/// thousands separators. With `include_path` the full solution paths
/// are appended, one step per line, each cell showing the move's initial
/// letter (`s` for the start entry) and the board string.
///
/// # Examples
/// ```
/// use eightpuzzle_solver::board::EightPuzzleBoard;
/// use eightpuzzle_solver::report::format_table;
/// use eightpuzzle_solver::search::{solve, Strategy};
///
/// let start: EightPuzzleBoard = "102345678".parse().unwrap();
/// let goal = EightPuzzleBoard::goal();
/// let solution = solve(&start, &goal, &Strategy::BreadthFirst);
/// let table = format_table(&[("bfs".to_string(), solution)], false);
/// assert!(table.starts_with("flavor"));
/// assert!(table.contains("length"));
/// ```
/// Formats an integer with comma thousands separators, e.g. `181,440`.
fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_table(results: &[(String, Solution)], include_path: bool) -> String {
    let mut columns: Vec<&(String, Solution)> = results.iter().collect();
    columns.sort_by(|a, b| a.0.cmp(&b.0));

    let na = format!("{:>width$}", "n/a", width = COLUMN_WIDTH);

    let mut header = format!("{:<width$}", "flavor", width = LABEL_WIDTH);
    let mut divider = "-".repeat(LABEL_WIDTH);
    let mut length_row = format!("{:<width$}", "length", width = LABEL_WIDTH);
    let mut cost_row = format!("{:<width$}", "cost", width = LABEL_WIDTH);
    let mut frontier_row = format!("{:<width$}", "frontier", width = LABEL_WIDTH);
    let mut expanded_row = format!("{:<width$}", "expanded", width = LABEL_WIDTH);

    for (tag, solution) in &columns {
        header.push_str(&format!("{:>width$}", tag, width = COLUMN_WIDTH));
        divider.push_str("  ----------");
        match solution.path_len() {
            Some(len) => {
                length_row.push_str(&format!("{:>width$}", len, width = COLUMN_WIDTH))
            }
            None => length_row.push_str(&na),
        }
        match solution.path_cost {
            Some(cost) => cost_row.push_str(&format!(
                "{:>width$}",
                group_digits(cost),
                width = COLUMN_WIDTH
            )),
            None => cost_row.push_str(&na),
        }
        frontier_row.push_str(&format!(
            "{:>width$}",
            group_digits(solution.frontier_count as u64),
            width = COLUMN_WIDTH
        ));
        expanded_row.push_str(&format!(
            "{:>width$}",
            group_digits(solution.expanded_count as u64),
            width = COLUMN_WIDTH
        ));
    }

    let mut rows = vec![header, divider, length_row, cost_row, frontier_row, expanded_row];

    if include_path {
        rows.push("path".to_string());
        let longest = columns
            .iter()
            .filter_map(|(_, solution)| solution.path_len())
            .max()
            .unwrap_or(0);
        for step in 0..longest {
            let mut row = " ".repeat(LABEL_WIDTH);
            for (_, solution) in &columns {
                match solution.path.as_ref().and_then(|p| p.get(step)) {
                    Some((mv, state)) => {
                        let initial = match mv {
                            // The start entry has no producing move.
                            None => 's',
                            Some(mv) => mv.as_str().chars().next().unwrap_or('?'),
                        };
                        row.push_str(&format!(" {} {}", initial, state));
                    }
                    None => row.push_str(&" ".repeat(COLUMN_WIDTH)),
                }
            }
            rows.push(row);
        }
    }

    rows.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::EightPuzzleBoard;
    use crate::search::{solve, Strategy};

    fn solved(tag: &str) -> (String, Solution) {
        let start: EightPuzzleBoard = "102345678".parse().unwrap();
        let goal = EightPuzzleBoard::goal();
        let strategy = Strategy::from_tag(tag).unwrap();
        (tag.to_string(), solve(&start, &goal, &strategy))
    }

    fn failed(tag: &str) -> (String, Solution) {
        (
            tag.to_string(),
            Solution {
                path: None,
                path_cost: None,
                frontier_count: 181_440,
                expanded_count: 181_440,
            },
        )
    }

    #[test]
    fn test_table_layout_and_sorting() {
        let table = format_table(&[solved("ucost"), solved("bfs")], false);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 6);

        // Columns sorted by tag: bfs before ucost.
        assert_eq!(lines[0], format!("flavor  {:>12}{:>12}", "bfs", "ucost"));
        assert!(lines[1].starts_with("--------"));
        assert!(lines[2].starts_with("length"));
        assert!(lines[3].starts_with("cost"));
        assert!(lines[4].starts_with("frontier"));
        assert!(lines[5].starts_with("expanded"));

        // Both strategies solve the one-move puzzle in two states, cost 1.
        assert_eq!(lines[2], format!("length  {:>12}{:>12}", 2, 2));
        assert_eq!(lines[3], format!("cost    {:>12}{:>12}", 1, 1));
    }

    #[test]
    fn test_failed_search_shows_na_but_keeps_counters() {
        let table = format_table(&[failed("bfs")], false);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[2], format!("length  {:>12}", "n/a"));
        assert_eq!(lines[3], format!("cost    {:>12}", "n/a"));
        assert_eq!(lines[4], format!("frontier{:>12}", "181,440"));
        assert_eq!(lines[5], format!("expanded{:>12}", "181,440"));
    }

    #[test]
    fn test_digit_grouping() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1_000), "1,000");
        assert_eq!(group_digits(181_440), "181,440");
        assert_eq!(group_digits(1_234_567), "1,234,567");
    }

    #[test]
    fn test_path_rows() {
        let table = format_table(&[solved("bfs")], true);
        let lines: Vec<&str> = table.lines().collect();
        // 6 stat rows + "path" + 2 path steps.
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[6], "path");
        assert_eq!(lines[7], "         s 102345678");
        assert_eq!(lines[8], "         r 012345678");
    }

    #[test]
    fn test_path_rows_skip_failed_columns() {
        let table = format_table(&[solved("bfs"), failed("ucost")], true);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[7], format!("         s 102345678{}", " ".repeat(12)));
    }
}
