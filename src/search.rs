//! Graph-search strategies over the 8-puzzle state space.
//!
//! Four strategies share one set of bookkeeping (parent map, explored set,
//! frontier/expansion counters) and differ only in expansion order:
//! - `bfs`: breadth-first, FIFO frontier, goal test at successor
//!   generation time.
//! - `ucost`: uniform-cost, priority = accumulated path cost, goal test
//!   at pop time.
//! - `greedy-h1/h2/h3`: greedy best-first, priority = heuristic only.
//! - `astar-h1/h2/h3`: A*, priority = accumulated cost + heuristic.
//!
//! The transition cost of a single slide is the square of the numeric
//! value of the tile that moves, so cheap solutions prefer shuffling the
//! low-valued tiles. Uniform-cost and A* (with an admissible heuristic)
//! minimize total path cost under this rule; breadth-first minimizes the
//! number of moves instead.

use crate::board::{EightPuzzleBoard, Move};
use crate::frontier::{FifoFrontier, PriorityFrontier};
use crate::heuristics::Heuristic;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// A search flavor: the strategy plus, where applicable, its heuristic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Breadth-first search (`bfs`). Optimal in number of moves.
    BreadthFirst,
    /// Uniform-cost search (`ucost`). Optimal in path cost.
    UniformCost,
    /// Greedy best-first search (`greedy-h1/h2/h3`). Fast, not optimal.
    Greedy(Heuristic),
    /// A* search (`astar-h1/h2/h3`). Cost-optimal for admissible
    /// heuristics (h1, h2).
    AStar(Heuristic),
}

impl Strategy {
    /// Resolves a flavor tag such as `bfs`, `ucost`, `greedy-h2`, or
    /// `astar-h3`.
    ///
    /// # Examples
    /// ```
    /// use eightpuzzle_solver::search::Strategy;
    /// use eightpuzzle_solver::heuristics::Heuristic;
    ///
    /// assert_eq!(Strategy::from_tag("bfs"), Ok(Strategy::BreadthFirst));
    /// assert_eq!(
    ///     Strategy::from_tag("astar-h2"),
    ///     Ok(Strategy::AStar(Heuristic::ManhattanDistance))
    /// );
    /// assert!(Strategy::from_tag("dfs").is_err());
    /// ```
    pub fn from_tag(tag: &str) -> Result<Self, String> {
        match tag.split_once('-') {
            None => match tag {
                "bfs" => Ok(Strategy::BreadthFirst),
                "ucost" => Ok(Strategy::UniformCost),
                _ => Err(unknown_flavor(tag)),
            },
            Some((strat, heur)) => {
                let heuristic = Heuristic::from_tag(heur)?;
                match strat {
                    "greedy" => Ok(Strategy::Greedy(heuristic)),
                    "astar" => Ok(Strategy::AStar(heuristic)),
                    _ => Err(unknown_flavor(tag)),
                }
            }
        }
    }

    /// Returns the flavor tag; round-trips through `from_tag`.
    pub fn tag(&self) -> String {
        match self {
            Strategy::BreadthFirst => "bfs".to_string(),
            Strategy::UniformCost => "ucost".to_string(),
            Strategy::Greedy(h) => format!("greedy-{}", h.tag()),
            Strategy::AStar(h) => format!("astar-{}", h.tag()),
        }
    }

    /// All eight flavors, in comparison-table order.
    pub fn all() -> Vec<Strategy> {
        vec![
            Strategy::BreadthFirst,
            Strategy::UniformCost,
            Strategy::Greedy(Heuristic::MisplacedTiles),
            Strategy::Greedy(Heuristic::ManhattanDistance),
            Strategy::Greedy(Heuristic::WeightedManhattan),
            Strategy::AStar(Heuristic::MisplacedTiles),
            Strategy::AStar(Heuristic::ManhattanDistance),
            Strategy::AStar(Heuristic::WeightedManhattan),
        ]
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

fn unknown_flavor(tag: &str) -> String {
    format!(
        "Unknown search flavor '{}'. Expected one of: bfs, ucost, greedy-h1/h2/h3, astar-h1/h2/h3",
        tag
    )
}

/// The outcome of a single `solve` call.
///
/// On success, `path` holds the start-to-goal states paired with the move
/// that produced each (`None` for the start entry) and `path_cost` the
/// summed transition costs. On failure both are `None`; the counters are
/// populated either way, which is what makes failed searches comparable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// The solution path, start and goal inclusive; `None` if the search
    /// exhausted the frontier without reaching the goal.
    pub path: Option<Vec<(Option<Move>, EightPuzzleBoard)>>,
    /// Total transition cost of the path; `None` on failure.
    pub path_cost: Option<u64>,
    /// Unique states ever added to the frontier. Priority updates do not
    /// count again.
    pub frontier_count: usize,
    /// States popped from the frontier and expanded.
    pub expanded_count: usize,
}

impl Solution {
    /// Whether the search reached the goal.
    pub fn succeeded(&self) -> bool {
        self.path.is_some()
    }

    /// Number of states on the solution path (moves + 1), if it succeeded.
    pub fn path_len(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len())
    }
}

/// Cost of applying `mv` to `state`: the square of the value of the tile
/// that slides, read from the cell the tile leaves.
///
/// The tile is derived purely from board geometry: it sits in the blank's
/// neighbor cell opposite to the slide direction.
///
/// # Panics
/// Panics if `mv` is not legal from `state`.
pub fn transition_cost(state: &EightPuzzleBoard, mv: Move) -> u64 {
    let (x, y) = state.blank_position();
    let tile = match mv {
        // The sliding tile sits below the blank for "up", above for
        // "down", and so on.
        Move::Up => state.get_tile(x, y - 1),
        Move::Down => state.get_tile(x, y + 1),
        Move::Left => state.get_tile(x + 1, y),
        Move::Right => state.get_tile(x - 1, y),
    };
    (tile as u64) * (tile as u64)
}

/// Shared bookkeeping for one search run: the parent tree, the explored
/// set, and the comparison counters. Each driver owns its own engine, so
/// runs never share mutable state.
struct SearchEngine {
    parents: HashMap<EightPuzzleBoard, Option<EightPuzzleBoard>>,
    explored: HashSet<EightPuzzleBoard>,
    frontier_count: usize,
    expanded_count: usize,
}

impl SearchEngine {
    fn new() -> Self {
        SearchEngine {
            parents: HashMap::new(),
            explored: HashSet::new(),
            frontier_count: 0,
            expanded_count: 0,
        }
    }

    /// Marks a popped node as explored, counts the expansion, and returns
    /// its successors.
    fn expand(&mut self, node: &EightPuzzleBoard) -> Vec<(Move, EightPuzzleBoard)> {
        self.explored.insert(node.clone());
        self.expanded_count += 1;
        node.successors()
    }

    /// Walks the parent map from `state` back to the root and returns the
    /// path in start-to-target order.
    fn path(&self, state: &EightPuzzleBoard) -> Vec<EightPuzzleBoard> {
        let mut path = Vec::new();
        let mut current = Some(state.clone());
        while let Some(board) = current {
            current = self
                .parents
                .get(&board)
                .unwrap_or_else(|| {
                    panic!("state {} on a path has no parent-map entry", board)
                })
                .clone();
            path.push(board);
        }
        path.reverse();
        path
    }

    /// Accumulated cost from the start to `state` along the parent tree.
    ///
    /// For each consecutive pair, the tile that moved is the one now
    /// occupying the cell the blank held in the previous state.
    fn path_cost(&self, state: &EightPuzzleBoard) -> u64 {
        let path = self.path(state);
        let mut cost = 0u64;
        for pair in path.windows(2) {
            let (x, y) = pair[0].blank_position();
            let moved = pair[1].get_tile(x, y);
            cost += (moved as u64) * (moved as u64);
        }
        cost
    }

    /// Builds the `Solution` for a finished search. `None` means the
    /// frontier was exhausted; the counters are still reported.
    fn results(&self, end: Option<&EightPuzzleBoard>) -> Solution {
        let end = match end {
            Some(state) => state,
            None => {
                return Solution {
                    path: None,
                    path_cost: None,
                    frontier_count: self.frontier_count,
                    expanded_count: self.expanded_count,
                }
            }
        };

        let path_cost = self.path_cost(end);
        let boards = self.path(end);
        let mut steps = Vec::with_capacity(boards.len());
        for (i, board) in boards.iter().enumerate() {
            let mv = if i == 0 {
                None
            } else {
                Some(boards[i - 1].get_move(board).unwrap_or_else(|| {
                    panic!(
                        "path states {} and {} are not one legal move apart",
                        boards[i - 1],
                        board
                    )
                }))
            };
            steps.push((mv, board.clone()));
        }

        Solution {
            path: Some(steps),
            path_cost: Some(path_cost),
            frontier_count: self.frontier_count,
            expanded_count: self.expanded_count,
        }
    }
}

/// How a best-first strategy prices a state for the priority frontier.
enum PriorityPolicy {
    /// Uniform-cost: accumulated path cost only.
    AccumulatedCost,
    /// Greedy: heuristic only, no accumulated cost.
    HeuristicOnly(Heuristic),
    /// A*: accumulated cost plus heuristic.
    CostPlusHeuristic(Heuristic),
}

impl PriorityPolicy {
    fn uses_cost(&self) -> bool {
        !matches!(self, PriorityPolicy::HeuristicOnly(_))
    }

    fn heuristic(&self, state: &EightPuzzleBoard, goal: &EightPuzzleBoard) -> u64 {
        match self {
            PriorityPolicy::AccumulatedCost => 0,
            PriorityPolicy::HeuristicOnly(h) | PriorityPolicy::CostPlusHeuristic(h) => {
                h.evaluate(state, goal)
            }
        }
    }
}

/// Runs the selected strategy from `start` towards `goal`.
///
/// The goal is an explicit parameter: every run is self-contained and two
/// solves of the same immutable inputs return identical results.
///
/// # Examples
/// ```
/// use eightpuzzle_solver::board::EightPuzzleBoard;
/// use eightpuzzle_solver::search::{solve, Strategy};
///
/// let start: EightPuzzleBoard = "102345678".parse().unwrap();
/// let goal = EightPuzzleBoard::goal();
/// let solution = solve(&start, &goal, &Strategy::BreadthFirst);
/// assert_eq!(solution.path_len(), Some(2)); // one move
/// assert_eq!(solution.path_cost, Some(1)); // tile 1 slid once
/// ```
pub fn solve(start: &EightPuzzleBoard, goal: &EightPuzzleBoard, strategy: &Strategy) -> Solution {
    match strategy {
        Strategy::BreadthFirst => solve_breadth_first(start, goal),
        Strategy::UniformCost => {
            solve_best_first(start, goal, PriorityPolicy::AccumulatedCost)
        }
        Strategy::Greedy(h) => solve_best_first(start, goal, PriorityPolicy::HeuristicOnly(*h)),
        Strategy::AStar(h) => {
            solve_best_first(start, goal, PriorityPolicy::CostPlusHeuristic(*h))
        }
    }
}

/// Breadth-first driver. The goal test runs on each successor *before*
/// insertion into the frontier; under uniform step cost the first
/// generated occurrence of the goal already lies on a shortest path, and
/// testing early avoids expanding the whole final depth layer.
fn solve_breadth_first(start: &EightPuzzleBoard, goal: &EightPuzzleBoard) -> Solution {
    let mut engine = SearchEngine::new();
    let mut frontier = FifoFrontier::new();

    engine.parents.insert(start.clone(), None);
    frontier.add(start.clone());
    engine.frontier_count += 1;

    if start == goal {
        return engine.results(Some(start));
    }

    while let Some(node) = frontier.pop() {
        for (_mv, succ) in engine.expand(&node) {
            // First discovery wins; revisits carry no cheaper path under
            // uniform step cost.
            if frontier.contains(&succ) || engine.explored.contains(&succ) {
                continue;
            }
            engine.parents.insert(succ.clone(), Some(node.clone()));
            if succ == *goal {
                return engine.results(Some(&succ));
            }
            engine.frontier_count += 1;
            frontier.add(succ);
        }
    }

    engine.results(None)
}

/// Shared best-first driver for uniform-cost, greedy, and A*.
///
/// The goal test happens at pop time: a state's priority is only final
/// when it leaves the frontier. Explored states are never reopened, which
/// is sound here because transition costs are non-negative. An in-frontier
/// successor is rebound to a new parent and re-prioritized only when the
/// alternative priority is strictly lower; for the greedy policy the
/// priority is a pure function of the state, so a strictly lower
/// alternative never exists and the first discovery stands, as intended.
fn solve_best_first(
    start: &EightPuzzleBoard,
    goal: &EightPuzzleBoard,
    policy: PriorityPolicy,
) -> Solution {
    let mut engine = SearchEngine::new();
    let mut frontier = PriorityFrontier::new();

    engine.parents.insert(start.clone(), None);
    frontier.add(start.clone(), policy.heuristic(start, goal));
    engine.frontier_count += 1;

    if start == goal {
        return engine.results(Some(start));
    }

    while let Some(node) = frontier.pop() {
        let succs = engine.expand(&node);
        if node == *goal {
            return engine.results(Some(&node));
        }

        let cost_to_node = if policy.uses_cost() {
            engine.path_cost(&node)
        } else {
            0
        };

        for (mv, succ) in succs {
            if engine.explored.contains(&succ) {
                continue;
            }

            let cost_term = if policy.uses_cost() {
                cost_to_node + transition_cost(&node, mv)
            } else {
                0
            };
            let priority = cost_term + policy.heuristic(&succ, goal);

            match frontier.get(&succ) {
                Some(current) => {
                    if priority < current {
                        // Cheaper route found: rebind the parent and
                        // replace the frontier entry.
                        engine.parents.insert(succ.clone(), Some(node.clone()));
                        frontier.remove(&succ);
                        frontier.add(succ, priority);
                    }
                }
                None => {
                    engine.parents.insert(succ.clone(), Some(node.clone()));
                    engine.frontier_count += 1;
                    frontier.add(succ, priority);
                }
            }
        }
    }

    engine.results(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::is_solvable;

    fn board(s: &str) -> EightPuzzleBoard {
        s.parse().unwrap()
    }

    /// Checks the structural invariants every successful solution must
    /// satisfy: the path starts at `start` with no move, ends at `goal`,
    /// consecutive states are one legal move apart with the recorded move,
    /// and the reported cost matches the pairwise recomputation.
    fn assert_valid_solution(
        solution: &Solution,
        start: &EightPuzzleBoard,
        goal: &EightPuzzleBoard,
    ) {
        let path = solution.path.as_ref().expect("expected a solved path");
        assert_eq!(path[0], (None, start.clone()));
        assert_eq!(&path.last().unwrap().1, goal);

        let mut recomputed_cost = 0u64;
        for pair in path.windows(2) {
            let (_, ref prev) = pair[0];
            let (recorded, ref next) = pair[1];
            assert_eq!(
                prev.get_move(next),
                recorded,
                "recorded move does not connect {} to {}",
                prev,
                next
            );
            let (x, y) = prev.blank_position();
            let moved = next.get_tile(x, y) as u64;
            recomputed_cost += moved * moved;
        }
        assert_eq!(solution.path_cost, Some(recomputed_cost));
        assert!(solution.frontier_count >= solution.expanded_count);
    }

    #[test]
    fn test_flavor_tags_round_trip() {
        let all = Strategy::all();
        assert_eq!(all.len(), 8);
        for strategy in all {
            assert_eq!(Strategy::from_tag(&strategy.tag()), Ok(strategy));
        }
    }

    #[test]
    fn test_unknown_flavor_is_a_usage_error() {
        let err = Strategy::from_tag("dfs").unwrap_err();
        assert!(err.contains("Unknown search flavor 'dfs'"), "{}", err);

        let err = Strategy::from_tag("greedy-h9").unwrap_err();
        assert!(err.contains("Unknown heuristic tag 'h9'"), "{}", err);

        let err = Strategy::from_tag("hillclimb-h1").unwrap_err();
        assert!(err.contains("Unknown search flavor 'hillclimb-h1'"), "{}", err);
    }

    #[test]
    fn test_transition_cost_reads_the_sliding_tile() {
        // Goal blank is top-left; tile 3 slides up (cost 9), tile 1 slides
        // left (cost 1).
        let goal = EightPuzzleBoard::goal();
        assert_eq!(transition_cost(&goal, Move::Up), 9);
        assert_eq!(transition_cost(&goal, Move::Left), 1);

        // "312045678": blank mid-left; 6 below, 3 above, 4 to the right.
        let state = board("312045678");
        assert_eq!(transition_cost(&state, Move::Up), 36);
        assert_eq!(transition_cost(&state, Move::Down), 9);
        assert_eq!(transition_cost(&state, Move::Left), 16);
    }

    #[test]
    fn test_start_equals_goal_for_every_strategy() {
        let goal = EightPuzzleBoard::goal();
        for strategy in Strategy::all() {
            let solution = solve(&goal, &goal, &strategy);
            assert_eq!(solution.path_len(), Some(1), "{}", strategy);
            assert_eq!(solution.path_cost, Some(0), "{}", strategy);
            assert_eq!(solution.frontier_count, 1, "{}", strategy);
            assert_eq!(solution.expanded_count, 0, "{}", strategy);
            assert_eq!(
                solution.path.unwrap()[0],
                (None, goal.clone()),
                "{}",
                strategy
            );
        }
    }

    #[test]
    fn test_single_move_start_bfs() {
        // "102345678" is one slide (tile 1 moving right) from the goal.
        let start = board("102345678");
        let goal = EightPuzzleBoard::goal();
        let solution = solve(&start, &goal, &Strategy::BreadthFirst);

        assert_valid_solution(&solution, &start, &goal);
        assert_eq!(solution.path_len(), Some(2));
        assert_eq!(solution.path_cost, Some(1));
        let path = solution.path.unwrap();
        assert_eq!(path[1].0, Some(Move::Right));
        // BFS spots the goal at generation time: the two non-goal
        // successors enter the frontier first, the goal never does.
        assert_eq!(solution.frontier_count, 3);
        assert_eq!(solution.expanded_count, 1);
    }

    #[test]
    fn test_single_move_start_cost_strategies() {
        // "312045678" is one slide from the goal: tile 3 moves down,
        // costing 3^2 = 9.
        let start = board("312045678");
        let goal = EightPuzzleBoard::goal();

        for strategy in [
            Strategy::UniformCost,
            Strategy::AStar(Heuristic::ManhattanDistance),
        ] {
            let solution = solve(&start, &goal, &strategy);
            assert_valid_solution(&solution, &start, &goal);
            assert_eq!(solution.path_len(), Some(2), "{}", strategy);
            assert_eq!(solution.path_cost, Some(9), "{}", strategy);
            // All three successors are discovered before the goal pops.
            assert_eq!(solution.frontier_count, 4, "{}", strategy);
            assert_eq!(solution.expanded_count, 2, "{}", strategy);
        }
    }

    #[test]
    fn test_small_fixture_all_strategies_find_the_optimum() {
        // "142375608" is three moves from the goal with optimal cost 66;
        // on this start even the greedy flavors happen to land on it.
        let start = board("142375608");
        let goal = EightPuzzleBoard::goal();

        for strategy in Strategy::all() {
            let solution = solve(&start, &goal, &strategy);
            assert_valid_solution(&solution, &start, &goal);
            assert_eq!(solution.path_len(), Some(4), "{}", strategy);
            assert_eq!(solution.path_cost, Some(66), "{}", strategy);
        }
    }

    #[test]
    fn test_small_fixture_counter_bookkeeping() {
        let start = board("142375608");
        let goal = EightPuzzleBoard::goal();

        let bfs = solve(&start, &goal, &Strategy::BreadthFirst);
        assert_eq!((bfs.frontier_count, bfs.expanded_count), (10, 5));

        let ucost = solve(&start, &goal, &Strategy::UniformCost);
        assert_eq!((ucost.frontier_count, ucost.expanded_count), (19, 11));

        let greedy = solve(&start, &goal, &Strategy::Greedy(Heuristic::ManhattanDistance));
        assert_eq!((greedy.frontier_count, greedy.expanded_count), (9, 4));

        let astar = solve(&start, &goal, &Strategy::AStar(Heuristic::ManhattanDistance));
        assert_eq!((astar.frontier_count, astar.expanded_count), (16, 9));
    }

    #[test]
    fn test_medium_fixture_optimality_and_informedness() {
        // "415328067" needs 12 moves; the cheapest path costs 234.
        let start = board("415328067");
        let goal = EightPuzzleBoard::goal();

        let bfs = solve(&start, &goal, &Strategy::BreadthFirst);
        assert_valid_solution(&bfs, &start, &goal);
        assert_eq!(bfs.path_len(), Some(13));

        let ucost = solve(&start, &goal, &Strategy::UniformCost);
        assert_valid_solution(&ucost, &start, &goal);
        assert_eq!(ucost.path_cost, Some(234));

        for heuristic in [Heuristic::MisplacedTiles, Heuristic::ManhattanDistance] {
            let astar = solve(&start, &goal, &Strategy::AStar(heuristic));
            assert_valid_solution(&astar, &start, &goal);
            assert_eq!(astar.path_cost, Some(234), "astar-{}", heuristic);
            assert!(
                astar.expanded_count <= ucost.expanded_count,
                "astar-{} expanded {} nodes, ucost only {}",
                heuristic,
                astar.expanded_count,
                ucost.expanded_count
            );
        }

        // Greedy and A*-h3 only promise a valid path, not an optimal one.
        for strategy in [
            Strategy::Greedy(Heuristic::MisplacedTiles),
            Strategy::Greedy(Heuristic::ManhattanDistance),
            Strategy::Greedy(Heuristic::WeightedManhattan),
            Strategy::AStar(Heuristic::WeightedManhattan),
        ] {
            let solution = solve(&start, &goal, &strategy);
            assert_valid_solution(&solution, &start, &goal);
        }
    }

    #[test]
    fn test_long_fixture_bfs_vs_cost_optimality() {
        // "802356174" needs 25 moves; the move-optimal path costs 728
        // while the cost-optimal one spends 30 moves for a total of 692.
        let start = board("802356174");
        let goal = EightPuzzleBoard::goal();

        let bfs = solve(&start, &goal, &Strategy::BreadthFirst);
        assert_valid_solution(&bfs, &start, &goal);
        assert_eq!(bfs.path_len(), Some(26));

        let ucost = solve(&start, &goal, &Strategy::UniformCost);
        assert_valid_solution(&ucost, &start, &goal);
        assert_eq!(ucost.path_cost, Some(692));

        let astar = solve(&start, &goal, &Strategy::AStar(Heuristic::ManhattanDistance));
        assert_valid_solution(&astar, &start, &goal);
        assert_eq!(astar.path_cost, Some(692));
        assert!(astar.expanded_count <= ucost.expanded_count);
    }

    #[test]
    fn test_unsolvable_start_exhausts_the_component() {
        // "021345678" swaps tiles 1 and 2: odd parity, unreachable. The
        // search must visit the entire reachable half of the state space
        // (9!/2 = 181440 states) and report failure.
        let start = board("021345678");
        let goal = EightPuzzleBoard::goal();
        assert!(!is_solvable(&start, &goal));

        for strategy in [
            Strategy::BreadthFirst,
            Strategy::Greedy(Heuristic::ManhattanDistance),
        ] {
            let solution = solve(&start, &goal, &strategy);
            assert!(!solution.succeeded(), "{}", strategy);
            assert_eq!(solution.path, None, "{}", strategy);
            assert_eq!(solution.path_cost, None, "{}", strategy);
            assert_eq!(solution.frontier_count, 181_440, "{}", strategy);
            assert_eq!(solution.expanded_count, 181_440, "{}", strategy);
        }
    }

    #[test]
    fn test_solve_is_deterministic() {
        let start = board("415328067");
        let goal = EightPuzzleBoard::goal();
        for strategy in [
            Strategy::BreadthFirst,
            Strategy::UniformCost,
            Strategy::Greedy(Heuristic::WeightedManhattan),
            Strategy::AStar(Heuristic::ManhattanDistance),
        ] {
            let first = solve(&start, &goal, &strategy);
            let second = solve(&start, &goal, &strategy);
            assert_eq!(first, second, "{}", strategy);
        }
    }

    #[test]
    fn test_non_goal_destination() {
        // The goal is an explicit parameter, not a constant: search
        // towards an arbitrary reachable target.
        let start = EightPuzzleBoard::goal();
        let goal = board("415328067");
        let solution = solve(&start, &goal, &Strategy::BreadthFirst);
        assert_valid_solution(&solution, &start, &goal);
        assert_eq!(solution.path_len(), Some(13));
    }

    #[test]
    fn test_scrambled_starts_solve_back_to_goal() {
        let goal = EightPuzzleBoard::goal();
        for seed in 0..4 {
            let start = goal.scrambled_from(12, seed);
            assert!(is_solvable(&start, &goal));

            // Twelve scramble moves bound the optimal move count from
            // above, and move count is what breadth-first minimizes.
            let bfs = solve(&start, &goal, &Strategy::BreadthFirst);
            assert_valid_solution(&bfs, &start, &goal);
            assert!(
                bfs.path_len().unwrap() <= 13,
                "seed {}: bfs found {} states, scramble bound is 13",
                seed,
                bfs.path_len().unwrap()
            );

            // A*-h2 minimizes path cost, not moves: its path may be
            // longer than the move-optimal one but never costlier.
            let astar =
                solve(&start, &goal, &Strategy::AStar(Heuristic::ManhattanDistance));
            assert_valid_solution(&astar, &start, &goal);
            assert!(
                astar.path_cost.unwrap() <= bfs.path_cost.unwrap(),
                "seed {}: astar-h2 cost {} exceeds the move-optimal path's {}",
                seed,
                astar.path_cost.unwrap(),
                bfs.path_cost.unwrap()
            );
        }
    }
}
