//! Frontier containers for the search drivers.
//!
//! Two frontiers back the search strategies:
//! - `FifoFrontier`: plain insertion order, used by breadth-first search.
//! - `PriorityFrontier`: min-priority order with by-key lookup and removal,
//!   used by the cost- and heuristic-driven strategies.
//!
//! Both pair their ordering structure with a hash-based index so that the
//! per-successor membership test the drivers run on every expansion stays
//! O(1). `PriorityFrontier::remove` is exact and immediate rather than a
//! lazy tombstone, so a priority update (remove + re-add) never leaves a
//! ghost entry behind to distort pop order or the search counters.

use crate::board::EightPuzzleBoard;
use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

/// A first-in-first-out frontier with O(1) membership testing.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<EightPuzzleBoard>,
    members: HashSet<EightPuzzleBoard>,
}

impl FifoFrontier {
    pub fn new() -> Self {
        FifoFrontier {
            queue: VecDeque::new(),
            members: HashSet::new(),
        }
    }

    /// Appends a state at the back of the queue.
    ///
    /// Adding a state that is already present is a driver bug; the drivers
    /// always test membership first, so this asserts rather than deduping
    /// silently.
    pub fn add(&mut self, state: EightPuzzleBoard) {
        let was_new = self.members.insert(state.clone());
        assert!(was_new, "state {} added to the FIFO frontier twice", state);
        self.queue.push_back(state);
    }

    /// Removes and returns the oldest state, or `None` if the frontier is
    /// exhausted.
    pub fn pop(&mut self) -> Option<EightPuzzleBoard> {
        let state = self.queue.pop_front()?;
        self.members.remove(&state);
        Some(state)
    }

    pub fn contains(&self, state: &EightPuzzleBoard) -> bool {
        self.members.contains(state)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }
}

/// A min-priority frontier keyed by board state.
///
/// The ordering lives in a `BTreeSet<(priority, state)>` while a parallel
/// `HashMap<state, priority>` provides membership tests and priority
/// lookup. Keeping the two in lock-step is what gives `remove` its exact,
/// immediate semantics: most binary-heap backings cannot delete an
/// arbitrary key, which is why the drivers implement priority decrease as
/// `remove` followed by `add`.
///
/// Pops break priority ties by the boards' own ordering, so iteration is
/// fully deterministic.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    ordered: BTreeSet<(u64, EightPuzzleBoard)>,
    priorities: HashMap<EightPuzzleBoard, u64>,
}

impl PriorityFrontier {
    pub fn new() -> Self {
        PriorityFrontier {
            ordered: BTreeSet::new(),
            priorities: HashMap::new(),
        }
    }

    /// Inserts a state with the given priority. If the state is already
    /// present its old entry is replaced, so a state never sits in the
    /// frontier under two priorities at once.
    pub fn add(&mut self, state: EightPuzzleBoard, priority: u64) {
        if let Some(old) = self.priorities.insert(state.clone(), priority) {
            self.ordered.remove(&(old, state.clone()));
        }
        self.ordered.insert((priority, state));
    }

    /// Removes and returns the state with the minimum priority, or `None`
    /// if the frontier is exhausted. Ties are broken by board order.
    pub fn pop(&mut self) -> Option<EightPuzzleBoard> {
        let (priority, state) = self.ordered.iter().next().cloned()?;
        self.ordered.remove(&(priority, state.clone()));
        self.priorities.remove(&state);
        Some(state)
    }

    pub fn contains(&self, state: &EightPuzzleBoard) -> bool {
        self.priorities.contains_key(state)
    }

    /// Returns the priority currently stored for a state, or `None` if the
    /// state is not in the frontier.
    pub fn get(&self, state: &EightPuzzleBoard) -> Option<u64> {
        self.priorities.get(state).copied()
    }

    /// Deletes a state regardless of its position in priority order.
    /// Returns whether the state was present.
    pub fn remove(&mut self, state: &EightPuzzleBoard) -> bool {
        match self.priorities.remove(state) {
            Some(priority) => {
                let removed = self.ordered.remove(&(priority, state.clone()));
                assert!(
                    removed,
                    "frontier index and ordering disagree about state {}",
                    state
                );
                true
            }
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.priorities.is_empty()
    }

    pub fn len(&self) -> usize {
        self.priorities.len()
    }
}
