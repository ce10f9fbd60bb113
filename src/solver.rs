//! Best-first search over puzzle boards and the nodes it produces.
use crate::engine::{Board, Move, Puzzle};
use crate::heuristics::Heuristic;
use log::{debug, trace, warn};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};
use std::time::{Duration, Instant};
use thiserror::Error;

/// Index of a node inside the arena owned by a search and, afterwards, by its `Solution`.
pub type NodeId = usize;

/// The unit of search: a board plus the cost bookkeeping and a link to the node that
/// generated it.
///
/// Nodes are never modified once created. The parent link is an index into the same
/// arena, so a chain of parents always leads back to the root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchNode {
    state: Board,
    path_cost: u32,
    heuristic: u32,
    parent: Option<NodeId>,
    action: Option<Move>,
}

impl SearchNode {
    fn root(state: Board, heuristic: u32) -> Self {
        SearchNode {
            state,
            path_cost: 0,
            heuristic,
            parent: None,
            action: None,
        }
    }

    fn child(state: Board, path_cost: u32, heuristic: u32, parent: NodeId, action: Move) -> Self {
        SearchNode {
            state,
            path_cost,
            heuristic,
            parent: Some(parent),
            action: Some(action),
        }
    }

    /// The board held by this node.
    pub fn state(&self) -> &Board {
        &self.state
    }

    /// Moves taken from the initial board (g).
    pub fn path_cost(&self) -> u32 {
        self.path_cost
    }

    /// Estimated moves remaining (h).
    pub fn heuristic(&self) -> u32 {
        self.heuristic
    }

    /// g + h, the frontier's ordering key.
    pub fn total_estimate(&self) -> u32 {
        self.path_cost + self.heuristic
    }

    /// The node this one was generated from, `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The blank move that produced this node from its parent, `None` for the root.
    pub fn action(&self) -> Option<Move> {
        self.action
    }
}

/// Tunables for a single search.
///
/// The defaults reproduce the plain tree search: no closed set and no limit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Skip expanding a board that has already been expanded once.
    ///
    /// Off by default; turning it on changes the expansion statistics.
    pub deduplicate: bool,
    /// Stop with `SearchError::LimitReached` once this many nodes have been removed from
    /// the frontier, not counting the root.
    ///
    /// The count is the same one reported as `expanded`: with `deduplicate` on, a removed
    /// duplicate that is skipped without generating children still counts toward it.
    pub max_expansions: Option<u64>,
}

/// Reasons a search ends without reaching the goal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("no solution found: frontier exhausted after {expanded} expansions")]
    Exhausted { expanded: u64 },
    #[error("search stopped after reaching the limit of {expanded} expansions")]
    LimitReached { expanded: u64 },
}

/// A successful search: the terminal node together with every node generated on the way.
///
/// The arena is kept whole so that any node's ancestry stays walkable for as long as the
/// `Solution` is alive; it is released in one piece when the `Solution` drops.
#[derive(Clone, Debug)]
pub struct Solution {
    nodes: Vec<SearchNode>,
    terminal: NodeId,
    heuristic: Heuristic,
    expanded: u64,
    elapsed: Duration,
}

impl Solution {
    /// The node whose state equals the goal.
    pub fn terminal(&self) -> &SearchNode {
        &self.nodes[self.terminal]
    }

    /// Looks up any node generated by the search.
    pub fn node(&self, id: NodeId) -> Option<&SearchNode> {
        self.nodes.get(id)
    }

    /// The strategy the search ran with.
    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    /// Number of nodes removed from the frontier, not counting the root's removal.
    pub fn expanded(&self) -> u64 {
        self.expanded
    }

    /// Number of nodes created, root included.
    pub fn nodes_generated(&self) -> usize {
        self.nodes.len()
    }

    /// Wall-clock time spent searching.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Length of the solution in moves.
    pub fn path_cost(&self) -> u32 {
        self.terminal().path_cost()
    }

    /// Walks the parent links from the terminal node back to the root.
    pub fn ancestry(&self) -> Ancestry<'_> {
        Ancestry {
            nodes: &self.nodes,
            next: Some(self.terminal),
        }
    }

    /// The nodes on the solution path, initial board first.
    pub fn path(&self) -> Vec<&SearchNode> {
        let mut path: Vec<&SearchNode> = self.ancestry().collect();
        path.reverse();
        path
    }

    /// The blank moves leading from the initial board to the goal.
    pub fn moves(&self) -> Vec<Move> {
        self.path().iter().filter_map(|node| node.action()).collect()
    }
}

/// Iterator over a node and its ancestors, ending with the root.
pub struct Ancestry<'a> {
    nodes: &'a [SearchNode],
    next: Option<NodeId>,
}

impl<'a> Iterator for Ancestry<'a> {
    type Item = &'a SearchNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.get(self.next?)?;
        self.next = node.parent();
        Some(node)
    }
}

/// Solves `initial` with best-first search ordered by `g + h`.
///
/// The frontier is a min-heap on `(total_estimate, node id)`. Node ids are handed out in
/// creation order and children are created in move-table order, so nodes with equal
/// estimates leave the frontier first-in first-out.
///
/// Each loop iteration removes the best node; if its board is the goal the search ends,
/// otherwise every successor is pushed with `path_cost + 1` and its own estimate. There is
/// no closed set unless `options.deduplicate` is set, so the same board may be expanded
/// many times. Unsolvable boards keep the search running until memory or
/// `options.max_expansions` runs out.
///
/// # Arguments
/// * `puzzle`: Goal board and move table.
/// * `initial`: Starting board, assumed well-formed and the same size as the goal.
/// * `heuristic`: Strategy used for the root and every child. Must be admissible for the
///   result to be optimal.
/// * `options`: Deduplication and expansion limit.
///
/// # Returns
/// * `Ok(Solution)` holding the terminal node and search statistics.
/// * `Err(SearchError::Exhausted)` if the frontier empties first.
/// * `Err(SearchError::LimitReached)` if `options.max_expansions` is hit first.
pub fn solve(
    puzzle: &Puzzle,
    initial: &Board,
    heuristic: Heuristic,
    options: SearchOptions,
) -> Result<Solution, SearchError> {
    let start = Instant::now();
    debug!(
        "starting {} search (deduplicate: {}, limit: {:?})",
        heuristic, options.deduplicate, options.max_expansions
    );

    let root = SearchNode::root(initial.clone(), heuristic.evaluate(initial, puzzle));
    let mut frontier = BinaryHeap::new();
    frontier.push(Reverse((root.total_estimate(), 0)));
    let mut nodes = vec![root];

    let mut expanded_states: HashSet<Board> = HashSet::new();
    let mut removals: u64 = 0;

    while let Some(Reverse((_, id))) = frontier.pop() {
        removals += 1;
        // The root's own removal does not count as an expansion.
        let expanded = removals - 1;

        if puzzle.is_goal(nodes[id].state()) {
            let elapsed = start.elapsed();
            debug!(
                "{} search solved in {} moves: {} expanded, {} generated, {:?}",
                heuristic,
                nodes[id].path_cost(),
                expanded,
                nodes.len(),
                elapsed
            );
            return Ok(Solution {
                nodes,
                terminal: id,
                heuristic,
                expanded,
                elapsed,
            });
        }

        if let Some(limit) = options.max_expansions {
            if expanded >= limit {
                warn!(
                    "{} search gave up after {} expansions ({} nodes in frontier)",
                    heuristic,
                    expanded,
                    frontier.len()
                );
                return Err(SearchError::LimitReached { expanded });
            }
        }

        if options.deduplicate && !expanded_states.insert(nodes[id].state().clone()) {
            continue;
        }

        let parent_cost = nodes[id].path_cost();
        trace!(
            "expanding node {} (g = {}, h = {})",
            id,
            parent_cost,
            nodes[id].heuristic()
        );

        for (mv, child) in puzzle.expand(nodes[id].state()) {
            let h = heuristic.evaluate(&child, puzzle);
            let child_id = nodes.len();
            let node = SearchNode::child(child, parent_cost + 1, h, id, mv);
            frontier.push(Reverse((node.total_estimate(), child_id)));
            nodes.push(node);
        }
    }

    let expanded = removals.saturating_sub(1);
    debug!("{} search exhausted its frontier after {} expansions", heuristic, expanded);
    Err(SearchError::Exhausted { expanded })
}

/// Solves `initial` against the conventional goal of its size with default options.
pub fn solve_default(initial: &Board, heuristic: Heuristic) -> Result<Solution, SearchError> {
    solve(
        &Puzzle::new(initial.size()),
        initial,
        heuristic,
        SearchOptions::default(),
    )
}
