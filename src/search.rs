//! A* search over board states.
//!
//! Nodes live in an arena and refer to their parent by index. The frontier
//! is a binary heap of `(f, sequence)` keys backed by a board index, so a
//! cheaper path to a frontier board replaces the arena entry's bookkeeping
//! and pushes a fresh heap key; the superseded key is skipped when popped.
//! Equal `f` values pop in insertion order.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, trace};

use crate::board::{check_compatible, Board};
use crate::error::SearchError;
use crate::heuristic::{manhattan, Heuristic, Manhattan};
use crate::moves::{successors, Move};

/// Stable index of a node in the search arena.
pub type NodeId = usize;

/// One slide of a solution, with the board it produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub mv: Move,
    pub board: Board,
}

/// Counters collected during a single search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes moved from the frontier into the visited set.
    pub expanded: u64,
    /// Successor boards produced.
    pub generated: u64,
    /// Successors discarded because an equal visited board was as cheap.
    pub pruned: u64,
    /// Frontier entries given a cheaper parent.
    pub reparented: u64,
    /// Visited boards put back on the frontier.
    pub reopened: u64,
    pub frontier_peak: usize,
}

/// A solved instance: the ordered slides from start to goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub steps: Vec<Step>,
    pub stats: SearchStats,
}

impl Solution {
    /// Number of slides.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.steps.iter().map(|step| step.mv)
    }
}

/// Finds a shortest slide sequence from `start` to `goal` with default
/// settings.
///
/// Solvability is not checked; an unsolvable pair exhausts the frontier.
pub fn solve(start: Board, goal: Board) -> Result<Vec<Step>, SearchError> {
    Solver::new()
        .solve(&start, &goal)
        .map(|solution| solution.steps)
}

/// Configurable A* solver.
#[derive(Debug, Clone, Default)]
pub struct Solver<H = Manhattan> {
    heuristic: H,
    cancel: Option<Arc<AtomicBool>>,
    max_expansions: Option<u64>,
}

impl Solver<Manhattan> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<H: Heuristic> Solver<H> {
    /// Replaces the estimate used for `h`. Move costs keep using the
    /// Manhattan distance between adjacent boards.
    pub fn with_heuristic<H2: Heuristic>(self, heuristic: H2) -> Solver<H2> {
        Solver {
            heuristic,
            cancel: self.cancel,
            max_expansions: self.max_expansions,
        }
    }

    /// Flag polled once per frontier pop; setting it stops the search.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn with_max_expansions(mut self, limit: u64) -> Self {
        self.max_expansions = Some(limit);
        self
    }

    pub fn solve(&self, start: &Board, goal: &Board) -> Result<Solution, SearchError> {
        check_compatible(start, goal)?;

        let started = Instant::now();
        let mut search = Search::new(self, start, goal)?;
        let result = search.run();

        let stats = search.stats;
        let duration_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(steps) => info!(
                event = "search_end",
                outcome = ?search.status,
                moves = steps.len(),
                expanded = stats.expanded,
                generated = stats.generated,
                duration_ms,
            ),
            Err(err) => info!(
                event = "search_end",
                outcome = ?search.status,
                error = %err,
                expanded = stats.expanded,
                generated = stats.generated,
                duration_ms,
            ),
        }

        result.map(|steps| Solution { steps, stats })
    }

    fn cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Initialized,
    Running,
    Succeeded,
    Exhausted,
    Aborted,
}

#[derive(Debug, Clone)]
struct Node {
    board: Board,
    parent: Option<NodeId>,
    mv: Option<Move>,
    g: u32,
    h: u32,
    f: u32,
}

/// State of one search run.
struct Search<'a, H> {
    solver: &'a Solver<H>,
    goal: &'a Board,
    nodes: Vec<Node>,
    frontier: BinaryHeap<Reverse<(u32, u64, NodeId)>>,
    open: HashMap<Board, NodeId>,
    closed: HashMap<Board, NodeId>,
    seq: u64,
    status: Status,
    stats: SearchStats,
}

impl<'a, H: Heuristic> Search<'a, H> {
    fn new(solver: &'a Solver<H>, start: &Board, goal: &'a Board) -> Result<Self, SearchError> {
        let h = solver.heuristic.estimate(start, goal)?;
        let mut search = Self {
            solver,
            goal,
            nodes: Vec::new(),
            frontier: BinaryHeap::new(),
            open: HashMap::new(),
            closed: HashMap::new(),
            seq: 0,
            status: Status::Initialized,
            stats: SearchStats::default(),
        };
        search.insert(Node {
            board: start.clone(),
            parent: None,
            mv: None,
            g: 0,
            h,
            f: h,
        });
        Ok(search)
    }

    fn run(&mut self) -> Result<Vec<Step>, SearchError> {
        debug_assert_eq!(self.status, Status::Initialized);
        self.status = Status::Running;
        info!(
            event = "search_start",
            width = self.goal.width(),
            h0 = self.nodes[0].h,
        );

        while let Some(id) = self.pop() {
            if self.solver.cancelled() {
                self.status = Status::Aborted;
                return Err(SearchError::Cancelled {
                    expanded: self.stats.expanded,
                });
            }

            if self.nodes[id].board == *self.goal {
                return Ok(self.succeed(id));
            }

            if let Some(limit) = self.solver.max_expansions {
                if self.stats.expanded >= limit {
                    self.status = Status::Aborted;
                    return Err(SearchError::LimitReached { limit });
                }
            }

            match self.expand(id) {
                Ok(Some(found)) => return Ok(self.succeed(found)),
                Ok(None) => {}
                Err(err) => {
                    self.status = Status::Aborted;
                    return Err(err);
                }
            }
        }

        self.status = Status::Exhausted;
        Err(SearchError::Exhausted {
            expanded: self.stats.expanded,
        })
    }

    /// Pops the cheapest live frontier node, skipping superseded heap keys.
    fn pop(&mut self) -> Option<NodeId> {
        while let Some(Reverse((f, _, id))) = self.frontier.pop() {
            let node = &self.nodes[id];
            if node.f == f && self.open.get(&node.board) == Some(&id) {
                self.open.remove(&node.board);
                return Some(id);
            }
        }
        None
    }

    /// Closes `id` and relaxes its successors. Returns a successor node
    /// equal to the goal as soon as one is generated.
    fn expand(&mut self, id: NodeId) -> Result<Option<NodeId>, SearchError> {
        let (board, g) = {
            let node = &self.nodes[id];
            (node.board.clone(), node.g)
        };
        self.closed.insert(board.clone(), id);
        self.stats.expanded += 1;
        trace!(
            node = id,
            g,
            f = self.nodes[id].f,
            frontier = self.open.len(),
            "expanding"
        );

        for succ in successors(&board) {
            self.stats.generated += 1;

            let cost = manhattan(&board, &succ.board)?;
            debug_assert_eq!(cost, 1);
            let tentative_g = g + cost;
            let h = self.solver.heuristic.estimate(&succ.board, self.goal)?;
            let tentative_f = tentative_g + h;

            if succ.board == *self.goal {
                let found = self.nodes.len();
                self.nodes.push(Node {
                    board: succ.board,
                    parent: Some(id),
                    mv: Some(succ.mv),
                    g: tentative_g,
                    h,
                    f: tentative_f,
                });
                return Ok(Some(found));
            }

            if let Some(&seen) = self.closed.get(&succ.board) {
                if self.nodes[seen].f <= tentative_f {
                    self.stats.pruned += 1;
                    continue;
                }
            }

            match self.open.get(&succ.board).copied() {
                None => {
                    if self.closed.contains_key(&succ.board) {
                        self.stats.reopened += 1;
                        debug!(parent = id, f = tentative_f, "reopening visited board");
                    }
                    self.insert(Node {
                        board: succ.board,
                        parent: Some(id),
                        mv: Some(succ.mv),
                        g: tentative_g,
                        h,
                        f: tentative_f,
                    });
                }
                Some(existing) if tentative_f < self.nodes[existing].f => {
                    let node = &mut self.nodes[existing];
                    debug!(
                        node = existing,
                        old_f = node.f,
                        new_f = tentative_f,
                        parent = id,
                        "re-parenting frontier node"
                    );
                    node.parent = Some(id);
                    node.mv = Some(succ.mv);
                    node.g = tentative_g;
                    node.h = h;
                    node.f = tentative_f;
                    self.stats.reparented += 1;
                    self.push(existing, tentative_f);
                }
                Some(_) => {}
            }
        }

        Ok(None)
    }

    fn insert(&mut self, node: Node) {
        let id = self.nodes.len();
        let f = node.f;
        self.open.insert(node.board.clone(), id);
        self.nodes.push(node);
        self.push(id, f);
        self.stats.frontier_peak = self.stats.frontier_peak.max(self.open.len());
    }

    fn push(&mut self, id: NodeId, f: u32) {
        self.frontier.push(Reverse((f, self.seq, id)));
        self.seq += 1;
    }

    fn succeed(&mut self, id: NodeId) -> Vec<Step> {
        self.status = Status::Succeeded;
        self.reconstruct(id)
    }

    /// Walks parent links back to the start and returns the slides in
    /// forward order. The start node carries no move and is left out.
    fn reconstruct(&self, terminal: NodeId) -> Vec<Step> {
        let mut steps = Vec::new();
        let mut cursor = Some(terminal);
        while let Some(id) = cursor {
            let node = &self.nodes[id];
            if let Some(mv) = node.mv {
                steps.push(Step {
                    mv,
                    board: node.board.clone(),
                });
            }
            cursor = node.parent;
        }
        steps.reverse();
        steps
    }
}
