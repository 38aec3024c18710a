//! Monte Carlo Tree Search implementation.
//!
//! One decision builds a fresh tree, runs select → expand → simulate →
//! backpropagate cycles until the [`Budget`](crate::Budget) runs out, and
//! plays the most visited root child.

use crate::{
    backprop::backpropagate,
    budget::BudgetTracker,
    catalog::MoveCatalog,
    config::{Budget, SearchConfig},
    expansion::{expand_one, resolve_reply},
    node::NodeId,
    rollout::{Outcome, RolloutSimulator},
    selection::{most_visited_child, select_child},
    tree::Tree,
};
use nogo_core::{Board, Color, Move};
use rand::Rng;
use std::time::Duration;
use tracing::{debug, trace};

/// Result of an MCTS search.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
    /// Move to play, or `None` when the side to move has no legal move.
    pub best_move: Option<Move>,

    /// Visit count for each root child, in insertion order. Empty when the
    /// decision was made without searching.
    pub visit_counts: Vec<(Move, u32)>,

    /// Search cycles run.
    pub cycles: u32,

    /// Wall-clock time spent on the decision.
    pub elapsed: Duration,
}

impl SearchResult {
    /// Get the chosen move.
    pub fn best(&self) -> Option<Move> {
        self.best_move
    }

    /// Sum of root child visits.
    pub fn total_visits(&self) -> u32 {
        self.visit_counts.iter().map(|(_, c)| *c).sum()
    }

    fn without_search(best_move: Option<Move>, tracker: &BudgetTracker) -> Self {
        Self {
            best_move,
            visit_counts: Vec::new(),
            cycles: 0,
            elapsed: tracker.elapsed(),
        }
    }
}

/// The per-decision catalogs, shuffled once from the agent's RNG.
struct Catalogs {
    agent: MoveCatalog,
    opponent: MoveCatalog,
}

/// Monte Carlo Tree Search with UCB1 selection and random rollouts.
///
/// Generic over the random number generator, which is threaded explicitly
/// into move ordering and rollouts.
pub struct Mcts<R: Rng> {
    config: SearchConfig,
    rng: R,
    tree: Tree,
}

impl<R: Rng> Mcts<R> {
    /// Create a new MCTS instance.
    pub fn new(config: SearchConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            tree: Tree::new(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Replace the configuration used by later searches.
    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Choose a move for `color` on `board`.
    ///
    /// `board` is never modified; every probe and playout runs on a copy.
    pub fn search<B: Board>(&mut self, board: &B, color: Color) -> SearchResult {
        let mut tracker = BudgetTracker::start(self.config.budget);
        self.tree.clear();

        let num_cells = board.num_cells();
        let catalogs = Catalogs {
            agent: MoveCatalog::shuffled(color, num_cells, &mut self.rng),
            opponent: MoveCatalog::shuffled(color.opponent(), num_cells, &mut self.rng),
        };

        if self.config.budget == Budget::Immediate {
            let best_move = catalogs.agent.first_legal_move(board);
            debug!(%color, best = ?best_move, "playing first legal move without search");
            return SearchResult::without_search(best_move, &tracker);
        }

        let legal = catalogs.agent.legal_moves(board);
        if legal.len() <= 1 {
            let best_move = legal.first().copied();
            debug!(%color, best = ?best_move, "at most one legal move, skipping search");
            return SearchResult::without_search(best_move, &tracker);
        }

        for mv in legal {
            self.tree.add_child(NodeId::ROOT, mv);
        }
        self.tree.get_mut(NodeId::ROOT).fully_expanded = true;

        let mut rollout = RolloutSimulator::new(color, num_cells);
        while tracker.should_continue() {
            if !catalogs.agent.has_any_legal_move(board) {
                break;
            }
            self.run_cycle(board, &catalogs, &mut rollout);
            tracker.record_cycle();
        }

        let best = most_visited_child(&self.tree, NodeId::ROOT);
        let win_rate = best.and_then(|(_, id)| self.tree.get(id).stats.mean_value());
        let result = SearchResult {
            best_move: best.map(|(mv, _)| mv),
            visit_counts: self.tree.root_visits(),
            cycles: tracker.cycles(),
            elapsed: tracker.elapsed(),
        };

        debug!(
            %color,
            cycles = result.cycles,
            nodes = self.tree.len(),
            elapsed_ms = result.elapsed.as_millis() as u64,
            best = ?result.best_move,
            ?win_rate,
            visits = ?result.visit_counts,
            "search complete"
        );
        result
    }

    /// Run a single cycle: select -> expand -> simulate -> backpropagate.
    ///
    /// Returns the visited path and its outcome.
    fn run_cycle<B: Board>(
        &mut self,
        root_board: &B,
        catalogs: &Catalogs,
        rollout: &mut RolloutSimulator,
    ) -> (Vec<NodeId>, Outcome) {
        let mut board = root_board.clone();
        let mut path = vec![NodeId::ROOT];
        let mut current = NodeId::ROOT;

        let outcome = loop {
            if current != NodeId::ROOT {
                // First visit: the rollout starts right after this node's move.
                if self.tree.get(current).stats.visit_count == 0 {
                    break rollout.simulate(board, &mut self.rng);
                }

                match resolve_reply(&mut self.tree, current, &board, &catalogs.opponent) {
                    Some(reply) => replay(reply, &mut board),
                    None => break Outcome::Win,
                }

                expand_one(&mut self.tree, current, &board, &catalogs.agent);
            }

            if self.tree.get(current).children.is_empty() {
                // Agent to move with nothing legal.
                break Outcome::Loss;
            }

            let child = select_child(&self.tree, current, self.config.exploration);
            let mv = self
                .tree
                .get(child)
                .mv
                .expect("BUG: non-root node without a move");
            replay(mv, &mut board);
            path.push(child);
            current = child;
        };

        backpropagate(&mut self.tree, &path, outcome);
        trace!(depth = path.len(), ?outcome, "MCTS cycle complete");

        (path, outcome)
    }
}

/// Re-apply a move recorded in the tree.
///
/// Tree moves were legal when first found and the path is deterministic, so
/// a rejection means the tree and board disagree.
fn replay<B: Board>(mv: Move, board: &mut B) {
    let placement = mv.apply(board);
    debug_assert!(
        placement.is_legal(),
        "BUG: replaying {} was rejected: {:?}",
        mv,
        placement
    );
}
