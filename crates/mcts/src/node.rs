//! MCTS node types for tree storage.
//!
//! Uses arena allocation with indices for cache locality and simpler memory management.
//!
//! A node below the root stands for one full round: the agent's move and the
//! opponent's reply to it. Values are therefore always kept from the agent's
//! point of view and never change sign between levels.

use nogo_core::Move;

/// Index into the node arena.
///
/// This is a lightweight handle that references a node in the tree.
/// Using indices instead of pointers avoids Rc/RefCell overhead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root node is always at index 0.
    pub const ROOT: NodeId = NodeId(0);
}

/// Statistics for a single MCTS node.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodeStats {
    /// Number of completed simulations that passed through this node.
    pub visit_count: u32,

    /// Sum of rollout outcomes (1 for an agent win, 0 for a loss).
    pub value_sum: f32,
}

impl NodeStats {
    /// Mean outcome for this node.
    ///
    /// Returns `None` if the node has never been visited.
    pub fn mean_value(&self) -> Option<f32> {
        (self.visit_count > 0).then(|| self.value_sum / self.visit_count as f32)
    }
}

/// The opponent's answer to a node's move, resolved on first traversal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reply {
    Unresolved,
    Play(Move),
    /// The opponent had no legal move: the agent wins here.
    NoMove,
}

/// A node in the MCTS tree.
#[derive(Clone, Debug)]
pub struct Node {
    /// Agent move that led to this node (None for root).
    pub mv: Option<Move>,

    /// Cached opponent reply to `mv`.
    pub reply: Reply,

    pub stats: NodeStats,

    /// Children in insertion order: (move, node_id) pairs.
    pub children: Vec<(Move, NodeId)>,

    /// Set once every legal agent move at this node has a child.
    pub fully_expanded: bool,
}

impl Node {
    /// Create a new unvisited node for an agent move.
    pub fn new(mv: Move) -> Self {
        Self {
            mv: Some(mv),
            ..Self::root()
        }
    }

    /// Create the root node.
    pub fn root() -> Self {
        Self {
            mv: None,
            reply: Reply::Unresolved,
            stats: NodeStats::default(),
            children: Vec::new(),
            fully_expanded: false,
        }
    }

    /// Whether this node was created for `mv`.
    pub fn has_child_for(&self, mv: &Move) -> bool {
        self.children.iter().any(|(m, _)| m == mv)
    }
}
