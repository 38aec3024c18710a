use crate::node::{NodeId, NodeStats};
use crate::tree::Tree;
use nogo_core::Move;

/// Select the child of `node_id` to descend into.
///
/// Unvisited children come first, in insertion order. Once every child has
/// been visited, the child with the highest UCB1 score wins; on equal scores
/// the later child is preferred.
///
/// # Panics
/// Panics if the node has no children. Callers only select below nodes
/// that have been expanded.
pub fn select_child(tree: &Tree, node_id: NodeId, exploration: f32) -> NodeId {
    let children = &tree.get(node_id).children;

    if let Some(&(_, unvisited)) = children
        .iter()
        .find(|(_, id)| tree.get(*id).stats.visit_count == 0)
    {
        return unvisited;
    }

    let total_visits: u32 = children
        .iter()
        .map(|(_, id)| tree.get(*id).stats.visit_count)
        .sum();

    // max_by returns the last of several equal maxima
    children
        .iter()
        .map(|(_, id)| (*id, ucb1(&tree.get(*id).stats, total_visits, exploration)))
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(id, _)| id)
        .expect("BUG: select_child called on node without children")
}

/// UCB1 score of a visited child:
///
/// `value / visits + C * sqrt(2 * ln(N) / visits)`
///
/// where `N` is the total visit count across the parent's children.
/// Must not be called with `stats.visit_count == 0`.
pub fn ucb1(stats: &NodeStats, total_visits: u32, exploration: f32) -> f32 {
    debug_assert!(stats.visit_count > 0, "UCB1 of an unvisited node");
    let visits = stats.visit_count as f32;
    let exploitation = stats.value_sum / visits;
    let exploration_bonus = (2.0 * (total_visits as f32).ln() / visits).sqrt();
    exploitation + exploration * exploration_bonus
}

/// The most visited child of `node_id` (the "robust child"), preferring the
/// later child on equal counts.
pub fn most_visited_child(tree: &Tree, node_id: NodeId) -> Option<(Move, NodeId)> {
    // max_by_key returns the last of several equal maxima
    tree.get(node_id)
        .children
        .iter()
        .copied()
        .max_by_key(|(_, id)| tree.get(*id).stats.visit_count)
}
