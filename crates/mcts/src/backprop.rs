use crate::node::NodeId;
use crate::rollout::Outcome;
use crate::tree::Tree;

/// Backup a simulation outcome along the visited path.
///
/// Every node on the path, root included, gains one visit and the outcome's
/// value. There is no sign flip between levels: each level is a full
/// agent-plus-opponent round, so every node sees the outcome from the
/// agent's side.
pub fn backpropagate(tree: &mut Tree, path: &[NodeId], outcome: Outcome) {
    let value = outcome.value();
    for &node_id in path {
        let stats = &mut tree.get_mut(node_id).stats;
        stats.visit_count += 1;
        stats.value_sum += value;
    }
}
