use crate::catalog::MoveCatalog;
use crate::node::{NodeId, Reply};
use crate::tree::Tree;
use nogo_core::{Board, Move};

/// Add at most one child to `node_id`: the first legal agent move in catalog
/// order that the node has not tried yet.
///
/// `board` is the position at the node with the agent to move. Returns the
/// new child, or `None` once every legal move has a child, after which the
/// node is marked fully expanded and never scanned again.
pub fn expand_one<B: Board>(
    tree: &mut Tree,
    node_id: NodeId,
    board: &B,
    catalog: &MoveCatalog,
) -> Option<NodeId> {
    let node = tree.get(node_id);
    if node.fully_expanded {
        return None;
    }

    let untried = catalog.first_legal_move_where(board, |mv| !node.has_child_for(mv));
    match untried {
        Some(mv) => Some(tree.add_child(node_id, mv)),
        None => {
            tree.get_mut(node_id).fully_expanded = true;
            None
        }
    }
}

/// The opponent's reply to the move at `node_id`, resolving it on first use.
///
/// `board` is the position right after the node's move, with the opponent to
/// move. The reply is the opponent's first legal move in catalog order and is
/// cached on the node, so later passes through the node replay the same
/// round. Returns `None` if the opponent has no legal move.
pub fn resolve_reply<B: Board>(
    tree: &mut Tree,
    node_id: NodeId,
    board: &B,
    opponent: &MoveCatalog,
) -> Option<Move> {
    let node = tree.get_mut(node_id);
    if node.reply == Reply::Unresolved {
        node.reply = match opponent.first_legal_move(board) {
            Some(mv) => Reply::Play(mv),
            None => Reply::NoMove,
        };
    }

    match node.reply {
        Reply::Play(mv) => Some(mv),
        Reply::NoMove | Reply::Unresolved => None,
    }
}
