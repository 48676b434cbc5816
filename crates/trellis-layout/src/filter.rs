// crates/trellis-layout/src/filter.rs
//! Child selection shared by every layout. All helpers skip children that are
//! excluded from layout and keep insertion order.

use trellis_core::{LayoutTree, Node, NodeId};

use crate::axis::LayoutAxis;

fn filtered_children<F>(tree: &LayoutTree, id: NodeId, predicate: F) -> Vec<NodeId>
where
    F: Fn(&Node) -> bool,
{
    tree.children(id)
        .iter()
        .copied()
        .filter(|child| {
            tree.get(*child)
                .map_or(false, |node| !node.exclude_from_layout && predicate(node))
        })
        .collect()
}

pub fn layoutable_children(tree: &LayoutTree, id: NodeId) -> Vec<NodeId> {
    filtered_children(tree, id, |_| true)
}

pub fn flexible_children<A: LayoutAxis>(tree: &LayoutTree, id: NodeId) -> Vec<NodeId> {
    filtered_children(tree, id, A::is_flexible)
}

/// Children flexible on neither axis.
pub fn static_children(tree: &LayoutTree, id: NodeId) -> Vec<NodeId> {
    filtered_children(tree, id, |node| !node.is_flexible())
}
