// crates/trellis-core/src/tree.rs
use std::collections::HashMap;

use tracing::trace;

use crate::{Node, NodeId, Result, TrellisError};

/// Hands out node ids for a single tree.
///
/// Ids increase monotonically and are never reused. Each tree owns its own
/// generator, so independent trees never share numbering state.
#[derive(Debug, Default, Clone)]
pub struct IdGenerator {
    next: NodeId,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> NodeId {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// Arena owning every node of one displayable tree.
#[derive(Debug, Default, Clone)]
pub struct LayoutTree {
    nodes: HashMap<NodeId, Node>,
    root: Option<NodeId>,
    ids: IdGenerator,
}

impl LayoutTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn insert_root(&mut self, mut node: Node) -> Result<NodeId> {
        if let Some(root) = self.root {
            return Err(TrellisError::RootExists(root));
        }
        let id = self.ids.next_id();
        node.id = id;
        node.parent = None;
        node.children.clear();
        self.nodes.insert(id, node);
        self.root = Some(id);
        trace!("Inserted root node {}", id);
        Ok(id)
    }

    /// Append `node` as the last child of `parent`.
    pub fn insert(&mut self, parent: NodeId, mut node: Node) -> Result<NodeId> {
        if !self.nodes.contains_key(&parent) {
            return Err(TrellisError::UnknownNode(parent));
        }
        let id = self.ids.next_id();
        node.id = id;
        node.parent = Some(parent);
        node.children.clear();
        self.nodes.insert(id, node);
        if let Some(parent_node) = self.nodes.get_mut(&parent) {
            parent_node.children.push(id);
        }
        trace!("Inserted node {} under {}", id, parent);
        Ok(id)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&id)
    }

    pub fn node(&self, id: NodeId) -> Result<&Node> {
        self.nodes.get(&id).ok_or(TrellisError::UnknownNode(id))
    }

    pub fn node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.nodes.get_mut(&id).ok_or(TrellisError::UnknownNode(id))
    }

    /// Children of `id` in insertion order; empty for unknown ids.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(&id).map(|node| node.children()).unwrap_or(&[])
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(&id).and_then(|node| node.parent)
    }

    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        let mut matches: Vec<NodeId> = self
            .nodes
            .values()
            .filter(|node| node.name.as_deref() == Some(name))
            .map(|node| node.id)
            .collect();
        matches.sort_unstable();
        matches.first().copied()
    }

    /// `id` followed by all of its descendants, depth-first in child order.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut pending = vec![id];
        while let Some(current) = pending.pop() {
            if let Some(node) = self.nodes.get(&current) {
                out.push(current);
                pending.extend(node.children.iter().rev());
            }
        }
        out
    }
}
