// crates/trellis-layout/src/error.rs
use trellis_core::{LayoutType, NodeId, TrellisError};

use crate::axis::Axis;

/// A condition found while laying out the children of one container.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("Container {node}: flex weights on the {axis} axis sum to {flex_sum}")]
    DegenerateFlex {
        node: NodeId,
        axis: Axis,
        flex_sum: f32,
    },

    #[error("Container {node}: padding exceeds size on the {axis} axis ({available} px available)")]
    NegativeSpace {
        node: NodeId,
        axis: Axis,
        available: f32,
    },

    #[error("Container {node}: layout type {layout_type:?} is not supported")]
    UnsupportedLayout {
        node: NodeId,
        layout_type: LayoutType,
    },

    #[error(transparent)]
    Tree(#[from] TrellisError),
}

impl LayoutError {
    /// The container the condition was found on, when known.
    pub fn node(&self) -> Option<NodeId> {
        match self {
            LayoutError::DegenerateFlex { node, .. }
            | LayoutError::NegativeSpace { node, .. }
            | LayoutError::UnsupportedLayout { node, .. } => Some(*node),
            LayoutError::Tree(TrellisError::UnknownNode(node)) => Some(*node),
            LayoutError::Tree(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, LayoutError>;
