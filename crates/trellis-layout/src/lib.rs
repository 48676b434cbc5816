// crates/trellis-layout/src/lib.rs

use tracing::debug;
use trellis_core::{LayoutTree, LayoutType, NodeId};

pub mod axis;
pub mod config;
pub mod constraints;
pub mod error;
pub mod filter;
pub mod flow;
pub mod stack;

pub use axis::*;
pub use config::*;
pub use constraints::*;
pub use error::*;
pub use filter::*;
pub use flow::{horizontal_flow_layout, vertical_flow_layout};
pub use stack::{content_size, stack_layout};

/// Something that can size and place the direct children of one node.
///
/// Recursing into grandchildren is the caller's job.
pub trait LayoutEngine {
    fn layout(&mut self, tree: &mut LayoutTree, id: NodeId) -> Result<()>;
}

#[derive(Debug, Clone, Default)]
pub struct BoxLayoutEngine {
    config: LayoutConfig,
    passes: u64,
}

impl BoxLayoutEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Number of containers laid out so far.
    pub fn passes(&self) -> u64 {
        self.passes
    }
}

impl LayoutEngine for BoxLayoutEngine {
    fn layout(&mut self, tree: &mut LayoutTree, id: NodeId) -> Result<()> {
        self.passes += 1;
        run_layout(tree, id, &self.config)
    }
}

/// Size and position the direct children of `id` using its layout type.
pub fn run_layout(tree: &mut LayoutTree, id: NodeId, config: &LayoutConfig) -> Result<()> {
    let node = tree.node(id)?;
    if node.children().is_empty() {
        return Ok(());
    }

    let layout_type = node.layout_type;
    debug!(
        "Laying out {} children of {} with {:?}",
        node.child_count(),
        node.label(),
        layout_type
    );

    match layout_type {
        LayoutType::Stack => stack_layout(tree, id, config),
        LayoutType::VerticalFlow => vertical_flow_layout(tree, id, config),
        LayoutType::HorizontalFlow => horizontal_flow_layout(tree, id, config),
        LayoutType::Row => Err(LayoutError::UnsupportedLayout {
            node: id,
            layout_type,
        }),
    }
}
