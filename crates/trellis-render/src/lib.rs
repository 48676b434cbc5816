// crates/trellis-render/src/lib.rs

use glam::Vec2;
use trellis_core::{Node, NodeId, TrellisError};

pub mod driver;
pub mod recorder;

pub use driver::*;
pub use recorder::*;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Render operation failed: {0}")]
    RenderFailed(String),
    #[error("Frame already in progress")]
    FrameInProgress,
    #[error("No frame in progress")]
    NoFrame,
    #[error(transparent)]
    Tree(#[from] TrellisError),
}

pub type RenderResult<T> = std::result::Result<T, RenderError>;

/// Backend the frame driver paints into.
pub trait Renderer {
    /// Begin a new frame covering `viewport`.
    fn begin_frame(&mut self, viewport: Vec2) -> RenderResult<()>;

    /// Paint one node. `origin` is the node's absolute position; `depth` is 0
    /// for the root.
    fn draw_node(&mut self, node: &Node, origin: Vec2, depth: usize) -> RenderResult<()>;

    /// End the current frame and present it.
    fn end_frame(&mut self) -> RenderResult<()>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    DrawRect {
        node: NodeId,
        position: Vec2,
        size: Vec2,
        depth: usize,
    },
}
