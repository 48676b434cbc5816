// crates/trellis-render/src/recorder.rs
use glam::Vec2;
use trellis_core::Node;

use crate::{RenderCommand, RenderError, RenderResult, Renderer};

/// In-memory backend that keeps the commands of the last frame.
#[derive(Debug, Default)]
pub struct CommandRecorder {
    commands: Vec<RenderCommand>,
    viewport: Vec2,
    in_frame: bool,
    frames: usize,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Number of completed frames.
    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl Renderer for CommandRecorder {
    fn begin_frame(&mut self, viewport: Vec2) -> RenderResult<()> {
        if self.in_frame {
            return Err(RenderError::FrameInProgress);
        }
        self.commands.clear();
        self.viewport = viewport;
        self.in_frame = true;
        Ok(())
    }

    fn draw_node(&mut self, node: &Node, origin: Vec2, depth: usize) -> RenderResult<()> {
        if !self.in_frame {
            return Err(RenderError::NoFrame);
        }
        self.commands.push(RenderCommand::DrawRect {
            node: node.id(),
            position: origin,
            size: node.actual_size,
            depth,
        });
        Ok(())
    }

    fn end_frame(&mut self) -> RenderResult<()> {
        if !self.in_frame {
            return Err(RenderError::NoFrame);
        }
        self.in_frame = false;
        self.frames += 1;
        Ok(())
    }
}
