// src/lib.rs
//! Retained-mode box layout: stack and flow containers sized by flex weights,
//! laid out one container at a time as a frame is painted.

pub mod dump;
pub mod scene;

pub use trellis_core;
pub use trellis_layout;
pub use trellis_render;

pub use dump::{snapshot, tree_json, tree_text, NodeSnapshot};
pub use scene::{load_scene, Scene, SceneNode};

use anyhow::{Context, Result};
use trellis_core::LayoutTree;
use trellis_layout::{BoxLayoutEngine, LayoutConfig};
use trellis_render::{CommandRecorder, FrameDriver, FrameReport};

/// Lay out and paint one frame of `tree` into a fresh recorder.
pub fn render_once(
    tree: &mut LayoutTree,
    config: LayoutConfig,
) -> Result<(FrameReport, CommandRecorder)> {
    let mut driver = FrameDriver::new(BoxLayoutEngine::new().with_config(config));
    let mut recorder = CommandRecorder::new();
    let report = driver
        .render_frame(tree, &mut recorder)
        .context("Frame failed")?;
    Ok((report, recorder))
}
