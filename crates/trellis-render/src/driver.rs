// crates/trellis-render/src/driver.rs
use glam::Vec2;
use tracing::{debug, warn};
use trellis_core::{LayoutTree, NodeId, TrellisError};
use trellis_layout::{LayoutEngine, LayoutError};

use crate::{RenderResult, Renderer};

/// What happened during one frame.
#[derive(Debug, Default)]
pub struct FrameReport {
    /// Nodes in the order they were painted.
    pub rendered: Vec<NodeId>,
    /// Containers whose children could not be (fully) laid out.
    pub layout_errors: Vec<LayoutError>,
}

impl FrameReport {
    pub fn is_clean(&self) -> bool {
        self.layout_errors.is_empty()
    }
}

/// Walks a tree once per frame, laying out each node's children right before
/// painting the node and descending into them.
pub struct FrameDriver<E: LayoutEngine> {
    engine: E,
    frames: u64,
}

impl<E: LayoutEngine> FrameDriver<E> {
    pub fn new(engine: E) -> Self {
        Self { engine, frames: 0 }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn render_frame<R: Renderer>(
        &mut self,
        tree: &mut LayoutTree,
        renderer: &mut R,
    ) -> RenderResult<FrameReport> {
        let root = tree.root().ok_or(TrellisError::MissingRoot)?;
        let viewport = tree.node(root)?.actual_size;

        renderer.begin_frame(viewport)?;
        let mut report = FrameReport::default();
        // The frame is closed even when painting fails part way.
        let walked = self.visit(tree, renderer, root, Vec2::ZERO, 0, &mut report);
        let ended = renderer.end_frame();
        walked?;
        ended?;

        self.frames += 1;
        debug!(
            "Frame {}: rendered {} nodes, {} layout errors",
            self.frames,
            report.rendered.len(),
            report.layout_errors.len()
        );
        Ok(report)
    }

    fn visit<R: Renderer>(
        &mut self,
        tree: &mut LayoutTree,
        renderer: &mut R,
        id: NodeId,
        parent_origin: Vec2,
        depth: usize,
        report: &mut FrameReport,
    ) -> RenderResult<()> {
        // A bad container only loses its own children's geometry.
        if let Err(err) = self.engine.layout(tree, id) {
            warn!("{}", err);
            report.layout_errors.push(err);
        }

        let node = tree.node(id)?;
        let origin = parent_origin + node.position;
        renderer.draw_node(node, origin, depth)?;
        report.rendered.push(id);

        let children = node.children().to_vec();
        for child in children {
            self.visit(tree, renderer, child, origin, depth + 1, report)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CommandRecorder, RenderCommand};
    use std::cell::RefCell;
    use std::rc::Rc;
    use trellis_core::{LayoutType, Node};
    use trellis_layout::{BoxLayoutEngine, Result as LayoutResult};

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Layout(NodeId),
        Draw(NodeId),
    }

    struct SpyEngine {
        inner: BoxLayoutEngine,
        log: Rc<RefCell<Vec<Event>>>,
    }

    impl LayoutEngine for SpyEngine {
        fn layout(&mut self, tree: &mut LayoutTree, id: NodeId) -> LayoutResult<()> {
            self.log.borrow_mut().push(Event::Layout(id));
            self.inner.layout(tree, id)
        }
    }

    struct SpyRenderer {
        log: Rc<RefCell<Vec<Event>>>,
    }

    impl Renderer for SpyRenderer {
        fn begin_frame(&mut self, _viewport: Vec2) -> RenderResult<()> {
            Ok(())
        }

        fn draw_node(&mut self, node: &Node, _origin: Vec2, _depth: usize) -> RenderResult<()> {
            self.log.borrow_mut().push(Event::Draw(node.id()));
            Ok(())
        }

        fn end_frame(&mut self) -> RenderResult<()> {
            Ok(())
        }
    }

    fn nested_tree() -> (LayoutTree, [NodeId; 5]) {
        let mut tree = LayoutTree::new();
        let root = tree
            .insert_root(
                Node::new()
                    .with_size(100.0, 100.0)
                    .with_layout(LayoutType::VerticalFlow),
            )
            .unwrap();
        let row = tree
            .insert(
                root,
                Node::new()
                    .with_flex(1.0, 1.0)
                    .with_layout(LayoutType::HorizontalFlow),
            )
            .unwrap();
        let left = tree.insert(row, Node::new().with_flex(1.0, 1.0)).unwrap();
        let right = tree.insert(row, Node::new().with_flex(1.0, 1.0)).unwrap();
        let footer = tree.insert(root, Node::new().with_height(20.0)).unwrap();
        (tree, [root, row, left, right, footer])
    }

    #[test]
    fn test_layout_runs_before_each_draw_depth_first() {
        let (mut tree, [root, row, left, right, footer]) = nested_tree();
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut driver = FrameDriver::new(SpyEngine {
            inner: BoxLayoutEngine::new(),
            log: Rc::clone(&log),
        });
        let mut renderer = SpyRenderer { log: Rc::clone(&log) };

        let report = driver.render_frame(&mut tree, &mut renderer).unwrap();

        assert_eq!(report.rendered, vec![root, row, left, right, footer]);
        assert_eq!(
            *log.borrow(),
            vec![
                Event::Layout(root),
                Event::Draw(root),
                Event::Layout(row),
                Event::Draw(row),
                Event::Layout(left),
                Event::Draw(left),
                Event::Layout(right),
                Event::Draw(right),
                Event::Layout(footer),
                Event::Draw(footer),
            ]
        );
        assert_eq!(driver.frames(), 1);
    }

    #[test]
    fn test_nested_containers_use_parent_resolved_size() {
        let (mut tree, [_, row, left, right, footer]) = nested_tree();
        let mut driver = FrameDriver::new(BoxLayoutEngine::new());
        let mut recorder = CommandRecorder::new();

        let report = driver.render_frame(&mut tree, &mut recorder).unwrap();
        assert!(report.is_clean());

        // The row takes the whole column; flex does not subtract the footer.
        assert_eq!(tree.node(row).unwrap().actual_size, Vec2::new(100.0, 100.0));
        assert_eq!(tree.node(left).unwrap().actual_size, Vec2::new(50.0, 100.0));
        assert_eq!(tree.node(footer).unwrap().position, Vec2::new(0.0, 100.0));

        let right_rect = recorder
            .commands()
            .iter()
            .find(|command| matches!(command, RenderCommand::DrawRect { node, .. } if *node == right));
        assert_eq!(
            right_rect,
            Some(&RenderCommand::DrawRect {
                node: right,
                position: Vec2::new(50.0, 0.0),
                size: Vec2::new(50.0, 100.0),
                depth: 2,
            })
        );
        assert_eq!(recorder.viewport(), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_layout_errors_do_not_stop_the_frame() {
        let (mut tree, [root, row, ..]) = nested_tree();
        tree.node_mut(row).unwrap().layout_type = LayoutType::Row;
        let mut driver = FrameDriver::new(BoxLayoutEngine::new());
        let mut recorder = CommandRecorder::new();

        let report = driver.render_frame(&mut tree, &mut recorder).unwrap();

        assert_eq!(report.rendered.len(), 5);
        assert_eq!(report.layout_errors.len(), 1);
        assert_eq!(report.layout_errors[0].node(), Some(row));
        assert!(!report.is_clean());
        assert_eq!(recorder.commands().len(), 5);
        assert_eq!(tree.root(), Some(root));
    }

    struct FlakyRenderer {
        inner: CommandRecorder,
        fail_on: Option<NodeId>,
    }

    impl Renderer for FlakyRenderer {
        fn begin_frame(&mut self, viewport: Vec2) -> RenderResult<()> {
            self.inner.begin_frame(viewport)
        }

        fn draw_node(&mut self, node: &Node, origin: Vec2, depth: usize) -> RenderResult<()> {
            if self.fail_on == Some(node.id()) {
                return Err(crate::RenderError::RenderFailed(format!("cannot paint {}", node.label())));
            }
            self.inner.draw_node(node, origin, depth)
        }

        fn end_frame(&mut self) -> RenderResult<()> {
            self.inner.end_frame()
        }
    }

    #[test]
    fn test_failed_draw_still_closes_the_frame() {
        let (mut tree, [_, row, ..]) = nested_tree();
        let mut driver = FrameDriver::new(BoxLayoutEngine::new());
        let mut renderer = FlakyRenderer {
            inner: CommandRecorder::new(),
            fail_on: Some(row),
        };

        let err = driver.render_frame(&mut tree, &mut renderer).unwrap_err();
        assert!(matches!(err, crate::RenderError::RenderFailed(_)));
        assert_eq!(renderer.inner.frames(), 1);
        assert_eq!(driver.frames(), 0);

        renderer.fail_on = None;
        let report = driver.render_frame(&mut tree, &mut renderer).unwrap();
        assert_eq!(report.rendered.len(), 5);
        assert_eq!(renderer.inner.frames(), 2);
    }

    #[test]
    fn test_empty_tree_has_no_root() {
        let mut tree = LayoutTree::new();
        let mut driver = FrameDriver::new(BoxLayoutEngine::new());
        let mut recorder = CommandRecorder::new();

        let err = driver.render_frame(&mut tree, &mut recorder).unwrap_err();
        assert!(matches!(err, crate::RenderError::Tree(TrellisError::MissingRoot)));
        assert_eq!(recorder.frames(), 0);
    }
}
