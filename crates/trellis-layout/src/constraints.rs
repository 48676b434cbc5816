// crates/trellis-layout/src/constraints.rs

use trellis_core::{bounded, Align, Node};

use crate::axis::LayoutAxis;
use crate::config::LayoutConfig;

/// Min/max limits of one node on one axis. A `max` of zero is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisBounds {
    pub min: f32,
    pub max: f32,
}

impl AxisBounds {
    pub fn of<A: LayoutAxis>(node: &Node) -> Self {
        Self {
            min: A::min_size(node),
            max: A::max_size(node),
        }
    }

    pub fn is_bounded(&self) -> bool {
        self.max > 0.0
    }

    pub fn constrain(&self, value: f32) -> f32 {
        bounded(value, self.min, self.max)
    }
}

/// Final size written to `node` on axis `A`: bounded when the config asks for
/// it and never negative.
pub fn resolve_size<A: LayoutAxis>(config: &LayoutConfig, node: &Node, value: f32) -> f32 {
    let value = if config.clamp_to_bounds {
        AxisBounds::of::<A>(node).constrain(value)
    } else {
        value
    };
    value.max(0.0)
}

/// Offset that places content of `used` pixels inside `available` pixels.
///
/// Overflowing content is never pushed before the leading edge.
pub fn align_offset(align: Align, available: f32, used: f32) -> f32 {
    ((available - used) * align.factor()).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::{Horizontal, Vertical};

    #[test]
    fn test_bounds_from_node() {
        let node = Node::new().with_min_width(10.0).with_max_height(40.0);
        let horizontal = AxisBounds::of::<Horizontal>(&node);
        let vertical = AxisBounds::of::<Vertical>(&node);

        assert_eq!(horizontal, AxisBounds { min: 10.0, max: 0.0 });
        assert!(!horizontal.is_bounded());
        assert!(vertical.is_bounded());
        assert_eq!(horizontal.constrain(1000.0), 1000.0);
        assert_eq!(vertical.constrain(1000.0), 40.0);
    }

    #[test]
    fn test_resolve_size_respects_config() {
        let node = Node::new().with_max_width(50.0);
        let clamping = LayoutConfig::default();
        let raw = LayoutConfig::default().with_clamp_to_bounds(false);

        assert_eq!(resolve_size::<Horizontal>(&clamping, &node, 80.0), 50.0);
        assert_eq!(resolve_size::<Horizontal>(&raw, &node, 80.0), 80.0);
        assert_eq!(resolve_size::<Horizontal>(&raw, &node, -5.0), 0.0);
    }

    #[test]
    fn test_align_offset() {
        assert_eq!(align_offset(Align::Start, 100.0, 40.0), 0.0);
        assert_eq!(align_offset(Align::Center, 100.0, 40.0), 30.0);
        assert_eq!(align_offset(Align::End, 100.0, 40.0), 60.0);
        assert_eq!(align_offset(Align::End, 100.0, 140.0), 0.0);
    }
}
