// crates/trellis-layout/src/axis.rs
//! Per-axis accessors so each layout algorithm is written once.
//!
//! `Horizontal` reads widths, `x` and left/right padding; `Vertical` reads
//! heights, `y` and top/bottom padding. Both are zero-sized and stateless.

use std::fmt;

use trellis_core::{Align, Node};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => write!(f, "horizontal"),
            Axis::Vertical => write!(f, "vertical"),
        }
    }
}

pub trait LayoutAxis {
    fn kind() -> Axis;

    /// Resolved size on this axis.
    fn actual_size(node: &Node) -> f32;
    fn set_actual_size(node: &mut Node, value: f32);

    /// Declared size on this axis; zero when unset.
    fn fixed(node: &Node) -> f32;
    fn flex(node: &Node) -> f32;
    fn min_size(node: &Node) -> f32;
    fn max_size(node: &Node) -> f32;
    fn preferred(node: &Node) -> f32;

    fn padding_first(node: &Node) -> f32;
    fn padding_last(node: &Node) -> f32;

    fn position(node: &Node) -> f32;
    fn set_position(node: &mut Node, value: f32);

    fn align(node: &Node) -> Align;

    fn is_flexible(node: &Node) -> bool {
        Self::flex(node) > 0.0
    }

    /// Baseline a container hands out to its children.
    ///
    /// The declared size when there is one, otherwise whatever the node was
    /// resolved to by its own parent.
    fn size(node: &Node) -> f32 {
        let fixed = Self::fixed(node);
        if fixed > 0.0 {
            fixed
        } else {
            Self::actual_size(node)
        }
    }

    /// Both padding edges on this axis.
    fn padding(node: &Node) -> f32 {
        Self::padding_first(node) + Self::padding_last(node)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Horizontal;

#[derive(Debug, Clone, Copy, Default)]
pub struct Vertical;

impl LayoutAxis for Horizontal {
    fn kind() -> Axis {
        Axis::Horizontal
    }

    fn actual_size(node: &Node) -> f32 {
        node.actual_size.x
    }

    fn set_actual_size(node: &mut Node, value: f32) {
        node.actual_size.x = value;
    }

    fn fixed(node: &Node) -> f32 {
        node.size.x
    }

    fn flex(node: &Node) -> f32 {
        node.flex.x
    }

    fn min_size(node: &Node) -> f32 {
        node.min_size.x
    }

    fn max_size(node: &Node) -> f32 {
        node.max_size.x
    }

    fn preferred(node: &Node) -> f32 {
        node.pref_size.x
    }

    fn padding_first(node: &Node) -> f32 {
        node.padding.left()
    }

    fn padding_last(node: &Node) -> f32 {
        node.padding.right()
    }

    fn position(node: &Node) -> f32 {
        node.position.x
    }

    fn set_position(node: &mut Node, value: f32) {
        node.position.x = value;
    }

    fn align(node: &Node) -> Align {
        node.h_align
    }
}

impl LayoutAxis for Vertical {
    fn kind() -> Axis {
        Axis::Vertical
    }

    fn actual_size(node: &Node) -> f32 {
        node.actual_size.y
    }

    fn set_actual_size(node: &mut Node, value: f32) {
        node.actual_size.y = value;
    }

    fn fixed(node: &Node) -> f32 {
        node.size.y
    }

    fn flex(node: &Node) -> f32 {
        node.flex.y
    }

    fn min_size(node: &Node) -> f32 {
        node.min_size.y
    }

    fn max_size(node: &Node) -> f32 {
        node.max_size.y
    }

    fn preferred(node: &Node) -> f32 {
        node.pref_size.y
    }

    fn padding_first(node: &Node) -> f32 {
        node.padding.top()
    }

    fn padding_last(node: &Node) -> f32 {
        node.padding.bottom()
    }

    fn position(node: &Node) -> f32 {
        node.position.y
    }

    fn set_position(node: &mut Node, value: f32) {
        node.position.y = value;
    }

    fn align(node: &Node) -> Align {
        node.v_align
    }
}
