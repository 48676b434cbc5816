// crates/trellis-layout/src/flow.rs
//! Flow layout: children are laid end to end along a primary axis, where
//! flexible children split the interior by weight. The cross axis behaves
//! exactly like a stack.

use tracing::trace;
use trellis_core::{LayoutTree, NodeId};

use crate::axis::{Horizontal, LayoutAxis, Vertical};
use crate::config::{LayoutConfig, Remainder};
use crate::constraints::{align_offset, resolve_size};
use crate::error::{LayoutError, Result};
use crate::filter::{flexible_children, layoutable_children};
use crate::stack;

/// Flow along width; height is stacked.
pub fn horizontal_flow_layout(
    tree: &mut LayoutTree,
    id: NodeId,
    config: &LayoutConfig,
) -> Result<()> {
    flow_layout::<Horizontal, Vertical>(tree, id, config)
}

/// Flow along height; width is stacked.
pub fn vertical_flow_layout(
    tree: &mut LayoutTree,
    id: NodeId,
    config: &LayoutConfig,
) -> Result<()> {
    flow_layout::<Vertical, Horizontal>(tree, id, config)
}

fn flow_layout<P: LayoutAxis, C: LayoutAxis>(
    tree: &mut LayoutTree,
    id: NodeId,
    config: &LayoutConfig,
) -> Result<()> {
    if tree.node(id)?.children().is_empty() {
        return Ok(());
    }

    stack::check_space::<P>(tree, id, config)?;
    stack::check_space::<C>(tree, id, config)?;

    // A degenerate flex split leaves primary sizes alone but positions are
    // still computed, so report it after the pass.
    let scaled = scale_children::<P>(tree, id, config);
    stack::scale_children::<C>(tree, id, config)?;

    position_children::<P>(tree, id)?;
    stack::position_children::<C>(tree, id)?;
    scaled
}

/// Split the container's interior on `P` between its flexible children in
/// proportion to their weights, flooring each share to whole pixels.
///
/// Static children are not subtracted from the interior first.
fn scale_children<P: LayoutAxis>(
    tree: &mut LayoutTree,
    id: NodeId,
    config: &LayoutConfig,
) -> Result<()> {
    let flexible = flexible_children::<P>(tree, id);
    if flexible.is_empty() {
        return Ok(());
    }

    let available = stack::interior::<P>(tree.node(id)?);
    let weights = flexible
        .iter()
        .map(|child| tree.node(*child).map(P::flex))
        .collect::<std::result::Result<Vec<f32>, _>>()?;
    let flex_sum: f32 = weights.iter().sum();
    if !flex_sum.is_finite() || flex_sum <= 0.0 {
        return Err(LayoutError::DegenerateFlex {
            node: id,
            axis: P::kind(),
            flex_sum,
        });
    }

    // Multiply before dividing so a weight equal to the sum yields `available`.
    let mut sizes: Vec<f32> = weights
        .iter()
        .map(|weight| (weight * available / flex_sum).floor())
        .collect();
    if config.remainder == Remainder::Spread {
        spread_remainder(&mut sizes, available);
    }

    for (child, size) in flexible.into_iter().zip(sizes) {
        let node = tree.node_mut(child)?;
        let value = resolve_size::<P>(config, node, size);
        trace!("{} {} size -> {}", node.label(), P::kind(), value);
        P::set_actual_size(node, value);
    }
    Ok(())
}

/// Hand the whole pixels lost to flooring back out, one per child, starting
/// with the last child and walking backward. If the walk reaches the first
/// child it takes everything that is left.
fn spread_remainder(sizes: &mut [f32], available: f32) {
    let Some(mut index) = sizes.len().checked_sub(1) else {
        return;
    };
    let assigned: f32 = sizes.iter().sum();
    let mut difference = (available.floor() - assigned).max(0.0);

    while difference >= 1.0 {
        if index == 0 {
            sizes[0] += difference;
            break;
        }
        sizes[index] += 1.0;
        difference -= 1.0;
        index -= 1;
    }
}

/// Place layoutable children end to end on `P`, separated by the container's
/// gap. The run as a whole is shifted by the container's alignment.
fn position_children<P: LayoutAxis>(tree: &mut LayoutTree, id: NodeId) -> Result<()> {
    let container = tree.node(id)?;
    let leading = P::padding_first(container);
    let available = stack::interior::<P>(container);
    let align = P::align(container);
    let gap = container.gap;

    let children = layoutable_children(tree, id);
    let gaps = gap * children.len().saturating_sub(1) as f32;
    let run: f32 = children
        .iter()
        .filter_map(|child| tree.get(*child))
        .map(P::actual_size)
        .sum::<f32>()
        + gaps;

    let mut position = leading + align_offset(align, available, run);
    for child in children {
        let node = tree.node_mut(child)?;
        trace!("{} {} position -> {}", node.label(), P::kind(), position);
        P::set_position(node, position);
        position += P::actual_size(node) + gap;
    }
    Ok(())
}
