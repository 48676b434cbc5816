// crates/trellis-layout/src/stack.rs
//! Stack layout: children overlap. A child that is flexible on an axis gets
//! the container's whole interior on that axis, and every child starts at the
//! leading padding edge.

use tracing::{debug, trace, warn};
use trellis_core::{LayoutTree, Node, NodeId};

use crate::axis::{Horizontal, LayoutAxis, Vertical};
use crate::config::{ContentSize, LayoutConfig};
use crate::constraints::{align_offset, resolve_size};
use crate::error::{LayoutError, Result};
use crate::filter::{flexible_children, layoutable_children};

pub fn stack_layout(tree: &mut LayoutTree, id: NodeId, config: &LayoutConfig) -> Result<()> {
    if tree.node(id)?.children().is_empty() {
        return Ok(());
    }

    resolve_content_size::<Horizontal>(tree, id, config)?;
    resolve_content_size::<Vertical>(tree, id, config)?;

    check_space::<Horizontal>(tree, id, config)?;
    check_space::<Vertical>(tree, id, config)?;

    scale_children::<Horizontal>(tree, id, config)?;
    scale_children::<Vertical>(tree, id, config)?;

    position_children::<Horizontal>(tree, id)?;
    position_children::<Vertical>(tree, id)?;
    Ok(())
}

/// Interior size of a container on axis `A`, never below zero.
pub(crate) fn interior<A: LayoutAxis>(node: &Node) -> f32 {
    (A::size(node) - A::padding(node)).max(0.0)
}

/// Report a container whose padding is larger than its size.
///
/// Strict configs turn this into an error; otherwise the interior is treated
/// as zero and the pass carries on.
pub(crate) fn check_space<A: LayoutAxis>(
    tree: &LayoutTree,
    id: NodeId,
    config: &LayoutConfig,
) -> Result<()> {
    let node = tree.node(id)?;
    let available = A::size(node) - A::padding(node);
    if available >= 0.0 {
        return Ok(());
    }

    if config.strict {
        return Err(LayoutError::NegativeSpace {
            node: id,
            axis: A::kind(),
            available,
        });
    }
    warn!(
        "Container {} has {} px of {} space, clamping to 0",
        node.label(),
        available,
        A::kind()
    );
    Ok(())
}

/// Give every child that is flexible on `A` the container's full interior.
pub(crate) fn scale_children<A: LayoutAxis>(
    tree: &mut LayoutTree,
    id: NodeId,
    config: &LayoutConfig,
) -> Result<()> {
    let flexible = flexible_children::<A>(tree, id);
    if flexible.is_empty() {
        return Ok(());
    }

    let available = interior::<A>(tree.node(id)?);
    for child in flexible {
        let node = tree.node_mut(child)?;
        let value = resolve_size::<A>(config, node, available);
        trace!("{} {} size -> {}", node.label(), A::kind(), value);
        A::set_actual_size(node, value);
    }
    Ok(())
}

/// Put every layoutable child at the leading padding edge, shifted by the
/// container's alignment on `A`.
pub(crate) fn position_children<A: LayoutAxis>(tree: &mut LayoutTree, id: NodeId) -> Result<()> {
    let container = tree.node(id)?;
    let leading = A::padding_first(container);
    let available = interior::<A>(container);
    let align = A::align(container);

    for child in layoutable_children(tree, id) {
        let node = tree.node_mut(child)?;
        let position = leading + align_offset(align, available, A::actual_size(node));
        trace!("{} {} position -> {}", node.label(), A::kind(), position);
        A::set_position(node, position);
    }
    Ok(())
}

/// Size a container that declares neither a fixed nor a flexible size on `A`
/// from its children, per the configured `ContentSize` policy.
fn resolve_content_size<A: LayoutAxis>(
    tree: &mut LayoutTree,
    id: NodeId,
    config: &LayoutConfig,
) -> Result<()> {
    let node = tree.node(id)?;
    if A::fixed(node) > 0.0 || A::is_flexible(node) {
        return Ok(());
    }

    let content = content_size::<A>(tree, id, config.content_size);
    let node = tree.node_mut(id)?;
    let value = resolve_size::<A>(config, node, content);
    debug!("{} sized to content on {} axis: {}", node.label(), A::kind(), value);
    A::set_actual_size(node, value);
    Ok(())
}

pub fn content_size<A: LayoutAxis>(tree: &LayoutTree, id: NodeId, policy: ContentSize) -> f32 {
    match policy {
        ContentSize::Zero => 0.0,
        ContentSize::Extent => {
            let extent = layoutable_children(tree, id)
                .into_iter()
                .filter_map(|child| tree.get(child))
                .filter(|child| !A::is_flexible(child))
                .map(|child| {
                    let preferred = A::preferred(child);
                    if preferred > 0.0 {
                        preferred
                    } else {
                        A::actual_size(child)
                    }
                })
                .reduce(f32::max);

            match extent {
                Some(extent) => extent + tree.get(id).map_or(0.0, A::padding),
                None => 0.0,
            }
        }
    }
}
