// crates/trellis-core/src/node.rs
use glam::Vec2;
use serde::{Deserialize, Serialize};

pub type NodeId = u32;

/// Strategy a container uses to size and place its direct children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutType {
    #[default]
    Stack,
    VerticalFlow,
    HorizontalFlow,
    /// Reserved. Containers using it are reported, not laid out.
    Row,
}

/// Where children sit inside the container's interior on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
}

impl Align {
    /// Fraction of the free space that goes before the aligned content.
    pub fn factor(self) -> f32 {
        match self {
            Align::Start => 0.0,
            Align::Center => 0.5,
            Align::End => 1.0,
        }
    }
}

/// Four padding edges plus a uniform fallback.
///
/// An edge that was set explicitly always wins over the uniform value, no
/// matter which one was applied last.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    uniform: f32,
    top: Option<f32>,
    right: Option<f32>,
    bottom: Option<f32>,
    left: Option<f32>,
}

impl Padding {
    pub fn uniform(value: f32) -> Self {
        Self {
            uniform: value,
            ..Self::default()
        }
    }

    pub fn set_uniform(&mut self, value: f32) {
        self.uniform = value;
    }

    pub fn set_top(&mut self, value: f32) {
        self.top = Some(value);
    }

    pub fn set_right(&mut self, value: f32) {
        self.right = Some(value);
    }

    pub fn set_bottom(&mut self, value: f32) {
        self.bottom = Some(value);
    }

    pub fn set_left(&mut self, value: f32) {
        self.left = Some(value);
    }

    pub fn top(&self) -> f32 {
        self.top.unwrap_or(self.uniform)
    }

    pub fn right(&self) -> f32 {
        self.right.unwrap_or(self.uniform)
    }

    pub fn bottom(&self) -> f32 {
        self.bottom.unwrap_or(self.uniform)
    }

    pub fn left(&self) -> f32 {
        self.left.unwrap_or(self.uniform)
    }

    /// Left plus right.
    pub fn horizontal(&self) -> f32 {
        self.left() + self.right()
    }

    /// Top plus bottom.
    pub fn vertical(&self) -> f32 {
        self.top() + self.bottom()
    }
}

/// Restrict `value` to `[min, max]`, where a `max` of zero means unbounded.
pub fn bounded(value: f32, min: f32, max: f32) -> f32 {
    let value = if max > 0.0 { value.min(max) } else { value };
    value.max(min)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub(crate) id: NodeId,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,

    /// Diagnostic label, also used to look nodes up in scene files.
    pub name: Option<String>,

    // Size intent. Zero means "not set" on every field.
    pub size: Vec2,
    pub min_size: Vec2,
    pub max_size: Vec2,
    pub pref_size: Vec2,
    pub flex: Vec2,

    // Resolved geometry, written by the parent's layout pass
    pub actual_size: Vec2,
    pub position: Vec2,

    pub padding: Padding,
    /// Space between consecutive children along a flow container's primary axis.
    pub gap: f32,
    pub layout_type: LayoutType,
    pub h_align: Align,
    pub v_align: Align,
    pub exclude_from_layout: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            id: 0,
            parent: None,
            children: Vec::new(),
            name: None,
            size: Vec2::ZERO,
            min_size: Vec2::ZERO,
            max_size: Vec2::ZERO,
            pref_size: Vec2::ZERO,
            flex: Vec2::ZERO,
            actual_size: Vec2::ZERO,
            position: Vec2::ZERO,
            padding: Padding::default(),
            gap: 0.0,
            layout_type: LayoutType::Stack,
            h_align: Align::Start,
            v_align: Align::Start,
            exclude_from_layout: false,
        }
    }
}

impl Node {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => format!("{}#{}", name, self.id),
            None => format!("#{}", self.id),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_layout(mut self, layout_type: LayoutType) -> Self {
        self.layout_type = layout_type;
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.size.x = width;
        self.seed_actual_size();
        self
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.size.y = height;
        self.seed_actual_size();
        self
    }

    pub fn with_size(self, width: f32, height: f32) -> Self {
        self.with_width(width).with_height(height)
    }

    pub fn with_min_width(mut self, value: f32) -> Self {
        self.min_size.x = value;
        self.seed_actual_size();
        self
    }

    pub fn with_min_height(mut self, value: f32) -> Self {
        self.min_size.y = value;
        self.seed_actual_size();
        self
    }

    pub fn with_max_width(mut self, value: f32) -> Self {
        self.max_size.x = value;
        self.seed_actual_size();
        self
    }

    pub fn with_max_height(mut self, value: f32) -> Self {
        self.max_size.y = value;
        self.seed_actual_size();
        self
    }

    pub fn with_pref_width(mut self, value: f32) -> Self {
        self.pref_size.x = value;
        self
    }

    pub fn with_pref_height(mut self, value: f32) -> Self {
        self.pref_size.y = value;
        self
    }

    pub fn with_flex_width(mut self, weight: f32) -> Self {
        self.flex.x = weight.max(0.0);
        self
    }

    pub fn with_flex_height(mut self, weight: f32) -> Self {
        self.flex.y = weight.max(0.0);
        self
    }

    pub fn with_flex(self, width: f32, height: f32) -> Self {
        self.with_flex_width(width).with_flex_height(height)
    }

    pub fn with_padding(mut self, value: f32) -> Self {
        self.padding.set_uniform(value);
        self
    }

    pub fn with_padding_top(mut self, value: f32) -> Self {
        self.padding.set_top(value);
        self
    }

    pub fn with_padding_right(mut self, value: f32) -> Self {
        self.padding.set_right(value);
        self
    }

    pub fn with_padding_bottom(mut self, value: f32) -> Self {
        self.padding.set_bottom(value);
        self
    }

    pub fn with_padding_left(mut self, value: f32) -> Self {
        self.padding.set_left(value);
        self
    }

    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_h_align(mut self, align: Align) -> Self {
        self.h_align = align;
        self
    }

    pub fn with_v_align(mut self, align: Align) -> Self {
        self.v_align = align;
        self
    }

    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.position = Vec2::new(x, y);
        self
    }

    pub fn excluded(mut self, exclude: bool) -> Self {
        self.exclude_from_layout = exclude;
        self
    }

    pub fn is_flexible(&self) -> bool {
        self.flex.x > 0.0 || self.flex.y > 0.0
    }

    /// Copy each declared dimension into the resolved size, within min/max.
    ///
    /// Undeclared dimensions keep their resolved value.
    fn seed_actual_size(&mut self) {
        if self.size.x > 0.0 {
            self.actual_size.x = bounded(self.size.x, self.min_size.x, self.max_size.x);
        }
        if self.size.y > 0.0 {
            self.actual_size.y = bounded(self.size.y, self.min_size.y, self.max_size.y);
        }
    }
}
