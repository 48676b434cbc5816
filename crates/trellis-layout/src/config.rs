// crates/trellis-layout/src/config.rs

/// What happens to the pixels flooring throws away in a flow's flex split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Remainder {
    /// Keep the floored sizes; up to `n - 1` pixels stay unassigned.
    #[default]
    Floor,
    /// Hand the lost pixels out one at a time from the last flexible child
    /// backward. The first child absorbs anything still left over.
    Spread,
}

/// How a stack container with neither a fixed nor a flexible size on an axis
/// measures its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentSize {
    /// Always zero.
    Zero,
    /// Largest preferred (or resolved) size among children that are not
    /// flexible on the axis, plus the container's padding on that axis.
    #[default]
    Extent,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub remainder: Remainder,
    pub content_size: ContentSize,
    /// Clamp every size the algorithms write to the node's min/max.
    pub clamp_to_bounds: bool,
    /// Reject containers whose padding exceeds their size instead of
    /// clamping the interior to zero.
    pub strict: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            remainder: Remainder::Floor,
            content_size: ContentSize::Extent,
            clamp_to_bounds: true,
            strict: false,
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_remainder(mut self, remainder: Remainder) -> Self {
        self.remainder = remainder;
        self
    }

    pub fn with_content_size(mut self, content_size: ContentSize) -> Self {
        self.content_size = content_size;
        self
    }

    pub fn with_clamp_to_bounds(mut self, clamp: bool) -> Self {
        self.clamp_to_bounds = clamp;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
