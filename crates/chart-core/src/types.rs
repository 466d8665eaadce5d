// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings, plot layout).

/// Default outer chart width in pixels.
pub const WIDTH: f32 = 360.0;
/// Default outer chart height in pixels.
pub const HEIGHT: f32 = 240.0;

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(40, 20, 20, 40)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Outer chart size plus padding; everything inside the padding is the plot area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
    pub padding: Insets,
}

impl Default for Layout {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, padding: Insets::default() }
    }
}

impl Layout {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height, padding: Insets::default() }
    }

    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Plot area size; never negative.
    pub fn inner(&self) -> Size {
        Size::new(
            (self.width - self.padding.hsum() as f32).max(0.0),
            (self.height - self.padding.vsum() as f32).max(0.0),
        )
    }

    /// Pixel range used by the x scale, in plot-area coordinates.
    pub fn x_range(&self) -> (f32, f32) {
        let w = self.inner().width;
        (20.0, (w - 20.0).max(20.0))
    }

    /// Pixel range used by the y scale, in plot-area coordinates (inverted: y grows down).
    pub fn y_range(&self) -> (f32, f32) {
        (self.inner().height, 10.0)
    }
}
