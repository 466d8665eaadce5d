// File: crates/chart-core/src/surface.rs
// Summary: Drawing-surface and text-measurement interfaces, plus a recording surface for headless use.

use crate::geometry::{Path, Point, RoundedRect};
use crate::theme::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StrokeJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StrokeCap {
    #[default]
    Butt,
    Round,
    Square,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
    pub join: StrokeJoin,
    pub cap: StrokeCap,
}

impl Stroke {
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width, join: StrokeJoin::Miter, cap: StrokeCap::Butt }
    }

    pub fn rounded(mut self) -> Self {
        self.join = StrokeJoin::Round;
        self.cap = StrokeCap::Round;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FontSpec {
    pub size: f32,
    pub bold: bool,
    pub italic: bool,
    /// Prefer tabular/monospaced digits.
    pub mono_numeric: bool,
}

impl FontSpec {
    pub fn new(size: f32) -> Self {
        Self { size, bold: false, italic: false, mono_numeric: false }
    }

    pub fn numeric(size: f32) -> Self {
        Self { mono_numeric: true, ..Self::new(size) }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new(12.0)
    }
}

/// Immediate-mode 2D canvas the painters draw into.
pub trait Surface {
    fn fill_path(&mut self, path: &Path, color: Color, opacity: f32);
    fn stroke_path(&mut self, path: &Path, stroke: &Stroke);
    /// `origin` is the left end of the text baseline.
    fn draw_text(&mut self, text: &str, origin: Point, color: Color, font: &FontSpec);
    fn draw_circle(&mut self, center: Point, radius: f32, color: Color);
    fn draw_rounded_rect(&mut self, rect: &RoundedRect, color: Color);
}

/// Text extent provider: returns (width, height) in pixels.
pub trait TextMeasure {
    fn measure(&self, text: &str, font: &FontSpec) -> (f32, f32);
}

/// Fixed-advance estimate (half the font size per character).
#[derive(Clone, Copy, Debug, Default)]
pub struct ApproxMeasure;

impl TextMeasure for ApproxMeasure {
    fn measure(&self, text: &str, font: &FontSpec) -> (f32, f32) {
        (text.chars().count() as f32 * font.size / 2.0, font.size)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    FillPath { path: Path, color: Color, opacity: f32 },
    StrokePath { path: Path, stroke: Stroke },
    Text { text: String, origin: Point, color: Color, size: f32 },
    Circle { center: Point, radius: f32, color: Color },
    RoundedRect { rect: RoundedRect, color: Color },
}

/// Surface that keeps every command; used by tests and for inspecting output.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }
}

impl Surface for RecordingSurface {
    fn fill_path(&mut self, path: &Path, color: Color, opacity: f32) {
        self.commands.push(DrawCommand::FillPath { path: path.clone(), color, opacity });
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke) {
        self.commands.push(DrawCommand::StrokePath { path: path.clone(), stroke: *stroke });
    }

    fn draw_text(&mut self, text: &str, origin: Point, color: Color, font: &FontSpec) {
        self.commands.push(DrawCommand::Text { text: text.to_string(), origin, color, size: font.size });
    }

    fn draw_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle { center, radius, color });
    }

    fn draw_rounded_rect(&mut self, rect: &RoundedRect, color: Color) {
        self.commands.push(DrawCommand::RoundedRect { rect: *rect, color });
    }
}
