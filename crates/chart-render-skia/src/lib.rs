// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia CPU raster backend: implements chart-core's Surface on a canvas and encodes PNG.

pub mod text;

use anyhow::{anyhow, Result};
use chart_core::geometry::{Path, PathCommand, Point, RoundedRect};
use chart_core::surface::{FontSpec, Stroke, StrokeCap, StrokeJoin, Surface};
use chart_core::theme::Color;
use skia_safe as skia;

pub use text::TextShaper;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub background: Color,
    /// Skip text; keeps snapshots independent of installed fonts.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: chart_core::types::WIDTH as i32,
            height: chart_core::types::HEIGHT as i32,
            background: Color::rgb(0, 0, 0),
            draw_labels: true,
        }
    }
}

pub fn to_skia_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn arc_oval(center: Point, radius: f32) -> skia::Rect {
    skia::Rect::from_ltrb(center.x - radius, center.y - radius, center.x + radius, center.y + radius)
}

/// Convert a geometry path to a Skia path. Arcs continue from the current point.
pub fn to_skia_path(path: &Path) -> skia::Path {
    let mut p = skia::Path::new();
    for cmd in path.commands() {
        match *cmd {
            PathCommand::MoveTo(pt) => {
                p.move_to((pt.x, pt.y));
            }
            PathCommand::LineTo(pt) => {
                p.line_to((pt.x, pt.y));
            }
            PathCommand::CubicTo(c1, c2, end) => {
                p.cubic_to((c1.x, c1.y), (c2.x, c2.y), (end.x, end.y));
            }
            PathCommand::Arc { center, radius, start_angle, sweep } => {
                p.arc_to(arc_oval(center, radius), start_angle.to_degrees(), sweep.to_degrees(), false);
            }
            PathCommand::Close => {
                p.close();
            }
        }
    }
    p
}

/// Surface drawing into a borrowed Skia canvas.
pub struct SkiaSurface<'a> {
    canvas: &'a skia::Canvas,
    shaper: &'a TextShaper,
    draw_labels: bool,
}

impl<'a> SkiaSurface<'a> {
    pub fn new(canvas: &'a skia::Canvas, shaper: &'a TextShaper) -> Self {
        Self { canvas, shaper, draw_labels: true }
    }

    pub fn with_labels(mut self, draw_labels: bool) -> Self {
        self.draw_labels = draw_labels;
        self
    }

    fn fill_paint(color: Color, opacity: f32) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(to_skia_color(color));
        paint.set_alpha_f(color.alpha_f() * opacity.clamp(0.0, 1.0));
        paint
    }
}

impl Surface for SkiaSurface<'_> {
    fn fill_path(&mut self, path: &Path, color: Color, opacity: f32) {
        self.canvas.draw_path(&to_skia_path(path), &Self::fill_paint(color, opacity));
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(stroke.width);
        paint.set_color(to_skia_color(stroke.color));
        paint.set_stroke_join(match stroke.join {
            StrokeJoin::Miter => skia::paint::Join::Miter,
            StrokeJoin::Round => skia::paint::Join::Round,
            StrokeJoin::Bevel => skia::paint::Join::Bevel,
        });
        paint.set_stroke_cap(match stroke.cap {
            StrokeCap::Butt => skia::paint::Cap::Butt,
            StrokeCap::Round => skia::paint::Cap::Round,
            StrokeCap::Square => skia::paint::Cap::Square,
        });
        self.canvas.draw_path(&to_skia_path(path), &paint);
    }

    fn draw_text(&mut self, text: &str, origin: Point, color: Color, font: &FontSpec) {
        if !self.draw_labels {
            return;
        }
        self.shaper.draw_left(self.canvas, text, (origin.x, origin.y), font, to_skia_color(color));
    }

    fn draw_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.canvas.draw_circle((center.x, center.y), radius, &Self::fill_paint(color, 1.0));
    }

    fn draw_rounded_rect(&mut self, rect: &RoundedRect, color: Color) {
        let r = rect.rect;
        let rrect = skia::RRect::new_rect_xy(skia::Rect::from_ltrb(r.left, r.top, r.right, r.bottom), rect.radius, rect.radius);
        self.canvas.draw_rrect(rrect, &Self::fill_paint(color, 1.0));
    }
}

/// Raster a frame with `draw` and return PNG bytes.
pub fn render_png_bytes<F>(opts: &RenderOptions, shaper: &TextShaper, draw: F) -> Result<Vec<u8>>
where
    F: FnOnce(&mut SkiaSurface<'_>) -> Result<()>,
{
    // Create raster surface
    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| anyhow!("failed to create raster surface"))?;
    {
        let canvas = surface.canvas();
        canvas.clear(to_skia_color(opts.background));
        let mut target = SkiaSurface::new(canvas, shaper).with_labels(opts.draw_labels);
        draw(&mut target)?;
    }

    // Snapshot and encode PNG
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow!("encode PNG failed"))?;
    log::debug!("encoded {}x{} frame ({} bytes)", opts.width, opts.height, data.as_bytes().len());
    Ok(data.as_bytes().to_vec())
}

/// Raster a frame and write it to `output_png_path`, creating parent directories.
pub fn render_png<F>(
    opts: &RenderOptions,
    shaper: &TextShaper,
    output_png_path: impl AsRef<std::path::Path>,
    draw: F,
) -> Result<()>
where
    F: FnOnce(&mut SkiaSurface<'_>) -> Result<()>,
{
    let bytes = render_png_bytes(opts, shaper, draw)?;
    if let Some(parent) = output_png_path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_png_path, bytes)?;
    Ok(())
}
