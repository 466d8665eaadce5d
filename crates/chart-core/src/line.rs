// File: crates/chart-core/src/line.rs
// Summary: Line and area geometry builders.

use crate::curve::Curve;
use crate::error::Result;
use crate::geometry::{Path, Point};
use crate::scale::Scale;
use crate::series::{validate_points, DataPoint, XValue};
use crate::theme::Color;

pub const DEFAULT_SERIES_COLOR: Color = Color::rgb(0x21, 0x96, 0xf3);

#[derive(Clone, Debug, PartialEq)]
pub struct LineStyle {
    pub color: Color,
    pub stroke_width: f32,
    pub curve: Curve,
    pub show_dots: bool,
    pub dot_radius: f32,
    /// Dot fill; falls back to the line color.
    pub dot_color: Option<Color>,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: DEFAULT_SERIES_COLOR,
            stroke_width: 2.0,
            curve: Curve::MonotoneX,
            show_dots: false,
            dot_radius: 4.0,
            dot_color: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AreaStyle {
    pub color: Color,
    pub opacity: f32,
    pub curve: Curve,
    /// Baseline in plot pixels; `None` means the bottom of the y range.
    pub baseline: Option<f32>,
}

impl Default for AreaStyle {
    fn default() -> Self {
        Self { color: DEFAULT_SERIES_COLOR, opacity: 0.2, curve: Curve::MonotoneX, baseline: None }
    }
}

/// Stroked series: the traced path plus the scaled vertices it passes through.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct LineGeometry {
    pub path: Path,
    pub points: Vec<Point>,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct AreaGeometry {
    pub path: Path,
    pub points: Vec<Point>,
    pub baseline: f32,
}

/// Scaled vertices; band x scales place points at slot centers.
pub fn scale_points(data: &[DataPoint], x: &Scale, y: &Scale) -> Result<Vec<Point>> {
    validate_points(data)?;
    data.iter()
        .map(|p| Ok(Point::new(x.center(&p.x)?, y.position(&XValue::Number(p.y))?)))
        .collect()
}

pub fn build_line(data: &[DataPoint], x: &Scale, y: &Scale, style: &LineStyle) -> Result<LineGeometry> {
    let points = scale_points(data, x, y)?;
    let mut path = Path::new();
    style.curve.trace(&points, &mut path, false);
    Ok(LineGeometry { path, points })
}

pub fn build_area(data: &[DataPoint], x: &Scale, y: &Scale, style: &AreaStyle) -> Result<AreaGeometry> {
    let points = scale_points(data, x, y)?;
    let (r0, r1) = y.range();
    let baseline = style.baseline.unwrap_or(r0.max(r1));
    let mut path = Path::new();
    if let (Some(first), Some(last)) = (points.first(), points.last()) {
        style.curve.trace(&points, &mut path, false);
        path.line_to(Point::new(last.x, baseline));
        path.line_to(Point::new(first.x, baseline));
        path.close();
    }
    Ok(AreaGeometry { path, points, baseline })
}
