// File: crates/chart-core/src/pie.rs
// Summary: Pie geometry builder: proportional wedges, progress-driven sweep, centroid labels.

use std::f32::consts::TAU;

use crate::error::{ChartError, Result};
use crate::geometry::{format_value, Label, Path, Point, TextAlign};
use crate::series::PieDatum;
use crate::theme::Color;

/// Labels sit at this fraction of the radius along the wedge's mid angle.
pub const LABEL_RADIUS_FACTOR: f32 = 0.67;

#[derive(Clone, Debug, PartialEq)]
pub struct PieStyle {
    /// Side of the square the pie is drawn in; radius is half of it.
    pub size: f32,
    /// Angle of the first wedge's leading edge, radians (0 = 3 o'clock, clockwise).
    pub start_angle: f32,
}

impl Default for PieStyle {
    fn default() -> Self {
        Self { size: 200.0, start_angle: 0.0 }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Wedge {
    pub start_angle: f32,
    pub end_angle: f32,
    pub value: f64,
    pub color: Color,
    /// Datum name; the drawn label shows the value.
    pub name: String,
    pub label: Label,
}

impl Wedge {
    pub fn sweep(&self) -> f32 {
        self.end_angle - self.start_angle
    }

    /// Displayed end angle while the wedge grows in.
    pub fn current_end(&self, progress: f32) -> f32 {
        self.start_angle + self.sweep() * progress
    }

    /// Center -> arc -> close. Empty when nothing of the wedge is visible yet.
    pub fn path(&self, center: Point, radius: f32, progress: f32) -> Path {
        let mut path = Path::new();
        let sweep = self.current_end(progress) - self.start_angle;
        if sweep <= 0.0 {
            return path;
        }
        path.move_to(center)
            .line_to(center.polar(radius, self.start_angle))
            .arc(center, radius, self.start_angle, sweep)
            .close();
        path
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct PieGeometry {
    pub center: Point,
    pub radius: f32,
    pub wedges: Vec<Wedge>,
}

impl PieGeometry {
    /// Wedge paths at `progress`, in data order.
    pub fn paths(&self, progress: f32) -> Vec<Path> {
        self.wedges.iter().map(|w| w.path(self.center, self.radius, progress)).collect()
    }
}

pub fn build_pie(data: &[PieDatum], style: &PieStyle) -> Result<PieGeometry> {
    if !style.size.is_finite() || style.size < 0.0 {
        return Err(ChartError::config(format!("pie size {} must be a non-negative number", style.size)));
    }
    for (i, d) in data.iter().enumerate() {
        if !d.value.is_finite() || d.value < 0.0 {
            return Err(ChartError::data_shape(format!("pie value {i} must be finite and non-negative, got {}", d.value)));
        }
    }

    let radius = style.size / 2.0;
    let center = Point::new(radius, radius);
    let total: f64 = data.iter().map(|d| d.value).sum();
    if total == 0.0 && !data.is_empty() {
        log::debug!("pie total is zero; all wedges have zero sweep");
    }

    let mut wedges = Vec::with_capacity(data.len());
    let mut cumulative = 0.0f64;
    for d in data {
        let start_share = if total > 0.0 { cumulative / total } else { 0.0 };
        cumulative += d.value;
        let end_share = if total > 0.0 { cumulative / total } else { 0.0 };
        let start_angle = style.start_angle + start_share as f32 * TAU;
        let end_angle = style.start_angle + end_share as f32 * TAU;
        let mid = (start_angle + end_angle) * 0.5;
        wedges.push(Wedge {
            start_angle,
            end_angle,
            value: d.value,
            color: d.color,
            name: d.label.clone(),
            label: Label::new(format_value(d.value), center.polar(radius * LABEL_RADIUS_FACTOR, mid), TextAlign::Center),
        });
    }
    Ok(PieGeometry { center, radius, wedges })
}
