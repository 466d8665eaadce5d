// File: crates/chart-core/src/bar.rs
// Summary: Bar geometry builder: rounded rectangles grown from the value baseline, ramp colors, value labels.

use crate::error::{ChartError, Result};
use crate::geometry::{clamp, format_value, Label, Point, Rect, RoundedRect, TextAlign};
use crate::scale::Scale;
use crate::series::{validate_points, DataPoint, XValue};
use crate::theme::{Color, ColorRamp};
use crate::types::Size;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Categories along x, bars grow up.
    #[default]
    Vertical,
    /// Categories along y, bars grow right.
    Horizontal,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarStyle {
    /// Fraction of each slot left empty, in [0, 1).
    pub spacing: f32,
    /// Explicit bar thickness; overrides the spacing rule.
    pub bar_width: Option<f32>,
    pub corner_radius: f32,
    pub orientation: Orientation,
    /// Ramp stops over [0, max value].
    pub colors: Vec<Color>,
    /// Gap between the bar end and its value label.
    pub label_offset: f32,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            spacing: 0.3,
            bar_width: None,
            corner_radius: 8.0,
            orientation: Orientation::Vertical,
            colors: vec![Color::BLACK, Color::WHITE],
            label_offset: 5.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub rect: RoundedRect,
    pub color: Color,
    pub value: f64,
    pub label: Label,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct BarGeometry {
    pub bars: Vec<Bar>,
    /// Value-axis baseline in plot pixels.
    pub baseline: f32,
    pub bar_width: f32,
}

fn clamped_baseline(value_scale: &Scale) -> f32 {
    let (r0, r1) = value_scale.range();
    clamp(value_scale.map(0.0), r0.min(r1), r0.max(r1))
}

/// Build bars for `data`. Vertical bars read categories from `x` and values from `y`;
/// horizontal bars swap the two. `progress` scales bar length, `label_progress` label opacity.
pub fn build_bars(
    data: &[DataPoint],
    x: &Scale,
    y: &Scale,
    plot: Size,
    style: &BarStyle,
    progress: f32,
    label_progress: f32,
) -> Result<BarGeometry> {
    if !(0.0..1.0).contains(&style.spacing) {
        return Err(ChartError::config(format!("bar spacing {} must be in [0, 1)", style.spacing)));
    }
    if let Some(w) = style.bar_width {
        if !w.is_finite() || w < 0.0 {
            return Err(ChartError::config(format!("bar width {w} must be a non-negative number")));
        }
    }
    validate_points(data)?;

    let (category, value) = match style.orientation {
        Orientation::Vertical => (x, y),
        Orientation::Horizontal => (y, x),
    };
    let baseline = clamped_baseline(value);
    if data.is_empty() {
        return Ok(BarGeometry { bars: Vec::new(), baseline, bar_width: 0.0 });
    }

    let extent = match style.orientation {
        Orientation::Vertical => plot.width,
        Orientation::Horizontal => plot.height,
    };
    let bar_width = style
        .bar_width
        .unwrap_or((extent / data.len() as f32) * (1.0 - style.spacing));
    let max_value = data.iter().map(|p| p.y).fold(0.0f64, f64::max);
    let ramp = ColorRamp::new(style.colors.clone(), (0.0, max_value))?;
    let label_opacity = label_progress.clamp(0.0, 1.0);

    let mut bars = Vec::with_capacity(data.len());
    for p in data {
        let center = category.center(&p.x)?;
        let end = value.position(&XValue::Number(p.y))?;
        let current = baseline + (end - baseline) * progress;
        let half = bar_width * 0.5;
        let text = p.label.clone().unwrap_or_else(|| format_value(p.y));

        let (rect, label) = match style.orientation {
            Orientation::Vertical => {
                let rect = Rect::from_ltrb(center - half, current.min(baseline), center + half, current.max(baseline));
                let anchor = Point::new(center, current.min(baseline) - style.label_offset);
                (rect, Label::new(text, anchor, TextAlign::Center))
            }
            Orientation::Horizontal => {
                let rect = Rect::from_ltrb(current.min(baseline), center - half, current.max(baseline), center + half);
                let anchor = Point::new(current.max(baseline) + style.label_offset, center + bar_width / 4.0);
                (rect, Label::new(text, anchor, TextAlign::Left))
            }
        };

        bars.push(Bar {
            rect: RoundedRect::new(rect, style.corner_radius),
            color: p.color.unwrap_or_else(|| ramp.color_at(p.y)),
            value: p.y,
            label: label.with_opacity(label_opacity),
        });
    }

    log::trace!("built {} bars (progress {progress:.3})", bars.len());
    Ok(BarGeometry { bars, baseline, bar_width })
}
