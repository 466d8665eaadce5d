// File: crates/chart-core/src/gauge.rs
// Summary: Gauge (speed meter) geometry: track arc, threshold-colored ticks, needle, hub, readout.

use std::f32::consts::PI;

use crate::error::{ChartError, Result};
use crate::geometry::{Label, Path, Point, TextAlign};
use crate::theme::Color;

/// Tick color applies to ticks whose position (0..1 along the arc) is below `upto`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThresholdBand {
    pub upto: f32,
    pub color: Color,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GaugeStyle {
    pub width: f32,
    pub height: f32,
    pub max_value: f64,
    pub start_angle: f32,
    pub end_angle: f32,
    /// Number of subdivisions; there are `tick_count + 1` ticks.
    pub tick_count: usize,
    pub major_tick_length: f32,
    pub major_tick_width: f32,
    pub minor_tick_length: f32,
    pub minor_tick_width: f32,
    /// Ascending bands; positions past the last band use `overflow_color`.
    pub bands: Vec<ThresholdBand>,
    pub overflow_color: Color,
    pub track_color: Color,
    pub track_width: f32,
    pub needle_color: Color,
    pub needle_width: f32,
    pub needle_tail: f32,
    pub hub_radius: f32,
    pub hub_inner_radius: f32,
    pub hub_inner_color: Color,
    pub unit: String,
}

impl Default for GaugeStyle {
    fn default() -> Self {
        Self {
            width: 300.0,
            height: 300.0,
            max_value: 180.0,
            start_angle: PI * 0.8,
            end_angle: PI * 2.2,
            tick_count: 18,
            major_tick_length: 15.0,
            major_tick_width: 3.0,
            minor_tick_length: 7.0,
            minor_tick_width: 1.5,
            bands: vec![
                ThresholdBand { upto: 0.6, color: Color::rgb(0x4c, 0xaf, 0x50) },
                ThresholdBand { upto: 0.8, color: Color::rgb(0xff, 0xc1, 0x07) },
            ],
            overflow_color: Color::rgb(0xf4, 0x43, 0x36),
            track_color: Color::rgb(0x33, 0x33, 0x33),
            track_width: 10.0,
            needle_color: Color::rgb(0xff, 0x52, 0x52),
            needle_width: 4.0,
            needle_tail: 20.0,
            hub_radius: 15.0,
            hub_inner_radius: 10.0,
            hub_inner_color: Color::rgb(0x33, 0x33, 0x33),
            unit: "km/h".to_string(),
        }
    }
}

impl GaugeStyle {
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn radius(&self) -> f32 {
        (self.width.min(self.height) / 2.0 - 20.0).max(0.0)
    }

    pub fn sweep(&self) -> f32 {
        self.end_angle - self.start_angle
    }

    fn validate(&self) -> Result<()> {
        if !self.max_value.is_finite() || self.max_value <= 0.0 {
            return Err(ChartError::config(format!("gauge max value {} must be positive", self.max_value)));
        }
        if !self.start_angle.is_finite() || !self.end_angle.is_finite() || self.end_angle <= self.start_angle {
            return Err(ChartError::config(format!(
                "gauge arc [{}, {}] must have end after start",
                self.start_angle, self.end_angle
            )));
        }
        if self.tick_count == 0 {
            return Err(ChartError::config("gauge tick count must be at least 1"));
        }
        let mut prev = 0.0f32;
        for b in &self.bands {
            if !(0.0..=1.0).contains(&b.upto) || b.upto < prev {
                return Err(ChartError::config(format!("gauge band limit {} must be ascending within [0, 1]", b.upto)));
            }
            prev = b.upto;
        }
        Ok(())
    }

    /// Color for a tick at `position` along the arc.
    pub fn tick_color(&self, position: f32) -> Color {
        self.bands.iter().find(|b| position < b.upto).map_or(self.overflow_color, |b| b.color)
    }
}

/// Angle of the needle for `value`, clamped to `[0, max_value]`.
pub fn needle_angle(value: f64, style: &GaugeStyle) -> f32 {
    let pct = if style.max_value > 0.0 { (value / style.max_value).clamp(0.0, 1.0) } else { 0.0 };
    style.start_angle + pct as f32 * style.sweep()
}

#[derive(Clone, Debug, PartialEq)]
pub struct GaugeTick {
    pub path: Path,
    pub color: Color,
    pub width: f32,
    pub major: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GaugeGeometry {
    pub center: Point,
    pub radius: f32,
    pub track: Path,
    pub ticks: Vec<GaugeTick>,
    pub tick_labels: Vec<Label>,
    pub needle: Path,
    pub needle_angle: f32,
    pub readout: Label,
    pub unit: Label,
}

pub fn build_gauge(current_value: f64, style: &GaugeStyle) -> Result<GaugeGeometry> {
    style.validate()?;
    let center = style.center();
    let radius = style.radius();
    let sweep = style.sweep();

    let mut track = Path::new();
    track.move_to(center.polar(radius, style.start_angle)).arc(center, radius, style.start_angle, sweep);

    let mut ticks = Vec::with_capacity(style.tick_count + 1);
    let mut tick_labels = Vec::new();
    for i in 0..=style.tick_count {
        let pos = i as f32 / style.tick_count as f32;
        let angle = style.start_angle + pos * sweep;
        let major = i % 2 == 0;
        let length = if major { style.major_tick_length } else { style.minor_tick_length };
        let mut path = Path::new();
        path.move_to(center.polar(radius - length, angle)).line_to(center.polar(radius, angle));
        ticks.push(GaugeTick {
            path,
            color: style.tick_color(pos),
            width: if major { style.major_tick_width } else { style.minor_tick_width },
            major,
        });
        if major {
            let value = (pos as f64 * style.max_value).round();
            tick_labels.push(
                Label::new(format!("{value}"), center.polar(radius - 30.0, angle), TextAlign::Center).with_opacity(0.7),
            );
        }
    }

    let angle = needle_angle(current_value, style);
    let mut needle = Path::new();
    needle
        .move_to(center.polar(-style.needle_tail, angle))
        .line_to(center.polar(radius - 20.0, angle));

    let shown = current_value.clamp(0.0, style.max_value).round();
    Ok(GaugeGeometry {
        center,
        radius,
        track,
        ticks,
        tick_labels,
        needle,
        needle_angle: angle,
        readout: Label::new(format!("{shown}"), center.offset(0.0, radius / 2.0), TextAlign::Center),
        unit: Label::new(style.unit.clone(), center.offset(0.0, radius / 2.0 + 30.0), TextAlign::Center),
    })
}
