// File: crates/chart-core/src/radar.rs
// Summary: Radar geometry builder: grid rings, spokes, per-data-set polygons, axis and value labels.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use crate::error::{ChartError, Result};
use crate::geometry::{Label, Path, Point, TextAlign};
use crate::series::RadarDataSet;
use crate::theme::Color;

#[derive(Clone, Debug, PartialEq)]
pub struct RadarStyle {
    pub width: f32,
    pub height: f32,
    pub max_value: f64,
    pub grid_count: usize,
    pub label_padding: f32,
    pub label_font_size: f32,
    pub value_font_size: f32,
    pub fill_color: Color,
    pub fill_opacity: f32,
    pub stroke_width: f32,
    pub show_grid: bool,
    pub show_axes: bool,
    pub show_labels: bool,
    pub show_values: bool,
    pub grid_color: Color,
    pub grid_width: f32,
    pub axis_color: Color,
    pub axis_width: f32,
    pub label_color: Color,
    pub value_color: Color,
}

impl Default for RadarStyle {
    fn default() -> Self {
        Self {
            width: 300.0,
            height: 300.0,
            max_value: 100.0,
            grid_count: 5,
            label_padding: 25.0,
            label_font_size: 14.0,
            value_font_size: 10.0,
            fill_color: Color::rgb(0x21, 0x96, 0xf3),
            fill_opacity: 0.2,
            stroke_width: 2.0,
            show_grid: true,
            show_axes: true,
            show_labels: true,
            show_values: true,
            grid_color: Color::rgb(0xee, 0xee, 0xee),
            grid_width: 1.0,
            axis_color: Color::rgb(0xcc, 0xcc, 0xcc),
            axis_width: 1.0,
            label_color: Color::BLACK,
            value_color: Color::WHITE,
        }
    }
}

impl RadarStyle {
    /// Outer grid radius: half the shorter side minus room for the axis labels.
    pub fn radius(&self) -> f32 {
        (self.width.min(self.height) / 2.0 - (30.0 + self.label_padding)).max(0.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RadarPolygon {
    pub path: Path,
    pub vertices: Vec<Point>,
    pub fill: Color,
    pub opacity: f32,
    /// Outline color and width; only drawn when the data set asks for one.
    pub stroke: Option<(Color, f32)>,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct RadarGeometry {
    pub center: Point,
    pub radius: f32,
    pub grid: Vec<Path>,
    pub spokes: Vec<Path>,
    pub polygons: Vec<RadarPolygon>,
    pub axis_labels: Vec<Label>,
    pub value_labels: Vec<Label>,
}

fn axis_angle(i: usize, step: f32) -> f32 {
    i as f32 * step - FRAC_PI_2
}

fn closed_ring(center: Point, radii: impl Iterator<Item = f32>, step: f32) -> (Path, Vec<Point>) {
    let vertices: Vec<Point> = radii.enumerate().map(|(i, r)| center.polar(r, axis_angle(i, step))).collect();
    let mut path = Path::new();
    for (i, &v) in vertices.iter().enumerate() {
        if i == 0 {
            path.move_to(v);
        } else {
            path.line_to(v);
        }
    }
    if !vertices.is_empty() {
        path.close();
    }
    (path, vertices)
}

/// Build radar geometry. `progress[i]` scales data set `i`; missing entries count as 1.
pub fn build_radar(datasets: &[RadarDataSet], style: &RadarStyle, progress: &[f32]) -> Result<RadarGeometry> {
    if !style.max_value.is_finite() || style.max_value <= 0.0 {
        return Err(ChartError::config(format!("radar max value {} must be positive", style.max_value)));
    }
    if style.grid_count == 0 {
        return Err(ChartError::config("radar grid count must be at least 1"));
    }

    let axes = datasets.first().map_or(0, |d| d.data.len());
    for (i, ds) in datasets.iter().enumerate() {
        if ds.data.len() != axes {
            return Err(ChartError::data_shape(format!(
                "radar data set {i} has {} values, expected {axes}",
                ds.data.len()
            )));
        }
        if let Some(p) = ds.data.iter().find(|p| !p.value.is_finite()) {
            return Err(ChartError::data_shape(format!("radar value for '{}' is not finite", p.key)));
        }
    }

    let center = Point::new(style.width / 2.0, style.height / 2.0);
    let radius = style.radius();
    let mut geometry = RadarGeometry { center, radius, ..Default::default() };
    if axes == 0 {
        return Ok(geometry);
    }
    let step = TAU / axes as f32;

    if style.show_grid {
        geometry.grid = (1..=style.grid_count)
            .map(|i| {
                let r = radius * i as f32 / style.grid_count as f32;
                closed_ring(center, std::iter::repeat(r).take(axes), step).0
            })
            .collect();
    }

    if style.show_axes {
        geometry.spokes = (0..axes)
            .map(|i| {
                let mut p = Path::new();
                p.move_to(center).line_to(center.polar(radius, axis_angle(i, step)));
                p
            })
            .collect();
    }

    let label_radius = radius + style.label_padding;
    if style.show_labels {
        geometry.axis_labels = datasets[0]
            .data
            .iter()
            .enumerate()
            .map(|(i, point)| {
                let angle = axis_angle(i, step);
                let text = point.display_label();
                let (mut dx, mut dy) = (0.0, 0.0);
                if angle.abs() < 0.1 {
                    dy = -style.label_font_size / 2.0;
                } else if (angle - PI).abs() < 0.1 {
                    dy = style.label_font_size;
                } else if angle < -FRAC_PI_2 || angle > FRAC_PI_2 {
                    dx = -(5.0 * text.chars().count() as f32);
                }
                Label::new(text, center.polar(label_radius, angle).offset(dx, dy), TextAlign::Left)
            })
            .collect();
    }

    for (d, ds) in datasets.iter().enumerate() {
        let p = progress.get(d).copied().unwrap_or(1.0);
        let scale = radius / style.max_value as f32 * p;
        let (path, vertices) = closed_ring(center, ds.data.iter().map(|pt| pt.value as f32 * scale), step);
        if style.show_values {
            for (pt, v) in ds.data.iter().zip(&vertices) {
                let anchor = v.offset(0.0, style.value_font_size / 3.0);
                geometry.value_labels.push(Label::new(format!("{}", pt.value.round()), anchor, TextAlign::Center));
            }
        }
        geometry.polygons.push(RadarPolygon {
            path,
            vertices,
            fill: ds.fill_color.unwrap_or(style.fill_color),
            opacity: ds.opacity.unwrap_or(style.fill_opacity),
            stroke: ds.stroke_color.map(|c| (c, ds.stroke_width.unwrap_or(style.stroke_width))),
        });
    }

    Ok(geometry)
}
