// File: crates/chart-core/src/scatter.rs
// Summary: Scatter geometry: positioned dots with value labels, keyed by x for transitions.

use std::collections::HashMap;

use crate::error::Result;
use crate::geometry::{Label, Point, TextAlign};
use crate::line::{scale_points, DEFAULT_SERIES_COLOR};
use crate::scale::Scale;
use crate::series::{DataPoint, XKey, XValue};
use crate::theme::Color;

#[derive(Clone, Debug, PartialEq)]
pub struct ScatterStyle {
    pub dot_radius: f32,
    pub dot_color: Color,
    pub show_labels: bool,
    /// Vertical gap between the dot center and its label.
    pub label_offset: f32,
}

impl Default for ScatterStyle {
    fn default() -> Self {
        Self { dot_radius: 5.0, dot_color: DEFAULT_SERIES_COLOR, show_labels: true, label_offset: 10.0 }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Dot {
    /// X value the dot came from; transitions match dots by it.
    pub key: XValue,
    pub center: Point,
    pub radius: f32,
    pub color: Color,
    pub label: Option<Label>,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct ScatterGeometry {
    pub dots: Vec<Dot>,
}

pub fn build_scatter(data: &[DataPoint], x: &Scale, y: &Scale, style: &ScatterStyle) -> Result<ScatterGeometry> {
    let points = scale_points(data, x, y)?;
    let dots = data
        .iter()
        .zip(points)
        .map(|(p, center)| Dot {
            key: p.x.clone(),
            center,
            radius: p.dot_radius.unwrap_or(style.dot_radius),
            color: p.dot_color.or(p.color).unwrap_or(style.dot_color),
            label: style.show_labels.then(|| {
                let text = p.label.clone().unwrap_or_else(|| format!("{:.1}", p.y));
                Label::new(text, center.offset(0.0, -style.label_offset), TextAlign::Center)
            }),
        })
        .collect();
    Ok(ScatterGeometry { dots })
}

/// Dot y positions keyed by x, first dot wins on duplicate keys.
pub type DotLookup = HashMap<XKey, f32>;

impl ScatterGeometry {
    pub fn y_by_key(&self) -> DotLookup {
        let mut lookup = DotLookup::with_capacity(self.dots.len());
        for d in &self.dots {
            lookup.entry(d.key.key()).or_insert(d.center.y);
        }
        lookup
    }

    /// Dots rising from their previous position (matched by x) or from `baseline` when new.
    pub fn blend_from(&self, previous: &ScatterGeometry, baseline: f32, progress: f32) -> ScatterGeometry {
        self.blend_from_lookup(&previous.y_by_key(), baseline, progress)
    }

    /// Same as [`ScatterGeometry::blend_from`] with the previous positions already indexed.
    pub fn blend_from_lookup(&self, previous: &DotLookup, baseline: f32, progress: f32) -> ScatterGeometry {
        let dots = self
            .dots
            .iter()
            .map(|d| {
                let from_y = previous.get(&d.key.key()).copied().unwrap_or(baseline);
                let dy = (from_y + (d.center.y - from_y) * progress) - d.center.y;
                Dot {
                    center: d.center.offset(0.0, dy),
                    label: d.label.clone().map(|mut l| {
                        l.anchor = l.anchor.offset(0.0, dy);
                        l
                    }),
                    ..d.clone()
                }
            })
            .collect();
        ScatterGeometry { dots }
    }
}
