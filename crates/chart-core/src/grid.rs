// File: crates/chart-core/src/grid.rs
// Summary: Cartesian frame: scales for the plot area plus grid lines, axis lines, tick marks and labels.

use crate::axis::{format_ticks, AxisConfig};
use crate::error::Result;
use crate::geometry::{Label, Point, TextAlign};
use crate::scale::{resolve_ticks, Domain, Scale, ScaleKind, ScaleSpec};
use crate::series::XValue;
use crate::types::Layout;

/// A straight segment in outer (canvas) coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub const fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }
}

/// Everything a cartesian chart draws around its layers.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub layout: Layout,
    /// Scales map into plot-area coordinates; add `origin` for canvas coordinates.
    pub x: Scale,
    pub y: Scale,
    pub origin: Point,
    pub x_ticks: Vec<XValue>,
    pub y_ticks: Vec<XValue>,
    pub x_grid: Vec<Segment>,
    pub y_grid: Vec<Segment>,
    pub x_axis_line: Option<Segment>,
    pub y_axis_line: Option<Segment>,
    pub x_tick_marks: Vec<Segment>,
    pub y_tick_marks: Vec<Segment>,
    pub x_labels: Vec<Label>,
    pub y_labels: Vec<Label>,
    pub titles: Vec<Label>,
}

fn axis_scale(axis: &AxisConfig, inferred: Option<Domain>, range: (f32, f32)) -> Result<Scale> {
    let (domain, nice) = match (&axis.domain, inferred) {
        (Some(d), _) => (d.clone(), false),
        (None, Some(d)) => (d, true),
        (None, None) => (axis.fallback_domain(), true),
    };
    ScaleSpec::new(axis.kind, domain, range)
        .with_padding(axis.band_padding)
        .with_nice(nice && axis.kind != ScaleKind::Band)
        .build()
}

impl Frame {
    /// Build scales and decorations. `x_data`/`y_data` are domains inferred from the
    /// layers; explicit axis domains take precedence.
    pub fn build(
        layout: &Layout,
        x_axis: &AxisConfig,
        y_axis: &AxisConfig,
        x_data: Option<Domain>,
        y_data: Option<Domain>,
    ) -> Result<Self> {
        let x = axis_scale(x_axis, x_data, layout.x_range())?;
        let y = axis_scale(y_axis, y_data, layout.y_range())?;
        let x_ticks = resolve_ticks(&x, x_axis.tick_count, x_axis.tick_values.as_deref())?;
        let y_ticks = resolve_ticks(&y, y_axis.tick_count, y_axis.tick_values.as_deref())?;

        let pad = layout.padding;
        let origin = Point::new(pad.left as f32, pad.top as f32);
        let (left, top) = (origin.x, origin.y);
        let right = layout.width - pad.right as f32;
        let bottom = layout.height - pad.bottom as f32;

        let xs: Vec<f32> = x_ticks.iter().map(|t| x.center(t).map(|v| v + left)).collect::<Result<_>>()?;
        let ys: Vec<f32> = y_ticks.iter().map(|t| y.center(t).map(|v| v + top)).collect::<Result<_>>()?;

        let mut frame = Frame {
            layout: *layout,
            origin,
            x_grid: Vec::new(),
            y_grid: Vec::new(),
            x_axis_line: None,
            y_axis_line: None,
            x_tick_marks: Vec::new(),
            y_tick_marks: Vec::new(),
            x_labels: Vec::new(),
            y_labels: Vec::new(),
            titles: Vec::new(),
            x,
            y,
            x_ticks,
            y_ticks,
        };

        if x_axis.show_grid {
            frame.x_grid = xs.iter().map(|&px| Segment::new(Point::new(px, top), Point::new(px, bottom))).collect();
        }
        if y_axis.show_grid {
            frame.y_grid = ys.iter().map(|&py| Segment::new(Point::new(left, py), Point::new(right, py))).collect();
        }
        if x_axis.show_axis {
            frame.x_axis_line = Some(Segment::new(Point::new(left, bottom), Point::new(right, bottom)));
        }
        if y_axis.show_axis {
            frame.y_axis_line = Some(Segment::new(Point::new(left, bottom), Point::new(left, top)));
        }
        if x_axis.show_ticks {
            frame.x_tick_marks = xs
                .iter()
                .map(|&px| Segment::new(Point::new(px, bottom), Point::new(px, bottom + x_axis.tick_length)))
                .collect();
        }
        if y_axis.show_ticks {
            frame.y_tick_marks = ys
                .iter()
                .map(|&py| Segment::new(Point::new(left, py), Point::new(left - y_axis.tick_length, py)))
                .collect();
        }
        if x_axis.show_labels {
            let texts = format_ticks(&frame.x, &frame.x_ticks, x_axis.tick_count);
            frame.x_labels = xs
                .iter()
                .zip(texts)
                .map(|(&px, text)| Label::new(text, Point::new(px, bottom + 10.0 + x_axis.font_size), TextAlign::Center))
                .collect();
        }
        if y_axis.show_labels {
            let texts = format_ticks(&frame.y, &frame.y_ticks, y_axis.tick_count);
            frame.y_labels = ys
                .iter()
                .zip(texts)
                .map(|(&py, text)| {
                    Label::new(text, Point::new(left - 9.0, py + y_axis.font_size / 3.0), TextAlign::Right)
                })
                .collect();
        }
        if let Some(title) = &x_axis.title {
            frame.titles.push(Label::new(title.clone(), Point::new(layout.width / 2.0, layout.height - 10.0), TextAlign::Center));
        }
        if let Some(title) = &y_axis.title {
            frame.titles.push(Label::new(title.clone(), Point::new(4.0, top - 6.0), TextAlign::Left));
        }

        Ok(frame)
    }

    /// Plot-area point to canvas coordinates.
    pub fn to_canvas(&self, p: Point) -> Point {
        p.offset(self.origin.x, self.origin.y)
    }
}
