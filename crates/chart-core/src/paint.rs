// File: crates/chart-core/src/paint.rs
// Summary: Painters turning frames and geometries into Surface draw calls.

use crate::axis::AxisConfig;
use crate::bar::BarGeometry;
use crate::gauge::{GaugeGeometry, GaugeStyle};
use crate::geometry::{Label, Path, Point, TextAlign};
use crate::grid::{Frame, Segment};
use crate::line::{AreaGeometry, AreaStyle, LineGeometry, LineStyle};
use crate::pie::PieGeometry;
use crate::radar::{RadarGeometry, RadarStyle};
use crate::scatter::ScatterGeometry;
use crate::surface::{FontSpec, Stroke, Surface, TextMeasure};
use crate::theme::Color;

fn faded(color: Color, opacity: f32) -> Color {
    let a = (color.a as f32 * opacity.clamp(0.0, 1.0)).round() as u8;
    color.with_alpha(a)
}

/// Draw `label`, shifting its origin by the measured width for center/right alignment.
pub fn draw_label(
    surface: &mut dyn Surface,
    measure: &dyn TextMeasure,
    label: &Label,
    offset: Point,
    color: Color,
    font: &FontSpec,
) {
    if label.text.is_empty() || label.opacity <= 0.0 {
        return;
    }
    let (w, _) = measure.measure(&label.text, font);
    let dx = match label.align {
        TextAlign::Left => 0.0,
        TextAlign::Center => -w / 2.0,
        TextAlign::Right => -w,
    };
    let origin = label.anchor.offset(offset.x + dx, offset.y);
    surface.draw_text(&label.text, origin, faded(color, label.opacity), font);
}

fn draw_segment(surface: &mut dyn Surface, seg: &Segment, stroke: &Stroke) {
    let mut p = Path::new();
    p.move_to(seg.from).line_to(seg.to);
    surface.stroke_path(&p, stroke);
}

/// Grid first, then axis lines, tick marks, tick labels and titles.
pub fn draw_frame(
    surface: &mut dyn Surface,
    measure: &dyn TextMeasure,
    frame: &Frame,
    x_axis: &AxisConfig,
    y_axis: &AxisConfig,
) {
    let none = Point::default();
    for s in &frame.y_grid {
        draw_segment(surface, s, &Stroke::new(y_axis.grid_color, 1.0));
    }
    for s in &frame.x_grid {
        draw_segment(surface, s, &Stroke::new(x_axis.grid_color, 1.0));
    }
    if let Some(s) = &frame.y_axis_line {
        draw_segment(surface, s, &Stroke::new(y_axis.axis_color, 2.0));
    }
    if let Some(s) = &frame.x_axis_line {
        draw_segment(surface, s, &Stroke::new(x_axis.axis_color, 2.0));
    }
    for s in &frame.x_tick_marks {
        draw_segment(surface, s, &Stroke::new(x_axis.axis_color, 2.0));
    }
    for s in &frame.y_tick_marks {
        draw_segment(surface, s, &Stroke::new(y_axis.axis_color, 2.0));
    }
    let x_font = FontSpec::numeric(x_axis.font_size);
    for l in &frame.x_labels {
        draw_label(surface, measure, l, none, x_axis.label_color, &x_font);
    }
    let y_font = FontSpec::numeric(y_axis.font_size);
    for l in &frame.y_labels {
        draw_label(surface, measure, l, none, y_axis.label_color, &y_font);
    }
    let title_font = FontSpec { bold: true, ..FontSpec::new(x_axis.font_size + 2.0) };
    for l in &frame.titles {
        draw_label(surface, measure, l, none, x_axis.label_color, &title_font);
    }
}

pub fn draw_line(surface: &mut dyn Surface, geom: &LineGeometry, style: &LineStyle, origin: Point) {
    if geom.path.is_empty() {
        return;
    }
    let path = geom.path.translated(origin.x, origin.y);
    surface.stroke_path(&path, &Stroke::new(style.color, style.stroke_width).rounded());
    if style.show_dots {
        let color = style.dot_color.unwrap_or(style.color);
        for p in &geom.points {
            surface.draw_circle(p.offset(origin.x, origin.y), style.dot_radius, color);
        }
    }
}

pub fn draw_area(surface: &mut dyn Surface, geom: &AreaGeometry, style: &AreaStyle, origin: Point) {
    if geom.path.is_empty() {
        return;
    }
    surface.fill_path(&geom.path.translated(origin.x, origin.y), style.color, style.opacity);
}

pub fn draw_bars(
    surface: &mut dyn Surface,
    measure: &dyn TextMeasure,
    geom: &BarGeometry,
    origin: Point,
    label_color: Color,
    font: &FontSpec,
) {
    for bar in &geom.bars {
        surface.draw_rounded_rect(&bar.rect.translated(origin.x, origin.y), bar.color);
        draw_label(surface, measure, &bar.label, origin, label_color, font);
    }
}

pub fn draw_scatter(
    surface: &mut dyn Surface,
    measure: &dyn TextMeasure,
    geom: &ScatterGeometry,
    origin: Point,
    label_color: Color,
    font: &FontSpec,
) {
    for dot in &geom.dots {
        surface.draw_circle(dot.center.offset(origin.x, origin.y), dot.radius, dot.color);
        if let Some(l) = &dot.label {
            draw_label(surface, measure, l, origin, label_color, font);
        }
    }
}

/// Wedges at `progress`; labels once a wedge is visible.
pub fn draw_pie(
    surface: &mut dyn Surface,
    measure: &dyn TextMeasure,
    geom: &PieGeometry,
    progress: f32,
    label_color: Color,
    font: &FontSpec,
) {
    for (wedge, path) in geom.wedges.iter().zip(geom.paths(progress)) {
        if path.is_empty() {
            continue;
        }
        surface.fill_path(&path, wedge.color, 1.0);
        draw_label(surface, measure, &wedge.label, Point::default(), label_color, font);
    }
}

pub fn draw_radar(surface: &mut dyn Surface, measure: &dyn TextMeasure, geom: &RadarGeometry, style: &RadarStyle) {
    for ring in &geom.grid {
        surface.stroke_path(ring, &Stroke::new(style.grid_color, style.grid_width));
    }
    for spoke in &geom.spokes {
        surface.stroke_path(spoke, &Stroke::new(style.axis_color, style.axis_width));
    }
    for poly in &geom.polygons {
        surface.fill_path(&poly.path, poly.fill, poly.opacity);
    }
    for poly in &geom.polygons {
        if let Some((color, width)) = poly.stroke {
            surface.stroke_path(&poly.path, &Stroke::new(color, width));
        }
    }
    let none = Point::default();
    let label_font = FontSpec { bold: true, italic: true, ..FontSpec::new(style.label_font_size) };
    for l in &geom.axis_labels {
        draw_label(surface, measure, l, none, style.label_color, &label_font);
    }
    let value_font = FontSpec { bold: true, ..FontSpec::numeric(style.value_font_size) };
    for l in &geom.value_labels {
        draw_label(surface, measure, l, none, style.value_color, &value_font);
    }
}

pub fn draw_gauge(surface: &mut dyn Surface, measure: &dyn TextMeasure, geom: &GaugeGeometry, style: &GaugeStyle) {
    surface.stroke_path(&geom.track, &Stroke::new(style.track_color, style.track_width));
    for tick in &geom.ticks {
        surface.stroke_path(&tick.path, &Stroke::new(tick.color, tick.width));
    }
    let none = Point::default();
    let tick_font = FontSpec::numeric(14.0);
    for l in &geom.tick_labels {
        draw_label(surface, measure, l, none, Color::WHITE, &tick_font);
    }
    surface.stroke_path(&geom.needle, &Stroke::new(style.needle_color, style.needle_width).rounded());
    surface.draw_circle(geom.center, style.hub_radius, style.needle_color);
    surface.draw_circle(geom.center, style.hub_inner_radius, style.hub_inner_color);
    let readout_font = FontSpec::numeric(24.0);
    draw_label(surface, measure, &geom.readout, none, Color::WHITE, &readout_font);
    draw_label(surface, measure, &geom.unit, none, Color::rgb(0xaa, 0xaa, 0xaa), &FontSpec::new(16.0));
}
