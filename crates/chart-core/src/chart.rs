// File: crates/chart-core/src/chart.rs
// Summary: Cartesian chart composition: axes, layers, per-layer animation state, frame rendering.

use std::collections::HashMap;

use crate::animation::{AnimationDriver, Easing, Timing, Transition};
use crate::axis::AxisConfig;
use crate::bar::{build_bars, BarStyle, Orientation};
use crate::error::Result;
use crate::grid::Frame;
use crate::interpolate::GeometryArena;
use crate::line::{build_area, build_line, AreaGeometry, AreaStyle, LineGeometry, LineStyle};
use crate::paint;
use crate::scale::Domain;
use crate::scatter::{build_scatter, DotLookup, ScatterGeometry, ScatterStyle};
use crate::series::{validate_points, DataPoint, XValue};
use crate::surface::{FontSpec, Surface, TextMeasure};
use crate::theme::Theme;
use crate::types::Layout;
use crate::view::{infer_values_domain, DEFAULT_DOMAIN_PADDING};

#[derive(Clone, Debug, PartialEq)]
pub enum LayerKind {
    Line(LineStyle),
    Area(AreaStyle),
    Bar(BarStyle),
    Scatter(ScatterStyle),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    pub data: Vec<DataPoint>,
    pub kind: LayerKind,
    pub timing: Timing,
    /// Bars only: value labels fade in with this timing once bars have grown.
    pub label_timing: Timing,
}

impl Layer {
    fn with_kind(data: Vec<DataPoint>, kind: LayerKind) -> Self {
        let timing = match &kind {
            LayerKind::Bar(_) => Timing::new(500.0, Easing::Bounce),
            _ => Timing::default(),
        };
        Self { data, kind, timing, label_timing: Timing::new(500.0, Easing::EaseInOut) }
    }

    pub fn line(data: Vec<DataPoint>, style: LineStyle) -> Self {
        Self::with_kind(data, LayerKind::Line(style))
    }

    pub fn area(data: Vec<DataPoint>, style: AreaStyle) -> Self {
        Self::with_kind(data, LayerKind::Area(style))
    }

    pub fn bar(data: Vec<DataPoint>, style: BarStyle) -> Self {
        Self::with_kind(data, LayerKind::Bar(style))
    }

    pub fn scatter(data: Vec<DataPoint>, style: ScatterStyle) -> Self {
        Self::with_kind(data, LayerKind::Scatter(style))
    }

    pub fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    fn horizontal_bars(&self) -> bool {
        matches!(&self.kind, LayerKind::Bar(s) if s.orientation == Orientation::Horizontal)
    }
}

/// Stable handle to a layer; survives removal of other layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Track {
    Geometry(LayerId),
    Labels(LayerId),
}

/// Scatter target plus the indexed dot positions it rises from.
#[derive(Clone, Debug, Default)]
struct ScatterState {
    from: DotLookup,
    target: ScatterGeometry,
}

pub struct Chart {
    pub layout: Layout,
    pub x_axis: AxisConfig,
    pub y_axis: AxisConfig,
    pub theme: Theme,
    layers: Vec<(LayerId, Layer)>,
    next_id: u32,
    frame: Option<Frame>,
    driver: AnimationDriver<Track>,
    lines: GeometryArena<LayerId, LineGeometry>,
    areas: GeometryArena<LayerId, AreaGeometry>,
    scatter: HashMap<LayerId, ScatterState>,
}

impl Default for Chart {
    fn default() -> Self {
        Self::new(Layout::default())
    }
}

impl Chart {
    pub fn new(layout: Layout) -> Self {
        let theme = Theme::dark();
        Self {
            layout,
            x_axis: AxisConfig::default().themed(&theme),
            y_axis: AxisConfig::default().themed(&theme),
            theme,
            layers: Vec::new(),
            next_id: 0,
            frame: None,
            driver: AnimationDriver::new(),
            lines: GeometryArena::new(),
            areas: GeometryArena::new(),
            scatter: HashMap::new(),
        }
    }

    pub fn with_axes(mut self, x_axis: AxisConfig, y_axis: AxisConfig) -> Self {
        self.x_axis = x_axis;
        self.y_axis = y_axis;
        self.frame = None;
        self
    }

    pub fn layers(&self) -> impl Iterator<Item = (LayerId, &Layer)> {
        self.layers.iter().map(|(id, l)| (*id, l))
    }

    pub fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.layers.iter().find(|(i, _)| *i == id).map(|(_, l)| l)
    }

    /// Current frame (scales, ticks, decorations); built on demand.
    pub fn frame(&mut self) -> Result<&Frame> {
        let frame = match self.frame.take() {
            Some(f) => f,
            None => self.build_frame()?,
        };
        Ok(self.frame.insert(frame))
    }

    pub fn add_layer(&mut self, layer: Layer, now: f64) -> Result<LayerId> {
        validate_points(&layer.data)?;
        let id = LayerId(self.next_id);
        self.next_id += 1;
        self.layers.push((id, layer));
        if let Err(e) = self.refresh(Some(id), now) {
            self.layers.pop();
            self.forget(id);
            return Err(e);
        }
        Ok(id)
    }

    /// Replace a layer's data and restart its transition. Unknown ids are ignored; on error
    /// the old data stays in place.
    pub fn set_data(&mut self, id: LayerId, data: Vec<DataPoint>, now: f64) -> Result<()> {
        validate_points(&data)?;
        let Some((_, layer)) = self.layers.iter_mut().find(|(i, _)| *i == id) else {
            log::warn!("set_data for unknown layer {id:?}");
            return Ok(());
        };
        let old = std::mem::replace(&mut layer.data, data);
        if let Err(e) = self.refresh(Some(id), now) {
            if let Some((_, layer)) = self.layers.iter_mut().find(|(i, _)| *i == id) {
                layer.data = old;
            }
            return Err(e);
        }
        Ok(())
    }

    /// Drop a layer and all animation state kept for it; remaining layers follow the new scales.
    pub fn remove_layer(&mut self, id: LayerId, now: f64) -> Result<Option<Layer>> {
        let Some(pos) = self.layers.iter().position(|(i, _)| *i == id) else {
            return Ok(None);
        };
        let (_, layer) = self.layers.remove(pos);
        self.forget(id);
        self.refresh(None, now)?;
        Ok(Some(layer))
    }

    fn forget(&mut self, id: LayerId) {
        self.driver.destroy(&Track::Geometry(id));
        self.driver.destroy(&Track::Labels(id));
        self.lines.destroy(&id);
        self.areas.destroy(&id);
        self.scatter.remove(&id);
    }

    /// True while any layer is still animating.
    pub fn is_animating(&self, now: f64) -> bool {
        self.driver.any_running(now)
            || self.layers.iter().any(|(id, _)| {
                let running = |t: Option<&Transition>| t.is_some_and(|t| !t.is_finished(now));
                running(self.lines.get(id).map(|g| g.transition())) || running(self.areas.get(id).map(|g| g.transition()))
            })
    }

    fn inferred_domains(&self) -> Result<(Option<Domain>, Option<Domain>)> {
        let mut xs: Vec<XValue> = Vec::new();
        let mut ys: Vec<XValue> = Vec::new();
        let mut has_bars = false;
        for (_, layer) in &self.layers {
            let (keys, values) = if layer.horizontal_bars() { (&mut ys, &mut xs) } else { (&mut xs, &mut ys) };
            if let LayerKind::Bar(_) = layer.kind {
                has_bars = true;
                values.push(XValue::Number(0.0));
            }
            for p in &layer.data {
                keys.push(p.x.clone());
                values.push(XValue::Number(p.y));
            }
        }
        let value_padding = if has_bars { 0.0 } else { DEFAULT_DOMAIN_PADDING };
        let any_horizontal = self.layers.iter().any(|(_, l)| l.horizontal_bars());
        let (x_pad, y_pad) = if any_horizontal { (value_padding, 0.0) } else { (0.0, value_padding) };
        Ok((infer_values_domain(&xs, x_pad)?, infer_values_domain(&ys, y_pad)?))
    }

    fn build_frame(&self) -> Result<Frame> {
        let (x_data, y_data) = self.inferred_domains()?;
        Frame::build(&self.layout, &self.x_axis, &self.y_axis, x_data, y_data)
    }

    /// Rebuild the frame and retarget layer geometry. `changed` restarts from zero; other
    /// layers only move if the new scales moved them.
    fn refresh(&mut self, changed: Option<LayerId>, now: f64) -> Result<()> {
        let frame = self.build_frame()?;
        let old_baseline = self.frame.as_ref().map_or(0.0, |f| {
            let (r0, r1) = f.y.range();
            r0.max(r1)
        });
        for (id, layer) in &self.layers {
            let is_changed = changed == Some(*id);
            match &layer.kind {
                LayerKind::Line(style) => {
                    let geom = build_line(&layer.data, &frame.x, &frame.y, style)?;
                    if is_changed || self.lines.get(id).is_some_and(|g| *g.target() != geom) {
                        self.lines.set(*id, geom, now, layer.timing);
                    }
                }
                LayerKind::Area(style) => {
                    let geom = build_area(&layer.data, &frame.x, &frame.y, style)?;
                    if is_changed || self.areas.get(id).is_some_and(|g| *g.target() != geom) {
                        self.areas.set(*id, geom, now, layer.timing);
                    }
                }
                LayerKind::Bar(style) => {
                    // Full-progress build validates style and data
                    build_bars(&layer.data, &frame.x, &frame.y, self.layout.inner(), style, 1.0, 1.0)?;
                    if is_changed {
                        self.driver.start(Track::Geometry(*id), now, layer.timing);
                        self.driver.start(Track::Labels(*id), now, layer.label_timing.after(&layer.timing));
                    }
                }
                LayerKind::Scatter(style) => {
                    let geom = build_scatter(&layer.data, &frame.x, &frame.y, style)?;
                    let state = self.scatter.entry(*id).or_default();
                    if is_changed || state.target != geom {
                        // Start from the displayed positions
                        let shown = self.driver.sample(&Track::Geometry(*id), now);
                        state.from = if shown >= 1.0 {
                            state.target.y_by_key()
                        } else {
                            state.target.blend_from_lookup(&state.from, old_baseline, shown).y_by_key()
                        };
                        state.target = geom;
                        self.driver.start(Track::Geometry(*id), now, layer.timing);
                    }
                }
            }
        }
        self.frame = Some(frame);
        Ok(())
    }

    /// Paint the frame and every layer as of `now`.
    pub fn render(&mut self, surface: &mut dyn Surface, measure: &dyn TextMeasure, now: f64) -> Result<()> {
        if self.frame.is_none() {
            self.frame = Some(self.build_frame()?);
        }
        let Some(frame) = &self.frame else { return Ok(()) };

        paint::draw_frame(surface, measure, frame, &self.x_axis, &self.y_axis);
        let origin = frame.origin;
        let inner = self.layout.inner();
        let label_font = FontSpec { bold: true, ..FontSpec::numeric(14.0) };
        let (r0, r1) = frame.y.range();
        let baseline = r0.max(r1);

        for (id, layer) in &self.layers {
            match &layer.kind {
                LayerKind::Line(style) => {
                    if let Some(g) = self.lines.displayed(id, now) {
                        paint::draw_line(surface, &g, style, origin);
                    }
                }
                LayerKind::Area(style) => {
                    if let Some(g) = self.areas.displayed(id, now) {
                        paint::draw_area(surface, &g, style, origin);
                    }
                }
                LayerKind::Bar(style) => {
                    let progress = self.driver.sample(&Track::Geometry(*id), now);
                    let label_progress = self.driver.sample(&Track::Labels(*id), now);
                    let g = build_bars(&layer.data, &frame.x, &frame.y, inner, style, progress, label_progress)?;
                    paint::draw_bars(surface, measure, &g, origin, self.theme.value_label, &label_font);
                }
                LayerKind::Scatter(_) => {
                    if let Some(state) = self.scatter.get(id) {
                        let progress = self.driver.sample(&Track::Geometry(*id), now);
                        let g = state.target.blend_from_lookup(&state.from, baseline, progress);
                        paint::draw_scatter(surface, measure, &g, origin, self.theme.value_label, &label_font);
                    }
                }
            }
        }
        Ok(())
    }
}
