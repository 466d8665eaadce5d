// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports scales, geometry builders, animation and composition.

pub mod animation;
pub mod axis;
pub mod bar;
pub mod chart;
pub mod curve;
pub mod error;
pub mod gauge;
pub mod geometry;
pub mod grid;
pub mod interpolate;
pub mod line;
pub mod paint;
pub mod pie;
pub mod radar;
pub mod scale;
pub mod scatter;
pub mod series;
pub mod surface;
pub mod theme;
pub mod types;
pub mod view;

pub use animation::{AnimationDriver, Clock, Easing, ManualClock, SystemClock, Timing, ValueAnimation};
pub use axis::AxisConfig;
pub use bar::{build_bars, BarGeometry, BarStyle, Orientation};
pub use chart::{Chart, Layer, LayerId, LayerKind};
pub use curve::Curve;
pub use error::{ChartError, Result};
pub use gauge::{build_gauge, needle_angle, GaugeGeometry, GaugeStyle, ThresholdBand};
pub use geometry::{Label, Path, PathCommand, Point, Rect, RoundedRect, TextAlign};
pub use grid::Frame;
pub use interpolate::{interpolate, AnimatedGeometry, GeometryArena, Interpolate};
pub use line::{build_area, build_line, AreaGeometry, AreaStyle, LineGeometry, LineStyle};
pub use pie::{build_pie, PieGeometry, PieStyle, Wedge};
pub use radar::{build_radar, RadarGeometry, RadarStyle};
pub use scale::{create_scale, generate_ticks, resolve_ticks, Domain, Scale, ScaleKind, ScaleSpec};
pub use scatter::{build_scatter, ScatterGeometry, ScatterStyle};
pub use series::{DataPoint, PieDatum, RadarDataSet, RadarPoint, XKey, XValue};
pub use surface::{ApproxMeasure, DrawCommand, FontSpec, RecordingSurface, Stroke, Surface, TextMeasure};
pub use theme::{Color, ColorRamp, Theme};
pub use types::{Insets, Layout, Size};
pub use view::{infer_domain, infer_x_domain};
