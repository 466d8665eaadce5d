// File: crates/chart-core/src/axis.rs
// Summary: Axis configuration (visibility, colors, scale kind, domain, ticks) and tick label formatting.

use crate::geometry::format_value;
use crate::scale::{linear_tick_step, Domain, Scale, ScaleKind, TimeInterval, DEFAULT_BAND_PADDING};
use crate::series::XValue;
use crate::theme::{Color, Theme};

#[derive(Clone, Debug, PartialEq)]
pub struct AxisConfig {
    pub show_axis: bool,
    pub show_grid: bool,
    pub show_ticks: bool,
    pub show_labels: bool,
    pub axis_color: Color,
    pub grid_color: Color,
    pub label_color: Color,
    pub tick_length: f32,
    pub tick_count: usize,
    pub kind: ScaleKind,
    /// Explicit domain; used as given (no nicing). `None` infers it from the data.
    pub domain: Option<Domain>,
    /// Explicit tick values; bypass tick generation.
    pub tick_values: Option<Vec<XValue>>,
    /// Band padding for band scales.
    pub band_padding: f64,
    pub title: Option<String>,
    pub font_size: f32,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            show_axis: true,
            show_grid: true,
            show_ticks: true,
            show_labels: true,
            axis_color: Color::WHITE,
            grid_color: Color::WHITE.with_alpha(51),
            label_color: Color::WHITE,
            tick_length: 5.0,
            tick_count: 5,
            kind: ScaleKind::Linear,
            domain: None,
            tick_values: None,
            band_padding: DEFAULT_BAND_PADDING,
            title: None,
            font_size: 12.0,
        }
    }
}

impl AxisConfig {
    pub fn new(kind: ScaleKind) -> Self {
        Self { kind, ..Default::default() }
    }

    pub fn with_domain(mut self, domain: Domain) -> Self {
        self.domain = Some(domain);
        self
    }

    pub fn with_ticks(mut self, ticks: Vec<XValue>) -> Self {
        self.tick_values = Some(ticks);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_tick_count(mut self, count: usize) -> Self {
        self.tick_count = count;
        self
    }

    /// Take axis, grid and label colors from a theme.
    pub fn themed(mut self, theme: &Theme) -> Self {
        self.axis_color = theme.axis_line;
        self.grid_color = theme.grid;
        self.label_color = theme.axis_label;
        self
    }

    /// Domain used when neither an explicit nor an inferred one exists.
    pub fn fallback_domain(&self) -> Domain {
        match self.kind {
            ScaleKind::Band => Domain::Categories(Vec::new()),
            ScaleKind::Log => Domain::Numeric(1.0, 100.0),
            ScaleKind::Linear | ScaleKind::Time => Domain::Numeric(0.0, 100.0),
        }
    }
}

fn chrono_format(interval: TimeInterval) -> &'static str {
    match interval {
        TimeInterval::Millisecond(_) => "%H:%M:%S%.3f",
        TimeInterval::Second(_) => "%H:%M:%S",
        TimeInterval::Minute(_) | TimeInterval::Hour(_) => "%H:%M",
        TimeInterval::Day(_) | TimeInterval::Week => "%b %d",
        TimeInterval::Month(_) => "%b %Y",
        TimeInterval::Year(_) => "%Y",
    }
}

fn decimals_for_step(step: f64) -> usize {
    let log_step = step.log10();
    if !log_step.is_finite() || log_step >= 0.0 { 0 } else { (-log_step).ceil() as usize }
}

/// Smallest gap between consecutive numeric ticks.
fn min_gap(ticks: &[XValue]) -> Option<f64> {
    let nums: Vec<f64> = ticks.iter().filter_map(XValue::as_number).collect();
    nums.windows(2)
        .map(|w| (w[1] - w[0]).abs())
        .filter(|d| *d > 0.0)
        .min_by(f64::total_cmp)
}

/// Label text for each tick. Numbers get as many decimals as the tick step needs,
/// instants a format chosen by the calendar interval, categories print as-is.
pub fn format_ticks(scale: &Scale, ticks: &[XValue], count: usize) -> Vec<String> {
    let step = match (scale.kind(), scale.domain()) {
        (ScaleKind::Linear, Domain::Numeric(a, b)) => Some(linear_tick_step(*a, *b, count)),
        _ => None,
    }
    .or_else(|| min_gap(ticks));
    let time_format = scale.time_interval(count).map(chrono_format).unwrap_or("%Y-%m-%d");

    ticks
        .iter()
        .map(|t| match t {
            XValue::Number(v) if scale.kind() == ScaleKind::Log => format_value(*v),
            XValue::Number(v) => match step {
                Some(s) => format!("{:.*}", decimals_for_step(s), v),
                None => format_value(*v),
            },
            XValue::Time(t) => t.format(time_format).to_string(),
            XValue::Category(c) => c.clone(),
        })
        .collect()
}
