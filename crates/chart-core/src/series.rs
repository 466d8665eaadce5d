// File: crates/chart-core/src/series.rs
// Summary: Input data model: cartesian data points, radar data sets, pie data.
// Notes:
// - Points are immutable snapshots handed in each render cycle.
// - Validation lives next to the types so builders can fail fast with DataShape errors.

use chrono::{DateTime, Utc};
use std::fmt;

use crate::error::{ChartError, Result};
use crate::theme::Color;

/// An x value: numeric, categorical, or an instant.
#[derive(Clone, Debug, PartialEq)]
pub enum XValue {
    Number(f64),
    Category(String),
    Time(DateTime<Utc>),
}

impl XValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            XValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_category(&self) -> Option<&str> {
        match self {
            XValue::Category(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_time(&self) -> Option<DateTime<Utc>> {
        match self {
            XValue::Time(t) => Some(*t),
            _ => None,
        }
    }
}

/// Hashable identity of an [`XValue`]; numbers compare by bit pattern with -0.0 folded into 0.0.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum XKey {
    Number(u64),
    Category(String),
    Time(DateTime<Utc>),
}

impl XValue {
    pub fn key(&self) -> XKey {
        match self {
            XValue::Number(v) => XKey::Number(if *v == 0.0 { 0.0f64.to_bits() } else { v.to_bits() }),
            XValue::Category(s) => XKey::Category(s.clone()),
            XValue::Time(t) => XKey::Time(*t),
        }
    }
}

impl fmt::Display for XValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XValue::Number(v) => write!(f, "{v}"),
            XValue::Category(s) => f.write_str(s),
            XValue::Time(t) => write!(f, "{}", t.to_rfc3339()),
        }
    }
}

impl From<f64> for XValue {
    fn from(v: f64) -> Self { XValue::Number(v) }
}

impl From<i32> for XValue {
    fn from(v: i32) -> Self { XValue::Number(v as f64) }
}

impl From<&str> for XValue {
    fn from(v: &str) -> Self { XValue::Category(v.to_string()) }
}

impl From<String> for XValue {
    fn from(v: String) -> Self { XValue::Category(v) }
}

impl From<DateTime<Utc>> for XValue {
    fn from(v: DateTime<Utc>) -> Self { XValue::Time(v) }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    pub x: XValue,
    pub y: f64,
    pub color: Option<Color>,
    pub label: Option<String>,
    pub dot_radius: Option<f32>,
    pub dot_color: Option<Color>,
}

impl DataPoint {
    pub fn new(x: impl Into<XValue>, y: f64) -> Self {
        Self { x: x.into(), y, color: None, label: None, dot_radius: None, dot_color: None }
    }

    /// Construct a point, rejecting non-finite values.
    pub fn try_new(x: impl Into<XValue>, y: f64) -> Result<Self> {
        let p = Self::new(x, y);
        p.validate()?;
        Ok(p)
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_dot(mut self, radius: f32, color: Color) -> Self {
        self.dot_radius = Some(radius);
        self.dot_color = Some(color);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.y.is_finite() {
            return Err(ChartError::data_shape(format!("y value {} is not finite", self.y)));
        }
        if let XValue::Number(x) = self.x {
            if !x.is_finite() {
                return Err(ChartError::data_shape(format!("x value {x} is not finite")));
            }
        }
        Ok(())
    }
}

/// Validate a whole data set; reports the index of the first bad point.
pub fn validate_points(points: &[DataPoint]) -> Result<()> {
    for (i, p) in points.iter().enumerate() {
        p.validate().map_err(|e| match e {
            ChartError::DataShape(msg) => ChartError::data_shape(format!("point {i}: {msg}")),
            other => other,
        })?;
    }
    Ok(())
}

/// Convenience: build numeric points from `(x, y)` pairs.
pub fn points_from_xy(data: &[(f64, f64)]) -> Vec<DataPoint> {
    data.iter().map(|&(x, y)| DataPoint::new(x, y)).collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct RadarPoint {
    pub key: String,
    pub value: f64,
    pub label: Option<String>,
}

impl RadarPoint {
    pub fn new(key: impl Into<String>, value: f64) -> Self {
        Self { key: key.into(), value, label: None }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Text shown at the axis end: the label when present, otherwise the key.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.key)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RadarDataSet {
    pub data: Vec<RadarPoint>,
    pub fill_color: Option<Color>,
    pub stroke_color: Option<Color>,
    pub stroke_width: Option<f32>,
    pub opacity: Option<f32>,
}

impl RadarDataSet {
    pub fn new(data: Vec<RadarPoint>) -> Self {
        Self { data, fill_color: None, stroke_color: None, stroke_width: None, opacity: None }
    }

    pub fn with_fill(mut self, color: Color, opacity: f32) -> Self {
        self.fill_color = Some(color);
        self.opacity = Some(opacity);
        self
    }

    pub fn with_stroke(mut self, color: Color, width: f32) -> Self {
        self.stroke_color = Some(color);
        self.stroke_width = Some(width);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PieDatum {
    pub value: f64,
    pub color: Color,
    pub label: String,
}

impl PieDatum {
    pub fn new(value: f64, color: Color, label: impl Into<String>) -> Self {
        Self { value, color, label: label.into() }
    }
}
