// File: crates/chart-core/src/view.rs
// Summary: Domain inference from data: padded y extents and axis domains by value kind.

use chrono::{DateTime, Utc};

use crate::error::{ChartError, Result};
use crate::scale::Domain;
use crate::series::{DataPoint, XValue};

/// Default fraction of the y span added on both sides.
pub const DEFAULT_DOMAIN_PADDING: f64 = 0.1;

/// `[min - span*p, max + span*p]` of the y values; `None` when there are no finite values.
pub fn infer_domain(points: &[DataPoint], padding: f64) -> Option<(f64, f64)> {
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for p in points.iter().filter(|p| p.y.is_finite()) {
        y_min = y_min.min(p.y);
        y_max = y_max.max(p.y);
    }
    if !y_min.is_finite() || !y_max.is_finite() {
        return None;
    }
    let pad = (y_max - y_min) * padding;
    Some((y_min - pad, y_max + pad))
}

/// X domain of `points`; see [`infer_values_domain`].
pub fn infer_x_domain(points: &[DataPoint]) -> Result<Option<Domain>> {
    let xs: Vec<XValue> = points.iter().map(|p| p.x.clone()).collect();
    infer_values_domain(&xs, 0.0)
}

/// Domain whose kind follows the first value: numeric extent (padded by `padding` of the
/// span), time extent, or categories in first-seen order. Mixed kinds are a data error.
pub fn infer_values_domain(values: &[XValue], padding: f64) -> Result<Option<Domain>> {
    let Some(first) = values.first() else {
        return Ok(None);
    };
    let mismatch = |v: &XValue| ChartError::data_shape(format!("value {v} does not match the kind of {first}"));
    match first {
        XValue::Number(_) => {
            let (mut lo, mut hi) = (f64::INFINITY, f64::NEG_INFINITY);
            for v in values {
                let x = v.as_number().ok_or_else(|| mismatch(v))?;
                if x.is_finite() {
                    lo = lo.min(x);
                    hi = hi.max(x);
                }
            }
            if !lo.is_finite() || !hi.is_finite() {
                return Ok(None);
            }
            let pad = (hi - lo) * padding;
            Ok(Some(Domain::Numeric(lo - pad, hi + pad)))
        }
        XValue::Time(_) => {
            let mut extent: Option<(DateTime<Utc>, DateTime<Utc>)> = None;
            for v in values {
                let t = v.as_time().ok_or_else(|| mismatch(v))?;
                extent = Some(extent.map_or((t, t), |(a, b)| (a.min(t), b.max(t))));
            }
            Ok(extent.map(|(a, b)| Domain::Time(a, b)))
        }
        XValue::Category(_) => {
            let mut keys: Vec<String> = Vec::new();
            for v in values {
                let k = v.as_category().ok_or_else(|| mismatch(v))?;
                if !keys.iter().any(|s| s == k) {
                    keys.push(k.to_string());
                }
            }
            Ok(Some(Domain::Categories(keys)))
        }
    }
}
