// File: crates/chart-core/src/scale.rs
// Summary: Domain -> pixel scales (linear, time, band, log), nice rounding, tick generation.

use chrono::{DateTime, Datelike, Duration, TimeZone, Timelike, Utc};
use std::collections::HashMap;

use crate::error::{ChartError, Result};
use crate::series::XValue;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScaleKind {
    Linear,
    Time,
    Band,
    Log,
}

impl ScaleKind {
    pub fn is_continuous(self) -> bool {
        !matches!(self, ScaleKind::Band)
    }
}

/// Values an axis represents.
#[derive(Clone, Debug, PartialEq)]
pub enum Domain {
    Numeric(f64, f64),
    Time(DateTime<Utc>, DateTime<Utc>),
    Categories(Vec<String>),
}

impl Domain {
    pub fn numeric(min: f64, max: f64) -> Self {
        Domain::Numeric(min, max)
    }

    pub fn time(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Domain::Time(start, end)
    }

    pub fn categories<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Domain::Categories(keys.into_iter().map(Into::into).collect())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Domain::Categories(c) if c.is_empty())
    }
}

/// Scale construction parameters. `create_scale` is the short form.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleSpec {
    pub kind: ScaleKind,
    pub domain: Domain,
    pub range: (f32, f32),
    /// Band padding as a fraction of each slot.
    pub padding: f64,
    /// Round continuous domains outward to nice boundaries.
    pub nice: bool,
}

impl ScaleSpec {
    pub fn new(kind: ScaleKind, domain: Domain, range: (f32, f32)) -> Self {
        Self { kind, domain, range, padding: DEFAULT_BAND_PADDING, nice: true }
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_nice(mut self, nice: bool) -> Self {
        self.nice = nice;
        self
    }

    pub fn build(&self) -> Result<Scale> {
        Scale::from_spec(self)
    }
}

pub const DEFAULT_BAND_PADDING: f64 = 0.1;
/// Tick count used when nicing a domain outward.
const NICE_COUNT: usize = 10;

/// Create a scale. Linear and log domains are niced; band padding defaults to 0.1.
pub fn create_scale(kind: ScaleKind, domain: Domain, range: (f32, f32), padding: Option<f64>) -> Result<Scale> {
    let mut spec = ScaleSpec::new(kind, domain, range);
    if let Some(p) = padding {
        spec = spec.with_padding(p);
    }
    // Time domains are only niced when the caller asks for it through ScaleSpec.
    if kind == ScaleKind::Time {
        spec = spec.with_nice(false);
    }
    spec.build()
}

#[derive(Clone, Debug, PartialEq)]
enum Mapping {
    /// Empty domain: everything maps to the range midpoint.
    Empty,
    Linear { d0: f64, d1: f64 },
    Log { l0: f64, l1: f64 },
    Time { t0: f64, t1: f64 },
    Band { categories: Vec<String>, index: HashMap<String, usize>, padding: f64 },
}

/// Immutable value -> pixel mapping. Recreate it when domain, range or kind change.
#[derive(Clone, Debug, PartialEq)]
pub struct Scale {
    kind: ScaleKind,
    domain: Domain,
    range: (f32, f32),
    mapping: Mapping,
}

impl Scale {
    fn from_spec(spec: &ScaleSpec) -> Result<Self> {
        let (r0, r1) = spec.range;
        if !r0.is_finite() || !r1.is_finite() {
            return Err(ChartError::config(format!("range [{r0}, {r1}] is not finite")));
        }
        if spec.domain.is_empty() {
            return Ok(Self { kind: spec.kind, domain: spec.domain.clone(), range: spec.range, mapping: Mapping::Empty });
        }

        let (domain, mapping) = match (spec.kind, &spec.domain) {
            (ScaleKind::Linear, Domain::Numeric(a, b)) => {
                let (mut d0, mut d1) = finite_bounds(*a, *b)?;
                if d0 == d1 {
                    log::debug!("degenerate linear domain at {d0}; widening to a unit interval");
                    d0 -= 0.5;
                    d1 += 0.5;
                }
                if spec.nice {
                    (d0, d1) = nice_linear(d0, d1, NICE_COUNT);
                }
                (Domain::Numeric(d0, d1), Mapping::Linear { d0, d1 })
            }
            (ScaleKind::Log, Domain::Numeric(a, b)) => {
                let (d0, d1) = finite_bounds(*a, *b)?;
                if d0 <= 0.0 || d1 <= 0.0 {
                    return Err(ChartError::domain(format!(
                        "log scale domain must be strictly positive, got [{d0}, {d1}]"
                    )));
                }
                let (mut l0, mut l1) = (d0.log10(), d1.log10());
                if l0 == l1 {
                    log::debug!("degenerate log domain at {d0}; widening to one decade");
                    l0 -= 0.5;
                    l1 += 0.5;
                }
                if spec.nice {
                    if l0 <= l1 {
                        (l0, l1) = (l0.floor(), l1.ceil());
                    } else {
                        (l0, l1) = (l0.ceil(), l1.floor());
                    }
                }
                (Domain::Numeric(10f64.powf(l0), 10f64.powf(l1)), Mapping::Log { l0, l1 })
            }
            (ScaleKind::Time, Domain::Time(a, b)) => {
                time_mapping(a.timestamp_millis() as f64, b.timestamp_millis() as f64, spec.nice)?
            }
            (ScaleKind::Time, Domain::Numeric(a, b)) => {
                let (a, b) = finite_bounds(*a, *b)?;
                time_mapping(a, b, spec.nice)?
            }
            (ScaleKind::Band, Domain::Categories(keys)) => {
                if !(0.0..1.0).contains(&spec.padding) {
                    return Err(ChartError::config(format!("band padding {} must be in [0, 1)", spec.padding)));
                }
                let mut categories = Vec::with_capacity(keys.len());
                let mut index = HashMap::with_capacity(keys.len());
                for k in keys {
                    if !index.contains_key(k) {
                        index.insert(k.clone(), categories.len());
                        categories.push(k.clone());
                    }
                }
                (Domain::Categories(categories.clone()), Mapping::Band { categories, index, padding: spec.padding })
            }
            (kind, domain) => {
                return Err(ChartError::config(format!("{kind:?} scale cannot use domain {domain:?}")));
            }
        };

        Ok(Self { kind: spec.kind, domain, range: spec.range, mapping })
    }

    pub fn kind(&self) -> ScaleKind {
        self.kind
    }

    /// Effective domain (after nicing and degenerate widening).
    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn range(&self) -> (f32, f32) {
        self.range
    }

    /// Width of the pixel range, regardless of direction.
    pub fn range_extent(&self) -> f32 {
        (self.range.1 - self.range.0).abs()
    }

    fn midpoint(&self) -> f32 {
        (self.range.0 + self.range.1) * 0.5
    }

    /// Band categories in slot order; `None` for continuous scales.
    pub fn categories(&self) -> Option<&[String]> {
        match &self.mapping {
            Mapping::Band { categories, .. } => Some(categories),
            _ => None,
        }
    }

    fn band_step(&self, n: usize) -> f32 {
        if n == 0 { 0.0 } else { self.range_extent() / n as f32 }
    }

    /// Slot width for band scales (0 for an empty band); `None` for continuous scales.
    pub fn bandwidth(&self) -> Option<f32> {
        match &self.mapping {
            Mapping::Band { categories, padding, .. } => {
                Some(self.band_step(categories.len()) * (1.0 - *padding as f32))
            }
            Mapping::Empty if self.kind == ScaleKind::Band => Some(0.0),
            _ => None,
        }
    }

    /// Leading (smaller-coordinate) edge of the slot at `i`.
    fn band_edge(&self, i: usize, n: usize, padding: f64) -> f32 {
        let step = self.band_step(n);
        let lo = self.range.0.min(self.range.1);
        let slot = if self.range.1 < self.range.0 { n - 1 - i } else { i };
        lo + step * slot as f32 + step * padding as f32 * 0.5
    }

    /// Map a raw number. Time scales read it as epoch milliseconds, band scales as a slot index.
    pub fn map(&self, v: f64) -> f32 {
        let (r0, r1) = self.range;
        let lerp = |t: f64| -> f32 { r0 + (t as f32) * (r1 - r0) };
        match &self.mapping {
            Mapping::Empty => self.midpoint(),
            Mapping::Linear { d0, d1 } => lerp((v - d0) / (d1 - d0)),
            Mapping::Time { t0, t1 } => lerp((v - t0) / (t1 - t0)),
            Mapping::Log { l0, l1 } => lerp((v.max(1e-300).log10() - l0) / (l1 - l0)),
            Mapping::Band { categories, padding, .. } => {
                let n = categories.len();
                let i = (v.max(0.0).floor() as usize).min(n.saturating_sub(1));
                self.band_edge(i, n, *padding)
            }
        }
    }

    /// Pixel position for `value`. Band scales return the slot's leading edge.
    pub fn position(&self, value: &XValue) -> Result<f32> {
        match (&self.mapping, value) {
            (Mapping::Empty, _) => Ok(self.midpoint()),
            (Mapping::Linear { .. }, XValue::Number(v)) => Ok(self.map(*v)),
            (Mapping::Log { .. }, XValue::Number(v)) => {
                if *v <= 0.0 {
                    return Err(ChartError::data_shape(format!("log scale cannot place non-positive value {v}")));
                }
                Ok(self.map(*v))
            }
            (Mapping::Time { .. }, XValue::Time(t)) => Ok(self.map(t.timestamp_millis() as f64)),
            (Mapping::Time { .. }, XValue::Number(ms)) => Ok(self.map(*ms)),
            (Mapping::Band { categories, index, padding }, XValue::Category(key)) => index
                .get(key)
                .map(|&i| self.band_edge(i, categories.len(), *padding))
                .ok_or_else(|| ChartError::data_shape(format!("unknown category '{key}'"))),
            (_, other) => Err(ChartError::data_shape(format!("{:?} scale cannot place value {other}", self.kind))),
        }
    }

    /// Position of the slot center for band scales, plain position otherwise.
    pub fn center(&self, value: &XValue) -> Result<f32> {
        let p = self.position(value)?;
        Ok(p + self.bandwidth().unwrap_or(0.0) * 0.5)
    }

    /// Pixel -> domain value for continuous scales.
    pub fn invert(&self, px: f32) -> Option<f64> {
        let (r0, r1) = self.range;
        let t = if r1 == r0 { 0.0 } else { ((px - r0) / (r1 - r0)) as f64 };
        match &self.mapping {
            Mapping::Linear { d0, d1 } => Some(d0 + t * (d1 - d0)),
            Mapping::Time { t0, t1 } => Some(t0 + t * (t1 - t0)),
            Mapping::Log { l0, l1 } => Some(10f64.powf(l0 + t * (l1 - l0))),
            Mapping::Empty | Mapping::Band { .. } => None,
        }
    }

    /// Calendar interval used for time ticks at `count`; `None` for other kinds.
    pub fn time_interval(&self, count: usize) -> Option<TimeInterval> {
        match &self.mapping {
            Mapping::Time { t0, t1 } => Some(TimeInterval::for_span((t1 - t0).abs(), count)),
            _ => None,
        }
    }
}

fn finite_bounds(a: f64, b: f64) -> Result<(f64, f64)> {
    if !a.is_finite() || !b.is_finite() {
        return Err(ChartError::domain(format!("domain bounds [{a}, {b}] must be finite")));
    }
    Ok((a, b))
}

fn time_mapping(mut t0: f64, mut t1: f64, nice: bool) -> Result<(Domain, Mapping)> {
    if t0 == t1 {
        log::debug!("degenerate time domain at {t0}ms; widening to one day");
        t0 -= HALF_DAY_MS;
        t1 += HALF_DAY_MS;
    }
    if nice {
        let interval = TimeInterval::for_span((t1 - t0).abs(), NICE_COUNT);
        let (lo, hi) = (t0.min(t1), t0.max(t1));
        let (nlo, nhi) = (interval.floor_ms(lo), interval.ceil_ms(hi));
        if t0 <= t1 { (t0, t1) = (nlo, nhi) } else { (t0, t1) = (nhi, nlo) }
    }
    let start = ms_to_datetime(t0)?;
    let end = ms_to_datetime(t1)?;
    Ok((Domain::Time(start, end), Mapping::Time { t0, t1 }))
}

fn ms_to_datetime(ms: f64) -> Result<DateTime<Utc>> {
    Utc.timestamp_millis_opt(ms.round() as i64)
        .single()
        .ok_or_else(|| ChartError::domain(format!("timestamp {ms}ms is out of range")))
}

// ---- nice numbers ------------------------------------------------------------

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

fn step_factor(error: f64) -> f64 {
    if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    }
}

/// Signed tick increment: positive is the step itself, negative is `-1/step` (keeps
/// fractional steps exact).
fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let factor = step_factor(step / 10f64.powf(power));
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -(10f64.powf(-power)) / factor
    }
}

/// Round `[d0, d1]` outward to multiples of the tick step, keeping direction.
fn nice_linear(d0: f64, d1: f64, count: usize) -> (f64, f64) {
    let reversed = d1 < d0;
    let (mut start, mut stop) = if reversed { (d1, d0) } else { (d0, d1) };
    let mut prestep = f64::NAN;
    for _ in 0..10 {
        let step = tick_increment(start, stop, count);
        if step == prestep {
            break;
        } else if step > 0.0 {
            start = (start / step).floor() * step;
            stop = (stop / step).ceil() * step;
        } else if step < 0.0 {
            start = (start * step).ceil() / step;
            stop = (stop * step).floor() / step;
        } else {
            break;
        }
        prestep = step;
    }
    if reversed { (stop, start) } else { (start, stop) }
}

/// Ascending nice ticks within `[min(a,b), max(a,b)]`.
pub fn linear_ticks(a: f64, b: f64, count: usize) -> Vec<f64> {
    if count == 0 || !a.is_finite() || !b.is_finite() {
        return Vec::new();
    }
    if a == b {
        return vec![a];
    }
    let (start, stop) = if a < b { (a, b) } else { (b, a) };
    let step = (stop - start) / count as f64;
    let power = step.log10().floor();
    let factor = step_factor(step / 10f64.powf(power));

    if power < 0.0 {
        let inc = 10f64.powf(-power) / factor;
        let mut i1 = (start * inc).round() as i64;
        let mut i2 = (stop * inc).round() as i64;
        if (i1 as f64) / inc < start { i1 += 1; }
        if (i2 as f64) / inc > stop { i2 -= 1; }
        (i1..=i2).map(|i| i as f64 / inc).collect()
    } else {
        let inc = 10f64.powf(power) * factor;
        let mut i1 = (start / inc).round() as i64;
        let mut i2 = (stop / inc).round() as i64;
        if (i1 as f64) * inc < start { i1 += 1; }
        if (i2 as f64) * inc > stop { i2 -= 1; }
        (i1..=i2).map(|i| i as f64 * inc).collect()
    }
}

/// Step between consecutive linear ticks for `count`, used for label precision.
pub fn linear_tick_step(a: f64, b: f64, count: usize) -> f64 {
    match tick_increment(a.min(b), a.max(b), count) {
        s if s < 0.0 => -1.0 / s,
        s => s,
    }
}

fn pow10(k: i32) -> f64 {
    if k >= 0 { 10f64.powi(k) } else { 1.0 / 10f64.powi(-k) }
}

fn log_ticks(l0: f64, l1: f64, count: usize) -> Vec<f64> {
    let (lo, hi) = if l0 <= l1 { (l0, l1) } else { (l1, l0) };
    let (min, max) = (10f64.powf(lo), 10f64.powf(hi));
    let tolerance = 1e-9 * max;
    let i = lo.floor() as i32;
    let j = hi.ceil() as i32;
    let mut out = Vec::new();
    if ((j - i) as usize) < count {
        for k in i..=j {
            for m in 1..=9 {
                let v = m as f64 * pow10(k);
                if v >= min - tolerance && v <= max + tolerance {
                    out.push(v);
                }
            }
        }
    } else {
        let every = ((j - i) as usize).div_ceil(count.max(1)).max(1);
        for k in (i..=j).step_by(every) {
            let v = pow10(k);
            if v >= min - tolerance && v <= max + tolerance {
                out.push(v);
            }
        }
    }
    out
}

// ---- calendar intervals --------------------------------------------------------

const SECOND_MS: f64 = 1_000.0;
const MINUTE_MS: f64 = 60.0 * SECOND_MS;
const HOUR_MS: f64 = 60.0 * MINUTE_MS;
const DAY_MS: f64 = 24.0 * HOUR_MS;
const HALF_DAY_MS: f64 = 12.0 * HOUR_MS;
const WEEK_MS: f64 = 7.0 * DAY_MS;
const MONTH_MS: f64 = 30.0 * DAY_MS;
const YEAR_MS: f64 = 365.0 * DAY_MS;

/// Calendar-aware tick interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeInterval {
    Millisecond(i64),
    Second(i64),
    Minute(i64),
    Hour(i64),
    Day(i64),
    Week,
    Month(i64),
    Year(i64),
}

const TICK_INTERVALS: [(TimeInterval, f64); 17] = [
    (TimeInterval::Second(1), SECOND_MS),
    (TimeInterval::Second(5), 5.0 * SECOND_MS),
    (TimeInterval::Second(15), 15.0 * SECOND_MS),
    (TimeInterval::Second(30), 30.0 * SECOND_MS),
    (TimeInterval::Minute(1), MINUTE_MS),
    (TimeInterval::Minute(5), 5.0 * MINUTE_MS),
    (TimeInterval::Minute(15), 15.0 * MINUTE_MS),
    (TimeInterval::Minute(30), 30.0 * MINUTE_MS),
    (TimeInterval::Hour(1), HOUR_MS),
    (TimeInterval::Hour(3), 3.0 * HOUR_MS),
    (TimeInterval::Hour(6), 6.0 * HOUR_MS),
    (TimeInterval::Hour(12), 12.0 * HOUR_MS),
    (TimeInterval::Day(1), DAY_MS),
    (TimeInterval::Day(2), 2.0 * DAY_MS),
    (TimeInterval::Week, WEEK_MS),
    (TimeInterval::Month(1), MONTH_MS),
    (TimeInterval::Month(3), 3.0 * MONTH_MS),
];

impl TimeInterval {
    /// Interval whose duration is closest (by ratio) to `span_ms / count`.
    pub fn for_span(span_ms: f64, count: usize) -> Self {
        let target = span_ms / count.max(1) as f64;
        if target < SECOND_MS {
            let step = linear_tick_step(0.0, span_ms, count).max(1.0);
            return TimeInterval::Millisecond(step as i64);
        }
        if target > YEAR_MS {
            let step = linear_tick_step(0.0, span_ms / YEAR_MS, count).max(1.0);
            return TimeInterval::Year(step.round() as i64);
        }
        let mut prev = TICK_INTERVALS[0];
        for &(interval, dur) in &TICK_INTERVALS {
            if dur >= target {
                return if target / prev.1 < dur / target { prev.0 } else { interval };
            }
            prev = (interval, dur);
        }
        if target / prev.1 < YEAR_MS / target { prev.0 } else { TimeInterval::Year(1) }
    }

    /// Largest boundary of this interval at or before `t`.
    pub fn floor(&self, t: DateTime<Utc>) -> DateTime<Utc> {
        let ymd = |y: i32, m: u32, d: u32| Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).single().unwrap_or(t);
        let midnight = ymd(t.year(), t.month(), t.day());
        match *self {
            TimeInterval::Millisecond(n) => {
                let ms = t.timestamp_millis();
                Utc.timestamp_millis_opt(ms - ms.rem_euclid(n.max(1))).single().unwrap_or(t)
            }
            TimeInterval::Second(n) => {
                let s = t.timestamp();
                Utc.timestamp_opt(s - s.rem_euclid(n.max(1)), 0).single().unwrap_or(t)
            }
            TimeInterval::Minute(n) => {
                let m = t.minute() as i64;
                midnight + Duration::hours(t.hour() as i64) + Duration::minutes(m - m % n.max(1))
            }
            TimeInterval::Hour(n) => {
                let h = t.hour() as i64;
                midnight + Duration::hours(h - h % n.max(1))
            }
            TimeInterval::Day(n) => {
                let d = t.day() as i64 - 1;
                ymd(t.year(), t.month(), 1) + Duration::days(d - d % n.max(1))
            }
            TimeInterval::Week => midnight - Duration::days(t.weekday().num_days_from_sunday() as i64),
            TimeInterval::Month(n) => {
                let m0 = t.month0() as i64;
                ymd(t.year(), (m0 - m0 % n.max(1)) as u32 + 1, 1)
            }
            TimeInterval::Year(n) => {
                let y = t.year() as i64;
                ymd((y - y.rem_euclid(n.max(1))) as i32, 1, 1)
            }
        }
    }

    /// Next boundary after `t`, assuming `t` is already on a boundary.
    pub fn advance(&self, t: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let add_months = |n: i64| -> Option<DateTime<Utc>> {
            let total = t.year() as i64 * 12 + t.month0() as i64 + n;
            let (y, m) = (total.div_euclid(12) as i32, total.rem_euclid(12) as u32 + 1);
            Utc.with_ymd_and_hms(y, m, 1, 0, 0, 0).single()
        };
        match *self {
            TimeInterval::Millisecond(n) => t.checked_add_signed(Duration::milliseconds(n.max(1))),
            TimeInterval::Second(n) => t.checked_add_signed(Duration::seconds(n.max(1))),
            TimeInterval::Minute(n) => t.checked_add_signed(Duration::minutes(n.max(1))),
            TimeInterval::Hour(n) => t.checked_add_signed(Duration::hours(n.max(1))),
            TimeInterval::Day(n) => {
                let next = t.checked_add_signed(Duration::days(n.max(1)))?;
                // Day multiples restart at the first of each month.
                if next.month() != t.month() { Some(self.floor(next)) } else { Some(next) }
            }
            TimeInterval::Week => t.checked_add_signed(Duration::days(7)),
            TimeInterval::Month(n) => add_months(n.max(1)),
            TimeInterval::Year(n) => add_months(12 * n.max(1)),
        }
    }

    fn floor_ms(&self, ms: f64) -> f64 {
        match Utc.timestamp_millis_opt(ms.floor() as i64).single() {
            Some(t) => self.floor(t).timestamp_millis() as f64,
            None => ms,
        }
    }

    fn ceil_ms(&self, ms: f64) -> f64 {
        let Some(t) = Utc.timestamp_millis_opt(ms.ceil() as i64).single() else { return ms };
        let f = self.floor(t);
        if f == t {
            return ms;
        }
        self.advance(f).map(|n| n.timestamp_millis() as f64).unwrap_or(ms)
    }

    /// Calendar-aligned instants within `[start, end]`, ascending.
    pub fn range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<DateTime<Utc>> {
        let (start, end) = if start <= end { (start, end) } else { (end, start) };
        let mut out = Vec::new();
        let mut t = self.floor(start);
        while t <= end {
            if t >= start {
                out.push(t);
            }
            match self.advance(t) {
                Some(next) if next > t => t = next,
                _ => break,
            }
        }
        out
    }
}

// ---- ticks ---------------------------------------------------------------------

/// Representative domain values for axis labels, ascending. Band scales return their
/// categories and ignore `count`.
pub fn generate_ticks(scale: &Scale, count: usize) -> Vec<XValue> {
    match &scale.mapping {
        Mapping::Empty => Vec::new(),
        Mapping::Linear { d0, d1 } => linear_ticks(*d0, *d1, count).into_iter().map(XValue::Number).collect(),
        Mapping::Log { l0, l1 } => log_ticks(*l0, *l1, count).into_iter().map(XValue::Number).collect(),
        Mapping::Time { t0, t1 } => {
            if count == 0 {
                return Vec::new();
            }
            let interval = TimeInterval::for_span((t1 - t0).abs(), count);
            match (ms_to_datetime(*t0), ms_to_datetime(*t1)) {
                (Ok(a), Ok(b)) => interval.range(a, b).into_iter().map(XValue::Time).collect(),
                _ => Vec::new(),
            }
        }
        Mapping::Band { categories, .. } => categories.iter().cloned().map(XValue::Category).collect(),
    }
}

/// Explicit ticks override generation; they must be placeable on the scale.
pub fn resolve_ticks(scale: &Scale, count: usize, explicit: Option<&[XValue]>) -> Result<Vec<XValue>> {
    let Some(ticks) = explicit else {
        return Ok(generate_ticks(scale, count));
    };
    for t in ticks {
        let fits = match (scale.kind, t) {
            (ScaleKind::Linear, XValue::Number(_)) => true,
            (ScaleKind::Log, XValue::Number(v)) => *v > 0.0,
            (ScaleKind::Time, XValue::Time(_) | XValue::Number(_)) => true,
            (ScaleKind::Band, XValue::Category(_)) => true,
            _ => false,
        };
        if !fits {
            return Err(ChartError::config(format!("explicit tick {t} is not supported by a {:?} scale", scale.kind)));
        }
    }
    Ok(ticks.to_vec())
}
