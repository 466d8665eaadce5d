// File: crates/chart-core/src/animation.rs
// Summary: Progress driver: easing curves, timing, per-entity transitions, scalar tweens, clocks.
// Notes:
// - Times are milliseconds as f64, read from a `Clock`.
// - Sampling is pull-based; nothing here runs on its own.

use std::cell::Cell;
use std::collections::HashMap;
use std::hash::Hash;
use std::time::Instant;

/// Easing curve mapping linear time in [0, 1] to progress.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Easing {
    Linear,
    /// cubic-bezier(0.42, 0, 1, 1)
    Ease,
    /// In-out composition of `Ease`.
    EaseInOut,
    #[default]
    EaseInOutCubic,
    /// Bounces into place at the end.
    Bounce,
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::Ease => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    cubic_bezier(0.42, 0.0, 1.0, 1.0, t * 2.0) / 2.0
                } else {
                    1.0 - cubic_bezier(0.42, 0.0, 1.0, 1.0, (1.0 - t) * 2.0) / 2.0
                }
            }
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::Bounce => bounce_out(t),
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, t),
        }
    }
}

fn bounce_out(t: f32) -> f32 {
    const N: f32 = 7.5625;
    const D: f32 = 2.75;
    if t < 1.0 / D {
        N * t * t
    } else if t < 2.0 / D {
        let t = t - 1.5 / D;
        N * t * t + 0.75
    } else if t < 2.5 / D {
        let t = t - 2.25 / D;
        N * t * t + 0.9375
    } else {
        let t = t - 2.625 / D;
        N * t * t + 0.984375
    }
}

/// CSS-style cubic bezier through (0,0), (x1,y1), (x2,y2), (1,1); solves x(s) = t then returns y(s).
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, t: f32) -> f32 {
    if t <= 0.0 || t >= 1.0 {
        return t;
    }
    let coord = |a: f32, b: f32, s: f32| {
        let u = 1.0 - s;
        3.0 * u * u * s * a + 3.0 * u * s * s * b + s * s * s
    };
    let slope = |a: f32, b: f32, s: f32| {
        let u = 1.0 - s;
        3.0 * u * u * a + 6.0 * u * s * (b - a) + 3.0 * s * s * (1.0 - b)
    };

    let mut s = t;
    for _ in 0..8 {
        let err = coord(x1, x2, s) - t;
        if err.abs() < 1e-6 {
            return coord(y1, y2, s);
        }
        let d = slope(x1, x2, s);
        if d.abs() < 1e-6 {
            break;
        }
        s -= err / d;
    }

    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    s = t;
    for _ in 0..32 {
        let x = coord(x1, x2, s);
        if (x - t).abs() < 1e-6 {
            break;
        }
        if x < t { lo = s } else { hi = s }
        s = (lo + hi) * 0.5;
    }
    coord(y1, y2, s)
}

/// Duration, delay and curve of one transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub easing: Easing,
    /// When false, progress is 1 immediately.
    pub animated: bool,
}

impl Default for Timing {
    fn default() -> Self {
        Self { duration_ms: 500.0, delay_ms: 0.0, easing: Easing::EaseInOutCubic, animated: true }
    }
}

impl Timing {
    pub fn new(duration_ms: f64, easing: Easing) -> Self {
        Self { duration_ms, easing, ..Default::default() }
    }

    pub fn with_delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn immediate() -> Self {
        Self { animated: false, ..Default::default() }
    }

    /// This timing, delayed until `previous` has finished.
    pub fn after(mut self, previous: &Timing) -> Self {
        if previous.animated {
            self.delay_ms += previous.delay_ms + previous.duration_ms;
        }
        self
    }

    /// Time from start until progress reaches 1.
    pub fn total_ms(&self) -> f64 {
        if self.animated { self.delay_ms + self.duration_ms } else { 0.0 }
    }
}

/// A started transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub started_at: f64,
    pub timing: Timing,
}

impl Transition {
    pub fn new(started_at: f64, timing: Timing) -> Self {
        Self { started_at, timing }
    }

    /// Linear time fraction in [0, 1], before easing.
    pub fn linear_progress(&self, now: f64) -> f32 {
        if !self.timing.animated {
            return 1.0;
        }
        let elapsed = now - self.started_at - self.timing.delay_ms.max(0.0);
        if elapsed <= 0.0 {
            return 0.0;
        }
        if self.timing.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed / self.timing.duration_ms).min(1.0) as f32
    }

    /// Eased progress at `now`.
    pub fn progress(&self, now: f64) -> f32 {
        let t = self.linear_progress(now);
        if t >= 1.0 { 1.0 } else { self.timing.easing.apply(t) }
    }

    pub fn is_finished(&self, now: f64) -> bool {
        self.linear_progress(now) >= 1.0
    }
}

/// One progress scalar per entity. Entities without an entry read as fully shown.
#[derive(Debug, Clone)]
pub struct AnimationDriver<K> {
    transitions: HashMap<K, Transition>,
}

impl<K> Default for AnimationDriver<K> {
    fn default() -> Self {
        Self { transitions: HashMap::new() }
    }
}

impl<K: Hash + Eq + std::fmt::Debug> AnimationDriver<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset `entity` to progress 0; a running transition for it is replaced.
    pub fn start(&mut self, entity: K, now: f64, timing: Timing) {
        log::trace!("start transition {entity:?} at {now:.1}ms ({timing:?})");
        self.transitions.insert(entity, Transition::new(now, timing));
    }

    pub fn sample(&self, entity: &K, now: f64) -> f32 {
        self.transitions.get(entity).map_or(1.0, |t| t.progress(now))
    }

    pub fn is_running(&self, entity: &K, now: f64) -> bool {
        self.transitions.get(entity).is_some_and(|t| !t.is_finished(now))
    }

    /// True while any entity is still moving.
    pub fn any_running(&self, now: f64) -> bool {
        self.transitions.values().any(|t| !t.is_finished(now))
    }

    pub fn transition(&self, entity: &K) -> Option<&Transition> {
        self.transitions.get(entity)
    }

    pub fn destroy(&mut self, entity: &K) -> bool {
        self.transitions.remove(entity).is_some()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

/// Scalar tween that retargets from whatever value is currently displayed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueAnimation {
    from: f64,
    to: f64,
    transition: Option<Transition>,
}

impl ValueAnimation {
    pub fn new(initial: f64) -> Self {
        Self { from: initial, to: initial, transition: None }
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    pub fn value_at(&self, now: f64) -> f64 {
        match &self.transition {
            Some(t) => self.from + (self.to - self.from) * t.progress(now) as f64,
            None => self.to,
        }
    }

    pub fn set_target(&mut self, target: f64, now: f64, timing: Timing) {
        self.from = self.value_at(now);
        self.to = target;
        self.transition = Some(Transition::new(now, timing));
    }

    pub fn is_running(&self, now: f64) -> bool {
        self.transition.is_some_and(|t| !t.is_finished(now))
    }
}

/// Source of frame time.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Monotonic wall clock measured from construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Clock advanced by hand; used for tests and offline frame rendering.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self { now: Cell::new(start_ms) }
    }

    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }

    pub fn set(&self, ms: f64) {
        self.now.set(ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}
