// File: crates/chart-core/src/curve.rs
// Summary: Curve interpolators connecting scaled points (linear, monotone-x, step variants).

use crate::geometry::{Path, Point};

/// How consecutive points are connected. Every curve passes through every point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Curve {
    Linear,
    /// Cubic segments with tangents that preserve monotonicity in y.
    #[default]
    MonotoneX,
    /// Horizontal to the midpoint, vertical, horizontal.
    Step,
    /// Vertical first, then horizontal.
    StepBefore,
    /// Horizontal first, then vertical.
    StepAfter,
}

impl Curve {
    /// Append `points` to `path`. With `continue_path` the first point is joined with a
    /// line instead of starting a new contour.
    pub fn trace(&self, points: &[Point], path: &mut Path, continue_path: bool) {
        let Some(&first) = points.first() else { return };
        if continue_path && !path.is_empty() {
            path.line_to(first);
        } else {
            path.move_to(first);
        }
        if points.len() == 1 {
            return;
        }
        match self {
            Curve::Linear => {
                for &p in &points[1..] {
                    path.line_to(p);
                }
            }
            Curve::MonotoneX if points.len() == 2 => {
                path.line_to(points[1]);
            }
            Curve::MonotoneX => trace_monotone(points, path),
            Curve::Step | Curve::StepBefore | Curve::StepAfter => {
                for w in points.windows(2) {
                    let (a, b) = (w[0], w[1]);
                    match self {
                        Curve::StepBefore => {
                            path.line_to(Point::new(a.x, b.y));
                        }
                        Curve::StepAfter => {
                            path.line_to(Point::new(b.x, a.y));
                        }
                        _ => {
                            let mx = (a.x + b.x) * 0.5;
                            path.line_to(Point::new(mx, a.y));
                            path.line_to(Point::new(mx, b.y));
                        }
                    }
                    path.line_to(b);
                }
            }
        }
    }
}

fn sign(v: f32) -> f32 {
    if v < 0.0 { -1.0 } else { 1.0 }
}

fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() { v } else { 0.0 }
}

/// Fritsch-Carlson style tangents (Steffen's limiter), one cubic per segment.
fn trace_monotone(points: &[Point], path: &mut Path) {
    let n = points.len();
    let h: Vec<f32> = points.windows(2).map(|w| w[1].x - w[0].x).collect();
    let s: Vec<f32> = points
        .windows(2)
        .zip(&h)
        .map(|(w, &h)| if h == 0.0 { 0.0 } else { (w[1].y - w[0].y) / h })
        .collect();

    let mut m = vec![0.0f32; n];
    for i in 1..n - 1 {
        let (h0, h1, s0, s1) = (h[i - 1], h[i], s[i - 1], s[i]);
        let p = (s0 * h1 + s1 * h0) / (h0 + h1);
        let t = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
        m[i] = finite_or_zero(t);
    }
    m[0] = if h[0] == 0.0 { m[1] } else { finite_or_zero((3.0 * s[0] - m[1]) / 2.0) };
    m[n - 1] = if h[n - 2] == 0.0 { m[n - 2] } else { finite_or_zero((3.0 * s[n - 2] - m[n - 2]) / 2.0) };

    for i in 0..n - 1 {
        let (a, b) = (points[i], points[i + 1]);
        let dx = h[i] / 3.0;
        path.cubic_to(
            Point::new(a.x + dx, a.y + dx * m[i]),
            Point::new(b.x - dx, b.y - dx * m[i + 1]),
            b,
        );
    }
}
