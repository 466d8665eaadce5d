// File: crates/chart-core/src/geometry.rs
// Summary: Pixel-space primitives: points, path command lists, rectangles.

/// Point in pixel space.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn lerp(self, to: Self, t: f32) -> Self {
        Self::new(self.x + (to.x - self.x) * t, self.y + (to.y - self.y) * t)
    }

    /// Point at `radius` from `self` along `angle` (radians, y down).
    pub fn polar(self, radius: f32, angle: f32) -> Self {
        Self::new(self.x + radius * angle.cos(), self.y + radius * angle.sin())
    }

    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CubicTo(Point, Point, Point),
    /// Circular arc around `center`; angles in radians, positive sweep is clockwise on screen.
    Arc { center: Point, radius: f32, start_angle: f32, sweep: f32 },
    Close,
}

impl PathCommand {
    /// Same command kind as `other`.
    pub fn same_kind(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    fn lerp(&self, to: &Self, t: f32) -> Self {
        match (*self, *to) {
            (PathCommand::MoveTo(a), PathCommand::MoveTo(b)) => PathCommand::MoveTo(a.lerp(b, t)),
            (PathCommand::LineTo(a), PathCommand::LineTo(b)) => PathCommand::LineTo(a.lerp(b, t)),
            (PathCommand::CubicTo(a1, a2, a3), PathCommand::CubicTo(b1, b2, b3)) => {
                PathCommand::CubicTo(a1.lerp(b1, t), a2.lerp(b2, t), a3.lerp(b3, t))
            }
            (
                PathCommand::Arc { center: c0, radius: r0, start_angle: s0, sweep: w0 },
                PathCommand::Arc { center: c1, radius: r1, start_angle: s1, sweep: w1 },
            ) => PathCommand::Arc {
                center: c0.lerp(c1, t),
                radius: r0 + (r1 - r0) * t,
                start_angle: s0 + (s1 - s0) * t,
                sweep: w0 + (w1 - w0) * t,
            },
            (_, other) => other,
        }
    }
}

/// Ordered list of drawing commands. Renderers translate it to their native path type.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(p));
        self
    }

    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.commands.push(PathCommand::LineTo(p));
        self
    }

    pub fn cubic_to(&mut self, c1: Point, c2: Point, end: Point) -> &mut Self {
        self.commands.push(PathCommand::CubicTo(c1, c2, end));
        self
    }

    pub fn arc(&mut self, center: Point, radius: f32, start_angle: f32, sweep: f32) -> &mut Self {
        self.commands.push(PathCommand::Arc { center, radius, start_angle, sweep });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Last pen position, if any command moved it.
    pub fn current_point(&self) -> Option<Point> {
        self.commands.iter().rev().find_map(|c| match *c {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) | PathCommand::CubicTo(_, _, p) => Some(p),
            PathCommand::Arc { center, radius, start_angle, sweep } => Some(center.polar(radius, start_angle + sweep)),
            PathCommand::Close => None,
        })
    }

    /// Same command sequence shape, ignoring coordinates.
    pub fn same_topology(&self, other: &Self) -> bool {
        self.commands.len() == other.commands.len()
            && self.commands.iter().zip(&other.commands).all(|(a, b)| a.same_kind(b))
    }

    /// Copy shifted by `(dx, dy)`.
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        let mv = |p: Point| p.offset(dx, dy);
        let commands = self
            .commands
            .iter()
            .map(|c| match *c {
                PathCommand::MoveTo(p) => PathCommand::MoveTo(mv(p)),
                PathCommand::LineTo(p) => PathCommand::LineTo(mv(p)),
                PathCommand::CubicTo(a, b, p) => PathCommand::CubicTo(mv(a), mv(b), mv(p)),
                PathCommand::Arc { center, radius, start_angle, sweep } => {
                    PathCommand::Arc { center: mv(center), radius, start_angle, sweep }
                }
                PathCommand::Close => PathCommand::Close,
            })
            .collect();
        Self { commands }
    }

    /// Per-command blend; callers check `same_topology` first.
    pub fn lerp(&self, to: &Self, t: f32) -> Self {
        Self { commands: self.commands.iter().zip(&to.commands).map(|(a, b)| a.lerp(b, t)).collect() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }

    /// Same rectangle with left <= right and top <= bottom.
    pub fn normalized(&self) -> Self {
        Self::from_ltrb(
            self.left.min(self.right),
            self.top.min(self.bottom),
            self.left.max(self.right),
            self.top.max(self.bottom),
        )
    }

    pub fn center(&self) -> Point {
        Point::new((self.left + self.right) * 0.5, (self.top + self.bottom) * 0.5)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct RoundedRect {
    pub rect: Rect,
    pub radius: f32,
}

impl RoundedRect {
    /// Corner radius is limited to half the shorter side.
    pub fn new(rect: Rect, radius: f32) -> Self {
        let r = rect.normalized();
        let max_r = (r.width().min(r.height()) * 0.5).max(0.0);
        Self { rect: r, radius: clamp(radius, 0.0, max_r) }
    }

    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        let r = self.rect;
        Self { rect: Rect::from_ltrb(r.left + dx, r.top + dy, r.right + dx, r.bottom + dy), radius: self.radius }
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

/// Horizontal alignment of a text label relative to its anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Positioned text. The anchor is the baseline origin before alignment is applied.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Label {
    pub text: String,
    pub anchor: Point,
    pub align: TextAlign,
    pub opacity: f32,
}

impl Label {
    pub fn new(text: impl Into<String>, anchor: Point, align: TextAlign) -> Self {
        Self { text: text.into(), anchor, align, opacity: 1.0 }
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }
}

/// Compact value text: integers without decimals, others with at most two.
pub fn format_value(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        let s = format!("{v:.2}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
