// File: crates/chart-core/src/theme.rs
// Summary: Renderer-agnostic colors, N-stop color ramps, and light/dark theme presets.

use crate::error::{ChartError, Result};

/// 8-bit RGBA color. Renderers convert it to their native type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::from_argb(255, 0, 0, 0);
    pub const WHITE: Self = Self::from_argb(255, 255, 255, 255);
    pub const TRANSPARENT: Self = Self::from_argb(0, 0, 0, 0);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA`.
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.trim().trim_start_matches('#');
        let nibble = |i: usize| -> Result<u8> {
            hex.get(i..i + 1)
                .and_then(|c| u8::from_str_radix(c, 16).ok())
                .ok_or_else(|| ChartError::config(format!("invalid color '{s}'")))
        };
        let byte = |i: usize| -> Result<u8> { Ok(nibble(i)? * 16 + nibble(i + 1)?) };
        match hex.len() {
            3 => Ok(Self::rgb(nibble(0)? * 17, nibble(1)? * 17, nibble(2)? * 17)),
            6 => Ok(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self::from_argb(byte(6)?, byte(0)?, byte(2)?, byte(4)?)),
            _ => Err(ChartError::config(format!("invalid color '{s}'"))),
        }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Alpha as a fraction in [0, 1].
    pub fn alpha_f(&self) -> f32 {
        self.a as f32 / 255.0
    }

    /// Channel-wise linear blend; `t` is clamped to [0, 1].
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 { (a as f32 + (b as f32 - a as f32) * t).round() as u8 };
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }
}

/// Piecewise-linear color ramp over `[domain.0, domain.1]` with evenly spaced stops.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorRamp {
    stops: Vec<Color>,
    domain: (f64, f64),
}

impl ColorRamp {
    pub fn new(stops: Vec<Color>, domain: (f64, f64)) -> Result<Self> {
        if stops.is_empty() {
            return Err(ChartError::config("color ramp requires at least one color"));
        }
        if !domain.0.is_finite() || !domain.1.is_finite() {
            return Err(ChartError::domain("color ramp domain must be finite"));
        }
        Ok(Self { stops, domain })
    }

    pub fn stops(&self) -> &[Color] {
        &self.stops
    }

    /// Color for `value`; values outside the domain clamp to the end stops.
    pub fn color_at(&self, value: f64) -> Color {
        let n = self.stops.len();
        if n == 1 {
            return self.stops[0];
        }
        let (d0, d1) = self.domain;
        let span = d1 - d0;
        let t = if span.abs() < f64::EPSILON { 0.0 } else { ((value - d0) / span).clamp(0.0, 1.0) };
        let pos = t * (n - 1) as f64;
        let i = (pos.floor() as usize).min(n - 2);
        self.stops[i].lerp(self.stops[i + 1], (pos - i as f64) as f32)
    }
}

#[derive(Clone, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub grid: Color,
    pub axis_line: Color,
    pub axis_label: Color,
    pub line_stroke: Color,
    pub area_fill: Color,
    pub bar_ramp: Vec<Color>,
    pub dot: Color,
    pub value_label: Color,
    pub radar_fill: Color,
    pub radar_grid: Color,
    pub radar_axis: Color,
    pub gauge_track: Color,
    pub gauge_needle: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::rgb(0, 0, 0),
            grid: Color::from_argb(51, 255, 255, 255),
            axis_line: Color::WHITE,
            axis_label: Color::WHITE,
            line_stroke: Color::rgb(0x21, 0x96, 0xf3),
            area_fill: Color::rgb(0x21, 0x96, 0xf3),
            bar_ramp: vec![Color::rgb(0x1e, 0x3a, 0x8a), Color::rgb(0x60, 0xa5, 0xfa)],
            dot: Color::rgb(0x21, 0x96, 0xf3),
            value_label: Color::WHITE,
            radar_fill: Color::rgb(0x21, 0x96, 0xf3),
            radar_grid: Color::rgb(0x44, 0x44, 0x44),
            radar_axis: Color::rgb(0x66, 0x66, 0x66),
            gauge_track: Color::rgb(0x33, 0x33, 0x33),
            gauge_needle: Color::rgb(0xff, 0x52, 0x52),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::rgb(250, 250, 252),
            grid: Color::rgb(230, 230, 235),
            axis_line: Color::rgb(60, 60, 70),
            axis_label: Color::rgb(20, 20, 30),
            line_stroke: Color::rgb(32, 120, 200),
            area_fill: Color::rgb(32, 120, 200),
            bar_ramp: vec![Color::rgb(0xbb, 0xde, 0xfb), Color::rgb(0x0d, 0x47, 0xa1)],
            dot: Color::rgb(32, 120, 200),
            value_label: Color::rgb(20, 20, 30),
            radar_fill: Color::rgb(0x21, 0x96, 0xf3),
            radar_grid: Color::rgb(0xee, 0xee, 0xee),
            radar_axis: Color::rgb(0xcc, 0xcc, 0xcc),
            gauge_track: Color::rgb(0xdd, 0xdd, 0xdd),
            gauge_needle: Color::rgb(0xe5, 0x39, 0x35),
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            background: Color::rgb(0x00, 0x2b, 0x36),  // base03
            grid: Color::rgb(0x07, 0x36, 0x42),        // base02
            axis_line: Color::rgb(0x93, 0xa1, 0xa1),   // base1
            axis_label: Color::rgb(0xee, 0xe8, 0xd5),  // base2
            line_stroke: Color::rgb(0x26, 0x8b, 0xd2), // blue
            area_fill: Color::rgb(0x26, 0x8b, 0xd2),
            bar_ramp: vec![Color::rgb(0x2a, 0xa1, 0x98), Color::rgb(0xb5, 0x89, 0x00), Color::rgb(0xdc, 0x32, 0x2f)],
            dot: Color::rgb(0xcb, 0x4b, 0x16),         // orange
            value_label: Color::rgb(0xee, 0xe8, 0xd5),
            radar_fill: Color::rgb(0x26, 0x8b, 0xd2),
            radar_grid: Color::rgb(0x07, 0x36, 0x42),
            radar_axis: Color::rgb(0x58, 0x6e, 0x75),  // base01
            gauge_track: Color::rgb(0x07, 0x36, 0x42),
            gauge_needle: Color::rgb(0xdc, 0x32, 0x2f), // red
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light(), Theme::solarized_dark()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::dark)
}
