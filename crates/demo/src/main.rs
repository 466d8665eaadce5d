// File: crates/demo/src/main.rs
// Summary: Demo renders animated frame sequences (bars, line/area, time series, scatter, pie, radar, gauge) to PNGs.

use anyhow::{Context, Result};
use chart_core::animation::{AnimationDriver, Clock, Easing, ManualClock, Timing, ValueAnimation};
use chart_core::paint;
use chart_core::{
    build_gauge, build_pie, build_radar, AreaStyle, AxisConfig, BarStyle, Chart, Color, DataPoint, FontSpec,
    GaugeStyle, Layer, Layout, LineStyle, PieDatum, PieStyle, RadarDataSet, RadarPoint, RadarStyle, ScaleKind,
    ScatterStyle, Theme,
};
use chart_render_skia::{render_png, RenderOptions, TextShaper};
use chrono::{Duration, TimeZone, Utc};
use std::path::{Path, PathBuf};

/// Milliseconds between rendered frames.
const FRAME_STEP_MS: f64 = 100.0;

fn main() -> Result<()> {
    // Optional `x,y` CSV feeds the line demo; otherwise a generated wave is used
    let series = match std::env::args().nth(1) {
        Some(raw) => {
            let path = PathBuf::from(raw);
            let points = load_xy_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            println!("Loaded {} points from {}", points.len(), path.display());
            points
        }
        None => (0..12).map(|i| (i as f64, 40.0 + 25.0 * (i as f64 * 0.6).sin())).collect(),
    };
    if series.is_empty() {
        anyhow::bail!("no points loaded; expected `x,y` columns with a header row.");
    }

    let theme = chart_core::theme::find(&std::env::var("CHART_THEME").unwrap_or_default());
    println!("Theme: {}", theme.name);
    let shaper = TextShaper::new();
    let out_dir = PathBuf::from("target/out");

    bar_frames(&theme, &shaper, &out_dir)?;
    line_frames(&theme, &shaper, &out_dir, &series)?;
    time_frames(&theme, &shaper, &out_dir)?;
    scatter_frames(&theme, &shaper, &out_dir)?;
    pie_frames(&theme, &shaper, &out_dir)?;
    radar_frames(&theme, &shaper, &out_dir)?;
    gauge_frames(&theme, &shaper, &out_dir)?;
    Ok(())
}

fn options(theme: &Theme, width: f32, height: f32) -> RenderOptions {
    RenderOptions { width: width as i32, height: height as i32, background: theme.background, draw_labels: true }
}

fn frame_path(out_dir: &Path, name: &str, frame: usize) -> PathBuf {
    out_dir.join(name).join(format!("{name}_{frame:03}.png"))
}

/// Render `chart` every frame step from the clock's current time until `until_ms`.
#[allow(clippy::too_many_arguments)]
fn render_chart_frames(
    chart: &mut Chart,
    clock: &ManualClock,
    until_ms: f64,
    opts: &RenderOptions,
    shaper: &TextShaper,
    out_dir: &Path,
    name: &str,
    first_frame: usize,
) -> Result<usize> {
    let mut frame = first_frame;
    while clock.now_ms() <= until_ms {
        let now = clock.now_ms();
        render_png(opts, shaper, frame_path(out_dir, name, frame), |surface| {
            chart.render(surface, shaper, now)?;
            Ok(())
        })?;
        frame += 1;
        clock.advance(FRAME_STEP_MS);
    }
    Ok(frame)
}

fn bar_frames(theme: &Theme, shaper: &TextShaper, out_dir: &Path) -> Result<()> {
    let clock = ManualClock::new(0.0);
    let layout = Layout::new(480.0, 320.0);
    let mut chart = Chart::new(layout).with_axes(
        AxisConfig::new(ScaleKind::Band).themed(theme).with_title("Day"),
        AxisConfig::new(ScaleKind::Linear).themed(theme).with_title("Visits"),
    );
    chart.theme = theme.clone();
    let data = [("Mon", 12.0), ("Tue", 30.0), ("Wed", 22.0), ("Thu", 41.0), ("Fri", 35.0)]
        .into_iter()
        .map(|(k, v)| DataPoint::new(k, v))
        .collect();
    let style = BarStyle { colors: theme.bar_ramp.clone(), ..BarStyle::default() };
    chart.add_layer(Layer::bar(data, style), clock.now_ms())?;

    let opts = options(theme, layout.width, layout.height);
    let frames = render_chart_frames(&mut chart, &clock, 1200.0, &opts, shaper, out_dir, "bars", 0)?;
    println!("Wrote {} bar frames", frames);
    Ok(())
}

fn line_frames(theme: &Theme, shaper: &TextShaper, out_dir: &Path, series: &[(f64, f64)]) -> Result<()> {
    let clock = ManualClock::new(0.0);
    let layout = Layout::new(480.0, 320.0);
    let mut chart = Chart::new(layout);
    chart.theme = theme.clone();
    chart.x_axis = AxisConfig::new(ScaleKind::Linear).themed(theme);
    chart.y_axis = AxisConfig::new(ScaleKind::Linear).themed(theme);

    let first = chart_core::series::points_from_xy(series);
    let area = chart.add_layer(
        Layer::area(first.clone(), AreaStyle { color: theme.area_fill, ..AreaStyle::default() }),
        clock.now_ms(),
    )?;
    let line = chart.add_layer(
        Layer::line(first, LineStyle { color: theme.line_stroke, show_dots: true, ..LineStyle::default() }),
        clock.now_ms(),
    )?;
    let opts = options(theme, layout.width, layout.height);
    let next = render_chart_frames(&mut chart, &clock, 600.0, &opts, shaper, out_dir, "line", 0)?;

    // Retarget both layers; same point count so the paths morph
    let shifted: Vec<(f64, f64)> = series.iter().map(|&(x, y)| (x, y * 0.6 + 10.0)).collect();
    let second = chart_core::series::points_from_xy(&shifted);
    chart.set_data(area, second.clone(), clock.now_ms())?;
    chart.set_data(line, second, clock.now_ms())?;
    let frames = render_chart_frames(&mut chart, &clock, 1400.0, &opts, shaper, out_dir, "line", next)?;
    println!("Wrote {} line frames", frames);
    Ok(())
}

fn time_frames(theme: &Theme, shaper: &TextShaper, out_dir: &Path) -> Result<()> {
    let clock = ManualClock::new(0.0);
    let layout = Layout::new(480.0, 320.0);
    let mut chart = Chart::new(layout).with_axes(
        AxisConfig::new(ScaleKind::Time).themed(theme).with_title("Date"),
        AxisConfig::new(ScaleKind::Linear).themed(theme).with_title("Load"),
    );
    chart.theme = theme.clone();
    let start = Utc
        .with_ymd_and_hms(2024, 3, 1, 0, 0, 0)
        .single()
        .context("invalid start date")?;
    let data: Vec<DataPoint> = (0..21)
        .map(|d| DataPoint::new(start + Duration::days(d), 50.0 + 30.0 * (d as f64 * 0.45).cos()))
        .collect();
    let style = LineStyle { color: theme.line_stroke, ..LineStyle::default() };
    chart.add_layer(Layer::line(data, style).with_timing(Timing::new(700.0, Easing::Ease)), clock.now_ms())?;

    let opts = options(theme, layout.width, layout.height);
    let frames = render_chart_frames(&mut chart, &clock, 800.0, &opts, shaper, out_dir, "time", 0)?;
    println!("Wrote {} time series frames", frames);
    Ok(())
}

fn scatter_frames(theme: &Theme, shaper: &TextShaper, out_dir: &Path) -> Result<()> {
    let clock = ManualClock::new(0.0);
    let layout = Layout::new(480.0, 320.0);
    let mut chart = Chart::new(layout);
    chart.theme = theme.clone();
    let style = ScatterStyle { dot_color: theme.dot, ..ScatterStyle::default() };
    let id = chart.add_layer(
        Layer::scatter(chart_core::series::points_from_xy(&[(1.0, 4.0), (2.0, 9.0), (3.0, 6.5), (4.0, 12.0)]), style),
        clock.now_ms(),
    )?;
    let opts = options(theme, layout.width, layout.height);
    let next = render_chart_frames(&mut chart, &clock, 600.0, &opts, shaper, out_dir, "scatter", 0)?;

    let moved = chart_core::series::points_from_xy(&[(1.0, 7.0), (2.0, 3.5), (3.0, 10.0), (5.0, 8.0)]);
    chart.set_data(id, moved, clock.now_ms())?;
    let frames = render_chart_frames(&mut chart, &clock, 1200.0, &opts, shaper, out_dir, "scatter", next)?;
    println!("Wrote {} scatter frames", frames);
    Ok(())
}

fn pie_frames(theme: &Theme, shaper: &TextShaper, out_dir: &Path) -> Result<()> {
    let clock = ManualClock::new(0.0);
    let data = vec![
        PieDatum::new(30.0, Color::rgb(0x21, 0x96, 0xf3), "Rent"),
        PieDatum::new(45.0, Color::rgb(0x4c, 0xaf, 0x50), "Food"),
        PieDatum::new(25.0, Color::rgb(0xff, 0xc1, 0x07), "Fun"),
    ];
    let style = PieStyle::default();
    let geom = build_pie(&data, &style)?;
    let mut driver = AnimationDriver::new();
    driver.start("pie", clock.now_ms(), Timing::new(800.0, Easing::EaseInOut));

    let opts = options(theme, style.size, style.size);
    let font = FontSpec { bold: true, ..FontSpec::numeric(12.0) };
    let mut frame = 0;
    while clock.now_ms() <= 1000.0 {
        let progress = driver.sample(&"pie", clock.now_ms());
        render_png(&opts, shaper, frame_path(out_dir, "pie", frame), |surface| {
            paint::draw_pie(surface, shaper, &geom, progress, theme.value_label, &font);
            Ok(())
        })?;
        frame += 1;
        clock.advance(FRAME_STEP_MS);
    }
    println!("Wrote {} pie frames", frame);
    Ok(())
}

fn radar_frames(theme: &Theme, shaper: &TextShaper, out_dir: &Path) -> Result<()> {
    let clock = ManualClock::new(0.0);
    let keys = ["Speed", "Power", "Range", "Armor", "Agility"];
    let dataset = |values: [f64; 5]| {
        RadarDataSet::new(keys.iter().zip(values).map(|(k, v)| RadarPoint::new(*k, v)).collect())
    };
    let datasets = vec![
        dataset([80.0, 65.0, 90.0, 40.0, 70.0]).with_fill(theme.radar_fill, 0.3),
        dataset([50.0, 85.0, 45.0, 75.0, 60.0]).with_fill(Color::rgb(0xff, 0x52, 0x52), 0.3),
    ];
    let style = RadarStyle {
        grid_color: theme.radar_grid,
        axis_color: theme.radar_axis,
        label_color: theme.axis_label,
        ..RadarStyle::default()
    };

    // Second data set starts after the first finished
    let mut driver = AnimationDriver::new();
    let timing = Timing::default();
    driver.start(0usize, clock.now_ms(), timing);
    driver.start(1usize, clock.now_ms(), Timing::default().after(&timing));

    let opts = options(theme, style.width, style.height);
    let mut frame = 0;
    while clock.now_ms() <= 1200.0 {
        let now = clock.now_ms();
        let progress: Vec<f32> = (0..datasets.len()).map(|i| driver.sample(&i, now)).collect();
        let geom = build_radar(&datasets, &style, &progress)?;
        render_png(&opts, shaper, frame_path(out_dir, "radar", frame), |surface| {
            paint::draw_radar(surface, shaper, &geom, &style);
            Ok(())
        })?;
        frame += 1;
        clock.advance(FRAME_STEP_MS);
    }
    println!("Wrote {} radar frames", frame);
    Ok(())
}

fn gauge_frames(theme: &Theme, shaper: &TextShaper, out_dir: &Path) -> Result<()> {
    let clock = ManualClock::new(0.0);
    let style = GaugeStyle { track_color: theme.gauge_track, needle_color: theme.gauge_needle, ..GaugeStyle::default() };
    let mut speed = ValueAnimation::new(0.0);
    speed.set_target(120.0, clock.now_ms(), Timing::new(1000.0, Easing::EaseInOutCubic));

    let opts = options(theme, style.width, style.height);
    let mut frame = 0;
    while clock.now_ms() <= 2400.0 {
        let now = clock.now_ms();
        // Ease back down once the first sweep settles
        if now >= 1200.0 && speed.target() > 100.0 {
            speed.set_target(60.0, now, Timing::new(800.0, Easing::Ease));
        }
        let geom = build_gauge(speed.value_at(now), &style)?;
        render_png(&opts, shaper, frame_path(out_dir, "gauge", frame), |surface| {
            paint::draw_gauge(surface, shaper, &geom, &style);
            Ok(())
        })?;
        frame += 1;
        clock.advance(FRAME_STEP_MS);
    }
    println!("Wrote {} gauge frames", frame);
    Ok(())
}

/// Load an `x,y` CSV (header row required). Rows that fail to parse are skipped.
fn load_xy_csv(path: &Path) -> Result<Vec<(f64, f64)>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    println!("Headers: {:?}", headers);
    let idx = |names: &[&str], fallback: usize| headers.iter().position(|h| names.contains(&h.as_str())).unwrap_or(fallback);
    let (i_x, i_y) = (idx(&["x", "time", "index"], 0), idx(&["y", "value", "close"], 1));

    let mut out = Vec::new();
    let mut skipped = 0usize;
    for rec in rdr.records() {
        let rec = rec?;
        let parse = |i: usize| rec.get(i).and_then(|s| s.parse::<f64>().ok()).filter(|v| v.is_finite());
        match (parse(i_x), parse(i_y)) {
            (Some(x), Some(y)) => out.push((x, y)),
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        println!("Skipped {} unparseable rows", skipped);
    }
    Ok(out)
}
