// File: crates/chart-core/tests/bars.rs
// Purpose: Bar geometry: widths, baseline growth with progress, ramp colors, labels, orientation.

use chart_core::{
    build_bars, create_scale, BarStyle, ChartError, Color, DataPoint, Domain, Orientation, Scale, ScaleKind,
    ScaleSpec, Size, TextAlign,
};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

fn vertical_scales() -> (Scale, Scale) {
    let x = create_scale(ScaleKind::Band, Domain::categories(["A", "B", "C"]), (0.0, 300.0), Some(0.0)).unwrap();
    let y = ScaleSpec::new(ScaleKind::Linear, Domain::numeric(0.0, 100.0), (200.0, 0.0)).with_nice(false).build().unwrap();
    (x, y)
}

fn data() -> Vec<DataPoint> {
    vec![DataPoint::new("A", 50.0), DataPoint::new("B", 100.0), DataPoint::new("C", 0.0)]
}

const PLOT: Size = Size::new(300.0, 200.0);

#[test]
fn width_follows_spacing_rule() {
    let (x, y) = vertical_scales();
    let g = build_bars(&data(), &x, &y, PLOT, &BarStyle::default(), 1.0, 1.0).expect("bars");
    assert!(approx(g.bar_width, 70.0));
    let a = &g.bars[0].rect.rect;
    assert!(approx(a.left, 15.0) && approx(a.right, 85.0));

    let fixed = BarStyle { bar_width: Some(20.0), ..BarStyle::default() };
    let g = build_bars(&data(), &x, &y, PLOT, &fixed, 1.0, 1.0).expect("bars");
    assert!(approx(g.bars[1].rect.rect.width(), 20.0));
}

#[test]
fn bars_grow_from_baseline_with_progress() {
    let (x, y) = vertical_scales();
    let full = build_bars(&data(), &x, &y, PLOT, &BarStyle::default(), 1.0, 1.0).expect("bars");
    let half = build_bars(&data(), &x, &y, PLOT, &BarStyle::default(), 0.5, 1.0).expect("bars");
    let zero = build_bars(&data(), &x, &y, PLOT, &BarStyle::default(), 0.0, 1.0).expect("bars");
    assert!(approx(full.baseline, 200.0));
    for i in 0..3 {
        let f = full.bars[i].rect.rect.height();
        let h = half.bars[i].rect.rect.height();
        assert!(approx(h, f * 0.5), "bar {i}: {h} vs {f}");
        assert!(approx(zero.bars[i].rect.rect.height(), 0.0));
        assert!(approx(full.bars[i].rect.rect.bottom, 200.0));
    }
    assert!(approx(full.bars[0].rect.rect.top, 100.0));
    assert!(approx(full.bars[1].rect.rect.top, 0.0));
}

#[test]
fn negative_values_hang_below_zero() {
    let x = create_scale(ScaleKind::Band, Domain::categories(["A"]), (0.0, 100.0), Some(0.0)).unwrap();
    let y = ScaleSpec::new(ScaleKind::Linear, Domain::numeric(-50.0, 50.0), (200.0, 0.0)).with_nice(false).build().unwrap();
    let g = build_bars(&[DataPoint::new("A", -50.0)], &x, &y, PLOT, &BarStyle::default(), 1.0, 1.0).expect("bars");
    assert!(approx(g.baseline, 100.0));
    let r = g.bars[0].rect.rect;
    assert!(approx(r.top, 100.0) && approx(r.bottom, 200.0));
}

#[test]
fn baseline_clamps_into_range_when_zero_is_outside_domain() {
    let x = create_scale(ScaleKind::Band, Domain::categories(["A"]), (0.0, 100.0), Some(0.0)).unwrap();
    let y = ScaleSpec::new(ScaleKind::Linear, Domain::numeric(10.0, 20.0), (200.0, 0.0)).with_nice(false).build().unwrap();
    let g = build_bars(&[DataPoint::new("A", 15.0)], &x, &y, PLOT, &BarStyle::default(), 1.0, 1.0).expect("bars");
    assert!(approx(g.baseline, 200.0));
}

#[test]
fn colors_follow_ramp_unless_point_overrides() {
    let (x, y) = vertical_scales();
    let mut pts = data();
    let g = build_bars(&pts, &x, &y, PLOT, &BarStyle::default(), 1.0, 1.0).expect("bars");
    assert_eq!(g.bars[0].color, Color::rgb(128, 128, 128));
    assert_eq!(g.bars[1].color, Color::WHITE);
    assert_eq!(g.bars[2].color, Color::BLACK);

    let red = Color::rgb(255, 0, 0);
    pts[1] = pts[1].clone().with_color(red);
    let g = build_bars(&pts, &x, &y, PLOT, &BarStyle::default(), 1.0, 1.0).expect("bars");
    assert_eq!(g.bars[1].color, red);
}

#[test]
fn three_stop_ramp_hits_middle_color_halfway() {
    let (x, y) = vertical_scales();
    let green = Color::rgb(0, 255, 0);
    let style = BarStyle { colors: vec![Color::BLACK, green, Color::WHITE], ..BarStyle::default() };
    let g = build_bars(&data(), &x, &y, PLOT, &style, 1.0, 1.0).expect("bars");
    assert_eq!(g.bars[0].color, green);
}

#[test]
fn labels_sit_above_bars_and_fade_in() {
    let (x, y) = vertical_scales();
    let g = build_bars(&data(), &x, &y, PLOT, &BarStyle::default(), 1.0, 0.0).expect("bars");
    let l = &g.bars[0].label;
    assert_eq!(l.text, "50");
    assert_eq!(l.align, TextAlign::Center);
    assert!(approx(l.anchor.x, 50.0) && approx(l.anchor.y, 95.0));
    assert_eq!(l.opacity, 0.0);

    let g = build_bars(&data(), &x, &y, PLOT, &BarStyle::default(), 1.0, 1.0).expect("bars");
    assert_eq!(g.bars[0].label.opacity, 1.0);

    let labelled = vec![DataPoint::new("A", 12.5).with_label("dozen")];
    let g = build_bars(&labelled, &x, &y, PLOT, &BarStyle::default(), 1.0, 1.0).expect("bars");
    assert_eq!(g.bars[0].label.text, "dozen");
}

#[test]
fn horizontal_bars_swap_axes() {
    let x = ScaleSpec::new(ScaleKind::Linear, Domain::numeric(0.0, 100.0), (0.0, 300.0)).with_nice(false).build().unwrap();
    let y = create_scale(ScaleKind::Band, Domain::categories(["A", "B"]), (0.0, 200.0), Some(0.0)).unwrap();
    let style = BarStyle { orientation: Orientation::Horizontal, ..BarStyle::default() };
    let pts = vec![DataPoint::new("A", 50.0), DataPoint::new("B", 100.0)];
    let g = build_bars(&pts, &x, &y, PLOT, &style, 1.0, 1.0).expect("bars");

    assert!(approx(g.baseline, 0.0));
    assert!(approx(g.bar_width, 70.0));
    let a = g.bars[0].rect.rect;
    assert!(approx(a.left, 0.0) && approx(a.right, 150.0));
    assert!(approx(a.top, 15.0) && approx(a.bottom, 85.0));
    let l = &g.bars[0].label;
    assert_eq!(l.align, TextAlign::Left);
    assert!(approx(l.anchor.x, 155.0) && approx(l.anchor.y, 50.0 + 70.0 / 4.0));
}

#[test]
fn corner_radius_is_limited_by_bar_size() {
    let (x, y) = vertical_scales();
    let g = build_bars(&data(), &x, &y, PLOT, &BarStyle::default(), 0.05, 1.0).expect("bars");
    let b = &g.bars[0].rect;
    assert!(b.radius <= b.rect.height() * 0.5 + 1e-6);
}

#[test]
fn invalid_style_is_config_error() {
    let (x, y) = vertical_scales();
    let bad = BarStyle { spacing: 1.0, ..BarStyle::default() };
    assert!(matches!(build_bars(&data(), &x, &y, PLOT, &bad, 1.0, 1.0), Err(ChartError::Config(_))));
    let bad = BarStyle { bar_width: Some(-2.0), ..BarStyle::default() };
    assert!(matches!(build_bars(&data(), &x, &y, PLOT, &bad, 1.0, 1.0), Err(ChartError::Config(_))));
    let bad = BarStyle { colors: Vec::new(), ..BarStyle::default() };
    assert!(matches!(build_bars(&data(), &x, &y, PLOT, &bad, 1.0, 1.0), Err(ChartError::Config(_))));
}

#[test]
fn empty_data_yields_no_bars() {
    let (x, y) = vertical_scales();
    let g = build_bars(&[], &x, &y, PLOT, &BarStyle::default(), 1.0, 1.0).expect("bars");
    assert!(g.bars.is_empty());
    assert!(approx(g.baseline, 200.0));
}

#[test]
fn unknown_category_is_data_error() {
    let (x, y) = vertical_scales();
    let pts = vec![DataPoint::new("Z", 1.0)];
    assert!(matches!(build_bars(&pts, &x, &y, PLOT, &BarStyle::default(), 1.0, 1.0), Err(ChartError::DataShape(_))));
}
