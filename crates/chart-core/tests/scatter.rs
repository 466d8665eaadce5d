// File: crates/chart-core/tests/scatter.rs
// Purpose: Scatter dots, value labels, per-point overrides and keyed rise transitions.

use chart_core::{build_scatter, Color, DataPoint, Domain, Point, Scale, ScaleKind, ScaleSpec, ScatterStyle, XValue};

fn scales() -> (Scale, Scale) {
    let x = ScaleSpec::new(ScaleKind::Linear, Domain::numeric(0.0, 4.0), (0.0, 400.0)).with_nice(false).build().unwrap();
    let y = ScaleSpec::new(ScaleKind::Linear, Domain::numeric(0.0, 4.0), (400.0, 0.0)).with_nice(false).build().unwrap();
    (x, y)
}

#[test]
fn dots_use_style_defaults() {
    let (x, y) = scales();
    let data = vec![DataPoint::new(1.0, 2.0), DataPoint::new(3.0, 1.5)];
    let style = ScatterStyle::default();
    let g = build_scatter(&data, &x, &y, &style).unwrap();

    assert_eq!(g.dots.len(), 2);
    assert_eq!(g.dots[0].center, Point::new(100.0, 200.0));
    assert_eq!(g.dots[0].radius, 5.0);
    assert_eq!(g.dots[0].color, style.dot_color);

    let label = g.dots[1].label.as_ref().expect("label");
    assert_eq!(label.text, "1.5");
    assert_eq!(label.anchor, Point::new(300.0, 240.0));
}

#[test]
fn point_overrides_win() {
    let (x, y) = scales();
    let red = Color::rgb(255, 0, 0);
    let green = Color::rgb(0, 255, 0);
    let data = vec![
        DataPoint::new(0.0, 0.0).with_color(red),
        DataPoint::new(1.0, 1.0).with_color(red).with_dot(9.0, green),
        DataPoint::new(2.0, 2.0).with_label("peak"),
    ];
    let g = build_scatter(&data, &x, &y, &ScatterStyle::default()).unwrap();
    assert_eq!(g.dots[0].color, red);
    assert_eq!((g.dots[1].radius, g.dots[1].color), (9.0, green));
    assert_eq!(g.dots[2].label.as_ref().map(|l| l.text.as_str()), Some("peak"));
}

#[test]
fn labels_can_be_hidden() {
    let (x, y) = scales();
    let style = ScatterStyle { show_labels: false, ..ScatterStyle::default() };
    let g = build_scatter(&[DataPoint::new(1.0, 1.0)], &x, &y, &style).unwrap();
    assert!(g.dots[0].label.is_none());
}

#[test]
fn empty_data_builds_nothing() {
    let (x, y) = scales();
    let g = build_scatter(&[], &x, &y, &ScatterStyle::default()).unwrap();
    assert!(g.dots.is_empty());
}

#[test]
fn matched_dots_move_from_previous_position() {
    let (x, y) = scales();
    let style = ScatterStyle::default();
    let before = build_scatter(&[DataPoint::new(1.0, 0.0)], &x, &y, &style).unwrap();
    let after = build_scatter(&[DataPoint::new(1.0, 2.0)], &x, &y, &style).unwrap();

    let mid = after.blend_from(&before, 400.0, 0.5);
    assert_eq!(mid.dots[0].center, Point::new(100.0, 300.0));
    let label = mid.dots[0].label.as_ref().unwrap();
    assert_eq!(label.anchor, Point::new(100.0, 290.0));

    assert_eq!(after.blend_from(&before, 400.0, 1.0), after);
}

#[test]
fn new_dots_rise_from_baseline() {
    let (x, y) = scales();
    let style = ScatterStyle::default();
    let before = build_scatter(&[DataPoint::new(1.0, 2.0)], &x, &y, &style).unwrap();
    let after = build_scatter(&[DataPoint::new(3.0, 2.0)], &x, &y, &style).unwrap();

    let start = after.blend_from(&before, 400.0, 0.0);
    assert_eq!(start.dots[0].center, Point::new(300.0, 400.0));
    let mid = after.blend_from(&before, 400.0, 0.25);
    assert_eq!(mid.dots[0].center, Point::new(300.0, 350.0));
}

#[test]
fn lookup_keeps_first_dot_per_key() {
    let (x, y) = scales();
    let g = build_scatter(
        &[DataPoint::new(1.0, 1.0), DataPoint::new(1.0, 3.0), DataPoint::new(0.0, 2.0)],
        &x,
        &y,
        &ScatterStyle::default(),
    )
    .unwrap();
    let lookup = g.y_by_key();
    assert_eq!(lookup.len(), 2);
    assert_eq!(lookup.get(&XValue::from(1.0).key()), Some(&300.0));
    assert_eq!(lookup.get(&XValue::from(-0.0).key()), Some(&200.0));
}

#[test]
fn blending_many_dots_matches_each_by_key() {
    let (x, y) = scales();
    let n = 20_000;
    let xs: Vec<(f64, f64)> = (0..n).map(|i| (i as f64 * 4.0 / n as f64, 0.0)).collect();
    let before = build_scatter(&chart_core::series::points_from_xy(&xs), &x, &y, &ScatterStyle::default()).unwrap();
    let moved: Vec<(f64, f64)> = xs.iter().map(|&(x, _)| (x, 4.0)).collect();
    let after = build_scatter(&chart_core::series::points_from_xy(&moved), &x, &y, &ScatterStyle::default()).unwrap();

    let mid = after.blend_from(&before, 0.0, 0.5);
    assert!(mid.dots.iter().all(|d| d.center.y == 200.0));
}
