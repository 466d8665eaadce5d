// File: crates/chart-core/tests/radar.rs
// Purpose: Radar geometry: vertex placement with progress, grid rings, label offsets, validation.

use chart_core::{build_radar, ChartError, Color, PathCommand, Point, RadarDataSet, RadarPoint, RadarStyle, TextAlign};

fn approx(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
}

fn set(values: &[f64]) -> RadarDataSet {
    const KEYS: [&str; 5] = ["Speed", "Power", "Range", "Armor", "Agility"];
    RadarDataSet::new(values.iter().zip(KEYS).map(|(v, k)| RadarPoint::new(k, *v)).collect())
}

#[test]
fn default_radius_leaves_room_for_labels() {
    assert_eq!(RadarStyle::default().radius(), 95.0);
}

#[test]
fn vertices_scale_with_value_and_progress() {
    let style = RadarStyle::default();
    let g = build_radar(&[set(&[100.0, 50.0, 100.0, 50.0])], &style, &[1.0]).expect("radar");
    let v = &g.polygons[0].vertices;
    assert!(approx(v[0], Point::new(150.0, 55.0)));
    assert!(approx(v[1], Point::new(197.5, 150.0)));

    let half = build_radar(&[set(&[100.0, 50.0, 100.0, 50.0])], &style, &[0.5]).expect("radar");
    assert!(approx(half.polygons[0].vertices[0], Point::new(150.0, 102.5)));

    let zero = build_radar(&[set(&[100.0, 50.0, 100.0, 50.0])], &style, &[0.0]).expect("radar");
    assert!(zero.polygons[0].vertices.iter().all(|p| approx(*p, g.center)));
}

#[test]
fn each_data_set_uses_its_own_progress() {
    let style = RadarStyle::default();
    let g = build_radar(&[set(&[100.0; 4]), set(&[100.0; 4])], &style, &[1.0]).expect("radar");
    // missing progress counts as fully shown
    assert_eq!(g.polygons[0].vertices, g.polygons[1].vertices);

    let g = build_radar(&[set(&[100.0; 4]), set(&[100.0; 4])], &style, &[1.0, 0.0]).expect("radar");
    assert!(approx(g.polygons[1].vertices[0], g.center));
}

#[test]
fn polygon_path_is_closed_ring() {
    let g = build_radar(&[set(&[10.0, 20.0, 30.0])], &RadarStyle::default(), &[1.0]).expect("radar");
    let cmds = g.polygons[0].path.commands();
    assert_eq!(cmds.len(), 4);
    assert!(matches!(cmds[0], PathCommand::MoveTo(_)));
    assert_eq!(cmds[3], PathCommand::Close);
}

#[test]
fn grid_rings_are_evenly_spaced() {
    let g = build_radar(&[set(&[1.0, 2.0, 3.0, 4.0])], &RadarStyle::default(), &[1.0]).expect("radar");
    assert_eq!(g.grid.len(), 5);
    assert_eq!(g.spokes.len(), 4);
    for (i, ring) in g.grid.iter().enumerate() {
        let r = 95.0 * (i + 1) as f32 / 5.0;
        match ring.commands()[0] {
            PathCommand::MoveTo(p) => assert!(approx(p, Point::new(150.0, 150.0 - r))),
            other => panic!("ring starts with {other:?}"),
        }
    }
}

#[test]
fn hidden_parts_are_not_built() {
    let style = RadarStyle { show_grid: false, show_axes: false, show_labels: false, show_values: false, ..RadarStyle::default() };
    let g = build_radar(&[set(&[1.0, 2.0, 3.0])], &style, &[1.0]).expect("radar");
    assert!(g.grid.is_empty() && g.spokes.is_empty());
    assert!(g.axis_labels.is_empty() && g.value_labels.is_empty());
    assert_eq!(g.polygons.len(), 1);
}

#[test]
fn axis_labels_follow_offset_rules() {
    let g = build_radar(&[set(&[1.0, 2.0, 3.0, 4.0])], &RadarStyle::default(), &[1.0]).expect("radar");
    let anchors: Vec<Point> = g.axis_labels.iter().map(|l| l.anchor).collect();
    // top: no shift; right: raised by half the font size; left (angle pi): lowered by the font size
    assert!(approx(anchors[0], Point::new(150.0, 30.0)));
    assert!(approx(anchors[1], Point::new(270.0, 143.0)));
    assert!(approx(anchors[2], Point::new(150.0, 270.0)));
    assert!(approx(anchors[3], Point::new(30.0, 164.0)));
    assert!(g.axis_labels.iter().all(|l| l.align == TextAlign::Left));

    let five = build_radar(&[set(&[1.0, 2.0, 3.0, 4.0, 5.0])], &RadarStyle::default(), &[1.0]).expect("radar");
    let step = std::f32::consts::TAU / 5.0;
    let angle = 3.0 * step - std::f32::consts::FRAC_PI_2;
    let plain = Point::new(150.0, 150.0).polar(120.0, angle);
    assert_eq!(five.axis_labels[3].text, "Armor");
    assert!(approx(five.axis_labels[3].anchor, plain.offset(-25.0, 0.0)));
}

#[test]
fn axis_labels_prefer_explicit_label_text() {
    let ds = RadarDataSet::new(vec![RadarPoint::new("a", 1.0).with_label("Alpha"), RadarPoint::new("b", 2.0)]);
    let g = build_radar(&[ds], &RadarStyle::default(), &[1.0]).expect("radar");
    assert_eq!(g.axis_labels[0].text, "Alpha");
    assert_eq!(g.axis_labels[1].text, "b");
}

#[test]
fn value_labels_follow_animated_vertices() {
    let style = RadarStyle::default();
    let g = build_radar(&[set(&[99.6, 50.0, 100.0])], &style, &[0.5]).expect("radar");
    assert_eq!(g.value_labels[0].text, "100");
    let v = g.polygons[0].vertices[0];
    assert!(approx(g.value_labels[0].anchor, v.offset(0.0, style.value_font_size / 3.0)));
}

#[test]
fn data_set_colors_override_style() {
    let red = Color::rgb(255, 0, 0);
    let ds = set(&[1.0, 2.0, 3.0]).with_fill(red, 0.5).with_stroke(Color::WHITE, 3.0);
    let g = build_radar(&[ds, set(&[1.0, 2.0, 3.0])], &RadarStyle::default(), &[1.0, 1.0]).expect("radar");
    assert_eq!((g.polygons[0].fill, g.polygons[0].opacity), (red, 0.5));
    assert_eq!(g.polygons[0].stroke, Some((Color::WHITE, 3.0)));
    assert_eq!(g.polygons[1].fill, RadarStyle::default().fill_color);
    assert_eq!(g.polygons[1].stroke, None);
}

#[test]
fn invalid_inputs_are_rejected() {
    let style = RadarStyle::default();
    let err = build_radar(&[set(&[1.0, 2.0, 3.0]), set(&[1.0, 2.0])], &style, &[]).unwrap_err();
    assert!(matches!(err, ChartError::DataShape(_)));
    let err = build_radar(&[set(&[1.0, f64::INFINITY, 3.0])], &style, &[]).unwrap_err();
    assert!(matches!(err, ChartError::DataShape(_)));

    let zero_max = RadarStyle { max_value: 0.0, ..RadarStyle::default() };
    assert!(matches!(build_radar(&[set(&[1.0])], &zero_max, &[]), Err(ChartError::Config(_))));
    let no_grid = RadarStyle { grid_count: 0, ..RadarStyle::default() };
    assert!(matches!(build_radar(&[set(&[1.0])], &no_grid, &[]), Err(ChartError::Config(_))));
}

#[test]
fn no_data_sets_build_an_empty_radar() {
    let g = build_radar(&[], &RadarStyle::default(), &[]).expect("radar");
    assert!(g.polygons.is_empty() && g.grid.is_empty());
    assert_eq!(g.radius, 95.0);
}
