// File: crates/chart-core/tests/scales.rs
// Purpose: Scale construction and value -> pixel mapping for every scale kind.

use chart_core::scale::TimeInterval;
use chart_core::{create_scale, ChartError, Domain, ScaleKind, ScaleSpec, XValue};
use chrono::{Duration, TimeZone, Timelike, Utc};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn linear_maps_endpoints_and_midpoint() {
    let s = create_scale(ScaleKind::Linear, Domain::numeric(0.0, 100.0), (0.0, 200.0), None).expect("scale");
    assert!(approx(s.map(0.0), 0.0));
    assert!(approx(s.map(100.0), 200.0));
    assert!(approx(s.map(50.0), 100.0));
    assert_eq!(s.invert(100.0), Some(50.0));
}

#[test]
fn linear_without_nice_keeps_domain_ends_on_range_ends() {
    let s = ScaleSpec::new(ScaleKind::Linear, Domain::numeric(3.0, 97.0), (10.0, 410.0))
        .with_nice(false)
        .build()
        .expect("scale");
    assert!(approx(s.map(3.0), 10.0));
    assert!(approx(s.map(97.0), 410.0));
    assert_eq!(s.domain(), &Domain::Numeric(3.0, 97.0));
}

#[test]
fn linear_nice_rounds_outward() {
    let s = create_scale(ScaleKind::Linear, Domain::numeric(0.13, 9.87), (0.0, 100.0), None).expect("scale");
    assert_eq!(s.domain(), &Domain::Numeric(0.0, 10.0));

    // reversed domains stay reversed
    let r = create_scale(ScaleKind::Linear, Domain::numeric(9.87, 0.13), (0.0, 100.0), None).expect("scale");
    assert_eq!(r.domain(), &Domain::Numeric(10.0, 0.0));
}

#[test]
fn degenerate_linear_domain_widens_around_value() {
    let s = create_scale(ScaleKind::Linear, Domain::numeric(5.0, 5.0), (0.0, 100.0), None).expect("scale");
    assert!(approx(s.map(5.0), 50.0));
    match s.domain() {
        Domain::Numeric(a, b) => assert!(*a < 5.0 && *b > 5.0),
        other => panic!("unexpected domain {other:?}"),
    }
}

#[test]
fn non_finite_bounds_are_domain_errors() {
    let err = create_scale(ScaleKind::Linear, Domain::numeric(0.0, f64::NAN), (0.0, 1.0), None).unwrap_err();
    assert!(matches!(err, ChartError::Domain(_)));
    let err = create_scale(ScaleKind::Linear, Domain::numeric(f64::NEG_INFINITY, 1.0), (0.0, 1.0), None).unwrap_err();
    assert!(matches!(err, ChartError::Domain(_)));
}

#[test]
fn non_finite_range_is_config_error() {
    let err = create_scale(ScaleKind::Linear, Domain::numeric(0.0, 1.0), (0.0, f32::INFINITY), None).unwrap_err();
    assert!(matches!(err, ChartError::Config(_)));
}

#[test]
fn kind_and_domain_must_agree() {
    let err = create_scale(ScaleKind::Linear, Domain::categories(["a"]), (0.0, 1.0), None).unwrap_err();
    assert!(matches!(err, ChartError::Config(_)));
    let err = create_scale(ScaleKind::Band, Domain::numeric(0.0, 1.0), (0.0, 1.0), None).unwrap_err();
    assert!(matches!(err, ChartError::Config(_)));
}

#[test]
fn log_scale_maps_decades_evenly() {
    let s = create_scale(ScaleKind::Log, Domain::numeric(1.0, 1000.0), (0.0, 300.0), None).expect("scale");
    assert!(approx(s.map(1.0), 0.0));
    assert!(approx(s.map(10.0), 100.0));
    assert!(approx(s.map(100.0), 200.0));
    assert!(approx(s.map(1000.0), 300.0));
}

#[test]
fn log_nice_rounds_to_whole_decades() {
    let s = create_scale(ScaleKind::Log, Domain::numeric(3.0, 420.0), (0.0, 300.0), None).expect("scale");
    match s.domain() {
        Domain::Numeric(a, b) => {
            assert!((a - 1.0).abs() < 1e-9);
            assert!((b - 1000.0).abs() < 1e-6);
        }
        other => panic!("unexpected domain {other:?}"),
    }
}

#[test]
fn log_scale_rejects_non_positive_bounds_and_values() {
    let err = create_scale(ScaleKind::Log, Domain::numeric(0.0, 10.0), (0.0, 1.0), None).unwrap_err();
    assert!(matches!(err, ChartError::Domain(_)));
    let err = create_scale(ScaleKind::Log, Domain::numeric(-5.0, 10.0), (0.0, 1.0), None).unwrap_err();
    assert!(matches!(err, ChartError::Domain(_)));

    let s = create_scale(ScaleKind::Log, Domain::numeric(1.0, 10.0), (0.0, 1.0), None).expect("scale");
    assert!(matches!(s.position(&XValue::Number(-1.0)), Err(ChartError::DataShape(_))));
}

#[test]
fn band_slots_without_padding() {
    let s = create_scale(ScaleKind::Band, Domain::categories(["A", "B", "C"]), (0.0, 300.0), Some(0.0)).expect("scale");
    assert_eq!(s.bandwidth(), Some(100.0));
    assert!(approx(s.position(&"A".into()).unwrap(), 0.0));
    assert!(approx(s.position(&"B".into()).unwrap(), 100.0));
    assert!(approx(s.position(&"C".into()).unwrap(), 200.0));
    assert!(approx(s.center(&"B".into()).unwrap(), 150.0));
}

#[test]
fn band_slots_and_gaps_fill_the_range() {
    let keys = ["A", "B", "C", "D"];
    let s = create_scale(ScaleKind::Band, Domain::categories(keys), (0.0, 400.0), None).expect("scale");
    let bw = s.bandwidth().expect("band");
    assert!(approx(bw, 90.0));

    let mut prev_end = f32::NEG_INFINITY;
    let mut covered = 0.0;
    for k in keys {
        let start = s.position(&k.into()).expect("known key");
        assert!(start >= prev_end, "slots overlap at {k}");
        prev_end = start + bw;
        covered += bw;
    }
    let gaps = (400.0 - covered) / keys.len() as f32;
    assert!(approx(covered + gaps * keys.len() as f32, 400.0));
    assert!(approx(s.position(&"A".into()).unwrap(), 5.0));
}

#[test]
fn band_reversed_range_reverses_slot_order() {
    let s = create_scale(ScaleKind::Band, Domain::categories(["A", "B", "C"]), (300.0, 0.0), Some(0.0)).expect("scale");
    assert!(approx(s.position(&"A".into()).unwrap(), 200.0));
    assert!(approx(s.position(&"C".into()).unwrap(), 0.0));
}

#[test]
fn band_dedups_keys_and_rejects_unknown_ones() {
    let s = create_scale(ScaleKind::Band, Domain::categories(["A", "B", "A"]), (0.0, 200.0), Some(0.0)).expect("scale");
    assert_eq!(s.categories(), Some(&["A".to_string(), "B".to_string()][..]));
    assert!(matches!(s.position(&"Z".into()), Err(ChartError::DataShape(_))));
    assert!(matches!(s.position(&XValue::Number(1.0)), Err(ChartError::DataShape(_))));
}

#[test]
fn band_padding_out_of_range_is_config_error() {
    let err = create_scale(ScaleKind::Band, Domain::categories(["A"]), (0.0, 1.0), Some(1.0)).unwrap_err();
    assert!(matches!(err, ChartError::Config(_)));
}

#[test]
fn empty_band_maps_to_range_midpoint() {
    let s = create_scale(ScaleKind::Band, Domain::Categories(Vec::new()), (0.0, 300.0), None).expect("scale");
    assert_eq!(s.bandwidth(), Some(0.0));
    assert!(approx(s.position(&"anything".into()).unwrap(), 150.0));
    assert!(chart_core::generate_ticks(&s, 5).is_empty());
}

#[test]
fn time_scale_maps_instants_linearly() {
    let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let t1 = Utc.with_ymd_and_hms(2024, 1, 11, 0, 0, 0).unwrap();
    let s = create_scale(ScaleKind::Time, Domain::time(t0, t1), (0.0, 100.0), None).expect("scale");
    let mid = Utc.with_ymd_and_hms(2024, 1, 6, 0, 0, 0).unwrap();
    assert!(approx(s.position(&mid.into()).unwrap(), 50.0));
    assert_eq!(s.domain(), &Domain::Time(t0, t1));
    assert!(matches!(s.position(&"x".into()), Err(ChartError::DataShape(_))));
}

#[test]
fn degenerate_time_domain_spans_one_day() {
    let t = Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap();
    let s = create_scale(ScaleKind::Time, Domain::time(t, t), (0.0, 100.0), None).expect("scale");
    assert_eq!(s.domain(), &Domain::Time(t - Duration::hours(12), t + Duration::hours(12)));
    assert!(approx(s.position(&t.into()).unwrap(), 50.0));
}

#[test]
fn time_nice_lands_on_calendar_boundaries() {
    let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 3, 17, 0).unwrap();
    let t1 = Utc.with_ymd_and_hms(2024, 1, 1, 20, 41, 0).unwrap();
    let s = ScaleSpec::new(ScaleKind::Time, Domain::time(t0, t1), (0.0, 100.0)).build().expect("scale");
    match s.domain() {
        Domain::Time(a, b) => {
            assert!(*a <= t0 && *b >= t1);
            assert_eq!((a.minute(), a.second()), (0, 0));
            assert_eq!((b.minute(), b.second()), (0, 0));
        }
        other => panic!("unexpected domain {other:?}"),
    }
}

#[test]
fn time_interval_picks_closest_calendar_step() {
    assert_eq!(TimeInterval::for_span(10.0 * 86_400_000.0, 5), TimeInterval::Day(2));
    assert_eq!(TimeInterval::for_span(60.0 * 60_000.0, 4), TimeInterval::Minute(15));
    assert!(matches!(TimeInterval::for_span(500.0, 5), TimeInterval::Millisecond(_)));
    assert!(matches!(TimeInterval::for_span(20.0 * 365.0 * 86_400_000.0, 5), TimeInterval::Year(_)));
}
