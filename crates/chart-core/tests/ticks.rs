// File: crates/chart-core/tests/ticks.rs
// Purpose: Tick generation, explicit tick validation and tick label formatting.

use chart_core::axis::format_ticks;
use chart_core::scale::linear_ticks;
use chart_core::{create_scale, generate_ticks, resolve_ticks, ChartError, Domain, ScaleKind, XValue};
use chrono::{Datelike, TimeZone, Timelike, Utc};

fn numbers(ticks: &[XValue]) -> Vec<f64> {
    ticks.iter().filter_map(XValue::as_number).collect()
}

#[test]
fn linear_ticks_use_nice_steps() {
    assert_eq!(linear_ticks(0.0, 10.0, 5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    assert_eq!(linear_ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    assert_eq!(linear_ticks(0.0, 100.0, 10), (0..=10).map(|i| i as f64 * 10.0).collect::<Vec<_>>());
}

#[test]
fn linear_ticks_are_ascending_for_reversed_input() {
    assert_eq!(linear_ticks(10.0, 0.0, 5), linear_ticks(0.0, 10.0, 5));
}

#[test]
fn linear_ticks_edge_cases() {
    assert!(linear_ticks(0.0, 10.0, 0).is_empty());
    assert_eq!(linear_ticks(3.0, 3.0, 5), vec![3.0]);
    assert!(linear_ticks(0.0, f64::NAN, 5).is_empty());
}

#[test]
fn generated_ticks_are_sorted_and_inside_domain() {
    for (a, b) in [(0.0, 1.0), (-37.0, 412.0), (0.003, 0.0071), (1e6, 3.5e6)] {
        let s = create_scale(ScaleKind::Linear, Domain::numeric(a, b), (0.0, 500.0), None).expect("scale");
        let ticks = numbers(&generate_ticks(&s, 5));
        assert!(!ticks.is_empty());
        assert!(ticks.windows(2).all(|w| w[0] <= w[1]), "not sorted: {ticks:?}");
        let Domain::Numeric(d0, d1) = s.domain().clone() else { panic!("numeric domain") };
        let (lo, hi) = (d0.min(d1), d0.max(d1));
        assert!(ticks.iter().all(|t| *t >= lo - 1e-9 && *t <= hi + 1e-9), "outside [{lo}, {hi}]: {ticks:?}");
    }
}

#[test]
fn log_ticks_include_sub_decade_multiples_when_few_decades() {
    let s = create_scale(ScaleKind::Log, Domain::numeric(1.0, 1000.0), (0.0, 300.0), None).expect("scale");
    let ticks = numbers(&generate_ticks(&s, 10));
    assert_eq!(ticks.len(), 28);
    assert_eq!(ticks.first().copied(), Some(1.0));
    assert!((ticks.last().copied().unwrap_or_default() - 1000.0).abs() < 1e-9);
    assert!(ticks.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn log_ticks_keep_powers_of_ten_over_wide_domains() {
    let s = create_scale(ScaleKind::Log, Domain::numeric(1.0, 1e12), (0.0, 300.0), None).expect("scale");
    let ticks = numbers(&generate_ticks(&s, 4));
    assert!(ticks.len() <= 5);
    for t in ticks {
        let l = t.log10();
        assert!((l - l.round()).abs() < 1e-9, "{t} is not a power of ten");
    }
}

#[test]
fn band_ticks_are_the_categories() {
    let s = create_scale(ScaleKind::Band, Domain::categories(["x", "y", "z"]), (0.0, 90.0), None).expect("scale");
    let ticks = generate_ticks(&s, 2);
    assert_eq!(ticks, vec![XValue::from("x"), XValue::from("y"), XValue::from("z")]);
}

#[test]
fn time_ticks_land_on_calendar_boundaries() {
    let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let t1 = Utc.with_ymd_and_hms(2024, 1, 11, 0, 0, 0).unwrap();
    let s = create_scale(ScaleKind::Time, Domain::time(t0, t1), (0.0, 100.0), None).expect("scale");
    let ticks: Vec<_> = generate_ticks(&s, 5).iter().filter_map(XValue::as_time).collect();
    assert_eq!(ticks.first().copied(), Some(t0));
    assert!(ticks.len() >= 2);
    for t in &ticks {
        assert_eq!((t.hour(), t.minute(), t.second()), (0, 0, 0));
        assert!(*t >= t0 && *t <= t1);
    }
    assert!(ticks.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn month_ticks_start_on_the_first() {
    let t0 = Utc.with_ymd_and_hms(2023, 1, 15, 0, 0, 0).unwrap();
    let t1 = Utc.with_ymd_and_hms(2023, 12, 20, 0, 0, 0).unwrap();
    let s = create_scale(ScaleKind::Time, Domain::time(t0, t1), (0.0, 100.0), None).expect("scale");
    let ticks: Vec<_> = generate_ticks(&s, 6).iter().filter_map(XValue::as_time).collect();
    assert!(!ticks.is_empty());
    assert!(ticks.iter().all(|t| t.day() == 1));
}

#[test]
fn explicit_ticks_override_generation() {
    let s = create_scale(ScaleKind::Linear, Domain::numeric(0.0, 10.0), (0.0, 100.0), None).expect("scale");
    let explicit = vec![XValue::Number(1.0), XValue::Number(7.5)];
    assert_eq!(resolve_ticks(&s, 5, Some(explicit.as_slice())).expect("ticks"), explicit);
    assert_eq!(resolve_ticks(&s, 5, None).expect("ticks"), generate_ticks(&s, 5));
}

#[test]
fn explicit_ticks_must_fit_the_scale() {
    let s = create_scale(ScaleKind::Linear, Domain::numeric(0.0, 10.0), (0.0, 100.0), None).expect("scale");
    let err = resolve_ticks(&s, 5, Some(&[XValue::from("a")][..])).unwrap_err();
    assert!(matches!(err, ChartError::Config(_)));

    let log = create_scale(ScaleKind::Log, Domain::numeric(1.0, 100.0), (0.0, 100.0), None).expect("scale");
    let err = resolve_ticks(&log, 5, Some(&[XValue::Number(0.0)][..])).unwrap_err();
    assert!(matches!(err, ChartError::Config(_)));
}

#[test]
fn labels_use_decimals_the_step_needs() {
    let s = create_scale(ScaleKind::Linear, Domain::numeric(0.0, 1.0), (0.0, 100.0), None).expect("scale");
    let ticks = generate_ticks(&s, 5);
    assert_eq!(format_ticks(&s, &ticks, 5), vec!["0.0", "0.2", "0.4", "0.6", "0.8", "1.0"]);

    let s = create_scale(ScaleKind::Linear, Domain::numeric(0.0, 100.0), (0.0, 100.0), None).expect("scale");
    let ticks = generate_ticks(&s, 5);
    assert_eq!(format_ticks(&s, &ticks, 5), vec!["0", "20", "40", "60", "80", "100"]);
}

#[test]
fn time_labels_follow_the_interval() {
    let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let t1 = Utc.with_ymd_and_hms(2024, 1, 11, 0, 0, 0).unwrap();
    let s = create_scale(ScaleKind::Time, Domain::time(t0, t1), (0.0, 100.0), None).expect("scale");
    let ticks = generate_ticks(&s, 5);
    let labels = format_ticks(&s, &ticks, 5);
    assert_eq!(labels.first().map(String::as_str), Some("Jan 01"));
}
