//! 회수기간/NPV/단순 수익 계산 테스트.
use heatpump_cost_toolbox::economics::{compute_roi, roi_percent};
use rstest::rstest;

#[test]
fn zero_savings_is_degenerate() {
    let r = compute_roi(1000.0, 0.0, 10, 0.05);
    assert!(r.payback.is_infinite());
    assert_eq!(r.npv, -1000.0);
    assert_eq!(r.roi10, -1000.0);
    assert_eq!(r.payback_label_years(), None);
}

#[test]
fn worked_example_matches_annuity_formula() {
    let r = compute_roi(1750.0, 200.0, 10, 0.05);
    assert_eq!(r.payback, 8.75);
    assert_eq!(r.roi10, 250.0);
    let annuity = 200.0 * (1.0 - 1.05_f64.powi(-10)) / 0.05;
    assert!((r.npv - (annuity - 1750.0)).abs() < 0.01, "npv={}", r.npv);
    assert!((r.npv - -205.653).abs() < 0.01, "npv={}", r.npv);
    assert_eq!(r.payback_label_years(), Some(8.75));
}

#[test]
fn zero_discount_rate_npv_equals_simple_return() {
    let r = compute_roi(3000.0, 450.0, 10, 0.0);
    assert!((r.npv - r.roi10).abs() < 1e-9);
}

#[test]
fn zero_horizon_only_counts_cost() {
    let r = compute_roi(500.0, 100.0, 0, 0.05);
    assert_eq!(r.npv, -500.0);
    assert_eq!(r.roi10, -500.0);
    assert_eq!(r.payback, 5.0);
}

#[test]
fn invalid_inputs_are_clamped_not_nan() {
    let r = compute_roi(-250.0, f64::NAN, 10, f64::INFINITY);
    assert_eq!(r.npv, 0.0);
    assert_eq!(r.roi10, 0.0);
    assert!(r.payback.is_infinite());

    let r = compute_roi(1000.0, -50.0, 10, 0.05);
    assert_eq!(r.npv, -1000.0);
    assert!(!r.npv.is_nan() && !r.roi10.is_nan());
}

#[test]
fn long_payback_has_no_label() {
    let r = compute_roi(20_000.0, 150.0, 10, 0.05);
    assert!(r.payback > 100.0);
    assert_eq!(r.payback_label_years(), None);
}

#[rstest]
#[case(250.0, 1750.0, 250.0 / 1750.0 * 100.0)]
#[case(-1000.0, 1000.0, -100.0)]
#[case(500.0, 0.0, 0.0)]
fn roi_percent_is_relative_to_cost(#[case] roi10: f64, #[case] cost: f64, #[case] expected: f64) {
    assert!((roi_percent(roi10, cost) - expected).abs() < 1e-9);
}
