//! End-to-end MtM valuation against a published curve snapshot.
//!
//! Locks the four-coupon reference scenario as a regression fixture: any
//! change to interpolation, extrapolation, or the aggregation formula that
//! moves the result will trip these assertions.

use approx::assert_relative_eq;
use valora_curves::{CurvePoint, DiscountCurve};
use valora_pricing::{present_value, FixedRateTrade};

fn reference_curve() -> DiscountCurve {
    let rows = vec![
        CurvePoint::from_knot("USD", 4.0, 0.99946),
        CurvePoint::from_knot("USD", 95.0, 0.98735),
        CurvePoint::from_knot("USD", 280.0, 0.96732),
        CurvePoint::from_knot("USD", 460.0, 0.94915),
        CurvePoint::from_knot("USD", 640.0, 0.91464),
    ];
    DiscountCurve::new(&rows, "USD").unwrap()
}

#[test]
fn reference_scenario_regression() {
    let curve = reference_curve();

    let trade = FixedRateTrade::new(1_000_000.0, 0.05, 360)
        .with_coupons(vec![90.0, 90.0, 90.0, 90.0], vec![270.0, 180.0, 90.0, 0.0])
        .with_settlement(365.0);

    let mtm = trade.mark_to_market(&curve).unwrap();

    // Locked fixture value
    assert_relative_eq!(mtm, 1_007_921.68999769, epsilon = 1e-2);
}

#[test]
fn reference_scenario_decomposes_into_discounted_terms() {
    let curve = reference_curve();

    let coupon = 1_000_000.0 * 0.05 * 90.0 / 360.0;
    let interest_pv: f64 = [270.0, 180.0, 90.0, 0.0]
        .iter()
        .map(|d| curve.discount_factor(*d) * coupon)
        .sum();
    let principal_pv = 1_000_000.0 * curve.discount_factor(365.0);

    let mtm = present_value(
        1_000_000.0,
        0.05,
        &[90.0, 90.0, 90.0, 90.0],
        &[270.0, 180.0, 90.0, 0.0],
        360,
        365.0,
        &curve,
    )
    .unwrap();

    assert_relative_eq!(mtm, interest_pv + principal_pv, epsilon = 1e-9);
}

#[test]
fn reference_scenario_day_zero_coupon_uses_extrapolated_factor() {
    let curve = reference_curve();

    // Day 0 sits below the first knot at day 4; the first segment's slope
    // continues downward, so the factor exceeds the day-4 value.
    let df0 = curve.discount_factor(0.0);
    assert!(df0 > 0.99946);
    assert_relative_eq!(df0, 0.999_992_307_692, epsilon = 1e-9);
}

#[test]
fn struct_and_free_function_forms_agree() {
    let curve = reference_curve();

    let trade = FixedRateTrade::new(250_000.0, 0.035, 365)
        .with_coupons(vec![182.0, 183.0], vec![182.0, 365.0])
        .with_settlement(365.0);

    let via_trade = trade.mark_to_market(&curve).unwrap();
    let via_free = present_value(
        250_000.0,
        0.035,
        &[182.0, 183.0],
        &[182.0, 365.0],
        365,
        365.0,
        &curve,
    )
    .unwrap();

    assert_eq!(via_trade, via_free);
}
