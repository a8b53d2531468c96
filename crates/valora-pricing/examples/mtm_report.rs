//! Fixed-Rate Trade MtM Example
//!
//! Values a 1mm USD fixed-rate trade (5% annual, quarterly coupons, Act/360)
//! against a five-knot discount-factor curve and prints the decomposition.
//!
//! Curve snapshot:
//!
//! | Days | DF      |
//! |------|---------|
//! | 4    | 0.99946 |
//! | 95   | 0.98735 |
//! | 280  | 0.96732 |
//! | 460  | 0.94915 |
//! | 640  | 0.91464 |
//!
//! Run with: cargo run --example mtm_report

use valora_curves::{CurvePoint, DiscountCurve};
use valora_pricing::FixedRateTrade;

fn main() {
    println!("==========================================");
    println!("  Fixed-Rate Trade MtM Example");
    println!("==========================================\n");

    let rows = vec![
        CurvePoint::from_knot("USD", 4.0, 0.99946),
        CurvePoint::from_knot("USD", 95.0, 0.98735),
        CurvePoint::from_knot("USD", 280.0, 0.96732),
        CurvePoint::from_knot("USD", 460.0, 0.94915),
        CurvePoint::from_knot("USD", 640.0, 0.91464),
    ];

    let curve = DiscountCurve::new(&rows, "USD").expect("curve rows are non-empty");

    let principal = 1_000_000.0;
    let rate = 0.05;
    let basis = 360;
    let period_days = vec![90.0, 90.0, 90.0, 90.0];
    let payment_offsets = vec![270.0, 180.0, 90.0, 0.0];
    let settlement_days = 365.0;

    println!("Coupon cash flows:");
    for (n, d) in period_days.iter().zip(payment_offsets.iter()) {
        let df = curve.discount_factor(*d);
        let amount = principal * rate * n / f64::from(basis);
        println!(
            "  day {:>4}: amount {:>12.2}  df {:.6}  pv {:>12.2}",
            d,
            amount,
            df,
            df * amount
        );
    }

    let df_settlement = curve.discount_factor(settlement_days);
    println!(
        "\nPrincipal: day {:>4}: amount {:>12.2}  df {:.6}  pv {:>12.2}",
        settlement_days,
        principal,
        df_settlement,
        principal * df_settlement
    );

    let trade = FixedRateTrade::new(principal, rate, basis)
        .with_coupons(period_days, payment_offsets)
        .with_settlement(settlement_days);

    let mtm = trade.mark_to_market(&curve).expect("schedule is consistent");

    // Rounding to cents is a presentation choice; the core never rounds.
    println!("\nMark-to-market: {:.2} USD", mtm);
}
