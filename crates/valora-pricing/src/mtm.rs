//! Mark-to-market present value of a fixed-rate trade.
//!
//! A trade is a principal amount plus a series of simple-interest coupon
//! payments. Each cash flow is discounted at its own day offset via the
//! curve and the discounted amounts are summed. No rounding is applied;
//! currency-display rounding belongs to the presentation layer.

use log::debug;

use valora_curves::DiscountCurve;

use crate::error::{PricingError, PricingResult};

/// Terms of a fixed-rate interest-bearing trade.
///
/// Coupon `j` accrues simple interest over `period_days[j]` days at the
/// annualized `rate` under the day-count `basis`, and pays at
/// `payment_offsets[j]` days from the valuation date. The principal repays
/// at `settlement_days`.
///
/// Offsets may be negative or zero for already-elapsed periods; the sign
/// convention is the caller's, and such offsets are discounted literally
/// via the curve's extrapolation, never rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedRateTrade {
    /// Principal amount (any sign).
    principal: f64,
    /// Fixed annualized rate as a decimal fraction.
    rate: f64,
    /// Day-count basis divisor (360 or 365).
    basis: u32,
    /// Day-count length of each coupon period.
    period_days: Vec<f64>,
    /// Days from valuation date to each coupon payment.
    payment_offsets: Vec<f64>,
    /// Days from valuation date to principal repayment.
    settlement_days: f64,
}

impl FixedRateTrade {
    /// Creates trade terms with an empty coupon schedule and settlement
    /// at the valuation date.
    #[must_use]
    pub fn new(principal: f64, rate: f64, basis: u32) -> Self {
        Self {
            principal,
            rate,
            basis,
            period_days: Vec::new(),
            payment_offsets: Vec::new(),
            settlement_days: 0.0,
        }
    }

    /// Sets the coupon schedule: per-period day counts and payment offsets.
    #[must_use]
    pub fn with_coupons(mut self, period_days: Vec<f64>, payment_offsets: Vec<f64>) -> Self {
        self.period_days = period_days;
        self.payment_offsets = payment_offsets;
        self
    }

    /// Sets the principal repayment offset in days.
    #[must_use]
    pub fn with_settlement(mut self, settlement_days: f64) -> Self {
        self.settlement_days = settlement_days;
        self
    }

    /// Returns the principal amount.
    #[must_use]
    pub fn principal(&self) -> f64 {
        self.principal
    }

    /// Returns the fixed annualized rate.
    #[must_use]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the day-count basis divisor.
    #[must_use]
    pub fn basis(&self) -> u32 {
        self.basis
    }

    /// Returns the number of coupon periods.
    #[must_use]
    pub fn coupon_count(&self) -> usize {
        self.period_days.len()
    }

    /// Returns the principal repayment offset in days.
    #[must_use]
    pub fn settlement_days(&self) -> f64 {
        self.settlement_days
    }

    /// Computes the mark-to-market present value against `curve`.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidBasis`] for a zero basis and
    /// [`PricingError::MismatchedSchedule`] when the period-length and
    /// payment-offset sequences differ in length.
    pub fn mark_to_market(&self, curve: &DiscountCurve) -> PricingResult<f64> {
        present_value(
            self.principal,
            self.rate,
            &self.period_days,
            &self.payment_offsets,
            self.basis,
            self.settlement_days,
            curve,
        )
    }
}

/// Present value of principal plus fixed coupons under `curve`.
///
/// Interest PV is `Σ_j df(payment_offsets[j]) * principal * rate *
/// period_days[j] / basis`; an empty schedule contributes zero. Principal
/// PV is `principal * df(settlement_days)`. The result is their sum,
/// unrounded. Pure function of its arguments.
///
/// # Errors
///
/// Returns [`PricingError::InvalidBasis`] for a zero basis and
/// [`PricingError::MismatchedSchedule`] when the schedule sequences differ
/// in length. Both are detected before any curve query.
pub fn present_value(
    principal: f64,
    rate: f64,
    period_days: &[f64],
    payment_offsets: &[f64],
    basis: u32,
    settlement_days: f64,
    curve: &DiscountCurve,
) -> PricingResult<f64> {
    if basis == 0 {
        return Err(PricingError::invalid_basis(basis));
    }
    if period_days.len() != payment_offsets.len() {
        return Err(PricingError::mismatched_schedule(
            period_days.len(),
            payment_offsets.len(),
        ));
    }

    let basis = f64::from(basis);

    let interest_pv: f64 = period_days
        .iter()
        .zip(payment_offsets.iter())
        .map(|(n, d)| curve.discount_factor(*d) * principal * rate * n / basis)
        .sum();

    let principal_pv = principal * curve.discount_factor(settlement_days);

    debug!(
        "MtM: {} coupons, interest PV {:.6}, principal PV {:.6}",
        period_days.len(),
        interest_pv,
        principal_pv
    );

    Ok(interest_pv + principal_pv)
}
