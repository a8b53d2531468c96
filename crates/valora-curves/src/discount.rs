//! Discount factor curve.
//!
//! A `DiscountCurve` is built from the rows of a curve export filtered to a
//! single currency, and answers discount-factor queries at arbitrary day
//! offsets via piecewise-linear interpolation.

use log::debug;

use valora_math::interpolation::{Interpolator, LinearInterpolator};

use crate::error::{CurveError, CurveResult};
use crate::point::CurvePoint;

/// A single-currency discount-factor curve.
///
/// Construction filters the input rows to the requested currency, sorts the
/// survivors by day offset, and fits a piecewise-linear interpolant over
/// the (days, discount factor) knots. Queries outside the knot range
/// continue the slope of the nearest edge segment outward; curve queries
/// routinely fall just outside the shortest or longest published tenor, so
/// out-of-range is extrapolation, never an error.
///
/// Immutable once constructed. Holds no interior mutability, so a curve
/// can be shared read-only across threads without synchronization.
///
/// # Example
///
/// ```rust
/// use valora_curves::{CurvePoint, DiscountCurve};
///
/// let rows = vec![
///     CurvePoint::from_knot("USD", 4.0, 0.99946),
///     CurvePoint::from_knot("USD", 95.0, 0.98735),
///     CurvePoint::from_knot("USD", 280.0, 0.96732),
/// ];
///
/// let curve = DiscountCurve::new(&rows, "USD").unwrap();
/// assert_eq!(curve.discount_factor(95.0), 0.98735);
/// ```
#[derive(Debug, Clone)]
pub struct DiscountCurve {
    /// Currency the curve was filtered to.
    currency: String,
    /// Knot day offsets, sorted ascending, duplicates collapsed.
    days: Vec<f64>,
    /// Discount factors at each knot.
    discount_factors: Vec<f64>,
    /// Fitted interpolant.
    interpolant: Interpolant,
}

/// A curve with a single distinct knot degenerates to a constant function.
#[derive(Debug, Clone)]
enum Interpolant {
    Constant(f64),
    Linear(LinearInterpolator),
}

impl DiscountCurve {
    /// Builds a curve from export rows, keeping only those whose currency
    /// matches `currency` exactly (case-sensitive).
    ///
    /// Rows need not be pre-sorted: survivors are stable-sorted by `days`
    /// before fitting, and rows sharing a `days` value collapse to the
    /// first survivor at that offset.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::EmptyCurve`] if no rows match the currency.
    pub fn new(points: &[CurvePoint], currency: &str) -> CurveResult<Self> {
        let mut knots: Vec<(f64, f64)> = points
            .iter()
            .filter(|p| p.currency == currency)
            .map(|p| (p.days, p.discount_factor))
            .collect();

        if knots.is_empty() {
            return Err(CurveError::empty_curve(currency, points.len()));
        }

        // Stable sort, then first-wins collapse of duplicate offsets, so
        // the surviving row order decides ties.
        knots.sort_by(|a, b| a.0.total_cmp(&b.0));
        knots.dedup_by(|next, kept| next.0 == kept.0);

        let (days, discount_factors): (Vec<f64>, Vec<f64>) = knots.into_iter().unzip();

        let interpolant = if days.len() == 1 {
            Interpolant::Constant(discount_factors[0])
        } else {
            let interp = LinearInterpolator::new(days.clone(), discount_factors.clone())
                .map_err(|e| CurveError::interpolation_error(e.to_string()))?
                .with_extrapolation();
            Interpolant::Linear(interp)
        };

        debug!(
            "built {} discount curve: {} knots from {} input rows",
            currency,
            days.len(),
            points.len()
        );

        Ok(Self {
            currency: currency.to_string(),
            days,
            discount_factors,
            interpolant,
        })
    }

    /// Returns the discount factor at `days` from the valuation date.
    ///
    /// Inside the knot range the value is piecewise-linear interpolated;
    /// a query hitting a knot returns that knot's stored value exactly.
    /// Outside the range the nearest edge segment's slope is continued
    /// outward. Pure and deterministic.
    #[must_use]
    pub fn discount_factor(&self, days: f64) -> f64 {
        match &self.interpolant {
            Interpolant::Constant(df) => *df,
            Interpolant::Linear(interp) => {
                // Extrapolation is enabled, so the query cannot fail.
                interp.interpolate(days).unwrap_or(f64::NAN)
            }
        }
    }

    /// Returns the currency this curve was filtered to.
    #[must_use]
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Returns the knot day offsets, sorted ascending.
    #[must_use]
    pub fn days(&self) -> &[f64] {
        &self.days
    }

    /// Returns the discount factors at each knot.
    #[must_use]
    pub fn discount_factors(&self) -> &[f64] {
        &self.discount_factors
    }

    /// Returns the number of knots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Always false: construction rejects empty curves.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Returns the (min, max) knot day offsets.
    #[must_use]
    pub fn day_bounds(&self) -> (f64, f64) {
        (self.days[0], self.days[self.days.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn sample_rows() -> Vec<CurvePoint> {
        vec![
            CurvePoint::from_knot("USD", 4.0, 0.99946),
            CurvePoint::from_knot("USD", 95.0, 0.98735),
            CurvePoint::from_knot("USD", 280.0, 0.96732),
            CurvePoint::from_knot("USD", 460.0, 0.94915),
            CurvePoint::from_knot("USD", 640.0, 0.91464),
        ]
    }

    #[test]
    fn test_filters_by_currency() {
        let mut rows = sample_rows();
        rows.push(CurvePoint::from_knot("EUR", 30.0, 0.9991));
        rows.push(CurvePoint::from_knot("EUR", 90.0, 0.9975));

        let curve = DiscountCurve::new(&rows, "EUR").unwrap();
        assert_eq!(curve.len(), 2);
        assert_eq!(curve.currency(), "EUR");
        assert_eq!(curve.discount_factor(30.0), 0.9991);
    }

    #[test]
    fn test_currency_match_is_case_sensitive() {
        let rows = sample_rows();
        let err = DiscountCurve::new(&rows, "usd").unwrap_err();
        assert!(matches!(err, CurveError::EmptyCurve { .. }));
    }

    #[test]
    fn test_empty_filter_result_fails_at_construction() {
        let rows = sample_rows();
        let err = DiscountCurve::new(&rows, "JPY").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("JPY"));
        assert!(msg.contains("5"));
    }

    #[test]
    fn test_knot_values_exact() {
        let curve = DiscountCurve::new(&sample_rows(), "USD").unwrap();

        for row in sample_rows() {
            assert_eq!(curve.discount_factor(row.days), row.discount_factor);
        }
    }

    #[test]
    fn test_midpoint_linearity() {
        let curve = DiscountCurve::new(&sample_rows(), "USD").unwrap();

        // Midpoint of (95, 0.98735) and (280, 0.96732)
        let mid = curve.discount_factor((95.0 + 280.0) / 2.0);
        assert_relative_eq!(mid, (0.98735 + 0.96732) / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_extrapolation_below_first_knot() {
        let curve = DiscountCurve::new(&sample_rows(), "USD").unwrap();

        // First segment slope continued down to day 0
        let slope = (0.98735 - 0.99946) / (95.0 - 4.0);
        let expected = 0.99946 + slope * (0.0 - 4.0);
        assert_relative_eq!(curve.discount_factor(0.0), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_extrapolation_beyond_last_knot() {
        let curve = DiscountCurve::new(&sample_rows(), "USD").unwrap();

        // Last segment slope continued past day 640
        let slope = (0.91464 - 0.94915) / (640.0 - 460.0);
        let expected = 0.91464 + slope * (700.0 - 640.0);
        assert_relative_eq!(curve.discount_factor(700.0), expected, epsilon = 1e-12);

        // Not a clamp to the boundary value
        assert!(curve.discount_factor(700.0) < 0.91464);
    }

    #[test]
    fn test_extrapolation_continuous_at_boundaries() {
        let curve = DiscountCurve::new(&sample_rows(), "USD").unwrap();
        let (min_day, max_day) = curve.day_bounds();

        let eps = 1e-6;
        assert_relative_eq!(
            curve.discount_factor(min_day - eps),
            curve.discount_factor(min_day + eps),
            epsilon = 1e-6
        );
        assert_relative_eq!(
            curve.discount_factor(max_day - eps),
            curve.discount_factor(max_day + eps),
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_unsorted_input_matches_sorted() {
        let sorted = DiscountCurve::new(&sample_rows(), "USD").unwrap();

        let mut reversed = sample_rows();
        reversed.reverse();
        let from_reversed = DiscountCurve::new(&reversed, "USD").unwrap();

        let shuffled: Vec<CurvePoint> = [2usize, 0, 4, 1, 3]
            .iter()
            .map(|&i| sample_rows()[i].clone())
            .collect();
        let from_shuffled = DiscountCurve::new(&shuffled, "USD").unwrap();

        assert_eq!(sorted.days(), from_reversed.days());
        assert_eq!(sorted.days(), from_shuffled.days());

        for q in [-10.0, 0.0, 4.0, 50.0, 95.0, 170.0, 365.0, 640.0, 900.0] {
            assert_eq!(sorted.discount_factor(q), from_reversed.discount_factor(q));
            assert_eq!(sorted.discount_factor(q), from_shuffled.discount_factor(q));
        }
    }

    #[test]
    fn test_duplicate_days_first_row_wins() {
        let rows = vec![
            CurvePoint::from_knot("USD", 90.0, 0.993),
            CurvePoint::from_knot("USD", 30.0, 0.998),
            CurvePoint::from_knot("USD", 90.0, 0.5), // shadowed by the earlier 90d row
        ];

        let curve = DiscountCurve::new(&rows, "USD").unwrap();
        assert_eq!(curve.len(), 2);
        assert_eq!(curve.discount_factor(90.0), 0.993);
    }

    #[test]
    fn test_single_knot_degenerates_to_constant() {
        let rows = vec![CurvePoint::from_knot("USD", 180.0, 0.98)];

        let curve = DiscountCurve::new(&rows, "USD").unwrap();
        assert_eq!(curve.len(), 1);
        assert_eq!(curve.discount_factor(0.0), 0.98);
        assert_eq!(curve.discount_factor(180.0), 0.98);
        assert_eq!(curve.discount_factor(1000.0), 0.98);
    }

    #[test]
    fn test_curve_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DiscountCurve>();
    }

    proptest! {
        #[test]
        fn prop_construction_order_is_irrelevant(
            order in Just(vec![0usize, 1, 2, 3, 4]).prop_shuffle(),
            q in -100.0f64..1000.0,
        ) {
            let rows = sample_rows();
            let sorted = DiscountCurve::new(&rows, "USD").unwrap();

            let shuffled: Vec<CurvePoint> = order.iter().map(|&i| rows[i].clone()).collect();
            let curve = DiscountCurve::new(&shuffled, "USD").unwrap();

            prop_assert_eq!(sorted.discount_factor(q), curve.discount_factor(q));
        }
    }
}
