//! Curve row type.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of a discount-factor curve export.
///
/// Only `currency`, `days`, and `discount_factor` participate in
/// computation; `index`, `date`, and `rate` are carried through from the
/// source export for inspection and reporting but are never read by the
/// curve or the calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Source row label (informational).
    #[serde(default)]
    pub index: String,
    /// ISO currency code this row belongs to.
    pub currency: String,
    /// Knot date (informational; `days` is the computational key).
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Day offset from the valuation date to the knot date.
    pub days: f64,
    /// Published rate at this tenor (informational).
    #[serde(default)]
    pub rate: f64,
    /// Discount factor at this tenor.
    pub discount_factor: f64,
}

impl CurvePoint {
    /// Creates a bare computational knot with empty informational columns.
    #[must_use]
    pub fn from_knot(currency: impl Into<String>, days: f64, discount_factor: f64) -> Self {
        Self {
            index: String::new(),
            currency: currency.into(),
            date: None,
            days,
            rate: 0.0,
            discount_factor,
        }
    }
}
