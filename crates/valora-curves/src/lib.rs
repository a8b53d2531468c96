//! # Valora Curves
//!
//! Discount-factor curves for the Valora valuation library.
//!
//! This crate provides:
//!
//! - **Curve Rows**: [`CurvePoint`], the uniform tabular row shape produced
//!   by external loaders
//! - **Discount Curves**: [`DiscountCurve`], a single-currency curve with
//!   piecewise-linear interpolation and slope-continued extrapolation
//!
//! ## Quick Start
//!
//! ```rust
//! use valora_curves::{CurvePoint, DiscountCurve};
//!
//! let rows = vec![
//!     CurvePoint::from_knot("USD", 30.0, 0.998),
//!     CurvePoint::from_knot("USD", 90.0, 0.993),
//!     CurvePoint::from_knot("EUR", 90.0, 0.995),
//! ];
//!
//! // Only the USD rows survive the filter
//! let curve = DiscountCurve::new(&rows, "USD").unwrap();
//!
//! // Interpolated between the 30d and 90d knots
//! let df = curve.discount_factor(60.0);
//! assert!(df > 0.993 && df < 0.998);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::uninlined_format_args)]

pub mod discount;
pub mod error;
pub mod point;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::discount::DiscountCurve;
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::point::CurvePoint;
}

pub use discount::DiscountCurve;
pub use error::{CurveError, CurveResult};
pub use point::CurvePoint;
