//! # Valora Pricing
//!
//! Mark-to-market valuation for the Valora library.
//!
//! This crate provides:
//!
//! - **Trade Terms**: [`FixedRateTrade`], the terms of a fixed-rate
//!   interest-bearing trade (principal plus fixed coupon schedule)
//! - **MtM**: present value of the remaining cash flows against a
//!   [`DiscountCurve`](valora_curves::DiscountCurve)
//!
//! ## Quick Start
//!
//! ```rust
//! use valora_curves::{CurvePoint, DiscountCurve};
//! use valora_pricing::FixedRateTrade;
//!
//! let rows = vec![
//!     CurvePoint::from_knot("USD", 4.0, 0.99946),
//!     CurvePoint::from_knot("USD", 95.0, 0.98735),
//!     CurvePoint::from_knot("USD", 280.0, 0.96732),
//! ];
//! let curve = DiscountCurve::new(&rows, "USD").unwrap();
//!
//! let trade = FixedRateTrade::new(1_000_000.0, 0.05, 360)
//!     .with_coupons(vec![90.0, 90.0], vec![180.0, 90.0])
//!     .with_settlement(270.0);
//!
//! let mtm = trade.mark_to_market(&curve).unwrap();
//! assert!(mtm > 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod mtm;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{PricingError, PricingResult};
    pub use crate::mtm::{present_value, FixedRateTrade};
}

pub use error::{PricingError, PricingResult};
pub use mtm::{present_value, FixedRateTrade};
