//! # Valora Math
//!
//! Numerical utilities for the Valora valuation library.
//!
//! This crate provides:
//!
//! - **Interpolation**: Piecewise-linear interpolation over sorted knots,
//!   with optional linear (slope-continued) extrapolation beyond the range
//!
//! ## Design Philosophy
//!
//! - **Numerical Stability**: Exact values at knots, continuity at the
//!   range boundaries
//! - **Purity**: Query functions are deterministic and side-effect free

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod interpolation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::interpolation::{Interpolator, LinearInterpolator};
}

pub use error::{MathError, MathResult};
