//! Error types for pricing operations.

use thiserror::Error;

/// A specialized Result type for pricing operations.
pub type PricingResult<T> = Result<T, PricingError>;

/// Errors that can occur during pricing operations.
#[derive(Error, Debug, Clone)]
pub enum PricingError {
    /// Day-count basis is zero.
    #[error("Invalid day-count basis: {basis} (must be a positive divisor such as 360 or 365)")]
    InvalidBasis {
        /// The rejected basis value.
        basis: u32,
    },

    /// Coupon period-length and payment-offset sequences differ in length.
    #[error("Mismatched coupon schedule: {periods} period lengths vs {offsets} payment offsets")]
    MismatchedSchedule {
        /// Number of period-length entries.
        periods: usize,
        /// Number of payment-offset entries.
        offsets: usize,
    },
}

impl PricingError {
    /// Creates an invalid basis error.
    #[must_use]
    pub fn invalid_basis(basis: u32) -> Self {
        Self::InvalidBasis { basis }
    }

    /// Creates a mismatched schedule error.
    #[must_use]
    pub fn mismatched_schedule(periods: usize, offsets: usize) -> Self {
        Self::MismatchedSchedule { periods, offsets }
    }
}
