//! Error types for curve operations.

use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone)]
pub enum CurveError {
    /// No rows remain after filtering by currency.
    #[error("Empty curve: no rows with currency {currency:?} (out of {total} input rows)")]
    EmptyCurve {
        /// The currency that was requested.
        currency: String,
        /// Total number of input rows before filtering.
        total: usize,
    },

    /// Interpolant construction failed.
    #[error("Interpolation error: {reason}")]
    InterpolationError {
        /// Description of the interpolation error.
        reason: String,
    },
}

impl CurveError {
    /// Creates an empty curve error.
    #[must_use]
    pub fn empty_curve(currency: impl Into<String>, total: usize) -> Self {
        Self::EmptyCurve {
            currency: currency.into(),
            total,
        }
    }

    /// Creates an interpolation error.
    #[must_use]
    pub fn interpolation_error(reason: impl Into<String>) -> Self {
        Self::InterpolationError {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CurveError::empty_curve("JPY", 12);
        let msg = format!("{}", err);
        assert!(msg.contains("JPY"));
        assert!(msg.contains("12"));
    }
}
