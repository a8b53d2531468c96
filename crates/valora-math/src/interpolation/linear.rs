//! Piecewise-linear interpolation.

use crate::error::{MathError, MathResult};
use crate::interpolation::Interpolator;

/// Piecewise-linear interpolation between data points.
///
/// Connects consecutive points with straight lines. With extrapolation
/// enabled, queries outside the data range continue the slope of the
/// nearest edge segment outward rather than clamping to the boundary
/// value, so the function stays continuous at the boundary knots.
///
/// # Example
///
/// ```rust
/// use valora_math::interpolation::{LinearInterpolator, Interpolator};
///
/// let xs = vec![0.0, 1.0, 2.0, 3.0];
/// let ys = vec![1.0, 0.98, 0.95, 0.91];
///
/// let interp = LinearInterpolator::new(xs, ys).unwrap();
/// let y = interp.interpolate(1.5).unwrap();
/// // y = 0.965 (halfway between (1, 0.98) and (2, 0.95))
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
    allow_extrapolation: bool,
}

impl LinearInterpolator {
    /// Creates a new linear interpolator.
    ///
    /// # Arguments
    ///
    /// * `xs` - X coordinates (must be sorted in ascending order)
    /// * `ys` - Y coordinates
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 points or if lengths differ.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        if xs.len() < 2 {
            return Err(MathError::insufficient_data(2, xs.len()));
        }
        if xs.len() != ys.len() {
            return Err(MathError::invalid_input(format!(
                "xs and ys must have same length: {} vs {}",
                xs.len(),
                ys.len()
            )));
        }

        // Check that xs are sorted
        for i in 1..xs.len() {
            if xs[i] <= xs[i - 1] {
                return Err(MathError::invalid_input(
                    "x values must be strictly increasing",
                ));
            }
        }

        Ok(Self {
            xs,
            ys,
            allow_extrapolation: false,
        })
    }

    /// Enables extrapolation beyond the data range.
    #[must_use]
    pub fn with_extrapolation(mut self) -> Self {
        self.allow_extrapolation = true;
        self
    }

    /// Locates x within the knots: an exact knot index, or the segment
    /// index i such that xs[i] <= x < xs[i+1] (edge segments cover
    /// out-of-range queries).
    fn locate(&self, x: f64) -> Location {
        match self
            .xs
            .binary_search_by(|probe| probe.partial_cmp(&x).unwrap_or(std::cmp::Ordering::Equal))
        {
            Ok(i) => Location::Knot(i),
            Err(i) => Location::Segment((i.saturating_sub(1)).min(self.xs.len() - 2)),
        }
    }

    fn segment_slope(&self, i: usize) -> f64 {
        (self.ys[i + 1] - self.ys[i]) / (self.xs[i + 1] - self.xs[i])
    }

    fn check_bounds(&self, x: f64) -> MathResult<()> {
        if !self.allow_extrapolation && (x < self.xs[0] || x > self.xs[self.xs.len() - 1]) {
            return Err(MathError::ExtrapolationNotAllowed {
                x,
                min: self.xs[0],
                max: self.xs[self.xs.len() - 1],
            });
        }
        Ok(())
    }
}

enum Location {
    /// Query hit a knot exactly.
    Knot(usize),
    /// Query falls within (or beyond an edge of) segment i.
    Segment(usize),
}

impl Interpolator for LinearInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        self.check_bounds(x)?;

        let i = match self.locate(x) {
            // Return the stored ordinate: evaluating the segment formula at
            // a knot can introduce rounding the curve contract forbids.
            Location::Knot(i) => return Ok(self.ys[i]),
            Location::Segment(i) => i,
        };

        let x0 = self.xs[i];
        let x1 = self.xs[i + 1];
        let y0 = self.ys[i];
        let y1 = self.ys[i + 1];

        // Linear interpolation formula; for x outside the data range the
        // clamped edge segment extends its own slope outward.
        let t = (x - x0) / (x1 - x0);
        Ok(y0 + t * (y1 - y0))
    }

    fn derivative(&self, x: f64) -> MathResult<f64> {
        self.check_bounds(x)?;

        let i = match self.locate(x) {
            Location::Knot(i) => i.min(self.xs.len() - 2),
            Location::Segment(i) => i,
        };

        Ok(self.segment_slope(i))
    }

    fn allows_extrapolation(&self) -> bool {
        self.allow_extrapolation
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}
