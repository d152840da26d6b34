use thiserror::Error;

/// Errors that can occur when creating a [`Tolerance`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ToleranceError {
    #[error("tolerance must be finite, got {0}")]
    NonFinite(f64),

    #[error("tolerance must be positive, got {0}")]
    NotPositive(f64),
}

/// A finite, strictly positive convergence threshold.
///
/// Iterative solvers stop once `|x[n+1] - x[n]| < eps`. Bisection uses the
/// tolerance to size its fixed iteration budget instead.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Tolerance(f64);

impl Tolerance {
    /// Creates a validated tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `eps` is non-finite, zero, or negative.
    pub fn new(eps: f64) -> Result<Self, ToleranceError> {
        if !eps.is_finite() {
            return Err(ToleranceError::NonFinite(eps));
        }
        if eps <= 0.0 {
            return Err(ToleranceError::NotPositive(eps));
        }
        Ok(Self(eps))
    }

    /// Returns the threshold value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns true if two successive iterates are closer than the threshold.
    ///
    /// Non-finite iterates never satisfy the test.
    #[must_use]
    pub fn is_met(self, previous: f64, current: f64) -> bool {
        (current - previous).abs() < self.0
    }
}

impl TryFrom<f64> for Tolerance {
    type Error = ToleranceError;

    fn try_from(eps: f64) -> Result<Self, Self::Error> {
        Self::new(eps)
    }
}
