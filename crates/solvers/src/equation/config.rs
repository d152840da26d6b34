use rootline_core::{Tolerance, ToleranceError};

/// Configuration for the iterative equation solvers.
///
/// A config starts unbounded, matching the classical algorithms. Use
/// [`Config::with_max_iters`] to cap the number of computed steps; the
/// fixed-point solver falls back to its own cap when none is set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tol: Tolerance,
    max_iters: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good value, unwrap is safe
        Self::new(1e-9).unwrap()
    }
}

impl Config {
    /// Creates an unbounded config with a validated tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `eps` is non-finite, zero, or negative.
    pub fn new(eps: f64) -> Result<Self, ToleranceError> {
        Ok(Self::from_tolerance(Tolerance::new(eps)?))
    }

    /// Creates an unbounded config from an existing tolerance.
    #[must_use]
    pub fn from_tolerance(tol: Tolerance) -> Self {
        Self {
            tol,
            max_iters: None,
        }
    }

    /// Returns a copy of this config that stops after `max_iters` computed steps.
    ///
    /// Seeds do not count toward the limit.
    #[must_use]
    pub fn with_max_iters(self, max_iters: usize) -> Self {
        Self {
            max_iters: Some(max_iters),
            ..self
        }
    }

    /// Returns the convergence tolerance.
    #[must_use]
    pub fn tol(&self) -> Tolerance {
        self.tol
    }

    /// Returns the step limit, if one was set.
    #[must_use]
    pub fn max_iters(&self) -> Option<usize> {
        self.max_iters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn new_config_is_unbounded() {
        let config = Config::new(1e-6).expect("valid tolerance");
        assert_relative_eq!(config.tol().value(), 1e-6);
        assert_eq!(config.max_iters(), None);
    }

    #[test]
    fn with_max_iters_keeps_tolerance() {
        let config = Config::new(1e-3).expect("valid tolerance").with_max_iters(25);
        assert_relative_eq!(config.tol().value(), 1e-3);
        assert_eq!(config.max_iters(), Some(25));
    }

    #[test]
    fn rejects_invalid_tolerance() {
        assert!(matches!(
            Config::new(-1e-6),
            Err(ToleranceError::NotPositive(_))
        ));
        assert!(matches!(
            Config::new(f64::NAN),
            Err(ToleranceError::NonFinite(_))
        ));
    }
}
