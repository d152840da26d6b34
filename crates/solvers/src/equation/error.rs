use thiserror::Error;

/// Errors that can occur when starting an equation solver.
///
/// Only malformed inputs are reported here. Numeric breakdowns during the
/// iteration (zero derivatives, flat chords) surface as non-finite iterates.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("seed must be finite, got {value}")]
    NonFiniteSeed { value: f64 },

    #[error("bracket contains non-finite value: {value}")]
    NonFiniteBracket { value: f64 },

    #[error("bracket has zero width: left and right are both {value}")]
    ZeroWidthBracket { value: f64 },
}

/// Rejects a non-finite starting point.
pub(super) fn check_seed(value: f64) -> Result<f64, Error> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFiniteSeed { value })
    }
}
