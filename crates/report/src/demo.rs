//! The demonstration equation `sin(x) + 0.2 - 2x² = 0`.

/// Human-readable form of [`f`].
pub const EQUATION: &str = "sin(x) + 0.2 - 2x^2";

/// Target function.
pub fn f(x: f64) -> f64 {
    x.sin() + 0.2 - 2.0 * x * x
}

/// First derivative of [`f`].
pub fn df(x: f64) -> f64 {
    x.cos() - 4.0 * x
}

/// Iteration map for simple iteration, `x - f(x) / f'(x)`.
pub fn phi(x: f64) -> f64 {
    x - f(x) / df(x)
}
