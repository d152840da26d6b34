//! Modified Newton's method with the derivative frozen at the seed.
//!
//! The derivative is evaluated once, `d0 = df(x0)`, and every step uses it:
//!
//! ```text
//! x[n+1] = x[n] - f(x[n]) / d0
//! ```
//!
//! This trades Newton's quadratic convergence for a single derivative
//! evaluation; convergence near the root is linear. A zero `d0` makes every
//! iterate non-finite, see [`newton`](super::newton) for the consequences.

use log::warn;
use rootline_core::{Observer, Solution};

use super::{Action, Config, Error, Event, error::check_seed, newton};

/// Finds a root of `f` from `x0` using Newton's method with a frozen derivative.
///
/// # Errors
///
/// Returns an error if `x0` is non-finite.
pub fn solve<F, D, Obs>(
    f: F,
    df: D,
    x0: f64,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
    Obs: Observer<Event, Action>,
{
    let x0 = check_seed(x0)?;
    let d0 = df(x0);

    #[allow(clippy::float_cmp)]
    if d0 == 0.0 || !d0.is_finite() {
        warn!("modified newton: derivative at x0 = {x0} is {d0}");
    }

    newton::solve(f, |_| d0, x0, config, observer)
}

/// Runs modified Newton without observation.
///
/// # Errors
///
/// Returns an error if `x0` is non-finite.
pub fn solve_unobserved<F, D>(f: F, df: D, x0: f64, config: &Config) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    solve(f, df, x0, config, ())
}
