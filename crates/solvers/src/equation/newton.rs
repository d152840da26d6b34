//! Newton's method.
//!
//! Each step follows the tangent at the current iterate:
//!
//! ```text
//! x[n+1] = x[n] - f(x[n]) / df(x[n])
//! ```
//!
//! The solver stops as soon as `|x[n+1] - x[n]| < eps`. Close to a simple
//! root convergence is quadratic.
//!
//! A zero derivative is not trapped; it produces a non-finite iterate that
//! never meets the tolerance. Without a step limit in the [`Config`] or an
//! observer that stops early, such a run does not terminate.

use rootline_core::{Observer, Solution};

use super::{
    Action, Config, Error, Event,
    error::check_seed,
    iterate::{Seeds, run},
};

/// Finds a root of `f` from the seed `x0` using Newton's method.
///
/// `df` is the analytic first derivative of `f`. Observers receive an
/// [`Event`] for the seed and for every computed iterate.
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

    Ok(run(
        "newton",
        Seeds::One([x0]),
        config.tol(),
        config.max_iters(),
        |window| {
            let x = window.current;
            x - f(x) / df(x)
        },
        observer,
    ))
}

/// Runs Newton's method without observation.
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
