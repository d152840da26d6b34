//! Simple (fixed-point) iteration.
//!
//! The equation `f(x) = 0` is rewritten by the caller as `x = phi(x)` and the
//! map is iterated from the seed:
//!
//! ```text
//! x[n+1] = phi(x[n])
//! ```
//!
//! Convergence requires `phi` to be a contraction near the root, which is not
//! checked. Unlike the other iterative solvers this one is always bounded:
//! with no step limit in the [`Config`] it stops after [`MAX_ITERATION`]
//! steps and reports [`Status::MaxIters`].
//!
//! [`Status::MaxIters`]: rootline_core::Status::MaxIters

use log::{Level, debug, log_enabled};
use rootline_core::{Observer, Solution};

use super::{
    Action, Config, Error, Event,
    error::check_seed,
    iterate::{Seeds, run},
};

/// Step limit applied when the config does not set one.
pub const MAX_ITERATION: usize = 10_000;

/// Iterates `phi` from `x0` until successive iterates agree.
///
/// `f` is the original equation. It does not drive the iteration and is
/// only evaluated to log the residual of the final iterate.
///
/// # Errors
///
/// Returns an error if `x0` is non-finite.
pub fn solve<F, P, Obs>(
    f: F,
    phi: P,
    x0: f64,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
    P: Fn(f64) -> f64,
    Obs: Observer<Event, Action>,
{
    let x0 = check_seed(x0)?;
    let max_iters = config.max_iters().unwrap_or(MAX_ITERATION);

    let solution = run(
        "fixed point",
        Seeds::One([x0]),
        config.tol(),
        Some(max_iters),
        |window| phi(window.current),
        observer,
    );

    if log_enabled!(Level::Debug) {
        debug!("fixed point: residual f({}) = {}", solution.x, f(solution.x));
    }

    Ok(solution)
}

/// Runs simple iteration without observation.
///
/// # Errors
///
/// Returns an error if `x0` is non-finite.
pub fn solve_unobserved<F, P>(f: F, phi: P, x0: f64, config: &Config) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
    P: Fn(f64) -> f64,
{
    solve(f, phi, x0, config, ())
}
