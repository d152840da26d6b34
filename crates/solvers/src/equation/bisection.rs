//! Bisection (binary division) for a bracketed root.
//!
//! # Algorithm
//!
//! The solver halves `[from, to]` a fixed number of times,
//! `ceil(log2((to - from) / eps))`, which is the count after which the
//! midpoint lies within `eps` of a root of a continuous function. There is no
//! early exit on the tolerance: the count itself encodes it. The only early
//! exit is a midpoint where `f` is exactly zero.
//!
//! # Preconditions
//!
//! The bracket must contain a sign change of `f`. This is not enforced: a
//! bracket without one is logged as a warning and produces a meaningless
//! estimate.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per midpoint, the first included, carrying
//! the bracket being split. Observers can return [`Action::StopEarly`] to
//! return that midpoint immediately.

mod bracket;
mod event;

#[cfg(test)]
mod tests;

pub use event::Event;

use log::{debug, warn};
use rootline_core::{Observer, Solution, Status, Tolerance};

use super::{Action, Error};

use bracket::{Bounds, Bracket, Half};

/// Halvings that collapse any finite `f64` bracket onto adjacent floats.
const MAX_HALVINGS: usize = 2100;

/// Finds a root of `f` inside `bracket` using bisection.
///
/// Reversed brackets are normalized. The returned solution holds the last
/// midpoint and the number of midpoints computed.
///
/// # Errors
///
/// Returns an error if an endpoint is non-finite or the bracket has zero width.
pub fn solve<F, Obs>(
    f: F,
    bracket: [f64; 2],
    tol: Tolerance,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
    Obs: Observer<Event, Action>,
{
    let bounds = Bounds::new(bracket)?;
    let budget = midpoint_budget(bounds.width(), tol);

    let [left, right] = bounds.as_array();
    let mut bracket = Bracket::new(bounds, f(left), f(right));
    if !bracket.has_sign_change() {
        warn!(
            "bisection: f has no sign change on {:?}, the estimate is meaningless",
            bracket.as_array()
        );
    }

    let mut index = 0;
    loop {
        let x = bracket.midpoint();
        let iters = index + 1;

        let event = Event {
            index,
            bracket: bracket.as_array(),
            x,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(finish(Status::StoppedByObserver, x, iters));
        }

        if iters >= budget {
            return Ok(finish(Status::Converged, x, iters));
        }

        let f_x = f(x);

        #[allow(clippy::float_cmp)]
        if f_x == 0.0 {
            debug!("bisection: exact root at midpoint {index}");
            return Ok(finish(Status::Converged, x, iters));
        }

        if bracket.split(x, f_x) == Half::Neither {
            warn!(
                "bisection: no sign change around x = {x}, keeping {:?}",
                bracket.as_array()
            );
        }

        index += 1;
    }
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns an error if an endpoint is non-finite or the bracket has zero width.
pub fn solve_unobserved<F>(f: F, bracket: [f64; 2], tol: Tolerance) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
{
    solve(f, bracket, tol, ())
}

/// Number of midpoints needed so the last one is within `tol` of the root.
///
/// At least one midpoint is always produced.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn midpoint_budget(width: f64, tol: Tolerance) -> usize {
    let halvings = (width / tol.value()).log2().ceil();
    if halvings >= 1.0 {
        (halvings as usize).min(MAX_HALVINGS)
    } else {
        1
    }
}

fn finish(status: Status, x: f64, iters: usize) -> Solution {
    debug!("bisection: {status:?} at x = {x} after {iters} midpoints");
    Solution::new(status, x, iters)
}
