use log::{debug, warn};
use rootline_core::{Observer, Solution, Status, Tolerance};

use super::{Action, Event};

/// Starting points of an iterate sequence.
#[derive(Debug, Clone, Copy)]
pub(super) enum Seeds {
    /// Single-point methods (Newton, fixed point).
    One([f64; 1]),
    /// Two-point methods (chord, secant).
    Two([f64; 2]),
}

impl Seeds {
    fn values(&self) -> &[f64] {
        match self {
            Seeds::One(values) => values.as_slice(),
            Seeds::Two(values) => values.as_slice(),
        }
    }

    fn window(&self) -> Window {
        match *self {
            Seeds::One([x0]) => Window {
                first: x0,
                previous: x0,
                current: x0,
            },
            Seeds::Two([x0, x1]) => Window {
                first: x0,
                previous: x0,
                current: x1,
            },
        }
    }
}

/// The iterates visible to a step function.
///
/// Only the first seed and the two latest iterates are kept. For single-seed
/// sequences all three start at the seed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Window {
    pub(super) first: f64,
    pub(super) previous: f64,
    pub(super) current: f64,
}

impl Window {
    fn advance(&mut self, next: f64) {
        self.previous = self.current;
        self.current = next;
    }
}

/// Runs a one- or two-point iteration until successive iterates agree.
///
/// Emits one [`Event`] per iterate, seeds first. `step` computes the next
/// iterate from the current window. With `max_iters` unset the loop only ends
/// on convergence or an observer stop.
pub(super) fn run<S, Obs>(
    method: &str,
    seeds: Seeds,
    tol: Tolerance,
    max_iters: Option<usize>,
    mut step: S,
    mut observer: Obs,
) -> Solution
where
    S: FnMut(&Window) -> f64,
    Obs: Observer<Event, Action>,
{
    let mut previous = None;
    for (index, &x) in seeds.values().iter().enumerate() {
        let event = Event { index, previous, x };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return finish(method, Status::StoppedByObserver, x, index + 1);
        }
        previous = Some(x);
    }

    let mut window = seeds.window();
    let mut count = seeds.values().len();
    let mut steps = 0;
    let mut warned_non_finite = false;

    loop {
        if max_iters.is_some_and(|max| steps >= max) {
            warn!(
                "{method}: no convergence after {steps} steps, last x = {}",
                window.current
            );
            return finish(method, Status::MaxIters, window.current, count);
        }

        let next = step(&window);
        steps += 1;
        count += 1;

        if !next.is_finite() && !warned_non_finite {
            warn!(
                "{method}: iterate {} is {next}, the tolerance test can no longer pass",
                count - 1
            );
            warned_non_finite = true;
        }

        let event = Event {
            index: count - 1,
            previous: Some(window.current),
            x: next,
        };
        let action = observer.observe(&event);
        let converged = tol.is_met(window.current, next);
        window.advance(next);

        if let Some(Action::StopEarly) = action {
            return finish(method, Status::StoppedByObserver, next, count);
        }
        if converged {
            return finish(method, Status::Converged, next, count);
        }
    }
}

fn finish(method: &str, status: Status, x: f64, iters: usize) -> Solution {
    debug!("{method}: {status:?} at x = {x} after {iters} iterates");
    Solution::new(status, x, iters)
}
