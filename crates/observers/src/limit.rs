//! Caller-side iteration ceiling.

use log::warn;
use rootline_core::Observer;

use crate::traits::{CanStopEarly, HasIterate};

/// Stops a solver once it has reported `max_iters` iterates.
///
/// Works with every solver, including the ones that run unbounded by
/// default. The iterate that reaches the limit is returned as the solution
/// with [`Status::StoppedByObserver`].
///
/// [`Status::StoppedByObserver`]: rootline_core::Status::StoppedByObserver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterLimit {
    max_iters: usize,
    seen: usize,
    tripped: bool,
}

impl IterLimit {
    /// Creates a watchdog allowing `max_iters` iterates.
    ///
    /// A limit of zero behaves like a limit of one: the first iterate is
    /// always reported before the observer can act.
    #[must_use]
    pub fn new(max_iters: usize) -> Self {
        Self {
            max_iters,
            seen: 0,
            tripped: false,
        }
    }

    /// Returns the configured limit.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the number of iterates observed so far.
    #[must_use]
    pub fn seen(&self) -> usize {
        self.seen
    }

    /// Returns `true` if the limit stopped the solver.
    #[must_use]
    pub fn tripped(&self) -> bool {
        self.tripped
    }
}

impl<E: HasIterate, A: CanStopEarly> Observer<E, A> for IterLimit {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.seen += 1;
        if self.seen < self.max_iters {
            return None;
        }

        warn!(
            "iteration limit of {} reached at x = {}",
            self.max_iters,
            event.x()
        );
        self.tripped = true;
        Some(A::stop_early())
    }
}

/// Allows `&mut IterLimit` to be passed to solvers that take an observer by
/// value, so [`IterLimit::tripped`] can be checked afterwards.
impl<E: HasIterate, A: CanStopEarly> Observer<E, A> for &mut IterLimit {
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}
