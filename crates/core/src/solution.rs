/// Indicates how a solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged according to the tolerance, or landed exactly on a root.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a root-finding solve.
///
/// `iters` counts every iterate the solver produced, seeds included, so it
/// is never zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// The last iterate, i.e. the root estimate.
    pub x: f64,

    /// Number of iterates produced, including the seed(s).
    pub iters: usize,
}

impl Solution {
    /// Creates a new solution.
    #[must_use]
    pub fn new(status: Status, x: f64, iters: usize) -> Self {
        debug_assert!(iters >= 1, "a solution always contains its seed");
        Self { status, x, iters }
    }

    /// Returns true if the solver reported convergence.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }

    /// Returns true if the root estimate is a finite number.
    ///
    /// Zero derivatives and flat chords show up as non-finite iterates rather
    /// than errors, so callers check this after a capped or stopped run.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite()
    }
}
