//! Iterate history recording.

use rootline_core::Observer;

use crate::traits::HasIterate;

/// Records every iterate a solver reports.
///
/// The solvers keep only the iterates they need for the next step. Pass a
/// `&mut Recorder` as the observer to keep the whole sequence:
///
/// ```rust
/// use rootline_observers::Recorder;
/// use rootline_solvers::equation::{Config, newton};
///
/// let mut recorder = Recorder::new();
/// let config = Config::new(1e-10).unwrap();
///
/// let solution =
///     newton::solve(|x| x * x - 2.0, |x| 2.0 * x, 1.5, &config, &mut recorder).unwrap();
///
/// assert_eq!(recorder.len(), solution.iters);
/// assert_eq!(recorder.iterates()[0], 1.5);
/// ```
///
/// The recorder never requests an action.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recorder {
    iterates: Vec<f64>,
}

impl Recorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded iterates in sequence order.
    #[must_use]
    pub fn iterates(&self) -> &[f64] {
        &self.iterates
    }

    /// Returns the number of recorded iterates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iterates.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iterates.is_empty()
    }

    /// Returns the most recent iterate, if any.
    #[must_use]
    pub fn last(&self) -> Option<f64> {
        self.iterates.last().copied()
    }

    /// Returns the absolute differences between consecutive iterates.
    #[must_use]
    pub fn steps(&self) -> Vec<f64> {
        self.iterates
            .windows(2)
            .map(|pair| (pair[1] - pair[0]).abs())
            .collect()
    }

    /// Clears the history so the recorder can be reused.
    pub fn clear(&mut self) {
        self.iterates.clear();
    }

    /// Consumes the recorder and returns the history.
    #[must_use]
    pub fn into_iterates(self) -> Vec<f64> {
        self.iterates
    }
}

impl<E: HasIterate, A> Observer<E, A> for Recorder {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.iterates.push(event.x());
        None
    }
}

/// Allows `&mut Recorder` to be passed to solvers that take an observer by
/// value, so the history can be read after the solve completes.
impl<E: HasIterate, A> Observer<E, A> for &mut Recorder {
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}
