//! Capability traits for cross-solver observers.
//!
//! The bisection solver reports midpoints with a bracket, the other solvers
//! report iterates with their predecessor. These traits expose what the two
//! event types have in common so observers can be written once.
//!
//! # Event traits
//!
//! - [`HasIterate`]: events that carry a sequence position and an iterate
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use rootline_core::Observer;
//! use rootline_observers::traits::{CanStopEarly, HasIterate};
//!
//! /// Stops once an iterate leaves `[-bound, bound]`.
//! struct Escape {
//!     bound: f64,
//! }
//!
//! impl<E: HasIterate, A: CanStopEarly> Observer<E, A> for Escape {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.x().abs() > self.bound).then(A::stop_early)
//!     }
//! }
//! ```

use rootline_solvers::equation::{self, bisection};

/// An event that carries an iterate and its position in the sequence.
pub trait HasIterate {
    /// Returns the zero-based position of the iterate.
    fn index(&self) -> usize;

    /// Returns the iterate.
    fn x(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasIterate for equation::Event {
    fn index(&self) -> usize {
        self.index
    }

    fn x(&self) -> f64 {
        self.x
    }
}

impl HasIterate for bisection::Event {
    fn index(&self) -> usize {
        self.index
    }

    fn x(&self) -> f64 {
        self.x
    }
}

impl CanStopEarly for equation::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
