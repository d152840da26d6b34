//! Solvers for scalar equations: finding a root of `f(x) = 0`.
//!
//! Every solver takes the caller's functions as plain closures, returns a
//! [`Solution`] holding the last iterate and the number of iterates produced
//! (seeds included), and keeps no state between calls.
//!
//! # Solvers
//!
//! - [`bisection`]: halves a bracket a number of times derived from the tolerance
//! - [`newton`]: tangent steps using an analytic derivative
//! - [`modified_newton`]: Newton with the derivative frozen at the seed
//! - [`chord`]: static chord, anchored at the first seed
//! - [`secant`]: movable chord through the two latest iterates
//! - [`fixed_point`]: simple iteration of `x = phi(x)`, capped at
//!   [`fixed_point::MAX_ITERATION`]
//!
//! # Termination
//!
//! Newton, modified Newton, chord and secant follow the classical algorithms
//! and iterate until `|x[n+1] - x[n]| < eps`, with no built-in ceiling.
//! A zero derivative or a flat chord yields a non-finite iterate that never
//! passes that test. Bound these solvers with [`Config::with_max_iters`] or an
//! observer that returns [`Action::StopEarly`].
//!
//! [`Solution`]: rootline_core::Solution

mod action;
mod config;
mod error;
mod event;
mod iterate;

pub mod bisection;
pub mod chord;
pub mod fixed_point;
pub mod modified_newton;
pub mod newton;
pub mod secant;

pub use action::Action;
pub use config::Config;
pub use error::Error;
pub use event::Event;
