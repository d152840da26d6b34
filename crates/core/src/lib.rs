//! Core traits and types for the rootline solvers.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`Solution`] and [`Status`]: the result every solver returns
//! - [`Tolerance`]: a validated convergence threshold

mod observer;
mod solution;
mod tolerance;

pub use observer::Observer;
pub use solution::{Solution, Status};
pub use tolerance::{Tolerance, ToleranceError};
