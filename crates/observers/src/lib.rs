//! Reusable observers for the rootline solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across every solver in `rootline-solvers`.
//!
//! # Modules
//!
//! - [`traits`]: capability traits for cross-solver observers
//!   ([`HasIterate`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`Recorder`] keeps the full iterate history.
//! - [`IterLimit`] stops a solver after a fixed number of iterates.
//! - [`LogObserver`] forwards every iterate to the `log` facade.
//!
//! [`Observer`]: rootline_core::Observer
//! [`HasIterate`]: traits::HasIterate
//! [`CanStopEarly`]: traits::CanStopEarly

mod limit;
mod logging;
mod recorder;

pub mod traits;

pub use limit::IterLimit;
pub use logging::LogObserver;
pub use recorder::Recorder;
