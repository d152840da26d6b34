//! Iterative root-finding solvers for `f(x) = 0` with `x` in R¹.
//!
//! See the [`equation`] module for the available methods.
//!
//! # Example
//!
//! ```
//! use rootline_core::Status;
//! use rootline_solvers::equation::{Config, newton};
//!
//! let f = |x: f64| x * x - 2.0;
//! let df = |x: f64| 2.0 * x;
//!
//! let config = Config::new(1e-7).expect("valid tolerance");
//! let solution = newton::solve_unobserved(f, df, 1.5, &config).expect("finite seed");
//!
//! assert_eq!(solution.status, Status::Converged);
//! assert!((solution.x - 2.0_f64.sqrt()).abs() < 1e-7);
//! ```

pub mod equation;
