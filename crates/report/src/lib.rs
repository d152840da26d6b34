//! Runs every rootline solver on `sin(x) + 0.2 - 2x² = 0` and renders the
//! results as a text report.
//!
//! ```rust
//! use rootline_report::{Method, Problem, run};
//!
//! let report = run(&Problem::default()).unwrap();
//!
//! let newton = report.entry(Method::Newton).unwrap();
//! assert!((newton.solution.x - 0.627_270_791).abs() < 1e-6);
//! println!("{report}");
//! ```

pub mod demo;

mod report;

pub use report::{Entry, Error, Method, Problem, Report, run};
