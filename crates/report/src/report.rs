use std::fmt;

use rootline_core::{Solution, Status, ToleranceError};
use rootline_observers::LogObserver;
use rootline_solvers::equation::{
    self, Config, bisection, chord, fixed_point, modified_newton, newton, secant,
};
use thiserror::Error;

use crate::demo;

/// Inputs shared by every solver in a report run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Problem {
    /// Convergence tolerance.
    pub eps: f64,
    /// Bracket for bisection and the seed pair for both chord methods.
    pub interval: [f64; 2],
    /// Seed for both Newton variants.
    pub newton_seed: f64,
    /// Seed for simple iteration.
    pub iteration_seed: f64,
}

impl Default for Problem {
    fn default() -> Self {
        Self {
            eps: 5e-7,
            interval: [0.6, 0.65],
            newton_seed: 0.65,
            iteration_seed: 0.6,
        }
    }
}

/// The six solvers, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Bisection,
    Newton,
    ModifiedNewton,
    Chord,
    Secant,
    FixedPoint,
}

impl Method {
    pub const ALL: [Self; 6] = [
        Self::Bisection,
        Self::Newton,
        Self::ModifiedNewton,
        Self::Chord,
        Self::Secant,
        Self::FixedPoint,
    ];

    /// Numbered heading used in the report.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Bisection => "1. Bisection method",
            Self::Newton => "2. Newton's method",
            Self::ModifiedNewton => "3. Modified Newton's method",
            Self::Chord => "4. Static chord method",
            Self::Secant => "5. Movable chord method",
            Self::FixedPoint => "6. Simple iteration method",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Bisection => "bisection",
            Self::Newton => "newton",
            Self::ModifiedNewton => "modified newton",
            Self::Chord => "chord",
            Self::Secant => "secant",
            Self::FixedPoint => "fixed point",
        }
    }

    fn observer(self) -> LogObserver {
        LogObserver::new(self.name())
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors that prevent a report from being produced.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid tolerance: {0}")]
    Tolerance(#[from] ToleranceError),

    #[error("{method} rejected its input: {source}")]
    Solver {
        method: Method,
        source: equation::Error,
    },
}

/// One solver's outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry {
    pub method: Method,
    pub solution: Solution,
}

/// Outcome of running every solver on the demonstration equation.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub problem: Problem,
    pub entries: Vec<Entry>,
}

impl Report {
    /// Returns the entry for `method`.
    #[must_use]
    pub fn entry(&self, method: Method) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.method == method)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b] = self.problem.interval;

        writeln!(f, "Report:")?;
        writeln!(f)?;
        writeln!(f, "Function: {}", demo::EQUATION)?;
        write!(f, "Start: {a}, End: {b}. Tolerance: {}", self.problem.eps)?;

        for Entry { method, solution } in &self.entries {
            writeln!(f)?;
            writeln!(f)?;
            writeln!(f, "{}", method.label())?;
            write!(f, "Value: {}, Iterations: {}", solution.x, solution.iters)?;
            match solution.status {
                Status::Converged => {}
                Status::MaxIters => write!(f, " (iteration limit reached)")?,
                Status::StoppedByObserver => write!(f, " (stopped early)")?,
            }
        }

        Ok(())
    }
}

/// Runs all six solvers on the demonstration equation.
///
/// Every iterate is forwarded to the `log` facade at trace level.
///
/// # Errors
///
/// Returns an error if the tolerance is invalid or a solver rejects its
/// interval or seed.
pub fn run(problem: &Problem) -> Result<Report, Error> {
    let config = Config::new(problem.eps)?;
    let Problem {
        interval,
        newton_seed,
        iteration_seed,
        ..
    } = *problem;

    let entries = Method::ALL
        .into_iter()
        .map(|method| {
            let observer = method.observer();
            let result = match method {
                Method::Bisection => bisection::solve(demo::f, interval, config.tol(), observer),
                Method::Newton => newton::solve(demo::f, demo::df, newton_seed, &config, observer),
                Method::ModifiedNewton => {
                    modified_newton::solve(demo::f, demo::df, newton_seed, &config, observer)
                }
                Method::Chord => chord::solve(demo::f, interval, &config, observer),
                Method::Secant => secant::solve(demo::f, interval, &config, observer),
                Method::FixedPoint => {
                    fixed_point::solve(demo::f, demo::phi, iteration_seed, &config, observer)
                }
            };
            result
                .map(|solution| Entry { method, solution })
                .map_err(|source| Error::Solver { method, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Report {
        problem: *problem,
        entries,
    })
}
