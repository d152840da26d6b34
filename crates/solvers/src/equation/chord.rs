//! Static chord method.
//!
//! Seeds the sequence with `x[0] = a` and `x[1] = b` and keeps `x[0]` as a
//! fixed anchor. Each step intersects the chord through the anchor and the
//! current iterate with the x axis:
//!
//! ```text
//! x[n+1] = x[n] - f(x[n]) / (f(x[n]) - f(x[0])) * (x[n] - x[0])
//! ```
//!
//! The solver stops once `|x[n+1] - x[n]| < eps`. Convergence is linear.
//! If `f(x[n]) == f(x[0])` the step is non-finite and the run only ends
//! through a step limit or an observer.

use rootline_core::{Observer, Solution};

use super::{
    Action, Config, Error, Event,
    error::check_seed,
    iterate::{Seeds, run},
};

/// Finds a root of `f` using chords anchored at `seeds[0]`.
///
/// The returned iterate count includes both seeds.
///
/// # Errors
///
/// Returns an error if either seed is non-finite.
pub fn solve<F, Obs>(
    f: F,
    seeds: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
    Obs: Observer<Event, Action>,
{
    let [a, b] = seeds;
    let anchor = check_seed(a)?;
    let b = check_seed(b)?;
    let f_anchor = f(anchor);

    Ok(run(
        "chord",
        Seeds::Two([anchor, b]),
        config.tol(),
        config.max_iters(),
        |window| {
            let x = window.current;
            let f_x = f(x);
            x - f_x / (f_x - f_anchor) * (x - window.first)
        },
        observer,
    ))
}

/// Runs the static chord method without observation.
///
/// # Errors
///
/// Returns an error if either seed is non-finite.
pub fn solve_unobserved<F>(f: F, seeds: [f64; 2], config: &Config) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
{
    solve(f, seeds, config, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rootline_core::Status;

    fn config(eps: f64) -> Config {
        Config::new(eps).expect("valid tolerance")
    }

    fn parabola(x: f64) -> f64 {
        x * x - 2.0
    }

    #[test]
    fn finds_square_root_of_two() {
        let solution = solve_unobserved(parabola, [1.0, 2.0], &config(1e-7)).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, 2.0_f64.sqrt(), epsilon = 1e-7);
        assert_eq!(solution.iters, 12);
    }

    #[test]
    fn first_step_matches_hand_computation() {
        // x2 = 2 - 2 / (2 - (-1)) * (2 - 1) = 4/3
        let mut seen = Vec::new();
        let observer = |event: &Event| -> Option<Action> {
            seen.push(event.x);
            None
        };

        solve(parabola, [1.0, 2.0], &config(1e-7), observer).expect("should solve");

        assert_relative_eq!(seen[0], 1.0);
        assert_relative_eq!(seen[1], 2.0);
        assert_relative_eq!(seen[2], 4.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn keeps_the_anchor_fixed() {
        // For a linear function every chord is the function itself.
        let solution =
            solve_unobserved(|x| 2.0 * x - 1.0, [-3.0, 4.0], &config(1e-12)).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 4);
        assert_relative_eq!(solution.x, 0.5);
    }

    #[test]
    fn flat_chord_needs_a_step_limit() {
        // f(a) == f(b): the first step divides by zero.
        let limited = config(1e-9).with_max_iters(4);

        let solution = solve_unobserved(parabola, [-1.0, 1.0], &limited).expect("finite seeds");

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, 6);
        assert!(!solution.is_finite());
    }

    #[test]
    fn rejects_non_finite_seeds() {
        let result = solve_unobserved(parabola, [f64::NAN, 1.0], &config(1e-9));
        assert!(matches!(result, Err(Error::NonFiniteSeed { .. })));

        let result = solve_unobserved(parabola, [1.0, f64::NEG_INFINITY], &config(1e-9));
        assert!(matches!(result, Err(Error::NonFiniteSeed { .. })));
    }
}
