//! Movable chord (secant) method.
//!
//! Like the [static chord](super::chord), but the chord always passes
//! through the two latest iterates:
//!
//! ```text
//! x[n+1] = x[n] - f(x[n]) / (f(x[n]) - f(x[n-1])) * (x[n] - x[n-1])
//! ```
//!
//! Convergence near a simple root is superlinear. Equal function values at
//! the two latest iterates give a non-finite step.

use rootline_core::{Observer, Solution};

use super::{
    Action, Config, Error, Event,
    error::check_seed,
    iterate::{Seeds, run},
};

/// Finds a root of `f` using secants through the two latest iterates.
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
    let a = check_seed(a)?;
    let b = check_seed(b)?;

    Ok(run(
        "secant",
        Seeds::Two([a, b]),
        config.tol(),
        config.max_iters(),
        |window| {
            let (x, x_pre) = (window.current, window.previous);
            let f_x = f(x);
            x - f_x / (f_x - f(x_pre)) * (x - x_pre)
        },
        observer,
    ))
}

/// Runs the secant method without observation.
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

    use crate::equation::chord;

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
        assert_eq!(solution.iters, 8);
    }

    #[test]
    fn converges_no_slower_than_static_chord() {
        let cfg = config(1e-7);
        let moving = solve_unobserved(parabola, [1.0, 2.0], &cfg).expect("secant");
        let fixed = chord::solve_unobserved(parabola, [1.0, 2.0], &cfg).expect("chord");

        assert!(moving.iters <= fixed.iters);
    }

    #[test]
    fn first_step_is_the_static_chord_step() {
        let mut secant_steps = Vec::new();
        let mut chord_steps = Vec::new();
        let cfg = config(1e-7);

        solve(parabola, [1.0, 2.0], &cfg, |event: &Event| -> Option<Action> {
            secant_steps.push(event.x);
            None
        })
        .expect("secant");
        chord::solve(parabola, [1.0, 2.0], &cfg, |event: &Event| -> Option<Action> {
            chord_steps.push(event.x);
            None
        })
        .expect("chord");

        // Both methods use x[0] for the first chord, then diverge.
        assert_eq!(secant_steps[..3], chord_steps[..3]);
        assert!((secant_steps[3] - chord_steps[3]).abs() > 0.0);
    }

    #[test]
    fn finds_isaac_newton_secant_example() {
        let f = |x: f64| x * x * x + 10.0 * x * x - 7.0 * x - 44.0;

        let solution = solve_unobserved(f, [2.0, 2.3], &config(1e-12)).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, 2.206_817_317_248_44, epsilon = 1e-9);
    }

    #[test]
    fn equal_values_need_a_step_limit() {
        let limited = config(1e-9).with_max_iters(2);

        let solution = solve_unobserved(|_| 1.0, [0.0, 1.0], &limited).expect("finite seeds");

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, 4);
        assert!(!solution.is_finite());
    }

    #[test]
    fn rejects_non_finite_seeds() {
        let result = solve_unobserved(parabola, [0.0, f64::NAN], &config(1e-9));
        assert!(matches!(result, Err(Error::NonFiniteSeed { .. })));
    }
}
