use approx::assert_relative_eq;

use rootline_core::{Status, Tolerance};

use super::{Action, Error, Event, midpoint_budget, solve, solve_unobserved};

fn tol(eps: f64) -> Tolerance {
    Tolerance::new(eps).expect("valid tolerance")
}

fn parabola(x: f64) -> f64 {
    x * x - 2.0
}

#[test]
fn finds_square_root_of_two() {
    let solution = solve_unobserved(parabola, [0.0, 2.0], tol(1e-6)).expect("should solve");

    assert_eq!(solution.status, Status::Converged);
    assert!((solution.x - 2.0_f64.sqrt()).abs() <= 1e-6);

    // ceil(log2(2 / 1e-6)) = ceil(20.93) = 21
    assert_eq!(solution.iters, 21);
}

#[test]
fn budget_depends_only_on_width_and_tolerance() {
    assert_eq!(midpoint_budget(2.0, tol(1e-6)), 21);
    assert_eq!(midpoint_budget(1.0, tol(1e-3)), 10);
    assert_eq!(midpoint_budget(0.05, tol(5e-7)), 17);

    // At least one midpoint, even when the bracket is already tight.
    assert_eq!(midpoint_budget(1.5, tol(1.0)), 1);
    assert_eq!(midpoint_budget(1.0, tol(10.0)), 1);
}

#[test]
fn budget_is_clamped_for_extreme_ratios() {
    let budget = midpoint_budget(f64::MAX, tol(f64::MIN_POSITIVE));
    assert!(budget <= 2100);
}

#[test]
fn iteration_count_ignores_the_function() {
    let cubic = |x: f64| x * x * x - x - 2.0;

    let a = solve_unobserved(parabola, [1.0, 2.0], tol(1e-9)).expect("should solve");
    let b = solve_unobserved(cubic, [1.0, 2.0], tol(1e-9)).expect("should solve");

    assert_eq!(a.iters, b.iters);
    assert_eq!(a.iters, 30);
    assert_relative_eq!(b.x, 1.521_379_706_804_57, epsilon = 1e-9);
}

#[test]
fn tolerance_wider_than_bracket_returns_first_midpoint() {
    let solution = solve_unobserved(parabola, [1.0, 2.0], tol(5.0)).expect("should solve");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 1);
    assert_relative_eq!(solution.x, 1.5);
}

#[test]
fn exact_root_at_midpoint_stops_immediately() {
    let mut calls = 0;
    let f = |x: f64| x;
    let observer = |_: &Event| -> Option<Action> {
        calls += 1;
        None
    };

    let solution = solve(f, [-1.0, 1.0], tol(1e-6), observer).expect("should solve");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 1);
    assert_relative_eq!(solution.x, 0.0);
    assert_eq!(calls, 1);
}

#[test]
fn exact_root_after_a_few_splits() {
    // Midpoints of [0, 8]: 4, 2, 1 (exact root of x - 1).
    let solution = solve_unobserved(|x| x - 1.0, [0.0, 8.0], tol(1e-9)).expect("should solve");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 3);
    assert_relative_eq!(solution.x, 1.0);
}

#[test]
fn normalizes_reversed_bracket() {
    let forward = solve_unobserved(parabola, [0.0, 2.0], tol(1e-6)).expect("should solve");
    let reversed = solve_unobserved(parabola, [2.0, 0.0], tol(1e-6)).expect("should solve");

    assert_eq!(forward, reversed);
}

#[test]
fn errors_on_zero_width_bracket() {
    let result = solve_unobserved(parabola, [5.0, 5.0], tol(1e-6));
    assert!(matches!(result, Err(Error::ZeroWidthBracket { .. })));
}

#[test]
fn errors_on_non_finite_bracket() {
    let result = solve_unobserved(parabola, [f64::NAN, 10.0], tol(1e-6));
    assert!(matches!(result, Err(Error::NonFiniteBracket { .. })));

    let result = solve_unobserved(parabola, [0.0, f64::INFINITY], tol(1e-6));
    assert!(matches!(result, Err(Error::NonFiniteBracket { .. })));
}

#[test]
fn missing_sign_change_is_not_an_error() {
    // No real root: every split keeps the bracket, so the midpoint never moves.
    let solution =
        solve_unobserved(|x| x * x + 1.0, [0.0, 2.0], tol(1e-3)).expect("should return");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 11);
    assert_relative_eq!(solution.x, 1.0);
}

#[test]
fn observer_sees_bracket_halving() {
    let mut events = Vec::new();
    let observer = |event: &Event| -> Option<Action> {
        events.push(*event);
        None
    };

    let solution = solve(parabola, [0.0, 2.0], tol(1e-6), observer).expect("should solve");

    assert_eq!(events.len(), solution.iters);
    assert_relative_eq!(events[0].x, 1.0);
    assert_eq!(events[0].bracket, [0.0, 2.0]);
    for pair in events.windows(2) {
        assert_eq!(pair[1].index, pair[0].index + 1);
        assert_relative_eq!(pair[1].width(), pair[0].width() / 2.0);
    }
    assert_relative_eq!(events.last().expect("events").x, solution.x);
}

#[test]
fn observer_can_stop_iteration() {
    let observer = |event: &Event| (event.index == 3).then_some(Action::StopEarly);

    let solution = solve(parabola, [0.0, 2.0], tol(1e-6), observer).expect("should stop cleanly");

    // Midpoints: 1, 1.5, 1.25, 1.375
    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 4);
    assert_relative_eq!(solution.x, 1.375);
}

#[test]
fn demonstration_function_converges() {
    let f = |x: f64| (x.sin() + 0.2) - 2.0 * x * x;

    let solution = solve_unobserved(f, [0.6, 0.65], tol(5e-7)).expect("should solve");

    assert_eq!(solution.iters, 17);
    assert!(f(solution.x).abs() < 1e-6);
}

#[test]
fn repeated_calls_are_identical() {
    let first = solve_unobserved(parabola, [0.0, 2.0], tol(1e-12)).expect("should solve");
    let second = solve_unobserved(parabola, [0.0, 2.0], tol(1e-12)).expect("should solve");

    assert_eq!(first.x.to_bits(), second.x.to_bits());
    assert_eq!(first.iters, second.iters);
}
