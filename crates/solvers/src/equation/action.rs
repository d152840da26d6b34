/// Control actions supported by the equation solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and return the iterate just reported.
    StopEarly,
}
