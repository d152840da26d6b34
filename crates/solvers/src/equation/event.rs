/// Iterate event emitted by the chord, secant, Newton and fixed-point solvers.
///
/// One event is emitted per iterate, seeds included, in sequence order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Position of the iterate in the sequence (0 for the first seed).
    pub index: usize,
    /// The iterate preceding this one, or `None` for the first seed.
    pub previous: Option<f64>,
    /// The iterate itself.
    pub x: f64,
}

impl Event {
    /// Returns `|x - previous|`, the quantity compared against the tolerance.
    ///
    /// The first seed has no predecessor and reports `f64::INFINITY`.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.previous
            .map_or(f64::INFINITY, |previous| (self.x - previous).abs())
    }
}
