/// Midpoint event emitted by the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Position of the midpoint in the sequence (0 for the first midpoint).
    pub index: usize,
    /// The bracket this midpoint splits.
    pub bracket: [f64; 2],
    /// The midpoint.
    pub x: f64,
}

impl Event {
    /// Returns the width of the current bracket.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.bracket[1] - self.bracket[0]
    }
}
