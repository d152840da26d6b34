use super::Error;

/// Ordered finite bounds for a bisection bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bounds {
    left: f64,
    right: f64,
}

impl Bounds {
    /// Validates and orders the bracket endpoints.
    ///
    /// # Errors
    ///
    /// Returns an error if endpoints are non-finite or zero width.
    pub(super) fn new(bracket: [f64; 2]) -> Result<Self, Error> {
        let [left, right] = bracket;

        if !left.is_finite() {
            return Err(Error::NonFiniteBracket { value: left });
        }
        if !right.is_finite() {
            return Err(Error::NonFiniteBracket { value: right });
        }

        #[allow(clippy::float_cmp)]
        if left == right {
            return Err(Error::ZeroWidthBracket { value: left });
        }

        if left < right {
            Ok(Self { left, right })
        } else {
            Ok(Self {
                left: right,
                right: left,
            })
        }
    }

    /// Returns the bounds as an array.
    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Returns the bracket width.
    pub(super) fn width(&self) -> f64 {
        self.right - self.left
    }
}

/// Which half of the bracket was kept by a split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Half {
    /// `[left, x]` straddles the sign change.
    Lower,
    /// `[x, right]` straddles the sign change.
    Upper,
    /// Neither half straddles a sign change; the bracket is unchanged.
    Neither,
}

/// Current bracket bounds and the function values at them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    left: f64,
    right: f64,
    f_left: f64,
    f_right: f64,
}

impl Bracket {
    pub(super) fn new(bounds: Bounds, f_left: f64, f_right: f64) -> Self {
        Self {
            left: bounds.left,
            right: bounds.right,
            f_left,
            f_right,
        }
    }

    /// Returns the bracket bounds as an array.
    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Returns the midpoint of the bracket.
    pub(super) fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    /// Returns true if the endpoint values have strictly opposite signs.
    pub(super) fn has_sign_change(&self) -> bool {
        straddles(self.f_left, self.f_right)
    }

    /// Keeps the half of the bracket that straddles a sign change around `x`.
    ///
    /// Both halves are tested; when both straddle (only possible if the
    /// endpoints share a sign) the upper half wins.
    pub(super) fn split(&mut self, x: f64, f_x: f64) -> Half {
        if straddles(f_x, self.f_right) {
            self.left = x;
            self.f_left = f_x;
            Half::Upper
        } else if straddles(self.f_left, f_x) {
            self.right = x;
            self.f_right = f_x;
            Half::Lower
        } else {
            Half::Neither
        }
    }
}

/// Whether `lhs * rhs < 0`, without the product underflowing to zero.
fn straddles(lhs: f64, rhs: f64) -> bool {
    (lhs < 0.0 && rhs > 0.0) || (lhs > 0.0 && rhs < 0.0)
}
