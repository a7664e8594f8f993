//! Triangle value type
//!
//! A `Triangle` holds three integer side lengths and is valid by construction.
//!
//! ## Validation
//!
//! Side lengths must:
//! - All be strictly positive
//! - Satisfy the strict triangle inequality: each side is strictly less than
//!   the sum of the other two
//!
//! A side equal to the sum of the other two gives a degenerate triangle with
//! zero area, which is rejected.
//!
//! Sums are computed in `i64`, so any `i32` input is compared without overflow.

use crate::classify::classify;
use crate::contract::{Side, TriangleType};
use crate::error::{Error, InvalidReason, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A valid, immutable triangle
///
/// ## Examples
///
/// Valid:
/// - `(3, 4, 5)`
/// - `(10, 10, 10)`
/// - `(i32::MAX, i32::MAX, 1)`
///
/// Invalid:
/// - `(1, 2, 3)` (degenerate)
/// - `(1, 2, -5)` (non-positive side)
/// - `(0, 1, 1)` (zero side)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[i32; 3]", into = "[i32; 3]")]
pub struct Triangle {
    a: i32,
    b: i32,
    c: i32,
}

impl Triangle {
    /// Create a new Triangle, validating the side lengths
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if any side is not positive, or if
    /// any side is greater than or equal to the sum of the other two.
    pub fn new(a: i32, b: i32, c: i32) -> Result<Self> {
        if let Err(err) = Self::validate(a, b, c) {
            debug!(a, b, c, reason = %err.reason(), "Rejected triangle sides");
            return Err(err);
        }
        Ok(Triangle { a, b, c })
    }

    /// Validate three side lengths without constructing a Triangle
    ///
    /// Positivity is checked on all sides before the triangle inequality.
    /// Within each check the first failing side in `a, b, c` order is reported.
    pub fn validate(a: i32, b: i32, c: i32) -> Result<()> {
        let sides = [a, b, c];

        for side in Side::ALL {
            let length = sides[side.index()];
            if length <= 0 {
                return Err(Error::InvalidArgument(InvalidReason::NonPositiveSide {
                    side,
                    length,
                }));
            }
        }

        let (a, b, c) = (i64::from(a), i64::from(b), i64::from(c));
        let checks = [(Side::A, a, b + c), (Side::B, b, a + c), (Side::C, c, a + b)];
        for (side, length, sum) in checks {
            if length >= sum {
                return Err(Error::InvalidArgument(
                    InvalidReason::InequalityViolated { side, length, sum },
                ));
            }
        }

        Ok(())
    }

    /// First side
    #[inline]
    pub const fn a(&self) -> i32 {
        self.a
    }

    /// Second side
    #[inline]
    pub const fn b(&self) -> i32 {
        self.b
    }

    /// Third side
    #[inline]
    pub const fn c(&self) -> i32 {
        self.c
    }

    /// Length of the given side
    pub const fn side(&self, side: Side) -> i32 {
        match side {
            Side::A => self.a,
            Side::B => self.b,
            Side::C => self.c,
        }
    }

    /// All three sides in construction order
    pub const fn sides(&self) -> [i32; 3] {
        [self.a, self.b, self.c]
    }

    /// Sum of the three sides, widened so it cannot overflow
    pub fn perimeter(&self) -> i64 {
        i64::from(self.a) + i64::from(self.b) + i64::from(self.c)
    }

    /// Classify this triangle
    ///
    /// Shorthand for [`classify`].
    pub fn kind(&self) -> TriangleType {
        classify(self)
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "triangle({}, {}, {})", self.a, self.b, self.c)
    }
}

impl TryFrom<(i32, i32, i32)> for Triangle {
    type Error = Error;

    fn try_from((a, b, c): (i32, i32, i32)) -> Result<Self> {
        Triangle::new(a, b, c)
    }
}

impl TryFrom<[i32; 3]> for Triangle {
    type Error = Error;

    fn try_from([a, b, c]: [i32; 3]) -> Result<Self> {
        Triangle::new(a, b, c)
    }
}

impl From<Triangle> for [i32; 3] {
    fn from(t: Triangle) -> Self {
        t.sides()
    }
}

// ============================================================================
// Tests
// ============================================================================
