//! Side labels
//!
//! Identifies one of the three sides of a triangle in error reports.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three sides of a triangle, in construction order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    /// First side
    A,
    /// Second side
    B,
    /// Third side
    C,
}

impl Side {
    /// All sides in construction order
    pub const ALL: [Side; 3] = [Side::A, Side::B, Side::C];

    /// Position of this side in the `(a, b, c)` tuple
    pub const fn index(&self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
            Side::C => 2,
        }
    }

    /// Lowercase label
    pub const fn name(&self) -> &'static str {
        match self {
            Side::A => "a",
            Side::B => "b",
            Side::C => "c",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
