//! Error types for triangle construction
//!
//! Callers see a single error kind, `InvalidArgument`, raised synchronously when
//! a `Triangle` is constructed. The attached `InvalidReason` tells the two
//! rejection causes apart for diagnostics.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use crate::contract::Side;
use thiserror::Error;

/// Result type alias for trigon operations
pub type Result<T> = std::result::Result<T, Error>;

/// Why a set of side lengths was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum InvalidReason {
    /// A side length is zero or negative
    #[error("all sides must be positive: side {side} is {length}")]
    NonPositiveSide {
        /// The first offending side
        side: Side,
        /// Its length
        length: i32,
    },

    /// A side is greater than or equal to the sum of the other two
    #[error(
        "not a triangle: side {side} ({length}) is >= the sum of the other two ({sum}), violating the triangle inequality"
    )]
    InequalityViolated {
        /// The first offending side
        side: Side,
        /// Its length
        length: i64,
        /// Sum of the two other sides
        sum: i64,
    },
}

/// Error types for trigon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Error {
    /// The side lengths cannot form a valid triangle
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidReason),
}

impl Error {
    /// The reason the input was rejected
    pub const fn reason(&self) -> InvalidReason {
        match self {
            Error::InvalidArgument(reason) => *reason,
        }
    }

    /// Whether this is an invalid-argument error
    ///
    /// Always true today. Lets callers match on the kind without naming
    /// the variant.
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }
}
