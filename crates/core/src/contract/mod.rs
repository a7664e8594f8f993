//! Contract types
//!
//! The value types that make up the public API:
//!
//! - `triangle`: validated, immutable side lengths
//! - `triangle_type`: the three triangle categories
//! - `side`: side labels used in error reports
//!
//! ## Usage
//!
//! ```
//! use trigon_core::contract::{Side, Triangle, TriangleType};
//! ```

pub mod side;
pub mod triangle;
pub mod triangle_type;

// Re-exports
pub use side::Side;
pub use triangle::Triangle;
pub use triangle_type::TriangleType;
