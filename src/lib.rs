//! Trigon - triangle validation and classification
//!
//! Build a [`Triangle`] from three integer side lengths, then [`classify`] it
//! as [`TriangleType::Equilateral`], [`TriangleType::Isosceles`] or
//! [`TriangleType::Scalene`].
//!
//! # Quick Start
//!
//! ```
//! use trigon::{classify, Triangle, TriangleType};
//!
//! let t = Triangle::new(10, 5, 8)?;
//! assert_eq!(classify(&t), TriangleType::Scalene);
//!
//! // Degenerate and non-positive inputs are rejected at construction
//! assert!(Triangle::new(1, 2, 3).is_err());
//! assert!(Triangle::new(1, 2, -5).is_err());
//! # Ok::<(), trigon::Error>(())
//! ```
//!
//! # Architecture
//!
//! All types and rules live in `trigon-core`; this crate re-exports them.

// Re-export the public API from trigon-core
pub use trigon_core::*;
