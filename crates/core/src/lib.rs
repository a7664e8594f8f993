//! Core types and classification for Trigon
//!
//! This crate defines:
//! - Triangle: three side lengths, valid by construction
//! - TriangleType: Equilateral, Isosceles or Scalene
//! - classify: the ordered classification rule
//! - Error: the single `InvalidArgument` error kind and its reasons
//!
//! ```
//! use trigon_core::{classify, Triangle, TriangleType};
//!
//! let t = Triangle::new(5, 10, 10)?;
//! assert_eq!(classify(&t), TriangleType::Isosceles);
//! assert!(Triangle::new(1, 2, 3).is_err());
//! # Ok::<(), trigon_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod classify;
pub mod contract;
pub mod error;

pub use classify::{classify, classify_sides};
pub use contract::{Side, Triangle, TriangleType};
pub use error::{Error, InvalidReason, Result};
