//! Triangle classification
//!
//! ## Rule order
//!
//! The rules are tried in a fixed order and the first match wins:
//!
//! 1. Equilateral: `a == b && b == c`
//! 2. Isosceles: `a == b || a == c || b == c`
//! 3. Scalene: everything else
//!
//! Equilateral is a special case of the isosceles predicate, so it must be
//! tested first. The order lives here and not in the declaration order of
//! `TriangleType`.

use crate::contract::{Triangle, TriangleType};
use crate::error::Result;
use tracing::trace;

/// Classify a valid triangle
///
/// Total over every `Triangle`: construction already rejected anything that
/// is not a triangle, so this never fails. The result does not depend on
/// which side is labelled `a`, `b` or `c`.
pub fn classify(t: &Triangle) -> TriangleType {
    let [a, b, c] = t.sides();

    let kind = if a == b && b == c {
        TriangleType::Equilateral
    } else if a == b || a == c || b == c {
        TriangleType::Isosceles
    } else {
        TriangleType::Scalene
    };

    trace!(a, b, c, kind = %kind, "Classified triangle");
    kind
}

/// Validate three side lengths and classify the resulting triangle
///
/// # Errors
///
/// Returns the construction error from [`Triangle::new`].
pub fn classify_sides(a: i32, b: i32, c: i32) -> Result<TriangleType> {
    let t = Triangle::new(a, b, c)?;
    Ok(classify(&t))
}
