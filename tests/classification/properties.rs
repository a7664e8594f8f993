//! Property Tests
//!
//! Random inputs checked against the validity predicate and the
//! classification rules.

use crate::common::*;
use proptest::prelude::*;

/// Reference validity check on i128, independent of the library.
fn is_valid(a: i32, b: i32, c: i32) -> bool {
    let (a, b, c) = (i128::from(a), i128::from(b), i128::from(c));
    a > 0 && b > 0 && c > 0 && a < b + c && b < a + c && c < a + b
}

/// Sides drawn from a small range so equal sides come up often.
fn small_side() -> impl Strategy<Value = i32> {
    -2i32..12
}

proptest! {
    #[test]
    fn construction_matches_reference(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
        prop_assert_eq!(Triangle::new(a, b, c).is_ok(), is_valid(a, b, c));
    }

    #[test]
    fn construction_matches_reference_small(a in small_side(), b in small_side(), c in small_side()) {
        prop_assert_eq!(Triangle::new(a, b, c).is_ok(), is_valid(a, b, c));
    }

    #[test]
    fn classification_is_permutation_invariant(a in 1i32..50, b in 1i32..50, c in 1i32..50) {
        prop_assume!(is_valid(a, b, c));
        let expected = kind(a, b, c);
        for [x, y, z] in permutations(a, b, c) {
            prop_assert_eq!(kind(x, y, z), expected);
        }
    }

    #[test]
    fn classification_counts_equal_sides(a in 1i32..50, b in 1i32..50, c in 1i32..50) {
        prop_assume!(is_valid(a, b, c));
        let equal_pairs = usize::from(a == b) + usize::from(a == c) + usize::from(b == c);
        let expected = match equal_pairs {
            3 => TriangleType::Equilateral,
            1 => TriangleType::Isosceles,
            _ => TriangleType::Scalene,
        };
        prop_assert_eq!(kind(a, b, c), expected);
    }

    #[test]
    fn classification_is_idempotent(a in 1i32..1000, b in 1i32..1000, c in 1i32..1000) {
        prop_assume!(is_valid(a, b, c));
        let t = triangle(a, b, c);
        prop_assert_eq!(classify(&t), classify(&t));
    }
}
