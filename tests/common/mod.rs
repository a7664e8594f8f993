//! Shared test utilities for the integration suites.
//!
//! Import via `mod common;` from any test's main.rs.

#![allow(dead_code)]

use std::sync::Once;
pub use trigon::{classify, Error, InvalidReason, Side, Triangle, TriangleType};

// ============================================================================
// Initialization
// ============================================================================

static INIT_TRACING: Once = Once::new();

/// Install a tracing subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    });
}

// ============================================================================
// Helpers
// ============================================================================

/// Build a triangle that the test knows to be valid.
pub fn triangle(a: i32, b: i32, c: i32) -> Triangle {
    Triangle::new(a, b, c).unwrap()
}

/// Classify sides that the test knows to be valid.
pub fn kind(a: i32, b: i32, c: i32) -> TriangleType {
    classify(&triangle(a, b, c))
}

/// All six orderings of three sides.
pub fn permutations(a: i32, b: i32, c: i32) -> [[i32; 3]; 6] {
    [
        [a, b, c],
        [a, c, b],
        [b, a, c],
        [b, c, a],
        [c, a, b],
        [c, b, a],
    ]
}
