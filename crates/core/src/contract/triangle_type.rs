//! Triangle type enumeration
//!
//! ## The Three Types
//!
//! | Type | Equal sides |
//! |------|-------------|
//! | Equilateral | all three |
//! | Isosceles | exactly two |
//! | Scalene | none |
//!
//! The variants carry no behavior. Deciding which one applies is done by
//! [`classify`](crate::classify::classify).

use serde::{Deserialize, Serialize};

/// The category of a valid triangle
///
/// ## Invariant
///
/// Exactly one variant applies to every valid triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriangleType {
    /// All three sides equal
    Equilateral,

    /// Exactly two sides equal
    Isosceles,

    /// All sides pairwise distinct
    Scalene,
}

impl TriangleType {
    /// All triangle types, in the order the classification rules are tried
    pub const ALL: [TriangleType; 3] = [
        TriangleType::Equilateral,
        TriangleType::Isosceles,
        TriangleType::Scalene,
    ];

    /// Get all triangle types as a slice
    pub fn all() -> &'static [TriangleType] {
        &Self::ALL
    }

    /// Human-readable display name
    pub const fn name(&self) -> &'static str {
        match self {
            TriangleType::Equilateral => "Equilateral",
            TriangleType::Isosceles => "Isosceles",
            TriangleType::Scalene => "Scalene",
        }
    }

    /// Short identifier (for serialization)
    pub const fn id(&self) -> &'static str {
        match self {
            TriangleType::Equilateral => "equilateral",
            TriangleType::Isosceles => "isosceles",
            TriangleType::Scalene => "scalene",
        }
    }

    /// Parse from short identifier
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "equilateral" => Some(TriangleType::Equilateral),
            "isosceles" => Some(TriangleType::Isosceles),
            "scalene" => Some(TriangleType::Scalene),
            _ => None,
        }
    }

    /// Number of sides sharing the most common length
    pub const fn equal_sides(&self) -> usize {
        match self {
            TriangleType::Equilateral => 3,
            TriangleType::Isosceles => 2,
            TriangleType::Scalene => 1,
        }
    }
}

impl std::fmt::Display for TriangleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Tests
// ============================================================================
