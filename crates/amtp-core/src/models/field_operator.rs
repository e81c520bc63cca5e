use serde::{Deserialize, Serialize};

/// The (tension, curvature, phase) triple assigned to one character or byte.
///
/// Produced by the field mapper, which guarantees:
/// - `tension` ∈ [-1.0, 1.0] for characters; raw bytes reach `255/127·2 − 1`
/// - `curvature` ∈ [-1.0, 1.0]
/// - `phase` ∈ [0.0, 2π)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldOperator {
    /// Δφ: position/weight of the character.
    pub tension: f64,
    /// κ: local bend.
    pub curvature: f64,
    /// θ: angle on the circle, in radians.
    pub phase: f64,
    /// Original codepoint (or byte value on the binary path).
    pub codepoint: u32,
}

impl FieldOperator {
    /// `tension² + curvature²`, the per-operator energy used by the snapshot
    /// state and the density analyzer.
    pub fn energy(&self) -> f64 {
        self.tension * self.tension + self.curvature * self.curvature
    }
}

/// Ordered field operators, one per input character/byte.
pub type FieldSequence = Vec<FieldOperator>;
