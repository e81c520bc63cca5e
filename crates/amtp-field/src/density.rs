//! Semantic density: geometric mean of energy, phase diversity and curvature spread.

use std::collections::HashSet;

use amtp_core::models::FieldOperator;

use crate::modules::mean_energy;
use crate::stats;

/// The three factors behind [`semantic_density`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityBreakdown {
    /// Mean `tension² + curvature²`.
    pub energy_density: f64,
    /// Distinct phases (rounded to 2 decimals) over sequence length, in (0, 1].
    pub phase_complexity: f64,
    /// Population variance of curvature.
    pub curvature_variance: f64,
    /// `cbrt(energy_density · phase_complexity · curvature_variance)`, or 0.0
    /// when the product is not positive.
    pub density: f64,
}

impl DensityBreakdown {
    const EMPTY: DensityBreakdown = DensityBreakdown {
        energy_density: 0.0,
        phase_complexity: 0.0,
        curvature_variance: 0.0,
        density: 0.0,
    };
}

/// Semantic density of a sequence; 0.0 for empty input.
pub fn semantic_density(seq: &[FieldOperator]) -> f64 {
    density_breakdown(seq).density
}

/// Compute density with each factor exposed.
pub fn density_breakdown(seq: &[FieldOperator]) -> DensityBreakdown {
    if seq.is_empty() {
        return DensityBreakdown::EMPTY;
    }

    let energy_density = mean_energy(seq);

    let regions: HashSet<i64> = seq.iter().map(|op| phase_region(op.phase)).collect();
    let phase_complexity = regions.len() as f64 / seq.len() as f64;

    let curvatures: Vec<f64> = seq.iter().map(|op| op.curvature).collect();
    let curvature_variance = stats::population_variance(&curvatures);

    // All factors are >= 0; a product that rounds to zero or below is treated
    // as zero instead of taking a fractional root of it.
    let product = energy_density * phase_complexity * curvature_variance;
    let density = if product > 0.0 { product.cbrt() } else { 0.0 };

    DensityBreakdown {
        energy_density,
        phase_complexity,
        curvature_variance,
        density,
    }
}

/// Phase rounded to two decimals, half away from zero, as an integer key.
///
/// Rounds the scaled binary value `θ·100`. This can disagree with decimal
/// round-half-to-even on `θ` (Python's `round(θ, 2)`) by one key when `θ·100`
/// sits on a `.5` boundary.
fn phase_region(phase: f64) -> i64 {
    (phase * 100.0).round() as i64
}
