//! Internal / external / snapshot module states.
//!
//! Each state is computed independently from the same read-only sequence.
//! Empty sequences yield [`ModuleState::EMPTY`].

use amtp_core::models::{FieldOperator, ModuleState};

use crate::coherence::{circular_mean, phase_coherence, phases};
use crate::stats;

/// Tension view.
///
/// - value: mean tension
/// - energy: RMS of tension
/// - coherence: phase coherence
/// - stability: `1 − min(1, var(tension))`
pub fn internal_state(seq: &[FieldOperator]) -> ModuleState {
    if seq.is_empty() {
        return ModuleState::EMPTY;
    }
    let tensions: Vec<f64> = seq.iter().map(|op| op.tension).collect();

    ModuleState {
        value: stats::mean(&tensions),
        energy: stats::rms(&tensions),
        coherence: phase_coherence(&phases(seq)),
        stability: 1.0 - stats::population_variance(&tensions).min(1.0),
    }
}

/// Curvature view.
///
/// - value: mean curvature
/// - energy: largest curvature jump between neighbours
/// - coherence: phase coherence
/// - stability: `1 − min(1, var(curvature))`
pub fn external_state(seq: &[FieldOperator]) -> ModuleState {
    if seq.is_empty() {
        return ModuleState::EMPTY;
    }
    let curvatures: Vec<f64> = seq.iter().map(|op| op.curvature).collect();

    ModuleState {
        value: stats::mean(&curvatures),
        energy: stats::max_abs_delta(&curvatures),
        coherence: phase_coherence(&phases(seq)),
        stability: 1.0 - stats::population_variance(&curvatures).min(1.0),
    }
}

/// Phase view. Stability mirrors coherence.
pub fn snapshot_state(seq: &[FieldOperator]) -> ModuleState {
    if seq.is_empty() {
        return ModuleState::EMPTY;
    }
    let phases = phases(seq);
    let coherence = phase_coherence(&phases);

    ModuleState {
        value: circular_mean(&phases),
        energy: mean_energy(seq),
        coherence,
        stability: coherence,
    }
}

/// All three states: `(internal, external, snapshot)`.
pub fn aggregate(seq: &[FieldOperator]) -> (ModuleState, ModuleState, ModuleState) {
    (internal_state(seq), external_state(seq), snapshot_state(seq))
}

/// Mean of `tension² + curvature²`.
pub(crate) fn mean_energy(seq: &[FieldOperator]) -> f64 {
    if seq.is_empty() {
        return 0.0;
    }
    seq.iter().map(FieldOperator::energy).sum::<f64>() / seq.len() as f64
}
