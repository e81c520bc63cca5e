//! Coherence across a field sequence and circular statistics over phases.

use amtp_core::models::FieldOperator;

/// Pairwise coherence of consecutive operators:
///
/// ```text
/// mean over i ≥ 1 of  |cos((θᵢ + θᵢ₋₁) / 2)| · exp(−|Δφᵢ − Δφᵢ₋₁|)
/// ```
///
/// Rewards smooth phase transitions between neighbours of similar tension.
/// Sequences shorter than two elements are fully coherent (1.0).
pub fn sequence_coherence(seq: &[FieldOperator]) -> f64 {
    if seq.len() < 2 {
        return 1.0;
    }

    let total: f64 = seq
        .windows(2)
        .map(|w| {
            let (prev, curr) = (&w[0], &w[1]);
            let phase_alignment = ((curr.phase + prev.phase) / 2.0).cos().abs();
            let tension_similarity = (-(curr.tension - prev.tension).abs()).exp();
            phase_alignment * tension_similarity
        })
        .sum();

    total / (seq.len() - 1) as f64
}

/// Magnitude of the mean resultant vector, `sqrt((Σcos θ)² + (Σsin θ)²) / n`.
///
/// 1.0 when all phases coincide, near 0.0 when they are spread evenly.
/// Empty input yields 0.0.
pub fn phase_coherence(phases: &[f64]) -> f64 {
    if phases.is_empty() {
        return 0.0;
    }
    let (re, im) = resultant(phases);
    ((re * re + im * im).sqrt() / phases.len() as f64).min(1.0)
}

/// Circular mean direction, `atan2(Σsin θ, Σcos θ)`, in (−π, π].
/// Empty input yields 0.0.
pub fn circular_mean(phases: &[f64]) -> f64 {
    if phases.is_empty() {
        return 0.0;
    }
    let (re, im) = resultant(phases);
    im.atan2(re)
}

/// Phases of a sequence, in order.
pub fn phases(seq: &[FieldOperator]) -> Vec<f64> {
    seq.iter().map(|op| op.phase).collect()
}

fn resultant(phases: &[f64]) -> (f64, f64) {
    phases
        .iter()
        .fold((0.0, 0.0), |(re, im), theta| (re + theta.cos(), im + theta.sin()))
}
