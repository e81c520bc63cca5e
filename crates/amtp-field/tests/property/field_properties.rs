use std::f64::consts::TAU;

use amtp_core::LanguageId;
use amtp_field::*;
use proptest::prelude::*;

fn arb_language() -> impl Strategy<Value = LanguageId> {
    proptest::sample::select(LanguageId::ALL.to_vec())
}

fn in_range(op: &amtp_core::FieldOperator) -> bool {
    (-1.0..=1.0).contains(&op.tension)
        && (-1.0..=1.0).contains(&op.curvature)
        && op.phase >= 0.0
        && op.phase < TAU
}

// ── Clamping: every codepoint, every language ─────────────────────────────

proptest! {
    #[test]
    fn mapper_output_is_always_in_range(
        cp in 0u32..=0x10FFFF,
        language in arb_language(),
    ) {
        let op = map_codepoint(cp, language);
        prop_assert!(in_range(&op), "cp {:#x} {}: {:?}", cp, language, op);
        prop_assert_eq!(op.codepoint, cp);
    }

    #[test]
    fn script_blocks_stay_in_range(
        cp in prop_oneof![0x0400u32..=0x06FF, 0x3040u32..=0x30FF, 0x4E00u32..=0x9FFF, 0xAC00u32..=0xD7AF],
        language in arb_language(),
    ) {
        prop_assert!(in_range(&map_codepoint(cp, language)));
    }

    #[test]
    fn raw_bytes_follow_unclamped_ascii_formula(byte in any::<u8>()) {
        let op = map_byte(byte);
        let expected = (f64::from(byte) / 127.0) * 2.0 - 1.0;
        prop_assert_eq!(op.tension, expected);
        prop_assert!((-1.0..=1.0).contains(&op.curvature));
        prop_assert!(op.phase >= 0.0 && op.phase < TAU);
        if byte <= 0x7F {
            prop_assert!(in_range(&op));
        }
    }
}

#[test]
fn every_codepoint_and_language_in_range_exhaustive_sample() {
    // Stride through the whole space deterministically, including both block edges.
    for language in LanguageId::ALL {
        let mut cp = 0u32;
        while cp <= 0x10FFFF {
            let op = map_codepoint(cp, language);
            assert!(in_range(&op), "cp {cp:#x} {language}: {op:?}");
            cp += 97;
        }
        assert!(in_range(&map_codepoint(0x10FFFF, language)));
    }
}

// ── ASCII invariance ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn ascii_codepoints_ignore_language(
        cp in 0u32..=0x7F,
        a in arb_language(),
        b in arb_language(),
    ) {
        prop_assert_eq!(map_codepoint(cp, a), map_codepoint(cp, b));
    }
}

// ── Determinism ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn mapping_is_deterministic(text in ".{0,64}", language in arb_language()) {
        prop_assert_eq!(map_text(&text, language), map_text(&text, language));
    }
}

// ── Aggregate bounds ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn aggregates_are_bounded(text in ".{0,128}", language in arb_language()) {
        let seq = map_text(&text, language);
        let (internal, external, snapshot) = aggregate(&seq);

        for state in [internal, external, snapshot] {
            prop_assert!((0.0..=1.0).contains(&state.coherence));
        }
        prop_assert!((0.0..=1.0).contains(&internal.stability));
        prop_assert!((0.0..=1.0).contains(&external.stability));
        prop_assert!((-1.0..=1.0).contains(&internal.value));
        prop_assert!(internal.energy >= 0.0 && internal.energy <= 1.0 + 1e-12);
        prop_assert!(external.energy <= 2.0 + 1e-12);

        let coherence = sequence_coherence(&seq);
        prop_assert!((0.0..=1.0 + 1e-12).contains(&coherence));

        let density = semantic_density(&seq);
        prop_assert!(density >= 0.0);
        prop_assert!(density.is_finite());
    }

    #[test]
    fn phase_coherence_is_bounded(phases in proptest::collection::vec(0.0f64..TAU, 0..64)) {
        let c = phase_coherence(&phases);
        prop_assert!((0.0..=1.0).contains(&c));
        let m = circular_mean(&phases);
        prop_assert!(m.is_finite());
        prop_assert!(m.abs() <= std::f64::consts::PI + 1e-12);
    }

    #[test]
    fn binary_sequences_are_bounded(data in proptest::collection::vec(any::<u8>(), 0..256)) {
        let seq = map_bytes(&data);
        prop_assert_eq!(seq.len(), data.len());
        let density = semantic_density(&seq);
        prop_assert!(density >= 0.0 && density.is_finite());
    }
}
