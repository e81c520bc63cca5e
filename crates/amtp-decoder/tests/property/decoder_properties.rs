use amtp_core::models::DecodeSource;
use amtp_core::LanguageId;
use amtp_decoder::AmtpDecoder;
use proptest::prelude::*;

fn arb_language() -> impl Strategy<Value = LanguageId> {
    proptest::sample::select(LanguageId::ALL.to_vec())
}

// ── Totality ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn decode_bytes_is_total_and_bounded(
        data in proptest::collection::vec(any::<u8>(), 0..512),
        hint in proptest::option::of(arb_language()),
    ) {
        let result = AmtpDecoder::new().decode_bytes(&data, hint);

        prop_assert!(result.total_coherence >= 0.0 && result.total_coherence <= 1.0);
        prop_assert!(result.semantic_density >= 0.0);
        prop_assert!(result.semantic_density.is_finite());
        // Raw bytes are not clamped; 0xFF reaches 255/127·2 − 1.
        let max_tension = match result.source {
            DecodeSource::Text => 1.0,
            DecodeSource::Binary => 255.0 / 127.0 * 2.0 - 1.0,
        };
        for op in &result.sequence {
            prop_assert!(op.tension >= -1.0 && op.tension <= max_tension);
            prop_assert!((-1.0..=1.0).contains(&op.curvature));
            prop_assert!(op.phase >= 0.0 && op.phase < std::f64::consts::TAU);
        }
        if result.source == DecodeSource::Binary {
            prop_assert_eq!(result.language, LanguageId::BinaryRaw);
            prop_assert_eq!(result.len(), data.len());
        }
    }

    #[test]
    fn decode_text_maps_one_operator_per_char(text in "\\PC{0,64}") {
        let result = AmtpDecoder::new().decode_text(&text, None);

        prop_assert_eq!(result.len(), text.chars().count());
        prop_assert_eq!(result.source, DecodeSource::Text);
    }

    #[test]
    fn valid_utf8_without_bom_never_falls_back(text in "[^\u{FEFF}\u{FFFE}]{0,64}") {
        let result = AmtpDecoder::new().decode_bytes(text.as_bytes(), None);

        prop_assert_eq!(result.source, DecodeSource::Text);
        prop_assert_eq!(result.len(), text.chars().count());
    }
}

// ── Packets ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn packet_decode_matches_direct_decode(
        payload in proptest::collection::vec(any::<u8>(), 0..512),
        language in arb_language(),
    ) {
        let decoder = AmtpDecoder::new();
        let frame = decoder.encode_packet(&payload, language).unwrap();
        let (packet, result) = decoder.decode_packet(&frame).unwrap();

        prop_assert_eq!(&packet.payload, &payload);
        prop_assert_eq!(result, decoder.decode_bytes(&payload, Some(language)));
    }

    #[test]
    fn decode_packet_never_panics(frame in proptest::collection::vec(any::<u8>(), 0..64)) {
        let _ = AmtpDecoder::new().decode_packet(&frame);
    }
}
