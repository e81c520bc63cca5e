use amtp_codec::{decode, encode};
use amtp_core::errors::PacketError;
use amtp_core::LanguageId;
use proptest::prelude::*;

fn arb_language() -> impl Strategy<Value = LanguageId> {
    proptest::sample::select(LanguageId::ALL.to_vec())
}

// ── Round-trip ────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn encode_decode_round_trip(
        payload in proptest::collection::vec(any::<u8>(), 0..4096),
        language in arb_language(),
    ) {
        let frame = encode(&payload, language).unwrap();
        prop_assert_eq!(frame.len(), 12 + payload.len());

        let packet = decode(&frame).unwrap();
        prop_assert_eq!(&packet.payload, &payload);
        prop_assert_eq!(packet.language_id, language.as_byte());
        prop_assert_eq!(packet.payload_length as usize, payload.len());
        prop_assert_eq!(packet.to_bytes(), frame);
    }
}

#[test]
fn round_trip_at_size_boundaries() {
    for len in [0usize, 1, 255, 256, 65_534, 65_535] {
        let payload: Vec<u8> = (0..len).map(|i| (i % 251) as u8).collect();
        for language in LanguageId::ALL {
            let packet = decode(&encode(&payload, language).unwrap()).unwrap();
            assert_eq!(packet.payload, payload);
            assert_eq!(packet.language(), Some(language));
        }
    }
}

// ── Checksum sensitivity ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn single_bit_flip_in_payload_or_checksum_is_detected(
        payload in proptest::collection::vec(any::<u8>(), 1..512),
        language in arb_language(),
        pick in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let mut frame = encode(&payload, language).unwrap();
        // Payload and checksum region: [8, len).
        let idx = 8 + pick.index(frame.len() - 8);
        frame[idx] ^= 1 << bit;
        let is_checksum_mismatch = matches!(decode(&frame), Err(PacketError::ChecksumMismatch { .. }));
        prop_assert!(is_checksum_mismatch);
    }

    #[test]
    fn single_bit_flip_in_header_is_detected(
        payload in proptest::collection::vec(any::<u8>(), 0..512),
        language in arb_language(),
        idx in 0usize..8,
        bit in 0u8..8,
    ) {
        let mut frame = encode(&payload, language).unwrap();
        frame[idx] ^= 1 << bit;
        match decode(&frame) {
            Err(PacketError::InvalidMagic { .. }) => prop_assert!(idx < 4),
            Err(PacketError::UnsupportedVersion { .. }) => prop_assert_eq!(idx, 4),
            Err(PacketError::Incomplete { .. }) | Err(PacketError::ChecksumMismatch { .. }) => {
                prop_assert!(idx >= 5)
            }
            other => prop_assert!(false, "flip at {} bit {} not detected: {:?}", idx, bit, other),
        }
    }

    #[test]
    fn arbitrary_bytes_never_panic(data in proptest::collection::vec(any::<u8>(), 0..64)) {
        let _ = decode(&data);
    }
}
