//! Codepoint → field operator mapping.
//!
//! ```text
//! cp <= 0x7F   tension   = (cp / 127)·2 − 1
//!              curvature = sin(cp·π/64)
//!              phase     = (cp mod 32)·π/16
//!
//! cp >  0x7F   tension   = (cp / 1114111)·2 − 1 + 0.1·sin(cp·π/1024)
//!              curvature = cos(cp·π/4096)·(1 + 0.2·sin(cp·π/256))
//!              phase     = (cp mod 256)·π/128 + 0.3·cos(cp·π/512)
//!              then the per-script adjustment, then clamp/reduce.
//! ```

use std::f64::consts::{PI, TAU};

use amtp_core::constants::{
    ASCII_MAX, CJK_UNIFIED_END, CJK_UNIFIED_START, HIRAGANA_END, HIRAGANA_START, KATAKANA_END,
    KATAKANA_START, MAX_CODEPOINT,
};
use amtp_core::models::{FieldOperator, FieldSequence};
use amtp_core::LanguageId;

/// Map one codepoint under a language hint. Total: every input yields an
/// operator inside the documented ranges.
///
/// Codepoints <= 0x7F ignore the language entirely.
pub fn map_codepoint(cp: u32, language: LanguageId) -> FieldOperator {
    if cp <= ASCII_MAX {
        return map_ascii(cp);
    }

    let (mut tension, mut curvature, mut phase) = unicode_base(cp);

    match language {
        LanguageId::ChineseSimplified | LanguageId::ChineseTraditional => {
            if (CJK_UNIFIED_START..=CJK_UNIFIED_END).contains(&cp) {
                tension = ((cp - CJK_UNIFIED_START) as f64 / 8192.0).tanh();
                curvature = ((cp % 256) as f64 * PI / 128.0).sin() * 0.8;
                phase = ((cp >> 8) % 256) as f64 * PI / 128.0;
            }
        }
        LanguageId::Arabic => {
            tension += 0.1;
            curvature *= 1.2;
            phase = (phase + PI).rem_euclid(TAU);
        }
        LanguageId::Cyrillic => {
            tension += 0.1;
            phase += PI / 6.0;
        }
        LanguageId::Japanese => {
            if (HIRAGANA_START..=HIRAGANA_END).contains(&cp) {
                curvature *= 0.8;
                phase += PI / 8.0;
            } else if (KATAKANA_START..=KATAKANA_END).contains(&cp) {
                curvature *= 1.2;
                phase += PI / 4.0;
            }
        }
        LanguageId::Ascii
        | LanguageId::Utf8Generic
        | LanguageId::Korean
        | LanguageId::Devanagari
        | LanguageId::BinaryRaw => {}
    }

    normalize(tension, curvature, phase, cp)
}

/// Map one raw byte through the ASCII formula only (opaque binary input).
///
/// No clamping: bytes >= 0x80 extend tension past 1.0, up to
/// `255/127·2 − 1` for 0xFF. Curvature stays in [-1, 1] and phase in [0, 2π).
pub fn map_byte(byte: u8) -> FieldOperator {
    map_ascii(u32::from(byte))
}

/// Map every `char` of `text`, in order.
pub fn map_text(text: &str, language: LanguageId) -> FieldSequence {
    text.chars()
        .map(|c| map_codepoint(u32::from(c), language))
        .collect()
}

/// Map every byte of `data`, in order.
pub fn map_bytes(data: &[u8]) -> FieldSequence {
    data.iter().map(|&b| map_byte(b)).collect()
}

fn map_ascii(cp: u32) -> FieldOperator {
    let x = cp as f64;
    FieldOperator {
        tension: (x / 127.0) * 2.0 - 1.0,
        curvature: (x * PI / 64.0).sin(),
        phase: (cp % 32) as f64 * PI / 16.0,
        codepoint: cp,
    }
}

fn unicode_base(cp: u32) -> (f64, f64, f64) {
    let x = cp as f64;
    let tension = (x / MAX_CODEPOINT as f64) * 2.0 - 1.0 + 0.1 * (x * PI / 1024.0).sin();
    let curvature = (x * PI / 4096.0).cos() * (1.0 + 0.2 * (x * PI / 256.0).sin());
    let phase = (cp % 256) as f64 * PI / 128.0 + 0.3 * (x * PI / 512.0).cos();
    (tension, curvature, phase)
}

fn normalize(tension: f64, curvature: f64, phase: f64, codepoint: u32) -> FieldOperator {
    FieldOperator {
        tension: tension.clamp(-1.0, 1.0),
        curvature: curvature.clamp(-1.0, 1.0),
        phase: wrap_phase(phase),
        codepoint,
    }
}

/// Reduce an angle into [0, 2π).
///
/// `rem_euclid` can return exactly 2π for tiny negative inputs once rounded;
/// that case folds to 0.
pub fn wrap_phase(phase: f64) -> f64 {
    let wrapped = phase.rem_euclid(TAU);
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_a_matches_formula() {
        let op = map_codepoint('A' as u32, LanguageId::Ascii);
        assert!((op.tension - ((65.0 / 127.0) * 2.0 - 1.0)).abs() < 1e-15);
        assert!((op.curvature - (65.0 * PI / 64.0).sin()).abs() < 1e-15);
        assert!((op.phase - PI / 16.0).abs() < 1e-15);
        assert_eq!(op.codepoint, 65);
    }

    #[test]
    fn nul_maps_to_lower_bound() {
        let op = map_codepoint(0, LanguageId::Utf8Generic);
        assert_eq!(op.tension, -1.0);
        assert_eq!(op.curvature, 0.0);
        assert_eq!(op.phase, 0.0);
    }

    #[test]
    fn wrap_phase_folds_negative_and_full_turns() {
        assert!((wrap_phase(-PI / 2.0) - 1.5 * PI).abs() < 1e-12);
        assert!((wrap_phase(TAU + 0.25) - 0.25).abs() < 1e-12);
        assert_eq!(wrap_phase(TAU), 0.0);
        assert!(wrap_phase(-1e-18) < TAU);
    }

    #[test]
    fn high_byte_extends_tension_past_one() {
        let op = map_byte(0xFF);
        assert_eq!(op.tension, (255.0 / 127.0) * 2.0 - 1.0);
        assert!(op.tension > 3.0);
        assert_eq!(op.codepoint, 255);
        assert!((op.phase - 31.0 * PI / 16.0).abs() < 1e-12);
    }
}
