use serde::{Deserialize, Serialize};

use crate::constants;

/// Script-ratio thresholds for language detection.
///
/// A script wins when the fraction of codepoints falling in its block is
/// strictly greater than its threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    pub arabic_threshold: f64,
    pub cyrillic_threshold: f64,
    /// Hangul syllables, detected as Korean.
    pub hangul_threshold: f64,
    /// Hiragana + Katakana combined, detected as Japanese.
    pub kana_threshold: f64,
    /// CJK unified ideographs, detected as simplified Chinese.
    pub cjk_threshold: f64,
    /// Minimum share of codepoints <= 0x7F for pure ASCII text.
    pub latin_threshold: f64,
}

impl DetectionConfig {
    /// `(field name, value)` pairs, used by validation and env overrides.
    pub fn thresholds(&self) -> [(&'static str, f64); 6] {
        [
            ("arabic_threshold", self.arabic_threshold),
            ("cyrillic_threshold", self.cyrillic_threshold),
            ("hangul_threshold", self.hangul_threshold),
            ("kana_threshold", self.kana_threshold),
            ("cjk_threshold", self.cjk_threshold),
            ("latin_threshold", self.latin_threshold),
        ]
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            arabic_threshold: constants::DEFAULT_ARABIC_THRESHOLD,
            cyrillic_threshold: constants::DEFAULT_CYRILLIC_THRESHOLD,
            hangul_threshold: constants::DEFAULT_HANGUL_THRESHOLD,
            kana_threshold: constants::DEFAULT_KANA_THRESHOLD,
            cjk_threshold: constants::DEFAULT_CJK_THRESHOLD,
            latin_threshold: constants::DEFAULT_LATIN_THRESHOLD,
        }
    }
}
