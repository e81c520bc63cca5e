use amtp_core::config::DetectionConfig;
use amtp_core::constants::{
    ARABIC_END, ARABIC_START, ASCII_MAX, CJK_UNIFIED_END, CJK_UNIFIED_START, CYRILLIC_END,
    CYRILLIC_START, HANGUL_END, HANGUL_START, HIRAGANA_END, HIRAGANA_START, KATAKANA_END,
    KATAKANA_START,
};
use amtp_core::traits::ILanguageDetector;
use amtp_core::LanguageId;

/// Codepoint tallies per script block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptCounts {
    pub total: usize,
    pub latin: usize,
    pub cjk: usize,
    pub hiragana: usize,
    pub katakana: usize,
    pub hangul: usize,
    pub arabic: usize,
    pub cyrillic: usize,
}

impl ScriptCounts {
    pub fn tally(text: &str) -> Self {
        let mut counts = Self::default();
        for cp in text.chars().map(u32::from) {
            counts.total += 1;
            match cp {
                0..=ASCII_MAX => counts.latin += 1,
                CJK_UNIFIED_START..=CJK_UNIFIED_END => counts.cjk += 1,
                HIRAGANA_START..=HIRAGANA_END => counts.hiragana += 1,
                KATAKANA_START..=KATAKANA_END => counts.katakana += 1,
                HANGUL_START..=HANGUL_END => counts.hangul += 1,
                ARABIC_START..=ARABIC_END => counts.arabic += 1,
                CYRILLIC_START..=CYRILLIC_END => counts.cyrillic += 1,
                _ => {}
            }
        }
        counts
    }

    fn ratio(&self, count: usize) -> f64 {
        count as f64 / self.total as f64
    }
}

/// Picks a language from the share of codepoints in each script block.
///
/// First match wins: Arabic, Cyrillic, Korean (Hangul), Japanese (kana),
/// Chinese (CJK ideographs), pure ASCII, then generic UTF-8.
#[derive(Debug, Clone, Default)]
pub struct ScriptRatioDetector {
    config: DetectionConfig,
}

impl ScriptRatioDetector {
    pub fn new(config: DetectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Classify pre-computed counts.
    pub fn classify(&self, counts: &ScriptCounts) -> LanguageId {
        if counts.total == 0 {
            return LanguageId::Utf8Generic;
        }
        let cfg = &self.config;

        if counts.ratio(counts.arabic) > cfg.arabic_threshold {
            LanguageId::Arabic
        } else if counts.ratio(counts.cyrillic) > cfg.cyrillic_threshold {
            LanguageId::Cyrillic
        } else if counts.ratio(counts.hangul) > cfg.hangul_threshold {
            LanguageId::Korean
        } else if counts.ratio(counts.hiragana + counts.katakana) > cfg.kana_threshold {
            LanguageId::Japanese
        } else if counts.ratio(counts.cjk) > cfg.cjk_threshold {
            LanguageId::ChineseSimplified
        } else if counts.latin == counts.total && counts.ratio(counts.latin) > cfg.latin_threshold
        {
            LanguageId::Ascii
        } else {
            LanguageId::Utf8Generic
        }
    }
}

impl ILanguageDetector for ScriptRatioDetector {
    fn detect(&self, text: &str) -> LanguageId {
        self.classify(&ScriptCounts::tally(text))
    }
}
