use amtp_core::config::DetectionConfig;
use amtp_core::traits::{IEncodingDetector, ILanguageDetector};
use amtp_core::{LanguageId, TextEncoding};
use amtp_decoder::detection::ScriptCounts;
use amtp_decoder::{CodePageDetector, ScriptRatioDetector};

// ── Encoding ──────────────────────────────────────────────────────────────

#[test]
fn bom_signatures_are_recognised() {
    let detector = CodePageDetector::new();
    let cases: [(&[u8], TextEncoding); 6] = [
        (&[0xFF, 0xFE, 0x00, 0x00, b'a', 0, 0, 0], TextEncoding::Utf32Le),
        (&[0x00, 0x00, 0xFE, 0xFF, 0, 0, 0, b'a'], TextEncoding::Utf32Be),
        (&[0xEF, 0xBB, 0xBF, b'a'], TextEncoding::Utf8Bom),
        (&[0xFF, 0xFE, b'a', 0x00], TextEncoding::Utf16Le),
        (&[0xFE, 0xFF, 0x00, b'a'], TextEncoding::Utf16Be),
        (b"plain", TextEncoding::Utf8),
    ];

    for (data, expected) in cases {
        let (encoding, language) = detector.detect(data);
        assert_eq!(encoding, expected, "input {data:02x?}");
        assert_eq!(language, LanguageId::Utf8Generic);
    }
}

#[test]
fn code_pages_are_tried_in_order() {
    let detector = CodePageDetector::new();
    let cases: [(&[u8], TextEncoding, LanguageId); 6] = [
        // GB 2312 "中文".
        (&[0xD6, 0xD0, 0xCE, 0xC4], TextEncoding::Gb2312, LanguageId::ChineseSimplified),
        // Shift_JIS "こんにちは"; 0x82 is not a GB 2312 or Big5 lead byte.
        (
            &[0x82, 0xB1, 0x82, 0xF1, 0x82, 0xC9, 0x82, 0xBF, 0x82, 0xCD],
            TextEncoding::ShiftJis,
            LanguageId::Japanese,
        ),
        // Half-width katakana followed by ASCII.
        (&[0xC3, 0x28], TextEncoding::ShiftJis, LanguageId::Japanese),
        // A lone 0xF0 only fits ISO-8859-6.
        (&[0xF0], TextEncoding::Iso88596, LanguageId::Arabic),
        // 0xFF only fits CP1251.
        (&[0xFF, 0x41], TextEncoding::Windows1251, LanguageId::Cyrillic),
        // 0x98 is undefined in CP1251 and 0xFF breaks everything before it.
        (&[0xFF, 0x98, 0x41], TextEncoding::Utf8, LanguageId::Utf8Generic),
    ];

    for (data, encoding, language) in cases {
        assert_eq!(detector.detect(data), (encoding, language), "input {data:02x?}");
    }
}

#[test]
fn utf8_wins_over_code_pages() {
    assert_eq!(
        CodePageDetector::new().detect("Привет".as_bytes()),
        (TextEncoding::Utf8, LanguageId::Utf8Generic)
    );
}

#[test]
fn empty_input_is_utf8() {
    assert_eq!(
        CodePageDetector::new().detect(&[]),
        (TextEncoding::Utf8, LanguageId::Utf8Generic)
    );
}

// ── Script ratios ─────────────────────────────────────────────────────────

#[test]
fn tally_counts_each_block() {
    let counts = ScriptCounts::tally("aЖم가あア中é");

    assert_eq!(counts.total, 8);
    assert_eq!(counts.latin, 1);
    assert_eq!(counts.cyrillic, 1);
    assert_eq!(counts.arabic, 1);
    assert_eq!(counts.hangul, 1);
    assert_eq!(counts.hiragana, 1);
    assert_eq!(counts.katakana, 1);
    assert_eq!(counts.cjk, 1);
}

#[test]
fn ratio_must_strictly_exceed_threshold() {
    let detector = ScriptRatioDetector::default();

    // 3 of 10 codepoints are Arabic: exactly 0.3, not above it.
    assert_eq!(detector.detect("مرح1234567"), LanguageId::Utf8Generic);
    // 4 of 10 is enough.
    assert_eq!(detector.detect("مرحب123456"), LanguageId::Arabic);
}

#[test]
fn earlier_scripts_take_priority() {
    let detector = ScriptRatioDetector::default();

    // Half Cyrillic, half Arabic: Arabic is checked first.
    assert_eq!(detector.detect("ЖЖمم"), LanguageId::Arabic);
    // Kana and ideographs together read as Japanese.
    assert_eq!(detector.detect("日本語です"), LanguageId::Japanese);
}

#[test]
fn kanji_only_text_reads_as_chinese() {
    assert_eq!(
        ScriptRatioDetector::default().detect("日本語"),
        LanguageId::ChineseSimplified
    );
}

#[test]
fn ascii_requires_every_codepoint_to_be_ascii() {
    let detector = ScriptRatioDetector::default();
    assert_eq!(detector.detect("plain text"), LanguageId::Ascii);
    assert_eq!(detector.detect("plain text…"), LanguageId::Utf8Generic);
    assert_eq!(detector.detect(""), LanguageId::Utf8Generic);
}

#[test]
fn custom_thresholds_change_the_outcome() {
    let detector = ScriptRatioDetector::new(DetectionConfig {
        kana_threshold: 0.9,
        ..DetectionConfig::default()
    });
    assert_eq!(detector.config().kana_threshold, 0.9);

    // 2 kana of 5 no longer clears the bar; 2 ideographs of 5 still do.
    assert_eq!(detector.detect("日本です。"), LanguageId::ChineseSimplified);
}
