use amtp_core::traits::IEncodingDetector;
use amtp_core::{LanguageId, TextEncoding};

use crate::text;

/// Signatures checked longest first, so a UTF-32 LE mark is not mistaken for
/// a UTF-16 LE one.
const SIGNATURES: [TextEncoding; 5] = [
    TextEncoding::Utf32Le,
    TextEncoding::Utf32Be,
    TextEncoding::Utf8Bom,
    TextEncoding::Utf16Le,
    TextEncoding::Utf16Be,
];

/// Trial decodes, in order; the first one that succeeds wins.
const CANDIDATES: [(TextEncoding, LanguageId); 8] = [
    (TextEncoding::Utf8, LanguageId::Utf8Generic),
    (TextEncoding::Gb2312, LanguageId::ChineseSimplified),
    (TextEncoding::Big5, LanguageId::ChineseTraditional),
    (TextEncoding::ShiftJis, LanguageId::Japanese),
    (TextEncoding::EucKr, LanguageId::Korean),
    (TextEncoding::Iso88596, LanguageId::Arabic),
    (TextEncoding::Windows1251, LanguageId::Cyrillic),
    (TextEncoding::Ascii, LanguageId::Ascii),
];

/// Byte-order-mark sniffing, then trial decoding through a fixed code-page list.
///
/// A BOM maps with [`LanguageId::Utf8Generic`]. Input no candidate accepts is
/// reported as UTF-8; decoding it then fails and the facade takes the
/// raw-binary path.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodePageDetector;

impl CodePageDetector {
    pub fn new() -> Self {
        Self
    }
}

impl IEncodingDetector for CodePageDetector {
    fn detect(&self, data: &[u8]) -> (TextEncoding, LanguageId) {
        if let Some(encoding) = SIGNATURES
            .iter()
            .copied()
            .find(|enc| enc.bom().is_some_and(|bom| data.starts_with(bom)))
        {
            return (encoding, LanguageId::Utf8Generic);
        }

        CANDIDATES
            .iter()
            .copied()
            .find(|&(encoding, _)| text::decode(data, encoding).is_ok())
            .unwrap_or((TextEncoding::Utf8, LanguageId::Utf8Generic))
    }
}
