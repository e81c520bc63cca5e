//! Script/language tags carried in the packet header and used as a mapping
//! parameter, plus the text encodings the decoder understands.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of language identifiers. The discriminant is the wire byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum LanguageId {
    Ascii = 0x00,
    Utf8Generic = 0x01,
    ChineseSimplified = 0x02,
    ChineseTraditional = 0x03,
    Japanese = 0x04,
    Korean = 0x05,
    Arabic = 0x06,
    Cyrillic = 0x07,
    Devanagari = 0x08,
    BinaryRaw = 0xFF,
}

impl LanguageId {
    /// Every language id, in wire-byte order.
    pub const ALL: [LanguageId; 10] = [
        Self::Ascii,
        Self::Utf8Generic,
        Self::ChineseSimplified,
        Self::ChineseTraditional,
        Self::Japanese,
        Self::Korean,
        Self::Arabic,
        Self::Cyrillic,
        Self::Devanagari,
        Self::BinaryRaw,
    ];

    /// The byte written into the packet header.
    pub fn as_byte(self) -> u8 {
        self as u8
    }

    /// Resolve a header byte. Unknown bytes yield `None`.
    pub fn from_byte(byte: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|l| l.as_byte() == byte)
    }

    /// Stable snake_case name, matching the serde representation.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ascii => "ascii",
            Self::Utf8Generic => "utf8_generic",
            Self::ChineseSimplified => "chinese_simplified",
            Self::ChineseTraditional => "chinese_traditional",
            Self::Japanese => "japanese",
            Self::Korean => "korean",
            Self::Arabic => "arabic",
            Self::Cyrillic => "cyrillic",
            Self::Devanagari => "devanagari",
            Self::BinaryRaw => "binary_raw",
        }
    }

    /// Encoding used to read a byte buffer when this language is given as a hint.
    ///
    /// Scripts with a regional legacy code page are read in that code page,
    /// not UTF-8.
    pub fn default_encoding(self) -> TextEncoding {
        match self {
            Self::Ascii => TextEncoding::Ascii,
            Self::Utf8Generic | Self::Devanagari => TextEncoding::Utf8,
            Self::ChineseSimplified => TextEncoding::Gb2312,
            Self::ChineseTraditional => TextEncoding::Big5,
            Self::Japanese => TextEncoding::ShiftJis,
            Self::Korean => TextEncoding::EucKr,
            Self::Arabic => TextEncoding::Iso88596,
            Self::Cyrillic => TextEncoding::Windows1251,
            Self::BinaryRaw => TextEncoding::Latin1,
        }
    }

    pub fn is_chinese(self) -> bool {
        matches!(self, Self::ChineseSimplified | Self::ChineseTraditional)
    }
}

impl TryFrom<u8> for LanguageId {
    type Error = u8;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::from_byte(byte).ok_or(byte)
    }
}

impl From<LanguageId> for u8 {
    fn from(language: LanguageId) -> Self {
        language.as_byte()
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Text encodings the decoder facade can turn into `char`s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextEncoding {
    Ascii,
    Utf8,
    /// UTF-8 with a leading `EF BB BF` signature.
    Utf8Bom,
    Utf16Le,
    Utf16Be,
    Utf32Le,
    Utf32Be,
    /// Every byte is its own codepoint (ISO-8859-1).
    Latin1,
    /// EUC-CN (GB 2312), two bytes per ideograph.
    Gb2312,
    Big5,
    ShiftJis,
    /// EUC-KR (KS X 1001).
    EucKr,
    /// ISO-8859-6, single-byte Arabic.
    #[serde(rename = "iso_8859_6")]
    Iso88596,
    /// Windows code page 1251, single-byte Cyrillic.
    Windows1251,
}

impl TextEncoding {
    /// Byte-order mark this encoding may start with, if any.
    pub fn bom(self) -> Option<&'static [u8]> {
        match self {
            Self::Utf8Bom => Some(&[0xEF, 0xBB, 0xBF]),
            Self::Utf16Le => Some(&[0xFF, 0xFE]),
            Self::Utf16Be => Some(&[0xFE, 0xFF]),
            Self::Utf32Le => Some(&[0xFF, 0xFE, 0x00, 0x00]),
            Self::Utf32Be => Some(&[0x00, 0x00, 0xFE, 0xFF]),
            Self::Ascii
            | Self::Utf8
            | Self::Latin1
            | Self::Gb2312
            | Self::Big5
            | Self::ShiftJis
            | Self::EucKr
            | Self::Iso88596
            | Self::Windows1251 => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Ascii => "ascii",
            Self::Utf8 => "utf-8",
            Self::Utf8Bom => "utf-8-sig",
            Self::Utf16Le => "utf-16-le",
            Self::Utf16Be => "utf-16-be",
            Self::Utf32Le => "utf-32-le",
            Self::Utf32Be => "utf-32-be",
            Self::Latin1 => "latin1",
            Self::Gb2312 => "gb2312",
            Self::Big5 => "big5",
            Self::ShiftJis => "shift_jis",
            Self::EucKr => "euc-kr",
            Self::Iso88596 => "iso-8859-6",
            Self::Windows1251 => "cp1251",
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
