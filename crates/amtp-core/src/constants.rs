//! Shared constants for the AMTP wire format and field mapping.

/// AMTP crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Frame magic, always the first four bytes of a packet.
pub const PACKET_MAGIC: [u8; 4] = *b"AMTP";

/// The only protocol version on the wire (v1.0).
pub const PROTOCOL_VERSION: u8 = 0x10;

/// Header size: magic (4) + version (1) + language id (1) + payload length (2).
pub const HEADER_LEN: usize = 8;

/// Trailing CRC-32 size.
pub const CHECKSUM_LEN: usize = 4;

/// Smallest valid frame (empty payload).
pub const MIN_PACKET_LEN: usize = HEADER_LEN + CHECKSUM_LEN;

/// Largest payload the u16 length field can describe.
pub const MAX_PAYLOAD_LEN: usize = u16::MAX as usize;

/// Highest Unicode scalar value, used to normalise the base tension formula.
pub const MAX_CODEPOINT: u32 = 0x10FFFF;

/// Highest codepoint handled by the ASCII branch of the mapper.
pub const ASCII_MAX: u32 = 0x7F;

/// CJK Unified Ideographs block.
pub const CJK_UNIFIED_START: u32 = 0x4E00;
pub const CJK_UNIFIED_END: u32 = 0x9FFF;

/// Hiragana block.
pub const HIRAGANA_START: u32 = 0x3040;
pub const HIRAGANA_END: u32 = 0x309F;

/// Katakana block.
pub const KATAKANA_START: u32 = 0x30A0;
pub const KATAKANA_END: u32 = 0x30FF;

/// Hangul Syllables block.
pub const HANGUL_START: u32 = 0xAC00;
pub const HANGUL_END: u32 = 0xD7AF;

/// Arabic block.
pub const ARABIC_START: u32 = 0x0600;
pub const ARABIC_END: u32 = 0x06FF;

/// Cyrillic block.
pub const CYRILLIC_START: u32 = 0x0400;
pub const CYRILLIC_END: u32 = 0x04FF;

/// Default script-ratio thresholds for language detection.
pub const DEFAULT_ARABIC_THRESHOLD: f64 = 0.3;
pub const DEFAULT_CYRILLIC_THRESHOLD: f64 = 0.3;
pub const DEFAULT_HANGUL_THRESHOLD: f64 = 0.3;
pub const DEFAULT_KANA_THRESHOLD: f64 = 0.2;
pub const DEFAULT_CJK_THRESHOLD: f64 = 0.3;
pub const DEFAULT_LATIN_THRESHOLD: f64 = 0.8;

/// Default tracing filter when `AMTP_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "amtp=info";

/// Project config file name looked up by `AmtpConfig::load`.
pub const CONFIG_FILE_NAME: &str = "amtp.toml";
