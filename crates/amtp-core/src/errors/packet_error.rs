//! Packet-format errors.

use super::error_code::{self, AmtpErrorCode};

/// Errors raised while encoding or validating an AMTP frame.
///
/// All of them are local and non-retryable: the caller needs a new frame.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PacketError {
    #[error("packet too small: {len} bytes, need at least 12")]
    TooSmall { len: usize },

    #[error("invalid magic bytes: {found:02x?}")]
    InvalidMagic { found: [u8; 4] },

    #[error("unsupported version: 0x{version:02x}")]
    UnsupportedVersion { version: u8 },

    #[error("incomplete packet: header declares {declared} payload bytes, {available} available")]
    Incomplete { declared: usize, available: usize },

    #[error("checksum mismatch: computed {computed:08x} != expected {expected:08x}")]
    ChecksumMismatch { computed: u32, expected: u32 },

    #[error("payload too large: {len} bytes, maximum is 65535")]
    PayloadTooLarge { len: usize },
}

impl AmtpErrorCode for PacketError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::TooSmall { .. } => error_code::PACKET_TOO_SMALL,
            Self::InvalidMagic { .. } => error_code::INVALID_MAGIC,
            Self::UnsupportedVersion { .. } => error_code::UNSUPPORTED_VERSION,
            Self::Incomplete { .. } => error_code::INCOMPLETE_PACKET,
            Self::ChecksumMismatch { .. } => error_code::CHECKSUM_MISMATCH,
            Self::PayloadTooLarge { .. } => error_code::PAYLOAD_TOO_LARGE,
        }
    }
}
