//! AmtpErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this to expose a stable code string
/// that callers can log or match on without parsing messages.
pub trait AmtpErrorCode {
    /// Returns the error code string (e.g., "CHECKSUM_MISMATCH").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const PACKET_TOO_SMALL: &str = "PACKET_TOO_SMALL";
pub const INVALID_MAGIC: &str = "INVALID_MAGIC";
pub const UNSUPPORTED_VERSION: &str = "UNSUPPORTED_VERSION";
pub const INCOMPLETE_PACKET: &str = "INCOMPLETE_PACKET";
pub const CHECKSUM_MISMATCH: &str = "CHECKSUM_MISMATCH";
pub const PAYLOAD_TOO_LARGE: &str = "PAYLOAD_TOO_LARGE";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
