use super::error_code::AmtpErrorCode;
use super::{ConfigError, PacketError};

/// Top-level error for the AMTP workspace.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum AmtpError {
    #[error("packet error: {0}")]
    Packet(#[from] PacketError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl AmtpErrorCode for AmtpError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Packet(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

pub type AmtpResult<T> = Result<T, AmtpError>;
