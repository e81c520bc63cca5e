//! Error handling for AMTP.
//! One error enum per subsystem, `thiserror` only.

pub mod amtp_error;
pub mod config_error;
pub mod error_code;
pub mod packet_error;

pub use amtp_error::{AmtpError, AmtpResult};
pub use config_error::ConfigError;
pub use error_code::AmtpErrorCode;
pub use packet_error::PacketError;
