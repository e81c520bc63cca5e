//! # amtp-core
//!
//! Foundation crate for the AMTP field transport.
//! Defines the shared types, traits, errors, config, tracing setup, and
//! protocol constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod language;
pub mod models;
pub mod traits;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::AmtpConfig;
pub use errors::{AmtpError, AmtpResult, PacketError};
pub use language::{LanguageId, TextEncoding};
pub use models::{DecodeResult, DecodeSource, FieldOperator, FieldSequence, ModuleState, Packet};
