//! # amtp-decoder
//!
//! Facade over the AMTP field pipeline.
//!
//! - `decode_text` / `decode_bytes`: input → field sequence → module states,
//!   sequence coherence and semantic density.
//! - `encode_packet` / `decode_packet`: frame wrapping via `amtp-codec`.
//!
//! Undecodable bytes never fail a decode: they fall back to raw-binary mapping.

pub mod detection;
pub mod engine;
pub mod text;

pub use detection::{CodePageDetector, ScriptRatioDetector};
pub use engine::AmtpDecoder;
pub use text::TextDecodeError;
