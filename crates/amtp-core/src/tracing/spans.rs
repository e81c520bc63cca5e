//! Span definitions per operation: text decode, byte decode, packet codec.
//!
//! Each span carries the input size and language via the `tracing` crate.

/// Create a decode span.
#[macro_export]
macro_rules! decode_span {
    ($kind:expr, $len:expr, $language:expr) => {
        tracing::debug_span!("amtp.decode", kind = $kind, len = $len, language = ?$language)
    };
}

/// Create a packet codec span.
#[macro_export]
macro_rules! packet_span {
    ($op:expr, $len:expr) => {
        tracing::debug_span!("amtp.packet", op = $op, len = $len)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const DECODE: &str = "amtp.decode";
    pub const PACKET: &str = "amtp.packet";
}
