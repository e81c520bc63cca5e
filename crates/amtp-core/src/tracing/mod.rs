//! Observability for AMTP.
//! `tracing` crate with `EnvFilter`, plus span helpers for decode and codec paths.

pub mod setup;
pub mod spans;

pub use setup::{init_tracing, init_tracing_with};
