//! # amtp-codec
//!
//! Stateless AMTP framing over in-memory byte buffers.
//!
//! - [`encode`] builds `header ++ payload ++ crc32`.
//! - [`decode`] validates size, magic, version, length and checksum, in that
//!   order, and returns a [`Packet`](amtp_core::Packet).

pub mod crc32;
pub mod packet;

pub use crc32::crc32;
pub use packet::{decode, encode, encode_raw};
