//! AMTP frame encoding and validation.
//!
//! ```text
//! offset  size  field
//! 0       4     magic = "AMTP"
//! 4       1     version = 0x10
//! 5       1     language_id
//! 6       2     payload_length (u16, big-endian)
//! 8       N     payload
//! 8+N     4     CRC-32 over bytes [0, 8+N), big-endian
//! ```

use amtp_core::constants::{
    CHECKSUM_LEN, HEADER_LEN, MAX_PAYLOAD_LEN, MIN_PACKET_LEN, PACKET_MAGIC, PROTOCOL_VERSION,
};
use amtp_core::errors::{AmtpErrorCode, PacketError};
use amtp_core::models::Packet;
use amtp_core::LanguageId;

use crate::crc32::Crc32;

/// Frame `payload` for `language`. Output length is `12 + payload.len()`.
pub fn encode(payload: &[u8], language: LanguageId) -> Result<Vec<u8>, PacketError> {
    encode_raw(payload, language.as_byte())
}

/// Frame `payload` with an arbitrary language byte.
///
/// Fails only when the payload does not fit the u16 length field.
pub fn encode_raw(payload: &[u8], language_id: u8) -> Result<Vec<u8>, PacketError> {
    let _span = amtp_core::packet_span!("encode", payload.len()).entered();

    let payload_length =
        u16::try_from(payload.len()).map_err(|_| PacketError::PayloadTooLarge {
            len: payload.len(),
        })?;
    debug_assert!(payload.len() <= MAX_PAYLOAD_LEN);

    let mut frame = Vec::with_capacity(MIN_PACKET_LEN + payload.len());
    frame.extend_from_slice(&PACKET_MAGIC);
    frame.push(PROTOCOL_VERSION);
    frame.push(language_id);
    frame.extend_from_slice(&payload_length.to_be_bytes());
    frame.extend_from_slice(payload);

    let mut hasher = Crc32::new();
    hasher.update(&frame);
    frame.extend_from_slice(&hasher.finalize().to_be_bytes());

    Ok(frame)
}

/// Parse and validate a frame.
///
/// Checks run in wire order: size, magic, version, declared length, checksum.
/// Bytes after the checksum are ignored. Unknown language bytes are accepted
/// and carried in [`Packet::language_id`].
pub fn decode(bytes: &[u8]) -> Result<Packet, PacketError> {
    let _span = amtp_core::packet_span!("decode", bytes.len()).entered();

    parse(bytes).inspect_err(|e| {
        tracing::debug!(code = e.error_code(), error = %e, "rejected packet");
    })
}

fn parse(bytes: &[u8]) -> Result<Packet, PacketError> {
    if bytes.len() < MIN_PACKET_LEN {
        return Err(PacketError::TooSmall { len: bytes.len() });
    }

    let magic = [bytes[0], bytes[1], bytes[2], bytes[3]];
    if magic != PACKET_MAGIC {
        return Err(PacketError::InvalidMagic { found: magic });
    }

    let version = bytes[4];
    if version != PROTOCOL_VERSION {
        return Err(PacketError::UnsupportedVersion { version });
    }

    let language_id = bytes[5];
    let payload_length = u16::from_be_bytes([bytes[6], bytes[7]]);

    let payload_end = HEADER_LEN + payload_length as usize;
    if bytes.len() < payload_end + CHECKSUM_LEN {
        return Err(PacketError::Incomplete {
            declared: payload_length as usize,
            available: bytes.len() - MIN_PACKET_LEN,
        });
    }

    let expected = u32::from_be_bytes([
        bytes[payload_end],
        bytes[payload_end + 1],
        bytes[payload_end + 2],
        bytes[payload_end + 3],
    ]);

    let mut hasher = Crc32::new();
    hasher.update(&bytes[..payload_end]);
    let computed = hasher.finalize();
    if computed != expected {
        return Err(PacketError::ChecksumMismatch { computed, expected });
    }

    Ok(Packet {
        magic,
        version,
        language_id,
        payload_length,
        payload: bytes[HEADER_LEN..payload_end].to_vec(),
        checksum: expected,
    })
}
