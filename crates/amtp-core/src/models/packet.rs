use serde::{Deserialize, Serialize};

use crate::constants::{CHECKSUM_LEN, HEADER_LEN};
use crate::language::LanguageId;

/// A parsed and checksum-verified AMTP frame.
///
/// Invariant for any `Packet` returned by the codec:
/// `checksum == crc32(header ++ payload)` and
/// `payload.len() == payload_length as usize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Packet {
    pub magic: [u8; 4],
    pub version: u8,
    /// Raw header byte. Unknown ids are carried through; see [`Packet::language`].
    pub language_id: u8,
    pub payload_length: u16,
    pub payload: Vec<u8>,
    pub checksum: u32,
}

impl Packet {
    /// The header's language byte resolved to a known id.
    pub fn language(&self) -> Option<LanguageId> {
        LanguageId::from_byte(self.language_id)
    }

    /// Size of this packet on the wire.
    pub fn frame_len(&self) -> usize {
        HEADER_LEN + self.payload.len() + CHECKSUM_LEN
    }

    /// The 8 header bytes as they appear on the wire.
    pub fn header_bytes(&self) -> [u8; HEADER_LEN] {
        let len = self.payload_length.to_be_bytes();
        [
            self.magic[0],
            self.magic[1],
            self.magic[2],
            self.magic[3],
            self.version,
            self.language_id,
            len[0],
            len[1],
        ]
    }

    /// Re-serialise the frame exactly as it was received.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.frame_len());
        out.extend_from_slice(&self.header_bytes());
        out.extend_from_slice(&self.payload);
        out.extend_from_slice(&self.checksum.to_be_bytes());
        out
    }
}
