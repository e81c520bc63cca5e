//! Byte buffer → `String` for the encodings in [`TextEncoding`].
//!
//! Byte-order marks are stripped for the encodings that carry one. Legacy
//! code pages decode through `encoding_rs` with malformed input treated as
//! fatal, after a layout check that narrows its WHATWG supersets (GBK,
//! Big5-HKSCS, Windows-31J, Windows-949) back to the strict code pages.

use amtp_core::TextEncoding;
use encoding_rs::{DecoderResult, Encoding};

/// A buffer that is not valid in the requested encoding.
///
/// Never surfaced by the decoder facade; it selects the raw-binary path instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TextDecodeError {
    #[error("invalid {encoding} data at byte offset {offset}")]
    Invalid { encoding: TextEncoding, offset: usize },

    #[error("truncated {encoding} data: {len} bytes is not a whole number of code units")]
    Truncated { encoding: TextEncoding, len: usize },
}

/// Decode `data` as `encoding`.
pub fn decode(data: &[u8], encoding: TextEncoding) -> Result<String, TextDecodeError> {
    match encoding {
        TextEncoding::Ascii => match data.iter().position(|b| !b.is_ascii()) {
            Some(offset) => Err(TextDecodeError::Invalid { encoding, offset }),
            None => Ok(data.iter().map(|&b| char::from(b)).collect()),
        },
        TextEncoding::Utf8 => decode_utf8(data, encoding, 0),
        TextEncoding::Utf8Bom => {
            let (body, skipped) = strip_bom(data, encoding);
            decode_utf8(body, encoding, skipped)
        }
        TextEncoding::Utf16Le => decode_utf16(data, encoding, u16::from_le_bytes),
        TextEncoding::Utf16Be => decode_utf16(data, encoding, u16::from_be_bytes),
        TextEncoding::Utf32Le => decode_utf32(data, encoding, u32::from_le_bytes),
        TextEncoding::Utf32Be => decode_utf32(data, encoding, u32::from_be_bytes),
        TextEncoding::Latin1 => Ok(data.iter().map(|&b| char::from(b)).collect()),
        TextEncoding::Gb2312 => decode_legacy(data, encoding, encoding_rs::GBK),
        TextEncoding::Big5 => decode_legacy(data, encoding, encoding_rs::BIG5),
        TextEncoding::ShiftJis => decode_legacy(data, encoding, encoding_rs::SHIFT_JIS),
        TextEncoding::EucKr => decode_legacy(data, encoding, encoding_rs::EUC_KR),
        TextEncoding::Iso88596 => decode_legacy(data, encoding, encoding_rs::ISO_8859_6),
        TextEncoding::Windows1251 => decode_legacy(data, encoding, encoding_rs::WINDOWS_1251),
    }
}

fn decode_legacy(
    data: &[u8],
    encoding: TextEncoding,
    codec: &'static Encoding,
) -> Result<String, TextDecodeError> {
    check_layout(data, encoding)?;

    let mut decoder = codec.new_decoder_without_bom_handling();
    let mut out = String::with_capacity(data.len() * 2);
    let mut read_total = 0usize;
    loop {
        let (result, read) =
            decoder.decode_to_string_without_replacement(&data[read_total..], &mut out, true);
        read_total += read;
        match result {
            DecoderResult::InputEmpty => return Ok(out),
            DecoderResult::OutputFull => out.reserve((data.len() - read_total) * 2 + 16),
            DecoderResult::Malformed(bad, pending) => {
                return Err(TextDecodeError::Invalid {
                    encoding,
                    offset: read_total.saturating_sub(usize::from(bad) + usize::from(pending)),
                })
            }
        }
    }
}

/// Reject byte layouts the strict code page does not define.
///
/// Bytes < 0x80 are ASCII everywhere. Above that:
/// - GB 2312: lead A1–F7, trail A1–FE
/// - EUC-KR: lead A1–FE, trail A1–FE
/// - Big5: lead A1–F9, trail 40–7E or A1–FE
/// - Shift_JIS: A1–DF single byte; lead 81–9F or E0–EF, trail 40–7E or 80–FC
/// - CP1251: every byte but 0x98
/// - ISO-8859-6: left to the decoder
fn check_layout(data: &[u8], encoding: TextEncoding) -> Result<(), TextDecodeError> {
    let invalid = |offset| TextDecodeError::Invalid { encoding, offset };

    let mut i = 0;
    while i < data.len() {
        let lead = data[i];
        let double = match encoding {
            _ if lead < 0x80 => false,
            TextEncoding::Gb2312 if (0xA1..=0xF7).contains(&lead) => true,
            TextEncoding::EucKr if (0xA1..=0xFE).contains(&lead) => true,
            TextEncoding::Big5 if (0xA1..=0xF9).contains(&lead) => true,
            TextEncoding::ShiftJis if (0xA1..=0xDF).contains(&lead) => false,
            TextEncoding::ShiftJis if matches!(lead, 0x81..=0x9F | 0xE0..=0xEF) => true,
            TextEncoding::Windows1251 if lead != 0x98 => false,
            TextEncoding::Iso88596 => false,
            _ => return Err(invalid(i)),
        };

        if double {
            let trail_ok = match (encoding, data.get(i + 1)) {
                (TextEncoding::Gb2312 | TextEncoding::EucKr, Some(&t)) => {
                    (0xA1..=0xFE).contains(&t)
                }
                (TextEncoding::Big5, Some(&t)) => matches!(t, 0x40..=0x7E | 0xA1..=0xFE),
                (TextEncoding::ShiftJis, Some(&t)) => matches!(t, 0x40..=0x7E | 0x80..=0xFC),
                _ => false,
            };
            if !trail_ok {
                return Err(invalid(i));
            }
            i += 2;
        } else {
            i += 1;
        }
    }
    Ok(())
}

fn strip_bom(data: &[u8], encoding: TextEncoding) -> (&[u8], usize) {
    match encoding.bom() {
        Some(bom) if data.starts_with(bom) => (&data[bom.len()..], bom.len()),
        _ => (data, 0),
    }
}

fn decode_utf8(
    data: &[u8],
    encoding: TextEncoding,
    base_offset: usize,
) -> Result<String, TextDecodeError> {
    std::str::from_utf8(data)
        .map(str::to_owned)
        .map_err(|e| TextDecodeError::Invalid {
            encoding,
            offset: base_offset + e.valid_up_to(),
        })
}

fn decode_utf16(
    data: &[u8],
    encoding: TextEncoding,
    unit: fn([u8; 2]) -> u16,
) -> Result<String, TextDecodeError> {
    let (body, skipped) = strip_bom(data, encoding);
    if body.len() % 2 != 0 {
        return Err(TextDecodeError::Truncated {
            encoding,
            len: data.len(),
        });
    }

    let units = body.chunks_exact(2).map(|c| unit([c[0], c[1]]));
    let mut out = String::with_capacity(body.len() / 2);
    let mut consumed = 0usize;
    for decoded in char::decode_utf16(units) {
        match decoded {
            Ok(c) => {
                consumed += c.len_utf16() * 2;
                out.push(c);
            }
            Err(_) => {
                return Err(TextDecodeError::Invalid {
                    encoding,
                    offset: skipped + consumed,
                })
            }
        }
    }
    Ok(out)
}

fn decode_utf32(
    data: &[u8],
    encoding: TextEncoding,
    unit: fn([u8; 4]) -> u32,
) -> Result<String, TextDecodeError> {
    let (body, skipped) = strip_bom(data, encoding);
    if body.len() % 4 != 0 {
        return Err(TextDecodeError::Truncated {
            encoding,
            len: data.len(),
        });
    }

    body.chunks_exact(4)
        .enumerate()
        .map(|(i, c)| {
            char::from_u32(unit([c[0], c[1], c[2], c[3]])).ok_or(TextDecodeError::Invalid {
                encoding,
                offset: skipped + i * 4,
            })
        })
        .collect()
}
