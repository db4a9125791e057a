//! Order-preserving variable-length unsigned integers.
//!
//! Used for the exponent of floats that fall outside the medium marker bands.
//! The first byte fixes the length, so byte-wise comparison of two encodings
//! matches numeric comparison of the values:
//!
//! | value                  | encoding                                      |
//! |------------------------|-----------------------------------------------|
//! | `0..=240`              | the value itself                              |
//! | `241..=2287`           | `241 + (v - 240) / 256`, `(v - 240) % 256`    |
//! | `2288..=67823`         | `249`, then `v - 2288` as two big-endian bytes |
//! | larger                 | `247 + n`, then `v` as `n` big-endian bytes   |
//!
//! The descending form complements every byte, which reverses the order.

use crate::error::{DecodeError, DecodeResult};
use crate::reader::ByteReader;

const ONE_BYTE_MAX: u64 = 240;
const TWO_BYTE_MAX: u64 = 2287;
const THREE_BYTE_MAX: u64 = 67823;
const THREE_BYTE_TAG: u8 = 249;
/// Tag of the `n`-byte big-endian forms is `FIXED_TAG_BASE + n`, `n` in `3..=8`.
const FIXED_TAG_BASE: u8 = 247;

/// Append `value` in ascending varint form.
#[allow(clippy::cast_possible_truncation)]
pub fn encode_uvarint(buf: &mut Vec<u8>, value: u64) {
    match value {
        0..=ONE_BYTE_MAX => buf.push(value as u8),
        241..=TWO_BYTE_MAX => {
            let v = value - ONE_BYTE_MAX;
            buf.push((v / 256) as u8 + 241);
            buf.push((v % 256) as u8);
        }
        2288..=THREE_BYTE_MAX => {
            let v = value - (TWO_BYTE_MAX + 1);
            buf.push(THREE_BYTE_TAG);
            buf.push((v / 256) as u8);
            buf.push((v % 256) as u8);
        }
        _ => {
            let n = 8 - (value.leading_zeros() / 8) as usize;
            buf.push(FIXED_TAG_BASE + n as u8);
            buf.extend_from_slice(&value.to_be_bytes()[8 - n..]);
        }
    }
}

/// Append `value` in descending varint form: larger values sort first.
pub fn encode_uvarint_descending(buf: &mut Vec<u8>, value: u64) {
    let start = buf.len();
    encode_uvarint(buf, value);
    for byte in &mut buf[start..] {
        *byte = !*byte;
    }
}

/// Read an ascending varint.
///
/// # Errors
///
/// Returns [`DecodeError::UnexpectedEndOfInput`] if the input ends inside the
/// varint, or [`DecodeError::InvalidVarint`] for a non-minimal encoding.
pub fn decode_uvarint(reader: &mut ByteReader) -> DecodeResult<u64> {
    decode_with(reader, false)
}

/// Read a descending varint.
///
/// # Errors
///
/// Same as [`decode_uvarint`].
pub fn decode_uvarint_descending(reader: &mut ByteReader) -> DecodeResult<u64> {
    decode_with(reader, true)
}

fn decode_with(reader: &mut ByteReader, complement: bool) -> DecodeResult<u64> {
    let offset = reader.position();
    let tag = reader.read_byte_with(complement)?;
    match tag {
        0..=240 => Ok(u64::from(tag)),
        241..=248 => {
            let low = reader.read_byte_with(complement)?;
            // 241 followed by 0 spells 240, which fits in one byte
            if tag == 241 && low == 0 {
                return Err(DecodeError::InvalidVarint { offset });
            }
            Ok(ONE_BYTE_MAX + 256 * u64::from(tag - 241) + u64::from(low))
        }
        THREE_BYTE_TAG => {
            let high = reader.read_byte_with(complement)?;
            let low = reader.read_byte_with(complement)?;
            Ok(TWO_BYTE_MAX + 1 + 256 * u64::from(high) + u64::from(low))
        }
        _ => {
            let n = usize::from(tag - FIXED_TAG_BASE);
            let mut value = 0u64;
            for _ in 0..n {
                value = (value << 8) | u64::from(reader.read_byte_with(complement)?);
            }
            // Shorter forms exist for anything below this, and the encoder
            // always picks the shortest.
            let minimum = if n == 3 {
                THREE_BYTE_MAX + 1
            } else {
                1u64 << (8 * (n - 1))
            };
            if value < minimum {
                return Err(DecodeError::InvalidVarint { offset });
            }
            Ok(value)
        }
    }
}
