//! Decoding logic for order-preserving float keys

use tracing::trace;

use crate::digits::Decomposition;
use crate::error::{DecodeError, DecodeResult};
use crate::float_key::ValueClass;
use crate::mantissa::decode_mantissa;
use crate::marker;
use crate::reader::ByteReader;
use crate::varint::{decode_uvarint, decode_uvarint_descending};

/// Decoded finite non-zero value with its semantic fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedFloat {
    pub negative: bool,
    pub decomposition: Decomposition,
}

/// Represents either a decoded finite value or a single-byte class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodedValue {
    Regular(DecodedFloat),
    Special(ValueClass),
}

/// Decode the float at the start of `input`.
///
/// Returns the bytes following the encoding together with the value, so a
/// caller walking a composite key can hand the remainder to the next field.
/// Zero always decodes as `+0.0`.
///
/// ```rust
/// let key = [0x1e, 0xfd, 0x00, 0xaa];
/// let (rest, value) = ordfloat::decode_float(&key).unwrap();
/// assert_eq!(value, -100.0);
/// assert_eq!(rest, &[0xaa]);
/// ```
///
/// # Errors
///
/// Returns [`DecodeError`] if the input is empty, truncated, or not a
/// canonical encoding.
pub fn decode_float(input: &[u8]) -> DecodeResult<(&[u8], f64)> {
    decode_value(input)
        .inspect_err(|err| trace!(%err, len = input.len(), "rejected float encoding"))
}

fn decode_value(input: &[u8]) -> DecodeResult<(&[u8], f64)> {
    let (parts, len) = decode_to_parts(input)?;
    let value = match parts {
        DecodedValue::Special(class) => special_value(class),
        DecodedValue::Regular(float) => {
            let magnitude = float.decomposition.recompose();
            if !magnitude.is_finite() || magnitude == 0.0 {
                // Point at the first digit byte, just past the exponent
                let offset = len - float.decomposition.digits().len() - 1;
                return Err(DecodeError::Unrepresentable { offset });
            }
            if float.negative {
                -magnitude
            } else {
                magnitude
            }
        }
    };
    Ok((&input[len..], value))
}

/// Total length of the encoding at the start of `input`, without building
/// the value.
///
/// # Errors
///
/// Returns [`DecodeError`] under the same structural conditions as
/// [`decode_float`].
pub fn peek_float_length(input: &[u8]) -> DecodeResult<usize> {
    decode_to_parts(input).map(|(_, len)| len)
}

/// Decode the encoding at the start of `bytes` to semantic parts, returning
/// them with the number of bytes consumed.
///
/// # Errors
///
/// Returns [`DecodeError`] if the bytes are empty or contain an invalid encoding.
pub fn decode_to_parts(bytes: &[u8]) -> DecodeResult<(DecodedValue, usize)> {
    let mut reader = ByteReader::new(bytes);
    let first = reader.read_byte()?;

    let (negative, exponent) = match first {
        marker::NAN => return Ok((DecodedValue::Special(ValueClass::NaN), 1)),
        marker::NEG_INFINITY => {
            return Ok((DecodedValue::Special(ValueClass::NegativeInfinity), 1));
        }
        marker::ZERO => return Ok((DecodedValue::Special(ValueClass::Zero), 1)),
        marker::INFINITY => {
            return Ok((DecodedValue::Special(ValueClass::PositiveInfinity), 1));
        }
        marker::NEG_LARGE => (true, large_exponent(&mut reader, true)?),
        marker::NEG_MEDIUM_MIN..=marker::NEG_MEDIUM => {
            (true, i32::from(marker::NEG_MEDIUM - first))
        }
        marker::NEG_SMALL => (true, small_exponent(&mut reader, false)?),
        marker::POS_SMALL => (false, small_exponent(&mut reader, true)?),
        marker::POS_MEDIUM..=marker::POS_MEDIUM_MAX => {
            (false, i32::from(first - marker::POS_MEDIUM))
        }
        marker::POS_LARGE => (false, large_exponent(&mut reader, false)?),
        byte => return Err(DecodeError::InvalidMarker { offset: 0, byte }),
    };

    let decomposition = decode_mantissa(&mut reader, exponent, negative)?;
    let decoded = DecodedFloat {
        negative,
        decomposition,
    };
    Ok((DecodedValue::Regular(decoded), reader.position()))
}

/// Read the exponent of a large band: `E > MEDIUM_EXPONENT_MAX`.
fn large_exponent(reader: &mut ByteReader, descending: bool) -> DecodeResult<i32> {
    let offset = reader.position();
    let raw = if descending {
        decode_uvarint_descending(reader)?
    } else {
        decode_uvarint(reader)?
    };
    i32::try_from(raw)
        .ok()
        .filter(|&e| e > marker::MEDIUM_EXPONENT_MAX)
        .ok_or(DecodeError::ExponentOutOfBand {
            offset,
            exponent: i64::try_from(raw).unwrap_or(i64::MAX),
        })
}

/// Read the exponent of a small band, stored as `-E` with `E < 0`.
fn small_exponent(reader: &mut ByteReader, descending: bool) -> DecodeResult<i32> {
    let offset = reader.position();
    let raw = if descending {
        decode_uvarint_descending(reader)?
    } else {
        decode_uvarint(reader)?
    };
    i32::try_from(raw)
        .ok()
        .filter(|&e| e > 0)
        .map(|e| -e)
        .ok_or(DecodeError::ExponentOutOfBand {
            offset,
            exponent: i64::try_from(raw).map_or(i64::MIN, |e| -e),
        })
}

const fn special_value(class: ValueClass) -> f64 {
    match class {
        ValueClass::NaN => f64::NAN,
        ValueClass::NegativeInfinity => f64::NEG_INFINITY,
        ValueClass::PositiveInfinity => f64::INFINITY,
        ValueClass::Zero | ValueClass::NegativeFinite | ValueClass::PositiveFinite => 0.0,
    }
}
