//! Encoding logic for order-preserving float keys

use crate::digits::{decompose, Decomposition};
use crate::float_key::ValueClass;
use crate::mantissa::encode_mantissa;
use crate::marker;
use crate::varint::{encode_uvarint, encode_uvarint_descending};

/// Return the single encoded byte for a non-finite value or zero.
///
/// Finite non-zero classes have no single-byte encoding and yield `None`.
#[must_use]
pub const fn encode_special_byte(class: ValueClass) -> Option<u8> {
    match class {
        ValueClass::NaN => Some(marker::NAN),
        ValueClass::NegativeInfinity => Some(marker::NEG_INFINITY),
        ValueClass::Zero => Some(marker::ZERO),
        ValueClass::PositiveInfinity => Some(marker::INFINITY),
        ValueClass::NegativeFinite | ValueClass::PositiveFinite => None,
    }
}

/// Append the order-preserving encoding of `value` to `buf`.
///
/// Only the tail of `buf` is touched, so several fields can be encoded into
/// the same key back to back. `+0.0` and `-0.0` produce the same byte. Returns
/// the number of bytes appended.
///
/// ```rust
/// let mut key = b"price/".to_vec();
/// ordfloat::encode_float(&mut key, 1.0);
/// assert_eq!(&key[6..], &[0x25, 0x02, 0x00]);
/// ```
pub fn encode_float(buf: &mut Vec<u8>, value: f64) -> usize {
    let start = buf.len();
    let class = ValueClass::of(value);
    match encode_special_byte(class) {
        Some(byte) => buf.push(byte),
        None => encode_from_parts(
            buf,
            class == ValueClass::NegativeFinite,
            &decompose(value.abs()),
        ),
    }
    buf.len() - start
}

/// Encode a finite non-zero value from its sign and decomposition.
///
/// Small and large exponents spill into a varint after the marker; the
/// varint runs descending wherever a larger exponent means a smaller value.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn encode_from_parts(buf: &mut Vec<u8>, negative: bool, decomposition: &Decomposition) {
    let exponent = decomposition.exponent();
    let spill = u64::from(exponent.unsigned_abs());

    match (negative, exponent) {
        (false, e) if e < 0 => {
            buf.push(marker::POS_SMALL);
            encode_uvarint_descending(buf, spill);
        }
        (false, e) if e <= marker::MEDIUM_EXPONENT_MAX => {
            buf.push(marker::POS_MEDIUM + e as u8);
        }
        (false, _) => {
            buf.push(marker::POS_LARGE);
            encode_uvarint(buf, spill);
        }
        (true, e) if e < 0 => {
            buf.push(marker::NEG_SMALL);
            encode_uvarint(buf, spill);
        }
        (true, e) if e <= marker::MEDIUM_EXPONENT_MAX => {
            buf.push(marker::NEG_MEDIUM - e as u8);
        }
        (true, _) => {
            buf.push(marker::NEG_LARGE);
            encode_uvarint_descending(buf, spill);
        }
    }

    encode_mantissa(buf, decomposition.digits(), negative);
}
