use crate::decoder::{decode_float, decode_to_parts, DecodedFloat, DecodedValue};
use crate::encoder::{encode_float, encode_special_byte};
use crate::error::DecodeError;
use crate::marker;
use std::fmt;
use std::num::ParseFloatError;
use std::str::FromStr;

/// Value classes, declared in key order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueClass {
    NaN,
    NegativeInfinity,
    NegativeFinite,
    /// Both `+0.0` and `-0.0`
    Zero,
    PositiveFinite,
    PositiveInfinity,
}

impl ValueClass {
    /// Classify a double.
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value.is_nan() {
            Self::NaN
        } else if value == f64::NEG_INFINITY {
            Self::NegativeInfinity
        } else if value == f64::INFINITY {
            Self::PositiveInfinity
        } else if value == 0.0 {
            Self::Zero
        } else if value < 0.0 {
            Self::NegativeFinite
        } else {
            Self::PositiveFinite
        }
    }

    /// Classify an encoding by its marker byte.
    ///
    /// Returns `None` for bytes outside every band.
    #[must_use]
    pub const fn from_marker(byte: u8) -> Option<Self> {
        match byte {
            marker::NAN => Some(Self::NaN),
            marker::NEG_INFINITY => Some(Self::NegativeInfinity),
            marker::NEG_LARGE..=marker::NEG_SMALL => Some(Self::NegativeFinite),
            marker::ZERO => Some(Self::Zero),
            marker::POS_SMALL..=marker::POS_LARGE => Some(Self::PositiveFinite),
            marker::INFINITY => Some(Self::PositiveInfinity),
            _ => None,
        }
    }
}

/// A float in pre-encoded, order-preserving form
///
/// This struct stores the encoded bytes, providing:
/// - Zero-copy access via `as_bytes()`
/// - Direct byte comparison for Ord (order-preserving)
///
/// To get the value back, use `to_f64()`; for the sign, exponent and digit
/// groups, use `decode()`.
///
/// # NaN semantics
///
/// Unlike IEEE 754 floating-point, [`FloatKey`] treats NaN as a concrete value:
/// - `NaN == NaN` is **true** (reflexive equality)
/// - NaN has a defined sort position: it is **less than** all other values,
///   including negative infinity
///
/// Every NaN payload maps to the same key. Signed zeros map to the same key
/// too, so `FloatKey::from(-0.0) == FloatKey::from(0.0)`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FloatKey {
    bytes: Vec<u8>,
}

impl FloatKey {
    /// Create from pre-encoded bytes without validation
    #[must_use]
    pub const fn from_bytes_unchecked(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Create from pre-encoded bytes with validation
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if the bytes are not exactly one valid
    /// encoding.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        let (rest, _) = decode_float(bytes)?;
        if !rest.is_empty() {
            return Err(DecodeError::TrailingBytes {
                offset: bytes.len() - rest.len(),
            });
        }
        Ok(Self {
            bytes: bytes.to_vec(),
        })
    }

    /// Get the encoded bytes (zero-copy)
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume and return the encoded bytes
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Decode back to a double.
    ///
    /// Keys built through [`From<f64>`] or [`FloatKey::from_bytes`] always
    /// decode; an unchecked key holding garbage decodes as NaN.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        decode_float(&self.bytes).map_or(f64::NAN, |(_, value)| value)
    }

    /// Decode to get semantic fields (sign, exponent, digit groups).
    ///
    /// Returns `None` for the single-byte classes (±∞, zero, NaN) since they
    /// have no exponent or digits.
    #[must_use]
    pub fn decode(&self) -> Option<DecodedFloat> {
        match decode_to_parts(&self.bytes).ok()?.0 {
            DecodedValue::Regular(d) => Some(d),
            DecodedValue::Special(_) => None,
        }
    }

    /// Class of the encoded value, read from the marker byte
    #[must_use]
    pub fn class(&self) -> Option<ValueClass> {
        self.bytes.first().copied().and_then(ValueClass::from_marker)
    }

    /// Check if this is zero
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.bytes == [marker::ZERO]
    }

    /// Check if this is NaN
    #[must_use]
    pub fn is_nan(&self) -> bool {
        self.bytes == [marker::NAN]
    }

    /// Check if this is infinity (either + or -)
    #[must_use]
    pub fn is_infinity(&self) -> bool {
        self.is_pos_infinity() || self.is_neg_infinity()
    }

    /// Check if this is positive infinity
    #[must_use]
    pub fn is_pos_infinity(&self) -> bool {
        self.bytes == [marker::INFINITY]
    }

    /// Check if this is negative infinity
    #[must_use]
    pub fn is_neg_infinity(&self) -> bool {
        self.bytes == [marker::NEG_INFINITY]
    }

    /// Check if this is a finite number (not infinity or NaN)
    #[must_use]
    pub fn is_finite(&self) -> bool {
        !self.is_infinity() && !self.is_nan()
    }

    /// Create positive infinity
    #[must_use]
    pub fn infinity() -> Self {
        Self::special(ValueClass::PositiveInfinity)
    }

    /// Create negative infinity
    #[must_use]
    pub fn neg_infinity() -> Self {
        Self::special(ValueClass::NegativeInfinity)
    }

    /// Create NaN
    #[must_use]
    pub fn nan() -> Self {
        Self::special(ValueClass::NaN)
    }

    /// Create zero
    #[must_use]
    pub fn zero() -> Self {
        Self::special(ValueClass::Zero)
    }

    fn special(class: ValueClass) -> Self {
        Self {
            bytes: encode_special_byte(class).into_iter().collect(),
        }
    }
}

impl From<f64> for FloatKey {
    fn from(value: f64) -> Self {
        // Nine digit groups, a marker, one varint byte and the terminator
        let mut bytes = Vec::with_capacity(12);
        encode_float(&mut bytes, value);
        Self { bytes }
    }
}

impl From<f32> for FloatKey {
    fn from(value: f32) -> Self {
        Self::from(f64::from(value))
    }
}

impl FromStr for FloatKey {
    type Err = ParseFloatError;

    /// Parse with the standard float grammar (`"1.5"`, `"-2e10"`, `"inf"`,
    /// `"NaN"`) and encode immediately.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<f64>().map(Self::from)
    }
}

impl fmt::Display for FloatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match decode_float(&self.bytes) {
            Ok((_, value)) => write!(f, "{value}"),
            Err(_) => f.write_str("<invalid>"),
        }
    }
}
