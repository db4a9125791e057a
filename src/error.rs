use thiserror::Error;

/// Errors that can occur while decoding an encoded float.
///
/// Every variant carries the offset of the offending byte, counted from the
/// start of the slice handed to the decoder.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Unexpected end of input at byte {offset}")]
    UnexpectedEndOfInput { offset: usize },

    #[error("Invalid marker byte {byte:#04x} at byte {offset}")]
    InvalidMarker { offset: usize, byte: u8 },

    #[error("Invalid digit: value {digit} at byte {offset} is outside valid range [0, 99]")]
    InvalidDigit { offset: usize, digit: u8 },

    #[error("Non-canonical digit group {digit} at byte {offset}")]
    NonCanonicalDigit { offset: usize, digit: u8 },

    #[error("Too many digit groups: byte {offset} exceeds the {max} groups a double needs")]
    TooManyDigits { offset: usize, max: usize },

    #[error("Exponent {exponent} at byte {offset} lies outside the band of its marker")]
    ExponentOutOfBand { offset: usize, exponent: i64 },

    #[error("Invalid varint encoding at byte {offset}")]
    InvalidVarint { offset: usize },

    #[error("Missing terminator at byte {offset}: found {byte:#04x}")]
    MissingTerminator { offset: usize, byte: u8 },

    #[error("Encoding at byte {offset} does not denote a finite non-zero double")]
    Unrepresentable { offset: usize },

    #[error("Trailing bytes after the encoded value, starting at byte {offset}")]
    TrailingBytes { offset: usize },
}

impl DecodeError {
    /// Offset of the offending byte.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match *self {
            Self::UnexpectedEndOfInput { offset }
            | Self::InvalidMarker { offset, .. }
            | Self::InvalidDigit { offset, .. }
            | Self::NonCanonicalDigit { offset, .. }
            | Self::TooManyDigits { offset, .. }
            | Self::ExponentOutOfBand { offset, .. }
            | Self::InvalidVarint { offset }
            | Self::MissingTerminator { offset, .. }
            | Self::Unrepresentable { offset }
            | Self::TrailingBytes { offset } => offset,
        }
    }
}

/// Result type for decoding operations
pub type DecodeResult<T> = Result<T, DecodeError>;
