use crate::digits::{Decomposition, MAX_DIGIT_GROUPS};
use crate::error::{DecodeError, DecodeResult};
use crate::reader::ByteReader;

/// Byte closing the mantissa of every finite encoding.
///
/// No canonical digit byte is zero in either sign band, so the terminator is
/// never confused with a digit.
pub const TERMINATOR: u8 = 0x00;

/// Append the digit groups followed by the terminator.
///
/// Each group `d` becomes `2d + 1` when more groups follow and `2d` for the
/// last one. In a negative band every digit byte is complemented, the
/// terminator is not.
pub fn encode_mantissa(buf: &mut Vec<u8>, digits: &[u8], negative: bool) {
    let last = digits.len().saturating_sub(1);
    buf.extend(digits.iter().enumerate().map(|(i, &digit)| {
        let byte = 2 * digit + u8::from(i != last);
        if negative {
            !byte
        } else {
            byte
        }
    }));
    buf.push(TERMINATOR);
}

/// Read digit groups up to and including the terminator.
///
/// # Errors
///
/// Returns [`DecodeError`] when a byte holds a digit above 99, a leading or
/// final group is zero, there are more groups than any double needs, the
/// terminator is missing, or the input runs out.
pub fn decode_mantissa(
    reader: &mut ByteReader,
    exponent: i32,
    negative: bool,
) -> DecodeResult<Decomposition> {
    let mut digits = [0u8; MAX_DIGIT_GROUPS];
    let mut len = 0;

    loop {
        let offset = reader.position();
        let byte = reader.read_byte_with(negative)?;
        let digit = byte >> 1;
        let more = byte & 1 == 1;

        if digit > 99 {
            return Err(DecodeError::InvalidDigit { offset, digit });
        }
        if digit == 0 && (len == 0 || !more) {
            return Err(DecodeError::NonCanonicalDigit { offset, digit });
        }
        if len == MAX_DIGIT_GROUPS {
            return Err(DecodeError::TooManyDigits {
                offset,
                max: MAX_DIGIT_GROUPS,
            });
        }

        digits[len] = digit;
        len += 1;
        if !more {
            break;
        }
    }

    let offset = reader.position();
    match reader.read_byte()? {
        TERMINATOR => Ok(Decomposition::from_raw(exponent, digits, len)),
        byte => Err(DecodeError::MissingTerminator { offset, byte }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded(digits: &[u8], negative: bool) -> Vec<u8> {
        let mut buf = Vec::new();
        encode_mantissa(&mut buf, digits, negative);
        buf
    }

    #[test]
    fn test_continuation_flags() {
        assert_eq!(encoded(&[1], false), [0x02, 0x00]);
        assert_eq!(encoded(&[99, 0, 1], false), [0xc7, 0x01, 0x02, 0x00]);
        assert_eq!(encoded(&[12, 34, 50], false), [0x19, 0x45, 0x64, 0x00]);
    }

    #[test]
    fn test_negative_complements_digits_only() {
        assert_eq!(encoded(&[1], true), [0xfd, 0x00]);
        assert_eq!(encoded(&[99, 99], true), [0x38, 0x39, 0x00]);
    }

    #[test]
    fn test_decode_both_bands() {
        for negative in [false, true] {
            let bytes = encoded(&[12, 34, 50], negative);
            let mut reader = ByteReader::new(&bytes);
            let d = decode_mantissa(&mut reader, 1, negative).unwrap();
            assert_eq!(d.digits(), &[12, 34, 50]);
            assert_eq!(d.exponent(), 1);
            assert_eq!(reader.position(), bytes.len());
        }
    }

    #[test]
    fn test_reject_out_of_range_digit() {
        // 0xca = 2 * 101
        let bytes = [0x03, 0xca, 0x00];
        let mut reader = ByteReader::new(&bytes);
        assert_eq!(
            decode_mantissa(&mut reader, 1, false),
            Err(DecodeError::InvalidDigit {
                offset: 1,
                digit: 101
            })
        );
    }

    #[test]
    fn test_reject_zero_groups_at_the_edges() {
        let mut reader = ByteReader::new(&[0x01, 0x02, 0x00]);
        assert_eq!(
            decode_mantissa(&mut reader, 1, false),
            Err(DecodeError::NonCanonicalDigit {
                offset: 0,
                digit: 0
            })
        );

        // Terminator where the first digit should be
        let mut reader = ByteReader::new(&[0x00]);
        assert!(matches!(
            decode_mantissa(&mut reader, 1, false),
            Err(DecodeError::NonCanonicalDigit { offset: 0, .. })
        ));
    }

    #[test]
    fn test_reject_truncation_and_missing_terminator() {
        let mut reader = ByteReader::new(&[0x03, 0x05]);
        assert_eq!(
            decode_mantissa(&mut reader, 1, false),
            Err(DecodeError::UnexpectedEndOfInput { offset: 2 })
        );

        let mut reader = ByteReader::new(&[0x03]);
        assert_eq!(
            decode_mantissa(&mut reader, 1, false),
            Err(DecodeError::UnexpectedEndOfInput { offset: 1 })
        );

        let mut reader = ByteReader::new(&[0x02, 0x22]);
        assert_eq!(
            decode_mantissa(&mut reader, 1, false),
            Err(DecodeError::MissingTerminator {
                offset: 1,
                byte: 0x22
            })
        );
    }

    #[test]
    fn test_reject_too_many_groups() {
        let mut bytes = vec![0x03; MAX_DIGIT_GROUPS];
        bytes.extend_from_slice(&[0x02, 0x00]);
        let mut reader = ByteReader::new(&bytes);
        assert_eq!(
            decode_mantissa(&mut reader, 1, false),
            Err(DecodeError::TooManyDigits {
                offset: MAX_DIGIT_GROUPS,
                max: MAX_DIGIT_GROUPS
            })
        );
    }
}
