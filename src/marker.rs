//! Marker bytes: the first byte of every encoding.
//!
//! Markers are laid out in value order, so the marker alone decides every
//! comparison between two different classes or exponent bands:
//!
//! ```text
//! 0x13        NaN
//! 0x14        -Infinity
//! 0x15        negative, E >= 11       descending varint E
//! 0x16..0x20  negative, E in 10..=0   (0x20 - E)
//! 0x21        negative, E < 0         ascending varint -E
//! 0x22        zero
//! 0x23        positive, E < 0         descending varint -E
//! 0x24..0x2e  positive, E in 0..=10   (0x24 + E)
//! 0x2f        positive, E >= 11       ascending varint E
//! 0x30        +Infinity
//! ```

pub const NAN: u8 = 0x13;
pub const NEG_INFINITY: u8 = 0x14;
pub const NEG_LARGE: u8 = 0x15;
/// Negative medium band for `E == MEDIUM_EXPONENT_MAX`.
pub const NEG_MEDIUM_MIN: u8 = 0x16;
/// Negative medium band for `E == 0`.
pub const NEG_MEDIUM: u8 = 0x20;
pub const NEG_SMALL: u8 = 0x21;
pub const ZERO: u8 = 0x22;
pub const POS_SMALL: u8 = 0x23;
/// Positive medium band for `E == 0`.
pub const POS_MEDIUM: u8 = 0x24;
/// Positive medium band for `E == MEDIUM_EXPONENT_MAX`.
pub const POS_MEDIUM_MAX: u8 = 0x2e;
pub const POS_LARGE: u8 = 0x2f;
pub const INFINITY: u8 = 0x30;

/// Largest exponent carried by the marker alone.
pub const MEDIUM_EXPONENT_MAX: i32 = 10;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medium_bands_are_contiguous() {
        assert_eq!(
            i32::from(NEG_MEDIUM - NEG_MEDIUM_MIN),
            MEDIUM_EXPONENT_MAX
        );
        assert_eq!(
            i32::from(POS_MEDIUM_MAX - POS_MEDIUM),
            MEDIUM_EXPONENT_MAX
        );
        assert_eq!(NEG_LARGE + 1, NEG_MEDIUM_MIN);
        assert_eq!(NEG_MEDIUM + 1, NEG_SMALL);
        assert_eq!(POS_SMALL + 1, POS_MEDIUM);
        assert_eq!(POS_MEDIUM_MAX + 1, POS_LARGE);
    }

    #[test]
    fn test_markers_follow_value_order() {
        let order = [
            NAN,
            NEG_INFINITY,
            NEG_LARGE,
            NEG_MEDIUM_MIN,
            NEG_MEDIUM,
            NEG_SMALL,
            ZERO,
            POS_SMALL,
            POS_MEDIUM,
            POS_MEDIUM_MAX,
            POS_LARGE,
            INFINITY,
        ];
        assert!(order.windows(2).all(|w| w[0] < w[1]));
    }
}
