//! Base-100 decomposition of a positive finite magnitude.
//!
//! A magnitude `m` is written as
//!
//! ```text
//! m = 0.d1 d2 … dn × 100^E        (each di in 0..=99, d1 != 0, dn != 0)
//! ```
//!
//! which is the same as `(d1 + d2/100 + … ) × 100^(E-1)`. The digit groups are
//! the shortest that reproduce `m` exactly when parsed back and rounded to the
//! nearest double.

use std::fmt::{self, Write as _};

/// Maximum number of base-100 digit groups a double can need: 17 significant
/// decimal digits plus one leading zero when the decimal exponent is odd.
pub const MAX_DIGIT_GROUPS: usize = 9;

/// Room for every decimal digit plus the leading pad and one trailing pad.
const DECIMAL_CAPACITY: usize = MAX_DIGIT_GROUPS * 2 + 2;

/// Base-100 scientific notation of a positive finite magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decomposition {
    exponent: i32,
    digits: [u8; MAX_DIGIT_GROUPS],
    len: usize,
}

impl Decomposition {
    /// Build a decomposition from an exponent and digit groups.
    ///
    /// Returns `None` unless the groups are canonical (between one and
    /// [`MAX_DIGIT_GROUPS`] of them, each at most 99, with non-zero first and
    /// last groups) and the value they spell is a finite non-zero double.
    #[must_use]
    pub fn from_parts(exponent: i32, digits: &[u8]) -> Option<Self> {
        let (&first, &last) = (digits.first()?, digits.last()?);
        if digits.len() > MAX_DIGIT_GROUPS || first == 0 || last == 0 {
            return None;
        }
        if digits.iter().any(|&d| d > 99) {
            return None;
        }
        let mut groups = [0u8; MAX_DIGIT_GROUPS];
        groups[..digits.len()].copy_from_slice(digits);
        let decomposition = Self::from_raw(exponent, groups, digits.len());
        let value = decomposition.recompose();
        (value.is_finite() && value != 0.0).then_some(decomposition)
    }

    /// Build from a group buffer the caller has already validated.
    pub(crate) const fn from_raw(
        exponent: i32,
        digits: [u8; MAX_DIGIT_GROUPS],
        len: usize,
    ) -> Self {
        Self {
            exponent,
            digits,
            len,
        }
    }

    /// Power-of-100 exponent `E`.
    #[must_use]
    pub const fn exponent(&self) -> i32 {
        self.exponent
    }

    /// Digit groups, most significant first.
    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.digits[..self.len]
    }

    /// Evaluate `0.d1d2… × 100^E` and round to the nearest double.
    ///
    /// The digits are rendered as a decimal string and handed to the standard
    /// correctly rounded parser, so the result is exact whenever the groups
    /// came from [`decompose`]. Values beyond the double range come back as
    /// infinity or zero; callers decide whether that is acceptable.
    #[must_use]
    pub fn recompose(&self) -> f64 {
        let mut text = StackBuf::<RECOMPOSE_CAPACITY>::new();
        // "0." + 2 chars per group + "e" + sign + at most 11 exponent digits
        // always fits, so the writes below cannot fail.
        let _ = text.write_str("0.");
        for &digit in self.digits() {
            let _ = write!(text, "{digit:02}");
        }
        let _ = write!(text, "e{}", 2 * i64::from(self.exponent));

        std::str::from_utf8(text.as_bytes())
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(f64::NAN)
    }
}

impl fmt::Display for Decomposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("0.")?;
        for &digit in self.digits() {
            write!(f, "{digit:02}")?;
        }
        write!(f, " × 100^{}", self.exponent)
    }
}

const RECOMPOSE_CAPACITY: usize = 2 + MAX_DIGIT_GROUPS * 2 + 2 + 20;

/// Split a positive finite magnitude into its base-100 exponent and digits.
///
/// The shortest round-trip decimal digits come from the standard library's
/// `{:e}` formatting; they are then regrouped in pairs, with a leading zero
/// when the decimal point falls between two digits of a pair.
///
/// # Panics
///
/// Panics if `magnitude` is zero, negative, NaN or infinite.
#[must_use]
pub fn decompose(magnitude: f64) -> Decomposition {
    assert!(
        magnitude.is_finite() && magnitude > 0.0,
        "decompose called with {magnitude}"
    );

    let mut text = StackBuf::<25>::new();
    // LowerExp of an f64 is at most 1 + 1 + 16 + 1 + 4 bytes long
    write!(text, "{magnitude:e}").expect("f64 LowerExp should fit in 25 bytes");

    // decimal[0] is reserved for a leading zero pad
    let mut decimal = [0u8; DECIMAL_CAPACITY];
    let mut count = 0;
    let mut bytes = text.as_bytes().iter();
    for &b in bytes.by_ref() {
        match b {
            b'0'..=b'9' => {
                decimal[1 + count] = b - b'0';
                count += 1;
            }
            b'.' => {}
            _ => break,
        }
    }
    let mut exp10 = 0i32;
    let mut negative_exp = false;
    for &b in bytes {
        if b == b'-' {
            negative_exp = true;
        } else {
            exp10 = exp10 * 10 + i32::from(b - b'0');
        }
    }
    if negative_exp {
        exp10 = -exp10;
    }

    // magnitude = 0.dddd × 10^point
    let point = exp10 + 1;
    let pad = usize::from(point.rem_euclid(2) == 1);
    let exponent = (point + 1).div_euclid(2);

    let start = 1 - pad;
    let len = (count + pad).div_ceil(2);
    let mut digits = [0u8; MAX_DIGIT_GROUPS];
    for (i, group) in digits.iter_mut().take(len).enumerate() {
        let at = start + 2 * i;
        *group = decimal[at] * 10 + decimal[at + 1];
    }

    Decomposition::from_raw(exponent, digits, len)
}

/// Fixed-capacity stack buffer that implements `fmt::Write`.
///
/// Keeps float formatting off the heap; every call owns its own buffer.
struct StackBuf<const N: usize> {
    buf: [u8; N],
    len: usize,
}

impl<const N: usize> StackBuf<N> {
    const fn new() -> Self {
        Self {
            buf: [0; N],
            len: 0,
        }
    }

    fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}

impl<const N: usize> fmt::Write for StackBuf<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let bytes = s.as_bytes();
        let new_len = self.len + bytes.len();
        if new_len > N {
            return Err(fmt::Error);
        }
        self.buf[self.len..new_len].copy_from_slice(bytes);
        self.len = new_len;
        Ok(())
    }
}
