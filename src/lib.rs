//! # ordfloat
//!
//! An order-preserving, variable-length binary encoding for IEEE-754 doubles,
//! meant for the sortable keys of an ordered key-value store.
//!
//! The encoding provides:
//!
//! - **Order preservation**: lexicographic comparison of encoded bytes matches
//!   numerical comparison, with NaN below `-∞` and `+∞` above every finite value
//! - **Exact round trips**: every finite double decodes bit-for-bit
//! - **Self-delimiting**: the decoder consumes exactly one encoding and hands
//!   back the rest of the key
//! - **Compactness**: common values take three or four bytes
//!
//! ## Examples
//!
//! ```rust
//! use ordfloat::{decode_float, encode_float, FloatKey};
//!
//! // Append two fields to one key
//! let mut key = Vec::new();
//! encode_float(&mut key, -2.5);
//! encode_float(&mut key, 100.0);
//!
//! let (rest, first) = decode_float(&key).unwrap();
//! let (rest, second) = decode_float(rest).unwrap();
//! assert_eq!((first, second), (-2.5, 100.0));
//! assert!(rest.is_empty());
//!
//! // Owned keys compare like the values they hold
//! let a = FloatKey::from(1.5);
//! let b = FloatKey::from(2.5);
//! assert!(a < b);
//! ```
//!
//! ## Format Overview
//!
//! A finite non-zero magnitude is written in base 100 as `0.d1 d2 … dn × 100^E`.
//!
//! - **Marker** (1 byte): value class and exponent band; the medium bands carry
//!   `E` in `0..=10` directly
//! - **Exponent** (0 or more bytes): an ordered varint for `E` outside the medium
//!   bands, descending where a larger exponent means a smaller value
//! - **Digits** (1 byte per group): `2d + 1` while more groups follow, `2d` for
//!   the last one
//! - **Terminator**: `0x00`
//!
//! Negative values complement every exponent and digit byte, so a larger
//! magnitude sorts first. NaN, the infinities and zero are a single marker byte.

pub(crate) mod decoder;
pub(crate) mod digits;
pub(crate) mod encoder;
pub(crate) mod error;
pub(crate) mod float_key;
pub(crate) mod mantissa;
pub(crate) mod marker;
pub(crate) mod reader;
pub(crate) mod varint;

// Re-export main types and functions
pub use decoder::{decode_float, decode_to_parts, peek_float_length, DecodedFloat, DecodedValue};
pub use digits::{decompose, Decomposition, MAX_DIGIT_GROUPS};
pub use encoder::{encode_float, encode_from_parts};
pub use error::{DecodeError, DecodeResult};
pub use float_key::{FloatKey, ValueClass};
