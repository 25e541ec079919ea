//! Encoding helpers for the sign-magnitude varint format.
//!
//! The first byte carries a continuation flag (bit 7), a sign flag (bit 6) and
//! the low six bits of the magnitude. Each following byte carries a
//! continuation flag and the next seven bits. Negative values store `-v - 1`
//! as their magnitude, so `-1` encodes as a single `0x40` byte.

mod magnitude;
mod varint;

pub(crate) use magnitude::{Accumulator, Width};
pub use varint::{
    EncodedVarint, MAX_VARINT_LEN32, MAX_VARINT_LEN64, append_varint32, append_varint64,
    decode_varint32, decode_varint64, encode_varint32, encode_varint64, encoded_len32,
    encoded_len64, to_varint32, to_varint64,
};
