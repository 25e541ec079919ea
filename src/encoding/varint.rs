use smallvec::SmallVec;

use super::magnitude::{Accumulator, Width, encode_into, encoded_len, split};

/// Maximum number of bytes that a 32-bit varint can occupy.
pub const MAX_VARINT_LEN32: usize = 5;
/// Maximum number of bytes that a 64-bit varint can occupy.
pub const MAX_VARINT_LEN64: usize = 10;

/// Inline buffer large enough for any encoded varint.
pub type EncodedVarint = SmallVec<[u8; MAX_VARINT_LEN64]>;

/// Encodes a 32-bit value into `dst`, returning the number of bytes written (1 to 5).
///
/// # Panics
///
/// Panics if `dst` is shorter than the encoding. A buffer of
/// [`MAX_VARINT_LEN32`] bytes always suffices.
pub fn encode_varint32(value: i32, dst: &mut [u8]) -> usize {
    let (negative, magnitude) = split(i64::from(value));
    encode_into(negative, magnitude, dst)
}

/// Encodes a 64-bit value into `dst`, returning the number of bytes written (1 to 10).
///
/// # Panics
///
/// Panics if `dst` is shorter than the encoding. A buffer of
/// [`MAX_VARINT_LEN64`] bytes always suffices.
pub fn encode_varint64(value: i64, dst: &mut [u8]) -> usize {
    let (negative, magnitude) = split(value);
    encode_into(negative, magnitude, dst)
}

/// Encodes a 32-bit value and appends it to `out`.
pub fn append_varint32(value: i32, out: &mut Vec<u8>) -> usize {
    let mut buf = [0u8; MAX_VARINT_LEN32];
    let len = encode_varint32(value, &mut buf);
    out.extend_from_slice(&buf[..len]);
    len
}

/// Encodes a 64-bit value and appends it to `out`.
pub fn append_varint64(value: i64, out: &mut Vec<u8>) -> usize {
    let mut buf = [0u8; MAX_VARINT_LEN64];
    let len = encode_varint64(value, &mut buf);
    out.extend_from_slice(&buf[..len]);
    len
}

/// Returns the encoding of a 32-bit value as an inline buffer.
pub fn to_varint32(value: i32) -> EncodedVarint {
    to_varint64(i64::from(value))
}

/// Returns the encoding of a 64-bit value as an inline buffer.
pub fn to_varint64(value: i64) -> EncodedVarint {
    let mut buf = [0u8; MAX_VARINT_LEN64];
    let len = encode_varint64(value, &mut buf);
    SmallVec::from_slice(&buf[..len])
}

/// Number of bytes [`encode_varint32`] would write for `value`.
pub fn encoded_len32(value: i32) -> usize {
    encoded_len(split(i64::from(value)).1)
}

/// Number of bytes [`encode_varint64`] would write for `value`.
pub fn encoded_len64(value: i64) -> usize {
    encoded_len(split(value).1)
}

/// Decodes a 32-bit varint from the front of `src`.
///
/// Returns the value and the number of bytes consumed. A consumed count of `0`
/// means `src` ended before the value terminated. Sequences that do not
/// terminate within [`MAX_VARINT_LEN32`] bytes are not rejected: decoding stops
/// at the budget and the bits read so far are returned, truncated to 32 bits.
/// Use [`read_varint32`](crate::read_varint32) for strict validation.
pub fn decode_varint32(src: &[u8]) -> (i32, usize) {
    let (value, len) = decode_capped(src, Width::W32);
    (value as i32, len)
}

/// Decodes a 64-bit varint from the front of `src`.
///
/// Same contract as [`decode_varint32`] with a budget of [`MAX_VARINT_LEN64`] bytes.
pub fn decode_varint64(src: &[u8]) -> (i64, usize) {
    decode_capped(src, Width::W64)
}

fn decode_capped(src: &[u8], width: Width) -> (i64, usize) {
    let mut acc = Accumulator::new(width);
    for &byte in src.iter().take(width.max_len) {
        if !acc.push(byte) {
            return (acc.value(), acc.len());
        }
    }
    if acc.is_full() {
        (acc.value(), acc.len())
    } else {
        (0, 0)
    }
}
