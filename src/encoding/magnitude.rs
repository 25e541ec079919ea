//! Sign handling and chunk folding shared by every encode and decode surface.

use crate::error::{Error, Result};

const MORE_FLAG: u8 = 0x80;
const SIGN_FLAG: u8 = 0x40;
const FIRST_CHUNK_MASK: u8 = 0x3f;
const CHUNK_MASK: u8 = 0x7f;
const FIRST_CHUNK_BITS: u32 = 6;
const CHUNK_BITS: u32 = 7;

/// Byte budget and magnitude range of one integer width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Width {
    pub(crate) bits: u32,
    pub(crate) max_len: usize,
    /// Largest magnitude either sign can carry (`MAX` for non-negative values,
    /// `-MIN - 1` for negative ones, which is the same number).
    pub(crate) max_magnitude: u64,
}

impl Width {
    pub(crate) const W32: Width = Width {
        bits: 32,
        max_len: super::MAX_VARINT_LEN32,
        max_magnitude: i32::MAX as u64,
    };

    pub(crate) const W64: Width = Width {
        bits: 64,
        max_len: super::MAX_VARINT_LEN64,
        max_magnitude: i64::MAX as u64,
    };
}

/// Splits a signed value into its sign flag and biased magnitude.
///
/// Negative values are stored as `-v - 1`, which is `!v` in two's complement,
/// so `i64::MIN` maps to `i64::MAX` without overflowing.
#[inline]
pub(crate) fn split(value: i64) -> (bool, u64) {
    if value < 0 {
        (true, !value as u64)
    } else {
        (false, value as u64)
    }
}

/// Inverse of [`split`]. Magnitudes above `i64::MAX` wrap.
#[inline]
pub(crate) fn join(negative: bool, magnitude: u64) -> i64 {
    if negative {
        !(magnitude as i64)
    } else {
        magnitude as i64
    }
}

/// Writes the encoding of `(negative, magnitude)` into `dst`, returning the length.
pub(crate) fn encode_into(negative: bool, mut magnitude: u64, dst: &mut [u8]) -> usize {
    let mut byte = (magnitude as u8) & FIRST_CHUNK_MASK;
    if negative {
        byte |= SIGN_FLAG;
    }
    magnitude >>= FIRST_CHUNK_BITS;

    let mut len = 0;
    loop {
        if magnitude != 0 {
            byte |= MORE_FLAG;
        }
        dst[len] = byte;
        len += 1;
        if magnitude == 0 {
            return len;
        }
        byte = (magnitude as u8) & CHUNK_MASK;
        magnitude >>= CHUNK_BITS;
    }
}

/// Number of bytes needed for a biased magnitude.
#[inline]
pub(crate) fn encoded_len(magnitude: u64) -> usize {
    let mut len = 1;
    let mut rest = magnitude >> FIRST_CHUNK_BITS;
    while rest != 0 {
        rest >>= CHUNK_BITS;
        len += 1;
    }
    len
}

/// Incremental decoder fed one byte at a time.
#[derive(Debug, Clone)]
pub(crate) struct Accumulator {
    width: Width,
    negative: bool,
    magnitude: u64,
    len: usize,
    /// Set when a chunk carried bits past the top of the 64-bit register.
    truncated_bits: bool,
}

impl Accumulator {
    pub(crate) fn new(width: Width) -> Self {
        Self {
            width,
            negative: false,
            magnitude: 0,
            len: 0,
            truncated_bits: false,
        }
    }

    /// Folds in the next byte and returns its `more` flag.
    pub(crate) fn push(&mut self, byte: u8) -> bool {
        if self.len == 0 {
            self.negative = byte & SIGN_FLAG != 0;
            self.magnitude = u64::from(byte & FIRST_CHUNK_MASK);
        } else {
            let shift = FIRST_CHUNK_BITS + CHUNK_BITS * (self.len as u32 - 1);
            let chunk = u64::from(byte & CHUNK_MASK);
            let folded = chunk << shift;
            if folded >> shift != chunk {
                self.truncated_bits = true;
            }
            self.magnitude |= folded;
        }
        self.len += 1;
        byte & MORE_FLAG != 0
    }

    /// Bytes folded in so far.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Whether the byte budget of the width has been used up.
    pub(crate) fn is_full(&self) -> bool {
        self.len >= self.width.max_len
    }

    /// Best-effort value: whatever bits were folded in, no range check.
    pub(crate) fn value(&self) -> i64 {
        join(self.negative, self.magnitude)
    }

    /// Value of a terminated sequence, rejecting magnitudes outside the width.
    pub(crate) fn finish(&self) -> Result<i64> {
        if self.truncated_bits || self.magnitude > self.width.max_magnitude {
            return Err(self.overflow());
        }
        Ok(self.value())
    }

    pub(crate) fn overflow(&self) -> Error {
        Error::Overflow {
            bits: self.width.bits,
            max_len: self.width.max_len,
        }
    }
}
