use bytes::{Buf, BufMut};

use super::decode_strict;
use crate::encoding::{
    MAX_VARINT_LEN32, MAX_VARINT_LEN64, Width, encode_varint32, encode_varint64,
};
use crate::error::Result;

/// Strict varint decoding for [`Buf`] cursors.
///
/// The cursor advances by the bytes consumed, including on failure.
pub trait VarintBuf: Buf {
    /// Decodes a 32-bit varint, see [`read_varint32`](crate::read_varint32).
    fn get_varint32(&mut self) -> Result<i32> {
        decode_strict(Width::W32, || next_byte(self)).map(|value| value as i32)
    }

    /// Decodes a 64-bit varint, see [`read_varint64`](crate::read_varint64).
    fn get_varint64(&mut self) -> Result<i64> {
        decode_strict(Width::W64, || next_byte(self))
    }
}

impl<B: Buf + ?Sized> VarintBuf for B {}

/// Varint encoding for [`BufMut`] sinks.
pub trait VarintBufMut: BufMut {
    /// Appends the encoding of `value`, returning the bytes written.
    fn put_varint32(&mut self, value: i32) -> usize {
        let mut buf = [0u8; MAX_VARINT_LEN32];
        let len = encode_varint32(value, &mut buf);
        self.put_slice(&buf[..len]);
        len
    }

    /// Appends the encoding of `value`, returning the bytes written.
    fn put_varint64(&mut self, value: i64) -> usize {
        let mut buf = [0u8; MAX_VARINT_LEN64];
        let len = encode_varint64(value, &mut buf);
        self.put_slice(&buf[..len]);
        len
    }
}

impl<B: BufMut + ?Sized> VarintBufMut for B {}

fn next_byte<B: Buf + ?Sized>(buf: &mut B) -> std::io::Result<u8> {
    if !buf.has_remaining() {
        return Err(std::io::ErrorKind::UnexpectedEof.into());
    }
    Ok(buf.get_u8())
}
