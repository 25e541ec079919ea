use std::io::{self, Read, Write};

use super::decode_strict;
use crate::encoding::{
    MAX_VARINT_LEN32, MAX_VARINT_LEN64, Width, encode_varint32, encode_varint64,
};
use crate::error::Result;

/// Reads consecutive varints from a byte source and tracks how many bytes
/// have been consumed.
///
/// No read-ahead is performed: after each call the wrapped reader is
/// positioned directly behind the last byte the decoder looked at. Wrap slow
/// sources in a [`BufReader`](std::io::BufReader) first.
#[derive(Debug)]
pub struct VarintReader<R> {
    inner: R,
    position: u64,
}

impl<R: Read> VarintReader<R> {
    /// Wraps `inner`, starting the position counter at zero.
    pub fn new(inner: R) -> Self {
        Self { inner, position: 0 }
    }

    /// Reads one 32-bit varint.
    pub fn read_i32(&mut self) -> Result<i32> {
        self.read(Width::W32).map(|value| value as i32)
    }

    /// Reads one 64-bit varint.
    pub fn read_i64(&mut self) -> Result<i64> {
        self.read(Width::W64)
    }

    fn read(&mut self, width: Width) -> Result<i64> {
        let Self { inner, position } = self;
        decode_strict(width, || {
            let mut byte = [0u8; 1];
            inner.read_exact(&mut byte)?;
            *position += 1;
            Ok(byte[0])
        })
    }

    /// Bytes consumed from the wrapped reader so far.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Returns a shared reference to the wrapped reader.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Returns a mutable reference to the wrapped reader. Bytes read through
    /// it are not counted in [`position`](Self::position).
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Consumes the wrapper, yielding the reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

/// Writes consecutive varints to a byte sink and tracks how many bytes have
/// been written.
#[derive(Debug)]
pub struct VarintWriter<W> {
    inner: W,
    position: u64,
}

impl<W: Write> VarintWriter<W> {
    /// Wraps `inner`, starting the position counter at zero.
    pub fn new(inner: W) -> Self {
        Self { inner, position: 0 }
    }

    /// Writes one 32-bit varint, returning its length.
    pub fn write_i32(&mut self, value: i32) -> Result<usize> {
        let mut buf = [0u8; MAX_VARINT_LEN32];
        let len = encode_varint32(value, &mut buf);
        self.write_encoded(&buf[..len])
    }

    /// Writes one 64-bit varint, returning its length.
    pub fn write_i64(&mut self, value: i64) -> Result<usize> {
        let mut buf = [0u8; MAX_VARINT_LEN64];
        let len = encode_varint64(value, &mut buf);
        self.write_encoded(&buf[..len])
    }

    fn write_encoded(&mut self, bytes: &[u8]) -> Result<usize> {
        self.inner.write_all(bytes)?;
        self.position += bytes.len() as u64;
        Ok(bytes.len())
    }

    /// Bytes written to the wrapped writer so far.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Flushes the wrapped writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    /// Returns a shared reference to the wrapped writer.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Consumes the wrapper, yielding the writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}
