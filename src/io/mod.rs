//! Stream surfaces: strict decoding from readers and buffers, encoding to writers.

use std::io::{self, Read, Write};

use tracing::trace;

use crate::encoding::{
    Accumulator, MAX_VARINT_LEN32, MAX_VARINT_LEN64, Width, encode_varint32, encode_varint64,
};
use crate::error::Result;

mod buf;
mod streaming;

pub use buf::{VarintBuf, VarintBufMut};
pub use streaming::{VarintReader, VarintWriter};

/// Reads one 32-bit varint, consuming exactly the bytes that belong to it.
///
/// Fails with an [`UnexpectedEof`](io::ErrorKind::UnexpectedEof) I/O error if
/// the reader ends before the value terminates, and with
/// [`Error::Overflow`](crate::Error::Overflow) if the value does not terminate
/// within five bytes or does not fit in an `i32`.
pub fn read_varint32<R: Read + ?Sized>(reader: &mut R) -> Result<i32> {
    decode_strict(Width::W32, || read_byte(reader)).map(|value| value as i32)
}

/// Reads one 64-bit varint. Same contract as [`read_varint32`] with a
/// ten-byte budget.
pub fn read_varint64<R: Read + ?Sized>(reader: &mut R) -> Result<i64> {
    decode_strict(Width::W64, || read_byte(reader))
}

/// Encodes a 32-bit value and writes it to `writer`, returning the bytes written.
pub fn write_varint32<W: Write + ?Sized>(writer: &mut W, value: i32) -> Result<usize> {
    let mut buf = [0u8; MAX_VARINT_LEN32];
    let len = encode_varint32(value, &mut buf);
    writer.write_all(&buf[..len])?;
    Ok(len)
}

/// Encodes a 64-bit value and writes it to `writer`, returning the bytes written.
pub fn write_varint64<W: Write + ?Sized>(writer: &mut W, value: i64) -> Result<usize> {
    let mut buf = [0u8; MAX_VARINT_LEN64];
    let len = encode_varint64(value, &mut buf);
    writer.write_all(&buf[..len])?;
    Ok(len)
}

#[inline]
fn read_byte<R: Read + ?Sized>(reader: &mut R) -> io::Result<u8> {
    let mut byte = [0u8; 1];
    reader.read_exact(&mut byte)?;
    Ok(byte[0])
}

/// Pulls bytes from `next` until the value terminates, the byte budget runs
/// out, or `next` fails.
pub(crate) fn decode_strict<F>(width: Width, mut next: F) -> Result<i64>
where
    F: FnMut() -> io::Result<u8>,
{
    let mut acc = Accumulator::new(width);
    loop {
        let byte = match next() {
            Ok(byte) => byte,
            Err(err) => {
                trace!(bits = width.bits, consumed = acc.len(), error = %err, "varint source failed");
                return Err(err.into());
            }
        };
        if !acc.push(byte) {
            break;
        }
        if acc.is_full() {
            trace!(bits = width.bits, consumed = acc.len(), "varint exceeds byte budget");
            return Err(acc.overflow());
        }
    }
    acc.finish().inspect_err(|_| {
        trace!(bits = width.bits, consumed = acc.len(), "varint magnitude out of range");
    })
}
