//! Async counterparts of the stream surfaces, built on tokio's I/O traits.
//!
//! Futures returned here are only cancel-safe between values: dropping one
//! mid-value leaves the source advanced past the bytes already consumed.

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::trace;

use crate::encoding::{
    Accumulator, MAX_VARINT_LEN32, MAX_VARINT_LEN64, Width, encode_varint32, encode_varint64,
};
use crate::error::Result;

/// Reads one 32-bit varint from an async source. Same contract as
/// [`read_varint32`](crate::read_varint32).
pub async fn read_varint32<R>(reader: &mut R) -> Result<i32>
where
    R: AsyncRead + Unpin + ?Sized,
{
    read_strict(reader, Width::W32).await.map(|value| value as i32)
}

/// Reads one 64-bit varint from an async source. Same contract as
/// [`read_varint64`](crate::read_varint64).
pub async fn read_varint64<R>(reader: &mut R) -> Result<i64>
where
    R: AsyncRead + Unpin + ?Sized,
{
    read_strict(reader, Width::W64).await
}

/// Encodes a 32-bit value and writes it to an async sink.
pub async fn write_varint32<W>(writer: &mut W, value: i32) -> Result<usize>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    let mut buf = [0u8; MAX_VARINT_LEN32];
    let len = encode_varint32(value, &mut buf);
    writer.write_all(&buf[..len]).await?;
    Ok(len)
}

/// Encodes a 64-bit value and writes it to an async sink.
pub async fn write_varint64<W>(writer: &mut W, value: i64) -> Result<usize>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    let mut buf = [0u8; MAX_VARINT_LEN64];
    let len = encode_varint64(value, &mut buf);
    writer.write_all(&buf[..len]).await?;
    Ok(len)
}

async fn read_strict<R>(reader: &mut R, width: Width) -> Result<i64>
where
    R: AsyncRead + Unpin + ?Sized,
{
    let mut acc = Accumulator::new(width);
    loop {
        let byte = match reader.read_u8().await {
            Ok(byte) => byte,
            Err(err) => {
                trace!(bits = width.bits, consumed = acc.len(), error = %err, "async varint source failed");
                return Err(err.into());
            }
        };
        if !acc.push(byte) {
            return acc.finish();
        }
        if acc.is_full() {
            trace!(bits = width.bits, consumed = acc.len(), "varint exceeds byte budget");
            return Err(acc.overflow());
        }
    }
}
