#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Varint encoding and lenient buffer decoding.
pub mod encoding;
/// Shared error and result types.
pub mod error;
/// Strict stream decoding and stream encoding.
pub mod io;

#[cfg(feature = "async")]
pub mod async_support;

pub use encoding::{
    EncodedVarint, MAX_VARINT_LEN32, MAX_VARINT_LEN64, append_varint32, append_varint64,
    decode_varint32, decode_varint64, encode_varint32, encode_varint64, encoded_len32,
    encoded_len64, to_varint32, to_varint64,
};
pub use error::{Error, Result};
pub use io::{
    VarintBuf, VarintBufMut, VarintReader, VarintWriter, read_varint32, read_varint64,
    write_varint32, write_varint64,
};
