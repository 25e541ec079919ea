use std::io;

/// Convenient alias for results produced by this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that can be produced while reading or writing varints.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Wrapper around standard I/O errors. A source that ends in the middle of
    /// a value surfaces here with [`io::ErrorKind::UnexpectedEof`].
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    /// The value did not terminate within the byte budget of its width, or
    /// its magnitude does not fit the width.
    #[error("varint overflows {bits}-bit integer (max {max_len} bytes)")]
    Overflow {
        /// Width of the integer being decoded.
        bits: u32,
        /// Byte budget of that width.
        max_len: usize,
    },
}

impl Error {
    /// Returns `true` if the source ended before a value terminated.
    pub fn is_eof(&self) -> bool {
        matches!(self, Error::Io(err) if err.kind() == io::ErrorKind::UnexpectedEof)
    }

    /// Returns `true` for [`Error::Overflow`].
    pub fn is_overflow(&self) -> bool {
        matches!(self, Error::Overflow { .. })
    }
}
