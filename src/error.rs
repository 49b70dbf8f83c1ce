//! Error types and helpers.
use {core::str::Utf8Error, thiserror::Error};

#[derive(Error, Debug)]
pub enum Error {
    /// The type (or one of its nested field types) has no wire shape.
    ///
    /// This is a schema mistake, not a data condition: the declaration
    /// names a type outside the supported shape set (for example a
    /// platform-width integer), and no bytes are produced or consumed.
    #[error("Unsupported wire type: {0}")]
    UnsupportedType(&'static str),
    /// The input ended before the shape's required byte count was satisfied.
    #[error("Truncated input: needed {needed} bytes, {remaining} remaining")]
    Truncated { needed: usize, remaining: usize },
    /// A text or sequence is too long for its unsigned 4-byte length prefix.
    #[error("Length {0} exceeds the u32 wire prefix")]
    LengthOverflow(usize),
    /// Decoded text bytes were not valid UTF-8.
    #[error(transparent)]
    InvalidUtf8(#[from] Utf8Error),
}

pub type Result<T> = core::result::Result<T, Error>;

#[cold]
pub const fn unsupported_type(name: &'static str) -> Error {
    Error::UnsupportedType(name)
}

#[cold]
pub const fn truncated(needed: usize, remaining: usize) -> Error {
    Error::Truncated { needed, remaining }
}

#[cold]
pub const fn length_overflow(len: usize) -> Error {
    Error::LengthOverflow(len)
}
