//! The shape model and the schema trait driving every encode/decode walk.
//!
//! # Example
//!
//! ```
//! # use binwire::{marshal, unmarshal, wire_record};
//! #[derive(Debug, Default, PartialEq, Eq)]
//! struct WindowChange {
//!     width: u32,
//!     height: u32,
//! }
//!
//! wire_record! {
//!     WindowChange {
//!         width: u32,
//!         height: u32,
//!     }
//! }
//!
//! let change = WindowChange { width: 80, height: 24 };
//! let bytes = marshal(&change).unwrap();
//! assert_eq!(bytes, [0, 0, 0, 80, 0, 0, 0, 24]);
//!
//! let mut decoded = WindowChange::default();
//! unmarshal(&bytes, &mut decoded).unwrap();
//! assert_eq!(decoded, change);
//! ```
use crate::{
    error::Result,
    io::{ReadCursor, WriteCursor},
};

mod impls;

/// How a type is laid out on the wire.
///
/// A `Shape` is a pure function of the type: it never depends on a
/// particular value's contents, and [`FixedArray`](Shape::FixedArray)
/// lengths come from the type declaration, not the instance. Shapes are
/// plain metadata, recomputed on each resolution and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// Fixed-width integer: `width` bytes (1, 2, 4, or 8), big-endian,
    /// two's-complement when `signed`.
    Scalar { width: usize, signed: bool },
    /// Single-byte flag, `1` for true, `0` for false.
    Boolean,
    /// Character sequence of unknown byte length, carried with a 4-byte
    /// big-endian byte-length prefix.
    Text,
    /// Homogeneous sequence whose element count is part of the type.
    /// Carries no count on the wire.
    FixedArray { len: usize, element: Box<Shape> },
    /// Homogeneous sequence whose element count is only known from the
    /// data, carried as a 4-byte big-endian count prefix.
    Sequence(Box<Shape>),
    /// Composite with named fields in declaration order. Carries no
    /// wire-level metadata: no names, no tags, no count.
    Record(Vec<(&'static str, Shape)>),
}

/// Types with a wire shape.
///
/// `shape` is the resolver, `write` the encoder, `read` the decoder; the
/// three walk the same recursive structure and consume/produce the same
/// byte counts in the same order.
///
/// # Wire contract
///
/// The format carries no type information. The decoding side must use the
/// exact type the encoding side used, field-for-field and in declaration
/// order, or the result is undefined. This agreement is the caller's
/// out-of-band precondition.
pub trait WireSchema: Sized {
    /// Resolve the wire shape of `Self`.
    ///
    /// Fails with [`Error::UnsupportedType`](crate::Error::UnsupportedType)
    /// if `Self` or any nested field type has no wire shape; no partial
    /// shape is produced.
    fn shape() -> Result<Shape>;

    /// Append `src`'s encoding to `writer`.
    fn write(writer: &mut WriteCursor, src: &Self) -> Result<()>;

    /// Decode a value from `reader`, advancing it by exactly the byte
    /// count the shape implies.
    fn read(reader: &mut ReadCursor<'_>) -> Result<Self>;
}

/// Encode `value` into a fresh byte buffer.
///
/// The shape is resolved before any byte is written, so an unsupported
/// type anywhere in `T` fails with no output. On success the returned
/// buffer is always a complete encoding, never a partial one.
pub fn marshal<T: WireSchema>(value: &T) -> Result<Vec<u8>> {
    T::shape()?;
    let mut writer = WriteCursor::new();
    T::write(&mut writer, value)?;
    Ok(writer.into_bytes())
}

/// Decode `bytes` into `dst`, replacing it wholesale on success.
///
/// On failure `dst` is left untouched. Trailing bytes after a full decode
/// are ignored: framing is deliberately lenient, matching protocols that
/// hand over a larger buffer than one record occupies. Callers that need
/// strict framing can compare the consumed length themselves via
/// [`ReadCursor`] and [`WireSchema::read`].
pub fn unmarshal<T: WireSchema>(bytes: &[u8], dst: &mut T) -> Result<()> {
    T::shape()?;
    let mut reader = ReadCursor::new(bytes);
    *dst = T::read(&mut reader)?;
    Ok(())
}

/// Implement [`WireSchema`] for a record (struct) type.
///
/// Fields are listed in declaration order; that order is the wire order.
/// Nested record types (including structs standing in for what would be
/// inline/anonymous records) recurse with no extra wrapping on the wire.
///
/// ```
/// # use binwire::wire_record;
/// #[derive(Default)]
/// struct ExitStatus {
///     code: u32,
///     core_dumped: bool,
/// }
///
/// wire_record! {
///     ExitStatus {
///         code: u32,
///         core_dumped: bool,
///     }
/// }
/// ```
#[macro_export]
macro_rules! wire_record {
    ($target:ty { $($field:ident : $schema:ty),+ $(,)? }) => {
        impl $crate::WireSchema for $target {
            fn shape() -> $crate::Result<$crate::Shape> {
                Ok($crate::Shape::Record(vec![
                    $((stringify!($field), <$schema as $crate::WireSchema>::shape()?),)+
                ]))
            }

            fn write(
                writer: &mut $crate::io::WriteCursor,
                src: &Self,
            ) -> $crate::Result<()> {
                $(<$schema as $crate::WireSchema>::write(writer, &src.$field)?;)+
                Ok(())
            }

            fn read(reader: &mut $crate::io::ReadCursor<'_>) -> $crate::Result<Self> {
                Ok(Self {
                    $($field: <$schema as $crate::WireSchema>::read(reader)?,)+
                })
            }
        }
    };
}
