//! [`WireSchema`] implementations for the supported shape kinds.
//!
//! Types outside the shape set (floats, maps, references, functions)
//! simply do not implement the trait, so using them in a schema is a
//! compile error. The exception is `usize`/`isize`: those exist as
//! implementations that always fail, because a platform-dependent width
//! can never be laid out on the wire and the mistake deserves a named
//! error rather than an opaque missing-trait diagnostic.
use {
    super::{Shape, WireSchema},
    crate::{
        error::{unsupported_type, Result},
        io::{ReadCursor, WriteCursor},
        len::{decode_len, encode_len},
    },
    core::str,
};

macro_rules! impl_scalar {
    ($($type:ty => $signed:expr),+ $(,)?) => {
        $(
            impl WireSchema for $type {
                #[inline]
                fn shape() -> Result<Shape> {
                    Ok(Shape::Scalar {
                        width: size_of::<$type>(),
                        signed: $signed,
                    })
                }

                #[inline]
                fn write(writer: &mut WriteCursor, src: &Self) -> Result<()> {
                    writer.write(&src.to_be_bytes());
                    Ok(())
                }

                #[inline]
                fn read(reader: &mut ReadCursor<'_>) -> Result<Self> {
                    Ok(<$type>::from_be_bytes(reader.take_array()?))
                }
            }
        )+
    };
}

impl_scalar! {
    u8 => false,
    u16 => false,
    u32 => false,
    u64 => false,
    i8 => true,
    i16 => true,
    i32 => true,
    i64 => true,
}

macro_rules! impl_unsupported {
    ($($type:ty),+ $(,)?) => {
        $(
            impl WireSchema for $type {
                fn shape() -> Result<Shape> {
                    Err(unsupported_type(stringify!($type)))
                }

                fn write(_writer: &mut WriteCursor, _src: &Self) -> Result<()> {
                    Err(unsupported_type(stringify!($type)))
                }

                fn read(_reader: &mut ReadCursor<'_>) -> Result<Self> {
                    Err(unsupported_type(stringify!($type)))
                }
            }
        )+
    };
}

// Every scalar on the wire must declare one of the four fixed widths.
impl_unsupported!(usize, isize);

impl WireSchema for bool {
    #[inline]
    fn shape() -> Result<Shape> {
        Ok(Shape::Boolean)
    }

    #[inline]
    fn write(writer: &mut WriteCursor, src: &Self) -> Result<()> {
        writer.write_byte(*src as u8);
        Ok(())
    }

    #[inline]
    fn read(reader: &mut ReadCursor<'_>) -> Result<Self> {
        Ok(reader.take_byte()? != 0)
    }
}

impl WireSchema for String {
    #[inline]
    fn shape() -> Result<Shape> {
        Ok(Shape::Text)
    }

    #[inline]
    fn write(writer: &mut WriteCursor, src: &Self) -> Result<()> {
        encode_len(writer, src.len())?;
        writer.write(src.as_bytes());
        Ok(())
    }

    #[inline]
    fn read(reader: &mut ReadCursor<'_>) -> Result<Self> {
        let len = decode_len(reader)?;
        let bytes = reader.take(len)?;
        Ok(str::from_utf8(bytes)?.to_owned())
    }
}

impl<T: WireSchema, const N: usize> WireSchema for [T; N] {
    fn shape() -> Result<Shape> {
        Ok(Shape::FixedArray {
            len: N,
            element: Box::new(T::shape()?),
        })
    }

    fn write(writer: &mut WriteCursor, src: &Self) -> Result<()> {
        // No count prefix: the length is part of the type.
        for item in src {
            T::write(writer, item)?;
        }
        Ok(())
    }

    fn read(reader: &mut ReadCursor<'_>) -> Result<Self> {
        let mut elems = Vec::with_capacity(N);
        for _ in 0..N {
            elems.push(T::read(reader)?);
        }
        match elems.try_into() {
            Ok(array) => Ok(array),
            // The loop above pushed exactly N elements.
            Err(_) => unreachable!(),
        }
    }
}

impl<T: WireSchema> WireSchema for Vec<T> {
    fn shape() -> Result<Shape> {
        Ok(Shape::Sequence(Box::new(T::shape()?)))
    }

    fn write(writer: &mut WriteCursor, src: &Self) -> Result<()> {
        encode_len(writer, src.len())?;
        for item in src {
            T::write(writer, item)?;
        }
        Ok(())
    }

    fn read(reader: &mut ReadCursor<'_>) -> Result<Self> {
        let count = decode_len(reader)?;
        // Every shape consumes at least one byte, so a count prefix larger
        // than the remaining input can never decode; cap the preallocation
        // accordingly instead of trusting hostile counts.
        let mut elems = Vec::with_capacity(count.min(reader.remaining()));
        for _ in 0..count {
            elems.push(T::read(reader)?);
        }
        Ok(elems)
    }
}
