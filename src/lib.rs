//! binwire is a schema-driven binary codec for the big-endian, length-prefixed
//! wire layout used by text-terminal and remote-shell protocols.
//!
//! Declare a protocol message once as an ordinary struct, wire it up with
//! [`wire_record!`], and [`marshal`]/[`unmarshal`] handle the byte layout:
//! fixed-width integers big-endian, strings and variable-length sequences
//! behind an unsigned 4-byte big-endian length prefix, fixed arrays and
//! record fields laid out back to back with no metadata at all.
//!
//! # Quickstart
//!
//! ```
//! use binwire::{marshal, unmarshal, wire_record};
//!
//! #[derive(Debug, Default, PartialEq, Eq)]
//! struct PtyRequest {
//!     term: String,
//!     width: u32,
//!     height: u32,
//!     pwidth: u32,
//!     pheight: u32,
//!     modes: Vec<u8>,
//! }
//!
//! wire_record! {
//!     PtyRequest {
//!         term: String,
//!         width: u32,
//!         height: u32,
//!         pwidth: u32,
//!         pheight: u32,
//!         modes: Vec<u8>,
//!     }
//! }
//!
//! let req = PtyRequest {
//!     term: "xterm".into(),
//!     width: 80,
//!     height: 24,
//!     ..Default::default()
//! };
//! let bytes = marshal(&req).unwrap();
//! assert_eq!(&bytes[..9], &[0, 0, 0, 5, b'x', b't', b'e', b'r', b'm']);
//!
//! let mut decoded = PtyRequest::default();
//! unmarshal(&bytes, &mut decoded).unwrap();
//! assert_eq!(decoded, req);
//! ```
//!
//! # Wire contract
//!
//! There are no type tags, version numbers, or field names on the wire.
//! Encoder and decoder must agree out-of-band on the exact record type,
//! field-for-field in declaration order; this is not a schema-evolution
//! format. Trailing bytes after a full decode are deliberately ignored
//! (lenient framing), since these protocols routinely hand over buffers
//! larger than one record.
//!
//! # Supported shapes
//!
//! Fixed-width integers (`u8`–`u64`, `i8`–`i64`), `bool`, `String`,
//! fixed arrays `[T; N]`, variable sequences `Vec<T>`, and records built
//! from those. Platform-width integers (`usize`/`isize`) are rejected with
//! [`Error::UnsupportedType`]; anything else outside the shape set does
//! not implement [`WireSchema`] and fails at compile time.

pub mod error;
pub use error::{Error, Result};
pub mod io;
pub mod len;
mod schema;
pub use schema::*;
