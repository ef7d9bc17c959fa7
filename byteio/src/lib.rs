//! A crate for working with byte streams in Rust.
//!
//! This is made up of two parts, each can be used independently of the
//! other:
//!
//! * [byteio-core] - The core crate, which defines the capability traits
//!   that allow interacting with byte streams independently of what backs
//!   them.
//! * [byteio] - This crate, which provides buffered engines, in-memory and
//!   file backends, generic algorithms and serialization helpers built on
//!   top of the traits in [byteio-core].
//!
//! A stream is described by the capabilities it implements: [Read] to pull
//! bytes, [BufRead] to peek and consume through a buffer, [Write] to push
//! bytes, and [Seek] to reposition. Algorithms ask for exactly the
//! capabilities they need, so one implementation serves every conforming
//! backend.
//!
//! <br>
//!
//! ## Backends
//!
//! * [Cursor] wraps any in-memory byte container. Over `Vec<u8>` it grows
//!   when written past the end; over a borrowed slice it clips instead.
//! * [fs::File] owns an operating system file handle and surfaces it
//!   through the same capabilities.
//!
//! Anything else qualifies by implementing the traits; nothing here needs
//! to be told about new backends.
//!
//! <br>
//!
//! ## Buffered engines
//!
//! [io::BufReader] amortizes small reads by pulling ahead into a growable
//! buffer with a peek/consume protocol, and [io::BufWriter] batches small
//! writes into a fixed-size buffer that drains on overflow. Both wrap any
//! stream with the matching capability and propagate every backend error
//! unchanged.
//!
//! <br>
//!
//! ## Examples
//!
//! ```rust
//! use byteio::codec::{ReadBytesExt, WriteBytesExt};
//! use byteio::io::BufReader;
//! use byteio::{Cursor, SeekFrom};
//! use byteio::Seek as _;
//!
//! let mut stream = Cursor::new(Vec::new());
//!
//! stream.write_u32_le(0x2a)?;
//! stream.write_zigzag(-1234)?;
//!
//! stream.seek(SeekFrom::Start(0))?;
//!
//! let mut reader = BufReader::new(stream);
//! assert_eq!(reader.read_u32_le()?, 0x2a);
//! assert_eq!(reader.read_zigzag()?, -1234);
//! # Ok::<_, byteio::Error>(())
//! ```
//!
//! [byteio-core]: https://docs.rs/byteio-core
//! [byteio]: https://docs.rs/byteio

#![deny(missing_docs, rustdoc::broken_intra_doc_links)]
#![allow(clippy::should_implement_trait)]

pub mod codec;
mod cursor;
pub mod erased;
pub mod fs;
pub mod io;
pub mod status;

#[cfg(test)]
mod tests;

pub use self::cursor::Cursor;
pub use byteio_core::*;
