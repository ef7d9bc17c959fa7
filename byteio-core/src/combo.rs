//! Capability combinations.
//!
//! Code that cannot be generic still needs to hold "some stream that can
//! both read and seek" behind a single reference. Because these traits are
//! implemented for every qualifying type through blanket impls, any stream
//! with the right capabilities can be passed where a combination trait
//! object is expected, without opting in.
//!
//! ```rust
//! use byteio::{ReadSeek, Seek as _, SeekFrom};
//!
//! fn rewind_and_read(stream: &mut dyn ReadSeek) -> byteio::Result<Vec<u8>> {
//!     stream.seek(SeekFrom::Start(0))?;
//!     let mut out = Vec::new();
//!     byteio::io::read_to_end(stream, &mut out)?;
//!     Ok(out)
//! }
//!
//! let mut stream = byteio::Cursor::new(&b"twice"[..]);
//! byteio::io::read_to_end(&mut stream, &mut Vec::new())?;
//!
//! assert_eq!(rewind_and_read(&mut stream)?, b"twice");
//! # Ok::<_, byteio::Error>(())
//! ```

use crate::{BufRead, Read, Seek, Write};

/// A stream that can both read and write.
pub trait ReadWrite: Read + Write {}

impl<T> ReadWrite for T where T: Read + Write + ?Sized {}

/// A stream that can read and reposition its cursor.
pub trait ReadSeek: Read + Seek {}

impl<T> ReadSeek for T where T: Read + Seek + ?Sized {}

/// A stream that can write and reposition its cursor.
pub trait WriteSeek: Write + Seek {}

impl<T> WriteSeek for T where T: Write + Seek + ?Sized {}

/// A stream that can read, write and reposition its cursor.
pub trait ReadWriteSeek: Read + Write + Seek {}

impl<T> ReadWriteSeek for T where T: Read + Write + Seek + ?Sized {}

/// A stream that can read through a buffer and write.
pub trait BufReadWrite: BufRead + Write {}

impl<T> BufReadWrite for T where T: BufRead + Write + ?Sized {}

/// A stream that can read through a buffer and reposition its cursor.
pub trait BufReadSeek: BufRead + Seek {}

impl<T> BufReadSeek for T where T: BufRead + Seek + ?Sized {}

/// A stream that can read through a buffer, write and reposition its cursor.
pub trait BufReadWriteSeek: BufRead + Write + Seek {}

impl<T> BufReadWriteSeek for T where T: BufRead + Write + Seek + ?Sized {}
