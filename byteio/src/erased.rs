//! Non-owning, type-erased stream handles.
//!
//! Generic code takes capability bounds and monomorphizes per backend.
//! Code that cannot be generic — stable interfaces, object fields, plugin
//! boundaries — instead holds one of the handles defined here: a mutable
//! reference to a trait object. A handle never owns the stream it refers
//! to, forwards every call to it unchanged, and cannot outlive it; the
//! borrow checker enforces what would otherwise be a documented
//! precondition.
//!
//! Handles exist for each single capability and for the combinations from
//! [byteio-core], so a multi-capability stream can still sit behind one
//! reference. To hand a handle to a callee while keeping your own,
//! reborrow it (`&mut *handle`).
//!
//! # Examples
//!
//! ```rust
//! use byteio::erased::DynReadSeek;
//! use byteio::{Seek as _, SeekFrom};
//!
//! // Not generic: callable with any reading, seeking stream.
//! fn payload_len(mut stream: DynReadSeek<'_>) -> byteio::Result<u64> {
//!     stream.seek(SeekFrom::End(0))
//! }
//!
//! let mut file = byteio::Cursor::new(&b"sixteen bytes..."[..]);
//! assert_eq!(payload_len(&mut file)?, 16);
//! # Ok::<_, byteio::Error>(())
//! ```
//!
//! [byteio-core]: https://docs.rs/byteio-core

use crate::{
    BufRead, BufReadSeek, BufReadWrite, BufReadWriteSeek, Read, ReadSeek, ReadWrite,
    ReadWriteSeek, Seek, Write, WriteSeek,
};

/// A handle to some stream that reads.
pub type DynRead<'a> = &'a mut dyn Read;

/// A handle to some stream that reads through a buffer.
pub type DynBufRead<'a> = &'a mut dyn BufRead;

/// A handle to some stream that writes.
pub type DynWrite<'a> = &'a mut dyn Write;

/// A handle to some stream that seeks.
pub type DynSeek<'a> = &'a mut dyn Seek;

/// A handle to some stream that reads and writes.
pub type DynReadWrite<'a> = &'a mut dyn ReadWrite;

/// A handle to some stream that reads and seeks.
pub type DynReadSeek<'a> = &'a mut dyn ReadSeek;

/// A handle to some stream that writes and seeks.
pub type DynWriteSeek<'a> = &'a mut dyn WriteSeek;

/// A handle to some stream that reads, writes and seeks.
pub type DynReadWriteSeek<'a> = &'a mut dyn ReadWriteSeek;

/// A handle to some stream that reads through a buffer and writes.
pub type DynBufReadWrite<'a> = &'a mut dyn BufReadWrite;

/// A handle to some stream that reads through a buffer and seeks.
pub type DynBufReadSeek<'a> = &'a mut dyn BufReadSeek;

/// A handle to some stream that reads through a buffer, writes and seeks.
pub type DynBufReadWriteSeek<'a> = &'a mut dyn BufReadWriteSeek;
