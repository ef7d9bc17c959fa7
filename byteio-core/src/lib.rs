//! The core [byteio] traits.
//!
//! If you want to build a component that is completely agnostic to what kind
//! of stream it reads from or writes to, you can add a dependency directly to
//! these traits instead of depending on all of the [byteio] crate.
//!
//! A capability is an ordinary trait: a type is a reader because it
//! implements [Read], a sink because it implements [Write], and so on. A
//! single type may implement any combination of them, and generic algorithms
//! ask for exactly the capabilities they need.
//!
//! [byteio]: https://docs.rs/byteio

#![deny(missing_docs, rustdoc::broken_intra_doc_links)]

mod error;
pub use self::error::{Error, Result};

mod read;
pub use self::read::Read;

mod buf_read;
pub use self::buf_read::BufRead;

mod write;
pub use self::write::Write;

mod seek;
pub use self::seek::{Seek, SeekFrom};

mod combo;
pub use self::combo::{
    BufReadSeek, BufReadWrite, BufReadWriteSeek, ReadSeek, ReadWrite, ReadWriteSeek, WriteSeek,
};
