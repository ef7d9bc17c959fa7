//! Buffered reading and writing over any stream.
//!
//! The engines here wrap a stream with the minimal capability and add
//! buffering on top: [BufReader] turns any [Read][crate::Read] into a
//! [BufRead][crate::BufRead] with a growable look-ahead buffer, and
//! [BufWriter] batches writes into a fixed-size buffer that drains on
//! overflow.
//!
//! The free functions are the generic algorithms: they are written once
//! against the capability traits and work with every backend, buffered or
//! not.

/// Default capacity used by the buffered engines, in bytes.
pub const DEFAULT_BUF_LEN: usize = 8192;

/// The largest length a single [fill][crate::BufRead::fill] request may
/// have.
///
/// Requests past this limit cannot be represented in a single allocation
/// and fail with [Error::BufferTooLarge][crate::Error::BufferTooLarge].
pub const MAX_BUFFER_LEN: usize = isize::MAX as usize;

mod utils;
pub use self::utils::{copy, read_full, read_to_end, read_until, write_full};

mod read;
pub use self::read::BufReader;

mod write;
pub use self::write::BufWriter;
