use std::io;
use thiserror::Error;

/// Errors that can be raised by a stream operation.
///
/// End-of-stream is deliberately absent. A source that runs out of bytes
/// reports it through a `0` count or a short view, and callers are expected
/// to check counts. The variants here are conditions that cannot be expressed
/// through a count: backend failures, caller protocol violations and decode
/// failures.
#[derive(Debug, Error)]
pub enum Error {
    /// An error raised by the underlying backend, such as a failed file
    /// operation. The original diagnostic is preserved as the error source.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    /// More bytes were consumed than were buffered. This is a caller error,
    /// not a condition that can be retried.
    #[error("consumed {requested} bytes but only {buffered} are buffered")]
    Consume {
        /// Number of bytes the caller tried to consume.
        requested: usize,
        /// Number of bytes that were actually buffered.
        buffered: usize,
    },
    /// A seek resolved to a position before the start of the stream.
    #[error("seek to negative position {position}")]
    NegativeSeek {
        /// The out-of-range position the seek resolved to.
        position: i64,
    },
    /// A buffer request too large to be represented in a single allocation.
    #[error("buffer request of {requested} bytes is too large")]
    BufferTooLarge {
        /// Number of bytes requested.
        requested: usize,
    },
    /// The stream ended before a fixed-size transfer could complete.
    ///
    /// Plain short reads and writes are not errors; this is raised only by
    /// operations such as decoding a fixed-width integer, where a partial
    /// result has no meaningful representation.
    #[error("stream ended before {required} bytes could be transferred")]
    End {
        /// Number of bytes the operation required.
        required: usize,
    },
    /// A variable-length integer ran past its maximum encoded length.
    #[error("varint exceeds {limit} bytes")]
    Varint {
        /// Maximum number of encoded bytes permitted.
        limit: usize,
    },
}

/// Helper result wrapper.
pub type Result<T, E = Error> = ::std::result::Result<T, E>;
