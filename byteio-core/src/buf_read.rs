use crate::{Read, Result};

/// Trait used to govern buffered reading from a source.
///
/// A buffered reader owns a run of bytes that have been pulled from the
/// source but not yet handed to the caller. [fill][BufRead::fill] makes
/// bytes visible without giving them up, and [consume][BufRead::consume]
/// gives them up for good. Splitting the two lets callers peek at incoming
/// data, scan it for a delimiter, or hand a borrowed chunk to a sink and only
/// consume what the sink actually accepted.
///
/// The buffered front is always a contiguous, in-order prefix of the
/// remaining stream: filling never reorders bytes and consuming `n` bytes
/// leaves the following bytes exactly where the next [fill][BufRead::fill]
/// will observe them.
///
/// # Examples
///
/// ```rust
/// use byteio::BufRead;
///
/// let mut source = byteio::Cursor::new(&b"key=value"[..]);
///
/// // Peek without giving anything up.
/// let view = source.fill(4)?;
/// assert_eq!(&view[..4], b"key=");
///
/// // The same bytes are still there afterwards.
/// source.consume(4)?;
/// assert_eq!(source.fill(5)?, b"value");
/// # Ok::<_, byteio::Error>(())
/// ```
pub trait BufRead: Read {
    /// Make at least `want` bytes visible without consuming them, returning
    /// a view over everything currently buffered.
    ///
    /// The returned view may be longer than `want` if more data is already
    /// buffered, and shorter only if the source ended first. An empty view
    /// means the source is exhausted. Requesting no more than what a
    /// previous call returned performs no underlying I/O.
    ///
    /// # Errors
    ///
    /// Backend failures propagate unmodified. A request too large to be
    /// represented in a single allocation is
    /// [Error::BufferTooLarge][crate::Error::BufferTooLarge].
    fn fill(&mut self, want: usize) -> Result<&[u8]>;

    /// Discard `amount` bytes from the front of the buffer.
    ///
    /// `amount` must not exceed the number of currently buffered bytes,
    /// i.e. the length of the view the last [fill][BufRead::fill] returned.
    ///
    /// # Errors
    ///
    /// Consuming more than is buffered is a caller error and fails with
    /// [Error::Consume][crate::Error::Consume] without changing the stream.
    fn consume(&mut self, amount: usize) -> Result<()>;
}

impl<R> BufRead for &mut R
where
    R: BufRead + ?Sized,
{
    #[inline]
    fn fill(&mut self, want: usize) -> Result<&[u8]> {
        (**self).fill(want)
    }

    #[inline]
    fn consume(&mut self, amount: usize) -> Result<()> {
        (**self).consume(amount)
    }
}

impl<R> BufRead for Box<R>
where
    R: BufRead + ?Sized,
{
    #[inline]
    fn fill(&mut self, want: usize) -> Result<&[u8]> {
        (**self).fill(want)
    }

    #[inline]
    fn consume(&mut self, amount: usize) -> Result<()> {
        (**self).consume(amount)
    }
}
