use std::fmt;

use crate::io::MAX_BUFFER_LEN;
use crate::{BufRead, Error, Read, Result};

/// Wrap a reader in a growable look-ahead buffer, making it a
/// [BufRead].
///
/// The engine owns the wrapped reader exclusively. Bytes pulled from the
/// reader sit at the front of the internal buffer until the caller consumes
/// them, so repeated peeks at the same data cost no I/O, and a
/// [fill][BufRead::fill] request that is already satisfied returns without
/// touching the reader at all.
///
/// The buffer grows on demand. When a request exceeds the current
/// allocation, capacity increases by at least half again, so the cost of
/// growth stays amortized constant per byte no matter how request sizes are
/// sequenced.
///
/// Cloning duplicates the wrapped reader along with any buffered bytes;
/// two engines never share a buffer.
///
/// # Examples
///
/// ```rust
/// use byteio::io::BufReader;
/// use byteio::{BufRead, Cursor};
///
/// let mut reader = BufReader::new(Cursor::new(&b"one two"[..]));
///
/// // Look at the first word without consuming it.
/// assert_eq!(reader.fill(3)?, b"one");
/// assert_eq!(reader.fill(3)?, b"one");
///
/// // Consume it along with the separator.
/// assert_eq!(reader.fill(7)?, b"one two");
/// reader.consume(4)?;
/// assert_eq!(reader.fill(3)?, b"two");
/// # Ok::<_, byteio::Error>(())
/// ```
#[derive(Clone)]
pub struct BufReader<R> {
    reader: R,
    /// Backing allocation. Valid, unconsumed bytes are `buf[..len]`.
    buf: Vec<u8>,
    len: usize,
}

impl<R> BufReader<R> {
    /// Construct a new buffered reader with the default capacity of
    /// [DEFAULT_BUF_LEN][crate::io::DEFAULT_BUF_LEN] bytes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use byteio::io::BufReader;
    /// use byteio::Cursor;
    ///
    /// let reader = BufReader::new(Cursor::new(&b"data"[..]));
    /// assert!(reader.buffered().is_empty());
    /// ```
    pub fn new(reader: R) -> Self {
        Self::with_capacity(crate::io::DEFAULT_BUF_LEN, reader)
    }

    /// Construct a new buffered reader with the given initial capacity.
    ///
    /// The capacity is a hint; the buffer still grows if a
    /// [fill][BufRead::fill] request exceeds it.
    pub fn with_capacity(capacity: usize, reader: R) -> Self {
        Self {
            reader,
            buf: vec![0; capacity],
            len: 0,
        }
    }

    /// The bytes that have been pulled from the reader but not yet
    /// consumed.
    ///
    /// Equivalent to the view the last [fill][BufRead::fill] returned,
    /// without performing any I/O.
    #[inline]
    pub fn buffered(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// The current capacity of the internal buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Access the underlying reader.
    #[inline]
    pub fn as_ref(&self) -> &R {
        &self.reader
    }

    /// Access the underlying reader mutably.
    ///
    /// Reading from it directly leaves the bytes already buffered here in
    /// place, so the logical stream position observed through this engine
    /// does not move.
    #[inline]
    pub fn as_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    /// Convert into the underlying reader, discarding any buffered bytes.
    #[inline]
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R> BufReader<R>
where
    R: Read,
{
    /// Grow the backing allocation so that `want` bytes fit.
    fn grow(&mut self, want: usize) -> Result<()> {
        if want > MAX_BUFFER_LEN {
            return Err(Error::BufferTooLarge { requested: want });
        }

        if want > self.buf.len() {
            let grown = self.buf.len().saturating_add(self.buf.len() / 2);
            self.buf.resize(usize::max(want, grown), 0);
        }

        Ok(())
    }
}

impl<R> Read for BufReader<R>
where
    R: Read,
{
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let view = self.fill(buf.len())?;
        let n = usize::min(view.len(), buf.len());
        buf[..n].copy_from_slice(&view[..n]);
        self.consume(n)?;
        Ok(n)
    }
}

impl<R> BufRead for BufReader<R>
where
    R: Read,
{
    fn fill(&mut self, want: usize) -> Result<&[u8]> {
        if want <= self.len {
            return Ok(&self.buf[..self.len]);
        }

        self.grow(want)?;

        // One attempt for the shortfall. Anything short of `want` after
        // this means the reader had nothing more to offer right now.
        let n = self.reader.read(&mut self.buf[self.len..want])?;
        self.len += n;
        Ok(&self.buf[..self.len])
    }

    fn consume(&mut self, amount: usize) -> Result<()> {
        if amount > self.len {
            return Err(Error::Consume {
                requested: amount,
                buffered: self.len,
            });
        }

        self.buf.copy_within(amount..self.len, 0);
        self.len -= amount;
        Ok(())
    }
}

impl<R> fmt::Debug for BufReader<R>
where
    R: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufReader")
            .field("reader", &self.reader)
            .field("buffered", &self.len)
            .field("capacity", &self.buf.len())
            .finish()
    }
}
