use std::fmt;
use std::io as std_io;

use crate::{BufRead, Read, Result, Seek, SeekFrom, Write};

/// Wrap a writer in a fixed-capacity accumulation buffer.
///
/// Small writes land in the internal buffer and return immediately; the
/// buffer drains into the wrapped writer when it would overflow, on an
/// explicit [flush][Write::flush], and on teardown. A single write larger
/// than the whole buffer bypasses it and goes straight to the wrapped
/// writer, since copying it through the buffer would gain nothing.
///
/// The engine owns the wrapped writer exclusively. Dropping the engine
/// drains the buffer on a best-effort basis; failures at that point are
/// logged and swallowed, so call [flush][Write::flush] explicitly where
/// delivery matters.
///
/// If the wrapped stream can also read or seek, those capabilities pass
/// through. Reads are not buffered by this engine. Seeking drains the
/// buffer first, because buffered bytes belong at the offset that was
/// current when they were written.
///
/// # Examples
///
/// ```rust
/// use byteio::io::BufWriter;
/// use byteio::{Cursor, Write as _};
///
/// let mut sink = Cursor::new(Vec::new());
///
/// let mut writer = BufWriter::with_capacity(4, &mut sink);
/// writer.write(b"ab")?;
///
/// // Still buffered, nothing has reached the sink.
/// assert_eq!(writer.buffered(), b"ab");
///
/// writer.write(b"cde")?;
/// writer.flush()?;
/// drop(writer);
///
/// assert_eq!(sink.as_ref(), b"abcde");
/// # Ok::<_, byteio::Error>(())
/// ```
pub struct BufWriter<W>
where
    W: Write,
{
    writer: W,
    /// Bytes accepted but not yet written through. Never longer than
    /// `capacity`.
    buf: Vec<u8>,
    capacity: usize,
}

impl<W> BufWriter<W>
where
    W: Write,
{
    /// Construct a new buffered writer with the default capacity of
    /// [DEFAULT_BUF_LEN][crate::io::DEFAULT_BUF_LEN] bytes.
    pub fn new(writer: W) -> Self {
        Self::with_capacity(crate::io::DEFAULT_BUF_LEN, writer)
    }

    /// Construct a new buffered writer with the given capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use byteio::io::BufWriter;
    /// use byteio::Cursor;
    ///
    /// let writer = BufWriter::with_capacity(64, Cursor::new(Vec::new()));
    /// assert_eq!(writer.capacity(), 64);
    /// ```
    pub fn with_capacity(capacity: usize, writer: W) -> Self {
        Self {
            writer,
            buf: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// The bytes accepted by [write][Write::write] that have not yet
    /// reached the wrapped writer.
    #[inline]
    pub fn buffered(&self) -> &[u8] {
        &self.buf
    }

    /// The capacity of the accumulation buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Access the underlying writer.
    #[inline]
    pub fn as_ref(&self) -> &W {
        &self.writer
    }

    /// Access the underlying writer mutably.
    ///
    /// Writing to it directly bypasses any bytes still buffered here, so
    /// the sink will observe them out of order unless the engine is flushed
    /// first.
    #[inline]
    pub fn as_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Drain the accumulation buffer into the wrapped writer.
    ///
    /// Bytes the writer accepts are removed from the buffer even if the
    /// drain stops early, so nothing is ever written twice and nothing is
    /// lost.
    fn drain(&mut self) -> Result<()> {
        let n = crate::io::write_full(&mut self.writer, &self.buf)?;
        let len = self.buf.len();
        self.buf.drain(..n);

        if n < len {
            return Err(std_io::Error::new(
                std_io::ErrorKind::WriteZero,
                "sink stopped accepting bytes with data still buffered",
            )
            .into());
        }

        Ok(())
    }
}

impl<W> Write for BufWriter<W>
where
    W: Write,
{
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        if self.buf.len() + buf.len() <= self.capacity {
            self.buf.extend_from_slice(buf);
            return Ok(buf.len());
        }

        self.drain()?;

        if buf.len() <= self.capacity {
            self.buf.extend_from_slice(buf);
            Ok(buf.len())
        } else {
            crate::io::write_full(&mut self.writer, buf)
        }
    }

    fn flush(&mut self) -> Result<()> {
        self.drain()?;
        self.writer.flush()
    }
}

impl<W> Read for BufWriter<W>
where
    W: Write + Read,
{
    #[inline]
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        self.writer.read(buf)
    }
}

impl<W> BufRead for BufWriter<W>
where
    W: Write + BufRead,
{
    #[inline]
    fn fill(&mut self, want: usize) -> Result<&[u8]> {
        self.writer.fill(want)
    }

    #[inline]
    fn consume(&mut self, amount: usize) -> Result<()> {
        self.writer.consume(amount)
    }
}

impl<W> Seek for BufWriter<W>
where
    W: Write + Seek,
{
    fn seek(&mut self, pos: SeekFrom) -> Result<u64> {
        // Buffered bytes belong at the pre-seek offset.
        self.drain()?;
        self.writer.seek(pos)
    }
}

impl<W> Drop for BufWriter<W>
where
    W: Write,
{
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }

        if let Err(error) = self.drain() {
            tracing::warn!("buffered bytes lost in teardown flush: {}", error);
        }
    }
}

impl<W> fmt::Debug for BufWriter<W>
where
    W: Write + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufWriter")
            .field("writer", &self.writer)
            .field("buffered", &self.buf.len())
            .field("capacity", &self.capacity)
            .finish()
    }
}
