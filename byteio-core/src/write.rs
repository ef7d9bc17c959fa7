use crate::Result;

/// Trait used to govern pushing bytes into a sink.
///
/// One call performs at most one underlying I/O attempt, so a successful
/// call may accept fewer bytes than were offered. A partial write is a normal
/// return, not an error; a count of `0` means the sink has stopped accepting
/// bytes altogether.
///
/// # Examples
///
/// ```rust
/// use byteio::Write;
///
/// fn send<W>(writer: &mut W) -> byteio::Result<()>
/// where
///     W: Write,
/// {
///     writer.write(b"hello")?;
///     writer.flush()
/// }
///
/// let mut sink = byteio::Cursor::new(Vec::new());
/// send(&mut sink)?;
/// assert_eq!(sink.as_ref(), b"hello");
/// # Ok::<_, byteio::Error>(())
/// ```
pub trait Write {
    /// Push bytes from `buf` into the sink, returning how many were
    /// accepted.
    ///
    /// Performs at most one underlying I/O attempt. Accepting fewer bytes
    /// than offered is not an error. Returns `Ok(0)` only when the sink can
    /// accept no more bytes.
    ///
    /// # Errors
    ///
    /// Any failure raised by the backend is propagated unmodified.
    fn write(&mut self, buf: &[u8]) -> Result<usize>;

    /// Push any bytes the sink has accepted but not yet committed through to
    /// their destination.
    ///
    /// For sinks without intermediate buffering this is a no-op.
    fn flush(&mut self) -> Result<()>;
}

impl<W> Write for &mut W
where
    W: Write + ?Sized,
{
    #[inline]
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        (**self).write(buf)
    }

    #[inline]
    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}

impl<W> Write for Box<W>
where
    W: Write + ?Sized,
{
    #[inline]
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        (**self).write(buf)
    }

    #[inline]
    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}
