use crate::Result;

/// Trait used to govern pulling bytes out of a source.
///
/// This is the minimal input capability. One call performs at most one
/// underlying I/O attempt, so a successful call may transfer fewer bytes than
/// the destination has room for. A count of `0` means the source is
/// exhausted; it is a normal return, not an error.
///
/// Callers that need an exact number of bytes should loop, or use one of the
/// retrying helpers in the [byteio] crate which call this primitive until the
/// transfer is complete or the source ends.
///
/// [byteio]: https://docs.rs/byteio
///
/// # Examples
///
/// ```rust
/// use byteio::Read;
///
/// fn first_two<R>(reader: &mut R) -> byteio::Result<[u8; 2]>
/// where
///     R: Read,
/// {
///     let mut out = [0, 0];
///     reader.read(&mut out)?;
///     Ok(out)
/// }
///
/// let mut source = byteio::Cursor::new(&[1u8, 2, 3, 4][..]);
/// assert_eq!(first_two(&mut source)?, [1, 2]);
/// # Ok::<_, byteio::Error>(())
/// ```
pub trait Read {
    /// Pull bytes from the source into `buf`, returning how many were read.
    ///
    /// Performs at most one underlying I/O attempt. Returns `Ok(0)` only when
    /// the source has no more bytes to offer.
    ///
    /// # Errors
    ///
    /// Any failure raised by the backend is propagated unmodified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use byteio::Read;
    ///
    /// let mut source = byteio::Cursor::new(&[1u8, 2, 3][..]);
    /// let mut buf = [0; 8];
    ///
    /// assert_eq!(source.read(&mut buf)?, 3);
    /// assert_eq!(source.read(&mut buf)?, 0);
    /// # Ok::<_, byteio::Error>(())
    /// ```
    fn read(&mut self, buf: &mut [u8]) -> Result<usize>;
}

impl<R> Read for &mut R
where
    R: Read + ?Sized,
{
    #[inline]
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        (**self).read(buf)
    }
}

impl<R> Read for Box<R>
where
    R: Read + ?Sized,
{
    #[inline]
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        (**self).read(buf)
    }
}
