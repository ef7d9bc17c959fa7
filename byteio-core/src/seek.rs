use crate::Result;

/// A position to seek to, relative to one of the three reference points of a
/// stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekFrom {
    /// Offset from the start of the stream.
    Start(u64),
    /// Signed offset from the current position.
    Current(i64),
    /// Signed offset from the end of the stream.
    End(i64),
}

/// Trait used to govern repositioning a stream's cursor.
///
/// # Examples
///
/// ```rust
/// use byteio::{Read, Seek, SeekFrom};
///
/// let mut stream = byteio::Cursor::new(&b"0123456789"[..]);
///
/// assert_eq!(stream.seek(SeekFrom::End(-2))?, 8);
///
/// let mut tail = [0; 2];
/// stream.read(&mut tail)?;
/// assert_eq!(&tail, b"89");
/// # Ok::<_, byteio::Error>(())
/// ```
pub trait Seek {
    /// Move the cursor to the given position, returning the new absolute
    /// position from the start of the stream.
    ///
    /// Seeking past the current end is permitted; what that means is up to
    /// the backend (a fixed view will simply have nothing to read there).
    ///
    /// # Errors
    ///
    /// A position resolving before the start of the stream fails with
    /// [Error::NegativeSeek][crate::Error::NegativeSeek] and leaves the
    /// cursor where it was.
    fn seek(&mut self, pos: SeekFrom) -> Result<u64>;
}

impl<S> Seek for &mut S
where
    S: Seek + ?Sized,
{
    #[inline]
    fn seek(&mut self, pos: SeekFrom) -> Result<u64> {
        (**self).seek(pos)
    }
}

impl<S> Seek for Box<S>
where
    S: Seek + ?Sized,
{
    #[inline]
    fn seek(&mut self, pos: SeekFrom) -> Result<u64> {
        (**self).seek(pos)
    }
}
