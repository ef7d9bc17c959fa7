use std::fmt;

use crate::{BufRead, Error, Read, Result, Seek, SeekFrom, Write};

/// An in-memory stream over any byte container.
///
/// The cursor pairs a backing store with a single position used by reads,
/// writes and seeks alike. Which capabilities it has follows from the
/// backing type:
///
/// * Anything that can be viewed as `&[u8]` — `Vec<u8>`, `&[u8]`,
///   `&mut [u8]`, arrays — reads, fills and seeks.
/// * `Vec<u8>` (owned or `&mut`) also writes; writing past the end
///   zero-fills the gap and extends the vector.
/// * `&mut [u8]` also writes, but the extent is fixed: writes past it are
///   clipped to a short count rather than failing.
///
/// # Examples
///
/// ```rust
/// use byteio::{Cursor, Read as _, Seek as _, SeekFrom, Write as _};
///
/// let mut stream = Cursor::new(Vec::new());
///
/// stream.write(b"stored")?;
/// stream.seek(SeekFrom::Start(0))?;
///
/// let mut out = [0; 6];
/// stream.read(&mut out)?;
/// assert_eq!(&out, b"stored");
/// # Ok::<_, byteio::Error>(())
/// ```
#[derive(Clone)]
pub struct Cursor<T> {
    inner: T,
    pos: u64,
}

impl<T> Cursor<T> {
    /// Construct a new cursor positioned at the start of the backing
    /// store.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use byteio::Cursor;
    ///
    /// let stream = Cursor::new(vec![1, 2, 3]);
    /// assert_eq!(stream.position(), 0);
    /// ```
    pub fn new(inner: T) -> Self {
        Self { inner, pos: 0 }
    }

    /// The current position of the cursor.
    #[inline]
    pub fn position(&self) -> u64 {
        self.pos
    }

    /// Move the cursor to an absolute position.
    ///
    /// Unlike [Seek::seek] this cannot fail; positions past the end are
    /// allowed and simply have nothing to read.
    #[inline]
    pub fn set_position(&mut self, pos: u64) {
        self.pos = pos;
    }

    /// Access the backing store.
    #[inline]
    pub fn as_ref(&self) -> &T {
        &self.inner
    }

    /// Access the backing store mutably.
    #[inline]
    pub fn as_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Convert into the backing store.
    #[inline]
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T> Cursor<T>
where
    T: AsRef<[u8]>,
{
    /// The bytes between the cursor and the end of the backing store.
    fn remaining(&self) -> &[u8] {
        let data = self.inner.as_ref();

        if self.pos >= data.len() as u64 {
            &[]
        } else {
            &data[self.pos as usize..]
        }
    }
}

impl<T> Read for Cursor<T>
where
    T: AsRef<[u8]>,
{
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let n = {
            let rem = self.remaining();
            let n = usize::min(rem.len(), buf.len());
            buf[..n].copy_from_slice(&rem[..n]);
            n
        };

        self.pos += n as u64;
        Ok(n)
    }
}

impl<T> BufRead for Cursor<T>
where
    T: AsRef<[u8]>,
{
    fn fill(&mut self, _want: usize) -> Result<&[u8]> {
        // The whole backing store is already in memory, so everything
        // remaining counts as buffered regardless of the request.
        Ok(self.remaining())
    }

    fn consume(&mut self, amount: usize) -> Result<()> {
        let buffered = self.remaining().len();

        if amount > buffered {
            return Err(Error::Consume {
                requested: amount,
                buffered,
            });
        }

        self.pos += amount as u64;
        Ok(())
    }
}

impl<T> Seek for Cursor<T>
where
    T: AsRef<[u8]>,
{
    fn seek(&mut self, pos: SeekFrom) -> Result<u64> {
        let (base, offset) = match pos {
            SeekFrom::Start(offset) => {
                self.pos = offset;
                return Ok(offset);
            }
            SeekFrom::Current(offset) => (self.pos, offset),
            SeekFrom::End(offset) => (self.inner.as_ref().len() as u64, offset),
        };

        let resolved = base as i128 + offset as i128;

        if resolved < 0 {
            return Err(Error::NegativeSeek {
                position: resolved as i64,
            });
        }

        self.pos = resolved as u64;
        Ok(self.pos)
    }
}

/// Write into a growable vector, extending it as needed.
fn write_vec(pos: &mut u64, vec: &mut Vec<u8>, buf: &[u8]) -> Result<usize> {
    let start = *pos as usize;

    if start > vec.len() {
        // Zero-fill the gap between the end and the cursor.
        vec.resize(start, 0);
    }

    let overlap = usize::min(vec.len() - start, buf.len());
    vec[start..start + overlap].copy_from_slice(&buf[..overlap]);
    vec.extend_from_slice(&buf[overlap..]);

    *pos += buf.len() as u64;
    Ok(buf.len())
}

impl Write for Cursor<Vec<u8>> {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        write_vec(&mut self.pos, &mut self.inner, buf)
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

impl Write for Cursor<&mut Vec<u8>> {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        write_vec(&mut self.pos, self.inner, buf)
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

impl Write for Cursor<&mut [u8]> {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        let n = {
            let data = &mut *self.inner;
            let start = usize::min(self.pos as usize, data.len());
            let n = usize::min(data.len() - start, buf.len());
            data[start..start + n].copy_from_slice(&buf[..n]);
            n
        };

        self.pos += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<T> fmt::Debug for Cursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor").field("pos", &self.pos).finish()
    }
}
