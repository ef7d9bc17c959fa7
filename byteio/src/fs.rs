//! The operating system file backend.
//!
//! [File] is a thin owner of a platform file handle that surfaces it
//! through the stream capabilities. It defines no on-disk structure of its
//! own; every operation is a pass-through to the platform, with failures
//! surfaced as [Error::Io][crate::Error::Io] so the original diagnostic is
//! kept.

use std::fs;
use std::io::{Read as _, Seek as _, Write as _};
use std::path::{Path, PathBuf};

use crate::{Read, Result, Seek, SeekFrom, Write};

/// An owned handle to an operating system file.
///
/// The handle closes the file on every exit path when dropped; failures at
/// that point cannot be reported and are ignored by the platform contract.
/// Use [close][File::close] where a close failure needs to be observed.
///
/// # Examples
///
/// ```rust,no_run
/// use byteio::fs::File;
/// use byteio::io::read_to_end;
///
/// let mut file = File::open("data.bin")?;
/// let mut contents = Vec::new();
/// read_to_end(&mut file, &mut contents)?;
/// # Ok::<_, byteio::Error>(())
/// ```
#[derive(Debug)]
pub struct File {
    inner: fs::File,
    path: PathBuf,
}

impl File {
    /// Open an existing file for reading.
    pub fn open<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref().to_owned();
        tracing::trace!(path = ?path, "opening file");
        let inner = fs::File::open(&path)?;
        Ok(Self { inner, path })
    }

    /// Create a new file for writing, truncating it if it exists.
    pub fn create<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref().to_owned();
        tracing::trace!(path = ?path, "creating file");
        let inner = fs::File::create(&path)?;
        Ok(Self { inner, path })
    }

    /// The path the file was opened with.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ask the operating system to commit all pending writes to storage.
    pub fn sync_all(&self) -> Result<()> {
        self.inner.sync_all()?;
        Ok(())
    }

    /// Close the file, reporting any failure to commit its contents.
    ///
    /// Dropping the handle also closes the file, but has no way to report
    /// a failure; this consumes the handle so a failed close is observable
    /// exactly once.
    pub fn close(self) -> Result<()> {
        tracing::trace!(path = ?self.path, "closing file");
        self.inner.sync_all()?;
        Ok(())
    }
}

impl Read for File {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        Ok(self.inner.read(buf)?)
    }
}

impl Write for File {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        Ok(self.inner.write(buf)?)
    }

    fn flush(&mut self) -> Result<()> {
        Ok(self.inner.flush()?)
    }
}

impl Seek for File {
    fn seek(&mut self, pos: SeekFrom) -> Result<u64> {
        let pos = match pos {
            SeekFrom::Start(offset) => std::io::SeekFrom::Start(offset),
            SeekFrom::Current(offset) => std::io::SeekFrom::Current(offset),
            SeekFrom::End(offset) => std::io::SeekFrom::End(offset),
        };

        Ok(self.inner.seek(pos)?)
    }
}
