//! Generic algorithms over the capability traits.

use crate::io::DEFAULT_BUF_LEN;
use crate::{BufRead, Read, Result, Write};

/// Read until `buf` is full or the source ends, whichever comes first.
///
/// Retries the single-attempt [Read::read] primitive as often as needed.
/// The returned count is short only when the source ended early; a short
/// result is a signal, not an error.
///
/// # Examples
///
/// ```rust
/// use byteio::io::read_full;
/// use byteio::Cursor;
///
/// let mut source = Cursor::new(&b"abc"[..]);
/// let mut buf = [0; 8];
///
/// assert_eq!(read_full(&mut source, &mut buf)?, 3);
/// assert_eq!(&buf[..3], b"abc");
/// # Ok::<_, byteio::Error>(())
/// ```
pub fn read_full<R>(reader: &mut R, buf: &mut [u8]) -> Result<usize>
where
    R: Read + ?Sized,
{
    let mut at = 0;

    while at < buf.len() {
        let n = reader.read(&mut buf[at..])?;

        if n == 0 {
            break;
        }

        at += n;
    }

    Ok(at)
}

/// Write all of `buf` unless the sink stops accepting bytes.
///
/// Retries the single-attempt [Write::write] primitive as often as needed.
/// The returned count is short only when the sink returned `0`; a short
/// result is a signal, not an error.
pub fn write_full<W>(writer: &mut W, buf: &[u8]) -> Result<usize>
where
    W: Write + ?Sized,
{
    let mut at = 0;

    while at < buf.len() {
        let n = writer.write(&buf[at..])?;

        if n == 0 {
            break;
        }

        at += n;
    }

    Ok(at)
}

/// Read everything remaining in the source, appending it to `out`.
///
/// Returns the number of bytes appended. The consumption is single-pass: a
/// second call on the same stream returns `0` without error, since the
/// stream is already exhausted.
///
/// For a source that is already a [BufRead], [copy] into a
/// [Cursor][crate::Cursor] over the output vector does the same job with
/// the source's own buffer as the transfer chunk, skipping one copy.
///
/// # Examples
///
/// ```rust
/// use byteio::io::read_to_end;
/// use byteio::Cursor;
///
/// let mut source = Cursor::new(&b"all of it"[..]);
/// let mut out = Vec::new();
///
/// assert_eq!(read_to_end(&mut source, &mut out)?, 9);
/// assert_eq!(out, b"all of it");
///
/// // Already exhausted.
/// assert_eq!(read_to_end(&mut source, &mut out)?, 0);
/// # Ok::<_, byteio::Error>(())
/// ```
pub fn read_to_end<R>(reader: &mut R, out: &mut Vec<u8>) -> Result<usize>
where
    R: Read + ?Sized,
{
    let start = out.len();

    loop {
        let len = out.len();
        out.resize(len + DEFAULT_BUF_LEN, 0);

        let n = match reader.read(&mut out[len..]) {
            Ok(n) => n,
            Err(error) => {
                out.truncate(len);
                return Err(error);
            }
        };

        out.truncate(len + n);

        if n == 0 {
            return Ok(out.len() - start);
        }
    }
}

/// Read up to and including `delimiter`, appending the bytes to `out`.
///
/// Returns the number of bytes appended. The stream is left positioned
/// immediately after the delimiter; bytes that happened to be buffered past
/// it stay buffered. If the source ends before the delimiter shows up,
/// everything read so far is appended and no error is raised. Callers can
/// tell the two cases apart by whether `out` now ends in `delimiter`.
///
/// # Examples
///
/// ```rust
/// use byteio::io::read_until;
/// use byteio::Cursor;
///
/// let mut source = Cursor::new(&b"one\ntwo\n"[..]);
/// let mut line = Vec::new();
///
/// read_until(&mut source, b'\n', &mut line)?;
/// assert_eq!(line, b"one\n");
///
/// line.clear();
/// read_until(&mut source, b'\n', &mut line)?;
/// assert_eq!(line, b"two\n");
///
/// line.clear();
/// assert_eq!(read_until(&mut source, b'\n', &mut line)?, 0);
/// # Ok::<_, byteio::Error>(())
/// ```
pub fn read_until<R>(reader: &mut R, delimiter: u8, out: &mut Vec<u8>) -> Result<usize>
where
    R: BufRead + ?Sized,
{
    let start = out.len();

    loop {
        let (used, done) = {
            let view = reader.fill(DEFAULT_BUF_LEN)?;

            if view.is_empty() {
                return Ok(out.len() - start);
            }

            match view.iter().position(|b| *b == delimiter) {
                Some(at) => {
                    out.extend_from_slice(&view[..=at]);
                    (at + 1, true)
                }
                None => {
                    out.extend_from_slice(view);
                    (view.len(), false)
                }
            }
        };

        reader.consume(used)?;

        if done {
            return Ok(out.len() - start);
        }
    }
}

/// Stream everything remaining in `reader` into `writer`, returning the
/// number of bytes copied.
///
/// The reader's own buffer is the transfer chunk; no intermediate
/// allocation is made. A short write only consumes the bytes the writer
/// actually accepted, so the remainder is offered again on the next
/// iteration and no data is lost. Copying stops when the reader is
/// exhausted or the writer returns `0`.
///
/// # Examples
///
/// ```rust
/// use byteio::io::{copy, BufReader};
/// use byteio::Cursor;
///
/// let mut reader = BufReader::new(Cursor::new(&b"payload"[..]));
/// let mut sink = Cursor::new(Vec::new());
///
/// assert_eq!(copy(&mut reader, &mut sink)?, 7);
/// assert_eq!(sink.as_ref(), b"payload");
/// # Ok::<_, byteio::Error>(())
/// ```
pub fn copy<R, W>(reader: &mut R, writer: &mut W) -> Result<u64>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let mut total = 0;

    loop {
        let n = {
            let view = reader.fill(DEFAULT_BUF_LEN)?;

            if view.is_empty() {
                return Ok(total);
            }

            writer.write(view)?
        };

        if n == 0 {
            return Ok(total);
        }

        reader.consume(n)?;
        total += n as u64;
    }
}
