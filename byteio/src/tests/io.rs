use quickcheck_macros::quickcheck;

use crate::io::{copy, read_full, read_to_end, read_until, BufReader, BufWriter};
use crate::{BufRead, Cursor, Error, Read, Seek, SeekFrom, Write};

/// Serves a payload in chunks of at most `chunk` bytes, counting how many
/// underlying reads were issued.
struct Chunked {
    data: Vec<u8>,
    at: usize,
    chunk: usize,
    reads: usize,
}

impl Chunked {
    fn new(data: impl Into<Vec<u8>>, chunk: usize) -> Self {
        Self {
            data: data.into(),
            at: 0,
            chunk,
            reads: 0,
        }
    }
}

impl Read for Chunked {
    fn read(&mut self, buf: &mut [u8]) -> crate::Result<usize> {
        self.reads += 1;
        let rem = &self.data[self.at..];
        let n = rem.len().min(buf.len()).min(self.chunk);
        buf[..n].copy_from_slice(&rem[..n]);
        self.at += n;
        Ok(n)
    }
}

/// Accepts at most `limit` bytes per write.
struct Trickle {
    out: Vec<u8>,
    limit: usize,
}

impl Trickle {
    fn new(limit: usize) -> Self {
        Self {
            out: Vec::new(),
            limit,
        }
    }
}

impl Write for Trickle {
    fn write(&mut self, buf: &[u8]) -> crate::Result<usize> {
        let n = buf.len().min(self.limit);
        self.out.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> crate::Result<()> {
        Ok(())
    }
}

#[test]
fn test_fill_is_lazy_and_counted() {
    let mut reader = BufReader::with_capacity(4, Chunked::new(&b"0123456789abcdef"[..], 1024));

    assert_eq!(reader.fill(10).unwrap(), b"0123456789");
    assert_eq!(reader.as_ref().reads, 1);

    // Anything already buffered is free.
    assert_eq!(reader.fill(10).unwrap(), b"0123456789");
    assert_eq!(reader.fill(3).unwrap(), b"0123456789");
    assert_eq!(reader.as_ref().reads, 1);

    // Asking for more issues exactly one more read for the shortfall.
    assert_eq!(reader.fill(16).unwrap(), b"0123456789abcdef");
    assert_eq!(reader.as_ref().reads, 2);

    // Short view at end-of-stream, not an error.
    assert_eq!(reader.fill(32).unwrap(), b"0123456789abcdef");
    assert_eq!(reader.fill(32).unwrap(), b"0123456789abcdef");
    assert_eq!(reader.as_ref().reads, 4);
}

#[test]
fn test_fill_view_is_min_of_want_and_available() {
    let mut reader = BufReader::new(Chunked::new(&b"abcdefgh"[..], 1024));

    assert_eq!(reader.fill(3).unwrap().len(), 3);
    assert_eq!(reader.fill(8).unwrap().len(), 8);
    assert_eq!(reader.fill(100).unwrap().len(), 8);
}

#[test]
fn test_consume_preserves_tail() {
    let mut reader = BufReader::new(Chunked::new(&b"one two three"[..], 1024));

    let tail = reader.fill(13).unwrap()[4..].to_vec();
    reader.consume(4).unwrap();

    // Nothing lost, nothing duplicated.
    assert_eq!(reader.fill(9).unwrap(), &tail[..]);
    assert_eq!(reader.buffered(), &tail[..]);
}

#[test]
fn test_consume_past_buffered_is_an_error() {
    let mut reader = BufReader::new(Chunked::new(&b"ab"[..], 1024));

    reader.fill(2).unwrap();

    let error = reader.consume(3).unwrap_err();
    assert!(matches!(
        error,
        Error::Consume {
            requested: 3,
            buffered: 2,
        }
    ));

    // The buffered bytes are untouched by the failed call.
    assert_eq!(reader.buffered(), b"ab");
}

#[test]
fn test_read_composes_fill_and_consume() {
    let mut reader = BufReader::with_capacity(2, Chunked::new(&b"stream"[..], 2));
    let mut out = [0; 4];

    // The wrapped reader trickles two bytes per attempt; a single read
    // performs one attempt and returns what arrived.
    assert_eq!(reader.read(&mut out).unwrap(), 2);
    assert_eq!(&out[..2], b"st");

    assert_eq!(reader.read(&mut out).unwrap(), 2);
    assert_eq!(&out[..2], b"re");

    assert_eq!(reader.read(&mut out).unwrap(), 2);
    assert_eq!(reader.read(&mut out).unwrap(), 0);
}

#[test]
fn test_grow_keeps_buffered_bytes() {
    let mut reader = BufReader::with_capacity(2, Chunked::new(&b"grow me well"[..], 1024));

    assert_eq!(reader.fill(2).unwrap(), b"gr");

    // Growth well past the initial capacity keeps the front intact.
    let view = reader.fill(12).unwrap();
    assert_eq!(view, b"grow me well");
}

#[quickcheck]
fn prop_fill_sequences_observe_availability(data: Vec<u8>, wants: Vec<u8>) -> bool {
    let mut reader = BufReader::with_capacity(1, Chunked::new(data.clone(), 1024));

    for want in wants {
        let want = usize::from(want);
        let view = match reader.fill(want) {
            Ok(view) => view,
            Err(..) => return false,
        };

        if view.len() != usize::min(usize::max(want, view.len()), data.len()) {
            return false;
        }

        if view != &data[..view.len()] {
            return false;
        }
    }

    true
}

#[test]
fn test_buf_writer_batches_small_writes() {
    let mut sink = Trickle::new(1024);

    {
        let mut writer = BufWriter::with_capacity(4, &mut sink);

        writer.write(b"ab").unwrap();
        writer.write(b"cd").unwrap();
        assert_eq!(writer.buffered(), b"abcd");
        assert!(writer.as_ref().out.is_empty());

        // Overflow drains the batch first.
        writer.write(b"e").unwrap();
        assert_eq!(writer.buffered(), b"e");
        assert_eq!(writer.as_ref().out, b"abcd");

        writer.flush().unwrap();
    }

    assert_eq!(sink.out, b"abcde");
}

#[test]
fn test_buf_writer_large_write_bypasses_buffer() {
    let mut sink = Trickle::new(1024);

    {
        let mut writer = BufWriter::with_capacity(4, &mut sink);

        writer.write(b"xy").unwrap();
        writer.write(b"0123456789").unwrap();

        // The large write drained the batch and went straight through.
        assert_eq!(writer.as_ref().out, b"xy0123456789");
        assert!(writer.buffered().is_empty());
    }

    assert_eq!(sink.out, b"xy0123456789");
}

#[test]
fn test_buf_writer_flushes_on_drop() {
    let mut sink = Trickle::new(1024);

    {
        let mut writer = BufWriter::with_capacity(64, &mut sink);
        writer.write(b"teardown").unwrap();
        assert!(writer.as_ref().out.is_empty());
    }

    assert_eq!(sink.out, b"teardown");
}

#[test]
fn test_buf_writer_flushes_before_seeking() {
    let mut sink = Cursor::new(Vec::new());

    {
        let mut writer = BufWriter::with_capacity(8, &mut sink);

        writer.write(b"ab").unwrap();
        writer.seek(SeekFrom::Start(0)).unwrap();
        writer.write(b"c").unwrap();
        writer.flush().unwrap();
    }

    // "ab" reached the sink at the pre-seek offset, "c" after it.
    assert_eq!(sink.as_ref(), b"cb");
}

#[quickcheck]
fn prop_buf_writer_concatenates(writes: Vec<Vec<u8>>, capacity: u8) -> bool {
    let capacity = usize::from(capacity) + 1;
    let mut sink = Trickle::new(1024);
    let mut expected = Vec::new();

    {
        let mut writer = BufWriter::with_capacity(capacity, &mut sink);

        for write in &writes {
            expected.extend_from_slice(write);

            if writer.write(write).unwrap() != write.len() {
                return false;
            }
        }

        writer.flush().unwrap();
    }

    sink.out == expected
}

#[test]
fn test_read_until_delimiter_boundaries() {
    let text = b"The quick brown fox\njumps over the lazy dog.\n";
    let mut reader = BufReader::new(Chunked::new(&text[..], 1024));

    let mut line = Vec::new();
    assert_eq!(read_until(&mut reader, b'\n', &mut line).unwrap(), 20);
    assert_eq!(line, b"The quick brown fox\n");

    line.clear();
    assert_eq!(read_until(&mut reader, b'\n', &mut line).unwrap(), 25);
    assert_eq!(line, b"jumps over the lazy dog.\n");

    line.clear();
    assert_eq!(read_until(&mut reader, b'\n', &mut line).unwrap(), 0);
}

#[test]
fn test_read_until_leaves_tail_buffered() {
    let mut reader = BufReader::new(Chunked::new(&b"head;tail"[..], 1024));

    let mut out = Vec::new();
    read_until(&mut reader, b';', &mut out).unwrap();
    assert_eq!(out, b"head;");

    // The same fill that found the delimiter saw "tail"; it must still be
    // there.
    assert_eq!(reader.buffered(), b"tail");
}

#[test]
fn test_read_until_without_delimiter_returns_rest() {
    let mut reader = BufReader::new(Chunked::new(&b"no delimiter here"[..], 3));

    let mut out = Vec::new();
    assert_eq!(read_until(&mut reader, b'\n', &mut out).unwrap(), 17);
    assert_eq!(out, b"no delimiter here");
}

#[test]
fn test_read_to_end_is_idempotent_at_eof() {
    let mut reader = BufReader::new(Chunked::new(&b"drain me"[..], 3));

    let mut out = Vec::new();
    assert_eq!(read_to_end(&mut reader, &mut out).unwrap(), 8);
    assert_eq!(out, b"drain me");

    assert_eq!(read_to_end(&mut reader, &mut out).unwrap(), 0);
    assert_eq!(out, b"drain me");
}

#[test]
fn test_read_full_retries_until_complete() {
    let mut reader = Chunked::new(&b"abcdef"[..], 2);
    let mut buf = [0; 6];

    // One call, three underlying attempts.
    assert_eq!(read_full(&mut reader, &mut buf).unwrap(), 6);
    assert_eq!(&buf, b"abcdef");
    assert_eq!(reader.reads, 3);
}

#[test]
fn test_read_full_short_at_eof() {
    let mut reader = Chunked::new(&b"abc"[..], 2);
    let mut buf = [0; 8];

    assert_eq!(read_full(&mut reader, &mut buf).unwrap(), 3);
    assert_eq!(&buf[..3], b"abc");
}

#[test]
fn test_copy_survives_short_writes() {
    let text = b"no byte may be dropped, no matter how slow the sink";
    let mut reader = BufReader::with_capacity(4, Chunked::new(&text[..], 5));
    let mut sink = Trickle::new(1);

    assert_eq!(copy(&mut reader, &mut sink).unwrap(), text.len() as u64);
    assert_eq!(sink.out, text);
}

#[test]
fn test_copy_large_random_payload() {
    use rand::Rng as _;

    let mut rng = rand::thread_rng();
    let mut data = vec![0u8; 65536];
    rng.fill(&mut data[..]);

    let mut reader = BufReader::with_capacity(64, Chunked::new(data.clone(), 467));
    let mut sink = Cursor::new(Vec::new());

    assert_eq!(copy(&mut reader, &mut sink).unwrap(), data.len() as u64);
    assert_eq!(sink.as_ref(), &data);
}

#[quickcheck]
fn prop_copy_equals_source(data: Vec<u8>, limit: u8, chunk: u8) -> bool {
    let limit = usize::from(limit) + 1;
    let chunk = usize::from(chunk) + 1;

    let mut reader = BufReader::with_capacity(2, Chunked::new(data.clone(), chunk));
    let mut sink = Trickle::new(limit);

    match copy(&mut reader, &mut sink) {
        Ok(total) => total == data.len() as u64 && sink.out == data,
        Err(..) => false,
    }
}
