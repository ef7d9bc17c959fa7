use crate::codec::MAX_VARINT_LEN;
use crate::{Error, Result, Write};

macro_rules! write_fixed {
    ($name:ident, $ty:ident, $conv:ident, $doc:expr) => {
        #[doc = $doc]
        fn $name(&mut self, value: $ty) -> Result<()> {
            self.write_all(&value.$conv())
        }
    };
}

/// Encoding methods available on every writer.
///
/// All methods encode a complete value or fail; a sink that stops
/// accepting bytes partway through a value raises [Error::End].
///
/// # Examples
///
/// ```rust
/// use byteio::codec::WriteBytesExt;
/// use byteio::Cursor;
///
/// let mut sink = Cursor::new(Vec::new());
///
/// sink.write_u8(0x2a)?;
/// sink.write_u16_le(0x100)?;
///
/// assert_eq!(sink.as_ref(), &[0x2a, 0x00, 0x01]);
/// # Ok::<_, byteio::Error>(())
/// ```
pub trait WriteBytesExt: Write {
    /// Write all of `buf` to the sink.
    ///
    /// # Errors
    ///
    /// [Error::End] if the sink stops accepting bytes first. The bytes
    /// accepted up to that point have been written.
    fn write_all(&mut self, buf: &[u8]) -> Result<()> {
        let n = crate::io::write_full(self, buf)?;

        if n < buf.len() {
            return Err(Error::End { required: buf.len() });
        }

        Ok(())
    }

    /// Write a single byte.
    fn write_u8(&mut self, value: u8) -> Result<()> {
        self.write_all(&[value])
    }

    /// Write a single signed byte.
    fn write_i8(&mut self, value: i8) -> Result<()> {
        self.write_u8(value as u8)
    }

    write_fixed!(write_u16_le, u16, to_le_bytes, "Write a little-endian `u16`.");
    write_fixed!(write_u16_be, u16, to_be_bytes, "Write a big-endian `u16`.");
    write_fixed!(write_i16_le, i16, to_le_bytes, "Write a little-endian `i16`.");
    write_fixed!(write_i16_be, i16, to_be_bytes, "Write a big-endian `i16`.");
    write_fixed!(write_u32_le, u32, to_le_bytes, "Write a little-endian `u32`.");
    write_fixed!(write_u32_be, u32, to_be_bytes, "Write a big-endian `u32`.");
    write_fixed!(write_i32_le, i32, to_le_bytes, "Write a little-endian `i32`.");
    write_fixed!(write_i32_be, i32, to_be_bytes, "Write a big-endian `i32`.");
    write_fixed!(write_u64_le, u64, to_le_bytes, "Write a little-endian `u64`.");
    write_fixed!(write_u64_be, u64, to_be_bytes, "Write a big-endian `u64`.");
    write_fixed!(write_i64_le, i64, to_le_bytes, "Write a little-endian `i64`.");
    write_fixed!(write_i64_be, i64, to_be_bytes, "Write a big-endian `i64`.");

    /// Write a little-endian IEEE-754 single-precision float.
    fn write_f32_le(&mut self, value: f32) -> Result<()> {
        self.write_u32_le(value.to_bits())
    }

    /// Write a big-endian IEEE-754 single-precision float.
    fn write_f32_be(&mut self, value: f32) -> Result<()> {
        self.write_u32_be(value.to_bits())
    }

    /// Write a little-endian IEEE-754 double-precision float.
    fn write_f64_le(&mut self, value: f64) -> Result<()> {
        self.write_u64_le(value.to_bits())
    }

    /// Write a big-endian IEEE-754 double-precision float.
    fn write_f64_be(&mut self, value: f64) -> Result<()> {
        self.write_u64_be(value.to_bits())
    }

    /// Write an unsigned base-128 varint.
    fn write_uvarint(&mut self, mut value: u64) -> Result<()> {
        let mut buf = [0; MAX_VARINT_LEN];
        let mut at = 0;

        while value >= 0x80 {
            buf[at] = value as u8 | 0x80;
            value >>= 7;
            at += 1;
        }

        buf[at] = value as u8;
        self.write_all(&buf[..at + 1])
    }

    /// Write a signed varint in truncated two's-complement encoding.
    ///
    /// Negative values always occupy the maximum encoded length; prefer
    /// [write_zigzag][WriteBytesExt::write_zigzag] where small negative
    /// magnitudes are common.
    fn write_varint(&mut self, value: i64) -> Result<()> {
        self.write_uvarint(value as u64)
    }

    /// Write a signed varint in zigzag encoding.
    fn write_zigzag(&mut self, value: i64) -> Result<()> {
        self.write_uvarint(crate::codec::zigzag(value))
    }
}

impl<W> WriteBytesExt for W where W: Write + ?Sized {}
