use crate::codec::MAX_VARINT_LEN;
use crate::{Error, Read, Result};

macro_rules! read_fixed {
    ($name:ident, $ty:ident, $conv:ident, $doc:expr) => {
        #[doc = $doc]
        fn $name(&mut self) -> Result<$ty> {
            let mut buf = [0; std::mem::size_of::<$ty>()];
            self.read_exact(&mut buf)?;
            Ok(<$ty>::$conv(buf))
        }
    };
}

/// Decoding methods available on every reader.
///
/// All methods decode a complete value or fail; a source that ends partway
/// through a value raises [Error::End], since a partial integer has no
/// meaningful representation.
///
/// # Examples
///
/// ```rust
/// use byteio::codec::ReadBytesExt;
/// use byteio::Cursor;
///
/// let mut source = Cursor::new(&[0x2a, 0x00, 0x01, 0x00][..]);
///
/// assert_eq!(source.read_u8()?, 0x2a);
/// assert_eq!(source.read_u16_le()?, 0x100);
/// assert_eq!(source.read_u8()?, 0x00);
/// # Ok::<_, byteio::Error>(())
/// ```
pub trait ReadBytesExt: Read {
    /// Fill all of `buf` from the source.
    ///
    /// # Errors
    ///
    /// [Error::End] if the source ends first. The bytes read up to that
    /// point have been consumed.
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        let n = crate::io::read_full(self, buf)?;

        if n < buf.len() {
            return Err(Error::End { required: buf.len() });
        }

        Ok(())
    }

    /// Read a single byte.
    fn read_u8(&mut self) -> Result<u8> {
        let mut buf = [0];
        self.read_exact(&mut buf)?;
        Ok(buf[0])
    }

    /// Read a single signed byte.
    fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_u8()? as i8)
    }

    read_fixed!(read_u16_le, u16, from_le_bytes, "Read a little-endian `u16`.");
    read_fixed!(read_u16_be, u16, from_be_bytes, "Read a big-endian `u16`.");
    read_fixed!(read_i16_le, i16, from_le_bytes, "Read a little-endian `i16`.");
    read_fixed!(read_i16_be, i16, from_be_bytes, "Read a big-endian `i16`.");
    read_fixed!(read_u32_le, u32, from_le_bytes, "Read a little-endian `u32`.");
    read_fixed!(read_u32_be, u32, from_be_bytes, "Read a big-endian `u32`.");
    read_fixed!(read_i32_le, i32, from_le_bytes, "Read a little-endian `i32`.");
    read_fixed!(read_i32_be, i32, from_be_bytes, "Read a big-endian `i32`.");
    read_fixed!(read_u64_le, u64, from_le_bytes, "Read a little-endian `u64`.");
    read_fixed!(read_u64_be, u64, from_be_bytes, "Read a big-endian `u64`.");
    read_fixed!(read_i64_le, i64, from_le_bytes, "Read a little-endian `i64`.");
    read_fixed!(read_i64_be, i64, from_be_bytes, "Read a big-endian `i64`.");

    /// Read a little-endian IEEE-754 single-precision float.
    fn read_f32_le(&mut self) -> Result<f32> {
        Ok(f32::from_bits(self.read_u32_le()?))
    }

    /// Read a big-endian IEEE-754 single-precision float.
    fn read_f32_be(&mut self) -> Result<f32> {
        Ok(f32::from_bits(self.read_u32_be()?))
    }

    /// Read a little-endian IEEE-754 double-precision float.
    fn read_f64_le(&mut self) -> Result<f64> {
        Ok(f64::from_bits(self.read_u64_le()?))
    }

    /// Read a big-endian IEEE-754 double-precision float.
    fn read_f64_be(&mut self) -> Result<f64> {
        Ok(f64::from_bits(self.read_u64_be()?))
    }

    /// Read an unsigned base-128 varint.
    ///
    /// # Errors
    ///
    /// [Error::Varint] if the encoding runs past
    /// [MAX_VARINT_LEN][crate::codec::MAX_VARINT_LEN] bytes or carries
    /// more than 64 significant bits; [Error::End] if the source ends
    /// mid-value.
    fn read_uvarint(&mut self) -> Result<u64> {
        let mut value = 0;

        for count in 0..MAX_VARINT_LEN {
            let byte = self.read_u8()?;

            // The tenth byte can only carry the final bit of a 64-bit
            // value.
            if count == MAX_VARINT_LEN - 1 && byte > 1 {
                return Err(Error::Varint {
                    limit: MAX_VARINT_LEN,
                });
            }

            value |= u64::from(byte & 0x7f) << (7 * count as u32);

            if byte & 0x80 == 0 {
                return Ok(value);
            }
        }

        Err(Error::Varint {
            limit: MAX_VARINT_LEN,
        })
    }

    /// Read a signed varint in truncated two's-complement encoding.
    fn read_varint(&mut self) -> Result<i64> {
        Ok(self.read_uvarint()? as i64)
    }

    /// Read a signed varint in zigzag encoding.
    fn read_zigzag(&mut self) -> Result<i64> {
        Ok(crate::codec::unzigzag(self.read_uvarint()?))
    }
}

impl<R> ReadBytesExt for R where R: Read + ?Sized {}
