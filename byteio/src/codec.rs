//! Serialization helpers over any stream.
//!
//! These extension traits are implemented for every [Read][crate::Read]
//! and [Write][crate::Write], so any stream can decode and encode fixed
//! layouts directly. Three families of encodings are covered:
//!
//! * Fixed-width integers, in explicit little-endian and big-endian
//!   variants. Each value is exactly as wide as its type, with no padding.
//! * IEEE-754 floats, treated as their bit pattern: the value is
//!   reinterpreted as the equally wide integer and byte-swapped as a unit.
//! * Base-128 varints: each encoded byte carries seven payload bits,
//!   least-significant group first, with the high bit set on every byte
//!   except the last. A 64-bit value takes at most
//!   [MAX_VARINT_LEN] bytes. Signed values are either truncated two's
//!   complement (negative numbers always take the full ten bytes) or
//!   zigzag-mapped first, which keeps small magnitudes of either sign
//!   short.
//!
//! # Examples
//!
//! ```rust
//! use byteio::codec::{ReadBytesExt, WriteBytesExt};
//! use byteio::Cursor;
//!
//! let mut stream = Cursor::new(Vec::new());
//! stream.write_u16_be(0x1234)?;
//! stream.write_uvarint(300)?;
//!
//! assert_eq!(stream.as_ref(), &[0x12, 0x34, 0b1010_1100, 0b0000_0010]);
//!
//! stream.set_position(0);
//! assert_eq!(stream.read_u16_be()?, 0x1234);
//! assert_eq!(stream.read_uvarint()?, 300);
//! # Ok::<_, byteio::Error>(())
//! ```

/// The largest number of bytes an encoded 64-bit varint can occupy.
pub const MAX_VARINT_LEN: usize = 10;

mod read;
pub use self::read::ReadBytesExt;

mod write;
pub use self::write::WriteBytesExt;

/// Map a signed value onto an unsigned one so that small magnitudes of
/// either sign encode short.
fn zigzag(value: i64) -> u64 {
    ((value as u64) << 1) ^ ((value >> 63) as u64)
}

/// Inverse of [zigzag].
fn unzigzag(value: u64) -> i64 {
    ((value >> 1) as i64) ^ -((value & 1) as i64)
}
