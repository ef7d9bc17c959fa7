use quickcheck_macros::quickcheck;

use crate::codec::{ReadBytesExt, WriteBytesExt, MAX_VARINT_LEN};
use crate::{Cursor, Error};

fn encoded<F>(op: F) -> Vec<u8>
where
    F: FnOnce(&mut Cursor<Vec<u8>>) -> crate::Result<()>,
{
    let mut stream = Cursor::new(Vec::new());
    op(&mut stream).unwrap();
    stream.into_inner()
}

#[test]
fn test_fixed_width_layout() {
    assert_eq!(encoded(|s| s.write_u16_be(0x1234)), [0x12, 0x34]);
    assert_eq!(encoded(|s| s.write_u16_le(0x1234)), [0x34, 0x12]);
    assert_eq!(
        encoded(|s| s.write_u32_be(0x0102_0304)),
        [0x01, 0x02, 0x03, 0x04]
    );
    assert_eq!(
        encoded(|s| s.write_u32_le(0x0102_0304)),
        [0x04, 0x03, 0x02, 0x01]
    );
    assert_eq!(
        encoded(|s| s.write_u64_be(0x0102_0304_0506_0708)),
        [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]
    );
    assert_eq!(encoded(|s| s.write_i16_le(-2)), [0xfe, 0xff]);
}

#[test]
fn test_float_layout_matches_integer_layout() {
    let bits = 1.5f64.to_bits();
    assert_eq!(
        encoded(|s| s.write_f64_be(1.5)),
        encoded(|s| s.write_u64_be(bits))
    );
    assert_eq!(
        encoded(|s| s.write_f64_le(1.5)),
        encoded(|s| s.write_u64_le(bits))
    );
}

#[test]
fn test_uvarint_layout() {
    assert_eq!(encoded(|s| s.write_uvarint(0)), [0x00]);
    assert_eq!(encoded(|s| s.write_uvarint(1)), [0x01]);
    assert_eq!(encoded(|s| s.write_uvarint(127)), [0x7f]);
    assert_eq!(encoded(|s| s.write_uvarint(128)), [0x80, 0x01]);
    assert_eq!(encoded(|s| s.write_uvarint(300)), [0xac, 0x02]);

    // The full 64-bit domain takes the maximum length.
    let max = encoded(|s| s.write_uvarint(u64::MAX));
    assert_eq!(max.len(), MAX_VARINT_LEN);
    assert_eq!(max[MAX_VARINT_LEN - 1], 0x01);
}

#[test]
fn test_varint_boundaries_round_trip() {
    for value in [0, 1, -1, i64::MIN, i64::MAX] {
        let bytes = encoded(|s| s.write_varint(value));
        let mut stream = Cursor::new(bytes);
        assert_eq!(stream.read_varint().unwrap(), value);
    }

    // Two's complement: negative values always occupy the full length.
    assert_eq!(encoded(|s| s.write_varint(-1)).len(), MAX_VARINT_LEN);
}

#[test]
fn test_zigzag_boundaries_round_trip() {
    for value in [0, 1, -1, i64::MIN, i64::MAX] {
        let bytes = encoded(|s| s.write_zigzag(value));
        let mut stream = Cursor::new(bytes);
        assert_eq!(stream.read_zigzag().unwrap(), value);
    }

    // Zigzag keeps small magnitudes short in both directions.
    assert_eq!(encoded(|s| s.write_zigzag(0)), [0x00]);
    assert_eq!(encoded(|s| s.write_zigzag(-1)), [0x01]);
    assert_eq!(encoded(|s| s.write_zigzag(1)), [0x02]);
    assert_eq!(encoded(|s| s.write_zigzag(-2)), [0x03]);
}

#[test]
fn test_truncated_input_is_an_end_error() {
    let mut stream = Cursor::new(&[0x12][..]);
    assert!(matches!(
        stream.read_u32_be().unwrap_err(),
        Error::End { required: 4 }
    ));

    // A continuation bit with nothing after it.
    let mut stream = Cursor::new(&[0x80][..]);
    assert!(matches!(
        stream.read_uvarint().unwrap_err(),
        Error::End { required: 1 }
    ));
}

#[test]
fn test_overlong_varint_is_rejected() {
    // Ten continuation bytes never terminate a 64-bit value.
    let mut stream = Cursor::new(&[0x80; MAX_VARINT_LEN][..]);
    assert!(matches!(
        stream.read_uvarint().unwrap_err(),
        Error::Varint { limit: MAX_VARINT_LEN }
    ));

    // A tenth byte carrying more than the final bit overflows 64 bits.
    let mut bytes = [0xff; MAX_VARINT_LEN];
    bytes[MAX_VARINT_LEN - 1] = 0x02;
    let mut stream = Cursor::new(&bytes[..]);
    assert!(matches!(
        stream.read_uvarint().unwrap_err(),
        Error::Varint { limit: MAX_VARINT_LEN }
    ));
}

#[quickcheck]
fn prop_fixed_width_round_trips(value: u64) -> bool {
    let value32 = value as u32;
    let value16 = value as u16;

    let mut stream = Cursor::new(Vec::new());
    stream.write_u64_le(value).unwrap();
    stream.write_u64_be(value).unwrap();
    stream.write_u32_le(value32).unwrap();
    stream.write_u32_be(value32).unwrap();
    stream.write_u16_le(value16).unwrap();
    stream.write_u16_be(value16).unwrap();

    stream.set_position(0);

    stream.read_u64_le().unwrap() == value
        && stream.read_u64_be().unwrap() == value
        && stream.read_u32_le().unwrap() == value32
        && stream.read_u32_be().unwrap() == value32
        && stream.read_u16_le().unwrap() == value16
        && stream.read_u16_be().unwrap() == value16
}

#[quickcheck]
fn prop_varint_round_trips(value: u64, signed: i64) -> bool {
    let mut stream = Cursor::new(Vec::new());
    stream.write_uvarint(value).unwrap();
    stream.write_varint(signed).unwrap();
    stream.write_zigzag(signed).unwrap();

    stream.set_position(0);

    stream.read_uvarint().unwrap() == value
        && stream.read_varint().unwrap() == signed
        && stream.read_zigzag().unwrap() == signed
}

#[quickcheck]
fn prop_float_round_trips(value: f64) -> bool {
    let mut stream = Cursor::new(Vec::new());
    stream.write_f64_le(value).unwrap();
    stream.write_f64_be(value).unwrap();
    stream.write_f32_le(value as f32).unwrap();
    stream.write_f32_be(value as f32).unwrap();

    stream.set_position(0);

    // Compare bit patterns so NaN payloads count as equal.
    stream.read_f64_le().unwrap().to_bits() == value.to_bits()
        && stream.read_f64_be().unwrap().to_bits() == value.to_bits()
        && stream.read_f32_le().unwrap().to_bits() == (value as f32).to_bits()
        && stream.read_f32_be().unwrap().to_bits() == (value as f32).to_bits()
}
