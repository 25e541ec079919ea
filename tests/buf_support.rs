use anyhow::Result;
use bytes::{Buf, Bytes, BytesMut};
use twvarint::{MAX_VARINT_LEN32, VarintBuf, VarintBufMut};

#[test]
fn bytes_round_trip() -> Result<()> {
    let mut out = BytesMut::new();
    assert_eq!(out.put_varint32(33), 1);
    assert_eq!(out.put_varint32(-8193), 3);
    assert_eq!(out.put_varint64(i64::MIN), 10);
    assert_eq!(out.put_varint64(1 << 62), 10);

    let mut input = out.freeze();
    assert_eq!(input.get_varint32()?, 33);
    assert_eq!(input.get_varint32()?, -8193);
    assert_eq!(input.get_varint64()?, i64::MIN);
    assert_eq!(input.get_varint64()?, 1 << 62);
    assert!(!input.has_remaining());
    Ok(())
}

#[test]
fn truncated_buffer_reports_eof() {
    let mut input = Bytes::from_static(&[0b1000_0001, 0b1000_0001]);
    let err = input.get_varint32().expect_err("value is cut short");
    assert!(err.is_eof());
    assert_eq!(input.remaining(), 0);
}

#[test]
fn overflow_leaves_remaining_bytes() {
    let mut raw = vec![0b1100_0001u8; MAX_VARINT_LEN32];
    raw.extend_from_slice(&[0x01, 0x02]);
    let mut input = Bytes::from(raw);
    let err = input.get_varint32().expect_err("no terminator within budget");
    assert!(err.is_overflow());
    assert_eq!(input.chunk(), &[0x01, 0x02]);
}

#[test]
fn works_on_plain_slices() -> Result<()> {
    let mut input: &[u8] = &[0b1011_1111, 0b0000_0001, 0b0100_0000];
    assert_eq!(input.get_varint32()?, 127);
    assert_eq!(input.get_varint64()?, -1);
    Ok(())
}
