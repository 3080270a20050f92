//! Writer/Reader roundtrip matrix and truncation behaviour.

use graphbinary_buffers::{BufferError, Reader, Writer};
use proptest::prelude::*;

#[test]
fn roundtrip_mixed_widths() {
    let mut w = Writer::new();
    w.u8(0xFF);
    w.i8(i8::MIN);
    w.i16(-1000);
    w.i32(i32::MAX);
    w.i64(i64::MIN);
    w.f32(1.5);
    w.f64(-0.25);
    w.utf8("abc");
    let data = w.flush();
    assert_eq!(data.len(), 1 + 1 + 2 + 4 + 8 + 4 + 8 + 3);

    let mut r = Reader::new(&data);
    assert_eq!(r.u8(), Ok(0xFF));
    assert_eq!(r.i8(), Ok(i8::MIN));
    assert_eq!(r.i16(), Ok(-1000));
    assert_eq!(r.i32(), Ok(i32::MAX));
    assert_eq!(r.i64(), Ok(i64::MIN));
    assert_eq!(r.f32(), Ok(1.5));
    assert_eq!(r.f64(), Ok(-0.25));
    assert_eq!(r.read_exact(3), Ok(&b"abc"[..]));
    assert_eq!(r.remaining(), 0);
}

#[test]
fn truncated_reads_report_needed_and_remaining() {
    let data = [0x00, 0x01, 0x02];
    let mut r = Reader::new(&data);
    r.skip(1).unwrap();
    assert_eq!(
        r.i32(),
        Err(BufferError::TruncatedInput {
            needed: 4,
            remaining: 2
        })
    );
    assert_eq!(r.i16(), Ok(0x0102));
}

#[test]
fn truncated_input_display() {
    let err = BufferError::TruncatedInput {
        needed: 8,
        remaining: 7,
    };
    assert_eq!(err.to_string(), "truncated input: needed 8 bytes, 7 remaining");
}

#[test]
fn reader_never_mutates_source() {
    let data = vec![1u8, 2, 3, 4];
    let snapshot = data.clone();
    let mut r = Reader::new(&data);
    let _ = r.read_exact(2);
    let copy = r;
    assert_eq!(copy.rest(), &[3, 4]);
    assert_eq!(data, snapshot);
}

proptest! {
    #[test]
    fn i64_roundtrip(v in any::<i64>()) {
        let mut w = Writer::new();
        w.i64(v);
        let data = w.flush();
        prop_assert_eq!(data.as_slice(), &v.to_be_bytes()[..]);
        let mut r = Reader::new(&data);
        prop_assert_eq!(r.i64(), Ok(v));
    }

    #[test]
    fn short_buffers_never_panic(data in proptest::collection::vec(any::<u8>(), 0..8)) {
        let mut r = Reader::new(&data);
        prop_assert!(r.i64().is_err());
        prop_assert_eq!(r.x, 0);
    }
}
