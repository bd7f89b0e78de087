use alloc::vec;

use crate::{Error, WriteCursor};

#[test]
fn seek_then_overwrite_in_place() {
    let mut writer = WriteCursor::from_bytes(b"XXXXXXXX".to_vec());
    writer.write(b"AB");
    assert_eq!(writer.tell(), 2);

    writer.set_offset(6).unwrap();
    // Two bytes overwrite, two append past the end.
    writer.write(b"CDEF");
    assert_eq!(writer.as_bytes(), b"ABXXXXCDEF");
    assert_eq!(writer.tell(), 10);
}

#[test]
fn set_offset_at_or_past_end_is_rejected() {
    let mut writer = WriteCursor::from_bytes(vec![0; 10]);
    assert_eq!(
        writer.set_offset(10),
        Err(Error::OutOfRange {
            offset: 10,
            len: 10
        })
    );
    writer.set_offset(9).unwrap();

    // An empty cursor has no offset to seek to at all.
    let mut empty = WriteCursor::new();
    assert_eq!(empty.set_offset(0), Err(Error::OutOfRange { offset: 0, len: 0 }));
}

#[test]
fn skipped_gap_reads_as_zero() {
    let mut writer = WriteCursor::new();
    writer.write_byte(0xAA);
    writer.skip_bytes(3);
    writer.write_byte(0xBB);
    assert_eq!(writer.into_bytes(), vec![0xAA, 0x00, 0x00, 0x00, 0xBB]);
}

#[test]
fn len_counts_bytes_after_position() {
    let mut writer = WriteCursor::from_bytes(vec![1, 2, 3, 4]);
    assert_eq!(writer.len(), 4);
    writer.write(b"ab");
    assert_eq!(writer.tell(), 2);
    assert_eq!(writer.len(), 2);
    assert_eq!(writer.total_len(), 4);
    writer.write(b"cdef");
    assert_eq!(writer.len(), 0);
    assert_eq!(writer.total_len(), 6);
}

#[test]
fn finalization_yields_accumulated_bytes() {
    let mut writer = WriteCursor::new();
    writer.write_word(0xCAFE);
    writer.write(b"tail");
    let bytes = writer.into_bytes();
    assert_eq!(bytes, b"\xFE\xCAtail");
}
