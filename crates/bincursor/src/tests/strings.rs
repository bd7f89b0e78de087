use crate::{CursorOptions, Error, FieldSpec, ReadCursor, Result, Value};

#[test]
fn read_truncates_to_remaining_without_error() {
    let mut reader = ReadCursor::new(b"abcd");
    assert_eq!(reader.read(10), b"abcd");
    assert_eq!(reader.tell(), 4);
    assert_eq!(reader.len(), 0);
    // Exhausted buffers keep returning empty slices, never errors.
    assert_eq!(reader.read(4), b"");
}

#[test]
fn read_from_position_past_end_is_empty() {
    let mut reader = ReadCursor::new(b"abcd");
    reader.set_offset(100);
    assert_eq!(reader.read(2), b"");
    assert_eq!(reader.len(), 0);
    assert_eq!(reader.tell(), 100);
}

#[test]
fn read_at_preserves_position() {
    let mut reader = ReadCursor::new(b"0123456789");
    reader.set_offset(4);
    assert_eq!(reader.read_at(2, 3), b"234");
    assert_eq!(reader.tell(), 4);
}

#[test]
fn read_at_past_end_falls_back_from_current_position() {
    let mut reader = ReadCursor::new(b"0123456789");
    reader.set_offset(4);
    // The fallback offset is total length minus the current position
    // (ten minus four), not anything derived from the requested offset.
    assert_eq!(reader.read_at(11, 4), b"6789");
    assert_eq!(reader.tell(), 4);
}

#[test]
fn read_at_fallback_saturates_at_buffer_start() {
    let mut reader = ReadCursor::new(b"0123456789");
    reader.set_offset(15);
    assert_eq!(reader.read_at(11, 2), b"01");
    assert_eq!(reader.tell(), 15);
}

#[test]
fn read_string_stops_on_terminator() {
    let mut reader = ReadCursor::new(b"HELLO\0WORLD");
    assert_eq!(reader.read_string(), b"HELLO");
    // Position lands on the zero byte itself.
    assert_eq!(reader.tell(), 5);
    reader.skip_bytes(1);
    assert_eq!(reader.read_string(), b"WORLD");
    assert_eq!(reader.tell(), 11);
}

#[test]
fn read_string_at_end_of_buffer_is_empty() {
    let mut reader = ReadCursor::new(b"AB");
    reader.skip_bytes(2);
    assert_eq!(reader.read_string(), b"");
    reader.skip_bytes(10);
    assert_eq!(reader.read_string(), b"");
}

#[test]
fn aligned_string_consumes_full_block_when_already_aligned() {
    // A four-byte string on a four-byte boundary still consumes a full
    // further block: eight bytes total, not four.
    let mut reader = ReadCursor::new(b"abcd\0\0\0\0XYZ");
    assert_eq!(reader.read_aligned_string(), b"abcd");
    assert_eq!(reader.tell(), 8);
    assert_eq!(reader.read(3), b"XYZ");
}

#[test]
fn aligned_string_pads_to_boundary() {
    let mut reader = ReadCursor::new(b"abc\0WXYZ");
    assert_eq!(reader.read_aligned_string(), b"abc");
    assert_eq!(reader.tell(), 4);
    assert_eq!(reader.read(4), b"WXYZ");
}

#[test]
fn aligned_string_keeps_nonzero_padding_bytes() {
    // Padding is whatever bytes follow; only trailing zeros are trimmed.
    let mut reader = ReadCursor::new(b"abcd\0pqrT");
    assert_eq!(reader.read_aligned_string(), b"abcd\0pqr");
    assert_eq!(reader.tell(), 8);
}

#[test]
fn aligned_string_padding_stops_at_end_of_buffer() {
    let mut reader = ReadCursor::new(b"ab\0");
    assert_eq!(reader.read_aligned_string(), b"ab");
    assert_eq!(reader.tell(), 3);
}

#[test]
fn aligned_string_honors_configured_alignment() {
    let options = CursorOptions {
        alignment: 8,
        ..CursorOptions::default()
    };
    let mut reader = ReadCursor::with_options(b"abcdef\0\0QR", options);
    assert_eq!(reader.read_aligned_string(), b"abcdef");
    assert_eq!(reader.tell(), 8);

    let mut reader = ReadCursor::new(b"abcdef\0\0QR");
    assert_eq!(reader.read_aligned_string_to(2), b"abcdef");
    assert_eq!(reader.tell(), 8);
}

#[test]
fn aligned_string_supports_non_power_of_two_alignment() {
    let mut reader = ReadCursor::new(b"abcd\0\0QRS");
    assert_eq!(reader.read_aligned_string_to(3), b"abcd");
    assert_eq!(reader.tell(), 6);
    assert_eq!(reader.read(3), b"QRS");
}

#[test]
fn read_fields_honors_only_first_pair_per_group() {
    let dword = |c: &mut ReadCursor<'_>| c.read_dword().map(Value::Int);
    let cstr =
        |c: &mut ReadCursor<'_>| -> Result<Value> { Ok(Value::from(c.read_dotnet_string())) };

    let specs = [
        FieldSpec::named("size", &dword).and("shadow", &cstr),
        FieldSpec::named("name", &cstr),
    ];
    let mut reader = ReadCursor::new(b"\x04\x03\x02\x01NAME\0");
    let fields = reader.read_fields(&specs).unwrap();

    assert_eq!(fields["size"], Value::Int(0x0102_0304));
    assert_eq!(fields["name"], Value::from(&b"NAME"[..]));
    // The extra pair in the first group is never parsed.
    assert!(!fields.contains_key("shadow"));
    assert_eq!(reader.tell(), 9);
}

#[test]
fn empty_field_group_is_malformed() {
    let mut reader = ReadCursor::new(b"\x01\x02");
    let result = reader.read_fields(&[FieldSpec::default()]);
    assert_eq!(result.unwrap_err(), Error::MalformedFieldSpec);
}
