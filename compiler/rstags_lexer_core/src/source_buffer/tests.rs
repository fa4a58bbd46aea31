use super::*;
use crate::CharSource;

// === Construction ===

#[test]
fn empty_source() {
    let buf = SourceBuffer::new("");
    assert_eq!(buf.len(), 0);
    assert!(buf.is_empty());
    assert!(buf.as_bytes().is_empty());
    assert!(!buf.has_bom());
}

#[test]
fn ascii_source() {
    let buf = SourceBuffer::new("hello");
    assert_eq!(buf.len(), 5);
    assert!(!buf.is_empty());
    assert_eq!(buf.as_bytes(), b"hello");
}

#[test]
fn utf8_multibyte_source() {
    let source = "let caf\u{e9} = 1";
    let buf = SourceBuffer::new(source);
    assert_eq!(buf.len() as usize, source.len());
    assert_eq!(buf.as_bytes(), source.as_bytes());
}

#[test]
fn non_utf8_bytes_are_kept() {
    let buf = SourceBuffer::from_bytes(vec![b'a', 0xFF, b'b']);
    assert_eq!(buf.as_bytes(), &[b'a', 0xFF, b'b']);
}

// === Byte Order Mark ===

#[test]
fn bom_is_detected() {
    let buf = SourceBuffer::from_bytes(b"\xEF\xBB\xBFfn".to_vec());
    assert!(buf.has_bom());
    assert_eq!(buf.len(), 5);
}

#[test]
fn bom_is_skipped_by_reader() {
    let buf = SourceBuffer::from_bytes(b"\xEF\xBB\xBFfn".to_vec());
    let mut reader = buf.reader();
    assert_eq!(reader.next_char(), Some(b'f'));
    // Offsets still count the BOM.
    assert_eq!(reader.position(), 3);
    assert_eq!(reader.line(), 1);
}

#[test]
fn partial_bom_is_content() {
    let buf = SourceBuffer::from_bytes(vec![0xEF, 0xBB, b'x']);
    assert!(!buf.has_bom());
    assert_eq!(buf.reader().next_char(), Some(0xEF));
}
