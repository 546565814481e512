use std::path::Path;

use super::*;
use tempfile::TempDir;

#[test]
fn split_keeps_lf_terminators() {
    assert_eq!(split_lines("a\nb\n"), vec!["a\n", "b\n"]);
}

#[test]
fn split_keeps_crlf_as_one_terminator() {
    assert_eq!(split_lines("a\r\nb\n"), vec!["a\r\n", "b\n"]);
}

#[test]
fn split_treats_lone_cr_as_terminator() {
    assert_eq!(split_lines("a\rb\n"), vec!["a\r", "b\n"]);
    assert_eq!(split_lines("LF\nCR\r"), vec!["LF\n", "CR\r"]);
}

#[test]
fn split_keeps_unterminated_last_line() {
    assert_eq!(split_lines("a\nb"), vec!["a\n", "b"]);
}

#[test]
fn split_empty_text_has_no_lines() {
    assert!(split_lines("").is_empty());
}

#[test]
fn split_blank_lines_are_preserved() {
    assert_eq!(split_lines("\n\n\n"), vec!["\n", "\n", "\n"]);
}

#[test]
fn split_handles_multibyte_text() {
    assert_eq!(
        split_lines("全角スペース\u{3000}\r\n改行"),
        vec!["全角スペース\u{3000}\r\n", "改行"]
    );
}

#[test]
fn display_name_is_base_name() {
    assert_eq!(display_name(Path::new("docs/nested/guide.adoc")), "guide.adoc");
}

#[test]
fn display_name_falls_back_to_full_path() {
    assert_eq!(display_name(Path::new("/")), "/");
}

#[test]
fn document_text_decodes_utf8() {
    let doc = Document::new("a.adoc", "文字列\n".as_bytes().to_vec());
    assert_eq!(doc.text(), Some("文字列\n"));
}

#[test]
fn document_text_rejects_invalid_utf8() {
    let doc = Document::new("a.adoc", vec![0x95, 0xb6, 0x8e, 0x9a]);
    assert_eq!(doc.text(), None);
}

#[test]
fn document_read_uses_base_name() {
    let temp_dir = TempDir::new().unwrap();
    let sub_dir = temp_dir.path().join("chapter");
    std::fs::create_dir(&sub_dir).unwrap();
    let path = sub_dir.join("intro.adoc");
    std::fs::write(&path, "= Intro\n").unwrap();

    let doc = Document::read(&path).unwrap();
    assert_eq!(doc.name(), "intro.adoc");
    assert_eq!(doc.bytes(), b"= Intro\n");
}

#[test]
fn document_read_missing_file_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.adoc");

    let err = Document::read(&path).unwrap_err();
    assert!(matches!(err, AdocGuardError::FileRead { .. }));
}
