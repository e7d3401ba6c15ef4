use dirsum::{
    Classification,
    PatternMatcher,
    classify_bytes,
    classify_file,
    load_patterns,
};
use std::fs;
use tempfile::tempdir;
#[test]
fn test_directory_anchored_pattern() {
    let matcher = PatternMatcher::new(["docs/"]);
    assert!(matcher.is_excluded("docs", "docs"));
    assert!(matcher.is_excluded("docs/guide.md", "guide.md"));
    assert!(matcher.is_excluded("docs/nested/deep.md", "deep.md"));
    assert!(!matcher.is_excluded("docs2/file.md", "file.md"));
    assert!(!matcher.is_excluded("mydocs", "mydocs"));
}
#[test]
fn test_basename_wildcard_matches_at_any_depth() {
    let matcher = PatternMatcher::new(["*.log"]);
    assert!(matcher.is_excluded("temp.log", "temp.log"));
    assert!(matcher.is_excluded("a/b/c/temp.log", "temp.log"));
    assert!(!matcher.is_excluded("temp.log.txt", "temp.log.txt"));
}
#[test]
fn test_rooted_path_wildcard() {
    let matcher = PatternMatcher::new(["src/*.rs"]);
    assert!(matcher.is_excluded("src/lib.rs", "lib.rs"));
    assert!(!matcher.is_excluded("lib.rs", "lib.rs"));
}
#[test]
fn test_leading_separator_anchoring() {
    let matcher = PatternMatcher::new(["/build"]);
    assert!(matcher.is_excluded("build", "build"));
    assert!(!matcher.is_excluded("out/build.rs", "build.rs"));
}
#[test]
fn test_separator_convention_independence() {
    let matcher = PatternMatcher::new(["docs\\"]);
    assert!(matcher.is_excluded("docs\\guide.md", "guide.md"));
    assert!(matcher.is_excluded("docs/guide.md", "guide.md"));
}
#[test]
fn test_root_is_never_excluded() {
    let matcher = PatternMatcher::new(["*"]);
    assert!(!matcher.is_excluded("", "project"));
}
#[test]
fn test_blank_and_invalid_patterns_are_skipped() {
    let matcher = PatternMatcher::new(["", "   ", "[unclosed"]);
    assert!(matcher.is_empty());
}
#[test]
fn test_load_patterns_skips_comments_and_blanks() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".sumignore");
    fs::write(&path, "# comment\n\n*.log\n  .venv/  \n").unwrap();
    assert_eq!(load_patterns(&path), vec!["*.log", ".venv/"]);
}
#[test]
fn test_load_patterns_missing_file_is_empty() {
    let dir = tempdir().unwrap();
    assert!(load_patterns(&dir.path().join("nope")).is_empty());
}
#[test]
fn test_null_byte_prefix_is_binary() {
    assert_eq!(classify_bytes(b"\x00\x01\x02"), Classification::Binary);
    assert_eq!(
        classify_bytes(b"some text\x00more text"),
        Classification::Binary
    );
}
#[test]
fn test_null_byte_past_sniff_window_is_not_binary() {
    let mut bytes = vec![b'a'; 2000];
    bytes.push(0);
    assert!(matches!(classify_bytes(&bytes), Classification::Text(_)));
}
#[test]
fn test_utf8_text() {
    assert_eq!(
        classify_bytes("hello world".as_bytes()),
        Classification::Text("hello world".to_owned())
    );
}
#[test]
fn test_shift_jis_fallback_round_trip() {
    let original = "これはShift-JISのテストです。";
    let (bytes, _, _) = encoding_rs::SHIFT_JIS.encode(original);
    match classify_bytes(&bytes) {
        Classification::Text(decoded) => {
            assert_eq!(decoded, original);
            let (reencoded, _, _) = encoding_rs::SHIFT_JIS.encode(&decoded);
            assert_eq!(reencoded, bytes);
        }
        other => panic!("expected Text, got {:?}", other),
    }
}
#[test]
fn test_classify_file_sniffs_prefix_only() {
    let dir = tempdir().unwrap();
    let binary = dir.path().join("bin.dat");
    fs::write(&binary, b"\x00\x01\x02").unwrap();
    assert_eq!(classify_file(&binary), Classification::Binary);

    // A null byte past the sniff window never makes a file binary; the
    // remainder is still read and decoded.
    let late_null = dir.path().join("late.dat");
    let mut bytes = vec![b'a'; 2000];
    bytes.push(0);
    fs::write(&late_null, &bytes).unwrap();
    assert!(matches!(classify_file(&late_null), Classification::Text(_)));
}
#[test]
fn test_classify_file_missing_is_unreadable() {
    let dir = tempdir().unwrap();
    assert_eq!(
        classify_file(&dir.path().join("nope")),
        Classification::Unreadable
    );
}
#[test]
fn test_undecodable_bytes_are_unreadable() {
    assert_eq!(
        classify_bytes(&[0xff, 0xff, 0xff]),
        Classification::Unreadable
    );
}
