//! Tests for error construction and display.

use vdiff::{ParseError, VdiffError};

#[test]
fn file_not_found_message() {
    let err = ParseError::file_not_found("expected.json");
    assert_eq!(err.to_string(), "File not found: expected.json");
}

#[test]
fn read_error_chains_source() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err = ParseError::read_error("actual.yaml", io);
    let text = err.to_string();
    assert!(text.contains("actual.yaml"));
    assert!(text.contains("denied"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn unknown_format_message() {
    let err = ParseError::unknown_format("blob.bin");
    assert!(err.to_string().contains("Could not detect input format"));
}

#[test]
fn top_level_error_wraps_parse_errors_transparently() {
    let err: VdiffError = ParseError::file_not_found("x.json").into();
    assert_eq!(err.to_string(), "File not found: x.json");
    assert!(matches!(err, VdiffError::Parse(_)));
}
