//! Parser Tests - Error Reporting
//!
//! Malformed trees fail with a categorized error pointing at the offending
//! input.

use porser::{ErrorCode, parse_tree};
use rstest::rstest;

#[rstest]
#[case("", ErrorCode::E0202)]
#[case("(S (NP (N casa))", ErrorCode::E0101)]
#[case("(S (N casa)))", ErrorCode::E0102)]
#[case(")", ErrorCode::E0102)]
#[case("(S (N casa)) (S (N rua))", ErrorCode::E0103)]
#[case("( (N casa))", ErrorCode::E0201)]
#[case("()", ErrorCode::E0201)]
#[case("casa", ErrorCode::E0203)]
fn test_error_codes(#[case] input: &str, #[case] code: ErrorCode) {
    let err = parse_tree(input).unwrap_err();
    assert_eq!(err.code, code, "input {input:?}: {err}");
}

#[test]
fn test_unclosed_points_at_innermost_open_paren() {
    let input = "(S (NP (N casa)";
    let err = parse_tree(input).unwrap_err();

    assert_eq!(u32::from(err.range.start()), input.len() as u32);
    assert!(err.has_related());
    assert_eq!(u32::from(err.related[0].range.start()), 3);
    assert!(err.message.contains("2 unclosed"));
}

#[test]
fn test_missing_tag_reports_what_was_found() {
    let err = parse_tree("(S ((N casa)))").unwrap_err();

    assert_eq!(err.code, ErrorCode::E0201);
    assert!(err.message.contains("'('"), "message: {}", err.message);
    assert!(err.has_hint());
}

#[test]
fn test_display_includes_code_and_range() {
    let err = parse_tree("(S (N casa)))").unwrap_err();
    let shown = err.to_string();

    assert!(shown.starts_with("E0102"), "{shown}");
    assert!(shown.contains("12..13"), "{shown}");
}

#[test]
fn test_format_lists_hint() {
    let err = parse_tree("(S (N casa)))").unwrap_err();
    assert!(err.format().contains("hint: remove the extra ')'"));
}
