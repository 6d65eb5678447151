use super::*;

#[test]
fn empty_blob_yields_no_tokens() {
    assert!(split_args("").is_empty());
    assert!(split_args("   ").is_empty());
    assert!(split_args("\t \t").is_empty());
}

#[test]
fn single_token_is_trimmed() {
    assert_eq!(split_args("hello"), ["hello"]);
    assert_eq!(split_args("  hello  "), ["hello"]);
}

#[test]
fn tokens_split_on_comma_and_trim() {
    assert_eq!(split_args("a,b,c"), ["a", "b", "c"]);
    assert_eq!(split_args(" a , b , c "), ["a", "b", "c"]);
}

#[test]
fn separators_preserve_empty_tokens() {
    // A lone comma is two empty tokens, not zero.
    assert_eq!(split_args(","), ["", ""]);
    assert_eq!(split_args("a,,b"), ["a", "", "b"]);
    assert_eq!(split_args("a,"), ["a", ""]);
    assert_eq!(split_args(" , "), ["", ""]);
}

#[test]
fn interior_whitespace_is_kept() {
    assert_eq!(split_args("hello world, foo bar"), ["hello world", "foo bar"]);
}

#[test]
fn parse_index_accepts_surrounding_whitespace() {
    assert_eq!(parse_index("42"), Some(42));
    assert_eq!(parse_index(" 42 "), Some(42));
    assert_eq!(parse_index("0"), Some(0));
}

#[test]
fn parse_index_rejects_non_numeric_text() {
    assert_eq!(parse_index(""), None);
    assert_eq!(parse_index("   "), None);
    assert_eq!(parse_index("abc"), None);
    assert_eq!(parse_index("4x"), None);
    assert_eq!(parse_index("1.5"), None);
}

#[test]
fn parse_index_rejects_negative_values() {
    assert_eq!(parse_index("-1"), None);
    assert_eq!(parse_index("-0"), None);
}
