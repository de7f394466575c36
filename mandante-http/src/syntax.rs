// Copyright (C) 2023 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

//! This module contains HTTP syntax semantics for the parts of a request the
//! client composes itself.
//!
//! # References
//! * [RFC 9110](https://www.rfc-editor.org/rfc/rfc9110.html)

use crate::HttpParseError;

/// Returns whether the value is empty or consists solely of whitespace,
/// including line breaks.
#[inline]
pub fn is_blank(value: &str) -> bool {
    value.chars().all(char::is_whitespace)
}

/// Returns whether the value contains a control character, such as a CR or
/// LF, that would break up a line of the message.
#[inline]
pub fn contains_control_character(value: &str) -> bool {
    value.chars().any(char::is_control)
}

pub fn validate_token(value: &str) -> Result<(), HttpParseError> {
    if value.is_empty() {
        return Err(HttpParseError::TokenEmpty);
    }

    for character in value.bytes() {
        validate_token_character(character)?;
    }

    Ok(())
}

/// Validate a token character.
///
/// ```text
/// tchar          = "!" / "#" / "$" / "%" / "&" / "'" / "*"
///                / "+" / "-" / "." / "^" / "_" / "`" / "|" / "~"
///                / DIGIT / ALPHA
///                ; any VCHAR, except delimiters
/// ```
fn validate_token_character(character: u8) -> Result<(), HttpParseError> {
    match character {
        b' ' | b'\t' => Err(HttpParseError::TokenContainsWhitespace),

        b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*' | b'+' | b'-' | b'.' |
        b'^' | b'_' | b'`' | b'|' | b'~' => Ok(()),

        b'0'..=b'9' => Ok(()),
        b'A'..=b'Z' => Ok(()),
        b'a'..=b'z' => Ok(()),

        b'"' | b'(' | b')' | b',' | b'/' | b':' | b';' | b'<' | b'=' | b'>' |
        b'?' | b'@' | b'[' | b'\\' | b']' | b'{' | b'}' => Err(HttpParseError::TokenContainsDelimiter),

        _ => Err(HttpParseError::TokenContainsNonVisibleAscii),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", true)]
    #[case(" ", true)]
    #[case(" \t ", true)]
    #[case("\r\n", true)]
    #[case("\u{a0}", true)]
    #[case("GET", false)]
    #[case(" GET ", false)]
    fn test_is_blank(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_blank(input), expected);
    }

    #[rstest]
    #[case("GET", false)]
    #[case("GE T", false)]
    #[case("G\rET", true)]
    #[case("GET\n", true)]
    #[case("\0", true)]
    #[case("\u{7f}", true)]
    fn test_contains_control_character(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(contains_control_character(input), expected);
    }

    #[test]
    fn test_validate_token() {
        assert_eq!(validate_token(""), Err(HttpParseError::TokenEmpty));
        assert_eq!(validate_token("hello"), Ok(()));
        assert_eq!(validate_token(" hello"), Err(HttpParseError::TokenContainsWhitespace));
        assert_eq!(validate_token("hello "), Err(HttpParseError::TokenContainsWhitespace));
        assert_eq!(validate_token("hel lo"), Err(HttpParseError::TokenContainsWhitespace));
    }

    #[rstest]
    #[case(b' ', Err(HttpParseError::TokenContainsWhitespace))]
    #[case(b'\t', Err(HttpParseError::TokenContainsWhitespace))]
    #[case(b'!', Ok(()))]
    #[case(b'"', Err(HttpParseError::TokenContainsDelimiter))]
    #[case(0x00, Err(HttpParseError::TokenContainsNonVisibleAscii))]
    #[case(b'~', Ok(()))]
    #[case(0x7F, Err(HttpParseError::TokenContainsNonVisibleAscii))]
    fn test_validate_token_character(#[case] input: u8, #[case] expected: Result<(), HttpParseError>) {
        assert_eq!(validate_token_character(input), expected);
    }
}
