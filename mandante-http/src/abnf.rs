// Copyright (C) 2023 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

//! Core rules of Augmented BNF (ABNF), shared by the HTTP and URI grammars.
//!
//! # References
//! * [RFC 5234 Appendix B.1 Core Rules](https://www.rfc-editor.org/rfc/rfc5234.html#appendix-B.1)

/// ```text
/// ALPHA          =  %x41-5A / %x61-7A   ; A-Z / a-z
/// ```
#[inline]
pub fn is_alpha(byte: u8) -> bool {
    byte.is_ascii_alphabetic()
}

/// ```text
/// DIGIT          =  %x30-39
/// ```
#[inline]
pub fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// Case-insensitive, as URIs allow lowercase hexadecimal digits in
/// percent-encodings.
///
/// ```text
/// HEXDIG         =  DIGIT / "A" / "B" / "C" / "D" / "E" / "F"
/// ```
#[inline]
pub fn is_hex_digit(byte: u8) -> bool {
    byte.is_ascii_hexdigit()
}
