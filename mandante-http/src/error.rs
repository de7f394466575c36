// Copyright (C) 2023 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt;

use strum_macros::AsRefStr;

/// An error that can occur while interpreting textual HTTP elements, such as
/// a method token or an HTTP-version.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, AsRefStr)]
pub enum HttpParseError {
    /// The HTTP version was invalid.
    ///
    /// ## Sytax
    /// The HTTP version must be in the format `HTTP/<digit>.<digit>`, where
    /// `<digit>` is a single digit (0 - 9). `HTTP/2` and `HTTP/3` are
    /// accepted as well.
    ///
    /// ## Examples:
    /// ```text
    /// HTTP/1.
    /// REST/1.1
    /// HTTP/1.1.1
    /// ```
    InvalidHttpVersion,

    TokenContainsDelimiter,
    TokenContainsNonVisibleAscii,
    TokenContainsWhitespace,
    TokenEmpty,
}

impl fmt::Display for HttpParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl std::error::Error for HttpParseError {}

/// The component of a URI reference in which a syntax error was found.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, AsRefStr)]
pub enum UriSyntaxErrorKind {
    /// The reference started with a colon, e.g. `:path`.
    ExpectedSchemeName,

    /// The input ended right after the `//` that introduces an authority,
    /// e.g. `http://`.
    ExpectedAuthority,

    IllegalCharacterInScheme,
    IllegalCharacterInAuthority,
    IllegalCharacterInPath,
    IllegalCharacterInQuery,
    IllegalCharacterInFragment,

    /// A `%` wasn't followed by two hexadecimal digits.
    MalformedEscape,

    /// The port wasn't made up of digits only, e.g. `http://host:8o/`.
    InvalidPort,
}

impl UriSyntaxErrorKind {
    /// A human readable description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::ExpectedSchemeName => "Expected scheme name",
            Self::ExpectedAuthority => "Expected authority",
            Self::IllegalCharacterInScheme => "Illegal character in scheme name",
            Self::IllegalCharacterInAuthority => "Illegal character in authority",
            Self::IllegalCharacterInPath => "Illegal character in path",
            Self::IllegalCharacterInQuery => "Illegal character in query",
            Self::IllegalCharacterInFragment => "Illegal character in fragment",
            Self::MalformedEscape => "Malformed escape pair",
            Self::InvalidPort => "Invalid port number",
        }
    }
}

/// The input could not be parsed as a URI reference.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UriSyntaxError {
    input: String,

    /// Byte offset into `input` where the error was detected.
    index: usize,

    kind: UriSyntaxErrorKind,
}

impl UriSyntaxError {
    pub(crate) fn new(input: &str, index: usize, kind: UriSyntaxErrorKind) -> Self {
        Self {
            input: input.to_owned(),
            index,
            kind,
        }
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn kind(&self) -> UriSyntaxErrorKind {
        self.kind
    }
}

impl fmt::Display for UriSyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at index {}: {}", self.kind.description(), self.index, self.input)
    }
}

impl std::error::Error for UriSyntaxError {}
