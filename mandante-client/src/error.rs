// Copyright (C) 2023 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt;

use mandante_http::UriSyntaxError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The caller passed an argument that can never be valid, such as a
    /// missing request or an empty method.
    InvalidArgument(&'static str),

    /// The request-line of the original request contained a target that
    /// isn't a URI reference.
    UriSyntax(UriSyntaxError),
}

impl From<UriSyntaxError> for Error {
    fn from(error: UriSyntaxError) -> Self {
        Error::UriSyntax(error)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(message) => write!(f, "invalid argument: {message}"),
            Error::UriSyntax(error) => write!(f, "invalid request target: {error}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidArgument(..) => None,
            Error::UriSyntax(error) => Some(error),
        }
    }
}
