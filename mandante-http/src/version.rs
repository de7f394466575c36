// Copyright (C) 2023 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{fmt, str::FromStr};

use crate::HttpParseError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HttpVersion {
    Http09,
    Http10,
    Http11,
    Http2,
    Http3,
}

impl HttpVersion {
    /// Formats the [`HttpVersion`] to a HTTP-Version, as specified by RFC 9112.
    ///
    /// # References
    /// * [RFC 9112 Section 2.3](https://www.rfc-editor.org/rfc/rfc9112.html#name-http-version)
    pub fn to_http_version(&self) -> &'static str {
        match self {
            Self::Http09 => "HTTP/0.9",
            Self::Http10 => "HTTP/1.0",
            Self::Http11 => "HTTP/1.1",
            Self::Http2 => "HTTP/2.0",
            Self::Http3 => "HTTP/3.0",
        }
    }
}

impl fmt::Display for HttpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_http_version())
    }
}

impl FromStr for HttpVersion {
    type Err = HttpParseError;

    /// ```text
    /// HTTP-version  = HTTP-name "/" DIGIT "." DIGIT
    /// HTTP-name     = %s"HTTP"
    /// ```
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let Some(version) = input.strip_prefix("HTTP/") else {
            return Err(HttpParseError::InvalidHttpVersion);
        };

        match version {
            "0.9" => Ok(Self::Http09),
            "1.0" => Ok(Self::Http10),
            "1.1" => Ok(Self::Http11),
            "2" | "2.0" => Ok(Self::Http2),
            "3" | "3.0" => Ok(Self::Http3),
            _ => Err(HttpParseError::InvalidHttpVersion),
        }
    }
}
