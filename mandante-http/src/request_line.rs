// Copyright (C) 2023 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt;

use crate::{
    HttpVersion,
    Method,
};

/// The first line of an HTTP/1.x request.
///
/// ```text
/// request-line   = method SP request-target SP HTTP-version
/// ```
///
/// # References
/// * [RFC 9112 Section 3](https://www.rfc-editor.org/rfc/rfc9112.html#name-request-line)
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RequestLine {
    pub method: Method,
    pub target: String,
    pub version: HttpVersion,
}

impl RequestLine {
    pub fn new(method: impl Into<Method>, target: impl Into<String>, version: HttpVersion) -> Self {
        Self {
            method: method.into(),
            target: target.into(),
            version,
        }
    }
}

impl fmt::Display for RequestLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.method, self.target, self.version)
    }
}
