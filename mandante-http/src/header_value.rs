// Copyright (C) 2023 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{fmt, sync::Arc};

/// Represents a value of a header.
///
/// Values that are shared between many requests (e.g. a `User-Agent` taken
/// from the protocol parameters) can be kept as [`HeaderValue::SharedString`]
/// so copying a header set doesn't copy the text itself.
#[derive(Clone, Debug, Eq)]
pub enum HeaderValue {
    SharedString(Arc<str>),
    StaticString(&'static str),
    String(String),
    Size(usize),
}

impl HeaderValue {
    /// Returns the value as a string, but does not convert it to a string if
    /// it is some other non-convertible type.
    #[must_use]
    pub fn as_str_no_convert(&self) -> Option<&str> {
        match self {
            HeaderValue::StaticString(string) => Some(string),
            HeaderValue::SharedString(string) => Some(string.as_ref()),
            HeaderValue::String(string) => Some(string),
            HeaderValue::Size(..) => None,
        }
    }
}

impl fmt::Display for HeaderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderValue::Size(size) => write!(f, "{size}"),
            _ => f.write_str(self.as_str_no_convert().unwrap_or_default()),
        }
    }
}

/// Values are equal when their textual forms are, regardless of how they are
/// stored, so `Size(2)` equals `StaticString("2")`.
impl PartialEq for HeaderValue {
    fn eq(&self, other: &Self) -> bool {
        match (self.as_str_no_convert(), other.as_str_no_convert()) {
            (Some(a), Some(b)) => a == b,
            _ => self.to_string() == other.to_string(),
        }
    }
}

impl From<&'static str> for HeaderValue {
    fn from(value: &'static str) -> Self {
        Self::StaticString(value)
    }
}

impl From<String> for HeaderValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Arc<str>> for HeaderValue {
    fn from(value: Arc<str>) -> Self {
        Self::SharedString(value)
    }
}

impl From<usize> for HeaderValue {
    fn from(value: usize) -> Self {
        Self::Size(value)
    }
}
