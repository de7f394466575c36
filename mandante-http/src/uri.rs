// Copyright (C) 2023 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

//! URI references, as used for the target of a request.
//!
//! Characters outside US-ASCII (other than controls and whitespace) are
//! accepted while parsing, so that a URI can be written the way a user typed
//! it. They are percent-encoded as UTF-8 when the URI is rendered for the
//! wire, see [`Uri::to_ascii_string`].
//!
//! # References
//! * [RFC 3986 Section 4.1 URI Reference](https://www.rfc-editor.org/rfc/rfc3986.html#section-4.1)
//! * [RFC 3987 Section 3.1 Mapping of IRIs to URIs](https://www.rfc-editor.org/rfc/rfc3987.html#section-3.1)

use std::{borrow::Cow, fmt, str::FromStr};

use crate::{
    abnf,
    UriSyntaxError,
    UriSyntaxErrorKind,
};

/// A parsed URI reference.
///
/// ```text
/// URI-reference = URI / relative-ref
/// URI           = scheme ":" hier-part [ "?" query ] [ "#" fragment ]
/// relative-ref  = relative-part [ "?" query ] [ "#" fragment ]
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Uri {
    serialization: String,
    scheme: Option<String>,
    authority: Option<String>,
    path: String,
    query: Option<String>,
    fragment: Option<String>,
}

impl Uri {
    pub fn parse(input: &str) -> Result<Self, UriSyntaxError> {
        let mut offset = 0;

        let scheme = match input.find(|c: char| matches!(c, ':' | '/' | '?' | '#')) {
            Some(index) if input.as_bytes()[index] == b':' => {
                validate_scheme(input, &input[..index])?;
                offset = index + 1;
                Some(input[..index].to_owned())
            }
            _ => None,
        };

        let authority = match input[offset..].strip_prefix("//") {
            Some(rest) => {
                let start = offset + 2;
                if rest.is_empty() {
                    return Err(UriSyntaxError::new(input, start, UriSyntaxErrorKind::ExpectedAuthority));
                }

                let end = start + rest.find(|c: char| matches!(c, '/' | '?' | '#')).unwrap_or(rest.len());
                validate_authority(input, start, end)?;
                offset = end;
                Some(input[start..end].to_owned())
            }
            None => None,
        };

        let path_end = offset + input[offset..].find(|c: char| matches!(c, '?' | '#')).unwrap_or(input.len() - offset);
        validate_component(input, offset, path_end, UriSyntaxErrorKind::IllegalCharacterInPath, is_path_character)?;
        let path = input[offset..path_end].to_owned();
        offset = path_end;

        let query = match input[offset..].strip_prefix('?') {
            Some(rest) => {
                let start = offset + 1;
                let end = start + rest.find('#').unwrap_or(rest.len());
                validate_component(input, start, end, UriSyntaxErrorKind::IllegalCharacterInQuery, is_query_character)?;
                offset = end;
                Some(input[start..end].to_owned())
            }
            None => None,
        };

        let fragment = match input[offset..].strip_prefix('#') {
            Some(_) => {
                let start = offset + 1;
                validate_component(input, start, input.len(), UriSyntaxErrorKind::IllegalCharacterInFragment, is_query_character)?;
                Some(input[start..].to_owned())
            }
            None => None,
        };

        Ok(Self {
            serialization: input.to_owned(),
            scheme,
            authority,
            path,
            query,
            fragment,
        })
    }

    /// Returns the URI as it was parsed.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.serialization
    }

    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    #[must_use]
    pub fn authority(&self) -> Option<&str> {
        self.authority.as_deref()
    }

    /// The host of the authority, without user information and port. IP
    /// literals keep their brackets, e.g. `[::1]`.
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        let (host, _) = split_host_port(self.authority.as_deref()?);
        Some(host)
    }

    /// The port of the authority, if present and representable.
    #[must_use]
    pub fn port(&self) -> Option<u16> {
        let (_, port) = split_host_port(self.authority.as_deref()?);
        port?.parse().ok()
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Whether the URI has a scheme, i.e. isn't a relative reference.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.scheme.is_some()
    }

    /// Whether the URI is absolute and its path doesn't start with a slash,
    /// e.g. `mailto:someone@example.com`. Such a URI has no hierarchy to
    /// take an `origin-form` from.
    #[must_use]
    pub fn is_opaque(&self) -> bool {
        self.scheme.is_some() && self.authority.is_none() && !self.path.is_empty() && !self.path.starts_with('/')
    }

    /// The complete URI with every non-ASCII character percent-encoded.
    #[must_use]
    pub fn to_ascii_string(&self) -> String {
        encode_non_ascii(&self.serialization).into_owned()
    }

    /// Renders the URI as the request-target of a request-line, which is the
    /// `origin-form` for hierarchical URIs. An opaque URI is sent whole, in
    /// `absolute-form`. Fragments are never sent.
    ///
    /// ```text
    /// origin-form    = absolute-path [ "?" query ]
    /// absolute-form  = absolute-URI
    /// ```
    ///
    /// # References
    /// * [RFC 9112 Section 3.2.1](https://www.rfc-editor.org/rfc/rfc9112.html#name-origin-form)
    /// * [RFC 9112 Section 3.2.2](https://www.rfc-editor.org/rfc/rfc9112.html#name-absolute-form)
    #[must_use]
    pub fn request_target(&self) -> String {
        let mut target = String::with_capacity(self.serialization.len());

        if let Some(scheme) = self.scheme.as_deref().filter(|_| self.is_opaque()) {
            target.push_str(scheme);
            target.push(':');
            target.push_str(&self.path);
        } else if self.path.is_empty() {
            target.push('/');
        } else {
            target.push_str(&self.path);
        }

        if let Some(query) = &self.query {
            target.push('?');
            target.push_str(query);
        }

        encode_non_ascii(&target).into_owned()
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialization)
    }
}

impl FromStr for Uri {
    type Err = UriSyntaxError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}

impl TryFrom<&str> for Uri {
    type Error = UriSyntaxError;

    fn try_from(input: &str) -> Result<Self, Self::Error> {
        Self::parse(input)
    }
}

/// ```text
/// scheme        = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
/// ```
fn validate_scheme(input: &str, scheme: &str) -> Result<(), UriSyntaxError> {
    let Some(first) = scheme.bytes().next() else {
        return Err(UriSyntaxError::new(input, 0, UriSyntaxErrorKind::ExpectedSchemeName));
    };

    if !abnf::is_alpha(first) {
        return Err(UriSyntaxError::new(input, 0, UriSyntaxErrorKind::IllegalCharacterInScheme));
    }

    let invalid = scheme.bytes()
        .position(|byte| !(abnf::is_alpha(byte) || abnf::is_digit(byte) || matches!(byte, b'+' | b'-' | b'.')));

    match invalid {
        Some(index) => Err(UriSyntaxError::new(input, index, UriSyntaxErrorKind::IllegalCharacterInScheme)),
        None => Ok(()),
    }
}

/// ```text
/// authority     = [ userinfo "@" ] host [ ":" port ]
/// port          = *DIGIT
/// ```
fn validate_authority(input: &str, start: usize, end: usize) -> Result<(), UriSyntaxError> {
    validate_component(input, start, end, UriSyntaxErrorKind::IllegalCharacterInAuthority, is_authority_character)?;

    let authority = &input[start..end];
    let (_, port) = split_host_port(authority);
    if let Some(port) = port {
        let port_start = end - port.len();
        if let Some(index) = port.bytes().position(|byte| !abnf::is_digit(byte)) {
            return Err(UriSyntaxError::new(input, port_start + index, UriSyntaxErrorKind::InvalidPort));
        }
    }

    Ok(())
}

/// Splits `[ userinfo "@" ] host [ ":" port ]` into the host and the port.
fn split_host_port(authority: &str) -> (&str, Option<&str>) {
    let host_port = match authority.rfind('@') {
        Some(index) => &authority[index + 1..],
        None => authority,
    };

    let port_separator = match host_port.rfind(']') {
        Some(bracket) => host_port[bracket..].find(':').map(|index| bracket + index),
        None => host_port.rfind(':'),
    };

    match port_separator {
        Some(index) => (&host_port[..index], Some(&host_port[index + 1..])),
        None => (host_port, None),
    }
}

fn validate_component(
    input: &str,
    start: usize,
    end: usize,
    kind: UriSyntaxErrorKind,
    is_allowed: fn(u8) -> bool,
) -> Result<(), UriSyntaxError> {
    let component = &input[start..end];
    let bytes = component.as_bytes();

    for (index, character) in component.char_indices() {
        if !character.is_ascii() {
            if character.is_control() || character.is_whitespace() {
                return Err(UriSyntaxError::new(input, start + index, kind));
            }
            continue;
        }

        let byte = character as u8;
        if byte == b'%' {
            let is_escape = bytes.len() > index + 2
                && abnf::is_hex_digit(bytes[index + 1])
                && abnf::is_hex_digit(bytes[index + 2]);
            if !is_escape {
                return Err(UriSyntaxError::new(input, start + index, UriSyntaxErrorKind::MalformedEscape));
            }
            continue;
        }

        if !is_allowed(byte) {
            return Err(UriSyntaxError::new(input, start + index, kind));
        }
    }

    Ok(())
}

/// ```text
/// unreserved    = ALPHA / DIGIT / "-" / "." / "_" / "~"
/// sub-delims    = "!" / "$" / "&" / "'" / "(" / ")"
///               / "*" / "+" / "," / ";" / "="
/// pchar         = unreserved / pct-encoded / sub-delims / ":" / "@"
/// ```
fn is_pchar(byte: u8) -> bool {
    abnf::is_alpha(byte)
        || abnf::is_digit(byte)
        || matches!(byte,
            b'-' | b'.' | b'_' | b'~'
            | b'!' | b'$' | b'&' | b'\'' | b'(' | b')' | b'*' | b'+' | b',' | b';' | b'='
            | b':' | b'@')
}

fn is_path_character(byte: u8) -> bool {
    is_pchar(byte) || byte == b'/'
}

/// ```text
/// query         = *( pchar / "/" / "?" )
/// fragment      = *( pchar / "/" / "?" )
/// ```
fn is_query_character(byte: u8) -> bool {
    is_pchar(byte) || byte == b'/' || byte == b'?'
}

fn is_authority_character(byte: u8) -> bool {
    is_pchar(byte) || byte == b'[' || byte == b']'
}

fn encode_non_ascii(input: &str) -> Cow<'_, str> {
    if input.is_ascii() {
        return Cow::Borrowed(input);
    }

    let mut result = String::with_capacity(input.len() * 3);
    let mut buffer = [0; 4];
    for character in input.chars() {
        if character.is_ascii() {
            result.push(character);
        } else {
            result.push_str(&urlencoding::encode(character.encode_utf8(&mut buffer)));
        }
    }

    Cow::Owned(result)
}
