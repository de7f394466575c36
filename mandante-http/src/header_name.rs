// Copyright (C) 2023 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{
    fmt,
    hash::{Hash, Hasher},
    mem,
};

use phf::phf_map;
use unicase::UniCase;

/// The name of a request header field. Names are compared case-insensitively:
/// known names map onto their variant and unknown names keep the spelling
/// they were given.
#[derive(Clone, Debug)]
pub enum HeaderName {
    Other(String),
    Accept,
    AcceptCharset,
    AcceptEncoding,
    AcceptLanguage,
    Authorization,
    CacheControl,
    Connection,
    ContentEncoding,
    ContentLength,
    ContentType,
    Cookie,
    Date,
    Expect,
    Forwarded,
    From,
    Host,
    IfMatch,
    IfModifiedSince,
    IfNoneMatch,
    IfRange,
    IfUnmodifiedSince,
    KeepAlive,
    MaxForwards,
    Origin,
    Pragma,
    ProxyAuthorization,
    ProxyConnection,
    Range,
    Referer,
    TE,
    Trailer,
    TransferEncoding,
    Upgrade,
    UserAgent,
    Via,
}

static STRING_TO_HEADER_NAME_MAP: phf::Map<UniCase<&'static str>, HeaderName> = phf_map!(
    UniCase::ascii("accept") => HeaderName::Accept,
    UniCase::ascii("accept-charset") => HeaderName::AcceptCharset,
    UniCase::ascii("accept-encoding") => HeaderName::AcceptEncoding,
    UniCase::ascii("accept-language") => HeaderName::AcceptLanguage,
    UniCase::ascii("authorization") => HeaderName::Authorization,
    UniCase::ascii("cache-control") => HeaderName::CacheControl,
    UniCase::ascii("connection") => HeaderName::Connection,
    UniCase::ascii("content-encoding") => HeaderName::ContentEncoding,
    UniCase::ascii("content-length") => HeaderName::ContentLength,
    UniCase::ascii("content-type") => HeaderName::ContentType,
    UniCase::ascii("cookie") => HeaderName::Cookie,
    UniCase::ascii("date") => HeaderName::Date,
    UniCase::ascii("expect") => HeaderName::Expect,
    UniCase::ascii("forwarded") => HeaderName::Forwarded,
    UniCase::ascii("from") => HeaderName::From,
    UniCase::ascii("host") => HeaderName::Host,
    UniCase::ascii("if-match") => HeaderName::IfMatch,
    UniCase::ascii("if-modified-since") => HeaderName::IfModifiedSince,
    UniCase::ascii("if-none-match") => HeaderName::IfNoneMatch,
    UniCase::ascii("if-range") => HeaderName::IfRange,
    UniCase::ascii("if-unmodified-since") => HeaderName::IfUnmodifiedSince,
    UniCase::ascii("keep-alive") => HeaderName::KeepAlive,
    UniCase::ascii("max-forwards") => HeaderName::MaxForwards,
    UniCase::ascii("origin") => HeaderName::Origin,
    UniCase::ascii("pragma") => HeaderName::Pragma,
    UniCase::ascii("proxy-authorization") => HeaderName::ProxyAuthorization,
    UniCase::ascii("proxy-connection") => HeaderName::ProxyConnection,
    UniCase::ascii("range") => HeaderName::Range,
    UniCase::ascii("referer") => HeaderName::Referer,
    UniCase::ascii("te") => HeaderName::TE,
    UniCase::ascii("trailer") => HeaderName::Trailer,
    UniCase::ascii("transfer-encoding") => HeaderName::TransferEncoding,
    UniCase::ascii("upgrade") => HeaderName::Upgrade,
    UniCase::ascii("user-agent") => HeaderName::UserAgent,
    UniCase::ascii("via") => HeaderName::Via,
);

impl From<String> for HeaderName {
    fn from(value: String) -> Self {
        match STRING_TO_HEADER_NAME_MAP.get(&UniCase::ascii(value.as_str())) {
            Some(header_name) => header_name.clone(),
            None => HeaderName::Other(value),
        }
    }
}

impl From<&str> for HeaderName {
    fn from(value: &str) -> Self {
        match STRING_TO_HEADER_NAME_MAP.get(&UniCase::ascii(value)) {
            Some(header_name) => header_name.clone(),
            None => HeaderName::Other(value.to_string()),
        }
    }
}

impl PartialEq for HeaderName {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (HeaderName::Other(a), HeaderName::Other(b)) => UniCase::ascii(a.as_str()) == UniCase::ascii(b.as_str()),
            _ => mem::discriminant(self) == mem::discriminant(other),
        }
    }
}

impl Eq for HeaderName {}

impl Hash for HeaderName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);
        if let HeaderName::Other(name) = self {
            UniCase::ascii(name.as_str()).hash(state);
        }
    }
}

impl HeaderName {
    #[must_use]
    pub fn to_string_h1(&self) -> &str {
        match self {
            HeaderName::Other(str) => str,

            HeaderName::Accept => "Accept",
            HeaderName::AcceptCharset => "Accept-Charset",
            HeaderName::AcceptEncoding => "Accept-Encoding",
            HeaderName::AcceptLanguage => "Accept-Language",
            HeaderName::Authorization => "Authorization",
            HeaderName::CacheControl => "Cache-Control",
            HeaderName::Connection => "Connection",
            HeaderName::ContentEncoding => "Content-Encoding",
            HeaderName::ContentLength => "Content-Length",
            HeaderName::ContentType => "Content-Type",
            HeaderName::Cookie => "Cookie",
            HeaderName::Date => "Date",
            HeaderName::Expect => "Expect",
            HeaderName::Forwarded => "Forwarded",
            HeaderName::From => "From",
            HeaderName::Host => "Host",
            HeaderName::IfMatch => "If-Match",
            HeaderName::IfModifiedSince => "If-Modified-Since",
            HeaderName::IfNoneMatch => "If-None-Match",
            HeaderName::IfRange => "If-Range",
            HeaderName::IfUnmodifiedSince => "If-Unmodified-Since",
            HeaderName::KeepAlive => "Keep-Alive",
            HeaderName::MaxForwards => "Max-Forwards",
            HeaderName::Origin => "Origin",
            HeaderName::Pragma => "Pragma",
            HeaderName::ProxyAuthorization => "Proxy-Authorization",
            HeaderName::ProxyConnection => "Proxy-Connection",
            HeaderName::Range => "Range",
            HeaderName::Referer => "Referer",
            HeaderName::TE => "TE",
            HeaderName::Trailer => "Trailer",
            HeaderName::TransferEncoding => "Transfer-Encoding",
            HeaderName::Upgrade => "Upgrade",
            HeaderName::UserAgent => "User-Agent",
            HeaderName::Via => "Via",
        }
    }
}

impl fmt::Display for HeaderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_string_h1())
    }
}
