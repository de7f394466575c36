// Copyright (C) 2023 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::sync::Arc;

use crate::{
    HeaderMap,
    Method,
    ProtocolParams,
    RequestLine,
    Uri,
};

/// How a request identifies its target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestAddressing {
    /// The request carries a parsed URI and a method. It has no version of
    /// its own; the version comes from the [`ProtocolParams`].
    Uri {
        method: Method,
        uri: Option<Uri>,
    },

    /// The request carries a complete request-line, including a fixed
    /// protocol version. The target hasn't been validated yet.
    RequestLine(RequestLine),
}

/// A request as issued by the caller.
pub trait HttpRequest {
    /// A copy of the headers as they are at the time of the call.
    fn all_headers(&self) -> HeaderMap;

    fn params(&self) -> Arc<ProtocolParams>;

    fn addressing(&self) -> RequestAddressing;
}

/// A request addressed by URI, the common form for requests built by a
/// client application.
#[derive(Clone, Debug)]
pub struct UriRequest {
    pub method: Method,
    pub uri: Option<Uri>,
    pub headers: HeaderMap,
    pub params: Arc<ProtocolParams>,
}

impl UriRequest {
    pub fn new(method: impl Into<Method>, uri: Uri) -> Self {
        Self {
            method: method.into(),
            uri: Some(uri),
            headers: HeaderMap::new(),
            params: Arc::default(),
        }
    }
}

impl HttpRequest for UriRequest {
    fn all_headers(&self) -> HeaderMap {
        self.headers.clone()
    }

    fn params(&self) -> Arc<ProtocolParams> {
        Arc::clone(&self.params)
    }

    fn addressing(&self) -> RequestAddressing {
        RequestAddressing::Uri {
            method: self.method.clone(),
            uri: self.uri.clone(),
        }
    }
}

/// A request addressed by a literal request-line, e.g. one that is forwarded
/// as it was received.
#[derive(Clone, Debug)]
pub struct LineRequest {
    pub request_line: RequestLine,
    pub headers: HeaderMap,
    pub params: Arc<ProtocolParams>,
}

impl LineRequest {
    pub fn new(request_line: RequestLine) -> Self {
        Self {
            request_line,
            headers: HeaderMap::new(),
            params: Arc::default(),
        }
    }
}

impl HttpRequest for LineRequest {
    fn all_headers(&self) -> HeaderMap {
        self.headers.clone()
    }

    fn params(&self) -> Arc<ProtocolParams> {
        Arc::clone(&self.params)
    }

    fn addressing(&self) -> RequestAddressing {
        RequestAddressing::RequestLine(self.request_line.clone())
    }
}
