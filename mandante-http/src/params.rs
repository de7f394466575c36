// Copyright (C) 2023 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::sync::Arc;

use crate::HttpVersion;

/// The version used when neither a request nor any of its parameters
/// specify one.
pub const DEFAULT_PROTOCOL_VERSION: HttpVersion = HttpVersion::Http11;

/// Protocol parameters negotiated for a request, such as the HTTP version to
/// use when the request doesn't fix one itself.
///
/// Unset values are looked up in the `defaults`, which allows a client-wide
/// set of parameters to be shared by all requests, with per-request
/// overrides on top.
#[derive(Clone, Debug, Default)]
pub struct ProtocolParams {
    /// The version requests are sent with, unless set on the request.
    pub version: Option<HttpVersion>,

    /// The value of the `User-Agent` header.
    pub user_agent: Option<Arc<str>>,

    /// The charset of the request body, when not given by the `Content-Type`.
    pub content_charset: Option<Arc<str>>,

    pub defaults: Option<Arc<ProtocolParams>>,
}

impl ProtocolParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_version(mut self, version: HttpVersion) -> Self {
        self.version = Some(version);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<Arc<str>>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_content_charset(mut self, charset: impl Into<Arc<str>>) -> Self {
        self.content_charset = Some(charset.into());
        self
    }

    pub fn with_defaults(mut self, defaults: Arc<ProtocolParams>) -> Self {
        self.defaults = Some(defaults);
        self
    }

    /// Resolves the protocol version, falling back to the defaults and at
    /// last to [`DEFAULT_PROTOCOL_VERSION`].
    #[must_use]
    pub fn protocol_version(&self) -> HttpVersion {
        self.lookup(|params| params.version)
            .unwrap_or(DEFAULT_PROTOCOL_VERSION)
    }

    #[must_use]
    pub fn user_agent(&self) -> Option<Arc<str>> {
        self.lookup(|params| params.user_agent.clone())
    }

    #[must_use]
    pub fn content_charset(&self) -> Option<Arc<str>> {
        self.lookup(|params| params.content_charset.clone())
    }

    fn lookup<T>(&self, get: impl Fn(&ProtocolParams) -> Option<T>) -> Option<T> {
        let mut params = Some(self);
        while let Some(current) = params {
            if let Some(value) = get(current) {
                return Some(value);
            }
            params = current.defaults.as_deref();
        }
        None
    }
}
