// Copyright (C) 2023 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{fmt, sync::Arc};

use mandante_http::{
    HeaderMap,
    HttpRequest,
    HttpVersion,
    Method,
    ProtocolParams,
    RequestAddressing,
    RequestLine,
    Uri,
};

use crate::Error;

/// A mutable view of a request, used to change the method, target, version
/// and headers of a request while it is being executed, e.g. when following
/// a redirect, without modifying the request the caller issued.
///
/// The headers can be restored to those of the original request using
/// [`RequestWrapper::reset_headers`].
///
/// The wrapper isn't synchronized; it is meant to be owned by the single
/// execution that sends it.
pub struct RequestWrapper<R: HttpRequest + ?Sized> {
    original: Arc<R>,
    headers: HeaderMap,
    params: Arc<ProtocolParams>,
    method: Method,
    uri: Option<Uri>,

    /// The explicit version. If `None`, the version of the `params` is used.
    version: Option<HttpVersion>,

    exec_count: usize,
}

impl<R: HttpRequest + ?Sized> RequestWrapper<R> {
    pub fn new(original: Arc<R>) -> Result<Self, Error> {
        let headers = original.all_headers();
        let params = original.params();

        let (method, uri, version) = match original.addressing() {
            RequestAddressing::Uri { method, uri } => (method, uri, None),
            RequestAddressing::RequestLine(RequestLine { method, target, version }) => {
                let uri = Uri::parse(&target)?;
                (method, Some(uri), Some(version))
            }
        };

        check_method(&method)?;

        #[cfg(feature = "debugging")]
        println!("[RequestWrapper] Wrapped {} {} (version {:?}) with {} headers",
            method,
            uri.as_ref().map_or("/", Uri::as_str),
            version,
            headers.len());

        Ok(Self {
            original,
            headers,
            params,
            method,
            uri,
            version,
            exec_count: 0,
        })
    }

    /// The request this wrapper was created from.
    pub fn original(&self) -> &Arc<R> {
        &self.original
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Changes the method. A method that is empty, only whitespace, or that
    /// contains a control character is rejected. Other methods are taken
    /// as-is.
    pub fn set_method(&mut self, method: impl Into<Method>) -> Result<(), Error> {
        let method = method.into();
        check_method(&method)?;

        self.method = method;
        Ok(())
    }

    pub fn uri(&self) -> Option<&Uri> {
        self.uri.as_ref()
    }

    pub fn set_uri(&mut self, uri: impl Into<Option<Uri>>) {
        self.uri = uri.into();
    }

    /// Returns the explicit version if one is set, otherwise the version of
    /// the protocol parameters.
    pub fn version(&self) -> HttpVersion {
        self.version.unwrap_or_else(|| self.params.protocol_version())
    }

    /// Sets an explicit version; `None` defers to the protocol parameters
    /// again.
    pub fn set_version(&mut self, version: impl Into<Option<HttpVersion>>) {
        self.version = version.into();
    }

    pub fn params(&self) -> &Arc<ProtocolParams> {
        &self.params
    }

    pub fn set_params(&mut self, params: Arc<ProtocolParams>) {
        self.params = params;
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// Composes the request-line from the current method, URI and version.
    /// Without a URI, the target is `/`.
    pub fn request_line(&self) -> RequestLine {
        let target = match &self.uri {
            Some(uri) => uri.request_target(),
            None => String::from("/"),
        };

        RequestLine {
            method: self.method.clone(),
            target,
            version: self.version(),
        }
    }

    /// Replaces the headers by those the original request has now.
    pub fn reset_headers(&mut self) {
        let headers = self.original.all_headers();

        #[cfg(feature = "debugging")]
        println!("[RequestWrapper] Reset headers: {} -> {}", self.headers.len(), headers.len());

        self.headers = headers;
    }

    /// How many times the request has been sent.
    pub fn exec_count(&self) -> usize {
        self.exec_count
    }

    pub fn increment_exec_count(&mut self) {
        self.exec_count += 1;
    }
}

fn check_method(method: &Method) -> Result<(), Error> {
    if method.is_blank() {
        return Err(Error::InvalidArgument("method may not be empty"));
    }

    if method.contains_control_character() {
        return Err(Error::InvalidArgument("method may not contain control characters"));
    }

    Ok(())
}

impl<R: HttpRequest + ?Sized> TryFrom<Option<Arc<R>>> for RequestWrapper<R> {
    type Error = Error;

    fn try_from(original: Option<Arc<R>>) -> Result<Self, Self::Error> {
        match original {
            Some(original) => Self::new(original),
            None => Err(Error::InvalidArgument("HTTP request may not be missing")),
        }
    }
}

/// A wrapper is a request addressed by URI itself, so it can be wrapped
/// again. An explicit version isn't carried over, like for any other
/// request addressed by URI.
impl<R: HttpRequest + ?Sized> HttpRequest for RequestWrapper<R> {
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

impl<R: HttpRequest + ?Sized> fmt::Debug for RequestWrapper<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestWrapper")
            .field("method", &self.method)
            .field("uri", &self.uri)
            .field("version", &self.version)
            .field("headers", &self.headers)
            .field("exec_count", &self.exec_count)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use mandante_http::{HeaderName, HeaderValue, LineRequest, UriRequest, UriSyntaxErrorKind};
    use rstest::rstest;

    use super::*;

    fn uri(input: &str) -> Uri {
        Uri::parse(input).unwrap()
    }

    fn uri_request() -> UriRequest {
        let mut request = UriRequest::new("GET", uri("http://example.com/a"));
        request.headers.append("X", "1");
        request
    }

    /// A request whose headers can change while it is wrapped.
    struct SharedHeadersRequest {
        headers: Mutex<HeaderMap>,
        params: Arc<ProtocolParams>,
    }

    impl HttpRequest for SharedHeadersRequest {
        fn all_headers(&self) -> HeaderMap {
            self.headers.lock().unwrap().clone()
        }

        fn params(&self) -> Arc<ProtocolParams> {
            Arc::clone(&self.params)
        }

        fn addressing(&self) -> RequestAddressing {
            RequestAddressing::Uri { method: Method::Get, uri: Some(uri("/")) }
        }
    }

    #[test]
    fn test_copies_headers_in_order() {
        let mut request = uri_request();
        request.headers.append("Accept", "*/*");
        request.headers.append("X", "2");
        let request = Arc::new(request);

        let wrapper = RequestWrapper::new(Arc::clone(&request)).unwrap();
        assert_eq!(wrapper.headers(), &request.headers);
        assert_eq!(wrapper.exec_count(), 0);
    }

    #[test]
    fn test_header_names_keep_spelling() {
        let mut request = uri_request();
        request.headers.append("X-Request-Id", "1");
        request.headers.append("x-forwarded-for", "10.0.0.1");
        let mut wrapper = RequestWrapper::new(Arc::new(request)).unwrap();
        wrapper.headers_mut().append("X-Retry-Attempt", "2");

        let names: Vec<String> = wrapper.headers().iter()
            .map(|(name, _)| name.to_string())
            .collect();
        assert_eq!(names, ["X", "X-Request-Id", "x-forwarded-for", "X-Retry-Attempt"]);
        assert!(wrapper.headers().contains(&HeaderName::from("x-request-id")));
    }

    #[test]
    fn test_uri_request_keeps_version_dynamic() {
        let mut request = uri_request();
        request.params = Arc::new(ProtocolParams::new().with_version(HttpVersion::Http10));
        let mut wrapper = RequestWrapper::new(Arc::new(request)).unwrap();

        assert_eq!(wrapper.method(), &Method::Get);
        assert_eq!(wrapper.uri(), Some(&uri("http://example.com/a")));
        assert_eq!(wrapper.version(), HttpVersion::Http10);

        wrapper.set_params(Arc::new(ProtocolParams::new().with_version(HttpVersion::Http2)));
        assert_eq!(wrapper.version(), HttpVersion::Http2);
    }

    #[test]
    fn test_line_request_fixes_version() {
        let mut request = LineRequest::new(RequestLine::new("PUT", "/upload?id=4", HttpVersion::Http10));
        request.params = Arc::new(ProtocolParams::new().with_version(HttpVersion::Http11));
        let wrapper = RequestWrapper::new(Arc::new(request)).unwrap();

        assert_eq!(wrapper.method(), &Method::Put);
        assert_eq!(wrapper.uri().map(Uri::as_str), Some("/upload?id=4"));
        assert_eq!(wrapper.version(), HttpVersion::Http10);
    }

    #[rstest]
    #[case("/a b", UriSyntaxErrorKind::IllegalCharacterInPath)]
    #[case(":nothing", UriSyntaxErrorKind::ExpectedSchemeName)]
    #[case("/100%", UriSyntaxErrorKind::MalformedEscape)]
    #[case("http://", UriSyntaxErrorKind::ExpectedAuthority)]
    fn test_line_request_with_malformed_target(#[case] target: &str, #[case] kind: UriSyntaxErrorKind) {
        let request = LineRequest::new(RequestLine::new("GET", target, HttpVersion::Http11));
        match RequestWrapper::new(Arc::new(request)) {
            Err(Error::UriSyntax(error)) => assert_eq!(error.kind(), kind),
            other => panic!("expected a URI syntax error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_original() {
        let result = RequestWrapper::try_from(None::<Arc<UriRequest>>);
        assert!(matches!(result, Err(Error::InvalidArgument(..))));

        let result = RequestWrapper::try_from(Some(Arc::new(uri_request())));
        assert!(result.is_ok());
    }

    #[test]
    fn test_empty_method_in_original() {
        let request = UriRequest::new("", uri("/"));
        assert!(matches!(RequestWrapper::new(Arc::new(request)), Err(Error::InvalidArgument(..))));
    }

    #[rstest]
    #[case("")]
    #[case(" ")]
    #[case("\t ")]
    #[case("\r\n")]
    fn test_set_method_rejects_blank(#[case] method: &str) {
        let mut wrapper = RequestWrapper::new(Arc::new(uri_request())).unwrap();
        assert_eq!(wrapper.set_method(method), Err(Error::InvalidArgument("method may not be empty")));
        assert_eq!(wrapper.method(), &Method::Get);
    }

    #[rstest]
    #[case("G\rET")]
    #[case("GET\r\n")]
    #[case("GET\nHost: evil")]
    fn test_set_method_rejects_control_characters(#[case] method: &str) {
        let mut wrapper = RequestWrapper::new(Arc::new(uri_request())).unwrap();
        assert_eq!(wrapper.set_method(method),
            Err(Error::InvalidArgument("method may not contain control characters")));
        assert_eq!(wrapper.request_line().to_string(), "GET /a HTTP/1.1");
    }

    #[test]
    fn test_control_characters_in_original_method() {
        let request = LineRequest::new(RequestLine::new("G\rET", "/", HttpVersion::Http11));
        assert!(matches!(RequestWrapper::new(Arc::new(request)), Err(Error::InvalidArgument(..))));
    }

    #[test]
    fn test_mutation_does_not_touch_original() {
        let request = Arc::new(uri_request());
        let mut wrapper = RequestWrapper::new(Arc::clone(&request)).unwrap();

        wrapper.set_method("POST").unwrap();
        wrapper.set_uri(uri("http://example.com/b"));
        wrapper.set_version(HttpVersion::Http10);
        wrapper.headers_mut().append("Y", "2");
        wrapper.headers_mut().remove(&HeaderName::from("X"));

        assert_eq!(request.method, Method::Get);
        assert_eq!(request.uri, Some(uri("http://example.com/a")));
        assert_eq!(request.headers.get(&HeaderName::from("x")), Some(&HeaderValue::from("1")));
        assert_eq!(request.headers.len(), 1);
    }

    #[rstest]
    #[case(None, "/")]
    #[case(Some("http://h/p?q"), "/p?q")]
    #[case(Some("http://example.com"), "/")]
    #[case(Some("https://example.com/caf\u{e9}#menu"), "/caf%C3%A9")]
    #[case(Some("*"), "*")]
    #[case(Some("mailto:a@b"), "mailto:a@b")]
    fn test_request_line_target(#[case] input: Option<&str>, #[case] expected: &str) {
        let mut wrapper = RequestWrapper::new(Arc::new(uri_request())).unwrap();
        wrapper.set_uri(input.map(uri));
        assert_eq!(wrapper.request_line().target, expected);
    }

    #[test]
    fn test_request_line_is_recomputed() {
        let mut wrapper = RequestWrapper::new(Arc::new(uri_request())).unwrap();
        assert_eq!(wrapper.request_line().to_string(), "GET /a HTTP/1.1");

        wrapper.set_method("HEAD").unwrap();
        wrapper.set_uri(None);
        wrapper.set_version(HttpVersion::Http10);
        assert_eq!(wrapper.request_line().to_string(), "HEAD / HTTP/1.0");
    }

    #[test]
    fn test_version_explicit_and_dynamic() {
        let mut wrapper = RequestWrapper::new(Arc::new(uri_request())).unwrap();
        assert_eq!(wrapper.version(), wrapper.params().protocol_version());

        wrapper.set_version(HttpVersion::Http2);
        assert_eq!(wrapper.version(), HttpVersion::Http2);

        wrapper.set_version(None);
        assert_eq!(wrapper.version(), HttpVersion::Http11);
    }

    #[test]
    fn test_reset_headers_rereads_original() {
        let original = Arc::new(SharedHeadersRequest {
            headers: Mutex::new(HeaderMap::new_with_vec(vec![(HeaderName::from("X"), HeaderValue::from("1"))])),
            params: Arc::default(),
        });

        let mut wrapper = RequestWrapper::new(Arc::clone(&original)).unwrap();
        wrapper.headers_mut().set("X", "changed");

        original.headers.lock().unwrap().append("Z", "3");
        assert_eq!(wrapper.headers().len(), 1, "the wrapper holds its own copy");

        wrapper.reset_headers();
        assert_eq!(wrapper.headers(), &original.all_headers());
        assert_eq!(wrapper.headers().len(), 2);
    }

    #[test]
    fn test_reset_headers_keeps_request_line() {
        let mut wrapper = RequestWrapper::new(Arc::new(uri_request())).unwrap();
        wrapper.set_method("POST").unwrap();
        wrapper.set_uri(uri("http://example.com/b"));
        wrapper.set_version(HttpVersion::Http10);
        wrapper.increment_exec_count();
        wrapper.headers_mut().clear();

        wrapper.reset_headers();

        assert_eq!(wrapper.request_line(), RequestLine::new("POST", "/b", HttpVersion::Http10));
        assert_eq!(wrapper.exec_count(), 1);
        assert_eq!(wrapper.headers().len(), 1);
    }

    #[test]
    fn test_wrap_a_wrapper() {
        let mut inner = RequestWrapper::new(Arc::new(uri_request())).unwrap();
        inner.set_method("DELETE").unwrap();
        inner.set_version(HttpVersion::Http10);
        inner.headers_mut().append("Y", "2");

        let inner = Arc::new(inner);
        let mut outer = RequestWrapper::new(Arc::clone(&inner)).unwrap();
        assert_eq!(outer.method(), &Method::Delete);
        assert_eq!(outer.version(), HttpVersion::Http11);
        assert_eq!(outer.headers().len(), 2);

        outer.headers_mut().clear();
        outer.reset_headers();
        assert_eq!(outer.headers(), inner.headers());
    }

    #[test]
    fn test_dyn_original() {
        let original: Arc<dyn HttpRequest> = Arc::new(uri_request());
        let wrapper = RequestWrapper::new(original).unwrap();
        assert_eq!(wrapper.request_line().to_string(), "GET /a HTTP/1.1");
        assert!(format!("{wrapper:?}").starts_with("RequestWrapper {"));
    }
}
