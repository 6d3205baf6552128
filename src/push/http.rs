//! HTTP request/response types and the transport traits.

use std::future::Future;

use super::HttpError;

/// An HTTP request to be sent.
///
/// This is a value type that can be passed to any [`HttpClient`]
/// implementation. It uses standard `http` crate types for method and
/// headers.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method
    pub method: http::Method,
    /// Target URL
    pub url: url::Url,
    /// HTTP headers to send
    pub headers: http::HeaderMap,
    /// Optional request body
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Creates a new HTTP request with the given method and URL.
    ///
    /// Headers are initialized to an empty map and body is `None`.
    #[must_use]
    pub fn new(method: http::Method, url: url::Url) -> Self {
        Self {
            method,
            url,
            headers: http::HeaderMap::new(),
            body: None,
        }
    }

    /// Creates a POST request to the given URL.
    #[must_use]
    pub fn post(url: url::Url) -> Self {
        Self::new(http::Method::POST, url)
    }

    /// Sets the request body.
    #[must_use]
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Adds a header to the request.
    ///
    /// If the header name already exists, the value is appended.
    #[must_use]
    pub fn with_header(mut self, name: http::HeaderName, value: http::HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }
}

/// An HTTP response whose body has not been consumed yet.
#[derive(Debug)]
pub struct HttpResponse<B = BufferedBody> {
    /// HTTP status code
    pub status: http::StatusCode,
    /// Response headers
    pub headers: http::HeaderMap,
    /// Response body stream
    pub body: B,
}

impl<B> HttpResponse<B> {
    /// Creates a new HTTP response.
    #[must_use]
    pub const fn new(status: http::StatusCode, headers: http::HeaderMap, body: B) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Returns true if the status code indicates success (2xx).
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// A response body that must be released once the caller is done with it.
///
/// Callers read the body with [`read_to_end`](Self::read_to_end) and then
/// hand it back through [`release`](Self::release). Taking `self` by value
/// makes a second release impossible.
pub trait ResponseBody: Send + Sized {
    /// Reads the remaining body bytes.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the stream fails mid-read.
    fn read_to_end(&mut self) -> impl Future<Output = Result<Vec<u8>, HttpError>> + Send;

    /// Releases the underlying stream.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Body`] if the stream cannot be closed cleanly.
    fn release(self) -> impl Future<Output = Result<(), HttpError>> + Send;
}

/// A body that is already fully in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferedBody(Vec<u8>);

impl BufferedBody {
    /// Wraps the given bytes.
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }
}

impl ResponseBody for BufferedBody {
    async fn read_to_end(&mut self) -> Result<Vec<u8>, HttpError> {
        Ok(std::mem::take(&mut self.0))
    }

    async fn release(self) -> Result<(), HttpError> {
        Ok(())
    }
}

/// Trait for executing prepared HTTP requests.
///
/// # Design
///
/// This trait abstracts the HTTP client implementation, enabling:
/// - Dependency injection for testing with mock transports
/// - Swapping HTTP libraries without changing calling code
///
/// Implementations must be safe to share between concurrent callers.
///
/// # Example
///
/// ```ignore
/// use pushqueue::push::{BufferedBody, HttpClient, HttpError, HttpRequest, HttpResponse};
///
/// struct StubClient;
///
/// impl HttpClient for StubClient {
///     type Body = BufferedBody;
///
///     async fn request(&self, _req: HttpRequest) -> Result<HttpResponse, HttpError> {
///         Ok(HttpResponse::new(
///             http::StatusCode::OK,
///             http::HeaderMap::new(),
///             BufferedBody::new(r#"{"result":"success"}"#),
///         ))
///     }
/// }
/// ```
pub trait HttpClient: Send + Sync {
    /// Body type of the responses this client produces.
    type Body: ResponseBody;

    /// Sends an HTTP request and returns the response with an unread body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when:
    /// - Network connection fails ([`HttpError::Connection`])
    /// - Request times out ([`HttpError::Timeout`])
    /// - URL is invalid ([`HttpError::InvalidUrl`])
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse<Self::Body>, HttpError>> + Send;
}
