//! Production HTTP transport using reqwest.

use std::future::Future;

use super::{HttpClient, HttpError, HttpRequest, HttpResponse, ResponseBody};

/// Production HTTP client using reqwest.
///
/// This is a thin wrapper around `reqwest::Client` that implements
/// the [`HttpClient`] trait. It inherits reqwest's default configuration,
/// including connection pooling; timeouts and TLS policy are whatever the
/// wrapped client was built with.
///
/// # Example
///
/// ```no_run
/// use pushqueue::push::{HttpClient, HttpRequest, ReqwestClient};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ReqwestClient::new();
/// let url = Url::parse("http://push.example.com/api/push")?;
/// let response = client.request(HttpRequest::post(url)).await?;
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a new HTTP client with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }

    /// Creates an HTTP client from an existing reqwest client.
    ///
    /// Useful when you need custom configuration (timeouts, TLS, etc.).
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { inner: client }
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for ReqwestClient {
    type Body = ReqwestBody;

    async fn request(&self, req: HttpRequest) -> Result<HttpResponse<ReqwestBody>, HttpError> {
        let mut builder = self.inner.request(req.method, req.url.as_str());

        for (name, value) in &req.headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else if e.is_builder() {
                HttpError::InvalidUrl(e.to_string())
            } else {
                HttpError::Connection(Box::new(e))
            }
        })?;

        let status = response.status();
        let headers = response.headers().clone();

        Ok(HttpResponse::new(
            status,
            headers,
            ReqwestBody {
                response: Some(response),
            },
        ))
    }
}

/// Streaming body of a reqwest response.
///
/// The connection goes back to the pool once the body has been read in
/// full, or is closed when the body is released early.
#[derive(Debug)]
pub struct ReqwestBody {
    response: Option<reqwest::Response>,
}

impl ResponseBody for ReqwestBody {
    async fn read_to_end(&mut self) -> Result<Vec<u8>, HttpError> {
        let Some(response) = self.response.take() else {
            return Ok(Vec::new());
        };

        let bytes = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else {
                HttpError::Body(Box::new(e))
            }
        })?;

        Ok(bytes.to_vec())
    }

    fn release(self) -> impl Future<Output = Result<(), HttpError>> + Send {
        drop(self.response);
        std::future::ready(Ok(()))
    }
}
