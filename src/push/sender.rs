//! Push client: one request/response cycle and the sticky retry loop.

use url::Url;

use crate::time::{Sleeper, TokioSleeper};

use super::request::{build_push_request, default_endpoint};
use super::{
    HttpClient, HttpResponse, Owner, PushError, PushResponse, ResponseBody, StickyPolicy,
};

/// Client for the push endpoint.
///
/// Holds no per-call state: the same client can serve concurrent calls as
/// long as its transport can.
///
/// # Type Parameters
///
/// - `H`: The HTTP transport
/// - `S`: The sleeper used between sticky retries (defaults to [`TokioSleeper`])
///
/// # Example
///
/// ```no_run
/// use pushqueue::push::{Owner, PushClient, ReqwestClient};
///
/// # async fn example() -> Result<(), pushqueue::push::PushError> {
/// let client = PushClient::new(ReqwestClient::new());
/// let owner = Owner::new("6f1c8a52-3d0e-4a44-9b7e-1f2a3b4c5d6e", "secret");
///
/// client.sticky_push(&owner, "alarm", "backup finished").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct PushClient<H, S = TokioSleeper> {
    client: H,
    sleeper: S,
    endpoint: Url,
    sticky_policy: StickyPolicy,
}

impl<H> PushClient<H, TokioSleeper> {
    /// Creates a client for the default endpoint.
    ///
    /// Uses an unbounded, immediate [`StickyPolicy`] and [`TokioSleeper`].
    #[must_use]
    pub fn new(client: H) -> Self {
        Self {
            client,
            sleeper: TokioSleeper,
            endpoint: default_endpoint(),
            sticky_policy: StickyPolicy::default(),
        }
    }
}

impl<H, S> PushClient<H, S> {
    /// Sets a custom sleeper for sticky retry delays.
    #[must_use]
    pub fn with_sleeper<S2>(self, sleeper: S2) -> PushClient<H, S2> {
        PushClient {
            client: self.client,
            sleeper,
            endpoint: self.endpoint,
            sticky_policy: self.sticky_policy,
        }
    }

    /// Sets the push endpoint.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Sets the sticky retry policy.
    #[must_use]
    pub fn with_sticky_policy(mut self, policy: StickyPolicy) -> Self {
        self.sticky_policy = policy;
        self
    }

    /// Returns the configured endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Returns the configured sticky retry policy.
    #[must_use]
    pub const fn sticky_policy(&self) -> &StickyPolicy {
        &self.sticky_policy
    }
}

impl<H: HttpClient, S: Sleeper> PushClient<H, S> {
    /// Sends one push and interprets the reply.
    ///
    /// The HTTP status code is not consulted: the JSON body decides the
    /// outcome.
    ///
    /// # Errors
    ///
    /// - [`PushError::Transport`] if the request fails or the body cannot be read
    /// - [`PushError::Decode`] if the body is not a push reply
    /// - [`PushError::Release`] if the body cannot be released
    /// - [`PushError::Rejected`] if the server refuses the push
    pub async fn push(&self, owner: &Owner, code: &str, body: &str) -> Result<(), PushError> {
        let request = build_push_request(&self.endpoint, owner, code, body);

        tracing::debug!(endpoint = %self.endpoint, uuid = %owner.uuid, code, "Sending push");

        let response = self
            .client
            .request(request)
            .await
            .map_err(PushError::Transport)?;

        tracing::debug!(status = %response.status, "Push response received");

        let reply = read_reply(response).await?;
        reply.into_result().map_err(PushError::from)
    }

    /// Sends a push, retrying while the server reports "not ready".
    ///
    /// Any other outcome is definitive: success returns `Ok(())`, and every
    /// other error is returned unchanged without further attempts. With the
    /// default [`StickyPolicy`] there is no attempt bound and no delay.
    ///
    /// # Errors
    ///
    /// Returns the first non-"not ready" error from [`push`](Self::push), or
    /// [`PushError::NotReadyExhausted`] once a bounded policy runs out of
    /// attempts.
    pub async fn sticky_push(
        &self,
        owner: &Owner,
        code: &str,
        body: &str,
    ) -> Result<(), PushError> {
        let mut attempt: u32 = 0;

        loop {
            attempt = attempt.saturating_add(1);

            let last_error = match self.push(owner, code, body).await {
                Ok(()) => return Ok(()),
                Err(e) => match e.not_ready() {
                    Some(reply) => reply.clone(),
                    None => return Err(e),
                },
            };

            if !self.sticky_policy.should_retry(attempt) {
                return Err(PushError::NotReadyExhausted {
                    attempts: attempt,
                    last_error,
                });
            }

            let delay = self.sticky_policy.delay_for_retry(attempt - 1);
            tracing::debug!(attempt, ?delay, "Push not ready, retrying");

            if !delay.is_zero() {
                self.sleeper.sleep(delay).await;
            }
        }
    }
}

/// Reads, releases and decodes a response body.
///
/// The body is released exactly once. A read failure takes precedence over
/// a decode failure, which takes precedence over a release failure.
async fn read_reply<B: ResponseBody>(
    response: HttpResponse<B>,
) -> Result<PushResponse, PushError> {
    let mut body = response.body;

    let read = body.read_to_end().await;
    let released = body.release().await;

    let bytes = read.map_err(PushError::Transport)?;
    let reply = PushResponse::from_slice(&bytes).map_err(PushError::Decode)?;
    released.map_err(PushError::Release)?;

    Ok(reply)
}

