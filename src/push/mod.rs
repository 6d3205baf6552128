//! Push layer: credentials, request construction, reply decoding and the client.
//!
//! This module provides types and traits for:
//! - Owner credentials and request building ([`Owner`], [`build_push_request`])
//! - Decoding server replies ([`PushResponse`], [`ProtocolError`], [`PushStatus`])
//! - Abstracting HTTP transports ([`HttpClient`], [`ResponseBody`])
//! - Production transport implementation ([`ReqwestClient`])
//! - Sending pushes with sticky retry ([`PushClient`], [`StickyPolicy`])

mod client;
mod error;
mod http;
mod request;
mod response;
mod sender;
mod status;
mod sticky;

#[cfg(test)]
mod client_tests;
#[cfg(test)]
mod sticky_tests;

pub use client::{ReqwestBody, ReqwestClient};
pub use error::{HttpError, PushError};
pub use http::{BufferedBody, HttpClient, HttpRequest, HttpResponse, ResponseBody};
pub use request::{DEFAULT_ENDPOINT, Owner, build_push_request, default_endpoint, field};
pub use response::{ProtocolError, PushResponse};
pub use sender::PushClient;
pub use status::PushStatus;
pub use sticky::StickyPolicy;
