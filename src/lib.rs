//! pushqueue: push notification client
//!
//! A library for sending form-encoded push requests on behalf of an owner
//! credential, with an optional "sticky" mode that keeps retrying while the
//! server reports the previous push has not completed.

pub mod config;
pub mod push;
pub mod time;
