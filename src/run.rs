//! Application execution logic.
//!
//! Builds the push client from validated configuration and sends one push.

use pushqueue::config::ValidatedConfig;
use pushqueue::push::{HttpClient, PushClient, PushError, ReqwestClient};
use pushqueue::time::Sleeper;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Sends the configured push with the production transport.
///
/// # Errors
///
/// Returns the [`PushError`] of the final attempt.
pub async fn execute(config: &ValidatedConfig) -> Result<(), PushError> {
    let client = PushClient::new(ReqwestClient::new())
        .with_endpoint(config.endpoint.clone())
        .with_sticky_policy(config.sticky_policy.clone());

    send(&client, config).await
}

/// Sends one push (sticky or not, per config) through the given client.
async fn send<H: HttpClient, S: Sleeper>(
    client: &PushClient<H, S>,
    config: &ValidatedConfig,
) -> Result<(), PushError> {
    let owner = &config.owner;

    if config.sticky {
        client.sticky_push(owner, &config.code, &config.body).await?;
    } else {
        client.push(owner, &config.code, &config.body).await?;
    }

    tracing::info!(code = %config.code, sticky = config.sticky, "Push accepted");
    Ok(())
}
