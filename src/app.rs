//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use pushqueue::config::{ConfigError, field};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - invalid args, missing required fields, etc.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Push error (exit code 2) - transport failure, rejected push, etc.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn push_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Prints a hint for configuration errors the user can fix directly.
pub fn print_config_hint(error: &ConfigError) {
    if let Some(hint) = config_hint(error) {
        eprintln!("\n{hint}");
    }
}

/// Picks the follow-up hint for a configuration error, if one applies.
fn config_hint(error: &ConfigError) -> Option<&'static str> {
    match error {
        ConfigError::MissingRequired { field: f, .. }
            if *f == field::UUID || *f == field::SECRET_KEY =>
        {
            Some(
                "Owner credentials go under [owner] in the config file. \
                 Run 'pushqueue init' to generate a template.",
            )
        }
        ConfigError::MissingRequired { field: f, .. } if *f == field::CODE => Some(
            "Pass --code <CODE>, or set code under [push] in the config file. \
             The code names the push channel registered with the server.",
        ),
        ConfigError::FileRead { .. } => {
            Some("Run 'pushqueue init' to generate a configuration template.")
        }
        ConfigError::InvalidSticky(_) => Some(
            "Check --max-attempts and the [sticky] section: max_attempts >= 1, \
             multiplier > 0, max_delay_ms >= initial_delay_ms.",
        ),
        _ => None,
    }
}

/// Sets up the tracing subscriber for logging.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
