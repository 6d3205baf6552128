//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// pushqueue: send a push notification
///
/// Posts one push to the push service on behalf of an owner, optionally
/// retrying while the service reports the previous push is still pending.
#[derive(Debug, Parser)]
#[command(name = "pushqueue")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Push endpoint URL
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Owner UUID
    #[arg(long)]
    pub uuid: Option<String>,

    /// Owner secret key
    #[arg(long = "secret-key")]
    pub secret_key: Option<String>,

    /// Push code (required for send mode)
    #[arg(long)]
    pub code: Option<String>,

    /// Push body
    #[arg(long)]
    pub body: Option<String>,

    /// Retry while the server reports the previous push is not complete
    #[arg(long)]
    pub sticky: bool,

    /// Maximum number of sticky attempts (default: unbounded)
    #[arg(long = "max-attempts")]
    pub max_attempts: Option<u32>,

    /// Initial delay between sticky attempts in milliseconds
    #[arg(long = "retry-delay-ms")]
    pub retry_delay_ms: Option<u64>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for pushqueue
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "pushqueue.toml")]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }
}
