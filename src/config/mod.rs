//! Configuration layer for pushqueue.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments**
//! 2. **TOML config file**
//! 3. **Built-in defaults**
//!
//! `uuid`, `secret_key` and `code` have no default and must come from one of
//! the first two sources.
//!
//! # Boolean Flag Semantics
//!
//! `--sticky` uses OR semantics: if either the CLI flag or `sticky.enabled`
//! is set, sticky mode is on.
//!
//! # CLI-Only vs TOML-Only Options
//!
//! `sticky.max_delay_ms` and `sticky.multiplier` are TOML-only.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;


pub use cli::{Cli, Command};
pub use error::{ConfigError, field};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
