//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use url::Url;

use crate::push::{Owner, StickyPolicy};

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Push endpoint
    pub endpoint: Url,

    /// Owner credentials (required)
    pub owner: Owner,

    /// Push code (required)
    pub code: String,

    /// Push body
    pub body: String,

    /// Whether to retry while the server reports "not ready"
    pub sticky: bool,

    /// Sticky retry policy, used only when `sticky` is set
    pub sticky_policy: StickyPolicy,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let attempts = self
            .sticky_policy
            .max_attempts
            .map_or_else(|| "unbounded".to_string(), |n| n.to_string());

        write!(
            f,
            "Config {{ endpoint: {}, uuid: {}, code: {}, sticky: {}, attempts: {}, delay: {}ms }}",
            self.endpoint,
            self.owner.uuid,
            self.code,
            self.sticky,
            attempts,
            self.sticky_policy.initial_delay.as_millis(),
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required fields are missing (`uuid`, `secret_key`, `code`)
    /// - The endpoint URL is invalid
    /// - Sticky settings are out of range
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let endpoint = Self::resolve_endpoint(cli, toml)?;
        let owner = Self::resolve_owner(cli, toml)?;

        let code = cli
            .code
            .clone()
            .or_else(|| toml.and_then(|t| t.push.code.clone()))
            .ok_or_else(|| {
                ConfigError::missing(field::CODE, "Use --code or set push.code in config file")
            })?;

        let body = cli
            .body
            .clone()
            .or_else(|| toml.and_then(|t| t.push.body.clone()))
            .unwrap_or_else(|| defaults::BODY.to_string());

        // Flags only enable
        let sticky = cli.sticky || toml.is_some_and(|t| t.sticky.enabled);

        let sticky_policy = Self::build_sticky_policy(cli, toml)?;

        Ok(Self {
            endpoint,
            owner,
            code,
            body,
            sticky,
            sticky_policy,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_endpoint(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Url, ConfigError> {
        let url_str = cli
            .endpoint
            .as_deref()
            .or_else(|| toml.and_then(|t| t.push.endpoint.as_deref()))
            .unwrap_or(defaults::ENDPOINT);

        let url = Url::parse(url_str).map_err(|e| ConfigError::InvalidUrl {
            url: url_str.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl {
                url: url_str.to_string(),
                reason: "scheme must be http or https".to_string(),
            });
        }

        Ok(url)
    }

    fn resolve_owner(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Owner, ConfigError> {
        let uuid = cli
            .uuid
            .as_deref()
            .or_else(|| toml.and_then(|t| t.owner.uuid.as_deref()))
            .ok_or_else(|| {
                ConfigError::missing(field::UUID, "Use --uuid or set owner.uuid in config file")
            })?;

        let secret_key = cli
            .secret_key
            .as_deref()
            .or_else(|| toml.and_then(|t| t.owner.secret_key.as_deref()))
            .ok_or_else(|| {
                ConfigError::missing(
                    field::SECRET_KEY,
                    "Use --secret-key or set owner.secret_key in config file",
                )
            })?;

        Ok(Owner::new(uuid, secret_key))
    }

    fn build_sticky_policy(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<StickyPolicy, ConfigError> {
        let sticky = toml.map(|t| &t.sticky);

        // Priority: CLI explicit > TOML > default
        let max_attempts = cli
            .max_attempts
            .or_else(|| sticky.and_then(|s| s.max_attempts));

        let initial_delay_ms = cli
            .retry_delay_ms
            .or_else(|| sticky.and_then(|s| s.initial_delay_ms))
            .unwrap_or(0);

        let max_delay_ms = sticky
            .and_then(|s| s.max_delay_ms)
            .unwrap_or(defaults::STICKY_MAX_DELAY_MS);

        let multiplier = sticky
            .and_then(|s| s.multiplier)
            .unwrap_or(defaults::STICKY_MULTIPLIER);

        if max_attempts == Some(0) {
            return Err(ConfigError::InvalidSticky(
                "max_attempts must be greater than 0".to_string(),
            ));
        }

        if multiplier <= 0.0 || !multiplier.is_finite() {
            return Err(ConfigError::InvalidSticky(
                "multiplier must be a positive finite number".to_string(),
            ));
        }

        if max_delay_ms < initial_delay_ms {
            return Err(ConfigError::InvalidSticky(format!(
                "max_delay_ms ({max_delay_ms}) must be >= initial_delay_ms ({initial_delay_ms})"
            )));
        }

        let policy = StickyPolicy::new()
            .with_initial_delay(Duration::from_millis(initial_delay_ms))
            .with_max_delay(Duration::from_millis(max_delay_ms))
            .with_multiplier(multiplier);

        Ok(match max_attempts {
            Some(n) => policy.with_max_attempts(n),
            None => policy,
        })
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
