//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Push endpoint and payload section
    #[serde(default)]
    pub push: PushSection,

    /// Owner credentials section
    #[serde(default)]
    pub owner: OwnerSection,

    /// Sticky retry section
    #[serde(default)]
    pub sticky: StickySection,
}

/// Push endpoint and payload section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PushSection {
    /// Push endpoint URL
    pub endpoint: Option<String>,

    /// Default push code
    pub code: Option<String>,

    /// Default push body
    pub body: Option<String>,
}

/// Owner credentials section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OwnerSection {
    /// Owner UUID
    pub uuid: Option<String>,

    /// Owner secret key
    pub secret_key: Option<String>,
}

/// Sticky retry section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StickySection {
    /// Retry while the server reports "not ready"
    #[serde(default)]
    pub enabled: bool,

    /// Maximum number of attempts (absent = unbounded)
    pub max_attempts: Option<u32>,

    /// Initial delay between attempts in milliseconds
    pub initial_delay_ms: Option<u64>,

    /// Maximum delay between attempts in milliseconds
    pub max_delay_ms: Option<u64>,

    /// Backoff multiplier
    pub multiplier: Option<f64>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# pushqueue configuration file

[push]
# Push endpoint (default: http://push.doday.net/api/push)
# endpoint = "http://push.doday.net/api/push"

# Push code and body; --code and --body override these
# code = "alarm"
# body = ""

[owner]
# Owner credentials (required, can be overridden by --uuid / --secret-key)
# uuid = "00000000-0000-0000-0000-000000000000"
# secret_key = "your-secret-key"

[sticky]
# Retry while the server reports the previous push is not complete
# enabled = false

# Maximum number of attempts (default: unbounded)
# max_attempts = 10

# Initial delay between attempts in milliseconds (default: 0, retry immediately)
# initial_delay_ms = 0

# Maximum delay between attempts in milliseconds (default: 60000)
# max_delay_ms = 60000

# Backoff multiplier (default: 2.0)
# multiplier = 2.0
"#
    .to_string()
}
