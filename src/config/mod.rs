//! Configuration module for the PetFriends client
//!
//! Handles loading of YAML configuration files with support for environment
//! variable expansion, plus a pure-environment constructor for CI runs where
//! no file is present. Credentials never have defaults checked in for the
//! valid account; the invalid pair only needs to be wrong, so placeholders
//! are provided.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

mod loader;

pub use loader::ConfigLoader;

/// Environment variable naming the service base URL
pub const ENV_BASE_URL: &str = "PETFRIENDS_BASE_URL";
/// Environment variable holding the registered account email
pub const ENV_VALID_EMAIL: &str = "PETFRIENDS_VALID_EMAIL";
/// Environment variable holding the registered account password
pub const ENV_VALID_PASSWORD: &str = "PETFRIENDS_VALID_PASSWORD";
/// Environment variable holding an email the service does not know
pub const ENV_INVALID_EMAIL: &str = "PETFRIENDS_INVALID_EMAIL";
/// Environment variable holding a password that fails authentication
pub const ENV_INVALID_PASSWORD: &str = "PETFRIENDS_INVALID_PASSWORD";
/// Environment variable overriding the HTTP timeout in seconds
pub const ENV_TIMEOUT_SECONDS: &str = "PETFRIENDS_TIMEOUT_SECONDS";

// ============================================================================
// Environment Variable Expansion
// ============================================================================

/// Expand environment variables in a string.
///
/// Supports two syntaxes:
/// - `${VAR_NAME}` - Simple expansion, keeps placeholder if var not found
/// - `${VAR_NAME:-default}` - Expansion with default value
///
/// Variable names must start with a letter or underscore and contain only
/// uppercase letters, digits, and underscores.
fn expand_env_vars(s: &str) -> String {
    // Regex to capture ${VAR} or ${VAR:-default}
    let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)(?::-([^}]+))?\}").unwrap();
    let mut last_match = 0;
    let mut result = String::with_capacity(s.len());

    for cap in re.captures_iter(s) {
        let full_match = cap.get(0).unwrap();
        let var_name = cap.get(1).unwrap().as_str();

        result.push_str(&s[last_match..full_match.start()]);

        let value = match std::env::var(var_name) {
            Ok(val) => val,
            Err(_) => {
                if let Some(default) = cap.get(2) {
                    default.as_str().to_string()
                } else {
                    // No env var and no default. Keep the original placeholder.
                    full_match.as_str().to_string()
                }
            }
        };
        result.push_str(&value);

        last_match = full_match.end();
    }

    result.push_str(&s[last_match..]);

    result
}

// ============================================================================
// Validation Helpers
// ============================================================================

/// Validate that a URL starts with http:// or https://
fn is_valid_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),

    #[error("Missing environment variable: {0}")]
    MissingEnv(String),
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Service base URL, without a trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Credential pairs the scenarios run with
    pub accounts: AccountsConfig,

    /// HTTP transport tuning
    #[serde(default)]
    pub http: HttpConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        ConfigLoader::load(path)
    }

    /// Build configuration from `PETFRIENDS_*` environment variables only.
    ///
    /// The valid credential pair is required; the invalid pair falls back to
    /// placeholders since any unregistered combination works for the
    /// negative scenarios.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut http = HttpConfig::default();
        if let Ok(raw) = std::env::var(ENV_TIMEOUT_SECONDS) {
            http.timeout_seconds = raw.parse().map_err(|_| {
                ConfigError::ValidationError(format!(
                    "{} must be a positive integer, got '{}'",
                    ENV_TIMEOUT_SECONDS, raw
                ))
            })?;
        }

        let config = Config {
            base_url: std::env::var(ENV_BASE_URL).unwrap_or_else(|_| default_base_url()),
            accounts: AccountsConfig {
                valid_email: require_env(ENV_VALID_EMAIL)?,
                valid_password: require_env(ENV_VALID_PASSWORD)?,
                invalid_email: std::env::var(ENV_INVALID_EMAIL)
                    .unwrap_or_else(|_| default_invalid_email()),
                invalid_password: std::env::var(ENV_INVALID_PASSWORD)
                    .unwrap_or_else(|_| default_invalid_password()),
            },
            http,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_http_url(&self.base_url) {
            return Err(ConfigError::ValidationError(
                "Invalid base_url: must start with http:// or https://".into(),
            ));
        }

        // The invalid pair may legitimately be empty, the empty-credentials
        // scenario depends on that. Only the valid pair must be present.
        if self.accounts.valid_email.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "valid_email cannot be empty".into(),
            ));
        }
        if self.accounts.valid_password.is_empty() {
            return Err(ConfigError::ValidationError(
                "valid_password cannot be empty".into(),
            ));
        }

        if self.http.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError(
                "timeout_seconds must be greater than zero".into(),
            ));
        }

        Ok(())
    }

    /// HTTP timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.http.timeout_seconds)
    }
}

fn require_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnv(name.to_string()))
}

/// Credential pairs used by the scenarios
///
/// The service classifies them, nothing is checked locally beyond presence
/// of the valid pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountsConfig {
    pub valid_email: String,
    pub valid_password: String,
    #[serde(default = "default_invalid_email")]
    pub invalid_email: String,
    #[serde(default = "default_invalid_password")]
    pub invalid_password: String,
}

/// HTTP transport configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

fn default_base_url() -> String {
    "https://petfriends.skillfactory.ru".to_string()
}

fn default_invalid_email() -> String {
    "nobody@petfriends.invalid".to_string()
}

fn default_invalid_password() -> String {
    "definitely-not-the-password".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}
