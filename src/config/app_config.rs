//! Application configuration structures
//!
//! This module contains the main configuration structures for the application.

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::config::validation::ConfigValidator;
use crate::shared::error::{AppResult, ConfigError};

/// Config file read by [`AppConfig::load`], relative to the working directory
pub const DEFAULT_CONFIG_FILE: &str = "compliance.toml";

/// Prefix of environment overrides, e.g. `COMPLIANCE__DATABASE__URL`
pub const ENV_PREFIX: &str = "COMPLIANCE";

/// Database configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Driver name, only "postgres" is supported
    #[serde(rename = "type")]
    pub kind: String,

    /// Connection URL (optional)
    pub url: String,
}

/// Key material
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeysConfig {
    /// StrKey secret seed used to sign outgoing messages
    pub signing_seed: String,
}

impl std::fmt::Debug for KeysConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let seed = if self.signing_seed.is_empty() { "" } else { "<redacted>" };
        f.debug_struct("KeysConfig").field("signing_seed", &seed).finish()
    }
}

/// Callback endpoints of the organization's own services
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CallbacksConfig {
    /// Sanctions check
    pub sanctions: String,

    /// Asks whether a sender's info may be shared
    pub ask_user: String,

    /// Fetches customer info for outgoing payments
    pub fetch_info: String,

    /// Transaction status lookup
    pub tx_status: String,
}

impl CallbacksConfig {
    /// Callback URLs with their parameter names, in validation order
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("callbacks.sanctions", self.sanctions.as_str()),
            ("callbacks.ask_user", self.ask_user.as_str()),
            ("callbacks.fetch_info", self.fetch_info.as_str()),
            ("callbacks.tx_status", self.tx_status.as_str()),
        ]
    }
}

/// TLS configuration for the external port
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TlsConfig {
    pub certificate_file: String,
    pub private_key_file: String,
}

impl TlsConfig {
    /// Both files set
    pub fn is_enabled(&self) -> bool {
        !self.certificate_file.is_empty() && !self.private_key_file.is_empty()
    }
}

/// Basic auth credentials protecting the tx status endpoint
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct TxStatusAuthConfig {
    #[validate(length(min = 1))]
    pub username: String,

    #[validate(length(min = 1))]
    pub password: String,
}

impl std::fmt::Debug for TxStatusAuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TxStatusAuthConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Port serving other organizations
    pub external_port: Option<u16>,

    /// Port serving the organization's own services
    pub internal_port: Option<u16>,

    /// Log format ("json" or text)
    pub log_format: String,

    /// Require authentication of incoming requests
    pub needs_auth: bool,

    /// Identifies the target network
    pub network_passphrase: String,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Key material
    pub keys: KeysConfig,

    /// Callback endpoints
    pub callbacks: CallbacksConfig,

    /// TLS configuration
    pub tls: TlsConfig,

    /// Tx status endpoint credentials
    pub tx_status_auth: Option<TxStatusAuthConfig>,
}

impl AppConfig {
    /// Load configuration from `compliance.toml` (if present) and environment variables
    pub fn load() -> AppResult<Self> {
        let file = config::File::with_name(DEFAULT_CONFIG_FILE)
            .format(config::FileFormat::Toml)
            .required(false);
        Self::build(file)
    }

    /// Load configuration from an explicit file and environment variables
    pub fn load_from(path: &Path) -> AppResult<Self> {
        let file = config::File::from(path)
            .format(config::FileFormat::Toml)
            .required(true);
        Self::build(file)
    }

    fn build(file: config::File<config::FileSourceFile, config::FileFormat>) -> AppResult<Self> {
        let config = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check the configuration, stopping at the first violated rule
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigValidator::validate(self)
    }

    /// [`AppConfig::validate`] lifted into the application error type
    pub fn ensure_valid(&self) -> AppResult<()> {
        self.validate()?;
        Ok(())
    }

    /// Whether logs should be emitted as JSON
    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}
