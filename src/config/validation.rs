//! Configuration validation module
//!
//! Startup checks run once over the loaded configuration. Rules run in a fixed
//! order and the first violation is returned; nothing is logged or mutated here.

use validator::Validate;

use crate::config::app_config::{AppConfig, CallbacksConfig, KeysConfig, TlsConfig, TxStatusAuthConfig};
use crate::config::database::DatabaseType;
use crate::shared::error::ConfigError;
use crate::shared::strkey::SigningSeed;
use crate::shared::urls::{is_generic_url, parse_url};

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the complete configuration
    pub fn validate(config: &AppConfig) -> Result<(), ConfigError> {
        DatabaseType::parse(&config.database.kind).require_supported()?;
        Self::validate_database_url(&config.database.url)?;

        Self::validate_required(config)?;
        Self::validate_signing_seed(&config.keys)?;

        Self::validate_callbacks(&config.callbacks)?;
        Self::validate_tls(&config.tls)?;
        if let Some(auth) = &config.tx_status_auth {
            Self::validate_tx_status_auth(auth)?;
        }

        Ok(())
    }

    /// Empty means no URL configured. libpq forms (empty host, host lists) are
    /// valid here, so only the generic URI syntax is checked.
    fn validate_database_url(url: &str) -> Result<(), ConfigError> {
        if url.is_empty() || is_generic_url(url) {
            Ok(())
        } else {
            Err(ConfigError::UnparsableDatabaseUrl)
        }
    }

    fn validate_required(config: &AppConfig) -> Result<(), ConfigError> {
        if config.external_port.is_none() {
            return Err(ConfigError::MissingRequiredField { field: "external_port" });
        }
        if config.internal_port.is_none() {
            return Err(ConfigError::MissingRequiredField { field: "internal_port" });
        }
        if config.network_passphrase.is_empty() {
            return Err(ConfigError::MissingRequiredField { field: "network_passphrase" });
        }
        Ok(())
    }

    fn validate_signing_seed(keys: &KeysConfig) -> Result<(), ConfigError> {
        if keys.signing_seed.is_empty() {
            return Err(ConfigError::MissingRequiredField { field: "keys.signing_seed" });
        }
        SigningSeed::parse(&keys.signing_seed)
            .map(|_| ())
            .map_err(|_| ConfigError::InvalidSigningSeed)
    }

    fn validate_callbacks(callbacks: &CallbacksConfig) -> Result<(), ConfigError> {
        for (field, url) in callbacks.entries() {
            if !url.is_empty() && parse_url(url).is_none() {
                return Err(ConfigError::UnparsableCallbackUrl { field });
            }
        }
        Ok(())
    }

    fn validate_tls(tls: &TlsConfig) -> Result<(), ConfigError> {
        if tls.certificate_file.is_empty() != tls.private_key_file.is_empty() {
            return Err(ConfigError::IncompleteTls);
        }
        Ok(())
    }

    fn validate_tx_status_auth(auth: &TxStatusAuthConfig) -> Result<(), ConfigError> {
        auth.validate().map_err(|_| ConfigError::IncompleteTxStatusAuth)
    }
}
