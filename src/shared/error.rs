//! Error handling module
//!
//! This module provides centralized error handling for the application.

use std::fmt;
use thiserror::Error;

/// Database drivers that used to be supported and were removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscontinuedDriver {
    MySql,
}

impl DiscontinuedDriver {
    /// Value of `database.type` that selects this driver
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscontinuedDriver::MySql => "mysql",
        }
    }
}

impl fmt::Display for DiscontinuedDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration rejection reasons.
///
/// Validation stops at the first violated rule, so exactly one of these is
/// reported per call. The messages name the offending parameter as it is
/// spelled in the config file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid database.type param")]
    InvalidDatabaseType,

    #[error("Invalid database.type param, {driver} support is discontinued")]
    DiscontinuedDatabaseType { driver: DiscontinuedDriver },

    #[error("Cannot parse database.url param")]
    UnparsableDatabaseUrl,

    #[error("{field} param is required")]
    MissingRequiredField { field: &'static str },

    #[error("Invalid keys.signing_seed param")]
    InvalidSigningSeed,

    #[error("Cannot parse {field} param")]
    UnparsableCallbackUrl { field: &'static str },

    #[error("Both tls.certificate_file and tls.private_key_file params are required")]
    IncompleteTls,

    #[error("Both tx_status_auth.username and tx_status_auth.password params are required")]
    IncompleteTxStatusAuth,
}

/// StrKey decoding failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StrKeyError {
    #[error("invalid length: expected {expected} characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid base32 encoding: {0}")]
    InvalidEncoding(String),

    #[error("invalid version byte: expected {expected:#04x}, got {actual:#04x}")]
    InvalidVersionByte { expected: u8, actual: u8 },

    #[error("checksum mismatch")]
    InvalidChecksum,
}

/// Application error types
#[derive(Error, Debug, Clone)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration validation failed: {0}")]
    Validation(#[from] ConfigError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// The validation failure behind this error, if any
    pub fn config_error(&self) -> Option<&ConfigError> {
        match self {
            AppError::Validation(err) => Some(err),
            _ => None,
        }
    }
}

/// Application result type
pub type AppResult<T> = Result<T, AppError>;

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
