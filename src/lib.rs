//! Compliance Server - configuration layer
//!
//! This library loads the compliance server configuration from a TOML file
//! and the environment, and validates it once before the service starts.

pub mod config;
pub mod shared;


pub use config::{AppConfig, ConfigValidator};
pub use shared::error::{AppError, AppResult, ConfigError};

/// Application result type
pub type Result<T> = std::result::Result<T, shared::error::AppError>;
