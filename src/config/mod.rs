//! Configuration management module
//!
//! This module handles loading the compliance server configuration and
//! validating it before the service starts.

pub mod app_config;
pub mod database;
pub mod validation;

pub use app_config::AppConfig;
pub use database::DatabaseType;
pub use validation::ConfigValidator;
