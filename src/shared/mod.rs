//! Shared utilities and common functionality
//!
//! This module contains error handling, logging, URL parsing and key
//! encoding used across the crate.

pub mod error;
pub mod logging;
pub mod strkey;
pub mod urls;

pub use error::{AppError, AppResult, ConfigError, StrKeyError};
pub use logging::LoggingUtils;
pub use strkey::SigningSeed;
