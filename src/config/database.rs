//! Database section helpers
//!
//! Classification of the raw `database.type` value.

use crate::shared::error::{ConfigError, DiscontinuedDriver};

/// Driver selected by `database.type`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseType {
    Postgres,
    Discontinued(DiscontinuedDriver),
    Invalid,
}

impl DatabaseType {
    /// Classify a raw `database.type` value. Matching is exact and case-sensitive.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "postgres" => DatabaseType::Postgres,
            "mysql" => DatabaseType::Discontinued(DiscontinuedDriver::MySql),
            _ => DatabaseType::Invalid,
        }
    }

    /// Accept the supported driver, or explain why the value is rejected
    pub fn require_supported(self) -> Result<(), ConfigError> {
        match self {
            DatabaseType::Postgres => Ok(()),
            DatabaseType::Discontinued(driver) => {
                Err(ConfigError::DiscontinuedDatabaseType { driver })
            }
            DatabaseType::Invalid => Err(ConfigError::InvalidDatabaseType),
        }
    }
}
