//! Integration tests loading configuration files from disk

use crate::{
    config::AppConfig,
    shared::error::{AppError, ConfigError},
    tests::{fixtures, TestResult},
};
use std::io::Write;
use std::sync::{Mutex, MutexGuard};
use tempfile::NamedTempFile;

// Loading reads `COMPLIANCE__*` variables, so tests that load hold this lock
// while any test changes the environment.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Sets environment variables and removes them again on drop
struct EnvOverrides(Vec<&'static str>);

impl EnvOverrides {
    fn set(vars: &[(&'static str, &str)]) -> Self {
        for (key, value) in vars {
            std::env::set_var(key, value);
        }
        Self(vars.iter().map(|(key, _)| *key).collect())
    }
}

impl Drop for EnvOverrides {
    fn drop(&mut self) {
        for key in &self.0 {
            std::env::remove_var(key);
        }
    }
}

fn write_config(contents: &str) -> TestResult<NamedTempFile> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(file)
}

#[test]
fn test_load_full_config() -> TestResult<()> {
    let _env = env_lock();
    let file = write_config(&fixtures::valid_toml())?;
    let config = AppConfig::load_from(file.path())?;

    assert_eq!(config.external_port, Some(8001));
    assert_eq!(config.internal_port, Some(8002));
    assert!(config.json_logs());
    assert!(config.needs_auth);
    assert_eq!(config.network_passphrase, fixtures::TEST_NETWORK_PASSPHRASE);
    assert_eq!(config.database.kind, "postgres");
    assert_eq!(config.keys.signing_seed, fixtures::SIGNING_SEED);
    assert_eq!(config.callbacks.ask_user, "http://localhost:8005/ask_user");
    assert!(config.callbacks.tx_status.is_empty());
    assert!(config.tls.is_enabled());
    assert_eq!(config.tx_status_auth.as_ref().map(|a| a.username.as_str()), Some("admin"));

    config.validate()?;
    Ok(())
}

#[test]
fn test_load_partial_config_fills_defaults() -> TestResult<()> {
    let _env = env_lock();
    let file = write_config("network_passphrase = \"Public Global Stellar Network ; September 2015\"\n")?;
    let config = AppConfig::load_from(file.path())?;

    assert_eq!(config.external_port, None);
    assert!(config.database.kind.is_empty());
    assert!(config.tx_status_auth.is_none());
    assert_eq!(config.validate(), Err(ConfigError::InvalidDatabaseType));
    Ok(())
}

#[test]
fn test_loaded_mysql_config_is_rejected() -> TestResult<()> {
    let _env = env_lock();
    let toml = fixtures::valid_toml().replace("type = \"postgres\"", "type = \"mysql\"");
    let file = write_config(&toml)?;
    let config = AppConfig::load_from(file.path())?;

    let err = config.ensure_valid().unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(
        err.config_error().map(|e| e.to_string()),
        Some("Invalid database.type param, mysql support is discontinued".to_string())
    );
    Ok(())
}

#[test]
fn test_missing_file_is_config_error() {
    let _env = env_lock();
    let dir = tempfile::tempdir().unwrap();
    let result = AppConfig::load_from(&dir.path().join("absent.toml"));
    assert!(matches!(result, Err(AppError::Config(_))));
}

#[test]
fn test_malformed_port_is_config_error() -> TestResult<()> {
    let _env = env_lock();
    let file = write_config("external_port = \"eighty\"\n")?;
    let result = AppConfig::load_from(file.path());
    assert!(matches!(result, Err(AppError::Config(_))));
    Ok(())
}

#[test]
fn test_environment_overrides_file() -> TestResult<()> {
    let _env = env_lock();
    let file = write_config(&fixtures::valid_toml())?;

    let config = {
        let _vars = EnvOverrides::set(&[
            ("COMPLIANCE__DATABASE__TYPE", "mysql"),
            ("COMPLIANCE__EXTERNAL_PORT", "9000"),
        ]);
        AppConfig::load_from(file.path())?
    };

    assert_eq!(config.database.kind, "mysql");
    assert_eq!(config.external_port, Some(9000));
    assert_eq!(config.internal_port, Some(8002));
    assert_eq!(
        config.validate().unwrap_err().to_string(),
        "Invalid database.type param, mysql support is discontinued"
    );
    assert!(std::env::var("COMPLIANCE__DATABASE__TYPE").is_err());
    Ok(())
}
