//! Logging utilities module
//!
//! This module provides centralized logging functionality and utilities.

use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::shared::error::AppError;
use crate::shared::strkey::SigningSeed;
use crate::shared::urls;

/// Logging utilities for the application
pub struct LoggingUtils;

impl LoggingUtils {
    /// Initialize logging. `RUST_LOG` overrides `default_level`.
    pub fn initialize(default_level: &str, json: bool) -> crate::Result<()> {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_level));

        let builder = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false);

        let result = if json {
            tracing::subscriber::set_global_default(builder.json().finish())
        } else {
            tracing::subscriber::set_global_default(builder.finish())
        };

        result.map_err(|e| AppError::Internal(format!("Failed to initialize logging: {}", e)))
    }

    /// Log what an accepted configuration will run with. Secrets stay out of the log.
    pub fn log_config_summary(config: &AppConfig) {
        let account_id = SigningSeed::parse(&config.keys.signing_seed)
            .map(|seed| seed.account_id())
            .unwrap_or_default();

        info!(
            external_port = ?config.external_port,
            internal_port = ?config.internal_port,
            network_passphrase = %config.network_passphrase,
            needs_auth = config.needs_auth,
            signing_account = %account_id,
            "Configuration accepted"
        );

        if config.database.url.is_empty() {
            warn!("database.url is not set, the service cannot persist state");
        } else {
            info!(
                database_type = %config.database.kind,
                database_url = %urls::redact_password(&config.database.url),
                "Database configured"
            );
        }

        if !config.tls.is_enabled() {
            warn!("TLS is not configured, the external port will serve plain HTTP");
        }

        for (field, url) in config.callbacks.entries() {
            if url.is_empty() {
                debug!(callback = field, "Callback not configured");
            }
        }
    }
}
