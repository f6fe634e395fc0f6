/**
 * Server Configuration
 *
 * Loads `AppConfig` for the server binary. A `.env` file in the working
 * directory is read first, so its values act like real environment variables
 * for the `SERVER_*` overrides and `THREADBOARD_CONFIG`.
 */

use crate::shared::{AppConfig, ConfigError};

/// Load configuration for the server binary
///
/// # Errors
///
/// Returns `ConfigError` if the config file cannot be read or parsed, or if an
/// override holds an invalid value. A missing `.env` file is not an error.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    match dotenv::dotenv() {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) => tracing::debug!("No .env file loaded: {e}"),
    }

    let config = AppConfig::load()?;
    tracing::info!(
        host = %config.host,
        port = config.port,
        static_dir = %config.static_dir.display(),
        seed_replies = config.seed_replies.len(),
        "Configuration loaded"
    );
    Ok(config)
}
