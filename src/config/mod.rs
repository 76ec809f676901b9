//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PINNACLE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use pinnacle_assessment::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod ai;
mod error;
mod server;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{LogFormat, ServerConfig};

use serde::Deserialize;

/// Unprefixed variable holding the API key, honored when
/// `PINNACLE__AI__API_KEY` is not set.
pub const LEGACY_API_KEY_VAR: &str = "API_KEY";

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (bind address, logging, CORS)
    #[serde(default)]
    pub server: ServerConfig,

    /// Generation service configuration
    #[serde(default)]
    pub ai: AiConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Seeds `ai.api_key` from `API_KEY` if that is set
    /// 3. Reads environment variables with `PINNACLE` prefix
    /// 4. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `PINNACLE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `PINNACLE__AI__API_KEY=...` -> `ai.api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        if let Ok(key) = std::env::var(LEGACY_API_KEY_VAR) {
            builder = builder.set_default("ai.api_key", key)?;
        }

        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix("PINNACLE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 5] = [
        "PINNACLE__SERVER__PORT",
        "PINNACLE__SERVER__LOG_FORMAT",
        "PINNACLE__AI__API_KEY",
        "PINNACLE__AI__MODEL",
        LEGACY_API_KEY_VAR,
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    fn api_key(config: &AppConfig) -> Option<String> {
        config
            .ai
            .api_key
            .as_ref()
            .map(|k| k.expose_secret().clone())
    }

    #[test]
    fn test_load_defaults_without_env() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        let config = result.unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.ai.model, "gemini-2.5-flash");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("PINNACLE__SERVER__PORT", "3000");
        env::set_var("PINNACLE__SERVER__LOG_FORMAT", "json");
        env::set_var("PINNACLE__AI__API_KEY", "AIza-prefixed");
        env::set_var("PINNACLE__AI__MODEL", "gemini-2.5-pro");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.log_format, LogFormat::Json);
        assert_eq!(config.ai.model, "gemini-2.5-pro");
        assert_eq!(api_key(&config).as_deref(), Some("AIza-prefixed"));
    }

    #[test]
    fn test_legacy_api_key_is_used() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var(LEGACY_API_KEY_VAR, "AIza-legacy");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.ai.has_credential());
        assert_eq!(api_key(&config).as_deref(), Some("AIza-legacy"));
    }

    #[test]
    fn test_prefixed_key_overrides_legacy() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var(LEGACY_API_KEY_VAR, "AIza-legacy");
        env::set_var("PINNACLE__AI__API_KEY", "AIza-prefixed");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(api_key(&result.unwrap()).as_deref(), Some("AIza-prefixed"));
    }
}
