//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `TIMETABLE_` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use timetable_scraper::config::AppConfig;
//!
//! let config = AppConfig::from_env().expect("Invalid configuration");
//!
//! println!("Scraping {}", config.portal.schedule_url);
//! ```

mod error;
mod portal;
mod server;

pub use error::{ConfigError, ValidationError};
pub use portal::PortalConfig;
pub use server::{CorsPolicy, Environment, HttpLayerSettings, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::from_env()`], which reads and validates
/// environment variables in one step.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Timetable portal configuration (address, cookie, timeouts)
    #[serde(default)]
    pub portal: PortalConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `TIMETABLE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `TIMETABLE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `TIMETABLE__PORTAL__SCHEDULE_URL=...` -> `portal.schedule_url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TIMETABLE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load and validate, for process startup.
    ///
    /// # Errors
    ///
    /// `ConfigError::LoadError` when a variable does not parse,
    /// `ConfigError::ValidationFailed` when a parsed value is unusable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.portal.validate(self.server.environment)?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("TIMETABLE__SERVER__PORT");
        env::remove_var("TIMETABLE__SERVER__ENVIRONMENT");
        env::remove_var("TIMETABLE__PORTAL__SCHEDULE_URL");
        env::remove_var("TIMETABLE__PORTAL__COOKIE_NAME");
        env::remove_var("TIMETABLE__PORTAL__SESSION_TIMEOUT_SECS");
    }

    #[test]
    fn test_load_with_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.portal.cookie_name, "MOD_AUTH_CAS");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_portal_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("TIMETABLE__PORTAL__SCHEDULE_URL", "https://portal.example/schedule");
        env::set_var("TIMETABLE__PORTAL__COOKIE_NAME", "SESSION");
        env::set_var("TIMETABLE__PORTAL__SESSION_TIMEOUT_SECS", "10");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.portal.schedule_url, "https://portal.example/schedule");
        assert_eq!(config.portal.cookie_name, "SESSION");
        assert_eq!(config.portal.session_timeout_secs, 10);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("TIMETABLE__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_production_rejects_plain_http_portal() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("TIMETABLE__SERVER__ENVIRONMENT", "production");
        env::set_var("TIMETABLE__PORTAL__SCHEDULE_URL", "http://portal.example/schedule");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.validate(),
            Err(ValidationError::PortalUrlNotHttps(
                "http://portal.example/schedule".to_string()
            ))
        );
    }

    #[test]
    fn test_from_env_reports_validation_failure() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("TIMETABLE__PORTAL__SESSION_TIMEOUT_SECS", "0");
        let result = AppConfig::from_env();
        clear_env();

        let err = result.unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ValidationFailed(ValidationError::TimeoutOutOfRange { secs: 0, .. })
        ));
        assert!(err
            .to_string()
            .contains("TIMETABLE__PORTAL__SESSION_TIMEOUT_SECS"));
    }

    #[test]
    fn test_from_env_reports_unparseable_values() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("TIMETABLE__SERVER__PORT", "eighty");
        let result = AppConfig::from_env();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("TIMETABLE__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
    }
}
