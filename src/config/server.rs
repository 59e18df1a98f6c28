//! HTTP server settings: bind address, logging, and the layers wrapped
//! around the router.

use serde::Deserialize;
use std::net::{AddrParseError, SocketAddr};
use std::time::Duration;

use super::error::{check_timeout, is_http_url, ValidationError};

/// Server configuration (`TIMETABLE__SERVER__*`)
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub environment: Environment,

    /// `EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Upper bound on a whole `/api/schedule` request
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Comma-separated browser origins allowed to call the API
    pub cors_origins: Option<String>,
}

/// Deployment environment. Production switches on JSON logs, a strict CORS
/// policy, and the https requirement for the portal address.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

/// Which browser origins may call the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsPolicy {
    /// Any origin. Only used in development with no origins configured.
    Permissive,
    /// Exactly these origins; empty means no cross-origin access.
    Origins(Vec<String>),
}

/// Everything the router's middleware stack needs from the server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpLayerSettings {
    pub request_timeout: Duration,
    pub cors: CorsPolicy,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    pub fn http_layers(&self) -> HttpLayerSettings {
        HttpLayerSettings {
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            cors: self.cors_policy(),
        }
    }

    fn cors_policy(&self) -> CorsPolicy {
        match self.configured_origins() {
            origins if origins.is_empty() && !self.is_production() => CorsPolicy::Permissive,
            origins => CorsPolicy::Origins(origins),
        }
    }

    fn configured_origins(&self) -> Vec<String> {
        self.cors_origins
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::PortZero);
        }
        check_timeout("TIMETABLE__SERVER__REQUEST_TIMEOUT_SECS", self.request_timeout_secs)?;
        if let Some(bad) = self.configured_origins().into_iter().find(|o| !is_http_url(o)) {
            return Err(ValidationError::InvalidCorsOrigin(bad));
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: Environment::default(),
            log_level: default_log_level(),
            request_timeout_secs: default_request_timeout(),
            cors_origins: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info,timetable_scraper=debug".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_origins(environment: Environment, origins: Option<&str>) -> ServerConfig {
        ServerConfig {
            environment,
            cors_origins: origins.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn defaults_bind_all_interfaces() {
        let config = ServerConfig::default();
        assert_eq!(config.socket_addr().unwrap().to_string(), "0.0.0.0:8080");
        assert!(!config.is_production());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unparseable_host_is_an_error() {
        let config = ServerConfig {
            host: "not a host".to_string(),
            ..Default::default()
        };
        assert!(config.socket_addr().is_err());
    }

    #[test]
    fn development_without_origins_is_permissive() {
        let layers = with_origins(Environment::Development, None).http_layers();
        assert_eq!(layers.cors, CorsPolicy::Permissive);
        assert_eq!(layers.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn configured_origins_are_trimmed_and_blank_entries_skipped() {
        let config = with_origins(
            Environment::Development,
            Some(" https://timetable.example , ,http://localhost:5173"),
        );
        assert_eq!(
            config.http_layers().cors,
            CorsPolicy::Origins(vec![
                "https://timetable.example".to_string(),
                "http://localhost:5173".to_string(),
            ])
        );
    }

    #[test]
    fn production_without_origins_allows_none() {
        let config = with_origins(Environment::Production, None);
        assert_eq!(config.http_layers().cors, CorsPolicy::Origins(vec![]));
    }

    #[test]
    fn validation_rejects_bad_values() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::PortZero));

        let config = ServerConfig {
            request_timeout_secs: 500,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::TimeoutOutOfRange { secs: 500, .. })
        ));

        let config = with_origins(Environment::Production, Some("timetable.example"));
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidCorsOrigin("timetable.example".to_string()))
        );
    }
}
