//! Configuration error types

use thiserror::Error;

/// Errors from [`AppConfig::from_env`](super::AppConfig::from_env).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read TIMETABLE__* settings: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Invalid TIMETABLE__* settings: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// A setting that loaded but cannot be used.
///
/// Each variant names the environment variable to fix.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("TIMETABLE__SERVER__PORT must not be 0")]
    PortZero,

    #[error("{setting} must be between 1 and {max_secs} seconds, got {secs}")]
    TimeoutOutOfRange {
        setting: &'static str,
        secs: u64,
        max_secs: u64,
    },

    #[error("TIMETABLE__SERVER__CORS_ORIGINS entry '{0}' is not an http(s) origin")]
    InvalidCorsOrigin(String),

    #[error("TIMETABLE__PORTAL__SCHEDULE_URL '{0}' is not an http(s) address")]
    PortalUrlNotHttp(String),

    #[error("TIMETABLE__PORTAL__SCHEDULE_URL '{0}' must use https in production")]
    PortalUrlNotHttps(String),

    #[error("{0} must not be blank")]
    BlankSetting(&'static str),
}

/// Longest timeout any setting accepts.
pub(super) const MAX_TIMEOUT_SECS: u64 = 300;

/// Checks a `*_SECS` setting against `1..=MAX_TIMEOUT_SECS`.
pub(super) fn check_timeout(setting: &'static str, secs: u64) -> Result<(), ValidationError> {
    if secs == 0 || secs > MAX_TIMEOUT_SECS {
        return Err(ValidationError::TimeoutOutOfRange {
            setting,
            secs,
            max_secs: MAX_TIMEOUT_SECS,
        });
    }
    Ok(())
}

/// Whether `value` starts with an http or https scheme and has something after it.
pub(super) fn is_http_url(value: &str) -> bool {
    ["http://", "https://"]
        .iter()
        .any(|scheme| value.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()))
}
