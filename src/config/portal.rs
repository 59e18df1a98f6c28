//! Timetable portal configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::{check_timeout, is_http_url, ValidationError};
use super::server::Environment;

/// Timetable portal configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PortalConfig {
    /// Schedule page address; session locators are appended to it
    #[serde(default = "default_schedule_url")]
    pub schedule_url: String,

    /// Name of the session cookie issued by the portal's CAS login
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,

    /// Substring of the login page URL; a redirect there means the cookie expired
    #[serde(default = "default_login_marker")]
    pub login_marker: String,

    /// Product token for the generated User-Agent
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,

    /// Upper bound on one session's fetch and parse, in seconds
    #[serde(default = "default_session_timeout")]
    pub session_timeout_secs: u64,
}

impl PortalConfig {
    /// Get the per-request timeout as Duration
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Get the per-session timeout as Duration
    pub fn session_timeout(&self) -> Duration {
        Duration::from_secs(self.session_timeout_secs)
    }

    /// Validate portal configuration
    ///
    /// In production, requires HTTPS for the schedule URL.
    pub fn validate(&self, environment: Environment) -> Result<(), ValidationError> {
        if !is_http_url(&self.schedule_url) {
            return Err(ValidationError::PortalUrlNotHttp(self.schedule_url.clone()));
        }
        if environment == Environment::Production && !self.schedule_url.starts_with("https://") {
            return Err(ValidationError::PortalUrlNotHttps(self.schedule_url.clone()));
        }
        if self.cookie_name.trim().is_empty() {
            return Err(ValidationError::BlankSetting("TIMETABLE__PORTAL__COOKIE_NAME"));
        }
        if self.user_agent.trim().is_empty() {
            return Err(ValidationError::BlankSetting("TIMETABLE__PORTAL__USER_AGENT"));
        }
        check_timeout("TIMETABLE__PORTAL__FETCH_TIMEOUT_SECS", self.fetch_timeout_secs)?;
        check_timeout("TIMETABLE__PORTAL__SESSION_TIMEOUT_SECS", self.session_timeout_secs)?;
        Ok(())
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            schedule_url: default_schedule_url(),
            cookie_name: default_cookie_name(),
            login_marker: default_login_marker(),
            user_agent: default_user_agent(),
            fetch_timeout_secs: default_fetch_timeout(),
            session_timeout_secs: default_session_timeout(),
        }
    }
}

fn default_schedule_url() -> String {
    "https://imaluum.iium.edu.my/MyAcademic/schedule".to_string()
}

fn default_cookie_name() -> String {
    "MOD_AUTH_CAS".to_string()
}

fn default_login_marker() -> String {
    "cas/login".to_string()
}

fn default_user_agent() -> String {
    "TimetableScraper".to_string()
}

fn default_fetch_timeout() -> u64 {
    15
}

fn default_session_timeout() -> u64 {
    30
}
