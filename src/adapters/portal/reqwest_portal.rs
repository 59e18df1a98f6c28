//! reqwest-backed portal adapter.
//!
//! # Configuration
//!
//! ```ignore
//! let config = ReqwestPortalConfig::new()
//!     .with_cookie_name("MOD_AUTH_CAS")
//!     .with_timeout(Duration::from_secs(15));
//!
//! let portal = ReqwestPortal::new(config)?;
//! ```
//!
//! # Authentication
//!
//! The portal does not answer an expired cookie with 401. It redirects to
//! the CAS login page instead, so a final URL containing the login marker is
//! treated the same as a 401/403.

use async_trait::async_trait;
use reqwest::header::{COOKIE, USER_AGENT};
use reqwest::{redirect, Client, StatusCode, Url};
use std::time::Duration;

use super::user_agent::generate_user_agent;
use crate::domain::foundation::PortalCookie;
use crate::ports::{PortalError, TimetablePortal};

/// Configuration for the reqwest portal adapter.
#[derive(Debug, Clone)]
pub struct ReqwestPortalConfig {
    /// Name of the session cookie the portal expects.
    pub cookie_name: String,
    /// Product token used in the generated User-Agent.
    pub user_agent: String,
    /// Substring of the login page URL that marks an auth redirect.
    pub login_marker: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Maximum redirects followed per request.
    pub max_redirects: usize,
}

impl ReqwestPortalConfig {
    pub fn new() -> Self {
        Self {
            cookie_name: "MOD_AUTH_CAS".to_string(),
            user_agent: "TimetableScraper".to_string(),
            login_marker: "cas/login".to_string(),
            timeout: Duration::from_secs(15),
            max_redirects: 5,
        }
    }

    pub fn with_cookie_name(mut self, name: impl Into<String>) -> Self {
        self.cookie_name = name.into();
        self
    }

    pub fn with_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    pub fn with_login_marker(mut self, marker: impl Into<String>) -> Self {
        self.login_marker = marker.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ReqwestPortalConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Portal adapter performing real HTTP fetches.
pub struct ReqwestPortal {
    config: ReqwestPortalConfig,
    client: Client,
}

impl ReqwestPortal {
    /// Creates a portal adapter with its own connection pool.
    pub fn new(config: ReqwestPortalConfig) -> Result<Self, PortalError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .redirect(redirect::Policy::limited(config.max_redirects))
            .build()
            .map_err(|e| PortalError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn map_transport_error(&self, err: reqwest::Error) -> PortalError {
        if err.is_timeout() {
            PortalError::timeout(self.config.timeout)
        } else if err.is_connect() {
            PortalError::network(format!("Connection failed: {}", err))
        } else {
            PortalError::network(err.to_string())
        }
    }

    fn is_login_redirect(&self, final_url: &Url) -> bool {
        !self.config.login_marker.is_empty()
            && final_url.as_str().contains(&self.config.login_marker)
    }
}

/// Classifies a response status. `Ok(())` means the body can be read.
fn check_status(status: StatusCode, url: &str) -> Result<(), PortalError> {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(PortalError::Unauthorized),
        s if s.is_success() => Ok(()),
        s => Err(PortalError::status(s.as_u16(), url)),
    }
}

#[async_trait]
impl TimetablePortal for ReqwestPortal {
    async fn fetch_page(&self, cookie: &PortalCookie, url: &str) -> Result<String, PortalError> {
        let parsed = Url::parse(url).map_err(|e| PortalError::InvalidUrl(format!("{}: {}", url, e)))?;

        tracing::debug!(url = %parsed, "Fetching portal page");

        let response = self
            .client
            .get(parsed)
            .header(COOKIE, cookie.header_value(&self.config.cookie_name))
            .header(USER_AGENT, generate_user_agent(&self.config.user_agent))
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        check_status(response.status(), url)?;

        if self.is_login_redirect(response.url()) {
            tracing::debug!(url, "Portal redirected to login");
            return Err(PortalError::Unauthorized);
        }

        response.text().await.map_err(|e| self.map_transport_error(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_are_reasonable() {
        let config = ReqwestPortalConfig::default();
        assert_eq!(config.cookie_name, "MOD_AUTH_CAS");
        assert_eq!(config.timeout, Duration::from_secs(15));
        assert_eq!(config.max_redirects, 5);
    }

    #[test]
    fn builder_overrides_fields() {
        let config = ReqwestPortalConfig::new()
            .with_cookie_name("SESSION")
            .with_user_agent("Agent")
            .with_login_marker("/login")
            .with_timeout(Duration::from_secs(3));
        assert_eq!(config.cookie_name, "SESSION");
        assert_eq!(config.user_agent, "Agent");
        assert_eq!(config.login_marker, "/login");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn auth_statuses_map_to_unauthorized() {
        assert_eq!(
            check_status(StatusCode::UNAUTHORIZED, "u"),
            Err(PortalError::Unauthorized)
        );
        assert_eq!(
            check_status(StatusCode::FORBIDDEN, "u"),
            Err(PortalError::Unauthorized)
        );
    }

    #[test]
    fn server_errors_keep_status_and_url() {
        assert_eq!(
            check_status(StatusCode::BAD_GATEWAY, "https://portal.example/x"),
            Err(PortalError::status(502, "https://portal.example/x"))
        );
        assert_eq!(check_status(StatusCode::OK, "u"), Ok(()));
    }

    #[test]
    fn login_redirect_is_detected() {
        let portal = ReqwestPortal::new(ReqwestPortalConfig::new()).unwrap();
        let login = Url::parse("https://cas.example.edu/cas/login?service=x").unwrap();
        let page = Url::parse("https://portal.example.edu/MyAcademic/schedule").unwrap();
        assert!(portal.is_login_redirect(&login));
        assert!(!portal.is_login_redirect(&page));
    }

    #[tokio::test]
    async fn malformed_url_is_rejected_before_sending() {
        let portal = ReqwestPortal::new(ReqwestPortalConfig::new()).unwrap();
        let cookie = PortalCookie::new("abc").unwrap();
        let result = portal.fetch_page(&cookie, "not a url").await;
        assert!(matches!(result, Err(PortalError::InvalidUrl(_))));
    }
}
