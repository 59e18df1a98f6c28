//! Timetable Portal Port - Interface for fetching portal pages.
//!
//! The schedule handlers only ever need "give me the HTML at this address,
//! authenticated with this cookie". Keeping that behind a trait lets the
//! orchestration run against canned pages in tests.
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct StaticPortal(String);
//!
//! #[async_trait]
//! impl TimetablePortal for StaticPortal {
//!     async fn fetch_page(&self, _cookie: &PortalCookie, _url: &str) -> Result<String, PortalError> {
//!         Ok(self.0.clone())
//!     }
//! }
//! ```

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::PortalCookie;

/// Port for authenticated page fetches against the timetable portal.
///
/// One call is one attempt; implementations must not retry.
#[async_trait]
pub trait TimetablePortal: Send + Sync {
    /// Fetches the page at `url` and returns its body.
    ///
    /// # Errors
    ///
    /// - `PortalError::Unauthorized` if the portal rejects the cookie
    /// - `PortalError::Status` for any other non-success response
    /// - `PortalError::Network` / `PortalError::Timeout` for transport failures
    async fn fetch_page(&self, cookie: &PortalCookie, url: &str) -> Result<String, PortalError>;
}

/// Errors from portal fetches.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PortalError {
    #[error("Portal rejected the session cookie")]
    Unauthorized,

    #[error("Portal returned status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out after {after:?}")]
    Timeout { after: Duration },

    #[error("Invalid portal URL: {0}")]
    InvalidUrl(String),
}

impl PortalError {
    pub fn network(message: impl Into<String>) -> Self {
        PortalError::Network(message.into())
    }

    pub fn status(status: u16, url: impl Into<String>) -> Self {
        PortalError::Status {
            status,
            url: url.into(),
        }
    }

    pub fn timeout(after: Duration) -> Self {
        PortalError::Timeout { after }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_displays_url() {
        let err = PortalError::status(502, "https://portal.example/schedule");
        assert_eq!(
            err.to_string(),
            "Portal returned status 502 for https://portal.example/schedule"
        );
    }

    #[test]
    fn sub_second_timeout_keeps_its_unit() {
        let err = PortalError::timeout(Duration::from_millis(250));
        assert_eq!(err.to_string(), "Request timed out after 250ms");

        let err = PortalError::timeout(Duration::from_secs(15));
        assert_eq!(err.to_string(), "Request timed out after 15s");
    }
}
