//! Mock portal adapter for testing.
//!
//! Serves canned pages by exact URL, so the schedule handlers can be
//! exercised without network access.
//!
//! # Example
//!
//! ```ignore
//! let portal = MockPortal::new()
//!     .with_page("https://portal.test/schedule", LANDING_HTML)
//!     .with_error("https://portal.test/schedule?ses=1", PortalError::network("reset"));
//! ```

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::foundation::PortalCookie;
use crate::ports::{PortalError, TimetablePortal};

/// Canned-response portal. Unknown URLs answer with a 404 status error.
#[derive(Debug, Default)]
pub struct MockPortal {
    responses: HashMap<String, Result<String, PortalError>>,
    delays: HashMap<String, Duration>,
    accepted_cookie: Option<String>,
    requests: Mutex<Vec<String>>,
}

impl MockPortal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serves `html` for `url`.
    pub fn with_page(mut self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.responses.insert(url.into(), Ok(html.into()));
        self
    }

    /// Fails every fetch of `url` with `error`.
    pub fn with_error(mut self, url: impl Into<String>, error: PortalError) -> Self {
        self.responses.insert(url.into(), Err(error));
        self
    }

    /// Delays the response for `url`.
    pub fn with_delay(mut self, url: impl Into<String>, delay: Duration) -> Self {
        self.delays.insert(url.into(), delay);
        self
    }

    /// Rejects every cookie except this one with `PortalError::Unauthorized`.
    pub fn with_accepted_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.accepted_cookie = Some(cookie.into());
        self
    }

    /// URLs fetched so far, in call order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl TimetablePortal for MockPortal {
    async fn fetch_page(&self, cookie: &PortalCookie, url: &str) -> Result<String, PortalError> {
        self.requests.lock().unwrap().push(url.to_string());

        if let Some(delay) = self.delays.get(url) {
            tokio::time::sleep(*delay).await;
        }

        if let Some(accepted) = &self.accepted_cookie {
            if cookie.expose() != accepted {
                return Err(PortalError::Unauthorized);
            }
        }

        self.responses
            .get(url)
            .cloned()
            .unwrap_or_else(|| Err(PortalError::status(404, url)))
    }
}
