//! DiscoverSessionsHandler - Reads the session menu from the landing page.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::foundation::PortalCookie;
use crate::domain::schedule::{ScheduleError, Session};
use crate::ports::{TimetablePageParser, TimetablePortal};

/// Handler that lists the sessions the portal offers for this cookie.
pub struct DiscoverSessionsHandler {
    portal: Arc<dyn TimetablePortal>,
    parser: Arc<dyn TimetablePageParser>,
    schedule_url: String,
}

impl DiscoverSessionsHandler {
    pub fn new(
        portal: Arc<dyn TimetablePortal>,
        parser: Arc<dyn TimetablePageParser>,
        schedule_url: impl Into<String>,
    ) -> Self {
        Self {
            portal,
            parser,
            schedule_url: schedule_url.into(),
        }
    }

    /// Fetches the landing page and returns its sessions in menu order.
    ///
    /// With `latest_only`, only the first menu entry is kept; the portal
    /// lists the newest session first.
    ///
    /// # Errors
    ///
    /// - `ScheduleError::Unauthorized` if the portal rejects the cookie
    /// - `ScheduleError::DiscoveryFailed` if the landing page cannot be fetched
    pub async fn handle(
        &self,
        cookie: &PortalCookie,
        latest_only: bool,
    ) -> Result<Vec<Session>, ScheduleError> {
        let html = self.portal.fetch_page(cookie, &self.schedule_url).await?;

        let mut sessions = unique_sessions(self.parser.session_links(&html));
        if latest_only {
            sessions.truncate(1);
        }
        Ok(sessions)
    }
}

/// Drops entries without a locator and repeats of a locator already seen.
pub fn unique_sessions(links: Vec<Session>) -> Vec<Session> {
    let mut seen = HashSet::new();
    links
        .into_iter()
        .filter(|session| !session.locator.is_empty())
        .filter(|session| seen.insert(session.locator.clone()))
        .collect()
}
