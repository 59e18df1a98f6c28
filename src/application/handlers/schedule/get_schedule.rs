//! GetScheduleHandler - Fans out one fetch per session and aggregates.
//!
//! ```text
//! discover sessions ──┬── task: fetch + parse session 1 ──┐
//!                     ├── task: fetch + parse session 2 ──┼── aggregator ── sort ── result
//!                     └── task: fetch + parse session N ──┘
//! ```
//!
//! A failed or timed-out session is logged and left out. Only an empty
//! aggregate fails the whole request.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use tokio::sync::Mutex;

use super::discover_sessions::DiscoverSessionsHandler;
use super::fetch_session_schedule::FetchSessionScheduleHandler;
use crate::domain::foundation::PortalCookie;
use crate::domain::schedule::{sort_schedules, ScheduleError, SessionFetchError, SessionSchedule};
use crate::ports::{TimetablePageParser, TimetablePortal};

/// Query for every session's timetable.
#[derive(Debug, Clone)]
pub struct GetScheduleQuery {
    pub cookie: PortalCookie,
    /// Restrict to the newest session only.
    pub latest_only: bool,
}

/// Settings shared by the schedule handlers.
#[derive(Debug, Clone)]
pub struct ScheduleSettings {
    /// Schedule page address; session locators are appended to it.
    pub schedule_url: String,
    /// Upper bound on one session's fetch and parse.
    pub session_timeout: Duration,
}

impl ScheduleSettings {
    pub fn new(schedule_url: impl Into<String>) -> Self {
        Self {
            schedule_url: schedule_url.into(),
            session_timeout: Duration::from_secs(30),
        }
    }

    pub fn with_session_timeout(mut self, timeout: Duration) -> Self {
        self.session_timeout = timeout;
        self
    }
}

/// Request-scoped collection point for finished session schedules.
#[derive(Debug, Clone, Default)]
pub struct ScheduleAggregator {
    schedules: Arc<Mutex<Vec<SessionSchedule>>>,
}

impl ScheduleAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn push(&self, schedule: SessionSchedule) {
        self.schedules.lock().await.push(schedule);
    }

    /// Takes everything collected so far, leaving the aggregator empty.
    pub async fn take(&self) -> Vec<SessionSchedule> {
        std::mem::take(&mut *self.schedules.lock().await)
    }
}

/// Handler for the full multi-session schedule.
pub struct GetScheduleHandler {
    discover: DiscoverSessionsHandler,
    fetcher: Arc<FetchSessionScheduleHandler>,
    session_timeout: Duration,
}

impl GetScheduleHandler {
    pub fn new(
        portal: Arc<dyn TimetablePortal>,
        parser: Arc<dyn TimetablePageParser>,
        settings: ScheduleSettings,
    ) -> Self {
        Self {
            discover: DiscoverSessionsHandler::new(
                Arc::clone(&portal),
                Arc::clone(&parser),
                settings.schedule_url.clone(),
            ),
            fetcher: Arc::new(FetchSessionScheduleHandler::new(
                portal,
                parser,
                settings.schedule_url,
            )),
            session_timeout: settings.session_timeout,
        }
    }

    /// Discovers sessions, fetches each concurrently, and returns the
    /// survivors sorted newest first.
    ///
    /// # Errors
    ///
    /// - `ScheduleError::Unauthorized` / `ScheduleError::DiscoveryFailed`
    ///   from discovery
    /// - `ScheduleError::EmptyResult` if no session schedule survived
    pub async fn handle(
        &self,
        query: GetScheduleQuery,
    ) -> Result<Vec<SessionSchedule>, ScheduleError> {
        let cookie = Arc::new(query.cookie);
        let sessions = self.discover.handle(&cookie, query.latest_only).await?;
        let discovered = sessions.len();

        tracing::info!(
            sessions = discovered,
            latest_only = query.latest_only,
            "Discovered timetable sessions"
        );

        let aggregator = ScheduleAggregator::new();
        let timeout = self.session_timeout;

        let tasks = sessions.into_iter().map(|session| {
            let fetcher = Arc::clone(&self.fetcher);
            let cookie = Arc::clone(&cookie);
            let aggregator = aggregator.clone();

            tokio::spawn(async move {
                let session_name = session.name.clone();
                let outcome = tokio::time::timeout(timeout, fetcher.handle(&cookie, session))
                    .await
                    .unwrap_or_else(|_| Err(SessionFetchError::timed_out(session_name, timeout)));

                match outcome {
                    Ok(schedule) => aggregator.push(schedule).await,
                    Err(err) => tracing::warn!(
                        session = %err.session_name,
                        code = %err.code(),
                        error = %err.source,
                        "Skipping session"
                    ),
                }
            })
        });

        for joined in join_all(tasks).await {
            if let Err(e) = joined {
                tracing::error!("Session task aborted: {}", e);
            }
        }

        let mut schedules = aggregator.take().await;
        if schedules.is_empty() {
            tracing::error!(sessions = discovered, "Schedule is empty");
            return Err(ScheduleError::empty(discovered));
        }

        sort_schedules(&mut schedules);
        Ok(schedules)
    }
}
