//! Schedule-specific error types.

use std::time::Duration;

use thiserror::Error;

use crate::domain::foundation::ErrorCode;
use crate::ports::PortalError;

/// Failures visible to the caller of a schedule request.
///
/// Row- and session-level problems never reach this type; they are absorbed
/// so that the caller still gets every session that could be read.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// The cookie is missing, blank, or rejected by the portal.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The landing page could not be fetched, so no session is known.
    #[error("Failed to discover sessions: {0}")]
    DiscoveryFailed(#[source] PortalError),

    /// Nothing survived: no session was discovered or every fetch failed.
    #[error("Schedule is empty ({sessions_discovered} sessions discovered)")]
    EmptyResult { sessions_discovered: usize },
}

impl ScheduleError {
    pub fn unauthorized(reason: impl Into<String>) -> Self {
        ScheduleError::Unauthorized(reason.into())
    }

    pub fn empty(sessions_discovered: usize) -> Self {
        ScheduleError::EmptyResult {
            sessions_discovered,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ScheduleError::Unauthorized(_) => ErrorCode::Unauthorized,
            ScheduleError::DiscoveryFailed(_) => ErrorCode::DiscoveryFailed,
            ScheduleError::EmptyResult { .. } => ErrorCode::ScheduleIsEmpty,
        }
    }
}

impl From<PortalError> for ScheduleError {
    /// Maps a landing-page failure: auth rejections stay auth errors,
    /// everything else means discovery failed.
    fn from(err: PortalError) -> Self {
        match err {
            PortalError::Unauthorized => ScheduleError::unauthorized("Portal rejected the cookie"),
            other => ScheduleError::DiscoveryFailed(other),
        }
    }
}

/// A single session that could not be fetched. Logged, never returned.
#[derive(Debug, Error)]
#[error("Failed to fetch session '{session_name}': {source}")]
pub struct SessionFetchError {
    pub session_name: String,
    #[source]
    pub source: PortalError,
}

impl SessionFetchError {
    pub fn new(session_name: impl Into<String>, source: PortalError) -> Self {
        Self {
            session_name: session_name.into(),
            source,
        }
    }

    /// The session did not finish within `after`.
    pub fn timed_out(session_name: impl Into<String>, after: Duration) -> Self {
        Self::new(session_name, PortalError::timeout(after))
    }

    pub fn code(&self) -> ErrorCode {
        ErrorCode::FetchFailed
    }
}
