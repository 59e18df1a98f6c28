//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }
}

/// Machine-readable codes for schedule failures.
///
/// Request-level failures reach the caller; `FetchFailed` only ever shows
/// up in logs, since a failed session is skipped rather than returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    Unauthorized,
    FetchFailed,
    DiscoveryFailed,
    ScheduleIsEmpty,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::FetchFailed => "FETCH_FAILED",
            ErrorCode::DiscoveryFailed => "DISCOVERY_FAILED",
            ErrorCode::ScheduleIsEmpty => "SCHEDULE_IS_EMPTY",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("cookie");
        assert_eq!(format!("{}", err), "Field 'cookie' cannot be empty");
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::ScheduleIsEmpty), "SCHEDULE_IS_EMPTY");
        assert_eq!(format!("{}", ErrorCode::Unauthorized), "UNAUTHORIZED");
        assert_eq!(format!("{}", ErrorCode::FetchFailed), "FETCH_FAILED");
        assert_eq!(format!("{}", ErrorCode::DiscoveryFailed), "DISCOVERY_FAILED");
    }
}
