//! HTTP DTOs for schedule endpoints.
//!
//! The field names follow what timetable clients already consume.

use serde::{Deserialize, Serialize};

use crate::domain::schedule::{SessionSchedule, Subject, WeekTimeSlot};

pub const SCHEDULE_FETCHED_MESSAGE: &str = "Successfully fetched schedule";

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Query parameters for the schedule endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScheduleQuery {
    /// Only fetch the newest session.
    #[serde(default)]
    pub latest: Option<bool>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Envelope for a successful schedule fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleResponse {
    pub message: String,
    pub data: Vec<SessionScheduleResponse>,
}

impl ScheduleResponse {
    pub fn new(schedules: Vec<SessionSchedule>) -> Self {
        Self {
            message: SCHEDULE_FETCHED_MESSAGE.to_string(),
            data: schedules.into_iter().map(Into::into).collect(),
        }
    }
}

/// One session's timetable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionScheduleResponse {
    pub id: String,
    pub session_name: String,
    pub session_query: String,
    pub schedule: Vec<SubjectResponse>,
}

impl From<SessionSchedule> for SessionScheduleResponse {
    fn from(schedule: SessionSchedule) -> Self {
        Self {
            id: schedule.id.to_string(),
            session_name: schedule.session.name,
            session_query: schedule.session.locator,
            schedule: schedule.subjects.into_iter().map(Into::into).collect(),
        }
    }
}

/// One course offering with its weekly meetings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectResponse {
    pub id: String,
    pub course_code: String,
    pub course_name: String,
    pub section: u32,
    /// Credit hours.
    pub chr: f32,
    pub timestamps: Vec<TimeSlotResponse>,
    pub venue: String,
    pub lecturer: String,
}

impl From<Subject> for SubjectResponse {
    fn from(subject: Subject) -> Self {
        Self {
            id: subject.id.to_string(),
            course_code: subject.course_code,
            course_name: subject.course_name,
            section: subject.section,
            chr: subject.credit_hours,
            timestamps: subject.slots.iter().map(Into::into).collect(),
            venue: subject.venue,
            lecturer: subject.lecturer,
        }
    }
}

/// A weekly meeting; `day` is Sunday-based (Sunday = 0, Monday = 1, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlotResponse {
    pub day: u8,
    pub start: String,
    pub end: String,
}

impl From<&WeekTimeSlot> for TimeSlotResponse {
    fn from(slot: &WeekTimeSlot) -> Self {
        Self {
            day: slot.day_index(),
            start: slot.start.clone(),
            end: slot.end.clone(),
        }
    }
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl ToString, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }
}
