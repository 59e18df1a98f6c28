//! Subject and schedule records produced by the row parser.

use chrono::Weekday;

use super::days::weekday_index;
use super::session::Session;
use super::time_range::TimeRange;
use crate::domain::foundation::{ScheduleId, SubjectId};

/// One weekly recurring meeting of a subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekTimeSlot {
    pub day: Weekday,
    /// Zero-padded start time, e.g. `0800`.
    pub start: String,
    /// Zero-padded end time, e.g. `0920`.
    pub end: String,
}

impl WeekTimeSlot {
    pub fn new(day: Weekday, time: &TimeRange) -> Self {
        Self {
            day,
            start: time.start.clone(),
            end: time.end.clone(),
        }
    }

    /// Day as a Sunday-based index (Sunday = 0, Monday = 1, ...).
    pub fn day_index(&self) -> u8 {
        weekday_index(self.day)
    }
}

/// The identity columns of a course offering.
///
/// Continuation rows copy these from the preceding full row.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseIdentity {
    pub course_code: String,
    pub course_name: String,
    pub section: u32,
    pub credit_hours: f32,
}

/// One course-offering row with its meeting slots.
#[derive(Debug, Clone, PartialEq)]
pub struct Subject {
    pub id: SubjectId,
    pub course_code: String,
    pub course_name: String,
    pub section: u32,
    pub credit_hours: f32,
    pub slots: Vec<WeekTimeSlot>,
    pub venue: String,
    pub lecturer: String,
}

impl Subject {
    /// Creates a subject with a freshly generated id.
    pub fn new(
        identity: CourseIdentity,
        slots: Vec<WeekTimeSlot>,
        venue: impl Into<String>,
        lecturer: impl Into<String>,
    ) -> Self {
        Self {
            id: SubjectId::new(),
            course_code: identity.course_code,
            course_name: identity.course_name,
            section: identity.section,
            credit_hours: identity.credit_hours,
            slots,
            venue: venue.into(),
            lecturer: lecturer.into(),
        }
    }
}

/// All subjects parsed from one session's timetable page.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSchedule {
    pub id: ScheduleId,
    pub session: Session,
    pub subjects: Vec<Subject>,
}

impl SessionSchedule {
    pub fn new(session: Session, subjects: Vec<Subject>) -> Self {
        Self {
            id: ScheduleId::new(),
            session,
            subjects,
        }
    }

    pub fn subject_count(&self) -> usize {
        self.subjects.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> CourseIdentity {
        CourseIdentity {
            course_code: "CSCI 1301".to_string(),
            course_name: "Introduction to Computing".to_string(),
            section: 3,
            credit_hours: 3.0,
        }
    }

    #[test]
    fn slot_exposes_sunday_based_index() {
        let time = TimeRange {
            start: "0800".to_string(),
            end: "0920".to_string(),
        };
        assert_eq!(WeekTimeSlot::new(Weekday::Mon, &time).day_index(), 1);
        assert_eq!(WeekTimeSlot::new(Weekday::Sun, &time).day_index(), 0);
    }

    #[test]
    fn subjects_get_distinct_ids() {
        let a = Subject::new(identity(), vec![], "ICT LAB 1", "DR. AMIR");
        let b = Subject::new(identity(), vec![], "ICT LAB 1", "DR. AMIR");
        assert_ne!(a.id, b.id);
        assert_eq!(a.course_code, b.course_code);
        assert_eq!(a.section, b.section);
    }

    #[test]
    fn schedule_counts_subjects() {
        let session = Session::new("?ses=2024/2025&sem=1", "2024/2025 Sem 1");
        let schedule = SessionSchedule::new(
            session,
            vec![Subject::new(identity(), vec![], "V", "L")],
        );
        assert_eq!(schedule.subject_count(), 1);
    }
}
