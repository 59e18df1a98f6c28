//! Schedule domain module.
//!
//! Pure timetable logic: day-code expansion, time normalization, the row
//! state machine that turns table rows into subjects, and session ordering.
//! Nothing here performs I/O.

mod days;
mod errors;
mod row_parser;
mod session;
mod subject;
mod time_range;

pub use days::{expand_day_codes, expand_weekdays, weekday_for, weekday_index, DAY_SEPARATOR};
pub use errors::{ScheduleError, SessionFetchError};
pub use row_parser::{DropReason, RowOutcome, RowParser};
pub use session::{compare_session_names, sort_schedules, Session};
pub use subject::{CourseIdentity, SessionSchedule, Subject, WeekTimeSlot};
pub use time_range::{normalize_time_range, TimeRange, TIME_SEPARATOR};
