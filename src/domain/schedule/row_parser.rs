//! Timetable row state machine.
//!
//! The portal renders one offering per table row, but when an offering meets
//! in more than one slot the extra slots are rendered as short rows whose
//! identity cells are merged into the row above. The parser therefore
//! dispatches on how many non-empty cells a row has:
//!
//! | cells | meaning                                                        |
//! |-------|----------------------------------------------------------------|
//! | 0     | header or separator, ignored                                   |
//! | 9     | full row: code, name, section, credit hours, (unused), days,   |
//! |       | time, venue, lecturer                                          |
//! | 4     | continuation: days, time, venue, lecturer                      |
//! | other | ignored                                                        |
//!
//! A continuation row becomes its own [`Subject`] carrying the identity of
//! the most recent full row. Only full rows move that pointer.

use super::days::expand_weekdays;
use super::subject::{CourseIdentity, Subject, WeekTimeSlot};
use super::time_range::normalize_time_range;

const FULL_ROW_CELLS: usize = 9;
const CONTINUATION_ROW_CELLS: usize = 4;

/// What the parser did with a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// A full row produced a new subject.
    Subject,
    /// A continuation row produced a subject inheriting the previous identity.
    Continuation,
    /// The row had a shape the parser does not act on.
    Ignored { cells: usize },
    /// The row had the right shape but could not be used.
    Dropped(DropReason),
}

/// Why a row was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropReason {
    InvalidSection(String),
    InvalidCreditHours(String),
    NoPrecedingSubject,
}

/// Parses one session's table rows into subjects.
///
/// One parser instance belongs to one session; the "last subject" context
/// never crosses sessions.
#[derive(Debug, Default)]
pub struct RowParser {
    subjects: Vec<Subject>,
    last_identity: Option<CourseIdentity>,
}

impl RowParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses every row in order and returns the collected subjects.
    pub fn parse_rows<I, S>(rows: I) -> Vec<Subject>
    where
        I: IntoIterator<Item = Vec<S>>,
        S: AsRef<str>,
    {
        let mut parser = Self::new();
        for row in rows {
            let outcome = parser.push_row(&row);
            if let RowOutcome::Dropped(reason) = outcome {
                tracing::debug!(?reason, "Dropped timetable row");
            }
        }
        parser.finish()
    }

    /// Feeds one row of cell texts to the state machine.
    ///
    /// Blank cells are discarded before the row shape is decided.
    pub fn push_row<S: AsRef<str>>(&mut self, cells: &[S]) -> RowOutcome {
        let cells: Vec<&str> = cells
            .iter()
            .map(|c| c.as_ref().trim())
            .filter(|c| !c.is_empty())
            .collect();

        match cells.len() {
            FULL_ROW_CELLS => self.full_row(&cells),
            CONTINUATION_ROW_CELLS => self.continuation_row(&cells),
            other => RowOutcome::Ignored { cells: other },
        }
    }

    /// Subjects parsed so far, in row order.
    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn finish(self) -> Vec<Subject> {
        self.subjects
    }

    fn full_row(&mut self, cells: &[&str]) -> RowOutcome {
        let section = match cells[2].parse::<u32>() {
            Ok(section) if section > 0 => section,
            _ => return RowOutcome::Dropped(DropReason::InvalidSection(cells[2].to_string())),
        };
        let credit_hours = match cells[3].parse::<f32>() {
            Ok(chr) if chr.is_finite() => chr,
            _ => {
                return RowOutcome::Dropped(DropReason::InvalidCreditHours(cells[3].to_string()))
            }
        };

        let identity = CourseIdentity {
            course_code: cells[0].to_string(),
            course_name: cells[1].to_string(),
            section,
            credit_hours,
        };
        let slots = build_slots(cells[5], cells[6]);

        self.last_identity = Some(identity.clone());
        self.subjects.push(Subject::new(identity, slots, cells[7], cells[8]));
        RowOutcome::Subject
    }

    fn continuation_row(&mut self, cells: &[&str]) -> RowOutcome {
        let Some(identity) = self.last_identity.clone() else {
            return RowOutcome::Dropped(DropReason::NoPrecedingSubject);
        };
        let slots = build_slots(cells[0], cells[1]);

        self.subjects.push(Subject::new(identity, slots, cells[2], cells[3]));
        RowOutcome::Continuation
    }
}

/// One slot per recognised day, all sharing the row's time range.
fn build_slots(day_cell: &str, time_cell: &str) -> Vec<WeekTimeSlot> {
    let Some(time) = normalize_time_range(time_cell) else {
        return Vec::new();
    };
    expand_weekdays(day_cell)
        .into_iter()
        .map(|day| WeekTimeSlot::new(day, &time))
        .collect()
}
