//! Strongly-typed identifier value objects.
//!
//! Identifiers render with a kind prefix (`subject:`, `schedule:`) so that a
//! bare id in a response body says what it points at. Ids are minted during
//! parsing and only ever leave the crate through `Display`.

use std::fmt;
use uuid::Uuid;

/// Unique identifier for a parsed subject row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubjectId(Uuid);

impl SubjectId {
    const PREFIX: &'static str = "subject:";

    /// Creates a new random SubjectId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SubjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.0.simple())
    }
}

/// Unique identifier for one session's parsed schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScheduleId(Uuid);

impl ScheduleId {
    const PREFIX: &'static str = "schedule:";

    /// Creates a new random ScheduleId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ScheduleId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ScheduleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.0.simple())
    }
}
