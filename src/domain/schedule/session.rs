//! Academic sessions and their display ordering.

use std::cmp::Ordering;

use super::subject::SessionSchedule;

/// An academic term listed in the portal's session dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Session {
    /// Opaque navigation token appended to the schedule page address.
    pub locator: String,
    /// Human-readable name, e.g. `2024/2025 Sem 1`.
    pub name: String,
}

impl Session {
    pub fn new(locator: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            locator: locator.into(),
            name: name.into(),
        }
    }
}

/// Sort key extracted from names shaped like `2024/2025 Sem 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct TermKey {
    start_year: u32,
    semester: u32,
}

fn term_key(name: &str) -> Option<TermKey> {
    let tokens: Vec<&str> = name
        .split_whitespace()
        .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric() && c != '/'))
        .filter(|t| !t.is_empty())
        .collect();

    let start_year = tokens.iter().find_map(|t| {
        let (start, end) = t.split_once('/')?;
        end.parse::<u32>().ok()?;
        start.parse::<u32>().ok()
    })?;

    let semester = tokens.windows(2).find_map(|pair| {
        let label = pair[0].to_ascii_lowercase();
        if label == "sem" || label == "semester" {
            pair[1].parse::<u32>().ok()
        } else {
            None
        }
    })?;

    Some(TermKey {
        start_year,
        semester,
    })
}

/// Orders session names newest first.
///
/// Names of the form `YYYY/YYYY Sem N` compare by start year, then semester,
/// both descending. Names without that shape come after all recognised ones,
/// in plain lexical order.
pub fn compare_session_names(a: &str, b: &str) -> Ordering {
    match (term_key(a), term_key(b)) {
        (Some(ka), Some(kb)) => kb.cmp(&ka),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Sorts schedules by session name. Equal names keep their relative order.
pub fn sort_schedules(schedules: &mut [SessionSchedule]) {
    schedules.sort_by(|a, b| compare_session_names(&a.session.name, &b.session.name));
}
