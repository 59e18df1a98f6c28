//! Page Parser Port - Markup extraction interface.
//!
//! Turns raw portal HTML into the two shapes the schedule handlers work
//! with: the session dropdown entries and the timetable's table rows. The
//! row state machine lives in the domain and never sees markup.

use crate::domain::schedule::Session;

/// Port for extracting structure from portal pages.
///
/// # Contract
///
/// Implementations must:
/// - Return dropdown entries in document order, duplicates included
/// - Return one entry per table row, in document order, with cell texts
///   trimmed and inner whitespace collapsed
/// - Never fail: markup that does not match yields empty output
pub trait TimetablePageParser: Send + Sync {
    /// Extracts `(locator, name)` pairs from the landing page's session menu.
    fn session_links(&self, html: &str) -> Vec<Session>;

    /// Extracts the cell texts of every row of the timetable table.
    fn table_rows(&self, html: &str) -> Vec<Vec<String>>;
}
