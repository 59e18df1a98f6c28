//! CSS-selector based page parser adapter.
//!
//! Reads the portal's AdminLTE-style markup: the session menu sits in the
//! primary box header's dropdown, and the timetable is the hover table
//! inside the box body.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::domain::schedule::Session;
use crate::ports::TimetablePageParser;

static SESSION_LINK: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(
        ".box.box-primary .box-header.with-border .dropdown \
         ul.dropdown-menu li[style*='font-size:16px'] a",
    )
    .expect("session link selector is valid")
});

static TABLE_ROW: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(".box-body table.table.table-hover tr").expect("table row selector is valid")
});

static TABLE_CELL: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td").expect("table cell selector is valid"));

/// Selector-based implementation of TimetablePageParser.
///
/// Selectors are compiled once per process and shared by every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlTimetableParser;

impl HtmlTimetableParser {
    pub fn new() -> Self {
        Self
    }
}

impl TimetablePageParser for HtmlTimetableParser {
    fn session_links(&self, html: &str) -> Vec<Session> {
        let document = Html::parse_document(html);

        document
            .select(&SESSION_LINK)
            .map(|anchor| {
                let locator = anchor.value().attr("href").unwrap_or_default().trim();
                Session::new(locator, element_text(anchor))
            })
            .collect()
    }

    fn table_rows(&self, html: &str) -> Vec<Vec<String>> {
        let document = Html::parse_document(html);

        document
            .select(&TABLE_ROW)
            .map(|row| row.select(&TABLE_CELL).map(element_text).collect())
            .collect()
    }
}

/// Text content of an element with whitespace runs collapsed.
fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
