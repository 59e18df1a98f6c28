//! Markup adapters - Implementations of the page parser port.

mod html_parser;

pub use html_parser::HtmlTimetableParser;
