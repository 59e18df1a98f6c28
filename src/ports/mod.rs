//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `TimetablePortal` - Authenticated page fetches against the portal
//! - `TimetablePageParser` - Markup extraction from fetched pages

mod page_parser;
mod timetable_portal;

pub use page_parser::TimetablePageParser;
pub use timetable_portal::{PortalError, TimetablePortal};
