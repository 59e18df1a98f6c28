//! Adapters - Implementations of port interfaces.
//!
//! - `http` - axum routes exposing the schedule
//! - `markup` - HTML extraction of session links and table rows
//! - `portal` - reqwest client for the timetable portal, plus a mock

pub mod http;
pub mod markup;
pub mod portal;
