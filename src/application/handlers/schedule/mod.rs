//! Schedule handlers.
//!
//! - `DiscoverSessionsHandler` - session menu from the landing page
//! - `FetchSessionScheduleHandler` - one session's page through the row parser
//! - `GetScheduleHandler` - concurrent fan-out, aggregation and ordering

mod discover_sessions;
mod fetch_session_schedule;
mod get_schedule;

pub use discover_sessions::{unique_sessions, DiscoverSessionsHandler};
pub use fetch_session_schedule::{session_url, FetchSessionScheduleHandler};
pub use get_schedule::{GetScheduleHandler, GetScheduleQuery, ScheduleAggregator, ScheduleSettings};
