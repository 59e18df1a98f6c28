//! Application handlers.
//!
//! Query handlers that orchestrate portal fetches and domain parsing.

pub mod schedule;

pub use schedule::{
    DiscoverSessionsHandler, FetchSessionScheduleHandler, GetScheduleHandler, GetScheduleQuery,
    ScheduleAggregator, ScheduleSettings,
};
