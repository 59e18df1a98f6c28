//! HTTP adapter for schedule endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ErrorResponse, ScheduleQuery, ScheduleResponse, SessionScheduleResponse, SubjectResponse,
    TimeSlotResponse, SCHEDULE_FETCHED_MESSAGE,
};
pub use handlers::ScheduleAppState;
pub use routes::schedule_router;
