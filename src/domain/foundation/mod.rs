//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, the portal credential, and error types
//! that the schedule module builds on.

mod auth;
mod errors;
mod ids;

pub use auth::PortalCookie;
pub use errors::{ErrorCode, ValidationError};
pub use ids::{ScheduleId, SubjectId};
