//! Portal adapters - Implementations of the timetable portal port.
//!
//! - `ReqwestPortal` - real HTTP fetches
//! - `MockPortal` - canned responses for tests

mod mock;
mod reqwest_portal;
mod user_agent;

pub use mock::MockPortal;
pub use reqwest_portal::{ReqwestPortal, ReqwestPortalConfig};
pub use user_agent::generate_user_agent;
