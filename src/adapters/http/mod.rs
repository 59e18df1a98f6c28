//! HTTP adapters - REST API implementations.

pub mod health;
pub mod layers;
pub mod middleware;
pub mod schedule;

pub use health::health_router;
pub use layers::with_http_layers;
pub use middleware::PortalCookieState;
pub use schedule::{schedule_router, ScheduleAppState};
