//! HTTP routes for schedule endpoints.

use axum::{middleware, routing::get, Router};

use super::handlers::{get_schedule, ScheduleAppState};
use crate::adapters::http::middleware::{portal_cookie_middleware, PortalCookieState};

/// Creates the schedule router.
///
/// The portal cookie middleware runs on every route here, so handlers can
/// rely on `RequirePortalCookie`.
pub fn schedule_router(state: ScheduleAppState, cookies: PortalCookieState) -> Router {
    Router::new()
        .route("/api/schedule", get(get_schedule))
        .layer(middleware::from_fn_with_state(cookies, portal_cookie_middleware))
        .with_state(state)
}
