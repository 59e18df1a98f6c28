//! HTTP handlers for schedule endpoints.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::middleware::RequirePortalCookie;
use crate::application::handlers::schedule::{GetScheduleHandler, GetScheduleQuery};
use crate::domain::schedule::ScheduleError;

use super::dto::{ErrorResponse, ScheduleQuery, ScheduleResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ScheduleAppState {
    handler: Arc<GetScheduleHandler>,
}

impl ScheduleAppState {
    pub fn new(handler: Arc<GetScheduleHandler>) -> Self {
        Self { handler }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/schedule - Fetch the caller's timetable for every session
pub async fn get_schedule(
    State(state): State<ScheduleAppState>,
    RequirePortalCookie(cookie): RequirePortalCookie,
    Query(params): Query<ScheduleQuery>,
) -> Response {
    let query = GetScheduleQuery {
        cookie,
        latest_only: params.latest.unwrap_or(false),
    };

    match state.handler.handle(query).await {
        Ok(schedules) => (StatusCode::OK, Json(ScheduleResponse::new(schedules))).into_response(),
        Err(e) => handle_schedule_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_schedule_error(error: ScheduleError) -> Response {
    let status = match &error {
        ScheduleError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        ScheduleError::DiscoveryFailed(source) => {
            tracing::error!("Session discovery failed: {}", source);
            StatusCode::BAD_GATEWAY
        }
        ScheduleError::EmptyResult { .. } => StatusCode::NOT_FOUND,
    };

    (
        status,
        Json(ErrorResponse::new(error.code(), error.to_string())),
    )
        .into_response()
}
