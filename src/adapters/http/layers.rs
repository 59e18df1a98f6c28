//! Middleware stack shared by every route.

use axum::Router;
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::{CorsPolicy, HttpLayerSettings};

/// Wraps `router` with request ids, tracing, CORS and the request timeout.
///
/// Layers run outermost-last, so the request id is set before the trace
/// span opens and the timeout covers only the handler.
pub fn with_http_layers(router: Router, settings: &HttpLayerSettings) -> Router {
    router
        .layer(TimeoutLayer::new(settings.request_timeout))
        .layer(cors_layer(&settings.cors))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

fn cors_layer(policy: &CorsPolicy) -> CorsLayer {
    match policy {
        CorsPolicy::Permissive => CorsLayer::permissive(),
        CorsPolicy::Origins(origins) => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| HeaderValue::from_str(origin).ok())
                .collect();
            CorsLayer::new().allow_origin(AllowOrigin::list(origins))
        }
    }
}
