//! Portal cookie middleware and extractor for axum.
//!
//! The caller forwards the session cookie it obtained from the portal's CAS
//! login, either as a Bearer token or as the portal's own cookie:
//!
//! ```text
//! Authorization: Bearer <cookie value>
//! Cookie: MOD_AUTH_CAS=<cookie value>
//! ```
//!
//! ```text
//! Request → portal_cookie_middleware → injects PortalCookie into extensions
//!                                               ↓
//!                          Handler → RequirePortalCookie extractor reads it
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::foundation::PortalCookie;

/// Middleware state - the name of the portal's session cookie.
#[derive(Debug, Clone)]
pub struct PortalCookieState {
    cookie_name: Arc<str>,
}

impl PortalCookieState {
    pub fn new(cookie_name: impl Into<String>) -> Self {
        Self {
            cookie_name: Arc::from(cookie_name.into()),
        }
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }
}

/// Finds the portal cookie in the request headers.
///
/// A Bearer token wins over the `Cookie` header. Blank values are ignored.
pub fn extract_portal_cookie(headers: &HeaderMap, cookie_name: &str) -> Option<PortalCookie> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .and_then(|token| PortalCookie::new(token).ok());

    bearer.or_else(|| {
        headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|h| h.to_str().ok())
            .flat_map(|h| h.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == cookie_name)
            .and_then(|(_, value)| PortalCookie::new(value).ok())
    })
}

/// Injects the caller's portal cookie into request extensions when present.
///
/// Requests without a cookie pass through untouched; handlers that need
/// one use [`RequirePortalCookie`].
pub async fn portal_cookie_middleware(
    State(state): State<PortalCookieState>,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(cookie) = extract_portal_cookie(request.headers(), state.cookie_name()) {
        request.extensions_mut().insert(cookie);
    }
    next.run(request).await
}

/// Extractor that requires a portal cookie.
#[derive(Debug, Clone)]
pub struct RequirePortalCookie(pub PortalCookie);

#[async_trait]
impl<S> FromRequestParts<S> for RequirePortalCookie
where
    S: Send + Sync,
{
    type Rejection = CookieRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<PortalCookie>()
            .cloned()
            .map(RequirePortalCookie)
            .ok_or(CookieRejection::Missing)
    }
}

/// Rejection type for a missing portal cookie.
#[derive(Debug, Clone)]
pub enum CookieRejection {
    Missing,
}

impl IntoResponse for CookieRejection {
    fn into_response(self) -> Response {
        let message = match self {
            CookieRejection::Missing => "Portal session cookie required",
        };

        (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({
                "code": "UNAUTHORIZED",
                "message": message
            })),
        )
            .into_response()
    }
}
