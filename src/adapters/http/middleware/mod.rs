//! HTTP middleware for axum.
//!
//! - `portal_cookie` - Extracts the caller's portal session cookie

pub mod portal_cookie;

pub use portal_cookie::{
    extract_portal_cookie, portal_cookie_middleware, CookieRejection, PortalCookieState,
    RequirePortalCookie,
};
