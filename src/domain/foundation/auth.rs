//! Portal credential types for the domain layer.
//!
//! The portal authenticates with an opaque session cookie issued by an
//! external CAS login. This crate never produces one; it only carries it.
//!
//! # Example
//!
//! ```ignore
//! let cookie = PortalCookie::new("ST-1234-abcd")?;
//! assert_eq!(cookie.header_value("MOD_AUTH_CAS"), "MOD_AUTH_CAS=ST-1234-abcd");
//! ```

use secrecy::{ExposeSecret, Secret};
use std::fmt;

use super::ValidationError;

/// Session cookie value issued by the portal's login flow.
///
/// The value is held as a [`Secret`] so it never shows up in `Debug` output
/// or log lines.
#[derive(Clone)]
pub struct PortalCookie(Secret<String>);

impl PortalCookie {
    /// Creates a cookie from a raw value.
    ///
    /// Surrounding whitespace is trimmed. A blank value is rejected.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("cookie"));
        }
        Ok(Self(Secret::new(trimmed.to_string())))
    }

    /// Renders the `Cookie` request header value for the given cookie name.
    pub fn header_value(&self, cookie_name: &str) -> String {
        format!("{}={}", cookie_name, self.0.expose_secret())
    }

    /// Exposes the raw cookie value.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl fmt::Debug for PortalCookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PortalCookie([REDACTED])")
    }
}
