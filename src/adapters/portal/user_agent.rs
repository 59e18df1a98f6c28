//! User-Agent generation for portal requests.

use uuid::Uuid;

/// Builds a `User-Agent` of the form `<product>/<version> (<slug>)`.
///
/// The slug is random per call so concurrent session fetches do not share
/// an identical agent string.
pub fn generate_user_agent(product: &str) -> String {
    let slug = Uuid::new_v4().simple().to_string();
    format!("{}/{} ({})", product, env!("CARGO_PKG_VERSION"), &slug[..8])
}
