//! Shared User-Agent string for shop and asset HTTP traffic.
//!
//! Single source for the project URL and UA format so page fetches and asset
//! downloads stay consistent and easy to update (good citizenship; RFC 9308).

/// Project URL for User-Agent identification (good citizenship; RFC 9308).
const PROJECT_UA_URL: &str = "https://github.com/line2signal/line2signal";

/// Default User-Agent for all outgoing requests (identifies the tool).
#[must_use]
pub(crate) fn default_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("line2signal/{version} (sticker-archiver; +{PROJECT_UA_URL})")
}
