//! Error types for sticker set fetching.
//!
//! All variants are terminal for the fetch in progress; nothing is retried.
//! A partial sticker set is never returned.

use thiserror::Error;

/// Errors that can occur while fetching and parsing a product page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level error (DNS resolution, connection refused, TLS, timeout).
    #[error("network error fetching {url}: {source}")]
    Http {
        /// The product page URL that failed.
        url: String,
        /// The underlying network error.
        #[source]
        source: reqwest::Error,
    },

    /// The page responded with a non-success HTTP status.
    #[error("HTTP {status} fetching {url}")]
    HttpStatus {
        /// The product page URL that failed.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// The structured-data block is absent or not a usable product record.
    #[error("no usable sticker set metadata on {url}: {reason}")]
    MetadataMissing {
        /// The product page URL.
        url: String,
        /// What was wrong with the structured data.
        reason: String,
    },

    /// The page reports a different sticker set than the one requested.
    #[error("page {url} reports sticker set {reported}, requested {requested}")]
    SkuMismatch {
        /// The product page URL.
        url: String,
        /// The id the fetch was issued for.
        requested: u64,
        /// The SKU the page carries.
        reported: u64,
    },

    /// A sticker preview element is missing or carries a malformed payload.
    #[error("sticker preview item {index} on {url} could not be parsed: {reason}")]
    ItemParse {
        /// The product page URL.
        url: String,
        /// Document-order position of the failing element.
        index: usize,
        /// What was wrong with the payload.
        reason: String,
    },
}

impl FetchError {
    /// Creates a network error from a reqwest error.
    pub fn http(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Http {
            url: url.into(),
            source,
        }
    }

    /// Creates an HTTP status error.
    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }

    /// Creates a missing/unusable metadata error.
    pub fn metadata_missing(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MetadataMissing {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Creates a SKU mismatch error.
    pub fn sku_mismatch(url: impl Into<String>, requested: u64, reported: u64) -> Self {
        Self::SkuMismatch {
            url: url.into(),
            requested,
            reported,
        }
    }

    /// Creates a preview item parse error.
    pub fn item_parse(url: impl Into<String>, index: usize, reason: impl Into<String>) -> Self {
        Self::ItemParse {
            url: url.into(),
            index,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_display() {
        let error = FetchError::http_status("https://store.line.me/stickershop/product/1/en", 404);
        let msg = error.to_string();
        assert!(msg.contains("404"), "Expected status in: {msg}");
        assert!(msg.contains("/product/1/en"), "Expected URL in: {msg}");
    }

    #[test]
    fn test_metadata_missing_display() {
        let error = FetchError::metadata_missing("https://example.com", "no block");
        let msg = error.to_string();
        assert!(msg.contains("no block"), "Expected reason in: {msg}");
    }

    #[test]
    fn test_sku_mismatch_display() {
        let error = FetchError::sku_mismatch("https://example.com", 1, 2);
        let msg = error.to_string();
        assert!(msg.contains("requested 1"), "Expected requested id in: {msg}");
        assert!(
            msg.contains("sticker set 2"),
            "Expected reported id in: {msg}"
        );
    }

    #[test]
    fn test_item_parse_display() {
        let error = FetchError::item_parse("https://example.com", 3, "bad json");
        let msg = error.to_string();
        assert!(msg.contains("item 3"), "Expected index in: {msg}");
        assert!(msg.contains("bad json"), "Expected reason in: {msg}");
    }
}
