//! Error types for sticker set id resolution.

use thiserror::Error;

/// Errors that can occur while resolving user input to a sticker set id.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The input is neither a numeric id nor a recognized shop URL.
    #[error("could not detect a LINE sticker set id in {input:?}")]
    NotFound {
        /// The raw input that failed to resolve.
        input: String,
    },
}

impl ResolveError {
    /// Creates a not-found error for the given input.
    pub fn not_found(input: impl Into<String>) -> Self {
        Self::NotFound {
            input: input.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display_includes_input() {
        let error = ResolveError::not_found("https://example.com/whatever");
        let msg = error.to_string();
        assert!(
            msg.contains("https://example.com/whatever"),
            "Expected input in: {msg}"
        );
        assert!(msg.contains("sticker set id"), "Expected context in: {msg}");
    }
}
