//! Error types for the download module.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while persisting a sticker set to disk.
///
/// Any failure aborts the whole download; files written before the failure
/// point are left in place (no rollback, no resume bookkeeping).
#[derive(Debug, Error)]
pub enum DownloadError {
    /// Network-level error fetching one sticker asset.
    #[error("network error fetching sticker asset {item_id} from {url}: {source}")]
    AssetFetch {
        /// Id of the sticker whose asset failed.
        item_id: u64,
        /// The asset URL that failed.
        url: String,
        /// The underlying network error.
        #[source]
        source: reqwest::Error,
    },

    /// The asset CDN responded with a non-success HTTP status.
    #[error("HTTP {status} fetching sticker asset {item_id} from {url}")]
    AssetStatus {
        /// Id of the sticker whose asset failed.
        item_id: u64,
        /// The asset URL that failed.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// File system error (directory creation, file write).
    #[error("IO error writing to {path}: {source}")]
    Io {
        /// The path where the error occurred.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The sticker set metadata could not be serialized.
    #[error("failed to serialize sticker set metadata: {source}")]
    Metadata {
        /// The underlying serialization error.
        #[source]
        source: serde_json::Error,
    },
}

impl DownloadError {
    /// Creates an asset network error.
    pub fn asset_fetch(item_id: u64, url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::AssetFetch {
            item_id,
            url: url.into(),
            source,
        }
    }

    /// Creates an asset HTTP status error.
    pub fn asset_status(item_id: u64, url: impl Into<String>, status: u16) -> Self {
        Self::AssetStatus {
            item_id,
            url: url.into(),
            status,
        }
    }

    /// Creates an IO error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a metadata serialization error.
    pub fn metadata(source: serde_json::Error) -> Self {
        Self::Metadata { source }
    }
}
