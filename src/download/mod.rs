//! Sticker set persistence: directory layout, metadata record, asset fetches.
//!
//! Layout under the caller-supplied root:
//!
//! ```text
//! <root>/<sticker_id>/metadata.json
//! <root>/<sticker_id>/data/<item_id>.png
//! ```
//!
//! Fetches and writes are strictly sequential in document order. The first
//! failing item aborts the run; completed files stay on disk and a clean
//! re-run (after the caller clears the directory, or overwriting in place)
//! is the recovery path.

mod error;

pub use error::DownloadError;

use std::path::{Path, PathBuf};

use reqwest::Client;
use tracing::{debug, info, instrument};

use crate::shop::{StickerItem, StickerSet};

const DEFAULT_ASSET_BASE_URL: &str = "https://stickershop.line-scdn.net";

/// Downloads every asset of a sticker set into a local pack directory.
///
/// Shares the run-wide HTTP client; construct once per run and reuse.
#[derive(Debug, Clone)]
pub struct Downloader {
    client: Client,
    asset_base_url: String,
}

impl Downloader {
    /// Creates a downloader against the production asset CDN.
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self::with_asset_base_url(client, DEFAULT_ASSET_BASE_URL)
    }

    /// Creates a downloader with a custom asset base URL (for tests).
    #[must_use]
    pub fn with_asset_base_url(client: Client, asset_base_url: impl Into<String>) -> Self {
        Self {
            client,
            asset_base_url: asset_base_url.into(),
        }
    }

    /// Persists `set` under `root_dir` and returns the pack directory.
    ///
    /// Never silently merges: when the pack directory already exists the
    /// caller decides beforehand whether to clear it; otherwise files are
    /// overwritten in place one by one.
    ///
    /// # Errors
    ///
    /// Returns [`DownloadError`] when a directory or file cannot be written,
    /// the metadata record cannot be serialized, or any asset fetch fails.
    /// The first failure aborts the run; earlier files remain on disk.
    #[instrument(skip(self, set), fields(sticker_set_id = set.id))]
    pub async fn download(
        &self,
        set: &StickerSet,
        root_dir: &Path,
    ) -> Result<PathBuf, DownloadError> {
        let base_dir = root_dir.join(set.id.to_string());
        let data_dir = base_dir.join("data");
        tokio::fs::create_dir_all(&data_dir)
            .await
            .map_err(|source| DownloadError::io(&data_dir, source))?;

        let metadata_path = base_dir.join("metadata.json");
        debug!(path = %metadata_path.display(), "writing metadata");
        let metadata = serde_json::to_vec(set).map_err(DownloadError::metadata)?;
        tokio::fs::write(&metadata_path, metadata)
            .await
            .map_err(|source| DownloadError::io(&metadata_path, source))?;

        info!(count = set.stickers.len(), "downloading stickers");
        for item in &set.stickers {
            self.download_asset(item, &data_dir).await?;
        }

        Ok(base_dir)
    }

    /// The CDN URL for one sticker asset.
    ///
    /// Animated variants (with or without sound) use the animation template;
    /// everything else the static one. Both are parameterized only by the
    /// item id.
    #[must_use]
    pub fn asset_url(&self, item: &StickerItem) -> String {
        let base = self.asset_base_url.trim_end_matches('/');
        let id = item.id;
        if item.kind.is_animated() {
            format!("{base}/stickershop/v1/sticker/{id}/iPhone/sticker_animation@2x.png")
        } else {
            format!("{base}/stickershop/v1/sticker/{id}/iPhone/sticker@2x.png")
        }
    }

    async fn download_asset(
        &self,
        item: &StickerItem,
        data_dir: &Path,
    ) -> Result<(), DownloadError> {
        let url = self.asset_url(item);
        debug!(%url, "downloading sticker asset");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| DownloadError::asset_fetch(item.id, &url, source))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::asset_status(item.id, &url, status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|source| DownloadError::asset_fetch(item.id, &url, source))?;

        let path = data_dir.join(format!("{}.png", item.id));
        tokio::fs::write(&path, &bytes)
            .await
            .map_err(|source| DownloadError::io(&path, source))?;

        Ok(())
    }
}
