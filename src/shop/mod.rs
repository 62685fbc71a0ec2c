//! Sticker shop client: product page fetching and sticker set assembly.
//!
//! One GET per sticker set, against the English product page so field names
//! stay deterministic. The page is scraped, not queried: pack metadata comes
//! from the embedded structured-data block and the per-sticker payloads from
//! the preview list items.
//!
//! # Example
//!
//! ```no_run
//! use line2signal::{ShopClient, build_http_client};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = build_http_client()?;
//! let shop = ShopClient::new(client);
//! let set = shop.fetch_sticker_set(12345).await?;
//! println!("{} has {} stickers", set.name, set.stickers.len());
//! # Ok(())
//! # }
//! ```

mod error;
mod page;
mod set;

pub use error::FetchError;
pub use set::{PreviewItemError, StickerItem, StickerKind, StickerSet};

use reqwest::Client;
use scraper::Html;
use tracing::{debug, info, instrument};

const DEFAULT_BASE_URL: &str = "https://store.line.me";

/// Client for the sticker shop product pages.
///
/// Wraps the shared HTTP client; construct once per run and reuse.
#[derive(Debug, Clone)]
pub struct ShopClient {
    client: Client,
    base_url: String,
}

impl ShopClient {
    /// Creates a shop client against the production store.
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self::with_base_url(client, DEFAULT_BASE_URL)
    }

    /// Creates a shop client with a custom store base URL (for tests).
    #[must_use]
    pub fn with_base_url(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// The English product page URL for a sticker set id.
    #[must_use]
    pub fn product_page_url(&self, id: u64) -> String {
        format!(
            "{}/stickershop/product/{id}/en",
            self.base_url.trim_end_matches('/')
        )
    }

    /// Fetches the product page for `id` and assembles the sticker set.
    ///
    /// All-or-nothing: any missing or malformed piece of the page fails the
    /// whole fetch rather than producing a partial set.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the request fails, the page responds with
    /// a non-success status, the structured-data block is absent or invalid,
    /// the page reports a different SKU than requested, or any preview item
    /// cannot be parsed.
    #[instrument(skip(self), fields(sticker_set_id = id))]
    pub async fn fetch_sticker_set(&self, id: u64) -> Result<StickerSet, FetchError> {
        let url = self.product_page_url(id);
        debug!(%url, "fetching product page");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::http(&url, source))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::http_status(&url, status.as_u16()));
        }

        let html = response
            .text()
            .await
            .map_err(|source| FetchError::http(&url, source))?;

        let sticker_set = parse_sticker_set(&html, id, &url)?;
        info!(
            name = %sticker_set.name,
            stickers = sticker_set.stickers.len(),
            "sticker set fetched"
        );
        Ok(sticker_set)
    }
}

// Sync on purpose: scraper's DOM is not Send, so it must not live across an
// await point.
fn parse_sticker_set(html: &str, requested_id: u64, url: &str) -> Result<StickerSet, FetchError> {
    let doc = Html::parse_document(html);

    let metadata = page::extract_product_metadata(&doc)
        .map_err(|error| FetchError::metadata_missing(url, error.to_string()))?;

    if metadata.sku != requested_id {
        return Err(FetchError::sku_mismatch(url, requested_id, metadata.sku));
    }

    let stickers = page::extract_preview_items(&doc)
        .map_err(|error| FetchError::item_parse(url, error.index, error.reason.to_string()))?;

    Ok(StickerSet {
        id: metadata.sku,
        name: metadata.name,
        description: metadata.description,
        image_url: metadata.image_url,
        stickers,
    })
}
