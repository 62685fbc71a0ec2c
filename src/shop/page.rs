//! Product page extraction: structured-data metadata and preview items.
//!
//! The shop serves no JSON API; the product page embeds everything this tool
//! needs. Pack-level fields come from the single
//! `script[type="application/ld+json"]` structured-data block, per-sticker
//! payloads from the `data-preview` attribute of each preview list item.

use std::fmt;
use std::sync::LazyLock;

use scraper::{Html, Selector};
use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use thiserror::Error;

use super::set::{PreviewItemError, StickerItem};

static STRUCTURED_DATA_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| compile_static_selector(r#"script[type="application/ld+json"]"#));
static PREVIEW_ITEM_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| compile_static_selector("li.FnStickerPreviewItem"));

/// Compiles a selector at static init; panics on invalid pattern.
fn compile_static_selector(selector: &str) -> Selector {
    Selector::parse(selector)
        .unwrap_or_else(|e| panic!("invalid static selector '{selector}': {e:?}"))
}

/// Pack-level fields of the structured-data block, validated on extraction.
///
/// The page's own SKU is the sticker set id; it is a JSON string of digits
/// in practice, accepted as a bare number too.
#[derive(Debug, Deserialize)]
pub(crate) struct ProductMetadata {
    #[serde(deserialize_with = "u64_from_digits")]
    pub(crate) sku: u64,
    pub(crate) name: String,
    pub(crate) description: String,
    #[serde(rename = "image")]
    pub(crate) image_url: String,
}

/// Errors locating or decoding the structured-data block.
#[derive(Debug, Error)]
pub(crate) enum MetadataError {
    #[error("no structured-data block found")]
    MissingBlock,

    #[error("structured-data block is not a valid product record: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// Error decoding one preview list item, with its document-order position.
#[derive(Debug, Error)]
#[error("{reason}")]
pub(crate) struct PreviewError {
    pub(crate) index: usize,
    pub(crate) reason: PreviewErrorReason,
}

#[derive(Debug, Error)]
pub(crate) enum PreviewErrorReason {
    #[error("missing data-preview attribute")]
    MissingAttribute,

    #[error("data-preview is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error(transparent)]
    Item(#[from] PreviewItemError),
}

/// Extracts and validates the pack-level metadata from a parsed page.
pub(crate) fn extract_product_metadata(doc: &Html) -> Result<ProductMetadata, MetadataError> {
    let block = doc
        .select(&STRUCTURED_DATA_SELECTOR)
        .next()
        .ok_or(MetadataError::MissingBlock)?;
    let json = block.text().collect::<String>();
    Ok(serde_json::from_str(&json)?)
}

/// Extracts every sticker preview item in document order.
///
/// A missing or malformed `data-preview` attribute fails the whole
/// extraction; a partial sticker set is not a valid result.
pub(crate) fn extract_preview_items(doc: &Html) -> Result<Vec<StickerItem>, PreviewError> {
    let mut items = Vec::new();

    for (index, element) in doc.select(&PREVIEW_ITEM_SELECTOR).enumerate() {
        let payload = element
            .value()
            .attr("data-preview")
            .ok_or(PreviewError {
                index,
                reason: PreviewErrorReason::MissingAttribute,
            })?;
        let value = serde_json::from_str(payload).map_err(|e| PreviewError {
            index,
            reason: e.into(),
        })?;
        let item = StickerItem::from_preview(value).map_err(|e| PreviewError {
            index,
            reason: e.into(),
        })?;
        items.push(item);
    }

    Ok(items)
}

fn u64_from_digits<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    struct DigitsVisitor;

    impl Visitor<'_> for DigitsVisitor {
        type Value = u64;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a positive integer or a string of decimal digits")
        }

        fn visit_u64<E>(self, value: u64) -> Result<u64, E> {
            Ok(value)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<u64, E> {
            u64::try_from(value).map_err(|_| E::custom(format!("sku {value} is negative")))
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<u64, E> {
            value
                .parse()
                .map_err(|_| E::custom(format!("sku {value:?} is not a positive integer")))
        }
    }

    deserializer.deserialize_any(DigitsVisitor)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::shop::StickerKind;

    fn page(body: &str) -> Html {
        Html::parse_document(&format!("<html><head></head><body>{body}</body></html>"))
    }

    #[test]
    fn test_extract_metadata_from_structured_data_block() {
        let doc = page(concat!(
            r#"<script type="application/ld+json">"#,
            r#"{"@type":"Product","sku":"12345","name":"Brown","description":"Bear","image":"https://example.com/main.png"}"#,
            "</script>",
        ));

        let metadata = extract_product_metadata(&doc).unwrap();
        assert_eq!(metadata.sku, 12345);
        assert_eq!(metadata.name, "Brown");
        assert_eq!(metadata.description, "Bear");
        assert_eq!(metadata.image_url, "https://example.com/main.png");
    }

    #[test]
    fn test_extract_metadata_accepts_numeric_sku() {
        let doc = page(concat!(
            r#"<script type="application/ld+json">"#,
            r#"{"sku":777,"name":"n","description":"d","image":"i"}"#,
            "</script>",
        ));
        assert_eq!(extract_product_metadata(&doc).unwrap().sku, 777);
    }

    #[test]
    fn test_extract_metadata_fails_without_block() {
        let doc = page("<p>nothing here</p>");
        let result = extract_product_metadata(&doc);
        assert!(matches!(result, Err(MetadataError::MissingBlock)));
    }

    #[test]
    fn test_extract_metadata_fails_on_missing_field() {
        // description absent
        let doc = page(concat!(
            r#"<script type="application/ld+json">"#,
            r#"{"sku":"1","name":"n","image":"i"}"#,
            "</script>",
        ));
        let result = extract_product_metadata(&doc);
        assert!(matches!(result, Err(MetadataError::Invalid(_))));
    }

    #[test]
    fn test_extract_preview_items_in_document_order() {
        let doc = page(concat!(
            r#"<ul>"#,
            r#"<li class="mdCMN09Li FnStickerPreviewItem" data-preview='{"type":"static","id":"11"}'></li>"#,
            r#"<li class="mdCMN09Li FnStickerPreviewItem" data-preview='{"type":"animation","id":"22"}'></li>"#,
            r#"<li class="mdCMN09Li FnStickerPreviewItem" data-preview='{"type":"animation_sound","id":"33"}'></li>"#,
            r#"</ul>"#,
        ));

        let items = extract_preview_items(&doc).unwrap();
        assert_eq!(
            items.iter().map(|item| item.id).collect::<Vec<_>>(),
            vec![11, 22, 33]
        );
        assert_eq!(items[0].kind, StickerKind::Static);
        assert_eq!(items[1].kind, StickerKind::Animation);
        assert_eq!(items[2].kind, StickerKind::AnimationSound);
    }

    #[test]
    fn test_extract_preview_items_decodes_entity_encoded_payload() {
        // Real pages escape the attribute JSON with &quot;.
        let doc = page(concat!(
            r#"<li class="FnStickerPreviewItem" data-preview="{&quot;type&quot;:&quot;static&quot;,&quot;id&quot;:&quot;5&quot;}"></li>"#,
        ));
        let items = extract_preview_items(&doc).unwrap();
        assert_eq!(items[0].id, 5);
    }

    #[test]
    fn test_extract_preview_items_ignores_unmarked_list_items() {
        let doc = page(concat!(
            r#"<li class="FnStickerPreviewItem" data-preview='{"id":"1"}'></li>"#,
            r#"<li class="OtherItem" data-preview='{"id":"2"}'></li>"#,
        ));
        let items = extract_preview_items(&doc).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 1);
    }

    #[test]
    fn test_extract_preview_items_fails_on_missing_attribute() {
        let doc = page(r#"<li class="FnStickerPreviewItem"></li>"#);
        let error = extract_preview_items(&doc).unwrap_err();
        assert_eq!(error.index, 0);
        assert!(matches!(
            error.reason,
            PreviewErrorReason::MissingAttribute
        ));
    }

    #[test]
    fn test_extract_preview_items_fails_on_malformed_json() {
        let doc = page(concat!(
            r#"<li class="FnStickerPreviewItem" data-preview='{"id":"1"}'></li>"#,
            r#"<li class="FnStickerPreviewItem" data-preview='not json'></li>"#,
        ));
        let error = extract_preview_items(&doc).unwrap_err();
        assert_eq!(error.index, 1);
        assert!(matches!(error.reason, PreviewErrorReason::InvalidJson(_)));
    }

    #[test]
    fn test_extract_preview_items_empty_page_is_valid() {
        let doc = page("<ul></ul>");
        assert!(extract_preview_items(&doc).unwrap().is_empty());
    }
}
