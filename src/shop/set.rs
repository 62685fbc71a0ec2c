//! Sticker set and sticker item value types.
//!
//! Both types are constructed once by the shop module from parsed page
//! content and are read-only afterwards; the downloader never mutates them.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use thiserror::Error;

/// Asset kind of a single sticker, from the vendor `type` field.
///
/// The shop marks stickers as static images, animated images, or animated
/// images with sound. Any unrecognized kind is treated as static so the
/// asset URL derivation always has a valid pattern to fall back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StickerKind {
    /// Plain static image.
    Static,
    /// Animated image (APNG).
    Animation,
    /// Animated image with a sound track.
    AnimationSound,
}

impl StickerKind {
    /// Maps the vendor `type` field to a kind, falling back to [`Static`]
    /// for missing or unrecognized values.
    ///
    /// [`Static`]: StickerKind::Static
    #[must_use]
    pub fn from_type_field(value: Option<&str>) -> Self {
        match value {
            Some("animation") => Self::Animation,
            Some("animation_sound") => Self::AnimationSound,
            _ => Self::Static,
        }
    }

    /// Returns true for the animated variants (with or without sound).
    #[must_use]
    pub fn is_animated(self) -> bool {
        matches!(self, Self::Animation | Self::AnimationSound)
    }
}

/// Errors raised while converting a preview payload into a [`StickerItem`].
#[derive(Debug, Error)]
pub enum PreviewItemError {
    /// The payload is valid JSON but not an object.
    #[error("preview payload is not a JSON object")]
    NotAnObject,

    /// The payload object has no `id` field.
    #[error("preview object has no id field")]
    MissingId,

    /// The `id` field is neither an integer nor a string of digits.
    #[error("preview id {value} is not a positive integer")]
    InvalidId {
        /// The rejected `id` value.
        value: Value,
    },
}

/// One sticker asset inside a set.
///
/// `id` and `kind` are the typed view the downloader works with; the full
/// vendor payload is retained verbatim and is what serializes into
/// `metadata.json`, so fields this tool does not interpret survive
/// unmodified.
#[derive(Debug, Clone)]
pub struct StickerItem {
    /// Sticker id, unique within the set; parameterizes the asset URL and
    /// the local filename.
    pub id: u64,
    /// Asset kind, selects the static or animated URL template.
    pub kind: StickerKind,
    raw: Map<String, Value>,
}

impl StickerItem {
    /// Builds a sticker item from a decoded `data-preview` payload.
    ///
    /// The page encodes sticker ids as JSON strings of digits; a bare JSON
    /// number is accepted as well.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewItemError`] when the payload is not an object or its
    /// `id` field is missing or not a positive integer.
    pub fn from_preview(value: Value) -> Result<Self, PreviewItemError> {
        let Value::Object(raw) = value else {
            return Err(PreviewItemError::NotAnObject);
        };

        let id_value = raw.get("id").ok_or(PreviewItemError::MissingId)?;
        let id = u64_from_value(id_value).ok_or_else(|| PreviewItemError::InvalidId {
            value: id_value.clone(),
        })?;

        let kind = StickerKind::from_type_field(raw.get("type").and_then(Value::as_str));

        Ok(Self { id, kind, raw })
    }

    /// The raw vendor payload this item was built from.
    #[must_use]
    pub fn raw(&self) -> &Map<String, Value> {
        &self.raw
    }
}

impl Serialize for StickerItem {
    // metadata.json carries the vendor objects as extracted, not the typed view.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

/// One sticker pack as listed on its product page.
#[derive(Debug, Clone, Serialize)]
pub struct StickerSet {
    /// Stable external identifier, equal to the id the set was requested by.
    pub id: u64,
    /// Display name, source-provided Unicode.
    pub name: String,
    /// Display description, source-provided Unicode.
    pub description: String,
    /// Absolute URL of the pack cover image.
    pub image_url: String,
    /// Stickers in document order. Empty only if the page lists none.
    pub stickers: Vec<StickerItem>,
}

fn u64_from_value(value: &Value) -> Option<u64> {
    match value {
        Value::Number(number) => number.as_u64(),
        Value::String(text) => text.parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_from_type_field() {
        assert_eq!(
            StickerKind::from_type_field(Some("animation")),
            StickerKind::Animation
        );
        assert_eq!(
            StickerKind::from_type_field(Some("animation_sound")),
            StickerKind::AnimationSound
        );
        assert_eq!(
            StickerKind::from_type_field(Some("static")),
            StickerKind::Static
        );
        assert_eq!(StickerKind::from_type_field(None), StickerKind::Static);
    }

    #[test]
    fn test_kind_unrecognized_falls_back_to_static() {
        assert_eq!(
            StickerKind::from_type_field(Some("popup")),
            StickerKind::Static
        );
    }

    #[test]
    fn test_kind_is_animated() {
        assert!(StickerKind::Animation.is_animated());
        assert!(StickerKind::AnimationSound.is_animated());
        assert!(!StickerKind::Static.is_animated());
    }

    #[test]
    fn test_item_from_preview_with_string_id() {
        let item = StickerItem::from_preview(json!({
            "type": "animation",
            "id": "123456",
            "staticUrl": "https://example.com/static.png",
        }))
        .unwrap();
        assert_eq!(item.id, 123_456);
        assert_eq!(item.kind, StickerKind::Animation);
    }

    #[test]
    fn test_item_from_preview_with_numeric_id() {
        let item = StickerItem::from_preview(json!({ "type": "static", "id": 42 })).unwrap();
        assert_eq!(item.id, 42);
        assert_eq!(item.kind, StickerKind::Static);
    }

    #[test]
    fn test_item_from_preview_rejects_non_object() {
        let result = StickerItem::from_preview(json!([1, 2, 3]));
        assert!(matches!(result, Err(PreviewItemError::NotAnObject)));
    }

    #[test]
    fn test_item_from_preview_rejects_missing_id() {
        let result = StickerItem::from_preview(json!({ "type": "static" }));
        assert!(matches!(result, Err(PreviewItemError::MissingId)));
    }

    #[test]
    fn test_item_from_preview_rejects_bad_id() {
        let result = StickerItem::from_preview(json!({ "id": "12ab" }));
        assert!(matches!(result, Err(PreviewItemError::InvalidId { .. })));
    }

    #[test]
    fn test_item_serializes_raw_payload_unmodified() {
        let payload = json!({
            "type": "animation_sound",
            "id": "7",
            "soundUrl": "https://example.com/sound.m4a",
            "popupLayer": "foreground",
        });
        let item = StickerItem::from_preview(payload.clone()).unwrap();
        assert_eq!(serde_json::to_value(&item).unwrap(), payload);
    }

    #[test]
    fn test_set_serializes_to_metadata_shape() {
        let set = StickerSet {
            id: 12345,
            name: "Brown & Cony".to_string(),
            description: "Friends forever".to_string(),
            image_url: "https://example.com/cover.png".to_string(),
            stickers: vec![
                StickerItem::from_preview(json!({ "id": "1", "type": "static" })).unwrap(),
            ],
        };

        let value = serde_json::to_value(&set).unwrap();
        assert_eq!(value["id"], 12345);
        assert_eq!(value["name"], "Brown & Cony");
        assert_eq!(value["description"], "Friends forever");
        assert_eq!(value["image_url"], "https://example.com/cover.png");
        assert_eq!(value["stickers"][0]["id"], "1");
        assert_eq!(value["stickers"][0]["type"], "static");
    }
}
