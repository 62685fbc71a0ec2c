//! Sticker set id resolution from raw user input.
//!
//! Accepts either a bare numeric id (`"12345"`) or a sticker shop product
//! URL (`"https://store.line.me/stickershop/product/12345/en"`). URL
//! recognition is a strict prefix match against [`SHOP_URL_PREFIX`], not a
//! general URL parser; the id is the first all-digit path segment after the
//! prefix.

mod error;

pub use error::ResolveError;

/// Fixed product page prefix recognized for URL inputs.
pub const SHOP_URL_PREFIX: &str = "https://store.line.me/stickershop/product/";

/// Resolves raw user input into a sticker set id.
///
/// # Errors
///
/// Returns [`ResolveError::NotFound`] when the input matches neither the
/// numeric nor the prefixed-URL shape.
pub fn resolve_sticker_set_id(input: &str) -> Result<u64, ResolveError> {
    let trimmed = input.trim();

    if is_all_digits(trimmed) {
        return trimmed
            .parse()
            .map_err(|_| ResolveError::not_found(input));
    }

    if let Some(path) = trimmed.strip_prefix(SHOP_URL_PREFIX) {
        for segment in path.split('/') {
            if is_all_digits(segment)
                && let Ok(id) = segment.parse()
            {
                return Ok(id);
            }
        }
    }

    Err(ResolveError::not_found(input))
}

fn is_all_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}
