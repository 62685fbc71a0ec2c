//! LINE sticker pack downloader library.
//!
//! This library turns a LINE sticker shop URL or numeric pack id into a local
//! archive of the pack: one directory per pack holding a `metadata.json`
//! record and every sticker asset as a PNG.
//!
//! # Architecture
//!
//! The pipeline is linear and the stages only communicate through the
//! [`StickerSet`] value:
//! - [`resolver`] - extracts the numeric sticker set id from raw user input
//! - [`shop`] - scrapes the sticker shop product page into a [`StickerSet`]
//! - [`download`] - persists metadata and fetches every sticker asset
//!
//! The Signal side (credential handling, upload) lives in the CLI binary;
//! uploading is not implemented.

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod download;
pub mod http_client;
pub mod resolver;
pub mod shop;
mod user_agent;

// Re-export commonly used types
pub use download::{DownloadError, Downloader};
pub use http_client::build_http_client;
pub use resolver::{ResolveError, SHOP_URL_PREFIX, resolve_sticker_set_id};
pub use shop::{FetchError, ShopClient, StickerItem, StickerKind, StickerSet};
