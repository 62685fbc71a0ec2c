//! Shared HTTP client construction policy.
//!
//! This module centralizes networking defaults so the shop scraper and the
//! asset downloader stay consistent on timeout, user-agent, compression, and
//! redirect behavior. One client is built per run and shared by both stages;
//! `reqwest::Client` is a cheap handle over a pooled connector.

use std::time::Duration;

use reqwest::Client;

use crate::user_agent;

/// Default HTTP connect timeout (10 seconds).
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default HTTP read timeout (60 seconds; sticker assets are small PNGs).
pub const READ_TIMEOUT_SECS: u64 = 60;

/// Builds the shared HTTP client used for page fetches and asset downloads.
///
/// Default configuration:
/// - Connect timeout: 10 seconds
/// - Read timeout: 60 seconds
/// - Gzip decompression: enabled
/// - Redirects: followed (reqwest default policy); the asset CDN redirects
///   between edge hosts
///
/// # Errors
///
/// Returns the underlying [`reqwest::Error`] when client construction fails.
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    build_http_client_with_timeouts(CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS)
}

/// Builds the shared HTTP client with explicit timeout values.
///
/// # Errors
///
/// Returns the underlying [`reqwest::Error`] when client construction fails.
pub fn build_http_client_with_timeouts(
    connect_timeout_secs: u64,
    read_timeout_secs: u64,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .connect_timeout(Duration::from_secs(connect_timeout_secs))
        .timeout(Duration::from_secs(read_timeout_secs))
        .user_agent(user_agent::default_user_agent())
        .gzip(true)
        .build()
}
