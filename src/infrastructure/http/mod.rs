// SPDX-License-Identifier: MPL-2.0
//! HTTP adapters built on `reqwest`.
//!
//! A single [`reqwest::Client`] is built per adapter with the configured user
//! agent and a bounded redirect policy. Responses are read fully into memory:
//! the feed is a few megabytes at most and images are displayed from bytes.

mod feed;
mod image;

pub use feed::{decode_feed, HttpFeedSource};
pub use image::fetch_image;

use crate::domain::error::NetworkError;

/// Redirects followed before a request is abandoned.
const MAX_REDIRECTS: usize = 10;

/// Builds the shared client used by the adapters.
///
/// # Errors
///
/// Returns [`NetworkError::Transport`] if the TLS backend cannot be
/// initialized.
pub fn build_client(user_agent: &str) -> Result<reqwest::Client, NetworkError> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
        .user_agent(user_agent)
        .build()
        .map_err(|e| NetworkError::Transport(e.to_string()))
}

/// Issues a `GET` and returns the body of a successful response.
pub(crate) async fn get_bytes(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<u8>, NetworkError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| NetworkError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(NetworkError::Status(status.as_u16()));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| NetworkError::Transport(e.to_string()))?;
    Ok(bytes.to_vec())
}
