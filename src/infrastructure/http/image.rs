// SPDX-License-Identifier: MPL-2.0
//! Image download for thumbnails and the detail view.

use super::get_bytes;
use crate::domain::error::NetworkError;

/// Downloads the image at `url` and returns its encoded bytes.
///
/// Decoding is left to the renderer.
///
/// # Errors
///
/// Returns a [`NetworkError`] on transport failure or a non-success status.
pub async fn fetch_image(client: reqwest::Client, url: String) -> Result<Vec<u8>, NetworkError> {
    get_bytes(&client, &url).await
}
