// SPDX-License-Identifier: MPL-2.0
//! Feed source port definition.

use crate::domain::apod::Record;
use crate::domain::error::NetworkError;
use futures_util::future::BoxFuture;

/// Port for obtaining the full, unordered list of feed records.
///
/// One call is one request: implementations do not retry, cache, or paginate.
///
/// # Example
///
/// ```ignore
/// use apod_gallery::application::port::FeedSource;
///
/// async fn count(source: &dyn FeedSource) -> usize {
///     source.fetch().await.map(|records| records.len()).unwrap_or(0)
/// }
/// ```
pub trait FeedSource: Send + Sync {
    /// Fetches every record of the feed.
    ///
    /// # Errors
    ///
    /// Returns a [`NetworkError`] if the transport fails, the response status
    /// is not a success, or the body is not a JSON array of records.
    fn fetch(&self) -> BoxFuture<'static, Result<Vec<Record>, NetworkError>>;

    /// Human-readable location of the feed, for logs.
    fn location(&self) -> &str;
}
