// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::gallery::RequestToken;
use crate::domain::apod::Record;
use crate::domain::error::NetworkError;
use crate::ui::gallery;

/// Where a downloaded image goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageTarget {
    Thumbnail,
    Detail,
}

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    /// Feed request finished.
    FeedLoaded {
        token: RequestToken,
        result: Result<Vec<Record>, NetworkError>,
        duration_ms: u64,
    },
    /// Image download finished.
    ImageFetched {
        target: ImageTarget,
        url: String,
        result: Result<Vec<u8>, NetworkError>,
        duration_ms: u64,
    },
}

/// Runtime flags passed from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP47 format (e.g. `en-US`, `fr`).
    pub lang: Option<String>,
    /// Feed URL overriding `[feed] url`.
    pub feed_url: Option<String>,
    /// Prefilled start date; with `end`, triggers a fetch at startup.
    pub start: Option<String>,
    /// Prefilled end date.
    pub end: Option<String>,
}

impl Flags {
    /// Whether the command line asked for a fetch at startup.
    #[must_use]
    pub fn requests_initial_fetch(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }
}
