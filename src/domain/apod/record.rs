// SPDX-License-Identifier: MPL-2.0
//! Feed record and media kind.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use super::ISO_DATE_FORMAT;

/// Kind of media a record points to.
///
/// The feed only distinguishes videos; every other value (including the
/// occasional `"other"`) is displayed as an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Image,
    Video,
}

impl MediaKind {
    /// Maps the raw `media_type` string of the feed.
    #[must_use]
    pub fn from_feed(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("video") {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }
}

impl<'de> Deserialize<'de> for MediaKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(MediaKind::from_feed).unwrap_or_default())
    }
}

/// One dated entry of the feed. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Calendar date in `YYYY-MM-DD` form; unique key within the feed.
    pub date: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default)]
    pub media_type: MediaKind,
    /// Image URL or video page URL.
    #[serde(default)]
    pub url: String,
    /// Higher-resolution image (image entries only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hdurl: Option<String>,
    /// Explicit thumbnail (video entries only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

impl Record {
    #[must_use]
    pub fn is_video(&self) -> bool {
        self.media_type == MediaKind::Video
    }

    /// Explanation text, empty when the feed omits it.
    #[must_use]
    pub fn explanation_text(&self) -> &str {
        self.explanation.as_deref().unwrap_or("")
    }

    /// Primary URL, `None` when blank.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        non_blank(Some(self.url.as_str()))
    }

    /// High-resolution URL, `None` when absent or blank.
    #[must_use]
    pub fn hdurl(&self) -> Option<&str> {
        non_blank(self.hdurl.as_deref())
    }

    /// Explicit thumbnail URL, `None` when absent or blank.
    #[must_use]
    pub fn thumbnail_url(&self) -> Option<&str> {
        non_blank(self.thumbnail_url.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// Formats a feed date for display, e.g. `2024-01-05` -> `January 5, 2024`.
///
/// Strings that are not valid ISO dates are returned unchanged.
#[must_use]
pub fn format_display_date(iso: &str) -> String {
    match NaiveDate::parse_from_str(iso, ISO_DATE_FORMAT) {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => iso.to_string(),
    }
}
