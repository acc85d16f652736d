// SPDX-License-Identifier: MPL-2.0
//! Thumbnail and player URL derivation.
//!
//! Image records are used as-is. Video records are matched against the two
//! YouTube URL shapes the feed uses (`youtube.com/...v=ID` and
//! `youtu.be/ID`); anything else degrades to a placeholder thumbnail and the
//! raw page URL as player.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::apod::Record;

static YOUTUBE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:youtube\.com/.*v=|youtu\.be/)([A-Za-z0-9_-]+)")
        .unwrap_or_else(|err| panic!("invalid YouTube pattern: {err}"))
});

/// Media shown in the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailMedia {
    /// Static image at `url`.
    Image { url: String },
    /// Embeddable player page at `url`.
    Embed { url: String },
}

impl DetailMedia {
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            DetailMedia::Image { url } | DetailMedia::Embed { url } => url,
        }
    }
}

/// Extracts the YouTube video identifier from `url`.
#[must_use]
pub fn youtube_id(url: &str) -> Option<&str> {
    YOUTUBE_ID
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Thumbnail URL for a card, `None` when no thumbnail can be derived.
#[must_use]
pub fn thumbnail(record: &Record) -> Option<String> {
    if record.is_video() {
        if let Some(explicit) = record.thumbnail_url() {
            return Some(explicit.to_string());
        }
        youtube_id(&record.url).map(|id| format!("https://img.youtube.com/vi/{id}/hqdefault.jpg"))
    } else {
        record.url().or_else(|| record.hdurl()).map(str::to_string)
    }
}

/// Embeddable player URL; falls back to the record URL unchanged.
#[must_use]
pub fn embed_url(record: &Record) -> String {
    match youtube_id(&record.url) {
        Some(id) => format!("https://www.youtube.com/embed/{id}"),
        None => record.url.clone(),
    }
}

/// Media for the detail view: a player for videos, the high-resolution
/// image (falling back to the regular one) otherwise.
#[must_use]
pub fn detail_source(record: &Record) -> DetailMedia {
    if record.is_video() {
        DetailMedia::Embed {
            url: embed_url(record),
        }
    } else {
        let url = record
            .hdurl()
            .or_else(|| record.url())
            .unwrap_or_default()
            .to_string();
        DetailMedia::Image { url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::apod::MediaKind;

    fn video(url: &str, thumbnail_url: Option<&str>) -> Record {
        Record {
            date: "2024-01-01".into(),
            title: "Clip".into(),
            explanation: None,
            media_type: MediaKind::Video,
            url: url.into(),
            hdurl: None,
            thumbnail_url: thumbnail_url.map(Into::into),
        }
    }

    fn image(url: &str, hdurl: Option<&str>) -> Record {
        Record {
            media_type: MediaKind::Image,
            hdurl: hdurl.map(Into::into),
            thumbnail_url: None,
            ..video(url, None)
        }
    }

    #[test]
    fn extracts_id_from_watch_and_short_urls() {
        assert_eq!(
            youtube_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(
            youtube_id("https://youtu.be/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn extracts_id_from_embed_style_query_and_mixed_case_host() {
        assert_eq!(
            youtube_id("https://WWW.YouTube.com/embed?list=x&v=a-b_c1"),
            Some("a-b_c1")
        );
        assert_eq!(
            youtube_id("https://youtu.be/abc123?t=42"),
            Some("abc123")
        );
    }

    #[test]
    fn non_youtube_urls_have_no_id() {
        assert_eq!(youtube_id("https://vimeo.com/123456"), None);
        assert_eq!(youtube_id(""), None);
    }

    #[test]
    fn video_thumbnail_is_derived_from_youtube_id() {
        let record = video("https://www.youtube.com/watch?v=dQw4w9WgXcQ", None);
        assert_eq!(
            thumbnail(&record).as_deref(),
            Some("https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg")
        );
    }

    #[test]
    fn explicit_video_thumbnail_wins() {
        let record = video(
            "https://youtu.be/dQw4w9WgXcQ",
            Some("https://example.com/thumb.jpg"),
        );
        assert_eq!(
            thumbnail(&record).as_deref(),
            Some("https://example.com/thumb.jpg")
        );
    }

    #[test]
    fn unknown_video_host_has_placeholder_thumbnail() {
        let record = video("https://vimeo.com/123456", None);
        assert_eq!(thumbnail(&record), None);
    }

    #[test]
    fn embed_url_uses_canonical_player() {
        let record = video("https://youtu.be/dQw4w9WgXcQ", None);
        assert_eq!(
            embed_url(&record),
            "https://www.youtube.com/embed/dQw4w9WgXcQ"
        );
    }

    #[test]
    fn embed_url_falls_back_to_record_url() {
        let record = video("https://vimeo.com/123456", None);
        assert_eq!(embed_url(&record), "https://vimeo.com/123456");
    }

    #[test]
    fn image_thumbnail_prefers_url_then_hdurl() {
        let both = image("https://a/small.jpg", Some("https://a/big.jpg"));
        assert_eq!(thumbnail(&both).as_deref(), Some("https://a/small.jpg"));

        let hd_only = image("", Some("https://a/big.jpg"));
        assert_eq!(thumbnail(&hd_only).as_deref(), Some("https://a/big.jpg"));

        let neither = image("", None);
        assert_eq!(thumbnail(&neither), None);
    }

    #[test]
    fn image_detail_prefers_hdurl() {
        let both = image("https://a/small.jpg", Some("https://a/big.jpg"));
        assert_eq!(
            detail_source(&both),
            DetailMedia::Image {
                url: "https://a/big.jpg".into()
            }
        );

        let url_only = image("https://a/small.jpg", None);
        assert_eq!(detail_source(&url_only).url(), "https://a/small.jpg");
    }

    #[test]
    fn video_detail_is_an_embed() {
        let record = video("https://www.youtube.com/watch?v=dQw4w9WgXcQ", None);
        assert_eq!(
            detail_source(&record),
            DetailMedia::Embed {
                url: "https://www.youtube.com/embed/dQw4w9WgXcQ".into()
            }
        );
    }
}
