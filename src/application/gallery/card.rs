// SPDX-License-Identifier: MPL-2.0
//! Display card projection.

use crate::application::media;
use crate::domain::apod::{format_display_date, Record};

/// Everything a gallery cell needs to draw one record.
///
/// Cards hold no state of their own; the whole set is rebuilt on each query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryCard {
    /// Record date, used as the activation key.
    pub key: String,
    /// Thumbnail URL; `None` draws a placeholder.
    pub thumbnail: Option<String>,
    pub title: String,
    /// Date in "Month D, YYYY" form.
    pub display_date: String,
    /// Draws the video badge.
    pub is_video: bool,
}

impl GalleryCard {
    #[must_use]
    pub fn from_record(record: &Record) -> Self {
        Self {
            key: record.date.clone(),
            thumbnail: media::thumbnail(record),
            title: record.title.clone(),
            display_date: format_display_date(&record.date),
            is_video: record.is_video(),
        }
    }
}

/// Projects a query result, preserving order.
#[must_use]
pub fn project(records: &[Record]) -> Vec<GalleryCard> {
    records.iter().map(GalleryCard::from_record).collect()
}
