// SPDX-License-Identifier: MPL-2.0
//! Detail view state machine.
//!
//! Two states: `Closed` (initial) and `Open(record)`. Opening always replaces
//! the displayed media; nothing from a previous open survives.

use crate::application::media::{self, DetailMedia};
use crate::domain::apod::{format_display_date, Record};

/// Why the detail view was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// The explicit close button.
    CloseControl,
    /// The cancel key (Escape).
    CancelKey,
    /// A click on the backdrop outside the content.
    Backdrop,
}

impl CloseReason {
    /// Short identifier for diagnostics.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            CloseReason::CloseControl => "close_control",
            CloseReason::CancelKey => "cancel_key",
            CloseReason::Backdrop => "backdrop",
        }
    }
}

/// What the surface shows while the detail view is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailContent {
    /// Record date (the record key).
    pub key: String,
    pub title: String,
    pub display_date: String,
    pub explanation: String,
    pub media: DetailMedia,
    /// Still image shown next to a video player link.
    pub poster: Option<String>,
}

impl DetailContent {
    #[must_use]
    pub fn from_record(record: &Record) -> Self {
        let poster = if record.is_video() {
            media::thumbnail(record)
        } else {
            None
        };
        Self {
            key: record.date.clone(),
            title: record.title.clone(),
            display_date: format_display_date(&record.date),
            explanation: record.explanation_text().to_string(),
            media: media::detail_source(record),
            poster,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum State {
    #[default]
    Closed,
    Open(DetailContent),
}

/// Visibility of the enlarged view of a single record.
#[derive(Debug, Clone, Default)]
pub struct DetailView {
    state: State,
}

impl DetailView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens (or re-targets) the view on `record` and returns what to show.
    pub fn open(&mut self, record: &Record) -> DetailContent {
        let content = DetailContent::from_record(record);
        self.state = State::Open(content.clone());
        content
    }

    /// Closes the view. Returns `false` if it was already closed.
    pub fn close(&mut self, _reason: CloseReason) -> bool {
        matches!(std::mem::take(&mut self.state), State::Open(_))
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.state, State::Open(_))
    }

    /// Content currently shown, if open.
    #[must_use]
    pub fn current(&self) -> Option<&DetailContent> {
        match &self.state {
            State::Open(content) => Some(content),
            State::Closed => None,
        }
    }

    /// Background scrolling is suppressed exactly while open.
    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }
}
