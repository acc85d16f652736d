// SPDX-License-Identifier: MPL-2.0
//! Command handlers for the gallery.
//!
//! The controller owns the currently displayed result set and the detail
//! view. It reacts to [`Command`]s and feed responses by calling the
//! [`GallerySurface`] capabilities, so it can be driven without a window.
//!
//! Every fetch is stamped with a [`RequestToken`]; only the response that
//! carries the most recently issued token is applied.

use crate::application::gallery::card;
use crate::application::gallery::detail::{CloseReason, DetailView};
use crate::application::port::{Command, GallerySurface, Status};
use crate::application::query::{self, QueryOutcome, RangeSelector};
use crate::domain::apod::{DateInterval, Record};
use crate::domain::error::NetworkError;

/// i18n key shown when the interval contains no record.
pub const EMPTY_RESULT_KEY: &str = "status-empty-range";

/// Identity of one fetch request. Tokens increase monotonically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// A fetch the caller must perform and report back through
/// [`GalleryController::complete_fetch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub token: RequestToken,
    pub interval: DateInterval,
}

/// How a feed response was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchCompletion {
    /// Cards were rendered.
    Applied {
        shown: usize,
        total_matches: usize,
        /// Thumbnails the surface should load.
        thumbnails: Vec<String>,
    },
    /// The interval had no record; empty-state message shown.
    Empty,
    /// The request failed; error message shown.
    Failed,
    /// A newer request was issued since; the response was dropped.
    Stale,
}

impl FetchCompletion {
    /// Thumbnail URLs to load; empty unless cards were rendered.
    #[must_use]
    pub fn into_thumbnails(self) -> Vec<String> {
        match self {
            FetchCompletion::Applied { thumbnails, .. } => thumbnails,
            _ => Vec::new(),
        }
    }
}

/// Gallery orchestration state.
#[derive(Debug, Default)]
pub struct GalleryController {
    next_token: u64,
    latest: Option<RequestToken>,
    pending: Option<DateInterval>,
    shown: Vec<Record>,
    detail: DetailView,
}

impl GalleryController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles a user activation.
    ///
    /// Returns a [`FetchTicket`] when a valid fetch was requested; the caller
    /// runs the feed source and passes the result to
    /// [`complete_fetch`](Self::complete_fetch).
    pub fn handle(
        &mut self,
        command: Command,
        surface: &mut dyn GallerySurface,
    ) -> Option<FetchTicket> {
        match command {
            Command::Fetch { start, end } => self.begin_fetch(&start, &end, surface),
            Command::Activate(key) => {
                self.activate(&key, surface);
                None
            }
            Command::Close(reason) => {
                self.close(reason, surface);
                None
            }
        }
    }

    fn begin_fetch(
        &mut self,
        start: &str,
        end: &str,
        surface: &mut dyn GallerySurface,
    ) -> Option<FetchTicket> {
        self.shown.clear();
        surface.render(Vec::new());

        let interval = match RangeSelector::resolve(Some(start), Some(end)) {
            Ok(interval) => interval,
            Err(err) => {
                log::debug!("Rejected date range {start:?}..{end:?}: {err}");
                // Any response still in flight belongs to an older request.
                self.latest = None;
                self.pending = None;
                surface.show_status(Status::Error(err.i18n_key()));
                return None;
            }
        };

        self.next_token += 1;
        let token = RequestToken(self.next_token);
        self.latest = Some(token);
        self.pending = Some(interval.clone());
        surface.show_status(Status::Loading);

        Some(FetchTicket { token, interval })
    }

    /// Applies a feed response.
    ///
    /// Returns the thumbnail URLs of the rendered cards (empty if nothing was
    /// rendered).
    pub fn complete_fetch(
        &mut self,
        token: RequestToken,
        result: Result<Vec<Record>, NetworkError>,
        surface: &mut dyn GallerySurface,
    ) -> Vec<String> {
        self.apply_response(token, result, surface).into_thumbnails()
    }

    /// Like [`complete_fetch`](Self::complete_fetch) but reports how the
    /// response was handled.
    pub fn apply_response(
        &mut self,
        token: RequestToken,
        result: Result<Vec<Record>, NetworkError>,
        surface: &mut dyn GallerySurface,
    ) -> FetchCompletion {
        if !self.is_latest(token) {
            log::warn!(
                "Ignoring stale feed response #{} (latest: {:?})",
                token.value(),
                self.latest.map(|t| t.value())
            );
            return FetchCompletion::Stale;
        }
        let Some(interval) = self.pending.take() else {
            return FetchCompletion::Stale;
        };

        let records = match result {
            Ok(records) => records,
            Err(err) => {
                log::error!("Feed request #{} failed: {err}", token.value());
                self.shown.clear();
                surface.render(Vec::new());
                surface.show_status(Status::Error(err.i18n_key()));
                return FetchCompletion::Failed;
            }
        };

        match query::query(&records, &interval) {
            QueryOutcome::Empty => {
                self.shown.clear();
                surface.render(Vec::new());
                surface.show_status(Status::Error(EMPTY_RESULT_KEY));
                FetchCompletion::Empty
            }
            QueryOutcome::Matches {
                shown,
                total_matches,
            } => {
                let cards = card::project(&shown);
                let thumbnails: Vec<String> =
                    cards.iter().filter_map(|c| c.thumbnail.clone()).collect();
                surface.render(cards);
                surface.show_status(Status::Hidden);
                let count = shown.len();
                self.shown = shown;
                FetchCompletion::Applied {
                    shown: count,
                    total_matches,
                    thumbnails,
                }
            }
        }
    }

    fn activate(&mut self, key: &str, surface: &mut dyn GallerySurface) {
        let Some(record) = self.shown.iter().find(|r| r.date == key) else {
            log::debug!("Activation for unknown card {key}");
            return;
        };
        let content = self.detail.open(record);
        surface.show_detail(Some(content));
        surface.set_scroll_locked(true);
    }

    fn close(&mut self, reason: CloseReason, surface: &mut dyn GallerySurface) {
        if self.detail.close(reason) {
            surface.show_detail(None);
            surface.set_scroll_locked(false);
        }
    }

    /// Whether `token` identifies the most recent request.
    #[must_use]
    pub fn is_latest(&self, token: RequestToken) -> bool {
        self.latest == Some(token)
    }

    /// Token of the request whose response would be applied, if any.
    #[must_use]
    pub fn latest_token(&self) -> Option<RequestToken> {
        self.latest
    }

    /// Whether a request is awaiting its response.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Records currently displayed, ascending by date.
    #[must_use]
    pub fn shown(&self) -> &[Record] {
        &self.shown
    }

    #[must_use]
    pub fn detail(&self) -> &DetailView {
        &self.detail
    }
}
