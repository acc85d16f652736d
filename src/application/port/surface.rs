// SPDX-License-Identifier: MPL-2.0
//! Gallery surface port.
//!
//! The surface is whatever draws the gallery. It exposes three capabilities:
//! rendering cards, showing a status line, and showing or hiding the detail
//! view. User activations travel the other way as [`Command`]s handed to
//! [`GalleryController::handle`](crate::application::gallery::GalleryController::handle).

use crate::application::gallery::{CloseReason, DetailContent, GalleryCard};

/// Content of the status region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// Region is collapsed.
    #[default]
    Hidden,
    /// A fetch is in flight.
    Loading,
    /// A single-line message identified by its i18n key.
    Error(&'static str),
}

/// User activation forwarded to the gallery command handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// The fetch control was activated with the raw date inputs.
    Fetch { start: String, end: String },
    /// A card was selected (pointer or keyboard); carries the record date.
    Activate(String),
    /// The detail view was asked to close.
    Close(CloseReason),
}

/// Rendering target of the gallery.
pub trait GallerySurface {
    /// Replaces the whole gallery with `cards` (empty clears it).
    fn render(&mut self, cards: Vec<GalleryCard>);

    /// Replaces the status region content.
    fn show_status(&mut self, status: Status);

    /// Shows the detail view for `detail`, or hides it when `None`.
    fn show_detail(&mut self, detail: Option<DetailContent>);

    /// Suppresses (`true`) or restores (`false`) scrolling of the gallery.
    fn set_scroll_locked(&mut self, locked: bool);
}
