// SPDX-License-Identifier: MPL-2.0
//! `apod_gallery` is a desktop gallery for the Astronomy Picture of the Day
//! feed, built with the Iced GUI framework.
//!
//! The user picks a date range, the full feed is downloaded, and up to nine
//! matching entries are shown as cards. Selecting a card opens a detail view
//! with the full image or, for videos, a poster and a link to the player.
//!
//! # Layers
//!
//! - [`domain`] - Records, date intervals and error types
//! - [`application`] - Range query, gallery controller and ports
//! - [`infrastructure`] - HTTP adapters for the ports
//! - [`ui`] - Iced widgets, styles and the gallery screen
//! - [`app`] - Application root, configuration and message routing

#![doc(html_root_url = "https://docs.rs/apod_gallery/0.1.0")]

pub mod app;
pub mod application;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;

#[cfg(test)]
mod test_utils;
