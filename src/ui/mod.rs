// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! The gallery screen follows the Elm-style "state down, messages up" pattern:
//! [`gallery::State`] owns what is drawn and turns widget events into
//! [`gallery::Effect`]s for the application layer.
//!
//! # Screens
//!
//! - [`gallery`] - Date controls, card grid, status line and detail modal
//!
//! # Shared Infrastructure
//!
//! - [`thumbnails`] - Bounded in-memory cache of downloaded thumbnails
//! - [`browser`] - Hands video players to the system browser
//! - [`widgets`] - Custom Iced widgets (scroll lock)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod browser;
pub mod design_tokens;
pub mod gallery;
pub mod styles;
pub mod theming;
pub mod thumbnails;
pub mod widgets;
