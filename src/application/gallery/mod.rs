// SPDX-License-Identifier: MPL-2.0
//! Gallery use cases.
//!
//! - [`card`]: Projection of a record into a display card
//! - [`detail`]: Open/closed state machine of the detail view
//! - [`controller`]: Command handlers driving a
//!   [`GallerySurface`](crate::application::port::GallerySurface)

pub mod card;
pub mod controller;
pub mod detail;

pub use card::GalleryCard;
pub use controller::{FetchCompletion, FetchTicket, GalleryController, RequestToken, EMPTY_RESULT_KEY};
pub use detail::{CloseReason, DetailContent, DetailView};
