// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`feed`]: Source of feed records (implemented over HTTP in
//!   `infrastructure::http`)
//! - [`surface`]: Rendering target of the gallery (implemented by the Iced
//!   gallery component, and by recording fakes in tests)
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no reqwest types)
//! - No `async fn` in traits: [`FeedSource`] returns a boxed future that the
//!   caller wraps in an Iced `Task`

pub mod feed;
pub mod surface;

pub use feed::FeedSource;
pub use surface::{Command, GallerySurface, Status};
