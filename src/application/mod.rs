// SPDX-License-Identifier: MPL-2.0
//! Application layer - use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`query`]: Date-range resolution and the filtering/sorting query
//! - [`media`]: Thumbnail and embeddable-player URL derivation
//! - [`gallery`]: Card projection, the detail state machine and the
//!   command handlers that drive a [`GallerySurface`](port::GallerySurface)
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer (`ui`, `app`) implements the surface port and forwards
//!   user activations as [`Command`](port::Command)s
//!
//! Nothing in this layer knows about Iced or HTTP.

pub mod gallery;
pub mod media;
pub mod port;
pub mod query;
