// SPDX-License-Identifier: MPL-2.0
//! Domain layer - core gallery types and business rules.
//!
//! This module contains pure domain types and value objects. Apart from
//! `serde` (feed schema) and `chrono` (calendar arithmetic) it has no
//! dependencies, so everything here is testable without a window or network.
//!
//! # Modules
//!
//! - [`apod`]: Feed records ([`Record`](apod::Record), [`MediaKind`](apod::MediaKind))
//!   and the inclusive [`DateInterval`](apod::DateInterval)
//! - [`error`]: Domain error types ([`ValidationError`](error::ValidationError),
//!   [`NetworkError`](error::NetworkError))

pub mod apod;
pub mod error;
