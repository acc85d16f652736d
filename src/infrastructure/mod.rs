// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`http`]: Feed and image download over HTTP(S) with `reqwest`
//!   (implements [`FeedSource`])
//!
//! [`FeedSource`]: crate::application::port::FeedSource

pub mod http;

pub use http::{fetch_image, HttpFeedSource};
