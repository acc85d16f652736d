// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration and runtime limits.
//!
//! # Categories
//!
//! - **Feed**: Location of the dataset and the HTTP identity
//! - **Thumbnails**: In-memory image cache bounds
//! - **Window**: Initial and minimum window size
//! - **Logging**: Default log filter

// ==========================================================================
// Feed Defaults
// ==========================================================================

/// Static JSON dataset mirrored from the Astronomy Picture of the Day archive.
pub const DEFAULT_FEED_URL: &str = "https://cdn.jsdelivr.net/gh/GCA-Classroom/apod/data.json";

/// User agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("ApodGallery/", env!("CARGO_PKG_VERSION"));

// ==========================================================================
// Thumbnail Cache Defaults
// ==========================================================================

/// Decoded thumbnails kept in memory. Larger than one page of results so
/// switching back to a previous range does not refetch.
pub const DEFAULT_THUMBNAIL_CACHE_ENTRIES: usize = 64;

/// Lower bound accepted for the thumbnail cache.
pub const MIN_THUMBNAIL_CACHE_ENTRIES: usize = 9;

/// Upper bound accepted for the thumbnail cache.
pub const MAX_THUMBNAIL_CACHE_ENTRIES: usize = 512;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const DEFAULT_WINDOW_WIDTH: f32 = 1100.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 820.0;
pub const MIN_WINDOW_WIDTH: f32 = 640.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Log level used when neither `--log-level` nor the environment sets one.
pub const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
