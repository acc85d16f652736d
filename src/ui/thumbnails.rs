// SPDX-License-Identifier: MPL-2.0
//! In-memory thumbnail cache keyed by image URL.
//!
//! Lives for the process only. Entries are created in the `Loading` state when
//! a download is requested so the same URL is never fetched twice while a
//! request is in flight.

use std::num::NonZeroUsize;

use iced::widget::image;
use lru::LruCache;

use crate::domain::error::NetworkError;

/// Cached state of one thumbnail.
#[derive(Debug, Clone)]
pub enum Thumbnail {
    Loading,
    Ready(image::Handle),
    Failed,
}

#[derive(Debug)]
pub struct ThumbnailCache {
    entries: LruCache<String, Thumbnail>,
}

impl ThumbnailCache {
    /// Creates a cache holding at most `capacity` thumbnails (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
        }
    }

    /// Marks `url` as wanted. Returns true when the caller should download it.
    ///
    /// Failed entries are retried; anything else is only promoted.
    pub fn request(&mut self, url: &str) -> bool {
        match self.entries.get(url) {
            Some(Thumbnail::Loading | Thumbnail::Ready(_)) => false,
            Some(Thumbnail::Failed) | None => {
                self.entries.put(url.to_string(), Thumbnail::Loading);
                true
            }
        }
    }

    /// Stores a finished download into its `Loading` slot.
    ///
    /// Results for URLs that were evicted or already settled are dropped, so a
    /// late download never pushes out a thumbnail that is on screen.
    pub fn complete(&mut self, url: &str, result: Result<Vec<u8>, NetworkError>) {
        let Some(slot) = self.entries.peek_mut(url) else {
            log::debug!("Dropping thumbnail {url}: no longer wanted");
            return;
        };
        if !matches!(slot, Thumbnail::Loading) {
            return;
        }
        *slot = match result {
            Ok(bytes) => Thumbnail::Ready(image::Handle::from_bytes(bytes)),
            Err(err) => {
                log::debug!("thumbnail {url} failed: {err}");
                Thumbnail::Failed
            }
        };
    }

    /// Looks up `url` without touching recency.
    #[must_use]
    pub fn get(&self, url: &str) -> Option<&Thumbnail> {
        self.entries.peek(url)
    }

    /// Handle of a downloaded thumbnail, if any.
    #[must_use]
    pub fn handle(&self, url: &str) -> Option<image::Handle> {
        match self.get(url) {
            Some(Thumbnail::Ready(handle)) => Some(handle.clone()),
            _ => None,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }
}
