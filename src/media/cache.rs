// SPDX-License-Identifier: MPL-2.0
//! Bounded LRU cache of fetched image handles.
//!
//! Each key moves through `Pending` (request in flight) to either `Ready` or
//! `Failed`. Failed entries stay cached so a broken image is not requested
//! again on every filter change; eviction makes it eligible again.

use crate::config::{DEFAULT_CACHE_CAPACITY, MAX_CACHE_CAPACITY, MIN_CACHE_CAPACITY};
use crate::error::Error;
use crate::gallery::ImageId;
use iced::widget::image::Handle;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Which size of an image an entry holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rendition {
    Thumbnail,
    Viewer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub id: ImageId,
    pub rendition: Rendition,
}

impl CacheKey {
    #[must_use]
    pub fn thumbnail(id: ImageId) -> Self {
        Self {
            id,
            rendition: Rendition::Thumbnail,
        }
    }

    #[must_use]
    pub fn viewer(id: ImageId) -> Self {
        Self {
            id,
            rendition: Rendition::Viewer,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Entry {
    Pending,
    Ready(Handle),
    Failed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub requests: u64,
    pub hits: u64,
    pub failures: u64,
    pub evictions: u64,
}

pub struct ImageCache {
    entries: LruCache<CacheKey, Entry>,
    stats: CacheStats,
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("len", &self.entries.len())
            .field("capacity", &self.entries.cap())
            .field("stats", &self.stats)
            .finish()
    }
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl ImageCache {
    /// Creates a cache holding at most `capacity` entries (clamped).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.clamp(MIN_CACHE_CAPACITY, MAX_CACHE_CAPACITY);
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
            stats: CacheStats::default(),
        }
    }

    /// Marks `key` as requested.
    ///
    /// Returns `true` when the caller should start a fetch, `false` when the
    /// key is already pending, ready or failed.
    pub fn begin(&mut self, key: CacheKey) -> bool {
        if self.entries.get(&key).is_some() {
            self.stats.hits += 1;
            return false;
        }
        self.stats.requests += 1;
        self.insert(key, Entry::Pending);
        true
    }

    /// Records the outcome of a fetch started with [`ImageCache::begin`].
    pub fn complete(&mut self, key: CacheKey, result: Result<Handle, Error>) {
        let entry = match result {
            Ok(handle) => Entry::Ready(handle),
            Err(err) => {
                tracing::warn!(id = %key.id, rendition = ?key.rendition, %err, "image fetch failed");
                self.stats.failures += 1;
                Entry::Failed
            }
        };
        self.insert(key, entry);
    }

    fn insert(&mut self, key: CacheKey, entry: Entry) {
        if let Some((evicted, _)) = self.entries.push(key, entry) {
            if evicted != key {
                tracing::debug!(id = %evicted.id, "image evicted from cache");
                self.stats.evictions += 1;
            }
        }
    }

    /// Looks up `key` without touching the LRU order.
    #[must_use]
    pub fn entry(&self, key: &CacheKey) -> Option<&Entry> {
        self.entries.peek(key)
    }

    /// The decoded handle for `key`, once ready.
    #[must_use]
    pub fn handle(&self, key: &CacheKey) -> Option<&Handle> {
        match self.entries.peek(key) {
            Some(Entry::Ready(handle)) => Some(handle),
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

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle() -> Handle {
        Handle::from_rgba(1, 1, vec![0_u8; 4])
    }

    #[test]
    fn begin_only_once_per_key() {
        let mut cache = ImageCache::new(16);
        let key = CacheKey::thumbnail(ImageId(1015));
        assert!(cache.begin(key));
        assert!(!cache.begin(key));
        assert!(matches!(cache.entry(&key), Some(Entry::Pending)));
        assert_eq!(cache.stats().requests, 1);
        assert_eq!(cache.stats().hits, 1);
    }

    #[test]
    fn renditions_are_distinct_keys() {
        let mut cache = ImageCache::new(16);
        assert!(cache.begin(CacheKey::thumbnail(ImageId(7))));
        assert!(cache.begin(CacheKey::viewer(ImageId(7))));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn complete_stores_handle() {
        let mut cache = ImageCache::new(16);
        let key = CacheKey::viewer(ImageId(1000));
        cache.begin(key);
        cache.complete(key, Ok(handle()));
        assert!(cache.handle(&key).is_some());
    }

    #[test]
    fn failure_is_remembered() {
        let mut cache = ImageCache::new(16);
        let key = CacheKey::thumbnail(ImageId(3));
        cache.begin(key);
        cache.complete(key, Err(Error::Network("404".into())));
        assert!(matches!(cache.entry(&key), Some(Entry::Failed)));
        assert!(cache.handle(&key).is_none());
        assert!(!cache.begin(key));
        assert_eq!(cache.stats().failures, 1);
    }

    #[test]
    fn least_recent_entry_is_evicted() {
        let mut cache = ImageCache::new(MIN_CACHE_CAPACITY);
        for id in 0..MIN_CACHE_CAPACITY as u32 {
            cache.begin(CacheKey::thumbnail(ImageId(id)));
        }
        // Touch id 0 so id 1 becomes the oldest.
        cache.begin(CacheKey::thumbnail(ImageId(0)));
        cache.begin(CacheKey::thumbnail(ImageId(100)));

        assert_eq!(cache.len(), MIN_CACHE_CAPACITY);
        assert!(cache.entry(&CacheKey::thumbnail(ImageId(0))).is_some());
        assert!(cache.entry(&CacheKey::thumbnail(ImageId(1))).is_none());
        assert_eq!(cache.stats().evictions, 1);
    }

    #[test]
    fn capacity_is_clamped() {
        assert_eq!(ImageCache::new(0).capacity(), MIN_CACHE_CAPACITY);
        assert_eq!(ImageCache::new(usize::MAX).capacity(), MAX_CACHE_CAPACITY);
    }
}
