// SPDX-License-Identifier: MPL-2.0
//! Remote image loading.
//!
//! Images are fetched over HTTP on the async runtime and decoded lazily by
//! iced from their encoded bytes. [`cache::ImageCache`] remembers what has
//! been requested so each rendition is fetched at most once while cached.

pub mod cache;
pub mod fetch;

pub use cache::{CacheKey, CacheStats, Entry, ImageCache, Rendition};
pub use fetch::{fetch_image, http_client};
