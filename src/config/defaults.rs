// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Image source**: URL template and the two rendition sizes
//! - **Grid**: Tile width used to derive column count
//! - **Gestures**: Swipe distance threshold
//! - **Cache**: Fetched image cache capacity
//! - **Animation**: Tile reveal stagger and lightbox fade

// ==========================================================================
// Image Source Defaults
// ==========================================================================

/// Base URL of the image service. Images resolve to
/// `{base}/id/{id}/{width}/{height}`.
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://picsum.photos";

/// Thumbnail rendition width used for grid tiles.
pub const DEFAULT_THUMBNAIL_WIDTH: u32 = 600;

/// Thumbnail rendition height used for grid tiles.
pub const DEFAULT_THUMBNAIL_HEIGHT: u32 = 400;

/// Enlarged rendition width used by the lightbox.
pub const DEFAULT_VIEWER_WIDTH: u32 = 1200;

/// Enlarged rendition height used by the lightbox.
pub const DEFAULT_VIEWER_HEIGHT: u32 = 800;

/// Smallest rendition edge accepted from config.
pub const MIN_IMAGE_EDGE: u32 = 16;

/// Largest rendition edge accepted from config.
pub const MAX_IMAGE_EDGE: u32 = 5000;

// ==========================================================================
// Grid Defaults
// ==========================================================================

/// Target tile width in logical pixels.
pub const DEFAULT_TILE_WIDTH: f32 = 280.0;

/// Minimum tile width.
pub const MIN_TILE_WIDTH: f32 = 120.0;

/// Maximum tile width.
pub const MAX_TILE_WIDTH: f32 = 800.0;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Minimum horizontal travel (logical px) for a touch to count as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

/// Minimum swipe threshold.
pub const MIN_SWIPE_THRESHOLD: f32 = 10.0;

/// Maximum swipe threshold.
pub const MAX_SWIPE_THRESHOLD: f32 = 400.0;

// ==========================================================================
// Cache Defaults
// ==========================================================================

/// Default number of fetched images kept in memory.
pub const DEFAULT_CACHE_CAPACITY: usize = 64;

/// Minimum cache capacity.
pub const MIN_CACHE_CAPACITY: usize = 8;

/// Maximum cache capacity.
pub const MAX_CACHE_CAPACITY: usize = 512;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Delay between consecutive tiles appearing after a filter change (ms).
pub const TILE_REVEAL_STAGGER_MS: u64 = 50;

/// Duration of one tile's fade-in (ms).
pub const TILE_REVEAL_FADE_MS: u64 = 300;

/// Duration of the lightbox image fade-in (ms).
pub const LIGHTBOX_FADE_MS: u64 = 150;

/// Tick interval while an animation is running (ms).
pub const ANIMATION_TICK_MS: u64 = 16;
