// SPDX-License-Identifier: MPL-2.0
//! Time-based fades for the grid reveal and the lightbox image.
//!
//! Opacities are pure functions of elapsed time so they can be tested without
//! a running event loop. An [`Animation`] only records when it started; the
//! app samples it with the instant of the latest tick.

use crate::config::{LIGHTBOX_FADE_MS, TILE_REVEAL_FADE_MS, TILE_REVEAL_STAGGER_MS};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    started_at: Instant,
    duration: Duration,
}

impl Animation {
    /// An animation that has already finished.
    #[must_use]
    pub fn finished(now: Instant) -> Self {
        Self {
            started_at: now,
            duration: Duration::ZERO,
        }
    }

    /// Starts over from `now`. Restarting a running animation does not
    /// cancel it; it simply begins again.
    pub fn restart(&mut self, now: Instant, duration: Duration) {
        self.started_at = now;
        self.duration = duration;
    }

    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }

    #[must_use]
    pub fn is_running(&self, now: Instant) -> bool {
        self.elapsed(now) < self.duration
    }
}

fn ratio(elapsed: Duration, span: Duration) -> f32 {
    if span.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / span.as_secs_f32()).clamp(0.0, 1.0)
}

/// Total length of a staggered reveal over `visible` tiles.
#[must_use]
pub fn reveal_duration(visible: usize) -> Duration {
    let stagger = TILE_REVEAL_STAGGER_MS.saturating_mul(visible.saturating_sub(1) as u64);
    Duration::from_millis(stagger + TILE_REVEAL_FADE_MS)
}

/// Opacity of the tile at `reveal_index` after `elapsed` since the reveal
/// started. Each tile starts its fade one stagger step after the previous.
#[must_use]
pub fn reveal_opacity(elapsed: Duration, reveal_index: usize) -> f32 {
    let delay = Duration::from_millis(TILE_REVEAL_STAGGER_MS.saturating_mul(reveal_index as u64));
    match elapsed.checked_sub(delay) {
        Some(since) => ratio(since, Duration::from_millis(TILE_REVEAL_FADE_MS)),
        None => 0.0,
    }
}

#[must_use]
pub fn lightbox_fade_duration() -> Duration {
    Duration::from_millis(LIGHTBOX_FADE_MS)
}

/// Opacity of the lightbox image after `elapsed` since its content changed.
#[must_use]
pub fn fade_opacity(elapsed: Duration) -> f32 {
    ratio(elapsed, lightbox_fade_duration())
}
