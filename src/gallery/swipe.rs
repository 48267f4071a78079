// SPDX-License-Identifier: MPL-2.0
//! Horizontal swipe detection for lightbox navigation.

use super::viewer::Direction;
use crate::config::DEFAULT_SWIPE_THRESHOLD;

/// Tracks one touch from press to lift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeTracker {
    threshold: f32,
    start_x: Option<f32>,
}

impl SwipeTracker {
    /// A threshold that is not a finite number is replaced by the default.
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        let threshold = if threshold.is_finite() {
            threshold.abs()
        } else {
            DEFAULT_SWIPE_THRESHOLD
        };
        Self {
            threshold,
            start_x: None,
        }
    }

    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Whether a touch has begun and not yet ended.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }

    /// Ends the touch at `x`.
    ///
    /// A leftward swipe longer than the threshold yields [`Direction::Next`],
    /// a rightward one [`Direction::Previous`]. Shorter moves yield nothing.
    pub fn end(&mut self, x: f32) -> Option<Direction> {
        let start = self.start_x.take()?;
        let diff = start - x;
        if diff.abs() <= self.threshold {
            return None;
        }
        if diff > 0.0 {
            Some(Direction::Next)
        } else {
            Some(Direction::Previous)
        }
    }

    /// Forgets a touch that was lost without a lift.
    pub fn cancel(&mut self) {
        self.start_x = None;
    }
}
