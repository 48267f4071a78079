// SPDX-License-Identifier: MPL-2.0
//! Lightbox cursor and visibility.
//!
//! The cursor indexes the filtered view. It is only meaningful while the view
//! is non-empty; every operation that receives a zero length leaves it at 0.

/// Direction of lightbox navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Lightbox state: open flag plus cursor into the filtered view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewer {
    open: bool,
    cursor: usize,
}

impl Viewer {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Opens the lightbox at `index`. Ignored when `index` is out of range.
    pub fn open_at(&mut self, index: usize, len: usize) -> bool {
        if index >= len {
            return false;
        }
        self.cursor = index;
        self.open = true;
        true
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Moves the cursor to 0 without changing visibility.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Moves the cursor one step with wraparound over `len` entries.
    pub fn step(&mut self, direction: Direction, len: usize) {
        self.cursor = match direction {
            Direction::Next => wrap_next(self.cursor, len),
            Direction::Previous => wrap_previous(self.cursor, len),
        };
    }
}

/// `(cursor + 1) mod len`, or 0 for an empty view.
#[must_use]
pub fn wrap_next(cursor: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (cursor + 1) % len
}

/// `(cursor - 1 + len) mod len`, or 0 for an empty view.
#[must_use]
pub fn wrap_previous(cursor: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (cursor % len + len - 1) % len
}
