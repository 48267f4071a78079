// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Views follow the Elm-style "state down, messages up" pattern: each screen
//! renders a controller's view-model and emits that controller's messages.
//!
//! # Screens
//!
//! - [`gallery_grid`] - Filter bar and responsive thumbnail grid
//! - [`lightbox`] - Modal viewer with previous/next navigation
//! - [`calculator_pad`] - Calculator display and keypad
//!
//! # Shared Infrastructure
//!
//! - [`navbar`] - Screen switcher
//! - [`animation`] - Grid reveal and lightbox fade timing
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod animation;
pub mod calculator_pad;
pub mod design_tokens;
pub mod gallery_grid;
pub mod lightbox;
pub mod navbar;
pub mod styles;
pub mod theming;
