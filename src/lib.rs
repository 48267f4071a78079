// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is an image gallery with category filters and a lightbox,
//! paired with a small expression calculator, built with the Iced GUI framework.
//!
//! The gallery and calculator controllers are plain state machines; the
//! [`app`] module wires them to widgets, subscriptions and image fetching.

pub mod app;
pub mod calculator;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod media;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
