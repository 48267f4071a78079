// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//!
//! # Features
//!
//! - Locale resolution from CLI, config, or system settings
//! - `.ftl` translation files embedded at build time
//! - Fallback to `en-US` when a locale or message is missing

pub mod fluent;
