// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::calculator;
use crate::config::StartScreen;
use crate::error::Error;
use crate::gallery;
use crate::media::CacheKey;
use crate::ui::navbar;
use iced::widget::image::Handle;
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Gallery(gallery::Message),
    Calculator(calculator::Message),
    /// An image request finished.
    ImageFetched {
        key: CacheKey,
        result: Result<Handle, Error>,
    },
    WindowResized(Size),
    /// A finger touched the screen at this x position.
    TouchPressed(f32),
    /// A finger left the screen at this x position.
    TouchLifted(f32),
    TouchLost,
    /// Animation frame.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Screen to open first, overriding `[general] start_screen`.
    pub screen: Option<StartScreen>,
}
