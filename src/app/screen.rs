// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

use crate::config::StartScreen;

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Gallery,
    Calculator,
}

impl Screen {
    /// Fluent key of the screen's display name.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Screen::Gallery => "screen-gallery",
            Screen::Calculator => "screen-calculator",
        }
    }
}

impl From<StartScreen> for Screen {
    fn from(start: StartScreen) -> Self {
        match start {
            StartScreen::Gallery => Screen::Gallery,
            StartScreen::Calculator => Screen::Calculator,
        }
    }
}
