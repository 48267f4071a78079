// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The open lightbox takes over the whole window; otherwise the navbar sits
//! above the active screen.

use super::{Message, Screen};
use crate::calculator::Calculator;
use crate::gallery::GalleryController;
use crate::i18n::fluent::I18n;
use crate::media::ImageCache;
use crate::ui::calculator_pad;
use crate::ui::gallery_grid;
use crate::ui::lightbox;
use crate::ui::navbar;
use iced::{
    widget::{Column, Container},
    Element, Length,
};
use std::time::Duration;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub notice: Option<&'a str>,
    pub gallery: &'a GalleryController,
    pub calculator: &'a Calculator,
    pub cache: &'a ImageCache,
    pub window_width: f32,
    pub tile_width: f32,
    pub reveal_elapsed: Duration,
    pub fade_opacity: f32,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    if ctx.screen == Screen::Gallery {
        if let Some(view) = ctx.gallery.lightbox() {
            return lightbox::view(lightbox::ViewContext {
                i18n: ctx.i18n,
                view,
                cache: ctx.cache,
                opacity: ctx.fade_opacity,
            })
            .map(Message::Gallery);
        }
    }

    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Gallery => gallery_grid::view(gallery_grid::ViewContext {
            i18n: ctx.i18n,
            gallery: ctx.gallery,
            cache: ctx.cache,
            window_width: ctx.window_width,
            tile_width: ctx.tile_width,
            reveal_elapsed: ctx.reveal_elapsed,
        })
        .map(Message::Gallery),
        Screen::Calculator => calculator_pad::view(calculator_pad::ViewContext {
            i18n: ctx.i18n,
            calculator: ctx.calculator,
        })
        .map(Message::Calculator),
    };

    let navbar_view = navbar::view(navbar::ViewContext {
        i18n: ctx.i18n,
        screen: ctx.screen,
        notice: ctx.notice,
    })
    .map(Message::Navbar);

    Container::new(
        Column::new()
            .push(navbar_view)
            .push(current_view)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
