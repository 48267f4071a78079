// SPDX-License-Identifier: MPL-2.0
//! Top bar switching between the gallery and the calculator.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Text},
    Element, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    /// Startup notice, such as an unreadable settings file.
    pub notice: Option<&'a str>,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Select(Screen),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    ScreenChanged(Screen),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, screen: &mut Screen) -> Event {
    match message {
        Message::Select(target) if target != *screen => {
            *screen = target;
            Event::ScreenChanged(target)
        }
        Message::Select(_) => Event::None,
    }
}

/// Render the navigation bar.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let tab = |target: Screen, key: &str| {
        let style: fn(&Theme, button::Status) -> button::Style = if ctx.screen == target {
            styles::button::selected
        } else {
            styles::button::unselected
        };
        button(Text::new(ctx.i18n.tr(key)))
            .padding([spacing::XS, spacing::MD])
            .style(style)
            .on_press(Message::Select(target))
    };

    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(tab(Screen::Gallery, "screen-gallery"))
        .push(tab(Screen::Calculator, "screen-calculator"));

    if let Some(notice) = ctx.notice {
        row = row.push(
            Text::new(ctx.i18n.tr(notice))
                .size(typography::CAPTION)
                .color(palette::ERROR_500),
        );
    }

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::toolbar)
        .into()
}
