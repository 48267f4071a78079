// SPDX-License-Identifier: MPL-2.0
//! Modal lightbox: one enlarged image with close and previous/next controls.
//!
//! The lightbox replaces the grid while open, so the page behind it cannot
//! scroll. Every region outside the image and its controls is backdrop and
//! closes the lightbox when clicked. Backdrop reacts on release and never
//! captures presses, so a touch that starts there can still become a swipe.

use crate::gallery::{Direction, LightboxView, Message};
use crate::i18n::fluent::I18n;
use crate::media::{CacheKey, Entry, ImageCache};
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, image, mouse_area, Column, Container, Row, Text},
    ContentFit, Element, Length,
};

/// Contextual data needed to render the lightbox.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub view: LightboxView<'a>,
    pub cache: &'a ImageCache,
    /// Opacity of the image while it fades in.
    pub opacity: f32,
}

/// Empty area that closes the lightbox when clicked.
fn backdrop<'a>(width: Length, height: Length) -> Element<'a, Message> {
    mouse_area(Container::new(Column::new()).width(width).height(height))
        .on_release(Message::BackdropClicked)
        .into()
}

fn nav_zone<'a>(label: String, direction: Direction, show: bool) -> Element<'a, Message> {
    let content: Element<'a, Message> = if show {
        button(Text::new(label).size(typography::TITLE_LG))
            .padding(spacing::SM)
            .style(styles::button::overlay)
            .on_press(Message::Navigate(direction))
            .into()
    } else {
        Column::new().into()
    };
    let zone = Container::new(content)
        .width(Length::FillPortion(1))
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);
    // The button captures its own press before the zone sees it.
    mouse_area(zone).on_release(Message::BackdropClicked).into()
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let ViewContext {
        i18n,
        view,
        cache,
        opacity,
    } = ctx;

    let close = button(Text::new(i18n.tr("lightbox-close")).size(typography::TITLE_MD))
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::overlay)
        .on_press(Message::CloseViewer);
    let top = Row::new()
        .height(Length::Fixed(sizing::LIGHTBOX_BAR))
        .align_y(Vertical::Center)
        .padding([0.0, spacing::MD])
        .push(backdrop(Length::Fill, Length::Fill))
        .push(close);

    let picture: Element<'_, Message> = match cache.entry(&CacheKey::viewer(view.record.id)) {
        Some(Entry::Ready(handle)) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Contain)
            .opacity(opacity)
            .into(),
        Some(Entry::Failed) => status_text(i18n.tr("tile-image-unavailable")),
        Some(Entry::Pending) | None => status_text(i18n.tr("tile-image-loading")),
    };
    let stage = Container::new(picture)
        .width(Length::FillPortion(8))
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    let middle = Row::new()
        .height(Length::Fill)
        .push(nav_zone(
            i18n.tr("lightbox-previous"),
            Direction::Previous,
            view.show_navigation,
        ))
        .push(stage)
        .push(nav_zone(
            i18n.tr("lightbox-next"),
            Direction::Next,
            view.show_navigation,
        ));

    let counter = i18n.tr_with_args(
        "lightbox-counter",
        &[
            ("current", view.position.to_string().as_str()),
            ("total", view.total.to_string().as_str()),
        ],
    );
    let caption = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(Text::new(view.record.title.as_str()).size(typography::TITLE_MD))
        .push(
            Container::new(Text::new(counter).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::overlay::indicator(radius::FULL)),
        );
    let bottom = mouse_area(
        Container::new(caption)
            .width(Length::Fill)
            .padding(spacing::MD)
            .align_x(Horizontal::Center),
    )
    .on_release(Message::BackdropClicked);

    Container::new(Column::new().push(top).push(middle).push(bottom))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::overlay::backdrop)
        .into()
}

fn status_text<'a>(label: String) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::BODY))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}
