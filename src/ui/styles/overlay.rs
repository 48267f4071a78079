// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay styles: backdrop, caption and position counter.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..BLACK
        })),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Pill-shaped indicator such as the "2 / 5" counter.
pub fn indicator(rad: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::CAPTION,
            ..BLACK
        })),
        text_color: Some(WHITE),
        border: Border {
            color: Color { a: 0.2, ..WHITE },
            width: 1.0,
            radius: rad.into(),
        },
        ..Default::default()
    }
}
