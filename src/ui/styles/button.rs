// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn flat(background: Color, text_color: Color, border_color: Color, shadow: iced::Shadow) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow,
        snap: true,
    }
}

/// Selected state in a toggle group (active filter, current screen).
pub fn selected(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Hovered => flat(
            palette::PRIMARY_400,
            WHITE,
            palette::PRIMARY_500,
            shadow::MD,
        ),
        _ => flat(
            palette::PRIMARY_500,
            WHITE,
            palette::PRIMARY_600,
            shadow::SM,
        ),
    }
}

/// Unselected state in a toggle group. Adapts to light/dark theme.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    let (background, text_color) = if is_light {
        (palette::GRAY_50, palette::GRAY_900)
    } else {
        (palette::GRAY_800, WHITE)
    };

    match status {
        button::Status::Hovered => flat(
            if is_light {
                palette::GRAY_100
            } else {
                palette::GRAY_700
            },
            text_color,
            palette::PRIMARY_500,
            shadow::SM,
        ),
        _ => flat(background, text_color, palette::GRAY_400, shadow::NONE),
    }
}

/// Translucent buttons drawn over the lightbox backdrop.
pub fn overlay(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_HOVER,
        button::Status::Pressed => opacity::OVERLAY_PRESSED,
        _ => opacity::OVERLAY_NORMAL,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color: WHITE,
        border: Border {
            color: Color { a: 0.3, ..WHITE },
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::MD,
        snap: true,
    }
}

/// Gallery tiles: no chrome, the thumbnail is the button.
pub fn tile(_theme: &Theme, status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: WHITE,
        border: Border {
            color: if matches!(status, button::Status::Hovered) {
                palette::PRIMARY_400
            } else {
                Color::TRANSPARENT
            },
            width: 2.0,
            radius: radius::MD.into(),
        },
        shadow: if matches!(status, button::Status::Hovered) {
            shadow::MD
        } else {
            shadow::NONE
        },
        snap: true,
    }
}

/// Calculator operator and equals keys.
pub fn operator(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::ACCENT_400,
        _ => palette::ACCENT_500,
    };
    flat(background, WHITE, palette::ACCENT_500, shadow::SM)
}

/// Calculator clear key.
pub fn danger(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Color {
            a: opacity::OVERLAY_HOVER,
            ..palette::ERROR_500
        },
        _ => palette::ERROR_500,
    };
    flat(background, WHITE, palette::ERROR_500, shadow::SM)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_button_uses_brand_colors() {
        let style = selected(&Theme::Dark, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::PRIMARY_500))
        );
    }

    #[test]
    fn overlay_button_alpha_changes_on_hover() {
        let normal = overlay(&Theme::Dark, button::Status::Active);
        let hover = overlay(&Theme::Dark, button::Status::Hovered);
        assert_ne!(normal.background, hover.background);
    }

    #[test]
    fn unselected_follows_theme() {
        let light = unselected(&Theme::Light, button::Status::Active);
        let dark = unselected(&Theme::Dark, button::Status::Active);
        assert_ne!(light.text_color, dark.text_color);
    }
}
