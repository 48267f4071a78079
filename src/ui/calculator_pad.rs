// SPDX-License-Identifier: MPL-2.0
//! Calculator screen: display and on-screen keypad.

use crate::calculator::{Calculator, Message};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Text},
    Element, Length, Theme,
};

/// One keypad button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Input(&'static str),
    Clear,
    Backspace,
    Equals,
}

impl Key {
    #[must_use]
    pub fn message(self) -> Message {
        match self {
            Key::Input(token) => Message::Append(token.to_string()),
            Key::Clear => Message::Clear,
            Key::Backspace => Message::Backspace,
            Key::Equals => Message::Evaluate,
        }
    }

    fn label(self, i18n: &I18n) -> String {
        match self {
            Key::Input(token) => token.to_string(),
            Key::Clear => i18n.tr("calculator-clear"),
            Key::Backspace => i18n.tr("calculator-backspace"),
            Key::Equals => i18n.tr("calculator-equals"),
        }
    }

    fn style(self) -> fn(&Theme, button::Status) -> button::Style {
        match self {
            Key::Clear => styles::button::danger,
            Key::Equals | Key::Input("+" | "-" | "*" | "/") => styles::button::operator,
            Key::Input(_) | Key::Backspace => styles::button::unselected,
        }
    }
}

/// Keypad layout, row by row.
pub const KEYPAD: [[Key; 4]; 5] = [
    [Key::Clear, Key::Input("("), Key::Input(")"), Key::Input("/")],
    [Key::Input("7"), Key::Input("8"), Key::Input("9"), Key::Input("*")],
    [Key::Input("4"), Key::Input("5"), Key::Input("6"), Key::Input("-")],
    [Key::Input("1"), Key::Input("2"), Key::Input("3"), Key::Input("+")],
    [Key::Input("0"), Key::Input("."), Key::Backspace, Key::Equals],
];

/// Contextual data needed to render the calculator.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub calculator: &'a Calculator,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let display_text = if ctx.calculator.is_empty() {
        Text::new(ctx.i18n.tr("calculator-placeholder"))
            .size(typography::DISPLAY)
            .color(palette::GRAY_400)
    } else {
        Text::new(ctx.calculator.buffer()).size(typography::DISPLAY)
    };
    let display = Container::new(display_text)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::DISPLAY_HEIGHT))
        .padding([spacing::XS, spacing::MD])
        .align_x(Horizontal::Right)
        .align_y(Vertical::Center)
        .style(styles::container::display);

    let mut pad = Column::new().spacing(spacing::XS).push(display);
    for keys in KEYPAD {
        let mut row = Row::new().spacing(spacing::XS);
        for key in keys {
            let label = Container::new(Text::new(key.label(ctx.i18n)).size(typography::KEYPAD))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center);
            row = row.push(
                button(label)
                    .width(Length::Fixed(sizing::KEYPAD_BUTTON))
                    .height(Length::Fixed(sizing::KEYPAD_BUTTON))
                    .style(key.style())
                    .on_press(key.message()),
            );
        }
        pad = pad.push(row);
    }

    let card = Container::new(pad)
        .padding(spacing::MD)
        .style(styles::container::card);

    Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::message_for_text;

    #[test]
    fn input_keys_match_keyboard_bindings() {
        for key in KEYPAD.iter().flatten() {
            if let Key::Input(token) = key {
                assert_eq!(message_for_text(token), Some(key.message()));
            }
        }
    }

    #[test]
    fn keypad_has_every_operation() {
        let keys: Vec<Key> = KEYPAD.iter().flatten().copied().collect();
        assert!(keys.contains(&Key::Clear));
        assert!(keys.contains(&Key::Backspace));
        assert!(keys.contains(&Key::Equals));
        for digit in ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"] {
            assert!(keys.contains(&Key::Input(digit)));
        }
    }

    #[test]
    fn pressing_keys_drives_calculator() {
        let mut calc = Calculator::new();
        for key in [Key::Input("7"), Key::Input("*"), Key::Input("6"), Key::Equals] {
            calc.handle(key.message());
        }
        assert_eq!(calc.buffer(), "42");
    }
}
