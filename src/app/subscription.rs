// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native events are routed by screen: the gallery listens for lightbox keys
//! and touch gestures, the calculator for typed characters. Window resizes
//! are routed on both screens.

use super::{Message, Screen};
use crate::calculator;
use crate::config::ANIMATION_TICK_MS;
use crate::gallery::{self, Direction};
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, touch, window, Event, Subscription};
use std::time::Duration;

/// Creates the event subscription for the current screen.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Gallery => event::listen_with(|event, status, _window| match status {
            event::Status::Ignored => gallery_event(&event),
            // Resizes and lifts still matter when a widget captured them.
            event::Status::Captured => shared_event(&event),
        }),
        Screen::Calculator => event::listen_with(|event, status, _window| match status {
            event::Status::Ignored => calculator_event(&event),
            event::Status::Captured => shared_event(&event),
        }),
    }
}

/// Creates a periodic tick subscription while an animation runs.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(Duration::from_millis(ANIMATION_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

fn shared_event(event: &Event) -> Option<Message> {
    match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(*size)),
        Event::Touch(touch::Event::FingerLifted { position, .. }) => {
            Some(Message::TouchLifted(position.x))
        }
        Event::Touch(touch::Event::FingerLost { .. }) => Some(Message::TouchLost),
        _ => None,
    }
}

/// Maps lightbox keys and touch gestures on the gallery screen.
pub fn gallery_event(event: &Event) -> Option<Message> {
    let gallery_message = match event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(named),
            ..
        }) => match named {
            Named::Escape => gallery::Message::CloseViewer,
            Named::ArrowLeft => gallery::Message::Navigate(Direction::Previous),
            Named::ArrowRight => gallery::Message::Navigate(Direction::Next),
            _ => return None,
        },
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            return Some(Message::TouchPressed(position.x));
        }
        _ => return shared_event(event),
    };
    Some(Message::Gallery(gallery_message))
}

/// Maps typed characters, Enter and Backspace on the calculator screen.
pub fn calculator_event(event: &Event) -> Option<Message> {
    let Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) = event else {
        return shared_event(event);
    };
    if modifiers.command() || modifiers.control() || modifiers.alt() {
        return None;
    }
    let message = match key {
        Key::Named(Named::Enter) => calculator::Message::Evaluate,
        Key::Named(Named::Backspace) => calculator::Message::Backspace,
        Key::Character(text) => calculator::message_for_text(text.as_str())?,
        _ => return None,
    };
    Some(Message::Calculator(message))
}
