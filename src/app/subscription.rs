// SPDX-License-Identifier: MPL-2.0
//! Keyboard routing for the gallery.
//!
//! Escape always reaches the gallery so the modal can close even when a text
//! field holds focus. Focus movement and Enter only apply to events no widget
//! captured, so typing in the date fields is left alone.

use super::Message;
use crate::ui::gallery::{self, FocusMove};
use iced::keyboard::{self, key::Named, Key};
use iced::{event, Event, Subscription};

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| map_event(&event, status))
}

/// Translates a native event into a gallery message, if it maps to one.
pub fn map_event(event: &Event, status: event::Status) -> Option<Message> {
    let Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) = event else {
        return None;
    };

    let Key::Named(named) = key else {
        return None;
    };

    if *named == Named::Escape {
        return Some(Message::Gallery(gallery::Message::CancelPressed));
    }
    if matches!(status, event::Status::Captured) {
        return None;
    }

    let message = match named {
        Named::Tab if modifiers.shift() => gallery::Message::MoveFocus(FocusMove::Previous),
        Named::Tab | Named::ArrowRight => gallery::Message::MoveFocus(FocusMove::Next),
        Named::ArrowLeft => gallery::Message::MoveFocus(FocusMove::Previous),
        Named::ArrowDown => gallery::Message::MoveFocus(FocusMove::Down),
        Named::ArrowUp => gallery::Message::MoveFocus(FocusMove::Up),
        Named::Enter => gallery::Message::ActivateFocused,
        _ => return None,
    };
    Some(Message::Gallery(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(named: Named, modifiers: keyboard::Modifiers) -> Event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(named),
            modified_key: Key::Named(named),
            physical_key: keyboard::key::Physical::Code(keyboard::key::Code::Tab),
            location: keyboard::Location::Standard,
            modifiers,
            text: None,
            repeat: false,
        })
    }

    fn gallery_message(message: Option<Message>) -> Option<gallery::Message> {
        match message {
            Some(Message::Gallery(inner)) => Some(inner),
            _ => None,
        }
    }

    #[test]
    fn escape_closes_even_when_captured() {
        let message = map_event(
            &press(Named::Escape, keyboard::Modifiers::default()),
            event::Status::Captured,
        );
        assert!(matches!(
            gallery_message(message),
            Some(gallery::Message::CancelPressed)
        ));
    }

    #[test]
    fn tab_and_shift_tab_move_focus() {
        let next = map_event(
            &press(Named::Tab, keyboard::Modifiers::default()),
            event::Status::Ignored,
        );
        let previous = map_event(
            &press(Named::Tab, keyboard::Modifiers::SHIFT),
            event::Status::Ignored,
        );

        assert!(matches!(
            gallery_message(next),
            Some(gallery::Message::MoveFocus(FocusMove::Next))
        ));
        assert!(matches!(
            gallery_message(previous),
            Some(gallery::Message::MoveFocus(FocusMove::Previous))
        ));
    }

    #[test]
    fn arrows_move_by_row_and_column() {
        let down = map_event(
            &press(Named::ArrowDown, keyboard::Modifiers::default()),
            event::Status::Ignored,
        );
        assert!(matches!(
            gallery_message(down),
            Some(gallery::Message::MoveFocus(FocusMove::Down))
        ));
    }

    #[test]
    fn enter_activates_focused_card() {
        let message = map_event(
            &press(Named::Enter, keyboard::Modifiers::default()),
            event::Status::Ignored,
        );
        assert!(matches!(
            gallery_message(message),
            Some(gallery::Message::ActivateFocused)
        ));
    }

    #[test]
    fn captured_keys_are_left_to_widgets() {
        let message = map_event(
            &press(Named::Enter, keyboard::Modifiers::default()),
            event::Status::Captured,
        );
        assert!(message.is_none());
    }

    #[test]
    fn mouse_events_are_ignored() {
        let event = Event::Mouse(iced::mouse::Event::CursorLeft);
        assert!(map_event(&event, event::Status::Ignored).is_none());
    }
}
