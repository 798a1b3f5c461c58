// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts are recognized on every screen. The tick only runs
//! while something waits on virtual time.

use super::Message;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Cadence of the virtual clock while anything is pending.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Global keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Ctrl+K or Cmd+K.
    FocusSearch,
    /// Escape: close the menu and the suggestion dropdown.
    Dismiss,
}

/// Maps a keyboard event to a shortcut.
#[must_use]
pub fn shortcut_for(event: &keyboard::Event) -> Option<Shortcut> {
    match event {
        keyboard::Event::KeyPressed {
            key: Key::Character(c),
            modifiers,
            ..
        } if c.as_str().eq_ignore_ascii_case("k")
            && (modifiers.control() || modifiers.logo())
            && !modifiers.alt() =>
        {
            Some(Shortcut::FocusSearch)
        }
        keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            ..
        } => Some(Shortcut::Dismiss),
        _ => None,
    }
}

/// Routes keyboard shortcuts, even when a text input has focus.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match &event {
        event::Event::Keyboard(keyboard_event) => {
            shortcut_for(keyboard_event).map(Message::Shortcut)
        }
        _ => None,
    })
}

/// Creates the periodic tick driving notification timers and deferred actions.
pub fn create_tick_subscription(
    has_notifications: bool,
    has_deferred: bool,
    has_pending_diagnostics: bool,
) -> Subscription<Message> {
    if has_notifications || has_deferred || has_pending_diagnostics {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
