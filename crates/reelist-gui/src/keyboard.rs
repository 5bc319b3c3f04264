//! Global keyboard shortcuts.
//!
//! Maps raw key events to semantic `Shortcut` variants that the app router
//! dispatches. The subscription lives for the whole application run, which
//! is exactly the scope the two shortcuts want.

use iced::event;
use iced::keyboard;
use iced::Subscription;

use crate::app::Message;

/// Application-level keyboard shortcuts.
#[derive(Debug, Clone, Copy)]
pub enum Shortcut {
    /// Escape — close the detail pane if one is open.
    CloseDetail,
    /// Enter — focus the search field. Only fires when no widget consumed
    /// the key; a focused search field consumes Enter itself (and clears
    /// the query via its submit handler instead).
    FocusSearch,
}

/// Subscription that converts keyboard events to `Message::Shortcut`.
pub fn keyboard_subscription() -> Subscription<Message> {
    iced::event::listen_with(|event, status, _id| match event {
        iced::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
            map_shortcut(key, status)
        }
        _ => None,
    })
}

fn map_shortcut(key: keyboard::Key, status: event::Status) -> Option<Message> {
    use keyboard::key::Named;
    use keyboard::Key;

    match key {
        Key::Named(Named::Escape) => Some(Shortcut::CloseDetail),
        Key::Named(Named::Enter) if status == event::Status::Ignored => {
            Some(Shortcut::FocusSearch)
        }
        _ => None,
    }
    .map(Message::Shortcut)
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyboard::key::Named;
    use keyboard::Key;

    #[test]
    fn escape_always_maps_to_close_detail() {
        for status in [event::Status::Ignored, event::Status::Captured] {
            assert!(matches!(
                map_shortcut(Key::Named(Named::Escape), status),
                Some(Message::Shortcut(Shortcut::CloseDetail))
            ));
        }
    }

    #[test]
    fn enter_focuses_search_only_when_unclaimed() {
        assert!(matches!(
            map_shortcut(Key::Named(Named::Enter), event::Status::Ignored),
            Some(Message::Shortcut(Shortcut::FocusSearch))
        ));
        assert!(map_shortcut(Key::Named(Named::Enter), event::Status::Captured).is_none());
    }

    #[test]
    fn other_keys_are_ignored() {
        assert!(map_shortcut(Key::Named(Named::Tab), event::Status::Ignored).is_none());
    }
}
