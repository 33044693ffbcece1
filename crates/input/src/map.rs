//! Key mapping from terminal events to game input events.

use crate::types::InputEvent;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a raw terminal event into an [`InputEvent`].
///
/// Key releases and auto-repeats are dropped, as are mouse, focus and paste
/// events.
pub fn map_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(key),
        Event::Resize(width, height) => Some(InputEvent::Resize { width, height }),
        _ => None,
    }
}

/// Map keyboard input to game input.
pub fn handle_key_event(key: KeyEvent) -> Option<InputEvent> {
    if should_quit(key) {
        return Some(InputEvent::Exit);
    }
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    match key.code {
        KeyCode::Esc => Some(InputEvent::Cancel),
        KeyCode::Char(ch) => Some(InputEvent::Key(ch)),
        _ => None,
    }
}

/// Check if key should quit the game (Ctrl-C or Ctrl-X).
pub fn should_quit(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(
            key.code,
            KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Char('x') | KeyCode::Char('X')
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    #[test]
    fn test_printable_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('c'))),
            Some(InputEvent::Key('c'))
        );
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('C'), KeyModifiers::SHIFT)),
            Some(InputEvent::Key('C'))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('2'))),
            Some(InputEvent::Key('2'))
        );
    }

    #[test]
    fn test_cancel_key() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Esc)),
            Some(InputEvent::Cancel)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('x'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            Some(InputEvent::Exit)
        );
    }

    #[test]
    fn test_other_chords_are_dropped() {
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL)),
            None
        );
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::ALT)),
            None
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Left)), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Enter)), None);
    }

    #[test]
    fn test_releases_and_repeats_are_dropped() {
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('a'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(map_event(Event::Key(release)), None);

        let repeat = KeyEvent::new_with_kind(
            KeyCode::Char('a'),
            KeyModifiers::NONE,
            KeyEventKind::Repeat,
        );
        assert_eq!(map_event(Event::Key(repeat)), None);

        assert_eq!(
            map_event(Event::Key(KeyEvent::from(KeyCode::Char('a')))),
            Some(InputEvent::Key('a'))
        );
    }

    #[test]
    fn test_resize_and_focus() {
        assert_eq!(
            map_event(Event::Resize(80, 24)),
            Some(InputEvent::Resize {
                width: 80,
                height: 24
            })
        );
        assert_eq!(map_event(Event::FocusLost), None);
    }
}
