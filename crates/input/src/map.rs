//! Key mapping from terminal events to engine keys.

use crate::types::InputKey;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to an engine key.
pub fn map_key_event(key: KeyEvent) -> Option<InputKey> {
    if should_quit(key) {
        return Some(InputKey::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(InputKey::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(InputKey::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(InputKey::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(InputKey::Right),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputKey::Restart),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_arrow_keys() {
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Up)), Some(InputKey::Up));
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Down)), Some(InputKey::Down));
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Left)), Some(InputKey::Left));
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Right)), Some(InputKey::Right));
    }

    #[test]
    fn test_wasd_keys() {
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Char('w'))), Some(InputKey::Up));
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Char('A'))), Some(InputKey::Left));
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Char('s'))), Some(InputKey::Down));
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Char('D'))), Some(InputKey::Right));
    }

    #[test]
    fn test_restart_and_unmapped() {
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Char('r'))), Some(InputKey::Restart));
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Esc)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert_eq!(
            map_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(InputKey::Quit)
        );
    }
}
