//! Key mapping from terminal events to game actions.
//!
//! Letters are case-insensitive: `hjkl` and `wasd` steer, `p`/space pause,
//! `r` restarts. Arrow keys steer too.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Left => Some(GameAction::MoveLeft),
        KeyCode::Right => Some(GameAction::MoveRight),
        KeyCode::Up => Some(GameAction::MoveForward),
        KeyCode::Down => Some(GameAction::MoveBackward),
        KeyCode::Char(c) => char_action(c.to_ascii_lowercase()),
        _ => None,
    }
}

fn char_action(c: char) -> Option<GameAction> {
    let action = match c {
        'h' | 'a' => GameAction::MoveLeft,
        'l' | 'd' => GameAction::MoveRight,
        'k' | 'w' => GameAction::MoveForward,
        'j' | 's' => GameAction::MoveBackward,
        'p' | ' ' => GameAction::Pause,
        'r' => GameAction::Restart,
        _ => return None,
    };
    Some(action)
}

/// Whether a key event of this kind should fire `action`.
///
/// Held steering keys auto-repeat; pause and restart fire on press only so a
/// held key cannot toggle pause back and forth.
pub fn accepts(kind: KeyEventKind, action: GameAction) -> bool {
    match kind {
        KeyEventKind::Press => true,
        KeyEventKind::Repeat => is_steering(action),
        KeyEventKind::Release => false,
    }
}

pub fn is_steering(action: GameAction) -> bool {
    matches!(
        action,
        GameAction::MoveLeft
            | GameAction::MoveRight
            | GameAction::MoveForward
            | GameAction::MoveBackward
    )
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> Option<GameAction> {
        handle_key_event(KeyEvent::from(code))
    }

    #[test]
    fn arrows_steer() {
        assert_eq!(key(KeyCode::Left), Some(GameAction::MoveLeft));
        assert_eq!(key(KeyCode::Right), Some(GameAction::MoveRight));
        assert_eq!(key(KeyCode::Up), Some(GameAction::MoveForward));
        assert_eq!(key(KeyCode::Down), Some(GameAction::MoveBackward));
    }

    #[test]
    fn letters_are_case_insensitive() {
        for (lower, action) in [
            ('h', GameAction::MoveLeft),
            ('a', GameAction::MoveLeft),
            ('l', GameAction::MoveRight),
            ('d', GameAction::MoveRight),
            ('k', GameAction::MoveForward),
            ('w', GameAction::MoveForward),
            ('j', GameAction::MoveBackward),
            ('s', GameAction::MoveBackward),
            ('p', GameAction::Pause),
            ('r', GameAction::Restart),
        ] {
            assert_eq!(key(KeyCode::Char(lower)), Some(action));
            assert_eq!(key(KeyCode::Char(lower.to_ascii_uppercase())), Some(action));
        }
        assert_eq!(key(KeyCode::Char(' ')), Some(GameAction::Pause));
        assert_eq!(key(KeyCode::Char('x')), None);
        assert_eq!(key(KeyCode::Enter), None);
    }

    #[test]
    fn repeats_only_steer() {
        assert!(accepts(KeyEventKind::Repeat, GameAction::MoveLeft));
        assert!(!accepts(KeyEventKind::Repeat, GameAction::Pause));
        assert!(!accepts(KeyEventKind::Repeat, GameAction::Restart));
        assert!(accepts(KeyEventKind::Press, GameAction::Restart));
        assert!(!accepts(KeyEventKind::Release, GameAction::MoveRight));
    }

    #[test]
    fn quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
