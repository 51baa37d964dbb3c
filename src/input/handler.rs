use crossterm::event::{KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use crate::game::GameState;
use crate::input::event::InputEvent;

/// Maps a key press to an engine event. Repeat events count as fresh
/// presses so held arrows keep moving the piece.
pub fn map_key(code: KeyCode, kind: KeyEventKind) -> Option<InputEvent> {
    if kind == KeyEventKind::Release {
        return None;
    }

    match code {
        KeyCode::Left => Some(InputEvent::MoveLeft),
        KeyCode::Right => Some(InputEvent::MoveRight),
        KeyCode::Down => Some(InputEvent::SoftDrop),
        KeyCode::Up => Some(InputEvent::HardDrop),
        KeyCode::Char('z') | KeyCode::Char('Z') => Some(InputEvent::RotateCcw),
        KeyCode::Char('x') | KeyCode::Char('X') => Some(InputEvent::RotateCw),
        KeyCode::Enter | KeyCode::Char(' ') => Some(InputEvent::Confirm),
        _ => None,
    }
}

/// Maps a mouse click. Clicks confirm on the start and game-over screens;
/// during play the left button rotates clockwise and the right button
/// counter-clockwise.
pub fn map_mouse(event: MouseEvent, state: GameState) -> Option<InputEvent> {
    let button = match event.kind {
        MouseEventKind::Down(button) => button,
        _ => return None,
    };

    match state {
        GameState::Playing => match button {
            MouseButton::Left => Some(InputEvent::RotateCw),
            MouseButton::Right => Some(InputEvent::RotateCcw),
            MouseButton::Middle => None,
        },
        GameState::Start | GameState::GameOver => Some(InputEvent::Confirm),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn click(button: MouseButton) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(button),
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn arrows_map_to_movement() {
        assert_eq!(map_key(KeyCode::Left, KeyEventKind::Press), Some(InputEvent::MoveLeft));
        assert_eq!(map_key(KeyCode::Right, KeyEventKind::Press), Some(InputEvent::MoveRight));
        assert_eq!(map_key(KeyCode::Down, KeyEventKind::Press), Some(InputEvent::SoftDrop));
        assert_eq!(map_key(KeyCode::Up, KeyEventKind::Press), Some(InputEvent::HardDrop));
    }

    #[test]
    fn releases_are_ignored() {
        assert_eq!(map_key(KeyCode::Left, KeyEventKind::Release), None);
        assert_eq!(map_key(KeyCode::Up, KeyEventKind::Release), None);
    }

    #[test]
    fn clicks_depend_on_state() {
        assert_eq!(
            map_mouse(click(MouseButton::Left), GameState::Start),
            Some(InputEvent::Confirm)
        );
        assert_eq!(
            map_mouse(click(MouseButton::Right), GameState::GameOver),
            Some(InputEvent::Confirm)
        );
        assert_eq!(
            map_mouse(click(MouseButton::Left), GameState::Playing),
            Some(InputEvent::RotateCw)
        );
        assert_eq!(
            map_mouse(click(MouseButton::Right), GameState::Playing),
            Some(InputEvent::RotateCcw)
        );
    }

    #[test]
    fn mouse_movement_is_ignored() {
        let moved = MouseEvent {
            kind: MouseEventKind::Moved,
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(map_mouse(moved, GameState::Playing), None);
    }
}
