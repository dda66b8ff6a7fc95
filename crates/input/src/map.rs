//! Mapping from terminal events to game actions.

use crate::types::{BoardGeometry, GameAction, BOARD_SIZE};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Map a mouse event to a placement.
///
/// Only a left-button press counts; the pointer position is hit-tested
/// against `geometry`, and clicks outside the board are ignored.
pub fn map_mouse_event(event: MouseEvent, geometry: &BoardGeometry) -> Option<GameAction> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => geometry
            .hit_test(event.column, event.row)
            .map(|(row, col)| GameAction::Place { row, col }),
        _ => None,
    }
}

/// Map keyboard input to game actions.
///
/// `1`-`9` select cells in reading order as a fallback for terminals
/// without mouse reporting.
pub fn map_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Reset),
        KeyCode::Char(c @ '1'..='9') => {
            let idx = (c as usize) - ('1' as usize);
            Some(GameAction::Place {
                row: idx / BOARD_SIZE,
                col: idx % BOARD_SIZE,
            })
        }
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q' | 'Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BOARD_OFFSET, CELL_SIZE};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_left_click_places() {
        let g = BoardGeometry::square(CELL_SIZE, BOARD_OFFSET);
        assert_eq!(
            map_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 60, 110), &g),
            Some(GameAction::Place { row: 2, col: 1 })
        );
    }

    #[test]
    fn test_click_outside_board_ignored() {
        let g = BoardGeometry::square(CELL_SIZE, BOARD_OFFSET);
        assert_eq!(
            map_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 2, 60), &g),
            None
        );
        assert_eq!(
            map_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 60, 158), &g),
            None
        );
    }

    #[test]
    fn test_other_mouse_events_ignored() {
        let g = BoardGeometry::square(CELL_SIZE, BOARD_OFFSET);
        for kind in [
            MouseEventKind::Down(MouseButton::Right),
            MouseEventKind::Up(MouseButton::Left),
            MouseEventKind::Drag(MouseButton::Left),
            MouseEventKind::Moved,
            MouseEventKind::ScrollDown,
        ] {
            assert_eq!(map_mouse_event(mouse(kind, 60, 60), &g), None);
        }
    }

    #[test]
    fn test_reset_keys() {
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(GameAction::Reset)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('R'))),
            Some(GameAction::Reset)
        );
    }

    #[test]
    fn test_digit_keys() {
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('1'))),
            Some(GameAction::Place { row: 0, col: 0 })
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('6'))),
            Some(GameAction::Place { row: 1, col: 2 })
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('9'))),
            Some(GameAction::Place { row: 2, col: 2 })
        );
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Char('0'))), None);
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('r'))));
    }
}
