//! Keyboard bindings and cursor movement.

use crate::layout::{from_display, to_display};
use crossterm::event::KeyCode;
use strictly_chess::{Orientation, Square};

/// Screen direction for the keyboard cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the top of the screen.
    Up,
    /// Towards the bottom of the screen.
    Down,
    /// Towards the left edge.
    Left,
    /// Towards the right edge.
    Right,
}

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the keyboard cursor.
    Cursor(Direction),
    /// Click the square under the cursor.
    Click,
    /// Show the previous position.
    StepBack,
    /// Show the next position.
    StepForward,
    /// Show the initial position.
    GoToStart,
    /// Show the latest position.
    GoToEnd,
    /// Flip the board.
    Flip,
    /// Start a new game.
    Reset,
    /// Leave the application.
    Quit,
}

/// Maps a key to its action.
pub fn action_for(key: KeyCode) -> Option<Action> {
    let action = match key {
        KeyCode::Up => Action::Cursor(Direction::Up),
        KeyCode::Down => Action::Cursor(Direction::Down),
        KeyCode::Left => Action::Cursor(Direction::Left),
        KeyCode::Right => Action::Cursor(Direction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Action::Click,
        KeyCode::Char('[') => Action::StepBack,
        KeyCode::Char(']') => Action::StepForward,
        KeyCode::Home => Action::GoToStart,
        KeyCode::End => Action::GoToEnd,
        KeyCode::Char('f') => Action::Flip,
        KeyCode::Char('r') => Action::Reset,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => return None,
    };
    Some(action)
}

/// Moves the cursor one square on screen; stays put at the board edge.
pub fn move_cursor(cursor: Square, direction: Direction, orientation: Orientation) -> Square {
    let (column, row) = to_display(cursor, orientation);
    let (column, row) = match direction {
        Direction::Up => (column, row.saturating_sub(1)),
        Direction::Down => (column, (row + 1).min(7)),
        Direction::Left => (column.saturating_sub(1), row),
        Direction::Right => ((column + 1).min(7), row),
    };
    from_display(column, row, orientation).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_cursor_follows_screen_direction() {
        let e2 = sq("e2");
        assert_eq!(move_cursor(e2, Direction::Up, Orientation::White), sq("e3"));
        assert_eq!(move_cursor(e2, Direction::Right, Orientation::White), sq("f2"));
        assert_eq!(move_cursor(e2, Direction::Up, Orientation::Black), sq("e1"));
        assert_eq!(move_cursor(e2, Direction::Right, Orientation::Black), sq("d2"));
    }

    #[test]
    fn test_cursor_stops_at_edge() {
        assert_eq!(move_cursor(sq("a8"), Direction::Up, Orientation::White), sq("a8"));
        assert_eq!(move_cursor(sq("a8"), Direction::Left, Orientation::White), sq("a8"));
        assert_eq!(move_cursor(sq("a8"), Direction::Down, Orientation::Black), sq("a8"));
        assert_eq!(move_cursor(sq("a8"), Direction::Right, Orientation::Black), sq("a8"));
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(action_for(KeyCode::Char(' ')), Some(Action::Click));
        assert_eq!(action_for(KeyCode::Enter), Some(Action::Click));
        assert_eq!(action_for(KeyCode::Char('[')), Some(Action::StepBack));
        assert_eq!(action_for(KeyCode::End), Some(Action::GoToEnd));
        assert_eq!(action_for(KeyCode::Esc), Some(Action::Quit));
        assert_eq!(action_for(KeyCode::Char('x')), None);
    }
}
