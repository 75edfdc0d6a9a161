//! Maps crossterm events to board actions.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use gridpath_core::{Cell, Dims};
use gridpath_search::Algorithm;

/// Terminal columns used per board cell.
pub const CELL_WIDTH: u16 = 2;

/// Something the user asked for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor by a row and column delta.
    Move(i32, i32),
    /// Apply the current mode at the cursor.
    Apply,
    /// Apply the current mode at a clicked cell.
    Click(Cell),
    ArmStart,
    ArmEnd,
    Select(Algorithm),
    CycleAlgorithm,
    Visualize,
    ClearPath,
    Reset,
    RandomMaze,
    Faster,
    Slower,
    Redraw,
    Quit,
}

fn key_action(code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(code, KeyCode::Char('c')).then_some(Action::Quit);
    }
    let action = match code {
        KeyCode::Up | KeyCode::Char('k') => Action::Move(-1, 0),
        KeyCode::Down | KeyCode::Char('j') => Action::Move(1, 0),
        KeyCode::Left | KeyCode::Char('h') => Action::Move(0, -1),
        KeyCode::Right | KeyCode::Char('l') => Action::Move(0, 1),
        KeyCode::Char(' ') => Action::Apply,
        KeyCode::Char('s') => Action::ArmStart,
        KeyCode::Char('e') => Action::ArmEnd,
        KeyCode::Char('1') => Action::Select(Algorithm::Bfs),
        KeyCode::Char('2') => Action::Select(Algorithm::Dfs),
        KeyCode::Char('3') => Action::Select(Algorithm::Dijkstra),
        KeyCode::Char('4') => Action::Select(Algorithm::Astar),
        KeyCode::Tab => Action::CycleAlgorithm,
        KeyCode::Enter => Action::Visualize,
        KeyCode::Char('c') => Action::ClearPath,
        KeyCode::Char('x') => Action::Reset,
        KeyCode::Char('r') => Action::RandomMaze,
        KeyCode::Char('+') | KeyCode::Char('=') => Action::Faster,
        KeyCode::Char('-') => Action::Slower,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => return None,
    };
    Some(action)
}

/// Board cell under terminal position `(column, row)`, if any.
pub fn cell_at(dims: Dims, column: u16, row: u16) -> Option<Cell> {
    let c = Cell::new(row as i32, (column / CELL_WIDTH) as i32);
    dims.contains(c).then_some(c)
}

/// Translate a terminal event for a board of size `dims`.
pub fn action(ev: &Event, dims: Dims) -> Option<Action> {
    match ev {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) => key_action(*code, *modifiers),
        Event::Mouse(me) => match me.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                cell_at(dims, me.column, me.row).map(Action::Click)
            }
            _ => None,
        },
        Event::Resize(..) => Some(Action::Redraw),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::MouseEvent;

    use super::*;

    const DIMS: Dims = Dims { rows: 5, cols: 10 };

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn movement_keys() {
        assert_eq!(action(&key(KeyCode::Up), DIMS), Some(Action::Move(-1, 0)));
        assert_eq!(action(&key(KeyCode::Char('l')), DIMS), Some(Action::Move(0, 1)));
        assert_eq!(action(&key(KeyCode::Char('j')), DIMS), Some(Action::Move(1, 0)));
    }

    #[test]
    fn algorithm_keys() {
        assert_eq!(
            action(&key(KeyCode::Char('4')), DIMS),
            Some(Action::Select(Algorithm::Astar))
        );
        assert_eq!(action(&key(KeyCode::Tab), DIMS), Some(Action::CycleAlgorithm));
        assert_eq!(action(&key(KeyCode::Enter), DIMS), Some(Action::Visualize));
    }

    #[test]
    fn quit_keys() {
        assert_eq!(action(&key(KeyCode::Esc), DIMS), Some(Action::Quit));
        assert_eq!(action(&key(KeyCode::Char('q')), DIMS), Some(Action::Quit));
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(action(&ctrl_c, DIMS), Some(Action::Quit));
    }

    #[test]
    fn unbound_keys_are_ignored() {
        assert_eq!(action(&key(KeyCode::Char('z')), DIMS), None);
        assert_eq!(action(&key(KeyCode::F(1)), DIMS), None);
    }

    #[test]
    fn key_release_is_ignored() {
        let mut ev = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        ev.kind = KeyEventKind::Release;
        assert_eq!(action(&Event::Key(ev), DIMS), None);
    }

    #[test]
    fn click_maps_to_cell() {
        assert_eq!(action(&click(0, 0), DIMS), Some(Action::Click(Cell::new(0, 0))));
        assert_eq!(action(&click(7, 3), DIMS), Some(Action::Click(Cell::new(3, 3))));
        // Below the board, on the status lines.
        assert_eq!(action(&click(2, 5), DIMS), None);
        // Right of the board.
        assert_eq!(action(&click(20, 0), DIMS), None);
    }
}
