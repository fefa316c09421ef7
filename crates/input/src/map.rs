//! Key and mouse mapping from terminal events to game intents.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::types::{
    BellsIntent, Direction, MinesIntent, SlideIntent, SnakeIntent, TetrisIntent, BELLS_WIDTH,
};

/// Arrows plus vi (hjkl) and wasd, shared by every grid game.
fn direction_of(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(Direction::Right),
        _ => None,
    }
}

pub fn snake_intent(key: KeyEvent) -> Option<SnakeIntent> {
    direction_of(key.code).map(SnakeIntent::Turn)
}

pub fn tetris_intent(key: KeyEvent) -> Option<TetrisIntent> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(TetrisIntent::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(TetrisIntent::MoveRight),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(TetrisIntent::SoftDrop),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(TetrisIntent::RotateCw),
        KeyCode::Char('z') | KeyCode::Char('Z') => Some(TetrisIntent::RotateCcw),
        KeyCode::Char(' ') => Some(TetrisIntent::HardDrop),
        _ => None,
    }
}

pub fn slide_intent(key: KeyEvent) -> Option<SlideIntent> {
    direction_of(key.code).map(SlideIntent::Slide)
}

pub fn mines_intent(key: KeyEvent) -> Option<MinesIntent> {
    if let Some(dir) = direction_of(key.code) {
        return Some(MinesIntent::Cursor(dir));
    }
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => Some(MinesIntent::Reveal),
        KeyCode::Char('f') | KeyCode::Char('F') => Some(MinesIntent::Flag),
        _ => None,
    }
}

pub fn bells_key_intent(key: KeyEvent) -> Option<BellsIntent> {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K')
        | KeyCode::Char('w') | KeyCode::Char('W') => Some(BellsIntent::Jump),
        _ => None,
    }
}

/// Map a mouse event inside the playfield to a horizontal target.
///
/// `field_left`/`field_width` describe where the playfield sits on screen;
/// the column is mapped proportionally into world coordinates. Events
/// outside the playfield are ignored.
pub fn bells_mouse_target(
    mouse: MouseEvent,
    field_left: u16,
    field_width: u16,
) -> Option<BellsIntent> {
    if field_width == 0 {
        return None;
    }
    match mouse.kind {
        MouseEventKind::Moved
        | MouseEventKind::Down(_)
        | MouseEventKind::Drag(_) => {
            let col = mouse.column.checked_sub(field_left)?;
            if col >= field_width {
                return None;
            }
            let x = (col as f32 + 0.5) / field_width as f32 * BELLS_WIDTH;
            Some(BellsIntent::Target(x))
        }
        _ => None,
    }
}

/// Check if key should quit the session.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Check if key restarts the current game.
pub fn should_restart(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R'))
}
