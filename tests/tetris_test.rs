//! Tetris end-to-end: gravity, locking, clears, and the speed curve.

use tui_arcade::core::TetrisState;
use tui_arcade::types::{
    GameEvent, TetrisIntent, BOARD_HEIGHT, TETRIS_BASE_DROP_MS, TETRIS_DROP_FLOOR_MS, TICK_MS,
};

fn drain_ticks(state: &mut TetrisState, ticks: u32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    for _ in 0..ticks {
        state.tick(TICK_MS);
        events.extend(state.take_events());
    }
    events
}

#[test]
fn pieces_fall_under_gravity() {
    let mut state = TetrisState::new(5);
    let start_y = state.active().map(|p| p.y);
    // One gravity interval's worth of ticks.
    drain_ticks(&mut state, TETRIS_BASE_DROP_MS / TICK_MS + 1);
    let now_y = state.active().map(|p| p.y);
    assert!(now_y > start_y, "active piece should have dropped a row");
}

#[test]
fn hard_drop_locks_and_spawns_the_next_piece() {
    let mut state = TetrisState::new(5);
    let first = state.active().map(|p| p.kind);
    let upcoming = state.next_kind();

    state.apply(TetrisIntent::HardDrop);

    assert_ne!(state.active().map(|p| p.kind), None);
    assert_eq!(state.active().map(|p| p.kind), Some(upcoming));
    assert!(state.board().filled() >= 4, "first piece should be locked");
    let _ = first;
}

#[test]
fn a_full_session_of_hard_drops_ends_eventually() {
    let mut state = TetrisState::new(9);
    let mut saw_game_over = false;
    for _ in 0..400 {
        state.apply(TetrisIntent::HardDrop);
        for ev in state.take_events() {
            if ev == GameEvent::GameOver {
                saw_game_over = true;
            }
        }
        if state.game_over() {
            break;
        }
    }
    assert!(state.game_over(), "stacking without clearing must top out");
    assert!(saw_game_over);
    assert!(state.active().is_none());

    // Terminal state is frozen.
    let before = state.clone();
    state.apply(TetrisIntent::MoveLeft);
    state.tick(TICK_MS);
    assert_eq!(state, before);
}

#[test]
fn soft_drop_advances_one_row() {
    let mut state = TetrisState::new(5);
    let y0 = state.active().map(|p| p.y);
    state.apply(TetrisIntent::SoftDrop);
    assert_eq!(state.active().map(|p| p.y), y0.map(|y| y + 1));
}

#[test]
fn shifts_stop_at_the_walls() {
    let mut state = TetrisState::new(5);
    for _ in 0..BOARD_HEIGHT {
        state.apply(TetrisIntent::MoveLeft);
    }
    let x_left = state.active().map(|p| p.x);
    state.apply(TetrisIntent::MoveLeft);
    assert_eq!(state.active().map(|p| p.x), x_left);
}

#[test]
fn drop_interval_has_a_floor() {
    let state = TetrisState::new(5);
    assert_eq!(state.drop_interval_ms(), TETRIS_BASE_DROP_MS);
    assert!(TETRIS_DROP_FLOOR_MS > 0);
}

#[test]
fn same_seed_produces_the_same_piece_sequence() {
    let mut a = TetrisState::new(1234);
    let mut b = TetrisState::new(1234);
    for _ in 0..20 {
        assert_eq!(a.active().map(|p| p.kind), b.active().map(|p| p.kind));
        a.apply(TetrisIntent::HardDrop);
        b.apply(TetrisIntent::HardDrop);
        if a.game_over() {
            break;
        }
    }
    assert_eq!(a, b);
}
