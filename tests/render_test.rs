//! Rendering pipeline: projectors fill framebuffers, the diff encoder
//! sends only what changed.

use tui_arcade::core::{BellsState, MinesState, SlideState, SnakeState, TetrisState};
use tui_arcade::term::{
    encode_diff_into, encode_full_into, BellsView, FrameBuffer, MinesView, SlideView, SnakeView,
    TetrisView, Viewport,
};
use tui_arcade::types::{MINES_COUNT, MINES_HEIGHT, MINES_WIDTH, TICK_MS};

const SIZES: [(u16, u16); 4] = [(80, 24), (120, 40), (40, 12), (2, 2)];

#[test]
fn every_view_renders_at_every_size() {
    let snake = SnakeState::new(1);
    let tetris = TetrisState::new(1);
    let slide = SlideState::new(1);
    let mines = MinesState::with_config(MINES_WIDTH, MINES_HEIGHT, MINES_COUNT, 1);
    let bells = BellsState::new(1);

    for (w, h) in SIZES {
        let vp = Viewport::new(w, h);
        let mut fb = FrameBuffer::new(0, 0);
        SnakeView::default().render_into(&snake, vp, &mut fb);
        assert_eq!((fb.width(), fb.height()), (w, h));
        TetrisView::default().render_into(&tetris, vp, &mut fb);
        SlideView.render_into(&slide, vp, &mut fb);
        MinesView::default().render_into(&mines, vp, &mut fb);
        BellsView::default().render_into(&bells, vp, &mut fb);
    }
}

#[test]
fn rendering_the_same_state_twice_is_identical() {
    let state = TetrisState::new(4);
    let view = TetrisView::default();
    let a = view.render(&state, Viewport::new(80, 24));
    let b = view.render(&state, Viewport::new(80, 24));
    assert_eq!(a, b);
}

#[test]
fn unchanged_frames_encode_to_almost_nothing() {
    let state = SnakeState::new(4);
    let view = SnakeView::default();
    let a = view.render(&state, Viewport::new(80, 24));
    let b = view.render(&state, Viewport::new(80, 24));

    let mut diff = Vec::new();
    encode_diff_into(&a, &b, &mut diff).unwrap();
    let mut full = Vec::new();
    encode_full_into(&b, &mut full).unwrap();
    // Only the trailing style reset remains.
    assert!(diff.len() < 32);
    assert!(full.len() > diff.len());
}

#[test]
fn one_tick_of_bells_touches_a_small_region() {
    let mut state = BellsState::new(4);
    let view = BellsView::default();
    let before = view.render(&state, Viewport::new(80, 24));
    state.tick(TICK_MS);
    let after = view.render(&state, Viewport::new(80, 24));

    let mut diff = Vec::new();
    encode_diff_into(&before, &after, &mut diff).unwrap();
    let mut full = Vec::new();
    encode_full_into(&after, &mut full).unwrap();
    assert!(diff.len() < full.len());
}
