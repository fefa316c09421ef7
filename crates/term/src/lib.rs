//! Terminal rendering for the arcade.
//!
//! Game state is projected into a plain framebuffer of styled cells by pure
//! per-game views, then flushed through a diffing renderer. No widget
//! framework; the pipeline stays close to a game renderer so the views are
//! unit-testable without a terminal.

pub mod bells_view;
pub mod fb;
pub mod mines_view;
pub mod renderer;
pub mod slide_view;
pub mod snake_view;
pub mod tetris_view;
pub mod views;

pub use tui_arcade_core as core;
pub use tui_arcade_types as types;

pub use bells_view::BellsView;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use mines_view::MinesView;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use slide_view::SlideView;
pub use snake_view::SnakeView;
pub use tetris_view::TetrisView;
pub use views::{FieldRect, Viewport};
