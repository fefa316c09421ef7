//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key and mouse events into per-game intents. Each game
//! gets its own pure mapping function; the session-level controls (quit,
//! restart) are shared. Independent of any UI framework.

pub mod map;

pub use tui_arcade_types as types;

pub use map::{
    bells_key_intent, bells_mouse_target, mines_intent, should_quit, should_restart,
    slide_intent, snake_intent, tetris_intent,
};
