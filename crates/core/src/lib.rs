//! Core rule engines - pure, deterministic, and testable
//!
//! One module per game plus the shared seeded RNG. Nothing in this crate does
//! I/O or owns a timer: every engine is advanced by explicit
//! `tick(elapsed_ms)` calls and mutated only by `apply(intent)`, so the same
//! seed and the same intent sequence always reproduce the same run.
//!
//! # Module Structure
//!
//! - [`rng`]: seeded LCG used for every random decision
//! - [`snake`]: wrapping-grid snake with decoupled pending direction
//! - [`board`] / [`pieces`] / [`tetris`]: tetris grid, shape tables, rules
//! - [`slide`]: 2048 tile sliding and merging
//! - [`mines`]: minesweeper with precomputed neighbor counts and flood reveal
//! - [`bells`]: continuous bounce physics with a camera
//!
//! # Shared conventions
//!
//! - Illegal intents are silent no-ops; state is untouched.
//! - `GameOver`/`Win` halt the engine until `reset(seed)`.
//! - Events accumulate in a bounded buffer drained via `take_events`.

pub mod bells;
pub mod board;
pub mod mines;
pub mod pieces;
pub mod rng;
pub mod slide;
pub mod snake;
pub mod tetris;

pub use bells::{Bell, BellsState};
pub use board::Board;
pub use mines::{MineCell, MinesState};
pub use pieces::{shape, PieceShape};
pub use rng::{PieceBag, SimpleRng};
pub use slide::SlideState;
pub use snake::SnakeState;
pub use tetris::{Piece, TetrisState};

use arrayvec::ArrayVec;
use tui_arcade_types::GameEvent;

/// Bounded event buffer drained by the host once per tick.
///
/// Eight slots cover the worst run of transitions between drains. Engines
/// push with `try_push` and drop the newest event when the buffer is full,
/// so a host that drains late loses events but never panics.
pub type EventBuf = ArrayVec<GameEvent, 8>;
