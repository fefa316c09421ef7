//! Shared types module - data structures and constants for every game
//!
//! All types here are pure data with no external dependencies, so they are
//! usable from any layer (rule engines, input mapping, terminal rendering).
//!
//! # Simulation timing
//!
//! Every game is driven from one fixed-timestep loop:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//!
//! Games that advance slower than the loop (snake steps, tetris gravity)
//! accumulate elapsed milliseconds internally and fire their rule step when
//! their own interval expires. Those intervals are listed per game below.
//!
//! # Per-game boards
//!
//! - Snake: 16x16 wrapping grid
//! - Tetris: 10x20 grid, spawn anchor at (3, 0)
//! - 2048: 4x4 tile grid
//! - Minesweeper: 9x9 grid with 10 mines (parameterized)
//! - Bells: continuous world, 64 columns wide, y grows upward

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS).
pub const TICK_MS: u32 = 16;

// ---------------------------------------------------------------------------
// Snake

/// Snake grid is square; exiting one edge re-enters on the opposite edge.
pub const SNAKE_GRID: u8 = 16;

/// Milliseconds between snake steps at score 0.
pub const SNAKE_BASE_STEP_MS: u32 = 90;

/// Step interval reduction per food eaten.
pub const SNAKE_SPEEDUP_MS: u32 = 2;

/// Snake never steps faster than this.
pub const SNAKE_STEP_FLOOR_MS: u32 = 40;

// ---------------------------------------------------------------------------
// Tetris

/// Tetris board width in cells.
pub const BOARD_WIDTH: u8 = 10;

/// Tetris board height in cells.
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity interval at level 1 (milliseconds per row).
pub const TETRIS_BASE_DROP_MS: u32 = 800;

/// Gravity interval reduction per level above 1.
pub const TETRIS_DROP_STEP_MS: u32 = 70;

/// Gravity interval floor.
pub const TETRIS_DROP_FLOOR_MS: u32 = 120;

/// Base points per cleared line; a clear is worth `100 * lines * level`.
pub const LINE_SCORE_BASE: u32 = 100;

/// Lines needed to advance one level.
pub const LINES_PER_LEVEL: u32 = 10;

// ---------------------------------------------------------------------------
// 2048

/// 2048 grid is 4x4.
pub const SLIDE_SIZE: usize = 4;

/// Reaching this tile value emits a one-time `Win`.
pub const SLIDE_WIN_TILE: u16 = 2048;

/// A spawned tile is a 4 with probability 1-in-`SLIDE_FOUR_ODDS`, else a 2.
pub const SLIDE_FOUR_ODDS: u32 = 10;

// ---------------------------------------------------------------------------
// Minesweeper

/// Default minesweeper board width.
pub const MINES_WIDTH: u8 = 9;

/// Default minesweeper board height.
pub const MINES_HEIGHT: u8 = 9;

/// Default mine count.
pub const MINES_COUNT: u16 = 10;

// ---------------------------------------------------------------------------
// Bells (continuous physics)
//
// World units are terminal cells; y grows upward with the ground at y = 0.
// Velocities are cells/second, accelerations cells/second².

/// Playfield width in world columns.
pub const BELLS_WIDTH: f32 = 64.0;

/// Downward acceleration.
pub const BELLS_GRAVITY: f32 = 42.0;

/// Gravity multiplier inside the apex hang band (longer hang time near the
/// top of an arc).
pub const BELLS_APEX_GRAVITY_SCALE: f32 = 0.45;

/// |vy| below this counts as "near the apex".
pub const BELLS_APEX_BAND: f32 = 6.0;

/// Vertical velocity set by the initial jump and by every bell hit.
pub const BELLS_BOUNCE_VY: f32 = 30.0;

/// Upward speed clamp.
pub const BELLS_MAX_RISE: f32 = 34.0;

/// Horizontal easing rate toward the pointer target (fraction/second).
pub const BELLS_FOLLOW_RATE: f32 = 10.0;

/// Actor collision radius.
pub const BELLS_ACTOR_RADIUS: f32 = 1.0;

/// Bell collision radius.
pub const BELLS_BELL_RADIUS: f32 = 1.5;

/// Minimum vertical gap between consecutive spawned bells.
pub const BELLS_GAP_MIN: f32 = 7.0;

/// Maximum vertical gap between consecutive spawned bells.
pub const BELLS_GAP_MAX: f32 = 13.0;

/// Points per bell rung.
pub const BELLS_SCORE_PER_BELL: u32 = 10;

/// The camera keeps the actor this far above the window bottom.
pub const BELLS_CAMERA_LEAD: f32 = 12.0;

/// Bells are laid out this far above the camera before they are needed.
pub const BELLS_SPAWN_HORIZON: f32 = 48.0;

// ---------------------------------------------------------------------------
// Shared enums

/// A cardinal direction on a grid.
///
/// `delta()` uses screen coordinates: x grows right, y grows down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The exact opposite direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_arcade_types::Direction;
    ///
    /// assert_eq!(Direction::Up.opposite(), Direction::Down);
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// ```
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit step as `(dx, dy)` in screen coordinates.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Events emitted by a rule engine during one transition.
///
/// Created inside `tick`/`apply`, drained by the hosting loop right after.
/// Terminal events (`GameOver`, `Win`) halt the engine until an explicit
/// reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Score increased by this amount.
    ScoreDelta(u32),
    /// Tetris cleared this many rows at once.
    LinesCleared(u32),
    /// Terminal loss; the engine stops accepting intents.
    GameOver,
    /// Terminal (minesweeper) or milestone (2048) win.
    Win,
}

// ---------------------------------------------------------------------------
// Per-game intents
//
// Intents are discrete player commands, produced by the input layer and
// consumed exactly once per tick by the rule engine.

/// Snake: the only command is a direction change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeIntent {
    Turn(Direction),
}

/// Tetris piece control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TetrisIntent {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    RotateCw,
    RotateCcw,
}

/// 2048: slide the whole grid in one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideIntent {
    Slide(Direction),
}

/// Minesweeper: move the cursor or act at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinesIntent {
    Cursor(Direction),
    Reveal,
    Flag,
}

/// Bells: a discrete jump to leave the ground, then continuous pointer
/// targeting. `Target` carries the pointer's world column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BellsIntent {
    Jump,
    Target(f32),
}

// ---------------------------------------------------------------------------
// Tetris piece types

/// The seven tetromino piece kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in canonical order (used by the spawn bag).
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];
}

/// Rotation states, cycling North → East → South → West.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    pub fn cw(self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    pub fn ccw(self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }
}

/// A tetris board cell: empty or filled with a piece kind (for color).
pub type Cell = Option<PieceKind>;
