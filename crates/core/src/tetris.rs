//! Tetris rule engine - gravity, locking, line clears
//!
//! Deliberately the simple ruleset: no wall kicks, no hold, no lock delay.
//! A blocked rotation or move is a no-op; a piece that cannot fall one more
//! row locks immediately, full rows clear, and the next piece spawns from a
//! shuffled bag. A spawn that collides ends the game.

use tui_arcade_types::{
    GameEvent, PieceKind, Rotation, TetrisIntent, LINES_PER_LEVEL, LINE_SCORE_BASE,
    TETRIS_BASE_DROP_MS, TETRIS_DROP_FLOOR_MS, TETRIS_DROP_STEP_MS,
};

use crate::board::Board;
use crate::pieces::{shape, PieceShape};
use crate::rng::PieceBag;
use crate::EventBuf;

/// The falling piece: kind, orientation, and anchor position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x: 3,
            y: 0,
        }
    }

    pub fn shape(&self) -> PieceShape {
        shape(self.kind, self.rotation)
    }
}

/// Complete tetris world state.
#[derive(Debug, Clone, PartialEq)]
pub struct TetrisState {
    board: Board,
    active: Option<Piece>,
    next: PieceKind,
    bag: PieceBag,
    score: u32,
    lines: u32,
    drop_timer_ms: u32,
    game_over: bool,
    events: EventBuf,
}

impl TetrisState {
    pub fn new(seed: u32) -> Self {
        let mut bag = PieceBag::new(seed);
        let first = bag.draw();
        let next = bag.draw();
        Self {
            board: Board::new(),
            active: Some(Piece::spawn(first)),
            next,
            bag,
            score: 0,
            lines: 0,
            drop_timer_ms: 0,
            game_over: false,
            events: EventBuf::new(),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        *self = Self::new(seed);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn next_kind(&self) -> PieceKind {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Level starts at 1 and advances every ten lines.
    pub fn level(&self) -> u32 {
        self.lines / LINES_PER_LEVEL + 1
    }

    /// Gravity pacing for the current level.
    pub fn drop_interval_ms(&self) -> u32 {
        TETRIS_BASE_DROP_MS
            .saturating_sub(TETRIS_DROP_STEP_MS * (self.level() - 1))
            .max(TETRIS_DROP_FLOOR_MS)
    }

    /// Advance by elapsed wall time; gravity fires when its interval expires.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.game_over {
            return;
        }
        self.drop_timer_ms += elapsed_ms;
        while self.drop_timer_ms >= self.drop_interval_ms() && !self.game_over {
            self.drop_timer_ms -= self.drop_interval_ms();
            self.gravity_step();
        }
    }

    /// Apply one player intent. Blocked moves and rotations change nothing.
    pub fn apply(&mut self, intent: TetrisIntent) {
        if self.game_over {
            return;
        }
        match intent {
            TetrisIntent::MoveLeft => {
                self.try_shift(-1, 0);
            }
            TetrisIntent::MoveRight => {
                self.try_shift(1, 0);
            }
            TetrisIntent::SoftDrop => {
                self.try_shift(0, 1);
            }
            TetrisIntent::HardDrop => self.hard_drop(),
            TetrisIntent::RotateCw => self.try_rotate(true),
            TetrisIntent::RotateCcw => self.try_rotate(false),
        }
    }

    pub fn take_events(&mut self) -> EventBuf {
        std::mem::take(&mut self.events)
    }

    /// Where the active piece would land (for the ghost outline).
    pub fn ghost_y(&self) -> Option<i8> {
        let piece = self.active?;
        let mut dy = 0;
        while self.board.fits(&piece.shape(), piece.x, piece.y + dy + 1) {
            dy += 1;
        }
        Some(piece.y + dy)
    }

    fn gravity_step(&mut self) {
        if !self.try_shift(0, 1) {
            self.lock_active();
        }
    }

    fn try_shift(&mut self, dx: i8, dy: i8) -> bool {
        let Some(piece) = self.active else {
            return false;
        };
        if self.board.fits(&piece.shape(), piece.x + dx, piece.y + dy) {
            self.active = Some(Piece {
                x: piece.x + dx,
                y: piece.y + dy,
                ..piece
            });
            return true;
        }
        false
    }

    fn try_rotate(&mut self, clockwise: bool) {
        let Some(piece) = self.active else {
            return;
        };
        let rotation = if clockwise {
            piece.rotation.cw()
        } else {
            piece.rotation.ccw()
        };
        let rotated = shape(piece.kind, rotation);
        if self.board.fits(&rotated, piece.x, piece.y) {
            self.active = Some(Piece { rotation, ..piece });
        }
    }

    fn hard_drop(&mut self) {
        let Some(piece) = self.active else {
            return;
        };
        let Some(ghost_y) = self.ghost_y() else {
            return;
        };
        self.active = Some(Piece { y: ghost_y, ..piece });
        self.lock_active();
    }

    /// Merge the active piece into the grid, clear rows, spawn the next.
    fn lock_active(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };
        self.board.fill(&piece.shape(), piece.x, piece.y, piece.kind);

        let cleared = self.board.clear_full_rows();
        if cleared > 0 {
            // Score with the level in effect when the rows cleared.
            let points = LINE_SCORE_BASE * cleared * self.level();
            self.lines += cleared;
            self.score += points;
            let _ = self.events.try_push(GameEvent::LinesCleared(cleared));
            let _ = self.events.try_push(GameEvent::ScoreDelta(points));
        }

        self.spawn_next();
    }

    fn spawn_next(&mut self) {
        let piece = Piece::spawn(self.next);
        if !self.board.fits(&piece.shape(), piece.x, piece.y) {
            self.game_over = true;
            let _ = self.events.try_push(GameEvent::GameOver);
            return;
        }
        self.next = self.bag.draw();
        self.active = Some(piece);
        self.drop_timer_ms = 0;
    }
}
