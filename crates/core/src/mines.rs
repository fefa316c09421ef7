//! Minesweeper rule engine - precomputed counts, iterative flood reveal
//!
//! The mine layout and every neighbor count are fixed at construction and
//! never recalculated. Revealing a zero-neighbor cell cascades across the
//! 8-neighborhood with an explicit work stack (large boards must not recurse),
//! skipping flagged and already-revealed cells. Revealing a mine uncovers all
//! mines and ends the game; revealing everything else wins it.

use tui_arcade_types::{Direction, GameEvent, MinesIntent, MINES_COUNT, MINES_HEIGHT, MINES_WIDTH};

use crate::rng::SimpleRng;
use crate::EventBuf;

/// One board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MineCell {
    pub is_mine: bool,
    pub revealed: bool,
    pub flagged: bool,
    /// Adjacent mine count, fixed at board generation.
    pub neighbors: u8,
}

/// Minesweeper world state with a TUI cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct MinesState {
    width: u8,
    height: u8,
    mine_count: u16,
    cells: Vec<MineCell>,
    cursor: (u8, u8),
    revealed: u16,
    game_over: bool,
    won: bool,
    events: EventBuf,
}

impl MinesState {
    /// Default 9x9 board with 10 mines.
    pub fn new(seed: u32) -> Self {
        Self::with_config(MINES_WIDTH, MINES_HEIGHT, MINES_COUNT, seed)
    }

    /// Arbitrary dimensions; mines placed by rejection sampling so exactly
    /// `mine_count` distinct cells are mined.
    pub fn with_config(width: u8, height: u8, mine_count: u16, seed: u32) -> Self {
        let total = width as u32 * height as u32;
        assert!(
            (mine_count as u32) < total,
            "mine count must leave at least one safe cell"
        );

        let mut rng = SimpleRng::new(seed);
        let mut state = Self::bare(width, height, mine_count);
        let mut placed = 0u16;
        while placed < mine_count {
            let idx = rng.next_range(total) as usize;
            if !state.cells[idx].is_mine {
                state.cells[idx].is_mine = true;
                placed += 1;
            }
        }
        state.count_neighbors();
        state
    }

    /// Exact mine layout; used by tests and puzzle setups.
    pub fn with_mines(width: u8, height: u8, mines: &[(u8, u8)]) -> Self {
        let mut state = Self::bare(width, height, mines.len() as u16);
        for &(x, y) in mines {
            let idx = state.index(x as i8, y as i8).expect("mine out of bounds");
            state.cells[idx].is_mine = true;
        }
        state.count_neighbors();
        state
    }

    fn bare(width: u8, height: u8, mine_count: u16) -> Self {
        Self {
            width,
            height,
            mine_count,
            cells: vec![MineCell::default(); width as usize * height as usize],
            cursor: (width / 2, height / 2),
            revealed: 0,
            game_over: false,
            won: false,
            events: EventBuf::new(),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        *self = Self::with_config(self.width, self.height, self.mine_count, seed);
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn mine_count(&self) -> u16 {
        self.mine_count
    }

    pub fn cursor(&self) -> (u8, u8) {
        self.cursor
    }

    pub fn cell(&self, x: i8, y: i8) -> Option<MineCell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    pub fn revealed_count(&self) -> u16 {
        self.revealed
    }

    pub fn flagged_count(&self) -> u16 {
        self.cells.iter().filter(|c| c.flagged).count() as u16
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn finished(&self) -> bool {
        self.game_over || self.won
    }

    /// Minesweeper has no time-driven rules.
    pub fn tick(&mut self, _elapsed_ms: u32) {}

    pub fn take_events(&mut self) -> EventBuf {
        std::mem::take(&mut self.events)
    }

    pub fn apply(&mut self, intent: MinesIntent) {
        if self.finished() {
            return;
        }
        match intent {
            MinesIntent::Cursor(dir) => self.move_cursor(dir),
            MinesIntent::Reveal => self.reveal(self.cursor.0 as i8, self.cursor.1 as i8),
            MinesIntent::Flag => self.toggle_flag(self.cursor.0 as i8, self.cursor.1 as i8),
        }
    }

    /// Cursor clamps at the board edge (no wraparound).
    fn move_cursor(&mut self, dir: Direction) {
        let (dx, dy) = dir.delta();
        let nx = self.cursor.0 as i16 + dx as i16;
        let ny = self.cursor.1 as i16 + dy as i16;
        if nx >= 0 && nx < self.width as i16 && ny >= 0 && ny < self.height as i16 {
            self.cursor = (nx as u8, ny as u8);
        }
    }

    /// Reveal a cell. Flagged, already-revealed, and out-of-bounds targets
    /// are silently ignored.
    pub fn reveal(&mut self, x: i8, y: i8) {
        if self.finished() {
            return;
        }
        let Some(idx) = self.index(x, y) else {
            return;
        };
        let cell = self.cells[idx];
        if cell.revealed || cell.flagged {
            return;
        }

        if cell.is_mine {
            for c in &mut self.cells {
                if c.is_mine {
                    c.revealed = true;
                }
            }
            self.game_over = true;
            let _ = self.events.try_push(GameEvent::GameOver);
            return;
        }

        // Iterative flood fill: cells are marked revealed as they are pushed
        // so no coordinate enters the stack twice.
        let mut stack = vec![idx];
        self.cells[idx].revealed = true;
        while let Some(at) = stack.pop() {
            self.revealed += 1;
            if self.cells[at].neighbors != 0 {
                continue;
            }
            let cx = (at % self.width as usize) as i8;
            let cy = (at / self.width as usize) as i8;
            for (nx, ny) in neighbors8(cx, cy) {
                let Some(ni) = self.index(nx, ny) else {
                    continue;
                };
                let n = self.cells[ni];
                if n.revealed || n.flagged || n.is_mine {
                    continue;
                }
                self.cells[ni].revealed = true;
                stack.push(ni);
            }
        }

        let safe = self.cells.len() as u16 - self.mine_count;
        if self.revealed == safe {
            self.won = true;
            let _ = self.events.try_push(GameEvent::Win);
        }
    }

    /// Toggle a flag on an unrevealed cell; revealed cells cannot be flagged.
    pub fn toggle_flag(&mut self, x: i8, y: i8) {
        if self.finished() {
            return;
        }
        let Some(idx) = self.index(x, y) else {
            return;
        };
        if self.cells[idx].revealed {
            return;
        }
        self.cells[idx].flagged = !self.cells[idx].flagged;
    }

    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i8 || y >= self.height as i8 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// One-time neighbor precomputation at board generation.
    fn count_neighbors(&mut self) {
        for y in 0..self.height as i8 {
            for x in 0..self.width as i8 {
                let idx = y as usize * self.width as usize + x as usize;
                if self.cells[idx].is_mine {
                    continue;
                }
                let count = neighbors8(x, y)
                    .into_iter()
                    .filter(|&(nx, ny)| {
                        self.index(nx, ny)
                            .map(|i| self.cells[i].is_mine)
                            .unwrap_or(false)
                    })
                    .count();
                self.cells[idx].neighbors = count as u8;
            }
        }
    }
}

/// The 8-neighborhood of a cell, bounds-unchecked.
fn neighbors8(x: i8, y: i8) -> [(i8, i8); 8] {
    [
        (x - 1, y - 1),
        (x, y - 1),
        (x + 1, y - 1),
        (x - 1, y),
        (x + 1, y),
        (x - 1, y + 1),
        (x, y + 1),
        (x + 1, y + 1),
    ]
}
