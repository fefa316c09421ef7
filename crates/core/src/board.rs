//! Tetris board - flat-array grid with row compaction
//!
//! 10x20 cells stored row-major in a fixed array, so board operations never
//! allocate. Coordinates are (x, y) with x in 0..10 left-to-right and y in
//! 0..20 top-to-bottom.

use arrayvec::ArrayVec;

use tui_arcade_types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const W: usize = BOARD_WIDTH as usize;
const H: usize = BOARD_HEIGHT as usize;

/// The tetris playfield.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    cells: [Cell; W * H],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [None; W * H],
        }
    }

    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= W || y as usize >= H {
            return None;
        }
        Some(y as usize * W + x as usize)
    }

    /// Cell contents; `None` when out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: i8, y: i8, cell: Cell) {
        if let Some(i) = Self::index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// In bounds and empty: the only position a mino may occupy.
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Every offset of `shape` anchored at `(x, y)` lands on a free cell.
    pub fn fits(&self, shape: &[(i8, i8)], x: i8, y: i8) -> bool {
        shape.iter().all(|&(dx, dy)| self.is_free(x + dx, y + dy))
    }

    /// Write a shape into the grid. Caller checks `fits` first; cells that
    /// fall out of bounds are ignored rather than wrapped.
    pub fn fill(&mut self, shape: &[(i8, i8)], x: i8, y: i8, kind: PieceKind) {
        for &(dx, dy) in shape {
            self.set(x + dx, y + dy, Some(kind));
        }
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= H {
            return false;
        }
        self.cells[y * W..(y + 1) * W].iter().all(|c| c.is_some())
    }

    /// Remove every full row, compacting the remainder downward.
    ///
    /// Two-pointer sweep from the bottom: surviving rows shift straight to
    /// their final position, then the vacated top rows are cleared. Returns
    /// how many rows were removed (at most 4, one piece's worth).
    pub fn clear_full_rows(&mut self) -> u32 {
        let mut cleared: ArrayVec<usize, 4> = ArrayVec::new();
        let mut write = H;

        for read in (0..H).rev() {
            if self.is_row_full(read) {
                // Full rows are capped at 4 by geometry; ignore overflow.
                let _ = cleared.try_push(read);
            } else {
                write -= 1;
                if write != read {
                    self.cells.copy_within(read * W..(read + 1) * W, write * W);
                }
            }
        }

        for cell in &mut self.cells[..write * W] {
            *cell = None;
        }

        cleared.len() as u32
    }

    /// Count of filled cells (used by tests and the HUD).
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}
