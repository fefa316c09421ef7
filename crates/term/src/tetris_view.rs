//! Tetris projector: board, ghost, active piece, and the score panel.

use crate::core::TetrisState;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::views::{
    centered_field, draw_border, draw_overlay_text, draw_stat, FieldRect, Viewport, BORDER,
    FIELD_BG, LABEL, VALUE,
};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

pub struct TetrisView {
    cell_w: u16,
}

impl Default for TetrisView {
    fn default() -> Self {
        Self { cell_w: 2 }
    }
}

impl TetrisView {
    pub fn render_into(&self, state: &TetrisState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let field_w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let field_h = BOARD_HEIGHT as u16 + 2;
        let rect = centered_field(viewport, field_w, field_h);
        let (ix, iy, iw, ih) = rect.interior();
        fb.fill_rect(ix, iy, iw, ih, ' ', FIELD_BG);
        draw_border(fb, rect, BORDER);

        // Locked cells, with a faint grid dot on empties.
        let dot = CellStyle {
            fg: Rgb::new(90, 90, 100),
            dim: true,
            ..FIELD_BG
        };
        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                match state.board().get(x, y).flatten() {
                    Some(kind) => self.put_cell(fb, rect, x, y, '█', piece_style(kind)),
                    None => self.put_cell(fb, rect, x, y, '·', dot),
                }
            }
        }

        // Ghost under the active piece.
        if let (Some(piece), Some(ghost_y)) = (state.active(), state.ghost_y()) {
            let ghost = CellStyle {
                fg: Rgb::new(140, 140, 140),
                dim: true,
                ..FIELD_BG
            };
            for (dx, dy) in piece.shape() {
                self.put_board_cell(fb, rect, piece.x + dx, ghost_y + dy, '░', ghost);
            }
            for (dx, dy) in piece.shape() {
                self.put_board_cell(
                    fb,
                    rect,
                    piece.x + dx,
                    piece.y + dy,
                    '█',
                    piece_style(piece.kind),
                );
            }
        }

        self.draw_panel(state, viewport, rect, fb);

        if state.game_over() {
            draw_overlay_text(fb, rect, "GAME OVER");
        }
    }

    pub fn render(&self, state: &TetrisState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }

    fn put_board_cell(
        &self,
        fb: &mut FrameBuffer,
        rect: FieldRect,
        x: i8,
        y: i8,
        ch: char,
        style: CellStyle,
    ) {
        if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
            self.put_cell(fb, rect, x, y, ch, style);
        }
    }

    fn put_cell(
        &self,
        fb: &mut FrameBuffer,
        rect: FieldRect,
        x: i8,
        y: i8,
        ch: char,
        style: CellStyle,
    ) {
        let px = rect.x + 1 + (x as u16) * self.cell_w;
        let py = rect.y + 1 + y as u16;
        fb.fill_rect(px, py, self.cell_w, 1, ch, style);
    }

    fn draw_panel(
        &self,
        state: &TetrisState,
        viewport: Viewport,
        rect: FieldRect,
        fb: &mut FrameBuffer,
    ) {
        let x = rect.x.saturating_add(rect.width).saturating_add(2);
        if x + 10 >= viewport.width {
            return;
        }
        let mut y = rect.y;
        y = draw_stat(fb, x, y, "SCORE", state.score());
        y = draw_stat(fb, x, y, "LEVEL", state.level());
        y = draw_stat(fb, x, y, "LINES", state.lines());

        fb.put_str(x, y, "NEXT", LABEL);
        fb.put_str(x, y + 1, piece_letter(state.next_kind()), VALUE);
    }
}

fn piece_style(kind: PieceKind) -> CellStyle {
    let fg = match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    };
    CellStyle {
        fg,
        bg: Rgb::new(30, 30, 40),
        bold: true,
        dim: false,
    }
}

fn piece_letter(kind: PieceKind) -> &'static str {
    match kind {
        PieceKind::I => "I",
        PieceKind::O => "O",
        PieceKind::T => "T",
        PieceKind::S => "S",
        PieceKind::Z => "Z",
        PieceKind::J => "J",
        PieceKind::L => "L",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_piece_is_drawn() {
        let state = TetrisState::new(1);
        let fb = TetrisView::default().render(&state, Viewport::new(80, 24));
        let blocks = fb.cells().iter().filter(|c| c.ch == '█').count();
        // Four minos, two columns each.
        assert!(blocks >= 8);
    }

    #[test]
    fn panel_shows_the_next_piece_letter() {
        let state = TetrisState::new(1);
        let fb = TetrisView::default().render(&state, Viewport::new(80, 24));
        let expected = piece_letter(state.next_kind()).chars().next();
        assert!(fb.cells().iter().any(|c| Some(c.ch) == expected));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let state = TetrisState::new(1);
        let _ = TetrisView::default().render(&state, Viewport::new(3, 3));
    }
}
