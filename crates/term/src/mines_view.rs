//! Minesweeper projector: covered field, numbers, flags, and the cursor.

use crate::core::MinesState;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::views::{
    centered_field, draw_border, draw_overlay_text, draw_stat, Viewport, BORDER, FIELD_BG,
};

pub struct MinesView {
    cell_w: u16,
}

impl Default for MinesView {
    fn default() -> Self {
        Self { cell_w: 2 }
    }
}

impl MinesView {
    pub fn render_into(&self, state: &MinesState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let w = state.width() as u16;
        let h = state.height() as u16;
        let rect = centered_field(viewport, w * self.cell_w + 2, h + 2);
        draw_border(fb, rect, BORDER);

        let covered = CellStyle {
            fg: Rgb::new(120, 120, 130),
            ..FIELD_BG
        };
        let flag = CellStyle {
            fg: Rgb::new(230, 180, 80),
            bold: true,
            ..FIELD_BG
        };
        let mine = CellStyle {
            fg: Rgb::new(240, 80, 80),
            bold: true,
            ..FIELD_BG
        };
        let blank = CellStyle {
            fg: Rgb::new(60, 60, 70),
            ..FIELD_BG
        };

        for y in 0..h {
            for x in 0..w {
                let Some(cell) = state.cell(x as i8, y as i8) else {
                    continue;
                };
                let (ch, style) = if cell.revealed {
                    if cell.is_mine {
                        ('✱', mine)
                    } else if cell.neighbors > 0 {
                        (
                            char::from(b'0' + cell.neighbors),
                            number_style(cell.neighbors),
                        )
                    } else {
                        (' ', blank)
                    }
                } else if cell.flagged {
                    ('⚑', flag)
                } else {
                    ('▒', covered)
                };

                let mut style = style;
                if (x as u8, y as u8) == state.cursor() && !state.finished() {
                    // Inverse video for the cursor cell.
                    std::mem::swap(&mut style.fg, &mut style.bg);
                }
                let px = rect.x + 1 + x * self.cell_w;
                fb.fill_rect(px, rect.y + 1 + y, self.cell_w, 1, ch, style);
            }
        }

        let hud_x = rect.x.saturating_add(rect.width).saturating_add(2);
        if hud_x + 10 < viewport.width {
            let mut y = rect.y;
            let left = u32::from(state.mine_count()).saturating_sub(state.flagged_count().into());
            y = draw_stat(fb, hud_x, y, "MINES", left);
            draw_stat(fb, hud_x, y, "CLEAR", state.revealed_count().into());
        }

        if state.won() {
            draw_overlay_text(fb, rect, "CLEARED!");
        } else if state.game_over() {
            draw_overlay_text(fb, rect, "BOOM");
        }
    }

    pub fn render(&self, state: &MinesState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }
}

fn number_style(n: u8) -> CellStyle {
    let fg = match n {
        1 => Rgb::new(100, 160, 240),
        2 => Rgb::new(100, 210, 120),
        3 => Rgb::new(240, 110, 110),
        4 => Rgb::new(170, 120, 230),
        _ => Rgb::new(230, 170, 90),
    };
    CellStyle {
        fg,
        bg: Rgb::new(30, 30, 40),
        bold: true,
        dim: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MINES_COUNT, MINES_HEIGHT, MINES_WIDTH};

    #[test]
    fn fresh_board_is_fully_covered() {
        let state = MinesState::with_config(MINES_WIDTH, MINES_HEIGHT, MINES_COUNT, 4);
        let fb = MinesView::default().render(&state, Viewport::new(80, 24));
        let covered = fb.cells().iter().filter(|c| c.ch == '▒').count();
        // Every cell except the cursor spans cell_w columns.
        assert!(covered >= (MINES_WIDTH as usize * MINES_HEIGHT as usize - 1) * 2);
    }

    #[test]
    fn revealed_numbers_show_up() {
        let mut state = MinesState::with_mines(4, 4, &[(0, 0)]);
        state.reveal(1, 1);
        let fb = MinesView::default().render(&state, Viewport::new(80, 24));
        assert!(fb.cells().iter().any(|c| c.ch == '1'));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let state = MinesState::with_mines(4, 4, &[(0, 0)]);
        let _ = MinesView::default().render(&state, Viewport::new(4, 2));
    }
}
