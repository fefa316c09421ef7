//! Snake projector: wrapped grid, body, food, and a speed HUD.

use crate::core::SnakeState;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::views::{
    centered_field, draw_border, draw_overlay_text, draw_stat, FieldRect, Viewport, BORDER,
    FIELD_BG,
};
use crate::types::SNAKE_GRID;

pub struct SnakeView {
    cell_w: u16,
}

impl Default for SnakeView {
    fn default() -> Self {
        // 2 columns per cell squares up the typical glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl SnakeView {
    pub fn render_into(&self, state: &SnakeState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let grid = SNAKE_GRID as u16;
        let rect = centered_field(viewport, grid * self.cell_w + 2, grid + 2);
        let (ix, iy, iw, ih) = rect.interior();
        fb.fill_rect(ix, iy, iw, ih, ' ', FIELD_BG);
        draw_border(fb, rect, BORDER);

        let food_style = CellStyle {
            fg: Rgb::new(230, 90, 90),
            ..FIELD_BG
        };
        let body_style = CellStyle {
            fg: Rgb::new(110, 200, 110),
            ..FIELD_BG
        };
        let head_style = CellStyle {
            fg: Rgb::new(170, 255, 170),
            bold: true,
            ..FIELD_BG
        };

        let (fx, fy) = state.food();
        self.put_cell(fb, rect, fx, fy, '●', food_style);
        for (i, (x, y)) in state.body().enumerate() {
            let style = if i == 0 { head_style } else { body_style };
            self.put_cell(fb, rect, x, y, '█', style);
        }

        self.draw_hud(state, viewport, rect, fb);

        if state.game_over() {
            draw_overlay_text(fb, rect, "GAME OVER");
        }
    }

    pub fn render(&self, state: &SnakeState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
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

    fn draw_hud(
        &self,
        state: &SnakeState,
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
        y = draw_stat(fb, x, y, "LENGTH", state.len() as u32);
        draw_stat(fb, x, y, "MS/STEP", state.step_interval_ms());
    }
}
