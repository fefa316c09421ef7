//! Bells projector: a vertical window that follows the actor upward.
//!
//! World rows map one-to-one onto terminal rows; the window bottom sits at
//! the state's camera height. The playfield rect is reported to the caller
//! so mouse columns can be mapped back into world coordinates.

use crate::core::BellsState;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::views::{
    centered_field, draw_border, draw_overlay_text, draw_stat, FieldRect, Viewport, BORDER,
};
use crate::types::BELLS_WIDTH;

pub struct BellsView {
    field_w: u16,
}

impl Default for BellsView {
    fn default() -> Self {
        // One terminal column per world column.
        Self {
            field_w: BELLS_WIDTH as u16,
        }
    }
}

impl BellsView {
    /// Where the playfield lands for a given viewport; used for mouse
    /// mapping without rendering a frame first.
    pub fn field_rect(&self, viewport: Viewport) -> FieldRect {
        let field_h = viewport.height.saturating_sub(2).max(8);
        centered_field(viewport, self.field_w + 2, field_h + 2)
    }

    pub fn render_into(&self, state: &BellsState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let rect = self.field_rect(viewport);
        let (ix, iy, iw, ih) = rect.interior();
        let night = CellStyle {
            fg: Rgb::new(90, 90, 140),
            bg: Rgb::new(10, 10, 30),
            bold: false,
            dim: false,
        };
        fb.fill_rect(ix, iy, iw, ih, ' ', night);
        draw_border(fb, rect, BORDER);

        let cam = state.camera_y();

        // Ground line, when low enough to be in the window.
        let ground = CellStyle {
            fg: Rgb::new(230, 230, 240),
            ..night
        };
        if let Some(gy) = self.to_row(0.0, cam, iy, ih) {
            for dx in 0..iw {
                fb.put_char(ix + dx, gy, '▀', ground);
            }
        }

        let bell_live = CellStyle {
            fg: Rgb::new(250, 210, 90),
            bold: true,
            ..night
        };
        let bell_spent = CellStyle {
            fg: Rgb::new(110, 110, 130),
            dim: true,
            ..night
        };
        for bell in state.bells() {
            if let Some(row) = self.to_row(bell.y, cam, iy, ih) {
                let col = self.to_col(bell.x, ix, iw);
                let style = if bell.hit { bell_spent } else { bell_live };
                fb.put_char(col, row, '◎', style);
            }
        }

        let actor = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bold: true,
            ..night
        };
        let (ax, ay) = state.position();
        if let Some(row) = self.to_row(ay, cam, iy, ih) {
            fb.put_char(self.to_col(ax, ix, iw), row, '◉', actor);
        }

        let hud_x = rect.x.saturating_add(rect.width).saturating_add(2);
        if hud_x + 10 < viewport.width {
            let mut y = rect.y;
            y = draw_stat(fb, hud_x, y, "SCORE", state.score());
            draw_stat(fb, hud_x, y, "HEIGHT", ay.max(0.0) as u32);
        }

        if state.game_over() {
            draw_overlay_text(fb, rect, "GAME OVER");
        }
    }

    pub fn render(&self, state: &BellsState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }

    /// World height to terminal row; rows grow down, the world grows up.
    fn to_row(&self, y: f32, cam: f32, iy: u16, ih: u16) -> Option<u16> {
        let rel = y - cam;
        if rel < 0.0 || rel >= ih as f32 {
            return None;
        }
        Some(iy + ih - 1 - rel as u16)
    }

    fn to_col(&self, x: f32, ix: u16, iw: u16) -> u16 {
        let col = (x / BELLS_WIDTH * iw as f32) as u16;
        ix + col.min(iw.saturating_sub(1))
    }
}
