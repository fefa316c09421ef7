//! 2048 projector: a 4x4 grid of value tiles colored by rank.

use crate::core::SlideState;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::views::{
    centered_field, draw_border, draw_overlay_text, draw_stat, Viewport, BORDER, FIELD_BG,
};
use crate::types::SLIDE_SIZE;

const TILE_W: u16 = 7;
const TILE_H: u16 = 3;

#[derive(Default)]
pub struct SlideView;

impl SlideView {
    pub fn render_into(&self, state: &SlideState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let n = SLIDE_SIZE as u16;
        let rect = centered_field(viewport, n * TILE_W + 2, n * TILE_H + 2);
        let (ix, iy, iw, ih) = rect.interior();
        fb.fill_rect(ix, iy, iw, ih, ' ', FIELD_BG);
        draw_border(fb, rect, BORDER);

        for gy in 0..SLIDE_SIZE {
            for gx in 0..SLIDE_SIZE {
                let v = state.grid()[gy][gx];
                let tx = rect.x + 1 + gx as u16 * TILE_W;
                let ty = rect.y + 1 + gy as u16 * TILE_H;
                if v == 0 {
                    fb.put_char(tx + TILE_W / 2, ty + TILE_H / 2, '·', FIELD_BG);
                    continue;
                }
                let style = tile_style(v);
                fb.fill_rect(tx, ty, TILE_W, TILE_H, ' ', style);
                put_value_centered(fb, tx, ty + TILE_H / 2, v, style);
            }
        }

        let hud_x = rect.x.saturating_add(rect.width).saturating_add(2);
        if hud_x + 10 < viewport.width {
            draw_stat(fb, hud_x, rect.y, "SCORE", state.score());
        }

        if state.game_over() {
            draw_overlay_text(fb, rect, "GAME OVER");
        } else if state.won() {
            draw_overlay_text(fb, rect, "2048!");
        }
    }

    pub fn render(&self, state: &SlideState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }
}

fn put_value_centered(fb: &mut FrameBuffer, tx: u16, ty: u16, v: u16, style: CellStyle) {
    let digits = {
        let mut d = 1u16;
        let mut n = v;
        while n >= 10 {
            n /= 10;
            d += 1;
        }
        d
    };
    let x = tx + TILE_W.saturating_sub(digits) / 2;
    fb.put_u32(x, ty, v as u32, style);
}

/// Warmer foreground as the rank climbs.
fn tile_style(v: u16) -> CellStyle {
    let rank = v.trailing_zeros().min(11) as u8;
    let fg = match rank {
        1 | 2 => Rgb::new(220, 220, 210),
        3 | 4 => Rgb::new(240, 200, 120),
        5 | 6 => Rgb::new(245, 150, 90),
        7 | 8 => Rgb::new(245, 100, 80),
        _ => Rgb::new(250, 210, 60),
    };
    CellStyle {
        fg,
        bg: Rgb::new(50, 45, 40),
        bold: rank >= 7,
        dim: false,
    }
}
