//! Shared view plumbing: viewport, palette, border and HUD helpers.
//!
//! Everything here is pure (no I/O) so the per-game views stay unit-testable.

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Screen rectangle of a game's playfield, border included. Reported back to
/// the caller so mouse events can be mapped into world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl FieldRect {
    /// Interior origin and size (inside the border).
    pub fn interior(&self) -> (u16, u16, u16, u16) {
        (
            self.x + 1,
            self.y + 1,
            self.width.saturating_sub(2),
            self.height.saturating_sub(2),
        )
    }
}

pub const LABEL: CellStyle = CellStyle {
    fg: Rgb::new(220, 220, 220),
    bg: Rgb::new(0, 0, 0),
    bold: true,
    dim: false,
};

pub const VALUE: CellStyle = CellStyle {
    fg: Rgb::new(200, 200, 200),
    bg: Rgb::new(0, 0, 0),
    bold: false,
    dim: false,
};

pub const BORDER: CellStyle = CellStyle {
    fg: Rgb::new(200, 200, 200),
    bg: Rgb::new(0, 0, 0),
    bold: false,
    dim: false,
};

pub const FIELD_BG: CellStyle = CellStyle {
    fg: Rgb::new(80, 80, 90),
    bg: Rgb::new(30, 30, 40),
    bold: false,
    dim: false,
};

pub const OVERLAY: CellStyle = CellStyle {
    fg: Rgb::new(255, 255, 255),
    bg: Rgb::new(0, 0, 0),
    bold: true,
    dim: false,
};

/// Center a frame of `w` x `h` in the viewport, returning its rect.
pub fn centered_field(viewport: Viewport, w: u16, h: u16) -> FieldRect {
    FieldRect {
        x: viewport.width.saturating_sub(w) / 2,
        y: viewport.height.saturating_sub(h) / 2,
        width: w,
        height: h,
    }
}

pub fn draw_border(fb: &mut FrameBuffer, rect: FieldRect, style: CellStyle) {
    let (x, y, w, h) = (rect.x, rect.y, rect.width, rect.height);
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

/// One HUD `LABEL value` pair; returns the y below it.
pub fn draw_stat(fb: &mut FrameBuffer, x: u16, y: u16, label: &str, value: u32) -> u16 {
    fb.put_str(x, y, label, LABEL);
    fb.put_u32(x, y.saturating_add(1), value, VALUE);
    y.saturating_add(3)
}

/// Centered text over the field, for terminal-state banners.
pub fn draw_overlay_text(fb: &mut FrameBuffer, rect: FieldRect, text: &str) {
    let mid_y = rect.y.saturating_add(rect.height / 2);
    let text_w = text.chars().count() as u16;
    let x = rect.x.saturating_add(rect.width.saturating_sub(text_w) / 2);
    fb.put_str(x, mid_y, text, OVERLAY);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_field_is_centered() {
        let rect = centered_field(Viewport::new(80, 24), 20, 10);
        assert_eq!(rect.x, 30);
        assert_eq!(rect.y, 7);
    }

    #[test]
    fn centered_field_clamps_when_viewport_is_small() {
        let rect = centered_field(Viewport::new(10, 5), 20, 10);
        assert_eq!((rect.x, rect.y), (0, 0));
    }

    #[test]
    fn border_draws_corners() {
        let mut fb = FrameBuffer::new(10, 5);
        let rect = FieldRect { x: 1, y: 1, width: 6, height: 3 };
        draw_border(&mut fb, rect, BORDER);
        assert_eq!(fb.get(1, 1).map(|c| c.ch), Some('┌'));
        assert_eq!(fb.get(6, 3).map(|c| c.ch), Some('┘'));
    }

    #[test]
    fn overlay_text_lands_inside_the_rect() {
        let mut fb = FrameBuffer::new(20, 10);
        let rect = FieldRect { x: 2, y: 2, width: 12, height: 6 };
        draw_overlay_text(&mut fb, rect, "OVER");
        assert_eq!(fb.get(6, 5).map(|c| c.ch), Some('O'));
    }
}
