//! GameView: maps a core `RenderState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::RenderState;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::RunState;

const WELL_BG: Rgb = Rgb::new(29, 30, 33);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

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

/// Lays out the well, the side panel, and overlays.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

/// Top-left corner of the bordered well in framebuffer coordinates.
#[derive(Debug, Clone, Copy)]
struct Origin {
    x: u16,
    y: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Size of the bordered well for a board of `rows x cols`.
    pub fn frame_size(&self, rows: u8, cols: u8) -> (u16, u16) {
        (
            cols as u16 * self.cell_w + 2,
            rows as u16 * self.cell_h + 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, state: &RenderState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size(state.rows, state.cols);
        let origin = Origin {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: viewport.height.saturating_sub(frame_h) / 2,
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        draw_border(fb, origin, frame_w, frame_h, border);

        for y in 0..state.rows as usize {
            for x in 0..state.cols as usize {
                match state.cell(x, y) {
                    Some(color) => self.draw_block(fb, origin, x as u16, y as u16, color),
                    None => self.draw_empty(fb, origin, x as u16, y as u16),
                }
            }
        }

        if let Some(active) = &state.active {
            for &(x, y) in &active.cells {
                // Rows above the top edge are not drawn.
                if x >= 0 && y >= 0 && x < state.cols as i16 && y < state.rows as i16 {
                    self.draw_block(fb, origin, x as u16, y as u16, active.color);
                }
            }
        }

        draw_side_panel(fb, state, viewport, origin, frame_w);

        match state.state {
            RunState::Paused => draw_overlay_text(fb, origin, frame_w, frame_h, "PAUSED"),
            RunState::GameOver => draw_overlay_text(fb, origin, frame_w, frame_h, "GAME OVER"),
            RunState::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &RenderState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }

    fn draw_block(&self, fb: &mut FrameBuffer, origin: Origin, x: u16, y: u16, color: Rgb) {
        let style = CellStyle::new(color, WELL_BG).bold();
        self.fill_cell(fb, origin, x, y, '█', style);
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, origin: Origin, x: u16, y: u16) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), WELL_BG).dim();
        self.fill_cell(fb, origin, x, y, '·', style);
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        origin: Origin,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = origin.x + 1 + cell_x * self.cell_w;
        let py = origin.y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }
}

fn draw_border(fb: &mut FrameBuffer, o: Origin, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(o.x, o.y, '┌', style);
    fb.put_char(o.x + w - 1, o.y, '┐', style);
    fb.put_char(o.x, o.y + h - 1, '└', style);
    fb.put_char(o.x + w - 1, o.y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(o.x + dx, o.y, '─', style);
        fb.put_char(o.x + dx, o.y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(o.x, o.y + dy, '│', style);
        fb.put_char(o.x + w - 1, o.y + dy, '│', style);
    }
}

fn draw_side_panel(
    fb: &mut FrameBuffer,
    state: &RenderState,
    viewport: Viewport,
    origin: Origin,
    frame_w: u16,
) {
    let panel_x = origin.x.saturating_add(frame_w).saturating_add(2);
    if panel_x >= viewport.width || viewport.width - panel_x < 10 {
        return;
    }

    let label = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
    let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

    let mut y = origin.y;
    for (name, n) in [
        ("SCORE", state.score),
        ("LEVEL", state.level),
        ("LINES", state.lines),
        ("PIECES", state.pieces),
    ] {
        fb.put_str(panel_x, y, name, label);
        fb.put_u32(panel_x, y.saturating_add(1), n, value);
        y = y.saturating_add(3);
    }

    if let Some(active) = &state.active {
        fb.put_str(panel_x, y, "PIECE", label);
        let piece = CellStyle::new(active.color, PANEL_BG).bold();
        fb.put_str(panel_x, y.saturating_add(1), active.kind.letter(), piece);
        y = y.saturating_add(3);
    }

    let hint = value.dim();
    for line in ["←→ move", "↑ rotate", "↓ drop", "p pause", "q quit"] {
        if y >= viewport.height {
            break;
        }
        fb.put_str(panel_x, y, line, hint);
        y = y.saturating_add(1);
    }
}

fn draw_overlay_text(fb: &mut FrameBuffer, o: Origin, frame_w: u16, frame_h: u16, text: &str) {
    let mid_y = o.y.saturating_add(frame_h / 2);
    let text_w = text.chars().count() as u16;
    let x = o.x.saturating_add(frame_w.saturating_sub(text_w) / 2);
    let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
    fb.put_str(x, mid_y, text, style);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_state(rows: u8, cols: u8) -> RenderState {
        RenderState {
            rows,
            cols,
            grid: vec![None; rows as usize * cols as usize],
            ..RenderState::default()
        }
    }

    #[test]
    fn test_frame_size_includes_border() {
        let view = GameView::default();
        assert_eq!(view.frame_size(20, 13), (28, 22));
    }

    #[test]
    fn test_render_corners_in_exact_viewport() {
        let view = GameView::default();
        let fb = view.render(&empty_state(20, 10), Viewport::new(22, 22));
        assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
        assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
        assert_eq!(fb.get(1, 1).unwrap().ch, '·');
    }

    #[test]
    fn test_tiny_viewport_does_not_panic() {
        let view = GameView::default();
        let fb = view.render(&empty_state(20, 13), Viewport::new(3, 2));
        assert_eq!(fb.width(), 3);
    }
}
