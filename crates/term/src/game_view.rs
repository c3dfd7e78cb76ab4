//! GameView: maps a `SessionSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::SessionSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GRID_COLS, GRID_ROWS};

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

/// Interior of the well, behind both locked and falling cells.
const WELL_BG: Rgb = Rgb::new(30, 30, 40);

/// A lightweight terminal view of the playfield.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &SessionSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.wipe(CellStyle::default());

        let board_px_w = (GRID_COLS as u16) * self.cell_w;
        let board_px_h = (GRID_ROWS as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        // Background for play area.
        let well = CellStyle::on(Rgb::new(80, 80, 90), WELL_BG);
        fb.fill(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', well);

        // Border.
        let border = CellStyle::on(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Locked cells.
        for y in 0..GRID_ROWS as u16 {
            for x in 0..GRID_COLS as u16 {
                let tag = snap.board[y as usize][x as usize];
                if tag != 0 {
                    self.draw_board_cell(fb, start_x, start_y, x, y, tag);
                } else {
                    self.draw_empty_cell(fb, start_x, start_y, x, y);
                }
            }
        }

        // Active piece.
        if let Some(active) = &snap.active {
            let n = active.matrix.size();
            for row in 0..n {
                for col in 0..n {
                    let tag = active.matrix.tag_at(row, col);
                    if tag == 0 {
                        continue;
                    }
                    let x = active.x + col as i8;
                    let y = active.y + row as i8;
                    if x >= 0 && x < GRID_COLS as i8 && y >= 0 && y < GRID_ROWS as i8 {
                        self.draw_board_cell(fb, start_x, start_y, x as u16, y as u16, tag);
                    }
                }
            }
        }

        // Side panel (score/level/time).
        self.draw_side_panel(fb, snap, viewport, start_x, frame_w, start_y);

        // Overlay.
        if snap.game_over {
            self.draw_game_over(fb, snap, start_x, start_y, frame_w, frame_h);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &SessionSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put(x, y, '┌', style);
        fb.put(x + w - 1, y, '┐', style);
        fb.put(x, y + h - 1, '└', style);
        fb.put(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put(x + dx, y, '─', style);
            fb.put(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put(x, y + dy, '│', style);
            fb.put(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = CellStyle::on(Rgb::new(90, 90, 100), WELL_BG).dim();
        self.fill_cell_rect(fb, start_x, start_y, x, y, '·', style);
    }

    fn draw_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        tag: u8,
    ) {
        let style = CellStyle::on(tag_color(tag), WELL_BG).bold();
        self.fill_cell_rect(fb, start_x, start_y, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &SessionSnapshot,
        viewport: Viewport,
        start_x: u16,
        frame_w: u16,
        start_y: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 8 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::on(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = start_y;
        fb.text(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.number(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.text(panel_x, y, "LEVEL", label);
        y = y.saturating_add(1);
        fb.number(panel_x, y, snap.level, value);
        y = y.saturating_add(2);

        fb.text(panel_x, y, "TIME", label);
        y = y.saturating_add(1);
        let digits = fb.number(panel_x, y, snap.elapsed_secs as u32, value);
        fb.put(panel_x + digits, y, 's', value);
    }

    fn draw_game_over(
        &self,
        fb: &mut FrameBuffer,
        snap: &SessionSnapshot,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let style = CellStyle::on(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();

        let mid_y = start_y.saturating_add(frame_h / 2).saturating_sub(1);
        self.centered_text(fb, start_x, frame_w, mid_y, "GAME OVER", style);
        self.centered_text(
            fb,
            start_x,
            frame_w,
            mid_y + 1,
            "PRESS R TO PLAY AGAIN",
            style,
        );

        // "SCORE <n>" centered below the prompt.
        let text_w = 6 + count_digits(snap.score);
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let written = fb.text(x, mid_y + 2, "SCORE ", style);
        fb.number(x + written, mid_y + 2, snap.score, style);
    }

    fn centered_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        frame_w: u16,
        y: u16,
        text: &str,
        style: CellStyle,
    ) {
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        fb.text(x, y, text, style);
    }
}

/// Cell colors by grid tag (reggae palette).
fn tag_color(tag: u8) -> Rgb {
    match tag {
        1 => Rgb::new(0, 160, 60),    // green (I)
        2 => Rgb::new(255, 215, 0),   // gold (J)
        3 => Rgb::new(220, 40, 40),   // red (L)
        4 => Rgb::new(0, 100, 0),     // dark green (O)
        5 => Rgb::new(218, 165, 32),  // goldenrod (S)
        6 => Rgb::new(139, 0, 0),     // dark red (T)
        7 => Rgb::new(128, 0, 0),     // maroon (Z)
        _ => Rgb::new(90, 90, 100),
    }
}

fn count_digits(mut value: u32) -> u16 {
    let mut digits = 1;
    while value >= 10 {
        value /= 10;
        digits += 1;
    }
    digits
}
