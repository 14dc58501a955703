//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::palette::TilePalette;
use crate::types::{Direction, Tile, EMPTY};

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

/// Extra lines shown in the side panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusView<'a> {
    pub save_enabled: bool,
    pub message: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const BOARD_BG: Rgb = Rgb::new(0xbb, 0xad, 0xa0);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

const KEY_HINTS: [&str; 5] = [
    "arrows/wasd move",
    "r  restart",
    "+/- grid size",
    "x  clear save",
    "q  quit",
];

/// A terminal renderer for a 2048 grid of any size.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
    /// Space between tiles, in both directions.
    gap: u16,
    anchor_y: AnchorY,
    palette: TilePalette,
}

impl Default for GameView {
    fn default() -> Self {
        // 6x3 leaves room for five digits and keeps tiles roughly square.
        Self::new(6, 3)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            gap: 1,
            anchor_y: AnchorY::Center,
            palette: TilePalette::default(),
        }
    }

    /// One-row tiles without gaps, for small terminals.
    pub fn compact() -> Self {
        Self::new(5, 1).with_gap(0)
    }

    pub fn with_gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn with_palette(mut self, palette: TilePalette) -> Self {
        self.palette = palette;
        self
    }

    /// Outer size of the bordered board for a `rows x cols` grid.
    pub fn frame_size(&self, rows: usize, cols: usize) -> (u16, u16) {
        let span = |n: usize, cell: u16| -> u16 {
            let n = u16::try_from(n).unwrap_or(u16::MAX);
            n.saturating_mul(cell.saturating_add(self.gap))
                .saturating_add(self.gap)
                .saturating_add(2)
        };
        (span(cols, self.cell_w), span(rows, self.cell_h))
    }

    /// Whether the board fits inside `viewport`.
    pub fn fits(&self, rows: usize, cols: usize, viewport: Viewport) -> bool {
        let (w, h) = self.frame_size(rows, cols);
        w <= viewport.width && h <= viewport.height
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when
    /// the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_status(snap, None, viewport, fb);
    }

    pub fn render_into_with_status(
        &self,
        snap: &GameSnapshot,
        status: Option<&StatusView<'_>>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let (frame_w, frame_h) = self.frame_size(snap.grid.rows(), snap.grid.cols());
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let board = CellStyle::plain(BOARD_BG, BOARD_BG);
        let border = CellStyle::plain(Rgb::new(200, 200, 200), SCREEN_BG);

        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            frame_w.saturating_sub(2),
            frame_h.saturating_sub(2),
            ' ',
            board,
        );
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for (r, row) in snap.grid.iter_rows().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                self.draw_tile(fb, start_x, start_y, r as u16, c as u16, value);
            }
        }

        self.draw_side_panel(fb, snap, status, viewport, start_x, start_y, frame_w);

        if snap.game_over {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
            self.draw_overlay_text(fb, start_x, start_y + 1, frame_w, frame_h, "r to restart");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    pub fn render_with_status(
        &self,
        snap: &GameSnapshot,
        status: Option<&StatusView<'_>>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into_with_status(snap, status, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

    fn draw_tile(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, row: u16, col: u16, value: Tile) {
        let px = start_x + 1 + self.gap + col * (self.cell_w + self.gap);
        let py = start_y + 1 + self.gap + row * (self.cell_h + self.gap);
        let style = self.palette.style(value);

        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        if value == EMPTY {
            return;
        }
        let label = tile_label(value, self.cell_w);
        fb.put_str_centered(px, py + self.cell_h / 2, self.cell_w, &label, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        status: Option<&StatusView<'_>>,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::plain(Rgb::new(220, 220, 220), SCREEN_BG)
        };
        let value = CellStyle::plain(Rgb::new(200, 200, 200), SCREEN_BG);
        let dim = CellStyle { dim: true, ..value };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SIZE", label);
        y = y.saturating_add(1);
        let size = format!("{}x{}", snap.grid.rows(), snap.grid.cols());
        fb.put_str(panel_x, y, &size, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.moves, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BEST", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.best_tile, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "CAN MOVE", label);
        y = y.saturating_add(1);
        if snap.available.is_empty() {
            fb.put_str(panel_x, y, "-", value);
        } else {
            let mut x = panel_x;
            for d in &snap.available {
                fb.put_char(x, y, direction_glyph(*d), value);
                x = x.saturating_add(2);
            }
        }
        y = y.saturating_add(2);

        if let Some(st) = status {
            fb.put_str(panel_x, y, "SAVE", label);
            y = y.saturating_add(1);
            fb.put_str(panel_x, y, if st.save_enabled { "ON" } else { "OFF" }, value);
            y = y.saturating_add(1);
            if let Some(msg) = st.message {
                fb.put_str(panel_x, y, msg, dim);
                y = y.saturating_add(1);
            }
            y = y.saturating_add(1);
        }

        if panel_w >= 18 {
            for hint in KEY_HINTS {
                if y >= viewport.height {
                    break;
                }
                fb.put_str(panel_x, y, hint, dim);
                y = y.saturating_add(1);
            }
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            bold: true,
            ..CellStyle::plain(Rgb::new(255, 255, 255), SCREEN_BG)
        };
        fb.put_str(x, mid_y, text, style);
    }
}

/// `value` as text no wider than `width`, stepping through `k`/`m`/`g`
/// (powers of 1024) when the plain digits do not fit.
pub fn tile_label(value: Tile, width: u16) -> String {
    let width = usize::from(width);
    let mut label = value.to_string();
    let mut scaled = value;
    for suffix in ['k', 'm', 'g'] {
        if label.len() <= width {
            break;
        }
        scaled /= 1024;
        label = format!("{scaled}{suffix}");
    }
    label
}

fn direction_glyph(direction: Direction) -> char {
    match direction {
        Direction::Up => '↑',
        Direction::Down => '↓',
        Direction::Left => '←',
        Direction::Right => '→',
    }
}
