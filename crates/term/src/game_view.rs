//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested. The same layout is
//! used for drawing and for [`GameView::hit_test`], so a mouse position always
//! resolves to the tile drawn under it.

use crate::animation::Animations;
use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Glyph, Rgb};
use crate::types::{ColorId, Coord, PowerUpKind, COLS, ROWS};

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);
const WHITE: Rgb = Rgb::new(255, 255, 255);
const BLACK: Rgb = Rgb::new(0, 0, 0);
const LOCK_GRAY: Rgb = Rgb::new(128, 128, 128);

/// Seconds left below which the timer is drawn in red.
const TIME_WARNING_SECS: u32 = 10;

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

/// Shell-side state drawn next to the engine snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HudView {
    pub high_score: u32,
    /// Keyboard cursor, if shown.
    pub cursor: Option<Coord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Where the board frame sits in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub start_x: u16,
    pub start_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
}

/// A lightweight terminal renderer for the Block Blast board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn layout(&self, viewport: Viewport) -> BoardLayout {
        let frame_w = (COLS as u16) * self.cell_w + 2;
        let frame_h = (ROWS as u16) * self.cell_h + 2;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        BoardLayout {
            start_x,
            start_y,
            frame_w,
            frame_h,
        }
    }

    /// Board cell under terminal position (`x`, `y`), if any.
    pub fn hit_test(&self, viewport: Viewport, x: u16, y: u16) -> Option<Coord> {
        let layout = self.layout(viewport);
        let px = x.checked_sub(layout.start_x + 1)?;
        let py = y.checked_sub(layout.start_y + 1)?;
        let col = px / self.cell_w;
        let row = py / self.cell_h;
        Coord::checked(row as i32, col as i32)
    }

    /// Render into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        hud: &HudView,
        anims: &Animations,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let layout = self.layout(viewport);
        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        fb.fill_rect(
            layout.start_x + 1,
            layout.start_y + 1,
            layout.frame_w - 2,
            layout.frame_h - 2,
            ' ',
            CellStyle::new(BOARD_BG, BOARD_BG),
        );
        draw_border(fb, &layout, border);

        for row in 0..ROWS as u8 {
            for col in 0..COLS as u8 {
                self.draw_board_cell(fb, &layout, snap, hud, Coord::new(row, col));
            }
        }

        for block in anims.falling() {
            let row = block.row.round() as u16;
            let style = CellStyle::new(BLACK, tile_rgb(block.color));
            self.fill_cell_rect(fb, &layout, row, block.col as u16, ' ', style);
        }

        for p in anims.particles() {
            self.draw_particle(fb, &layout, p.row, p.col, p.color, p.life());
        }

        self.draw_side_panel(fb, snap, hud, viewport, &layout);

        if snap.game_over {
            self.draw_overlay(fb, &layout, "GAME OVER", "press r to restart");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        hud: &HudView,
        anims: &Animations,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, anims, viewport, &mut fb);
        fb
    }

    fn draw_board_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        snap: &GameSnapshot,
        hud: &HudView,
        coord: Coord,
    ) {
        let cell = snap.board[coord.row as usize][coord.col as usize];
        let under_cursor = hud.cursor == Some(coord);
        let (row, col) = (coord.row as u16, coord.col as u16);

        let Some(color) = cell.color else {
            let style = CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim();
            if under_cursor {
                self.put_cell_chars(fb, layout, row, col, '[', ']', CellStyle::new(WHITE, BOARD_BG));
            } else {
                self.fill_cell_rect(fb, layout, row, col, '·', style);
            }
            return;
        };

        let mut bg = tile_rgb(color);
        if under_cursor {
            bg = bg.mix(WHITE, 110);
        }
        let mut style = CellStyle::new(BLACK, bg);
        let fill = if cell.locked {
            style.fg = LOCK_GRAY;
            '▒'
        } else {
            ' '
        };
        self.fill_cell_rect(fb, layout, row, col, fill, style);

        if let Some(kind) = cell.power_up {
            let letter = CellStyle::new(power_up_fg(color), bg).bold();
            self.put_cell_char(fb, layout, row, col, 0, kind.letter(), letter);
        }
        if snap.swap_first == Some(coord) {
            self.put_cell_char(fb, layout, row, col, self.cell_w - 1, '*', CellStyle::new(WHITE, bg).bold());
        }
    }

    fn draw_particle(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        row: f32,
        col: f32,
        color: ColorId,
        life: f32,
    ) {
        let (r, c) = (row.round(), col.round());
        if r < 0.0 || c < 0.0 || r >= ROWS as f32 || c >= COLS as f32 {
            return;
        }
        let x = layout.start_x + 1 + (c as u16) * self.cell_w + self.cell_w / 2;
        let y = layout.start_y + 1 + (r as u16) * self.cell_h;
        let bg = fb.get(x, y).map(|g| g.style.bg).unwrap_or(BOARD_BG);
        let fade = ((1.0 - life) * 255.0) as u8;
        let fg = tile_rgb(color).mix(bg, fade / 2);
        let ch = if life > 0.5 { '*' } else { '·' };
        fb.put_char(x, y, ch, CellStyle::new(fg, bg).bold());
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        row: u16,
        col: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = layout.start_x + 1 + col * self.cell_w;
        let py = layout.start_y + 1 + row * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    #[allow(clippy::too_many_arguments)]
    fn put_cell_char(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        row: u16,
        col: u16,
        dx: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = layout.start_x + 1 + col * self.cell_w + dx.min(self.cell_w - 1);
        let py = layout.start_y + 1 + row * self.cell_h + self.cell_h / 2;
        fb.put_char(px, py, ch, style);
    }

    #[allow(clippy::too_many_arguments)]
    fn put_cell_chars(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        row: u16,
        col: u16,
        left: char,
        right: char,
        style: CellStyle,
    ) {
        self.fill_cell_rect(fb, layout, row, col, ' ', style);
        self.put_cell_char(fb, layout, row, col, 0, left, style);
        self.put_cell_char(fb, layout, row, col, self.cell_w - 1, right, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        hud: &HudView,
        viewport: Viewport,
        layout: &BoardLayout,
    ) {
        let panel_x = layout
            .start_x
            .saturating_add(layout.frame_w)
            .saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(215, 55, 255), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let dim = value.dim();

        let mut y = layout.start_y;
        let mut field = |fb: &mut FrameBuffer, name: &str, n: u32, style: CellStyle| {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, n, style);
            y = y.saturating_add(3);
        };

        field(fb, "SCORE", snap.score, value);
        field(fb, "HIGH", hud.high_score.max(snap.score), value);
        field(fb, "LEVEL", snap.level, value);
        field(fb, "MOVES", snap.moves_left, value);

        let time_style = if snap.time_left <= TIME_WARNING_SECS {
            CellStyle::new(Rgb::new(255, 80, 80), PANEL_BG).bold()
        } else {
            CellStyle::new(Rgb::new(215, 255, 55), PANEL_BG)
        };
        field(fb, "TIME", snap.time_left, time_style);

        fb.put_str(panel_x, y, "POWER", label);
        match snap.active_power_up {
            Some(PowerUpKind::Swap) => {
                let hint = if snap.swap_first.is_some() {
                    "swap: pick 2nd"
                } else {
                    "swap: pick 1st"
                };
                fb.put_str(panel_x, y + 1, hint, value.bold());
            }
            Some(kind) => {
                fb.put_str(panel_x, y + 1, kind.as_str(), value);
            }
            None => {
                fb.put_str(panel_x, y + 1, "-", dim);
            }
        }

        let next = fb.put_str(panel_x, y + 2, "next ", dim);
        fb.put_u32(next, y + 2, snap.level_threshold, dim);
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, layout: &BoardLayout, title: &str, hint: &str) {
        let mid_y = layout.start_y.saturating_add(layout.frame_h / 2);
        let style = CellStyle::new(WHITE, BLACK).bold();
        for (dy, text) in [(0u16, title), (1, hint)] {
            let text_w = text.chars().count() as u16;
            let x = layout
                .start_x
                .saturating_add(layout.frame_w.saturating_sub(text_w) / 2);
            fb.put_str(x, mid_y.saturating_sub(1) + dy, text, style);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, layout: &BoardLayout, style: CellStyle) {
    let (x, y, w, h) = (layout.start_x, layout.start_y, layout.frame_w, layout.frame_h);
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

fn tile_rgb(color: ColorId) -> Rgb {
    color.rgb().into()
}

/// Readable letter color on a tile of `color`.
fn power_up_fg(color: ColorId) -> Rgb {
    match color {
        ColorId::Blue | ColorId::Red | ColorId::Magenta => WHITE,
        _ => BLACK,
    }
}
