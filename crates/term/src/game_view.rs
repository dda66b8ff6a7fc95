//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The same [`BoardGeometry`] drives drawing and mouse hit-testing, so a
//! click always lands on the cell drawn under the pointer.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{BoardGeometry, GameStatus, Player, BOARD_SIZE, GAME_OVER_MESSAGE, TITLE};

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Rows above the board: title and a blank line.
const HEADER_ROWS: u16 = 2;
/// Rows below the board: blank, status, game-over message.
const FOOTER_ROWS: u16 = 3;
/// Smallest cell height the layout shrinks to.
const MIN_CELL_H: u16 = 2;
/// Largest preferred cell side; keeps layout arithmetic within `u16`.
const MAX_CELL_SIDE: u16 = 1024;

const BACKGROUND: Rgb = Rgb::new(0, 0, 0);
const GRID: Rgb = Rgb::new(240, 240, 240);
const X_COLOR: Rgb = Rgb::new(230, 70, 80);
const O_COLOR: Rgb = Rgb::new(250, 210, 70);
const HIGHLIGHT: Rgb = Rgb::new(120, 240, 140);

/// A lightweight terminal renderer for the board.
pub struct GameView {
    /// Preferred cell width in terminal columns.
    cell_w: u16,
    /// Preferred cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2:1 compensates for the usual terminal glyph aspect ratio.
        Self {
            cell_w: 12,
            cell_h: 6,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(1, MAX_CELL_SIDE),
            cell_h: cell_h.clamp(1, MAX_CELL_SIDE),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Board placement for a viewport.
    ///
    /// Uses the preferred cell size when it fits and shrinks (keeping the
    /// aspect ratio) when it doesn't. Grid lines sit on the cell boundaries:
    /// the left/top line of a cell belongs to that cell, the closing
    /// right/bottom line belongs to none.
    pub fn layout(&self, viewport: Viewport) -> BoardGeometry {
        let min_h = MIN_CELL_H.min(self.cell_h);
        let mut cell_h = self.cell_h;
        let mut cell_w = self.cell_w;
        while cell_h > min_h {
            let fits_w = board_extent(cell_w) <= viewport.width;
            let fits_h = block_height(cell_h) <= viewport.height;
            if fits_w && fits_h {
                break;
            }
            cell_h -= 1;
            let scaled = u32::from(cell_h) * u32::from(self.cell_w) / u32::from(self.cell_h);
            cell_w = (scaled as u16).max(1);
        }

        let board_w = board_extent(cell_w);
        let block_h = block_height(cell_h);
        let origin_x = viewport.width.saturating_sub(board_w) / 2;
        let top = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(block_h) / 2,
            AnchorY::Top => 0,
        };
        BoardGeometry::new(origin_x, top + HEADER_ROWS, cell_w, cell_h)
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized when
    /// the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::new(' ', CellStyle::fg(BACKGROUND)));

        let g = self.layout(viewport);
        let top = g.origin_y as i32;
        let board_h = g.height() as i32 + 1;
        let screen_w = viewport.width as i32;

        fb.text_centered(
            0,
            screen_w,
            top - HEADER_ROWS as i32,
            TITLE,
            CellStyle::default().bold(),
        );

        self.draw_grid(fb, &g);

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if let Some(player) = snap.board[row][col].owner() {
                    let highlight = snap.is_on_winning_line(row, col);
                    self.draw_mark(fb, &g, row, col, player, highlight);
                }
            }
        }

        // The footer wins over the bottom of the board on short screens.
        let status_y = (top + board_h + 1).min(viewport.height as i32 - 2);
        let blank = CellStyle::fg(BACKGROUND);
        fb.hline(0, status_y, screen_w, ' ', blank);
        fb.hline(0, status_y + 1, screen_w, ' ', blank);
        fb.text_centered(
            0,
            screen_w,
            status_y,
            &status_line(snap),
            CellStyle::default(),
        );

        if !snap.playable() {
            fb.text_centered(
                0,
                screen_w,
                status_y + 1,
                GAME_OVER_MESSAGE,
                CellStyle::default().bold(),
            );
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_grid(&self, fb: &mut FrameBuffer, g: &BoardGeometry) {
        let style = CellStyle::fg(GRID);
        let n = BOARD_SIZE as i32;
        let (x0, y0) = (g.origin_x as i32, g.origin_y as i32);
        let (cw, ch) = (g.cell_w as i32, g.cell_h as i32);

        for i in 0..=n {
            fb.vline(x0 + i * cw, y0, n * ch + 1, '│', style);
            fb.hline(x0, y0 + i * ch, n * cw + 1, '─', style);
        }
        for i in 0..=n {
            for j in 0..=n {
                fb.plot(x0 + i * cw, y0 + j * ch, junction(i, j, n), style);
            }
        }
    }

    fn draw_mark(
        &self,
        fb: &mut FrameBuffer,
        g: &BoardGeometry,
        row: usize,
        col: usize,
        player: Player,
        highlight: bool,
    ) {
        let (cx, cy) = g.cell_center(row, col);
        let (cx, cy) = (cx as i32, cy as i32);
        // Leave a margin inside the cell, the grid line included.
        let rx = (g.cell_w as i32 / 2 - 2).max(0);
        let ry = (g.cell_h as i32 / 2 - 1).max(0);

        let base = match player {
            Player::X => X_COLOR,
            Player::O => O_COLOR,
        };
        let style = if highlight {
            CellStyle::fg(HIGHLIGHT).bold()
        } else {
            CellStyle::fg(base)
        };

        match player {
            Player::X => {
                fb.line(cx - rx, cy - ry, cx + rx, cy + ry, '╲', style);
                fb.line(cx - rx, cy + ry, cx + rx, cy - ry, '╱', style);
                fb.plot(cx, cy, '╳', style);
            }
            Player::O => fb.ellipse(cx, cy, rx, ry, '●', style),
        }
    }
}

/// Columns (or rows) spanned by three cells plus the closing grid line.
fn board_extent(cell: u16) -> u16 {
    (BOARD_SIZE as u16).saturating_mul(cell).saturating_add(1)
}

fn block_height(cell_h: u16) -> u16 {
    board_extent(cell_h).saturating_add(HEADER_ROWS + FOOTER_ROWS)
}

/// Box-drawing character where grid line `i` (vertical) meets line `j` (horizontal).
fn junction(i: i32, j: i32, n: i32) -> char {
    match (i == 0, i == n, j == 0, j == n) {
        (true, _, true, _) => '┌',
        (_, true, true, _) => '┐',
        (true, _, _, true) => '└',
        (_, true, _, true) => '┘',
        (_, _, true, _) => '┬',
        (_, _, _, true) => '┴',
        (true, _, _, _) => '├',
        (_, true, _, _) => '┤',
        _ => '┼',
    }
}

fn status_line(snap: &GameSnapshot) -> String {
    match snap.status {
        GameStatus::InProgress => format!("Turn: {}", snap.current_player),
        GameStatus::Won(p) => format!("{p} wins!"),
        GameStatus::Drawn => "Draw!".to_string(),
    }
}
