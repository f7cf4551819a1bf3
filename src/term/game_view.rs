//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! Pure (no I/O), so the whole presentation is unit-testable. Layout is the
//! classic single-window arrangement: a header band with the score and the
//! next-piece preview, the bordered playfield below it, a dim ghost piece at
//! the projected landing row, and centered overlay text for the start screen
//! and game over.

use crate::core::{spawn_shape, GameState};
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

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

/// Header band height: score/preview label row, two preview rows, separator.
const HEADER_ROWS: u16 = 4;

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
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

    /// Render the current game state into a framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h + HEADER_ROWS) / 2;
        let board_y = start_y + HEADER_ROWS;

        self.draw_header(&mut fb, state, start_x, start_y, frame_w);

        let bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(30, 30, 40),
            bold: false,
            dim: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        fb.fill_rect(start_x + 1, board_y + 1, board_px_w, board_px_h, ' ', bg);
        self.draw_border(&mut fb, start_x, board_y, frame_w, frame_h, border);

        // Locked board cells.
        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                match state.board().get(x, y).unwrap_or(None) {
                    Some(kind) => self.draw_board_cell(
                        &mut fb,
                        start_x,
                        board_y,
                        x as u16,
                        y as u16,
                        kind,
                    ),
                    None => self.draw_empty_cell(&mut fb, start_x, board_y, x as u16, y as u16),
                }
            }
        }

        // Ghost piece at the projected landing row.
        if let (Some(active), Some(ghost_y)) = (state.active(), state.ghost_y()) {
            let ghost_style = CellStyle {
                fg: Rgb::new(140, 140, 140),
                bg: Rgb::new(30, 30, 40),
                bold: false,
                dim: true,
            };
            for &(dx, dy) in active.shape.minos().iter() {
                let x = active.x + dx;
                let y = ghost_y + dy;
                if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                    self.fill_cell_rect(
                        &mut fb,
                        start_x,
                        board_y,
                        x as u16,
                        y as u16,
                        '░',
                        ghost_style,
                    );
                }
            }
        }

        // Active piece (over the ghost).
        if let Some(active) = state.active() {
            for &(dx, dy) in active.shape.minos().iter() {
                let x = active.x + dx;
                let y = active.y + dy;
                if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                    self.draw_board_cell(
                        &mut fb,
                        start_x,
                        board_y,
                        x as u16,
                        y as u16,
                        active.kind,
                    );
                }
            }
        }

        // Overlays.
        if !state.started() {
            self.draw_overlay_text(&mut fb, start_x, board_y, frame_w, frame_h, "PRESS ANY KEY");
        } else if state.game_over() {
            self.draw_overlay_text(&mut fb, start_x, board_y, frame_w, frame_h, "GAME OVER");
        }

        fb
    }

    fn draw_header(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };

        fb.put_str(start_x, start_y, &format!("SCORE {}", state.score()), label);

        // Next-piece preview, right-aligned in the header band.
        let preview = spawn_shape(state.next_piece());
        let preview_w = 4 * self.cell_w;
        let preview_x = start_x + frame_w.saturating_sub(preview_w);
        fb.put_str(preview_x, start_y, "NEXT", label);

        let style = CellStyle {
            fg: piece_color(state.next_piece()),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        for y in 0..preview.height() {
            for x in 0..preview.width() {
                if preview.filled(x, y) {
                    fb.fill_rect(
                        preview_x + (x as u16) * self.cell_w,
                        start_y + 1 + (y as u16) * self.cell_h,
                        self.cell_w,
                        self.cell_h,
                        '█',
                        style,
                    );
                }
            }
        }
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

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, board_y: u16, x: u16, y: u16) {
        let style = CellStyle {
            fg: Rgb::new(90, 90, 100),
            bg: Rgb::new(30, 30, 40),
            bold: false,
            dim: true,
        };
        self.fill_cell_rect(fb, start_x, board_y, x, y, '·', style);
    }

    fn draw_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        board_y: u16,
        x: u16,
        y: u16,
        kind: PieceKind,
    ) {
        let style = CellStyle {
            fg: piece_color(kind),
            bg: Rgb::new(30, 30, 40),
            bold: true,
            dim: false,
        };
        self.fill_cell_rect(fb, start_x, board_y, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        board_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = board_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        board_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = board_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_str(x, mid_y, text, style);
    }
}

/// One color per tetromino kind, indexed by the kind's 0-6 identifier.
const PIECE_COLORS: [Rgb; 7] = [
    Rgb::new(80, 220, 220), // I
    Rgb::new(240, 220, 80), // O
    Rgb::new(170, 90, 220), // T
    Rgb::new(100, 220, 120), // S
    Rgb::new(220, 80, 80),  // Z
    Rgb::new(255, 165, 0),  // L
    Rgb::new(80, 120, 220), // J
];

fn piece_color(kind: PieceKind) -> Rgb {
    PIECE_COLORS[kind.index()]
}
