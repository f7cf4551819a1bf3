//! Pieces module - tetromino shape matrices and rotation.
//!
//! A shape is a small binary occupancy matrix (at most 4x4). Rotation is a
//! 90-degree clockwise transpose: the rotated matrix swaps width and height.
//! There is no wall-kick table; the caller recenters horizontally once and
//! either accepts or discards the rotation.

use crate::types::PieceKind;

/// Binary occupancy matrix for a piece.
///
/// Backed by fixed-size storage so rotation and queries never allocate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    rows: [[bool; 4]; 4],
    width: u8,
    height: u8,
}

impl Shape {
    fn from_rows(rows: &[&[u8]]) -> Self {
        let height = rows.len() as u8;
        let width = rows[0].len() as u8;
        let mut cells = [[false; 4]; 4];
        for (y, row) in rows.iter().enumerate() {
            for (x, v) in row.iter().enumerate() {
                cells[y][x] = *v != 0;
            }
        }
        Self {
            rows: cells,
            width,
            height,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the matrix cell at (x, y) is occupied.
    ///
    /// Out-of-matrix coordinates read as empty.
    pub fn filled(&self, x: u8, y: u8) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.rows[y as usize][x as usize]
    }

    /// The four occupied offsets, row-major.
    ///
    /// Every tetromino covers exactly four cells and rotation preserves that.
    pub fn minos(&self) -> [(i8, i8); 4] {
        let mut out = [(0i8, 0i8); 4];
        let mut n = 0;
        for y in 0..self.height {
            for x in 0..self.width {
                if self.rows[y as usize][x as usize] && n < 4 {
                    out[n] = (x as i8, y as i8);
                    n += 1;
                }
            }
        }
        out
    }

    /// 90-degree clockwise rotation: `rotated[x][h-1-y] = self[y][x]`.
    ///
    /// New width = old height, new height = old width.
    pub fn rotated_cw(&self) -> Shape {
        let mut rows = [[false; 4]; 4];
        for y in 0..self.height as usize {
            for x in 0..self.width as usize {
                if self.rows[y][x] {
                    rows[x][self.height as usize - 1 - y] = true;
                }
            }
        }
        Shape {
            rows,
            width: self.height,
            height: self.width,
        }
    }
}

/// Canonical spawn matrix for a piece kind.
pub fn spawn_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => Shape::from_rows(&[&[1, 1, 1, 1]]),
        PieceKind::O => Shape::from_rows(&[&[1, 1], &[1, 1]]),
        PieceKind::T => Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
        PieceKind::S => Shape::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
        PieceKind::Z => Shape::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
        PieceKind::L => Shape::from_rows(&[&[1, 1, 1], &[1, 0, 0]]),
        PieceKind::J => Shape::from_rows(&[&[1, 1, 1], &[0, 0, 1]]),
    }
}

/// Horizontal recenter applied on rotation: half the width change, truncated.
pub fn rotation_recenter(old: &Shape, rotated: &Shape) -> i8 {
    (rotated.width() as i8 - old.width() as i8) / 2
}
