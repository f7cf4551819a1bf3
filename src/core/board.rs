//! Board module - the fixed 10x20 grid.
//!
//! Flat row-major storage for cache locality and zero allocation.
//! Coordinates: (x, y) with x in 0..10 left to right, y in 0..20 top to
//! bottom. Pieces may extend above the grid (y < 0); those cells are outside
//! storage and never collide with grid content.

use arrayvec::ArrayVec;

use crate::core::pieces::Shape;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const BOARD_SIZE: usize = (BOARD_WIDTH * BOARD_HEIGHT) as usize;

/// The game grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major (y * WIDTH + x).
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Cell at (x, y), or None when out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y). Returns false when out of bounds.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Placement rule for a shape with its top-left at (x, y).
    ///
    /// An occupied shape cell invalidates the placement when it leaves the
    /// grid horizontally, passes the floor, or overlaps grid content at a
    /// row >= 0. Rows above the grid are only bounded horizontally, so a
    /// freshly spawned piece may sit partially above the visible area.
    pub fn fits(&self, shape: &Shape, x: i8, y: i8) -> bool {
        for &(dx, dy) in shape.minos().iter() {
            let px = x + dx;
            let py = y + dy;
            if px < 0 || px >= BOARD_WIDTH as i8 || py >= BOARD_HEIGHT as i8 {
                return false;
            }
            if py >= 0 && self.is_occupied(px, py) {
                return false;
            }
        }
        true
    }

    /// Write a piece into the grid. Cells above the top row are dropped.
    pub fn merge(&mut self, shape: &Shape, x: i8, y: i8, kind: PieceKind) {
        for &(dx, dy) in shape.minos().iter() {
            let py = y + dy;
            if py >= 0 {
                self.set(x + dx, py, Some(kind));
            }
        }
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        self.cells[start..start + BOARD_WIDTH as usize]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Remove row `y`, shifting every row above it down one and inserting an
    /// empty row at the top. Row count is unchanged.
    fn remove_row(&mut self, y: usize) {
        let width = BOARD_WIDTH as usize;
        for row in (1..=y).rev() {
            let src = (row - 1) * width;
            self.cells.copy_within(src..src + width, row * width);
        }
        for cell in &mut self.cells[0..width] {
            *cell = None;
        }
    }

    /// Clear every full row and return the indices cleared (bottom to top).
    ///
    /// Scans bottom-up; after a removal the same index is re-examined, since
    /// the row shifted down into it may itself be full. A single merge event
    /// can complete at most four rows.
    pub fn clear_full_rows(&mut self) -> ArrayVec<u8, 4> {
        let mut cleared = ArrayVec::new();
        let mut y = BOARD_HEIGHT as usize;
        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) && !cleared.is_full() {
                self.remove_row(row);
                cleared.push(row as u8);
            } else {
                y -= 1;
            }
        }
        cleared
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Fill an entire row, used by tests to stage clears.
    #[cfg(test)]
    pub fn fill_row(&mut self, y: i8, kind: PieceKind) {
        for x in 0..BOARD_WIDTH as i8 {
            self.set(x, y, Some(kind));
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
