//! Board module - manages the game grid
//!
//! The board is a `rows x cols` grid where each cell is empty or holds the color
//! of a settled block. Storage is a flat row-major buffer allocated once at
//! construction; its dimensions never change afterwards.
//! Coordinates: (x, y) where x is the column (left to right) and y is the row
//! (top to bottom).

use crate::piece::Piece;
use crate::types::{Cell, GameConfig, Rgb};

/// The settled-block grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: u8,
    cols: u8,
    /// Flat array of cells, row-major order (y * cols + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(rows: u8, cols: u8) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows as usize * cols as usize],
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.rows, config.cols)
    }

    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if x < 0 || x >= self.cols as i16 || y < 0 || y >= self.rows as i16 {
            return None;
        }
        Some((y as usize) * (self.cols as usize) + (x as usize))
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.rows as usize {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Cells of row `y`; panics if `y` is out of range
    pub fn row(&self, y: usize) -> &[Cell] {
        let width = self.cols as usize;
        let start = y * width;
        &self.cells[start..start + width]
    }

    /// Test whether `piece` overlaps a wall, the floor, or a settled block.
    ///
    /// Cells above the top edge (negative y) never collide, so a piece may
    /// spawn partially off-grid.
    pub fn check_collision(&self, piece: &Piece) -> bool {
        piece.cells().any(|(x, y)| {
            if x < 0 || x >= self.cols as i16 || y >= self.rows as i16 {
                return true;
            }
            y >= 0 && self.is_occupied(x, y)
        })
    }

    /// Paint every filled cell of `piece` into the grid.
    ///
    /// The caller must have checked for collision first. Cells that land outside
    /// the grid are skipped. Returns how many cells were written.
    pub fn commit(&mut self, piece: &Piece) -> usize {
        let color: Rgb = piece.color;
        let mut written = 0;
        for (x, y) in piece.cells() {
            if self.set(x, y, Some(color)) {
                written += 1;
            }
        }
        written
    }

    /// Remove every full row and return how many were removed.
    ///
    /// Fullness is decided against the grid as it was before this call. Surviving
    /// rows keep their relative order and settle at the bottom; empty rows fill
    /// the top. Two-pointer compaction, no allocation.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.cols as usize;
        let mut write_y = self.rows as usize;
        let mut cleared = 0;

        // Scan from bottom to top
        for read_y in (0..self.rows as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
                continue;
            }

            write_y -= 1;
            if write_y != read_y {
                let src_start = read_y * width;
                self.cells
                    .copy_within(src_start..src_start + width, write_y * width);
            }
        }

        self.cells[..write_y * width].fill(None);

        cleared
    }

    /// Number of settled cells on the board
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}
