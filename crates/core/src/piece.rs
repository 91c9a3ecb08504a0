//! Piece module - shape templates and the falling piece
//!
//! A shape is a small boolean matrix (at most 4x4) stored inline so pieces stay
//! `Copy`. Rotation is the matrix rotation (transpose + row reverse); it never
//! validates against the board. Callers pair every mutation with
//! [`Board::check_collision`](crate::Board::check_collision) and revert on hit.

use crate::types::{Rgb, ShapeKind, MAX_SHAPE_DIM};

/// Rectangular boolean matrix describing which cells of a piece are filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from row slices of 0/1.
    ///
    /// Rows longer than [`MAX_SHAPE_DIM`] are truncated; ragged rows are padded
    /// with empty cells up to the widest row.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let height = rows.len().min(MAX_SHAPE_DIM);
        let width = rows
            .iter()
            .take(height)
            .map(|r| r.len())
            .max()
            .unwrap_or(0)
            .min(MAX_SHAPE_DIM);

        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, row) in rows.iter().take(height).enumerate() {
            for (c, &v) in row.iter().take(width).enumerate() {
                cells[r][c] = v != 0;
            }
        }

        Self {
            rows: height as u8,
            cols: width as u8,
            cells,
        }
    }

    /// Spawn-orientation template for a kind
    pub fn template(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::I => Self::from_rows(&[&[1, 1, 1, 1]]),
            ShapeKind::T => Self::from_rows(&[&[1, 1, 1], &[0, 1, 0]]),
            ShapeKind::L => Self::from_rows(&[&[1, 1, 1], &[1, 0, 0]]),
            ShapeKind::J => Self::from_rows(&[&[1, 1, 1], &[0, 0, 1]]),
            ShapeKind::O => Self::from_rows(&[&[1, 1], &[1, 1]]),
            ShapeKind::S => Self::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
            ShapeKind::Z => Self::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Is the cell at (row, col) filled? Out of range is empty.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows as usize && col < self.cols as usize && self.cells[row][col]
    }

    /// Filled cells as (col, row) offsets from the top-left of the matrix
    pub fn filled(&self) -> impl Iterator<Item = (i16, i16)> + '_ {
        (0..self.rows as usize).flat_map(move |r| {
            (0..self.cols as usize)
                .filter(move |&c| self.cells[r][c])
                .map(move |c| (c as i16, r as i16))
        })
    }

    pub fn filled_count(&self) -> usize {
        self.filled().count()
    }

    /// Rotate the matrix 90° clockwise.
    ///
    /// `new[i][j] = old[rows - 1 - j][i]`; a `rows x cols` matrix becomes
    /// `cols x rows`.
    pub fn rotated_cw(&self) -> Self {
        let rows = self.rows as usize;
        let cols = self.cols as usize;
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (i, out_row) in cells.iter_mut().enumerate().take(cols) {
            for (j, out) in out_row.iter_mut().enumerate().take(rows) {
                *out = self.cells[rows - 1 - j][i];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }
}

/// The player-controlled falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: ShapeKind,
    pub shape: Shape,
    pub color: Rgb,
    /// Column of the matrix's top-left cell
    pub x: i16,
    /// Row of the matrix's top-left cell (may be negative)
    pub y: i16,
}

impl Piece {
    /// Create a piece centered horizontally on a board `board_cols` wide, at row 0
    pub fn spawn(kind: ShapeKind, color: Rgb, board_cols: u8) -> Self {
        let shape = Shape::template(kind);
        let x = (board_cols / 2) as i16 - (shape.cols() / 2) as i16;
        Self {
            kind,
            shape,
            color,
            x,
            y: 0,
        }
    }

    /// Rotate clockwise in place. No bounds validation.
    pub fn rotate(&mut self) {
        self.shape = self.shape.rotated_cw();
    }

    /// Shift the origin. No bounds validation.
    pub fn translate(&mut self, dx: i16, dy: i16) {
        self.x += dx;
        self.y += dy;
    }

    /// Absolute (x, y) board coordinates of every filled cell
    pub fn cells(&self) -> impl Iterator<Item = (i16, i16)> + '_ {
        self.shape
            .filled()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}
