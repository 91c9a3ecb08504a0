use arrayvec::ArrayVec;

use crate::piece::Piece;
use crate::types::{Cell, Rgb, RunState, ShapeKind, MAX_SHAPE_DIM};

/// Absolute cells of the falling piece.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: ShapeKind,
    pub color: Rgb,
    pub cells: ArrayVec<(i16, i16), { MAX_SHAPE_DIM * MAX_SHAPE_DIM }>,
}

impl From<&Piece> for ActiveSnapshot {
    fn from(piece: &Piece) -> Self {
        Self {
            kind: piece.kind,
            color: piece.color,
            cells: piece.cells().collect(),
        }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenderState {
    pub rows: u8,
    pub cols: u8,
    /// Row-major settled cells, `rows * cols` long
    pub grid: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub pieces: u32,
    pub state: RunState,
}

impl RenderState {
    /// Settled cell at (x, y); `None` when empty or out of range
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        if x >= self.cols as usize || y >= self.rows as usize {
            return None;
        }
        self.grid[y * self.cols as usize + x]
    }

    pub fn game_over(&self) -> bool {
        self.state == RunState::GameOver
    }
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            rows: 0,
            cols: 0,
            grid: Vec::new(),
            active: None,
            score: 0,
            level: 1,
            lines: 0,
            pieces: 0,
            state: RunState::Running,
        }
    }
}
