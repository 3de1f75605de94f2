//! Piece module - the active falling piece
//!
//! A piece is a value: every committed move or rotation replaces it with a new
//! one, so a rejected candidate never leaks into the game state.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::shapes::{get_shape, ShapeMatrix};
use crate::types::PieceKind;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    /// Occupancy matrix in its current rotation
    pub shape: ShapeMatrix,
    /// Board column of the matrix's left edge
    pub x: i8,
    /// Board row of the matrix's top edge
    pub y: i8,
}

impl Piece {
    /// Create a piece at the spawn anchor: horizontally centered, top row
    pub fn spawn(kind: PieceKind, board_width: u8) -> Self {
        Self {
            kind,
            shape: get_shape(kind),
            x: spawn_x(board_width),
            y: 0,
        }
    }

    pub fn color(&self) -> &'static str {
        self.kind.color()
    }

    /// Same piece shifted by `(dx, dy)`
    pub fn moved(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same piece with its matrix rotated clockwise about the anchor
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotate_cw(),
            ..*self
        }
    }

    /// Check if the piece fits the board at its current anchor
    pub fn is_valid(&self, board: &Board) -> bool {
        board.is_valid(&self.shape, self.x, self.y)
    }

    /// Board coordinates of the occupied cells (may include rows above 0)
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .occupied()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

/// Spawn column for a board of the given width
pub fn spawn_x(board_width: u8) -> i8 {
    (board_width / 2) as i8 - 1
}
