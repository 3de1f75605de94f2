//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or filled.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)
//!
//! The top edge is open: a piece may hang partly above row 0. Its cells there
//! are never collision-checked and are dropped when the piece is placed.

use arrayvec::ArrayVec;

use crate::shapes::ShapeMatrix;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Number of rows, usable as a const capacity
pub const ROWS: usize = BOARD_HEIGHT as usize;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and filled
    pub fn is_filled(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Cell::Filled))
    }

    /// Check if every cell of the board is empty
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_filled())
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_filled()).count()
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_filled())
    }

    /// Check whether `shape` anchored at `(x, y)` fits on the board.
    ///
    /// Rejects any occupied cell left of column 0, right of the last column or
    /// below the last row, and any occupied cell that lands on a filled cell.
    /// Cells above row 0 are legal and never collide.
    pub fn is_valid(&self, shape: &ShapeMatrix, x: i8, y: i8) -> bool {
        shape.occupied().all(|(dx, dy)| {
            let bx = x as i16 + dx as i16;
            let by = y as i16 + dy as i16;
            if bx < 0 || bx >= BOARD_WIDTH as i16 || by >= BOARD_HEIGHT as i16 {
                return false;
            }
            by < 0 || !self.is_filled(bx as i8, by as i8)
        })
    }

    /// Return a copy of the board with `shape` anchored at `(x, y)` written as
    /// filled. Cells above row 0 are discarded.
    pub fn place(&self, shape: &ShapeMatrix, x: i8, y: i8) -> Board {
        let mut board = self.clone();
        board.lock_shape(shape, x, y);
        board
    }

    /// In-place form of [`Board::place`]
    pub fn lock_shape(&mut self, shape: &ShapeMatrix, x: i8, y: i8) {
        for (dx, dy) in shape.occupied() {
            let by = y as i16 + dy as i16;
            if by < 0 {
                continue;
            }
            let written = self.set(x + dx, by as i8, Cell::Filled);
            debug_assert!(written, "placed cell ({}, {}) is off the board", x + dx, by);
        }
    }

    /// Clear all full rows and return the row indices that were cleared (sorted bottom to top)
    /// Uses a two-pointer algorithm with zero-allocation
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, ROWS> {
        let mut cleared_rows = ArrayVec::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        // Scan from bottom to top
        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                // Keep the row, compacted toward the bottom
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Refill the vacated rows at the top
        for cell in &mut self.cells[..write_y * width] {
            *cell = Cell::Empty;
        }

        cleared_rows
    }

    /// Return a compacted copy of the board and the number of rows removed
    pub fn clear_full_lines(&self) -> (Board, usize) {
        let mut board = self.clone();
        let cleared = board.clear_full_rows().len();
        (board, cleared)
    }

    /// Write the board as a 0/1 grid
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for (y, row) in out.iter_mut().enumerate() {
            let start = y * BOARD_WIDTH as usize;
            for (x, dst) in row.iter_mut().enumerate() {
                *dst = self.cells[start + x].is_filled() as u8;
            }
        }
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(BOARD_WIDTH as usize)
    }

    /// Fill every cell of row `y` except the listed columns
    pub fn fill_row_except(&mut self, y: i8, gaps: &[i8]) {
        for x in 0..BOARD_WIDTH as i8 {
            if !gaps.contains(&x) {
                self.set(x, y, Cell::Filled);
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::get_shape;
    use crate::types::PieceKind;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_is_valid_allows_cells_above_top() {
        let board = Board::new();
        let i = get_shape(PieceKind::I);
        // Row 1 of the matrix is the filled one, so y = -1 puts it on row 0.
        assert!(board.is_valid(&i, 3, -1));
        // y = -2 puts the whole bar above the board: still legal.
        assert!(board.is_valid(&i, 3, -2));
    }

    #[test]
    fn test_is_valid_ignores_transparent_cells_out_of_bounds() {
        let board = Board::new();
        let i = get_shape(PieceKind::I);
        // Matrix row 3 hangs below the board but is empty.
        assert!(board.is_valid(&i, 0, 17));
        assert!(board.is_valid(&i, 0, 18));
        assert!(!board.is_valid(&i, 0, 19));
    }

    #[test]
    fn test_is_valid_checks_side_walls() {
        let board = Board::new();
        let o = get_shape(PieceKind::O);
        assert!(board.is_valid(&o, 0, 0));
        assert!(board.is_valid(&o, 8, 0));
        assert!(!board.is_valid(&o, -1, 0));
        assert!(!board.is_valid(&o, 9, 0));
    }

    #[test]
    fn test_is_valid_detects_collision() {
        let mut board = Board::new();
        board.set(5, 10, Cell::Filled);
        let o = get_shape(PieceKind::O);
        assert!(!board.is_valid(&o, 4, 9));
        assert!(board.is_valid(&o, 6, 9));
    }

    #[test]
    fn test_place_discards_cells_above_top() {
        let board = Board::new();
        let t = get_shape(PieceKind::T);
        // T's top nub is matrix row 0 -> board row -1.
        let placed = board.place(&t, 0, -1);
        assert_eq!(placed.filled_count(), 3);
        assert!(placed.is_filled(0, 0));
        assert!(placed.is_filled(1, 0));
        assert!(placed.is_filled(2, 0));
        // The source board is untouched.
        assert!(board.is_empty());
    }

    #[test]
    fn test_clear_full_rows_compacts() {
        let mut board = Board::new();
        board.fill_row_except(19, &[]);
        board.fill_row_except(18, &[0]);
        board.fill_row_except(17, &[]);
        board.set(3, 16, Cell::Filled);

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[19, 17]);

        // Partial row 18 drops to 19, lone cell from 16 drops to 18.
        assert!(!board.is_filled(0, 19));
        assert!(board.is_filled(1, 19));
        assert!(board.is_filled(3, 18));
        assert_eq!(board.filled_count(), 10);
        assert!(!board.is_row_full(19));
    }

    #[test]
    fn test_clear_full_lines_handles_more_than_four() {
        let mut board = Board::new();
        for y in 12..20 {
            board.fill_row_except(y, &[]);
        }
        let (cleared, lines) = board.clear_full_lines();
        assert_eq!(lines, 8);
        assert!(cleared.is_empty());
    }

    #[test]
    fn test_write_u8_grid() {
        let mut board = Board::new();
        board.set(2, 5, Cell::Filled);
        let mut grid = [[0u8; 10]; 20];
        board.write_u8_grid(&mut grid);
        assert_eq!(grid[5][2], 1);
        assert_eq!(grid.iter().flatten().map(|&c| c as usize).sum::<usize>(), 1);
    }
}
