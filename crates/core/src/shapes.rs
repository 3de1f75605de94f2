//! Shapes module - the tetromino catalog and matrix rotation
//!
//! Every piece is a square occupancy matrix (2x2 for O, 4x4 for I, 3x3 for the
//! rest). Rotation is computed from the matrix, never looked up, so the
//! catalog only stores the spawn orientation.

use serde::{Deserialize, Serialize};

use crate::types::PieceKind;

/// Largest matrix side in the catalog (the I piece)
pub const MAX_SHAPE_SIZE: usize = 4;

/// Square occupancy matrix of a piece.
///
/// Only the top-left `size x size` block is meaningful; the remainder of the
/// backing array is always empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeMatrix {
    size: u8,
    cells: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl ShapeMatrix {
    /// Build a matrix from 0/1 rows. Entries outside `size` are ignored.
    pub const fn from_bits(size: u8, bits: [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE]) -> Self {
        assert!(size as usize <= MAX_SHAPE_SIZE);
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let mut y = 0;
        while y < size as usize {
            let mut x = 0;
            while x < size as usize {
                cells[y][x] = bits[y][x] != 0;
                x += 1;
            }
            y += 1;
        }
        Self { size, cells }
    }

    /// Side length of the matrix
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Whether the cell at column `x`, row `y` is occupied
    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        x < self.size() && y < self.size() && self.cells[y][x]
    }

    /// Offsets `(x, y)` of the occupied cells, row by row
    pub fn occupied(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let n = self.size();
        (0..n).flat_map(move |y| {
            (0..n).filter_map(move |x| self.cells[y][x].then_some((x as i8, y as i8)))
        })
    }

    /// Number of occupied cells
    pub fn count(&self) -> usize {
        self.occupied().count()
    }

    /// 90° clockwise rotation: `rotated[j][n-1-i] = original[i][j]`.
    ///
    /// Pure geometry; the caller must validate the result against the board.
    pub fn rotate_cw(&self) -> Self {
        let n = self.size();
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (i, row) in self.cells.iter().enumerate().take(n) {
            for (j, &occupied) in row.iter().enumerate().take(n) {
                cells[j][n - 1 - i] = occupied;
            }
        }
        Self {
            size: self.size,
            cells,
        }
    }

    /// Matrix rows as 0/1 vectors, mostly for assertions and debugging
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        let n = self.size();
        self.cells[..n]
            .iter()
            .map(|row| row[..n].iter().map(|&c| c as u8).collect())
            .collect()
    }
}

const I_SHAPE: ShapeMatrix =
    ShapeMatrix::from_bits(4, [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]]);

const O_SHAPE: ShapeMatrix =
    ShapeMatrix::from_bits(2, [[1, 1, 0, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);

const T_SHAPE: ShapeMatrix =
    ShapeMatrix::from_bits(3, [[0, 1, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);

const S_SHAPE: ShapeMatrix =
    ShapeMatrix::from_bits(3, [[0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);

const Z_SHAPE: ShapeMatrix =
    ShapeMatrix::from_bits(3, [[1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);

const J_SHAPE: ShapeMatrix =
    ShapeMatrix::from_bits(3, [[1, 0, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);

const L_SHAPE: ShapeMatrix =
    ShapeMatrix::from_bits(3, [[0, 0, 1, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);

/// Canonical (spawn orientation) matrix for a piece kind
pub fn get_shape(kind: PieceKind) -> ShapeMatrix {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::Z => Z_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
    }
}

/// Matrix and display color for a piece kind
pub fn shape_of(kind: PieceKind) -> (ShapeMatrix, &'static str) {
    (get_shape(kind), kind.color())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(get_shape(PieceKind::I).size(), 4);
        assert_eq!(get_shape(PieceKind::O).size(), 2);
        for kind in [PieceKind::T, PieceKind::S, PieceKind::Z, PieceKind::J, PieceKind::L] {
            assert_eq!(get_shape(kind).size(), 3, "{kind:?}");
        }
    }

    #[test]
    fn test_every_piece_has_four_minos() {
        for kind in PieceKind::ALL {
            assert_eq!(get_shape(kind).count(), 4, "{kind:?}");
        }
    }

    #[test]
    fn test_i_shape_fills_row_one() {
        let offsets: Vec<_> = get_shape(PieceKind::I).occupied().collect();
        assert_eq!(offsets, vec![(0, 1), (1, 1), (2, 1), (3, 1)]);
    }

    #[test]
    fn test_rotate_t() {
        let rotated = get_shape(PieceKind::T).rotate_cw();
        assert_eq!(
            rotated.to_rows(),
            vec![vec![0, 1, 0], vec![0, 1, 1], vec![0, 1, 0]]
        );
    }

    #[test]
    fn test_rotate_i_becomes_vertical() {
        let rotated = get_shape(PieceKind::I).rotate_cw();
        let offsets: Vec<_> = rotated.occupied().collect();
        assert_eq!(offsets, vec![(2, 0), (2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn test_o_rotation_is_fixed_point() {
        let o = get_shape(PieceKind::O);
        assert_eq!(o.rotate_cw(), o);
    }

    #[test]
    fn test_shape_of_pairs_color() {
        let (shape, color) = shape_of(PieceKind::L);
        assert_eq!(shape, get_shape(PieceKind::L));
        assert_eq!(color, "#FFA500");
    }

    #[test]
    fn test_is_occupied_outside_size() {
        let o = get_shape(PieceKind::O);
        assert!(o.is_occupied(1, 1));
        assert!(!o.is_occupied(2, 0));
        assert!(!o.is_occupied(0, 3));
    }
}
