//! 2D torus: a rectangular grid whose edges wrap on both axes.

use smallvec::SmallVec;
use toroid_core::LatticeError;

use crate::neighbourhood::{Neighbourhood, Offset};

/// Wrap a signed axis value into `[0, len)` with Euclidean semantics.
///
/// `wrap(-1, len)` is `len - 1`; the result is periodic with period `len`.
///
/// # Panics
///
/// Panics if `len` is zero.
pub fn wrap(value: i64, len: usize) -> usize {
    value.rem_euclid(len as i64) as usize
}

/// A `rows x cols` grid with periodic boundaries on both axes.
///
/// Cells are addressed as `(row, col)` and stored row-major, so the buffer
/// index of `(r, c)` is `r * cols + c`. Every coordinate passed through
/// [`offset`](Torus::offset) or [`resolve`](Torus::resolve) is wrapped into
/// range, which is why no rule can index out of bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Torus {
    rows: usize,
    cols: usize,
}

impl Torus {
    /// Largest supported axis length: coordinates are resolved as `i64`.
    pub const MAX_DIM: usize = i64::MAX as usize;

    /// Create a torus with `rows * cols` cells.
    ///
    /// Returns `Err(LatticeError::InvalidDimensions)` if either dimension is
    /// zero or exceeds [`MAX_DIM`](Torus::MAX_DIM).
    pub fn new(rows: usize, cols: usize) -> Result<Self, LatticeError> {
        if rows == 0 || cols == 0 || rows > Self::MAX_DIM || cols > Self::MAX_DIM {
            return Err(LatticeError::InvalidDimensions { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Number of rows (`M`).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (`N`).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Wrap a signed row into `[0, rows)`.
    pub fn wrap_row(&self, row: i64) -> usize {
        wrap(row, self.rows)
    }

    /// Wrap a signed column into `[0, cols)`.
    pub fn wrap_col(&self, col: i64) -> usize {
        wrap(col, self.cols)
    }

    /// Wrap an arbitrary signed coordinate onto the torus.
    pub fn resolve(&self, row: i64, col: i64) -> (usize, usize) {
        (self.wrap_row(row), self.wrap_col(col))
    }

    /// The cell reached from `(row, col)` by `offset`, wrapped.
    pub fn offset(&self, row: usize, col: usize, (dr, dc): Offset) -> (usize, usize) {
        self.resolve(row as i64 + dr, col as i64 + dc)
    }

    /// Row-major buffer index of an in-range `(row, col)`.
    pub fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        row * self.cols + col
    }

    /// Row-major buffer index of the cell reached by `offset`, wrapped.
    pub fn offset_index(&self, row: usize, col: usize, offset: Offset) -> usize {
        let (r, c) = self.offset(row, col, offset);
        self.index(r, c)
    }

    /// Row-major buffer index of an arbitrary signed coordinate, wrapped.
    pub fn resolve_index(&self, row: i64, col: i64) -> usize {
        let (r, c) = self.resolve(row, col);
        self.index(r, c)
    }

    /// Buffer indices of the neighbours of `(row, col)`, in table order.
    ///
    /// On tori narrower than 3 cells an index may repeat (several offsets
    /// land on the same cell, possibly the centre itself).
    pub fn neighbours(
        &self,
        row: usize,
        col: usize,
        shape: Neighbourhood,
    ) -> SmallVec<[usize; 8]> {
        shape
            .offsets()
            .iter()
            .map(|&o| self.offset_index(row, col, o))
            .collect()
    }

    /// All cells in row-major order: `(0,0), (0,1), ..., (rows-1, cols-1)`.
    ///
    /// This is the iteration order every rule uses, and the one that decides
    /// collision outcomes for scattering.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |r| (0..cols).map(move |c| (r, c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neighbourhood::{MOORE_RING, ORTHOGONAL};
    use proptest::prelude::*;

    #[test]
    fn new_rejects_zero_dims() {
        assert_eq!(
            Torus::new(0, 5),
            Err(LatticeError::InvalidDimensions { rows: 0, cols: 5 })
        );
        assert_eq!(
            Torus::new(5, 0),
            Err(LatticeError::InvalidDimensions { rows: 5, cols: 0 })
        );
    }

    #[test]
    fn wrap_negative_one_is_last() {
        assert_eq!(wrap(-1, 5), 4);
        assert_eq!(wrap(5, 5), 0);
        assert_eq!(wrap(-6, 5), 4);
        assert_eq!(wrap(7, 5), 2);
    }

    #[test]
    fn offset_wraps_corners() {
        let t = Torus::new(5, 7).unwrap();
        assert_eq!(t.offset(0, 0, (-1, -1)), (4, 6));
        assert_eq!(t.offset(4, 6, (1, 1)), (0, 0));
        assert_eq!(t.offset(2, 3, (0, 1)), (2, 4));
    }

    #[test]
    fn index_is_row_major() {
        let t = Torus::new(3, 4).unwrap();
        assert_eq!(t.index(0, 0), 0);
        assert_eq!(t.index(1, 0), 4);
        assert_eq!(t.index(2, 3), 11);
        assert_eq!(t.resolve_index(-1, -1), 11);
    }

    #[test]
    fn neighbours_wrap_corner() {
        let t = Torus::new(3, 3).unwrap();
        let n = t.neighbours(0, 0, Neighbourhood::Moore);
        assert_eq!(n.len(), 8);
        // Ring order from the north-west: (2,2) (2,0) (2,1) (0,1) (1,1) (1,0) (1,2) (0,2)
        assert_eq!(n.as_slice(), &[8, 6, 7, 1, 4, 3, 5, 2]);
    }

    #[test]
    fn neighbours_orthogonal_order() {
        let t = Torus::new(4, 4).unwrap();
        let n = t.neighbours(1, 1, Neighbourhood::Orthogonal);
        // E, W, S, N
        assert_eq!(n.as_slice(), &[6, 4, 9, 1]);
    }

    #[test]
    fn single_cell_torus_is_its_own_neighbour() {
        let t = Torus::new(1, 1).unwrap();
        let n = t.neighbours(0, 0, Neighbourhood::Moore);
        assert_eq!(n.len(), 8);
        assert!(n.iter().all(|&i| i == 0));
    }

    #[test]
    fn cells_enumerates_row_major() {
        let t = Torus::new(2, 3).unwrap();
        let cells: Vec<_> = t.cells().collect();
        assert_eq!(
            cells,
            vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]
        );
        assert_eq!(cells.len(), t.cell_count());
    }

    proptest! {
        #[test]
        fn wrap_in_range_and_periodic(
            len in 1usize..50,
            value in -10_000i64..10_000,
            k in -20i64..20,
        ) {
            let w = wrap(value, len);
            prop_assert!(w < len);
            prop_assert_eq!(w, wrap(value + k * len as i64, len));
        }

        #[test]
        fn offsets_stay_in_bounds(
            rows in 1usize..20,
            cols in 1usize..20,
            r in 0usize..20,
            c in 0usize..20,
            dr in -100i64..100,
            dc in -100i64..100,
        ) {
            let t = Torus::new(rows, cols).unwrap();
            let (r, c) = (r % rows, c % cols);
            let (nr, nc) = t.offset(r, c, (dr, dc));
            prop_assert!(nr < rows && nc < cols);
            prop_assert!(t.offset_index(r, c, (dr, dc)) < t.cell_count());
        }

        #[test]
        fn neighbour_relation_is_symmetric(
            rows in 1usize..10,
            cols in 1usize..10,
            r in 0usize..10,
            c in 0usize..10,
        ) {
            let t = Torus::new(rows, cols).unwrap();
            let (r, c) = (r % rows, c % cols);
            let centre = t.index(r, c);
            for &(dr, dc) in MOORE_RING.iter().chain(ORTHOGONAL.iter()) {
                let (nr, nc) = t.offset(r, c, (dr, dc));
                prop_assert_eq!(t.offset_index(nr, nc, (-dr, -dc)), centre);
            }
        }
    }
}
