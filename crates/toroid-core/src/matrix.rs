//! Dense row-major matrix used for lattice snapshots.
//!
//! A [`Matrix`] is an owned, immutable-shape copy of a lattice buffer. It is
//! what renderers and statistics consume; mutating it never affects the
//! lattice it was taken from.

use std::ops::{Index, IndexMut};

use crate::error::LatticeError;

/// Dense `rows x cols` matrix stored in row-major order.
///
/// Both dimensions are at least 1; constructors reject empty shapes.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

fn check_dims(rows: usize, cols: usize) -> Result<(), LatticeError> {
    if rows == 0 || cols == 0 {
        return Err(LatticeError::InvalidDimensions { rows, cols });
    }
    Ok(())
}

impl<T: Clone> Matrix<T> {
    /// Create a matrix with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Result<Self, LatticeError> {
        check_dims(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        })
    }

    /// Build a matrix from nested rows.
    ///
    /// Returns `Err(ShapeMismatch)` if the rows are ragged.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, LatticeError> {
        let row_count = rows.len();
        let col_count = rows.first().map_or(0, |r| r.as_ref().len());
        check_dims(row_count, col_count)?;

        let mut data = Vec::with_capacity(row_count * col_count);
        for row in rows {
            let row = row.as_ref();
            if row.len() != col_count {
                return Err(LatticeError::ShapeMismatch {
                    expected: (row_count, col_count),
                    actual: (1, row.len()),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: row_count,
            cols: col_count,
            data,
        })
    }
}

impl<T> Matrix<T> {
    /// Wrap a row-major vector as a matrix.
    ///
    /// Returns `Err(ShapeMismatch)` if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, LatticeError> {
        check_dims(rows, cols)?;
        if data.len() != rows * cols {
            return Err(LatticeError::ShapeMismatch {
                expected: (rows, cols),
                actual: (1, data.len()),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`: constructors reject empty shapes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Cell at `(row, col)`, or `None` if out of range. No wrapping.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// One row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Row-major view of all cells.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the matrix, returning its row-major storage.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Iterate cells in row-major order together with their coordinates.
    pub fn iter_cells(&self) -> impl Iterator<Item = ((usize, usize), &T)> + '_ {
        let cols = self.cols;
        self.data
            .iter()
            .enumerate()
            .map(move |(i, v)| ((i / cols, i % cols), v))
    }
}

impl Matrix<f64> {
    /// Sum of all cell values.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Number of cells whose value is exactly `1.0`.
    pub fn live_count(&self) -> usize {
        self.data.iter().filter(|&&v| v == 1.0).count()
    }

    /// `true` if every cell is exactly `0.0` or `1.0`.
    pub fn is_binary(&self) -> bool {
        self.data.iter().all(|&v| v == 0.0 || v == 1.0)
    }

    /// Smallest cell value. NaN cells are ignored unless every cell is NaN.
    pub fn min(&self) -> f64 {
        self.data.iter().copied().fold(f64::NAN, f64::min)
    }

    /// Largest cell value. NaN cells are ignored unless every cell is NaN.
    pub fn max(&self) -> f64 {
        self.data.iter().copied().fold(f64::NAN, f64::max)
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &mut self.data[row * self.cols + col]
    }
}
