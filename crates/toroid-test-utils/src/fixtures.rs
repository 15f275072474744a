//! Reusable grid fixtures.
//!
//! - [`uniform`]: every cell holds the same value.
//! - [`single_cell`]: zeros with one cell set.
//! - [`checkerboard`]: alternating 0/1 by `(row + col) % 2`.
//! - [`numbered`]: cells hold `1, 2, 3, ...` in row-major order.
//! - [`from_rows`]: literal rows, panicking on ragged input.

use toroid_core::Matrix;

pub fn uniform(rows: usize, cols: usize, value: f64) -> Matrix<f64> {
    Matrix::filled(rows, cols, value).expect("fixture dimensions must be non-zero")
}

pub fn single_cell(rows: usize, cols: usize, row: usize, col: usize, value: f64) -> Matrix<f64> {
    let mut m = uniform(rows, cols, 0.0);
    m[(row, col)] = value;
    m
}

pub fn checkerboard(rows: usize, cols: usize) -> Matrix<f64> {
    let data = (0..rows * cols)
        .map(|i| ((i / cols + i % cols) % 2) as f64)
        .collect();
    Matrix::from_vec(rows, cols, data).expect("fixture dimensions must be non-zero")
}

/// Distinct values make every cell traceable after a permutation.
pub fn numbered(rows: usize, cols: usize) -> Matrix<f64> {
    let data = (1..=rows * cols).map(|v| v as f64).collect();
    Matrix::from_vec(rows, cols, data).expect("fixture dimensions must be non-zero")
}

pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Matrix<f64> {
    Matrix::from_rows(rows).expect("fixture rows must be non-empty and rectangular")
}
