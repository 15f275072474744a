//! Direct, unoptimised formulations of the lattice rules.
//!
//! These read a [`Matrix`] and build a fresh one, with no buffering tricks,
//! so tests can check the engine's buffered passes against them
//! bit-for-bit.

use toroid_core::Matrix;
use toroid_space::{wrap, MOORE_RING, ORTHOGONAL};

fn at(m: &Matrix<f64>, row: i64, col: i64) -> f64 {
    m[(wrap(row, m.rows()), wrap(col, m.cols()))]
}

fn ring_coords(m: &Matrix<f64>, row: usize, col: usize) -> [(usize, usize); 8] {
    MOORE_RING.map(|(dr, dc)| {
        (
            wrap(row as i64 + dr, m.rows()),
            wrap(col as i64 + dc, m.cols()),
        )
    })
}

/// The 8 values around `(row, col)` in ring order.
pub fn ring_values(m: &Matrix<f64>, row: usize, col: usize) -> [f64; 8] {
    ring_coords(m, row, col).map(|rc| m[rc])
}

/// Rotate the ring around a single anchor by collecting its 8 values and
/// shifting the array one place left, on an otherwise zeroed grid.
///
/// Matches one block rotation whenever `(row, col)` is the only anchor
/// and the ring cells are distinct (sides of at least 3).
pub fn rotate_ring_reference(m: &Matrix<f64>, row: usize, col: usize) -> Matrix<f64> {
    let mut values = ring_values(m, row, col);
    values.rotate_left(1);
    let mut out = Matrix::filled(m.rows(), m.cols(), 0.0).expect("source matrix is non-empty");
    for (rc, v) in ring_coords(m, row, col).into_iter().zip(values) {
        out[rc] = v;
    }
    out
}

/// Threshold growth computed cell by cell from the input.
pub fn threshold_reference(m: &Matrix<f64>, number: f64) -> Matrix<f64> {
    let mut out = m.clone();
    for ((r, c), &v) in m.iter_cells() {
        let live = ring_values(m, r, c).iter().filter(|&&n| n == 1.0).count();
        out[(r, c)] = if live as f64 + v > number { 1.0 } else { 0.0 };
    }
    out
}

/// One explicit diffusion step computed cell by cell from the input.
pub fn diffusion_reference(m: &Matrix<f64>, coeff: f64) -> Matrix<f64> {
    let mut out = m.clone();
    for ((r, c), &v) in m.iter_cells() {
        let mut sum = 0.0;
        for (dr, dc) in ORTHOGONAL {
            sum += at(m, r as i64 + dr, c as i64 + dc);
        }
        out[(r, c)] = v + coeff * (sum - 4.0 * v);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::numbered;

    #[test]
    fn ring_values_wrap() {
        let m = numbered(3, 3);
        assert_eq!(
            ring_values(&m, 0, 0),
            [9.0, 7.0, 8.0, 2.0, 5.0, 4.0, 6.0, 3.0]
        );
    }

    #[test]
    fn rotate_reference_clears_centre() {
        let m = numbered(3, 3);
        let out = rotate_ring_reference(&m, 0, 0);
        assert_eq!(out[(0, 0)], 0.0);
        assert_eq!(out.sum(), 45.0 - 1.0);
    }
}
