//! Test utilities for Toroid development.
//!
//! Provides grid fixtures ([`fixtures`]) and straightforward reference
//! implementations of the lattice rules ([`reference`]) that integration
//! tests compare the engine against. Everything here works on plain
//! [`Matrix`] values so it can be used from any crate without pulling in
//! the lattice itself.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod reference;

pub use fixtures::{checkerboard, from_rows, numbered, single_cell, uniform};
pub use reference::{
    diffusion_reference, ring_values, rotate_ring_reference, threshold_reference,
};

use toroid_core::Matrix;

/// Assert two matrices have the same shape and agree cell-wise within `tol`.
///
/// # Panics
///
/// Panics with the first differing coordinate.
pub fn assert_close(actual: &Matrix<f64>, expected: &Matrix<f64>, tol: f64) {
    assert_eq!(actual.shape(), expected.shape(), "shape mismatch");
    for ((rc, &a), &e) in actual.iter_cells().zip(expected.as_slice()) {
        assert!(
            (a - e).abs() <= tol,
            "cell {rc:?}: got {a}, expected {e} (tolerance {tol})"
        );
    }
}
