//! Error types for lattice construction and state loading.
//!
//! Rule application itself is infallible: every coordinate is wrapped into
//! range, so the only failures are shape problems detected up front.

use std::error::Error;
use std::fmt;

/// Errors arising from lattice or matrix construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LatticeError {
    /// A lattice or matrix was requested with a zero dimension.
    InvalidDimensions {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },
    /// Supplied data does not match the expected shape.
    ShapeMismatch {
        /// Expected `(rows, cols)`.
        expected: (usize, usize),
        /// What was supplied, as `(rows, cols)`. For flat data this is
        /// `(1, len)`.
        actual: (usize, usize),
    },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { rows, cols } => {
                write!(
                    f,
                    "invalid lattice dimensions {rows}x{cols}: both must be at least 1"
                )
            }
            Self::ShapeMismatch { expected, actual } => {
                write!(
                    f,
                    "shape mismatch: expected {}x{}, got {}x{}",
                    expected.0, expected.1, actual.0, actual.1
                )
            }
        }
    }
}

impl Error for LatticeError {}
