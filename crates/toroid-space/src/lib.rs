//! Toroidal lattice geometry for the Toroid engine.
//!
//! [`Torus`] resolves signed `(row, col)` coordinates onto a wrap-around
//! grid and maps them to row-major buffer indices. [`Neighbourhood`] holds
//! the fixed offset tables every rule walks: the 8-cell Moore ring and the
//! 4-cell orthogonal cross.
//!
//! ```
//! use toroid_space::{Torus, MOORE_RING};
//!
//! let torus = Torus::new(4, 4).unwrap();
//! // North-west of the origin wraps to the opposite corner.
//! assert_eq!(torus.offset(0, 0, MOORE_RING[0]), (3, 3));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod neighbourhood;
pub mod torus;

pub use neighbourhood::{Neighbourhood, Offset, MOORE_RING, ORTHOGONAL};
pub use torus::{wrap, Torus};
