//! Core types for the Toroid lattice engine.
//!
//! This crate holds the pieces every other Toroid crate agrees on:
//! the [`Matrix`] snapshot type handed to renderers and statistics, and
//! the [`LatticeError`] taxonomy reported at construction time.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod matrix;

pub use error::LatticeError;
pub use matrix::Matrix;
