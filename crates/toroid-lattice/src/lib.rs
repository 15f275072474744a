//! Toroidal lattice and its update rules.
//!
//! [`Lattice`] owns an `M x N` grid of `f64` cells on a torus, the buffers
//! that keep each rule's reads and writes apart, and the random source the
//! stochastic rules draw from. Every rule is a method on the lattice:
//!
//! | Rule | Kind | Reads | Writes |
//! |------|------|-------|--------|
//! | [`randomize`](Lattice::randomize) | stochastic | none | `current` in place |
//! | [`heat`](Lattice::heat) | stochastic, point-wise | `current` | `current` in place |
//! | [`threshold_growth`](Lattice::threshold_growth) | deterministic | Moore ring | `next`, commit |
//! | [`rotate_block`](Lattice::rotate_block) | deterministic | Moore ring of anchors | zeroed `next`, commit |
//! | [`diffusion`](Lattice::diffusion) | deterministic | orthogonal cross | `next`, commit |
//! | [`scattering`](Lattice::scattering) | stochastic, cross-cell | Moore ring | copied `next`, commit |
//! | [`toggle`](Lattice::toggle) | stochastic, point-wise | `current` | copied `next`, commit |
//!
//! Rules never fail: all indexing is wrapped onto the torus. Parameter
//! sanity (probabilities in `[0, 1]`, a stable diffusion coefficient) is the
//! caller's responsibility.
//!
//! # Example
//!
//! ```
//! use toroid_lattice::Lattice;
//!
//! let mut lattice = Lattice::seeded(32, 32, 7).unwrap();
//! lattice.randomize();
//! lattice.scattering(0.2);
//! lattice.threshold_growth(4.0);
//! let total = lattice.snapshot().sum();
//! assert!(total >= 0.0 && total <= 32.0 * 32.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod diffusion;
pub mod heat;
pub mod lattice;
pub mod rotate;
pub mod scattering;
pub mod threshold;
pub mod toggle;

pub use diffusion::MAX_STABLE_DIFFUSION;
pub use lattice::Lattice;
pub use rotate::is_anchor;
pub use toroid_arena::Staging;
