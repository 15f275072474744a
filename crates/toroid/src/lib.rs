//! Toroid: stochastic cellular automata on a toroidal lattice.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Toroid sub-crates. For most users, adding `toroid` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use toroid::prelude::*;
//!
//! // Drive the lattice directly.
//! let mut lattice = Lattice::seeded(32, 32, 7).unwrap();
//! lattice.randomize();
//! let mut shift = 0;
//! lattice.scattering(0.2);
//! lattice.threshold_growth(4.0);
//! lattice.rotate_block(&mut shift);
//! assert_eq!(shift, 1);
//! assert!(lattice.snapshot().is_binary());
//!
//! // Or hand a schedule to a stepper.
//! let config = StepperConfig {
//!     rows: 32,
//!     cols: 32,
//!     seed: Some(7),
//!     initial: InitialState::Random,
//!     schedule: vec![Rule::Diffusion { c: 0.1 }, Rule::Toggle { gamma: 0.01 }],
//! };
//! let mut stepper = Stepper::new(config).unwrap();
//! let stats = stepper.step();
//! assert_eq!(stats.step, 1);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `toroid-core` | `Matrix`, `LatticeError` |
//! | [`space`] | `toroid-space` | Torus addressing and neighbourhood tables |
//! | [`arena`] | `toroid-arena` | Double-buffered cell storage |
//! | [`lattice`] | `toroid-lattice` | The lattice and its update rules |
//! | [`engine`] | `toroid-engine` | Rule schedules, configuration, the step loop |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value and error types (`toroid-core`).
pub use toroid_core as types;

/// Torus addressing and neighbourhood tables (`toroid-space`).
///
/// [`space::Torus`] maps signed coordinates onto the grid;
/// [`space::MOORE_RING`] and [`space::ORTHOGONAL`] fix neighbour order.
pub use toroid_space as space;

/// Double-buffered cell storage (`toroid-arena`).
pub use toroid_arena as arena;

/// The lattice and its update rules (`toroid-lattice`).
pub use toroid_lattice as lattice;

/// Rule schedules, configuration, and the step loop (`toroid-engine`).
///
/// [`engine::Stepper`] applies a validated [`engine::StepperConfig`]
/// schedule once per step.
pub use toroid_engine as engine;

/// Common imports for typical Toroid usage.
///
/// ```rust
/// use toroid::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use toroid_core::{LatticeError, Matrix};

    // Space
    pub use toroid_space::{Neighbourhood, Torus, MOORE_RING, ORTHOGONAL};

    // Lattice
    pub use toroid_lattice::{Lattice, MAX_STABLE_DIFFUSION};

    // Engine
    pub use toroid_engine::{
        ConfigError, InitialState, Rule, StepStats, Stepper, StepperConfig,
    };
}
