//! Benchmark profiles for the Toroid lattice engine.
//!
//! Provides pre-built [`StepperConfig`] profiles for benchmarks and examples:
//!
//! - [`reference_profile`]: 128x128 torus (16K cells) running scatter-and-grow
//! - [`stress_profile`]: 512x512 torus (~262K cells) running every rule
//! - [`seeded_lattice`]: a randomized lattice for single-rule benchmarks

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use toroid_engine::{InitialState, Rule, StepperConfig};
use toroid_lattice::Lattice;

/// Build a reference benchmark profile: 128x128 torus (16K cells).
///
/// Schedule: Scattering(0.2) → ThresholdGrowth(4).
pub fn reference_profile(seed: u64) -> StepperConfig {
    StepperConfig {
        rows: 128,
        cols: 128,
        seed: Some(seed),
        initial: InitialState::Random,
        schedule: vec![
            Rule::Scattering { gamma: 0.2 },
            Rule::ThresholdGrowth { number: 4.0 },
        ],
    }
}

/// Build a stress benchmark profile: 512x512 torus (~262K cells).
///
/// Runs every rule except `Randomize` once per step.
pub fn stress_profile(seed: u64) -> StepperConfig {
    StepperConfig {
        rows: 512,
        cols: 512,
        seed: Some(seed),
        initial: InitialState::Random,
        schedule: vec![
            Rule::Scattering { gamma: 0.2 },
            Rule::ThresholdGrowth { number: 4.0 },
            Rule::Toggle { gamma: 0.01 },
            Rule::RotateBlock,
            Rule::Heat { gamma: 0.05, q: 0.5 },
            Rule::Diffusion { c: 0.1 },
        ],
    }
}

/// A `rows`x`cols` lattice filled with seeded fair 0/1 values.
///
/// # Panics
///
/// Panics if either dimension is zero.
pub fn seeded_lattice(rows: usize, cols: usize, seed: u64) -> Lattice {
    let mut lattice = Lattice::seeded(rows, cols, seed).expect("benchmark dimensions are non-zero");
    lattice.randomize();
    lattice
}
