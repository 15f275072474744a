//! Rule schedules and the step loop for Toroid lattices.
//!
//! A [`Stepper`] owns a [`Lattice`](toroid_lattice::Lattice), applies an
//! ordered schedule of [`Rule`]s once per step, threads the rotation phase
//! between steps, and reports a [`StepStats`] for each.
//!
//! Configuration is validated up front through [`StepperConfig`]; a
//! stepper never starts with out-of-range rule parameters.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod metrics;
pub mod rule;
pub mod stepper;

pub use config::{validate_schedule, ConfigError, InitialState, StepperConfig};
pub use metrics::StepStats;
pub use rule::Rule;
pub use stepper::Stepper;
