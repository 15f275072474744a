//! The rule vocabulary a [`Stepper`](crate::Stepper) schedules.
//!
//! [`Rule`] is a plain value naming one lattice operation together with its
//! parameters. [`Rule::apply`] dispatches to the matching
//! [`Lattice`] method; [`Rule::validate`] checks the parameters ahead of
//! time so a schedule can be rejected before any step runs.

use rand::Rng;
use toroid_lattice::{Lattice, MAX_STABLE_DIFFUSION};

/// One lattice update with its parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Rule {
    /// Fill the grid with independent fair 0/1 values.
    Randomize,
    /// Add `q` to each cell in place with probability `gamma`.
    Heat {
        /// Per-cell selection probability.
        gamma: f64,
        /// Amount added to a selected cell.
        q: f64,
    },
    /// Cell becomes 1 when live Moore neighbours plus its own value exceed
    /// `number`, else 0.
    ThresholdGrowth {
        /// Strict threshold.
        number: f64,
    },
    /// Rotate the ring around every anchor cell by one position.
    RotateBlock,
    /// One explicit step of orthogonal-neighbour diffusion.
    Diffusion {
        /// Diffusion coefficient.
        c: f64,
    },
    /// Swap selected cells with a uniformly chosen Moore neighbour.
    Scattering {
        /// Per-cell selection probability.
        gamma: f64,
    },
    /// Flip selected cells between 0 and 1.
    Toggle {
        /// Per-cell selection probability.
        gamma: f64,
    },
}

impl Rule {
    /// Short stable name, used in logs and per-rule timings.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Randomize => "randomize",
            Self::Heat { .. } => "heat",
            Self::ThresholdGrowth { .. } => "threshold_growth",
            Self::RotateBlock => "rotate_block",
            Self::Diffusion { .. } => "diffusion",
            Self::Scattering { .. } => "scattering",
            Self::Toggle { .. } => "toggle",
        }
    }

    /// Check the parameters, returning a description of the first problem.
    pub fn validate(&self) -> Result<(), String> {
        match *self {
            Self::Randomize | Self::RotateBlock => Ok(()),
            Self::Heat { gamma, q } => {
                check_probability(gamma)?;
                if !q.is_finite() {
                    return Err(format!("heat amount must be finite, got {q}"));
                }
                Ok(())
            }
            Self::ThresholdGrowth { number } => {
                if !number.is_finite() {
                    return Err(format!("threshold must be finite, got {number}"));
                }
                Ok(())
            }
            Self::Diffusion { c } => {
                if !c.is_finite() || !(0.0..=MAX_STABLE_DIFFUSION).contains(&c) {
                    return Err(format!(
                        "diffusion coefficient must be in [0, {MAX_STABLE_DIFFUSION}], got {c}"
                    ));
                }
                Ok(())
            }
            Self::Scattering { gamma } | Self::Toggle { gamma } => check_probability(gamma),
        }
    }

    /// Run this rule once on `lattice`.
    ///
    /// `shift` is the rotation phase; only [`Rule::RotateBlock`] reads or
    /// advances it.
    pub fn apply<R: Rng>(&self, lattice: &mut Lattice<R>, shift: &mut i64) {
        match *self {
            Self::Randomize => lattice.randomize(),
            Self::Heat { gamma, q } => lattice.heat(gamma, q),
            Self::ThresholdGrowth { number } => lattice.threshold_growth(number),
            Self::RotateBlock => lattice.rotate_block(shift),
            Self::Diffusion { c } => lattice.diffusion(c),
            Self::Scattering { gamma } => lattice.scattering(gamma),
            Self::Toggle { gamma } => lattice.toggle(gamma),
        }
    }
}

fn check_probability(gamma: f64) -> Result<(), String> {
    if !gamma.is_finite() || !(0.0..=1.0).contains(&gamma) {
        return Err(format!("probability must be in [0, 1], got {gamma}"));
    }
    Ok(())
}
