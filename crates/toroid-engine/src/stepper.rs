//! The step loop.
//!
//! [`Stepper`] owns a [`Lattice`], a rule schedule, and the rotation phase.
//! Each [`step()`](Stepper::step) applies the whole schedule once, in
//! order, and records a [`StepStats`] from the resulting grid.
//!
//! # Example
//!
//! ```
//! use toroid_engine::{InitialState, Rule, Stepper, StepperConfig};
//!
//! let config = StepperConfig {
//!     rows: 16,
//!     cols: 16,
//!     seed: Some(1),
//!     initial: InitialState::Random,
//!     schedule: vec![
//!         Rule::Scattering { gamma: 0.2 },
//!         Rule::ThresholdGrowth { number: 4.0 },
//!     ],
//! };
//! let mut stepper = Stepper::new(config).unwrap();
//! let stats = stepper.run(3);
//! assert_eq!(stats.len(), 3);
//! assert_eq!(stepper.steps_taken(), 3);
//! ```

use std::time::Instant;

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use toroid_core::Matrix;
use toroid_lattice::Lattice;

use crate::config::{validate_schedule, ConfigError, InitialState, StepperConfig};
use crate::metrics::StepStats;
use crate::rule::Rule;

/// Drives a lattice through a fixed rule schedule.
#[derive(Debug)]
pub struct Stepper<R = ChaCha8Rng> {
    lattice: Lattice<R>,
    schedule: Vec<Rule>,
    shift: i64,
    steps: u64,
    seed: Option<u64>,
    last: Option<StepStats>,
}

impl Stepper<ChaCha8Rng> {
    /// Create a stepper from a [`StepperConfig`].
    ///
    /// Validates the configuration, builds a seeded lattice (drawing a
    /// seed when none is configured), and applies the initial state.
    pub fn new(config: StepperConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random::<u64>);
        let mut lattice = Lattice::seeded(config.rows, config.cols, seed)?;
        if config.initial == InitialState::Random {
            lattice.randomize();
        }
        tracing::info!(
            rows = config.rows,
            cols = config.cols,
            seed,
            rules = config.schedule.len(),
            "stepper ready"
        );
        Ok(Self {
            lattice,
            schedule: config.schedule,
            shift: 0,
            steps: 0,
            seed: Some(seed),
            last: None,
        })
    }
}

impl<R: Rng> Stepper<R> {
    /// Wrap an externally prepared lattice.
    ///
    /// The lattice is used as-is; only the schedule is validated.
    pub fn from_lattice(lattice: Lattice<R>, schedule: Vec<Rule>) -> Result<Self, ConfigError> {
        validate_schedule(&schedule)?;
        tracing::info!(
            rows = lattice.rows(),
            cols = lattice.cols(),
            rules = schedule.len(),
            "stepper ready"
        );
        Ok(Self {
            lattice,
            schedule,
            shift: 0,
            steps: 0,
            seed: None,
            last: None,
        })
    }

    /// Apply the schedule once and return the resulting stats.
    pub fn step(&mut self) -> StepStats {
        let started = Instant::now();
        let mut rule_us = Vec::with_capacity(self.schedule.len());
        for rule in &self.schedule {
            let t = Instant::now();
            rule.apply(&mut self.lattice, &mut self.shift);
            let us = t.elapsed().as_micros() as u64;
            tracing::trace!(rule = rule.name(), us, shift = self.shift, "rule applied");
            rule_us.push((rule.name(), us));
        }
        self.steps += 1;

        let snap = self.lattice.snapshot();
        let stats = StepStats {
            step: self.steps,
            total: snap.sum(),
            live_cells: snap.live_count(),
            min: snap.min(),
            max: snap.max(),
            total_us: started.elapsed().as_micros() as u64,
            rule_us,
        };
        if !stats.is_finite() {
            tracing::warn!(
                step = stats.step,
                total = stats.total,
                min = stats.min,
                max = stats.max,
                "lattice holds non-finite values"
            );
        }
        tracing::debug!(
            step = stats.step,
            total = stats.total,
            live = stats.live_cells,
            us = stats.total_us,
            "step complete"
        );
        self.last = Some(stats.clone());
        stats
    }

    /// Run `steps` steps, returning the stats of each.
    pub fn run(&mut self, steps: usize) -> Vec<StepStats> {
        (0..steps).map(|_| self.step()).collect()
    }

    /// Step until `predicate` holds for a step's stats, or `max_steps`
    /// have run. Returns the stats of every step taken.
    pub fn run_until<F>(&mut self, max_steps: usize, mut predicate: F) -> Vec<StepStats>
    where
        F: FnMut(&StepStats) -> bool,
    {
        let mut out = Vec::new();
        for _ in 0..max_steps {
            let stats = self.step();
            let done = predicate(&stats);
            out.push(stats);
            if done {
                break;
            }
        }
        out
    }
}

impl<R> Stepper<R> {
    /// The lattice being stepped.
    pub fn lattice(&self) -> &Lattice<R> {
        &self.lattice
    }

    /// Mutable access to the lattice between steps.
    pub fn lattice_mut(&mut self) -> &mut Lattice<R> {
        &mut self.lattice
    }

    /// Current grid contents.
    pub fn snapshot(&self) -> Matrix<f64> {
        self.lattice.snapshot()
    }

    /// The schedule applied on every step.
    pub fn schedule(&self) -> &[Rule] {
        &self.schedule
    }

    /// Current rotation phase.
    pub fn shift(&self) -> i64 {
        self.shift
    }

    /// Number of completed steps.
    pub fn steps_taken(&self) -> u64 {
        self.steps
    }

    /// Seed the lattice RNG was built from, if this stepper created it.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Stats of the most recent step, if any.
    pub fn last_stats(&self) -> Option<&StepStats> {
        self.last.as_ref()
    }
}
