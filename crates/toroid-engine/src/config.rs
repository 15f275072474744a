//! Stepper configuration, validation, and error types.
//!
//! [`StepperConfig`] is the builder input for a [`Stepper`](crate::Stepper).
//! [`validate()`](StepperConfig::validate) checks every structural invariant
//! up front so a run never starts with a schedule it cannot honour.

use std::error::Error;
use std::fmt;

use toroid_core::LatticeError;
use toroid_space::Torus;

use crate::rule::Rule;

// ── InitialState ───────────────────────────────────────────────────

/// How the lattice is filled before the first step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InitialState {
    /// Every cell starts at `0.0`.
    Zeroed,
    /// Independent fair 0/1 values drawn from the lattice RNG.
    #[default]
    Random,
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`StepperConfig::validate()`].
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Lattice construction failed.
    Lattice(LatticeError),
    /// The schedule has no rules.
    EmptySchedule,
    /// A rule's parameters are out of range.
    InvalidRule {
        /// Position of the rule in the schedule.
        index: usize,
        /// Name of the offending rule.
        rule: &'static str,
        /// Description of the validation failure.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lattice(e) => write!(f, "lattice: {e}"),
            Self::EmptySchedule => write!(f, "schedule must contain at least one rule"),
            Self::InvalidRule {
                index,
                rule,
                reason,
            } => write!(f, "rule {index} ({rule}): {reason}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Lattice(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LatticeError> for ConfigError {
    fn from(e: LatticeError) -> Self {
        Self::Lattice(e)
    }
}

// ── StepperConfig ──────────────────────────────────────────────────

/// Complete configuration for constructing a [`Stepper`](crate::Stepper).
///
/// The default is a 64×64 random lattice driven by scattering followed by
/// threshold growth at 4, seeded from entropy.
#[derive(Clone, Debug, PartialEq)]
pub struct StepperConfig {
    /// Number of lattice rows. Must be at least 1.
    pub rows: usize,
    /// Number of lattice columns. Must be at least 1.
    pub cols: usize,
    /// RNG seed. `None` draws one from the thread-local generator.
    pub seed: Option<u64>,
    /// Fill applied before the first step.
    pub initial: InitialState,
    /// Rules applied in order on every step.
    pub schedule: Vec<Rule>,
}

impl Default for StepperConfig {
    fn default() -> Self {
        Self {
            rows: 64,
            cols: 64,
            seed: None,
            initial: InitialState::Random,
            schedule: vec![
                Rule::Scattering { gamma: 0.2 },
                Rule::ThresholdGrowth { number: 4.0 },
            ],
        }
    }
}

impl StepperConfig {
    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Both dimensions non-zero.
        Torus::new(self.rows, self.cols)?;
        // 2. Schedule non-empty with in-range parameters.
        validate_schedule(&self.schedule)
    }
}

/// Check that `schedule` is non-empty and every rule validates.
pub fn validate_schedule(schedule: &[Rule]) -> Result<(), ConfigError> {
    if schedule.is_empty() {
        return Err(ConfigError::EmptySchedule);
    }
    for (index, rule) in schedule.iter().enumerate() {
        rule.validate()
            .map_err(|reason| ConfigError::InvalidRule {
                index,
                rule: rule.name(),
                reason,
            })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> StepperConfig {
        StepperConfig {
            rows: 8,
            cols: 8,
            seed: Some(42),
            initial: InitialState::Zeroed,
            schedule: vec![Rule::Diffusion { c: 0.1 }, Rule::RotateBlock],
        }
    }

    #[test]
    fn validate_valid_config_succeeds() {
        assert!(valid_config().validate().is_ok());
        assert!(StepperConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_zero_rows_fails() {
        let mut cfg = valid_config();
        cfg.rows = 0;
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::Lattice(LatticeError::InvalidDimensions {
                rows: 0,
                cols: 8
            }))
        );
    }

    #[test]
    fn validate_empty_schedule_fails() {
        let mut cfg = valid_config();
        cfg.schedule.clear();
        assert_eq!(cfg.validate(), Err(ConfigError::EmptySchedule));
    }

    #[test]
    fn validate_reports_offending_rule_index() {
        let mut cfg = valid_config();
        cfg.schedule.push(Rule::Toggle { gamma: 2.0 });
        match cfg.validate() {
            Err(ConfigError::InvalidRule { index, rule, .. }) => {
                assert_eq!(index, 2);
                assert_eq!(rule, "toggle");
            }
            other => panic!("expected InvalidRule, got {other:?}"),
        }
    }

    #[test]
    fn error_display_and_source() {
        let err = ConfigError::from(LatticeError::InvalidDimensions { rows: 0, cols: 0 });
        assert!(err.to_string().starts_with("lattice: "));
        assert!(err.source().is_some());

        let err = ConfigError::InvalidRule {
            index: 1,
            rule: "heat",
            reason: "bad".to_string(),
        };
        assert_eq!(err.to_string(), "rule 1 (heat): bad");
        assert!(err.source().is_none());
    }

    #[test]
    fn default_initial_state_is_random() {
        assert_eq!(InitialState::default(), InitialState::Random);
    }
}
