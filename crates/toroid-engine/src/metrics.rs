//! Per-step statistics for the step loop.
//!
//! [`StepStats`] captures grid aggregates and timing for a single step,
//! read from the post-step snapshot.

/// Aggregates and timings collected during a single step.
///
/// All durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepStats {
    /// 1-based index of the step these stats describe.
    pub step: u64,
    /// Sum of all cell values after the step.
    pub total: f64,
    /// Number of cells exactly equal to `1.0` after the step.
    pub live_cells: usize,
    /// Smallest cell value after the step.
    pub min: f64,
    /// Largest cell value after the step.
    pub max: f64,
    /// Wall-clock time for the whole schedule, in microseconds.
    pub total_us: u64,
    /// Per-rule execution times in schedule order: `(name, microseconds)`.
    pub rule_us: Vec<(&'static str, u64)>,
}

impl StepStats {
    /// `true` if every aggregate is finite.
    pub fn is_finite(&self) -> bool {
        self.total.is_finite() && self.min.is_finite() && self.max.is_finite()
    }
}
