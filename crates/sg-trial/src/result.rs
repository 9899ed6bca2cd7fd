//! The immutable record produced by one trial.

/// Numeric sentinel used for ticks and final groups of a non-convergent
/// trial when a plain integer is required (CSV rows, batch statistics).
pub const NON_CONVERGENT: i64 = -1;

/// Outcome of one completed trial.
///
/// Built exactly once, by [`Trial::run`][crate::Trial::run], and never
/// mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialResult {
    /// 1-based trial number within its batch.
    pub run:            u64,
    pub size:           usize,
    pub vision:         usize,
    pub tolerance:      f64,
    /// Distinct groups on the freshly randomised lattice.
    pub initial_groups: u64,
    /// Distinct groups at convergence; `None` if the trial was abandoned.
    pub final_groups:   Option<u64>,
    /// Relocations performed before convergence; `None` if abandoned.
    pub ticks:          Option<u64>,
}

impl TrialResult {
    /// `true` if every agent ended up happy within the tick budget.
    #[inline]
    pub fn converged(&self) -> bool {
        self.ticks.is_some()
    }

    /// Ticks as a signed value, `-1` for an abandoned trial.
    #[inline]
    pub fn ticks_value(&self) -> i64 {
        self.ticks.map_or(NON_CONVERGENT, |t| t as i64)
    }

    /// Final group count as a signed value, `-1` for an abandoned trial.
    #[inline]
    pub fn final_groups_value(&self) -> i64 {
        self.final_groups.map_or(NON_CONVERGENT, |g| g as i64)
    }
}
