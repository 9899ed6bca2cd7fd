//! Running aggregation and end-of-batch summary statistics.
//!
//! Every metric is collected as `i64` so the `-1` sentinel of an abandoned
//! trial enters the averages as-is.  Sums are accumulated in `i128`, which
//! makes the summary independent of the order results arrived in: a serial
//! and a parallel run of the same seed report bit-identical statistics.

use std::fmt;

use sg_trial::TrialResult;

// ── Stat ──────────────────────────────────────────────────────────────────────

/// Mean and sample standard deviation of one metric.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stat {
    pub mean: f64,
    /// Sample standard deviation (`n - 1` denominator); `0.0` for `n < 2`.
    pub sd:   f64,
}

impl Stat {
    /// Summarise `values`.  An empty slice yields all zeros.
    pub fn from_values(values: &[i64]) -> Self {
        let n = values.len() as i128;
        if n == 0 {
            return Stat::default();
        }
        let sum: i128 = values.iter().map(|&v| v as i128).sum();
        let sum_sq: i128 = values.iter().map(|&v| (v as i128) * (v as i128)).sum();

        let mean = sum as f64 / n as f64;
        let sd = if n < 2 {
            0.0
        } else {
            // n·Σx² − (Σx)² is exact in integers and never negative.
            let numerator = n * sum_sq - sum * sum;
            (numerator as f64 / (n * (n - 1)) as f64).sqrt()
        };
        Stat { mean, sd }
    }
}

// ── BatchSummary ──────────────────────────────────────────────────────────────

/// Statistics over every trial of a batch, computed once at the end.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchSummary {
    /// Trials requested (and run).
    pub runs:           u64,
    /// Trials that converged.
    pub successes:      u64,
    pub ticks:          Stat,
    pub initial_groups: Stat,
    pub final_groups:   Stat,
}

impl BatchSummary {
    /// `100 × successes / runs`.
    #[inline]
    pub fn success_percent(&self) -> f64 {
        if self.runs == 0 {
            return 0.0;
        }
        100.0 * self.successes as f64 / self.runs as f64
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary statistics:")?;
        writeln!(
            f,
            "{} runs reach equilibrium ({:.1}%) in {:.1} ticks (s.d.: {:.1})",
            self.successes,
            self.success_percent(),
            self.ticks.mean,
            self.ticks.sd,
        )?;
        writeln!(
            f,
            "{:.1} average initial groups (s.d.: {:.1})",
            self.initial_groups.mean, self.initial_groups.sd,
        )?;
        write!(
            f,
            "{:.1} average final groups (s.d.: {:.1})",
            self.final_groups.mean, self.final_groups.sd,
        )
    }
}

// ── Aggregator ────────────────────────────────────────────────────────────────

/// Accumulates per-trial metrics.  Owned by the aggregation loop only.
#[derive(Debug, Default)]
pub struct Aggregator {
    successes:      u64,
    ticks:          Vec<i64>,
    initial_groups: Vec<i64>,
    final_groups:   Vec<i64>,
}

impl Aggregator {
    pub fn with_capacity(runs: usize) -> Self {
        Self {
            successes:      0,
            ticks:          Vec::with_capacity(runs),
            initial_groups: Vec::with_capacity(runs),
            final_groups:   Vec::with_capacity(runs),
        }
    }

    pub fn record(&mut self, result: &TrialResult) {
        if result.converged() {
            self.successes += 1;
        }
        self.ticks.push(result.ticks_value());
        self.initial_groups.push(result.initial_groups as i64);
        self.final_groups.push(result.final_groups_value());
    }

    /// Trials recorded so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    pub fn summary(&self, runs: u64) -> BatchSummary {
        BatchSummary {
            runs,
            successes:      self.successes,
            ticks:          Stat::from_values(&self.ticks),
            initial_groups: Stat::from_values(&self.initial_groups),
            final_groups:   Stat::from_values(&self.final_groups),
        }
    }
}
