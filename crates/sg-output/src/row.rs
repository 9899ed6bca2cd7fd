//! The flat row written once per completed trial.

use sg_trial::TrialResult;

/// Column names of the result log, in field order.
pub const HEADER: [&str; 7] = [
    "run", "size", "vision", "tolerance", "init.blocks", "final.blocks", "ticks",
];

/// One line of the result log.
///
/// `final_blocks` and `ticks` carry `-1` for a trial that was abandoned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialRow {
    pub run:          u64,
    pub size:         usize,
    pub vision:       usize,
    pub tolerance:    f64,
    pub init_blocks:  u64,
    pub final_blocks: i64,
    pub ticks:        i64,
}

impl TrialRow {
    /// Fields rendered as text.  Tolerance keeps six decimals.
    pub fn to_record(&self) -> [String; 7] {
        [
            self.run.to_string(),
            self.size.to_string(),
            self.vision.to_string(),
            format!("{:.6}", self.tolerance),
            self.init_blocks.to_string(),
            self.final_blocks.to_string(),
            self.ticks.to_string(),
        ]
    }
}

impl From<&TrialResult> for TrialRow {
    fn from(r: &TrialResult) -> Self {
        Self {
            run:          r.run,
            size:         r.size,
            vision:       r.vision,
            tolerance:    r.tolerance,
            init_blocks:  r.initial_groups,
            final_blocks: r.final_groups_value(),
            ticks:        r.ticks_value(),
        }
    }
}
