use std::path::PathBuf;

use serde::Serialize;

use ndc_model::Direction;

/// Result of one batch run, returned to `main` for summary rendering and
/// optionally serialized as the JSON report.
#[derive(Debug, Serialize)]
pub struct BatchResult {
    pub input: PathBuf,
    /// `None` on a dry run.
    pub output: Option<PathBuf>,
    pub direction: Direction,
    /// Resolved source column header.
    pub column: String,
    /// Header of the appended result column.
    pub output_column: String,
    pub tally: RowTally,
    pub samples: Vec<SamplePair>,
    pub warnings: Vec<RowWarning>,
}

impl BatchResult {
    pub fn has_failures(&self) -> bool {
        self.tally.failed > 0
    }
}

/// Per-row outcome counters for a batch. Plain values, accumulated by the
/// pipeline and returned; the engine itself keeps no counters.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct RowTally {
    pub total: usize,
    /// Rows that produced a converted value.
    pub converted: usize,
    pub certain: usize,
    pub heuristic: usize,
    /// Rows the classifier could not decide (converted only under --assume).
    pub ambiguous: usize,
    /// Rows already at the target digit count, passed through unchanged.
    pub already_target: usize,
    pub empty: usize,
    /// Rows left unconverted: guard failures and unresolved ambiguity.
    pub failed: usize,
}

/// A before/after pair kept for the summary sample table.
#[derive(Debug, Clone, Serialize)]
pub struct SamplePair {
    pub row: usize,
    pub before: String,
    pub after: String,
}

/// A non-fatal per-row problem surfaced after the summary.
#[derive(Debug, Clone, Serialize)]
pub struct RowWarning {
    pub row: usize,
    pub value: String,
    pub reason: String,
}
