//! Pipeline run metrics.
//!
//! `Pipeline::run` is the normal path and records nothing.
//! `Pipeline::run_with_metrics` records per-pass timings and whether each
//! pass changed the text, for the verbose API and the CLI report.

use super::pipeline::Pass;
use std::time::Duration;

// --- Metrics -----------------------------------------------------------------

#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Total elapsed time for [`Pipeline::run_with_metrics`].
    pub total: Duration,
    /// One entry per executed pass, in execution order.
    pub passes: Vec<PassMetrics>,
    /// Time spent in the final whitespace normalization.
    pub normalize: Duration,
}

/// Timing and effect of a single pass.
#[derive(Debug, Clone)]
pub struct PassMetrics {
    pub pass: Pass,
    /// Elapsed time for the pass.
    pub duration: Duration,
    /// Whether the pass output differs from its input.
    pub changed: bool,
    /// Non-empty sentences before the pass.
    pub sentences_before: usize,
    /// Non-empty sentences after the pass.
    pub sentences_after: usize,
}

/// Pipeline output bundled with its metrics.
#[derive(Debug, Clone)]
pub struct RunResult {
    /// Final, whitespace-normalized text.
    pub output: String,
    pub metrics: RunMetrics,
}
