//! Serializable suite reports and baseline comparison.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::HarnessError;
use crate::timing::TimingStats;

/// Current report format version.
pub const REPORT_VERSION: u32 = 1;

/// One timed suite cell: a kernel at one input size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurement {
    /// Kernel display name.
    pub kernel: String,
    /// Matrix dimension N or decimal operand length.
    pub size: usize,
    /// Flattened input length (N*N entries, or digit count).
    pub input_len: usize,
    pub mean_ns: u64,
    pub median_ns: u64,
    pub min_ns: u64,
    pub max_ns: u64,
    pub trials: u32,
    /// Whether this cell passed cross-validation.
    pub verified: bool,
}

impl Measurement {
    /// Build a measurement from timing statistics.
    #[must_use]
    pub fn from_stats(
        kernel: impl Into<String>,
        size: usize,
        input_len: usize,
        stats: &TimingStats,
        verified: bool,
    ) -> Self {
        Self {
            kernel: kernel.into(),
            size,
            input_len,
            mean_ns: nanos(stats.mean),
            median_ns: nanos(stats.median),
            min_ns: nanos(stats.min),
            max_ns: nanos(stats.max),
            trials: stats.samples,
            verified,
        }
    }
}

fn nanos(d: Duration) -> u64 {
    u64::try_from(d.as_nanos()).unwrap_or(u64::MAX)
}

/// A full suite run, serializable for later comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteReport {
    /// Report format version for compatibility checking.
    pub version: u32,
    /// Seed the inputs were generated from.
    pub seed: u64,
    pub measurements: Vec<Measurement>,
}

impl SuiteReport {
    /// Empty report for the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            version: REPORT_VERSION,
            seed,
            measurements: Vec::new(),
        }
    }

    /// Check if this report was written by the current format version.
    #[must_use]
    pub fn is_compatible(&self) -> bool {
        self.version == REPORT_VERSION
    }

    /// Write the report as pretty JSON.
    pub fn save_to_path(&self, path: &Path) -> Result<(), HarnessError> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| HarnessError::Report(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load a report, rejecting unknown format versions.
    pub fn load_from_path(path: &Path) -> Result<Self, HarnessError> {
        let content = std::fs::read_to_string(path)?;
        let report: Self =
            serde_json::from_str(&content).map_err(|e| HarnessError::Report(e.to_string()))?;
        if !report.is_compatible() {
            return Err(HarnessError::Report(format!(
                "report version {} is not supported (current: {REPORT_VERSION})",
                report.version
            )));
        }
        Ok(report)
    }
}

/// Median-time ratio of one suite cell against a baseline run.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub kernel: String,
    pub size: usize,
    pub baseline_median_ns: u64,
    pub current_median_ns: u64,
    /// baseline / current; above 1.0 means the current run is faster.
    pub speedup: f64,
}

/// Join two reports on (kernel, size) and compute median-time speedups.
/// Cells present in only one report are skipped.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn compare(current: &SuiteReport, baseline: &SuiteReport) -> Vec<Comparison> {
    let mut comparisons = Vec::new();
    for m in &current.measurements {
        let Some(base) = baseline
            .measurements
            .iter()
            .find(|b| b.kernel == m.kernel && b.size == m.size)
        else {
            continue;
        };
        let speedup = if m.median_ns == 0 {
            0.0
        } else {
            base.median_ns as f64 / m.median_ns as f64
        };
        comparisons.push(Comparison {
            kernel: m.kernel.clone(),
            size: m.size,
            baseline_median_ns: base.median_ns,
            current_median_ns: m.median_ns,
            speedup,
        });
    }
    comparisons
}
