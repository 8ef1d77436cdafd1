//! Result tables for suite measurements and baseline comparisons.

use std::time::Duration;

use mulbench_harness::{Comparison, Measurement};

use crate::output::{format_duration, format_number};

/// Renders suite results to the terminal.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Print one table row per measurement. Verbose mode adds the min/max
    /// spread and the trial count.
    pub fn present_measurements(&self, title: &str, measurements: &[Measurement]) {
        if self.quiet || measurements.is_empty() {
            return;
        }

        println!("\n{title}");
        if self.verbose {
            println!(
                "  {:<10} {:>8} {:>12} {:>12} {:>12} {:>12} {:>7} {:>9}",
                "Kernel", "Size", "Median", "Mean", "Min", "Max", "Trials", "Verified"
            );
        } else {
            println!(
                "  {:<10} {:>8} {:>12} {:>12} {:>9}",
                "Kernel", "Size", "Median", "Mean", "Verified"
            );
        }
        println!("{:-<80}", "");

        for m in measurements {
            let verified = if m.verified { "yes" } else { "no" };
            if self.verbose {
                println!(
                    "  {:<10} {:>8} {:>12} {:>12} {:>12} {:>12} {:>7} {:>9}",
                    m.kernel,
                    format_number(m.size as u64),
                    format_duration(Duration::from_nanos(m.median_ns)),
                    format_duration(Duration::from_nanos(m.mean_ns)),
                    format_duration(Duration::from_nanos(m.min_ns)),
                    format_duration(Duration::from_nanos(m.max_ns)),
                    m.trials,
                    verified,
                );
            } else {
                println!(
                    "  {:<10} {:>8} {:>12} {:>12} {:>9}",
                    m.kernel,
                    format_number(m.size as u64),
                    format_duration(Duration::from_nanos(m.median_ns)),
                    format_duration(Duration::from_nanos(m.mean_ns)),
                    verified,
                );
            }
        }
    }

    /// Print median-time speedups against a baseline run.
    pub fn present_comparisons(&self, comparisons: &[Comparison]) {
        if self.quiet {
            return;
        }
        if comparisons.is_empty() {
            println!("\nNo overlapping cells with the baseline.");
            return;
        }

        println!("\nBaseline comparison:");
        println!(
            "  {:<10} {:>8} {:>12} {:>12} {:>9}",
            "Kernel", "Size", "Baseline", "Current", "Speedup"
        );
        println!("{:-<60}", "");
        for c in comparisons {
            println!(
                "  {:<10} {:>8} {:>12} {:>12} {:>8.2}x",
                c.kernel,
                format_number(c.size as u64),
                format_duration(Duration::from_nanos(c.baseline_median_ns)),
                format_duration(Duration::from_nanos(c.current_median_ns)),
                c.speedup,
            );
        }
    }

    /// Print an error to stderr.
    pub fn present_error(&self, error: &str) {
        eprintln!("Error: {error}");
    }
}
