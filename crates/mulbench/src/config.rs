//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;

use mulbench_harness::{DigitRange, EntryRange, SuiteConfig};

/// Benchmark harness for multiplication kernels, with cross-validation.
#[derive(Parser, Debug)]
#[command(name = "mulbench", version)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Suite to run: matrix, decimal, or all.
    #[arg(long, default_value = "all", env = "MULBENCH_SUITE")]
    pub suite: String,

    /// Matrix kernel to run: naive, strassen, or all.
    #[arg(short, long, default_value = "all")]
    pub kernel: String,

    /// Square matrix sizes to sweep (comma-separated).
    #[arg(long, value_delimiter = ',')]
    pub sizes: Vec<usize>,

    /// Decimal operand lengths to sweep (comma-separated).
    #[arg(long, value_delimiter = ',')]
    pub digits: Vec<usize>,

    /// Minimum matrix entry value.
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub entry_min: i64,

    /// Maximum matrix entry value.
    #[arg(long, default_value = "10", allow_negative_numbers = true)]
    pub entry_max: i64,

    /// Minimum decimal digit.
    #[arg(long, default_value = "0")]
    pub digit_min: u8,

    /// Maximum decimal digit.
    #[arg(long, default_value = "9")]
    pub digit_max: u8,

    /// Measured trials per suite cell.
    #[arg(short, long, default_value = "5")]
    pub trials: u32,

    /// Warmup invocations per suite cell.
    #[arg(short, long, default_value = "2")]
    pub warmup: u32,

    /// Input generator seed.
    #[arg(long, default_value = "42", env = "MULBENCH_SEED")]
    pub seed: u64,

    /// Cross-validate kernel results before timing.
    #[arg(long)]
    pub verify: bool,

    /// Save the report as JSON.
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Compare against a baseline report.
    #[arg(long)]
    pub baseline: Option<PathBuf>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (no tables, no progress).
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Build the harness configuration from the parsed flags.
    /// Empty size lists fall back to the default ladders.
    #[must_use]
    pub fn suite_config(&self) -> SuiteConfig {
        SuiteConfig {
            matrix_sizes: self.sizes.clone(),
            digit_lens: self.digits.clone(),
            digit_range: DigitRange {
                min: self.digit_min,
                max: self.digit_max,
            },
            entry_range: EntryRange {
                min: self.entry_min,
                max: self.entry_max,
            },
            warmup: self.warmup,
            trials: self.trials,
            seed: self.seed,
            verify: self.verify,
        }
        .normalize()
    }
}
