//! # mulbench-harness
//!
//! Input generation, timing suites, cross-validation, and reports for the
//! multiplication kernels.

pub mod error;
pub mod generator;
pub mod report;
pub mod selection;
pub mod suite;
pub mod timing;
pub mod verify;

pub use error::HarnessError;
pub use generator::{DigitRange, EntryRange, InputGenerator};
pub use report::{compare, Comparison, Measurement, SuiteReport, REPORT_VERSION};
pub use selection::multipliers_to_run;
pub use suite::{run_decimal_suite, run_matrix_suite, SuiteConfig, SuiteProgress};
pub use timing::{time_detailed, time_once, TimingStats};
pub use verify::{check_decimal, cross_check, reference_product};
