//! Harness-level error taxonomy.

use mulbench_core::KernelError;
use thiserror::Error;

/// Errors surfaced while generating inputs, running suites, or persisting
/// reports. Kernel-level failures pass through unchanged.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// A kernel rejected its input.
    #[error(transparent)]
    Kernel(#[from] KernelError),

    /// A kernel disagreed with the reference result on the same input.
    #[error("kernel {kernel} disagrees with the reference result at size {size}")]
    Mismatch { kernel: String, size: usize },

    /// Invalid suite or generator configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Report serialization or format failure.
    #[error("report error: {0}")]
    Report(String),

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
