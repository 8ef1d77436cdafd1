//! Error handling and exit codes.

use mulbench_core::constants::exit_codes;
use mulbench_core::KernelError;
use mulbench_harness::HarnessError;

/// Map an application error to the process exit code.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(harness) = err.downcast_ref::<HarnessError>() {
        return handle_error(harness);
    }
    if let Some(kernel) = err.downcast_ref::<KernelError>() {
        return kernel_exit_code(kernel);
    }
    exit_codes::ERROR_GENERIC
}

/// Map a harness error to the exit code it deserves.
pub fn handle_error(err: &HarnessError) -> i32 {
    match err {
        HarnessError::Mismatch { .. } => exit_codes::ERROR_MISMATCH,
        HarnessError::Config(_) => exit_codes::ERROR_CONFIG,
        HarnessError::Kernel(kernel) => kernel_exit_code(kernel),
        HarnessError::Report(_) | HarnessError::Io(_) => exit_codes::ERROR_GENERIC,
    }
}

fn kernel_exit_code(err: &KernelError) -> i32 {
    match err {
        KernelError::Config(_) => exit_codes::ERROR_CONFIG,
        KernelError::Mismatch => exit_codes::ERROR_MISMATCH,
        KernelError::MalformedInput(_) | KernelError::InvalidDimensions(_) => {
            exit_codes::ERROR_GENERIC
        }
    }
}
