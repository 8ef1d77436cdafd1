//! Shared constants for kernel selection and process exit codes.

/// Kernel name for the triple-loop method.
pub const KERNEL_NAIVE: &str = "naive";

/// Kernel name for the divide-and-conquer method.
pub const KERNEL_STRASSEN: &str = "strassen";

/// Selector that expands to every registered kernel.
pub const KERNEL_ALL: &str = "all";

/// Process exit codes used by the command-line front end.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Kernel results did not match during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
