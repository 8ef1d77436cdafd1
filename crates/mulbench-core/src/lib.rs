//! # mulbench-core
//!
//! Multiplication kernels for the mulbench benchmark suite: grade-school
//! decimal string multiplication, naive triple-loop matrix multiplication,
//! and Strassen divide-and-conquer matrix multiplication.
//!
//! # Example
//! ```
//! use mulbench_core::{multiply_decimal, multiply_naive, MatrixDims};
//!
//! assert_eq!(multiply_decimal("99", "99").unwrap(), "9801");
//!
//! let c = multiply_naive(MatrixDims::square(2), &[1i64, 2, 3, 4], &[5, 6, 7, 8]).unwrap();
//! assert_eq!(c, vec![19, 22, 43, 50]);
//! ```

pub(crate) mod blockops;
pub mod constants;
pub mod decimal;
pub mod error;
pub mod matrix;
pub mod multiplier;
pub mod naive;
pub mod strassen;

// Re-exports
pub use constants::{exit_codes, KERNEL_ALL, KERNEL_NAIVE, KERNEL_STRASSEN};
pub use decimal::multiply_decimal;
pub use error::KernelError;
pub use matrix::MatrixDims;
pub use multiplier::{
    DefaultFactory, Entry, MatrixMultiplier, MultiplierFactory, NaiveMultiplier,
    StrassenMultiplier,
};
pub use naive::multiply_naive;
pub use strassen::multiply_strassen;
