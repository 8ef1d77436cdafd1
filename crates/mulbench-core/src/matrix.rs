//! Flattened matrix dimensions and their validation.

use crate::error::KernelError;

/// Dimensions of a matrix product: A is m×n, B is n×k, the product is m×k.
///
/// Buffers are flattened row-major; entry (i, j) of an r×c matrix lives at
/// linear index `i * c + j`.
///
/// # Example
/// ```
/// use mulbench_core::MatrixDims;
///
/// let dims = MatrixDims::new(2, 3, 2);
/// assert!(dims.validate(6, 6).is_ok());
/// assert_eq!(dims.output_len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixDims {
    /// Rows of A (and of the product).
    pub m: usize,
    /// Columns of A / rows of B.
    pub n: usize,
    /// Columns of B (and of the product).
    pub k: usize,
}

impl MatrixDims {
    /// Create dimensions for an (m×n) · (n×k) product.
    #[must_use]
    pub const fn new(m: usize, n: usize, k: usize) -> Self {
        Self { m, n, k }
    }

    /// Square dimensions: an (n×n) · (n×n) product.
    #[must_use]
    pub const fn square(n: usize) -> Self {
        Self { m: n, n, k: n }
    }

    /// Length of the flattened product buffer (m·k).
    ///
    /// Only meaningful after [`MatrixDims::validate`] has accepted the
    /// dimensions; validation proves the multiplication cannot overflow.
    #[must_use]
    pub fn output_len(&self) -> usize {
        self.m * self.k
    }

    /// Check the structural precondition: `a_len == m*n` and `b_len == n*k`.
    ///
    /// Also rejects dimensions whose products overflow `usize`, so callers
    /// can index `i * cols + j` without further checks.
    pub fn validate(&self, a_len: usize, b_len: usize) -> Result<(), KernelError> {
        let expect_a = self
            .m
            .checked_mul(self.n)
            .ok_or_else(|| self.overflow("m*n"))?;
        let expect_b = self
            .n
            .checked_mul(self.k)
            .ok_or_else(|| self.overflow("n*k"))?;
        self.m
            .checked_mul(self.k)
            .ok_or_else(|| self.overflow("m*k"))?;

        if a_len != expect_a {
            return Err(KernelError::InvalidDimensions(format!(
                "a.len() == {a_len}, expected m*n == {expect_a}"
            )));
        }
        if b_len != expect_b {
            return Err(KernelError::InvalidDimensions(format!(
                "b.len() == {b_len}, expected n*k == {expect_b}"
            )));
        }
        Ok(())
    }

    /// Require every dimension to be at least 1.
    pub fn require_positive(&self) -> Result<(), KernelError> {
        if self.m == 0 || self.n == 0 || self.k == 0 {
            return Err(KernelError::InvalidDimensions(format!(
                "m, n, k must be positive, got {}x{}x{}",
                self.m, self.n, self.k
            )));
        }
        Ok(())
    }

    fn overflow(&self, which: &str) -> KernelError {
        KernelError::InvalidDimensions(format!(
            "{which} overflows usize for {}x{}x{}",
            self.m, self.n, self.k
        ))
    }
}
