//! Naive row-by-column matrix multiplication.

use num_traits::PrimInt;

use crate::error::KernelError;
use crate::matrix::MatrixDims;

/// Multiply flattened integer matrices by the direct dot-product definition:
/// `C[i,j] = Σ_x A[i,x] * B[x,j]`.
///
/// O(mnk) time, O(mk) extra space, deterministic. Entry overflow is the
/// caller's concern, matching the native-width contract of the kernels.
///
/// # Errors
///
/// Returns [`KernelError::InvalidDimensions`] if `a.len() != m*n` or
/// `b.len() != n*k`, before any computation.
///
/// # Example
/// ```
/// use mulbench_core::{multiply_naive, MatrixDims};
///
/// let c = multiply_naive(MatrixDims::square(2), &[1i64, 2, 3, 4], &[5, 6, 7, 8]).unwrap();
/// assert_eq!(c, vec![19, 22, 43, 50]);
/// ```
pub fn multiply_naive<T: PrimInt>(
    dims: MatrixDims,
    a: &[T],
    b: &[T],
) -> Result<Vec<T>, KernelError> {
    dims.validate(a.len(), b.len())?;
    Ok(dot_product(dims, a, b))
}

/// Triple-loop product for pre-validated inputs.
///
/// Shared with the Strassen kernel, which falls back to it at degenerate
/// sizes.
pub(crate) fn dot_product<T: PrimInt>(dims: MatrixDims, a: &[T], b: &[T]) -> Vec<T> {
    let MatrixDims { m, n, k } = dims;
    let mut c = vec![T::zero(); dims.output_len()];
    for i in 0..m {
        for j in 0..k {
            let mut dot = T::zero();
            for x in 0..n {
                dot = dot + a[i * n + x] * b[x * k + j];
            }
            c[i * k + j] = dot;
        }
    }
    c
}
