//! Strassen divide-and-conquer matrix multiplication.
//!
//! Seven half-size products per level instead of eight, for O(n^log2 7)
//! multiplications overall. Odd dimensions are zero-padded to the next even
//! size before halving and the padding is trimmed from the result; degenerate
//! sizes fall back to the naive triple loop. Output is bit-identical to the
//! naive kernel for every valid input; the recursion is a performance
//! strategy, never an approximation.

use num_traits::{PrimInt, Signed};

use crate::blockops;
use crate::error::KernelError;
use crate::matrix::MatrixDims;
use crate::naive;

/// Multiply flattened integer matrices with Strassen's recursion.
///
/// Entries must be signed: the seven-product scheme subtracts blocks even
/// when every input entry is non-negative.
///
/// # Errors
///
/// Returns [`KernelError::InvalidDimensions`] when any of m, n, k is zero or
/// the buffer lengths disagree with the dimensions, before any computation.
///
/// # Example
/// ```
/// use mulbench_core::{multiply_strassen, MatrixDims};
///
/// let c = multiply_strassen(MatrixDims::square(2), &[1i64, 2, 3, 4], &[5, 6, 7, 8]).unwrap();
/// assert_eq!(c, vec![19, 22, 43, 50]);
/// ```
pub fn multiply_strassen<T: PrimInt + Signed>(
    dims: MatrixDims,
    a: &[T],
    b: &[T],
) -> Result<Vec<T>, KernelError> {
    dims.require_positive()?;
    dims.validate(a.len(), b.len())?;
    Ok(strassen_product(dims, a, b))
}

/// Recursive driver for validated inputs.
///
/// Degenerate sizes (any dimension 1) take the naive product at the original
/// dimensions; odd dimensions are padded to even, run through one halving
/// level, and trimmed back. Even dimensions halve directly, so the core never
/// sees parity checks on the way down.
fn strassen_product<T: PrimInt + Signed>(dims: MatrixDims, a: &[T], b: &[T]) -> Vec<T> {
    let MatrixDims { m, n, k } = dims;
    if m == 1 || n == 1 || k == 1 {
        return naive::dot_product(dims, a, b);
    }
    if m % 2 == 0 && n % 2 == 0 && k % 2 == 0 {
        return halve(dims, a, b);
    }

    // Zero rows/columns contribute nothing to any dot product, so the padded
    // product's top-left m×k block equals the true product.
    let padded = MatrixDims::new(next_even(m), next_even(n), next_even(k));
    tracing::trace!(m, n, k, "padding odd dimensions before halving");
    let pa = blockops::pad(a, m, n, padded.m, padded.n);
    let pb = blockops::pad(b, n, k, padded.n, padded.k);
    let pc = halve(padded, &pa, &pb);
    blockops::trim(&pc, padded.k, m, k)
}

/// One halving level. All dimensions must be even on entry; the seven
/// sub-products recurse through the driver, which re-handles parity.
fn halve<T: PrimInt + Signed>(dims: MatrixDims, a: &[T], b: &[T]) -> Vec<T> {
    let half = MatrixDims::new(dims.m / 2, dims.n / 2, dims.k / 2);
    let [a11, a12, a21, a22] = blockops::split_quadrants(a, dims.m, dims.n);
    let [b11, b12, b21, b22] = blockops::split_quadrants(b, dims.n, dims.k);

    let p1 = strassen_product(half, &a11, &blockops::sub(&b12, &b22));
    let p2 = strassen_product(half, &blockops::add(&a11, &a12), &b22);
    let p3 = strassen_product(half, &blockops::add(&a21, &a22), &b11);
    let p4 = strassen_product(half, &a22, &blockops::sub(&b21, &b11));
    let p5 = strassen_product(half, &blockops::add(&a11, &a22), &blockops::add(&b11, &b22));
    let p6 = strassen_product(half, &blockops::sub(&a12, &a22), &blockops::add(&b21, &b22));
    let p7 = strassen_product(half, &blockops::sub(&a11, &a21), &blockops::add(&b11, &b12));

    let c11 = blockops::sub(&blockops::add(&blockops::add(&p5, &p4), &p6), &p2);
    let c12 = blockops::add(&p1, &p2);
    let c21 = blockops::add(&p3, &p4);
    let c22 = blockops::sub(&blockops::sub(&blockops::add(&p5, &p1), &p3), &p7);

    blockops::join_quadrants(&c11, &c12, &c21, &c22, half.m, half.k)
}

const fn next_even(x: usize) -> usize {
    if x % 2 == 0 {
        x
    } else {
        x + 1
    }
}
