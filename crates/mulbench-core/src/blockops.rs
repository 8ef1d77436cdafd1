//! Block operations on flattened matrices for the Strassen recursion.
//!
//! Every helper allocates its output; quadrants never alias their source.
//! Shape agreement is the caller's invariant, enforced with debug asserts.

use num_traits::PrimInt;

/// Elementwise sum of two equally-shaped flattened matrices.
pub(crate) fn add<T: PrimInt>(a: &[T], b: &[T]) -> Vec<T> {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(&x, &y)| x + y).collect()
}

/// Elementwise difference of two equally-shaped flattened matrices.
pub(crate) fn sub<T: PrimInt>(a: &[T], b: &[T]) -> Vec<T> {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(&x, &y)| x - y).collect()
}

/// Split a rows×cols matrix into four equal quadrants, row-major each.
///
/// Returns `[q11, q12, q21, q22]`; rows and cols must both be even.
pub(crate) fn split_quadrants<T: PrimInt>(src: &[T], rows: usize, cols: usize) -> [Vec<T>; 4] {
    debug_assert_eq!(src.len(), rows * cols);
    debug_assert!(rows % 2 == 0 && cols % 2 == 0);
    let (hr, hc) = (rows / 2, cols / 2);

    let mut q11 = Vec::with_capacity(hr * hc);
    let mut q12 = Vec::with_capacity(hr * hc);
    let mut q21 = Vec::with_capacity(hr * hc);
    let mut q22 = Vec::with_capacity(hr * hc);
    for i in 0..hr {
        let top = &src[i * cols..][..cols];
        let bottom = &src[(i + hr) * cols..][..cols];
        q11.extend_from_slice(&top[..hc]);
        q12.extend_from_slice(&top[hc..]);
        q21.extend_from_slice(&bottom[..hc]);
        q22.extend_from_slice(&bottom[hc..]);
    }
    [q11, q12, q21, q22]
}

/// Reassemble four hr×hc quadrants into a (2·hr)×(2·hc) matrix.
pub(crate) fn join_quadrants<T: PrimInt>(
    c11: &[T],
    c12: &[T],
    c21: &[T],
    c22: &[T],
    hr: usize,
    hc: usize,
) -> Vec<T> {
    debug_assert!([c11, c12, c21, c22].iter().all(|q| q.len() == hr * hc));
    let mut out = Vec::with_capacity(4 * hr * hc);
    for i in 0..hr {
        out.extend_from_slice(&c11[i * hc..][..hc]);
        out.extend_from_slice(&c12[i * hc..][..hc]);
    }
    for i in 0..hr {
        out.extend_from_slice(&c21[i * hc..][..hc]);
        out.extend_from_slice(&c22[i * hc..][..hc]);
    }
    out
}

/// Copy a rows×cols matrix into the top-left of a zeroed larger matrix.
pub(crate) fn pad<T: PrimInt>(
    src: &[T],
    rows: usize,
    cols: usize,
    new_rows: usize,
    new_cols: usize,
) -> Vec<T> {
    debug_assert_eq!(src.len(), rows * cols);
    debug_assert!(new_rows >= rows && new_cols >= cols);
    let mut out = vec![T::zero(); new_rows * new_cols];
    for i in 0..rows {
        out[i * new_cols..][..cols].copy_from_slice(&src[i * cols..][..cols]);
    }
    out
}

/// Keep the top-left rows×cols of a matrix whose row stride is src_cols.
pub(crate) fn trim<T: PrimInt>(src: &[T], src_cols: usize, rows: usize, cols: usize) -> Vec<T> {
    debug_assert!(src_cols >= cols && src.len() >= rows * src_cols);
    let mut out = Vec::with_capacity(rows * cols);
    for i in 0..rows {
        out.extend_from_slice(&src[i * src_cols..][..cols]);
    }
    out
}
