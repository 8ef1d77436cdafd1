//! Cross-validation of kernel results.
//!
//! The matrix kernels are checked against each other on identical inputs;
//! the decimal kernel is checked against a `num-bigint` oracle.

use std::sync::Arc;

use num_bigint::BigUint;
use rayon::prelude::*;

use mulbench_core::{Entry, KernelError, MatrixDims, MatrixMultiplier};

use crate::error::HarnessError;

/// Run every kernel on the same input and compare element-wise against the
/// first. The calls are independent pure computations, so they run in
/// parallel.
pub fn cross_check(
    dims: MatrixDims,
    a: &[Entry],
    b: &[Entry],
    multipliers: &[Arc<dyn MatrixMultiplier>],
) -> Result<(), HarnessError> {
    let outcomes: Vec<(&str, Result<Vec<Entry>, KernelError>)> = multipliers
        .par_iter()
        .map(|kernel| (kernel.name(), kernel.multiply(dims, a, b)))
        .collect();

    let mut reference: Option<(&str, Vec<Entry>)> = None;
    for (name, outcome) in outcomes {
        let c = outcome?;
        match &reference {
            None => reference = Some((name, c)),
            Some((first, expected)) => {
                if &c != expected {
                    tracing::error!(
                        kernel = name,
                        against = first,
                        m = dims.m,
                        "cross-check mismatch"
                    );
                    return Err(HarnessError::Mismatch {
                        kernel: name.to_string(),
                        size: dims.m,
                    });
                }
            }
        }
    }
    Ok(())
}

/// Exact decimal product via `num-bigint`, the oracle for the grade-school
/// kernel.
pub fn reference_product(s1: &str, s2: &str) -> Result<String, HarnessError> {
    let a = parse_decimal(s1)?;
    let b = parse_decimal(s2)?;
    Ok((a * b).to_string())
}

/// Compare a kernel product against the oracle.
pub fn check_decimal(s1: &str, s2: &str, got: &str) -> Result<(), HarnessError> {
    let expected = reference_product(s1, s2)?;
    if got != expected {
        return Err(HarnessError::Mismatch {
            kernel: "Decimal".to_string(),
            size: s1.len().max(s2.len()),
        });
    }
    Ok(())
}

fn parse_decimal(s: &str) -> Result<BigUint, HarnessError> {
    BigUint::parse_bytes(s.as_bytes(), 10)
        .ok_or_else(|| HarnessError::Config(format!("not a decimal string: {s:?}")))
}
