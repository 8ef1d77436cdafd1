//! Grade-school multiplication of decimal digit strings.
//!
//! Operands are ASCII digit strings, most-significant digit first. The
//! product is computed positionally in a `u64` accumulator and rendered
//! without leading zeros. Exact for any operand length; cost is
//! O(len1 * len2) digit multiplications.

use crate::error::KernelError;

/// Multiply two non-negative decimal digit strings exactly.
///
/// Inputs may carry leading zeros; the output never does, except for the
/// single digit `"0"` when either operand is zero.
///
/// # Errors
///
/// Returns [`KernelError::MalformedInput`] if either string is empty or
/// contains a byte outside `'0'..='9'`.
///
/// # Example
/// ```
/// use mulbench_core::multiply_decimal;
///
/// assert_eq!(multiply_decimal("99", "99").unwrap(), "9801");
/// assert_eq!(multiply_decimal("0", "12345").unwrap(), "0");
/// ```
pub fn multiply_decimal(s1: &str, s2: &str) -> Result<String, KernelError> {
    let d1 = digits_le(s1)?;
    let d2 = digits_le(s2)?;
    Ok(schoolbook_product(&d1, &d2))
}

/// Parse a digit string into little-endian digit values.
fn digits_le(s: &str) -> Result<Vec<u64>, KernelError> {
    if s.is_empty() {
        return Err(KernelError::MalformedInput("empty digit string".into()));
    }
    let bytes = s.as_bytes();
    for (idx, &b) in bytes.iter().enumerate() {
        if !b.is_ascii_digit() {
            return Err(KernelError::MalformedInput(format!(
                "non-digit byte {:?} at index {idx}",
                char::from(b)
            )));
        }
    }
    Ok(bytes.iter().rev().map(|&b| u64::from(b - b'0')).collect())
}

/// Positional product of two little-endian digit sequences.
fn schoolbook_product(d1: &[u64], d2: &[u64]) -> String {
    let mut acc = vec![0u64; d1.len() + d2.len()];

    for (i, &a) in d1.iter().enumerate() {
        let mut carry = 0u64;
        for (j, &b) in d2.iter().enumerate() {
            // Base-10 bound: slots stay <= 20 and the carry <= 11, so each
            // step is at most 9*9 + 20 + 11 = 112. A wider radix would need
            // a multi-level carry chain instead of this single fold.
            let t = acc[i + j] + a * b + carry;
            acc[i + j] = t % 10;
            carry = t / 10;
        }
        acc[i + d2.len()] += carry;
    }

    // The folded carries can leave slots above 9; one pass from the least
    // significant end renormalizes every slot to 0..=9.
    let mut carry = 0u64;
    for slot in &mut acc {
        let t = *slot + carry;
        *slot = t % 10;
        carry = t / 10;
    }
    debug_assert_eq!(carry, 0, "product cannot exceed len1 + len2 digits");

    render(&acc)
}

/// Render a little-endian normalized digit buffer, stripping leading zeros.
#[allow(clippy::cast_possible_truncation)]
fn render(acc: &[u64]) -> String {
    let Some(top) = acc.iter().rposition(|&d| d != 0) else {
        return "0".to_string();
    };
    let mut out = String::with_capacity(top + 1);
    for &d in acc[..=top].iter().rev() {
        out.push(char::from(b'0' + d as u8));
    }
    out
}
