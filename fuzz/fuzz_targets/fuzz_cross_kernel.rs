#![no_main]

use libfuzzer_sys::fuzz_target;

use mulbench_core::{multiply_naive, multiply_strassen, MatrixDims};

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    // First 3 bytes pick the dimensions, capped at 16 for speed.
    let m = usize::from(data[0]) % 16 + 1;
    let n = usize::from(data[1]) % 16 + 1;
    let k = usize::from(data[2]) % 16 + 1;
    let dims = MatrixDims::new(m, n, k);

    // Remaining bytes fill both operands as small signed entries.
    let rest = &data[3..];
    if rest.len() < m * n + n * k {
        return;
    }
    let a: Vec<i64> = rest[..m * n].iter().map(|&b| i64::from(b as i8)).collect();
    let b: Vec<i64> = rest[m * n..m * n + n * k]
        .iter()
        .map(|&v| i64::from(v as i8))
        .collect();

    let naive = multiply_naive(dims, &a, &b).unwrap();
    let strassen = multiply_strassen(dims, &a, &b).unwrap();
    assert_eq!(naive, strassen, "Naive != Strassen at {m}x{n}x{k}");
});
