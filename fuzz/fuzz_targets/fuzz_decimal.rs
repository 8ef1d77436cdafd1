#![no_main]

use libfuzzer_sys::fuzz_target;

use mulbench_core::multiply_decimal;
use num_bigint::BigUint;

fuzz_target!(|data: &[u8]| {
    // Split into two operand candidates, capped at 1024 digits each so the
    // quadratic kernel stays fast.
    let data = &data[..data.len().min(2048)];
    let (left, right) = data.split_at(data.len() / 2);

    let (Ok(s1), Ok(s2)) = (std::str::from_utf8(left), std::str::from_utf8(right)) else {
        return;
    };

    let result = multiply_decimal(s1, s2);

    let well_formed = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if well_formed(s1) && well_formed(s2) {
        // Valid digit strings must multiply, and the product must match
        // an independent oracle.
        let product = result.unwrap();
        let expected = BigUint::parse_bytes(s1.as_bytes(), 10).unwrap()
            * BigUint::parse_bytes(s2.as_bytes(), 10).unwrap();
        assert_eq!(product, expected.to_string(), "{s1} x {s2}");
    } else {
        // Malformed input must error, never panic.
        assert!(result.is_err());
    }
});
