//! Golden file integration tests.
//!
//! Reads tests/testdata/multiplication_golden.json and verifies every kernel
//! reproduces the known products exactly.

use num_bigint::BigUint;
use serde::Deserialize;

use mulbench_core::{
    multiply_decimal, DefaultFactory, KernelError, MatrixDims, MatrixMultiplier,
    MultiplierFactory, NaiveMultiplier, StrassenMultiplier,
};
use mulbench_harness::{EntryRange, InputGenerator};

// ---------------------------------------------------------------------------
// Golden data structures
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    decimal: Vec<DecimalCase>,
    matrix: Vec<MatrixCase>,
}

#[derive(Deserialize)]
struct DecimalCase {
    lhs: String,
    rhs: String,
    product: String,
}

#[derive(Deserialize)]
struct MatrixCase {
    m: usize,
    n: usize,
    k: usize,
    a: Vec<i64>,
    b: Vec<i64>,
    c: Vec<i64>,
}

impl MatrixCase {
    fn dims(&self) -> MatrixDims {
        MatrixDims::new(self.m, self.n, self.k)
    }
}

fn load_golden_data() -> GoldenData {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/multiplication_golden.json"
    );
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

// ---------------------------------------------------------------------------
// Golden: the data file itself agrees with an independent oracle
// ---------------------------------------------------------------------------

#[test]
fn golden_decimal_values_match_bigint() {
    let data = load_golden_data();
    for case in &data.decimal {
        let lhs = BigUint::parse_bytes(case.lhs.as_bytes(), 10).unwrap();
        let rhs = BigUint::parse_bytes(case.rhs.as_bytes(), 10).unwrap();
        let expected = BigUint::parse_bytes(case.product.as_bytes(), 10).unwrap();
        assert_eq!(
            lhs * rhs,
            expected,
            "golden data is wrong for {} x {}",
            case.lhs,
            case.rhs,
        );
    }
}

// ---------------------------------------------------------------------------
// Golden: exact decimal products
// ---------------------------------------------------------------------------

#[test]
fn golden_decimal_exact() {
    let data = load_golden_data();
    for case in &data.decimal {
        let product = multiply_decimal(&case.lhs, &case.rhs).unwrap();
        assert_eq!(
            product, case.product,
            "decimal mismatch for {} x {}",
            case.lhs, case.rhs,
        );
    }
}

#[test]
fn golden_decimal_commutes() {
    let data = load_golden_data();
    for case in &data.decimal {
        let swapped = multiply_decimal(&case.rhs, &case.lhs).unwrap();
        assert_eq!(
            swapped, case.product,
            "swapped operands diverge for {} x {}",
            case.rhs, case.lhs,
        );
    }
}

// ---------------------------------------------------------------------------
// Golden: exact matrix products, both kernels
// ---------------------------------------------------------------------------

#[test]
fn golden_matrix_naive() {
    let kernel = NaiveMultiplier::new();
    let data = load_golden_data();
    for case in &data.matrix {
        let result = kernel.multiply(case.dims(), &case.a, &case.b).unwrap();
        assert_eq!(
            result, case.c,
            "Naive mismatch at {}x{}x{}",
            case.m, case.n, case.k,
        );
    }
}

#[test]
fn golden_matrix_strassen() {
    let kernel = StrassenMultiplier::new();
    let data = load_golden_data();
    for case in &data.matrix {
        let result = kernel.multiply(case.dims(), &case.a, &case.b).unwrap();
        assert_eq!(
            result, case.c,
            "Strassen mismatch at {}x{}x{}",
            case.m, case.n, case.k,
        );
    }
}

// ---------------------------------------------------------------------------
// Golden: every factory-selectable kernel reproduces the golden products
// ---------------------------------------------------------------------------

#[test]
fn golden_matrix_via_factory() {
    let factory = DefaultFactory::new();
    let data = load_golden_data();
    for name in factory.available() {
        let kernel = factory.get(name).unwrap();
        for case in &data.matrix {
            let result = kernel.multiply(case.dims(), &case.a, &case.b).unwrap();
            assert_eq!(
                result,
                case.c,
                "{} (via factory) mismatch at {}x{}x{}",
                kernel.name(),
                case.m,
                case.n,
                case.k,
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Cross-kernel agreement on generated inputs
// ---------------------------------------------------------------------------

#[test]
fn kernels_agree_on_generated_inputs() {
    let naive = NaiveMultiplier::new();
    let strassen = StrassenMultiplier::new();
    let mut gen = InputGenerator::from_seed(99);
    let range = EntryRange { min: -40, max: 40 };

    for n in [3, 8, 17, 33] {
        let dims = MatrixDims::square(n);
        let a = gen.matrix(n, n, &range);
        let b = gen.matrix(n, n, &range);

        let naive_result = naive.multiply(dims, &a, &b).unwrap();
        let strassen_result = strassen.multiply(dims, &a, &b).unwrap();
        assert_eq!(naive_result, strassen_result, "Naive != Strassen at n={n}");
    }
}

#[test]
#[ignore]
fn kernels_agree_large_matrix() {
    let naive = NaiveMultiplier::new();
    let strassen = StrassenMultiplier::new();
    let mut gen = InputGenerator::from_seed(99);
    let range = EntryRange { min: -100, max: 100 };

    let n = 320;
    let dims = MatrixDims::square(n);
    let a = gen.matrix(n, n, &range);
    let b = gen.matrix(n, n, &range);

    let naive_result = naive.multiply(dims, &a, &b).unwrap();
    let strassen_result = strassen.multiply(dims, &a, &b).unwrap();
    assert_eq!(naive_result, strassen_result, "Naive != Strassen at n={n}");
}

// ---------------------------------------------------------------------------
// Edge cases: boundary values
// ---------------------------------------------------------------------------

#[test]
fn edge_case_single_entry() {
    let kernels: Vec<Box<dyn MatrixMultiplier>> = vec![
        Box::new(NaiveMultiplier::new()),
        Box::new(StrassenMultiplier::new()),
    ];
    for kernel in &kernels {
        let result = kernel.multiply(MatrixDims::square(1), &[7], &[6]).unwrap();
        assert_eq!(result, vec![42], "{} 1x1 product", kernel.name());
    }
}

#[test]
fn edge_case_zero_operand() {
    assert_eq!(multiply_decimal("0", "0").unwrap(), "0");
    assert_eq!(multiply_decimal("000", "42").unwrap(), "0");
    assert_eq!(multiply_decimal("42", "0").unwrap(), "0");
}

#[test]
fn edge_case_empty_digit_string_rejected() {
    assert!(matches!(
        multiply_decimal("", "5"),
        Err(KernelError::MalformedInput(_))
    ));
}

#[test]
fn edge_case_zero_dimension_rejected_by_strassen() {
    let kernel = StrassenMultiplier::new();
    let result = kernel.multiply(MatrixDims::new(0, 2, 2), &[], &[1, 2, 3, 4]);
    assert!(matches!(result, Err(KernelError::InvalidDimensions(_))));
}

// ---------------------------------------------------------------------------
// Invalid config tests
// ---------------------------------------------------------------------------

#[test]
fn invalid_kernel_name() {
    let factory = DefaultFactory::new();
    let result = factory.get("nonexistent");
    assert!(result.is_err());
}
