//! Uniform random input generation for the benchmark suites.
//!
//! Operands are drawn from inclusive ranges; a fixed seed reproduces the
//! exact inputs of a previous run.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::HarnessError;

/// Inclusive digit bounds for decimal operand generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitRange {
    pub min: u8,
    pub max: u8,
}

impl Default for DigitRange {
    fn default() -> Self {
        Self { min: 0, max: 9 }
    }
}

impl DigitRange {
    /// Reject ranges that are empty or leave 0..=9.
    pub fn validate(&self) -> Result<(), HarnessError> {
        if self.min > self.max || self.max > 9 {
            return Err(HarnessError::Config(format!(
                "digit range {}..={} is not a subset of 0..=9",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Inclusive entry bounds for matrix generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryRange {
    pub min: i64,
    pub max: i64,
}

impl Default for EntryRange {
    fn default() -> Self {
        Self { min: 0, max: 10 }
    }
}

impl EntryRange {
    /// Reject empty ranges.
    pub fn validate(&self) -> Result<(), HarnessError> {
        if self.min > self.max {
            return Err(HarnessError::Config(format!(
                "entry range {}..={} is empty",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Seeded uniform generator for benchmark inputs.
pub struct InputGenerator {
    rng: StdRng,
}

impl InputGenerator {
    /// Reproducible generator from a fixed seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generator seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Uniform decimal operand of `len` digits, most-significant first.
    /// Leading zeros are allowed; the kernel strips them from the product.
    pub fn digit_string(&mut self, len: usize, range: &DigitRange) -> String {
        (0..len)
            .map(|_| char::from(b'0' + self.rng.gen_range(range.min..=range.max)))
            .collect()
    }

    /// Uniform row-major rows×cols matrix.
    pub fn matrix(&mut self, rows: usize, cols: usize, range: &EntryRange) -> Vec<i64> {
        (0..rows * cols)
            .map(|_| self.rng.gen_range(range.min..=range.max))
            .collect()
    }
}
