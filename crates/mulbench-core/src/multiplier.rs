//! Matrix kernel trait objects and the factory that names them.
//!
//! The free functions in [`crate::naive`] and [`crate::strassen`] are the
//! kernels; this module puts them behind a uniform interface so the harness
//! can run any selection of kernels over the same inputs.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::KernelError;
use crate::matrix::MatrixDims;
use crate::naive::multiply_naive;
use crate::strassen::multiply_strassen;

/// Entry type used by the trait-object layer and the benchmark harness.
pub type Entry = i64;

/// A matrix multiplication kernel behind a uniform interface.
pub trait MatrixMultiplier: Send + Sync {
    /// Multiply flattened A (m×n) by B (n×k) into a fresh m×k buffer.
    fn multiply(
        &self,
        dims: MatrixDims,
        a: &[Entry],
        b: &[Entry],
    ) -> Result<Vec<Entry>, KernelError>;

    /// Kernel name used in reports and selection.
    fn name(&self) -> &'static str;
}

/// Direct triple-loop kernel.
pub struct NaiveMultiplier;

impl NaiveMultiplier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NaiveMultiplier {
    fn default() -> Self {
        Self::new()
    }
}

impl MatrixMultiplier for NaiveMultiplier {
    fn multiply(
        &self,
        dims: MatrixDims,
        a: &[Entry],
        b: &[Entry],
    ) -> Result<Vec<Entry>, KernelError> {
        multiply_naive(dims, a, b)
    }

    fn name(&self) -> &'static str {
        "Naive"
    }
}

/// Strassen divide-and-conquer kernel.
pub struct StrassenMultiplier;

impl StrassenMultiplier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for StrassenMultiplier {
    fn default() -> Self {
        Self::new()
    }
}

impl MatrixMultiplier for StrassenMultiplier {
    fn multiply(
        &self,
        dims: MatrixDims,
        a: &[Entry],
        b: &[Entry],
    ) -> Result<Vec<Entry>, KernelError> {
        multiply_strassen(dims, a, b)
    }

    fn name(&self) -> &'static str {
        "Strassen"
    }
}

/// Factory trait for creating kernels by name.
pub trait MultiplierFactory: Send + Sync {
    /// Get or create a kernel by name.
    fn get(&self, name: &str) -> Result<Arc<dyn MatrixMultiplier>, KernelError>;

    /// List all selectable kernel names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and a name cache.
pub struct DefaultFactory {
    cache: RwLock<HashMap<String, Arc<dyn MatrixMultiplier>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_multiplier(name: &str) -> Result<Arc<dyn MatrixMultiplier>, KernelError> {
        match name {
            "naive" | "rowcol" => Ok(Arc::new(NaiveMultiplier::new())),
            "strassen" => Ok(Arc::new(StrassenMultiplier::new())),
            _ => Err(KernelError::Config(format!("unknown kernel: {name}"))),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl MultiplierFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn MatrixMultiplier>, KernelError> {
        if let Some(kernel) = self.cache.read().get(name) {
            return Ok(Arc::clone(kernel));
        }

        tracing::debug!(name, "creating matrix kernel");
        let kernel = Self::create_multiplier(name)?;
        self.cache
            .write()
            .insert(name.to_string(), Arc::clone(&kernel));
        Ok(kernel)
    }

    fn available(&self) -> Vec<&str> {
        vec!["naive", "strassen"]
    }
}
