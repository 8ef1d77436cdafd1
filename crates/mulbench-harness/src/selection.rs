//! Kernel selection logic.

use std::sync::Arc;

use mulbench_core::{MatrixMultiplier, MultiplierFactory, KERNEL_ALL};

use crate::error::HarnessError;

/// Resolve a kernel selector into the kernels to run.
/// `"all"` expands to every registered kernel.
pub fn multipliers_to_run(
    selector: &str,
    factory: &dyn MultiplierFactory,
) -> Result<Vec<Arc<dyn MatrixMultiplier>>, HarnessError> {
    match selector {
        KERNEL_ALL => {
            let names = factory.available();
            let mut kernels = Vec::new();
            for name in names {
                kernels.push(factory.get(name)?);
            }
            Ok(kernels)
        }
        name => {
            let kernel = factory.get(name)?;
            Ok(vec![kernel])
        }
    }
}
