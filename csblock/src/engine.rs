//! Block engine: the kernel plus configuration every block operation uses
//!
//! The operations themselves are spread over `convert`, `construct`, `block`
//! and `partition`; each adds an `impl` block to [`BlockEngine`].

use csblock_core::{CscMatrix, Kernel, Result, TripletMatrix};

use crate::config::EngineConfig;
use crate::kernel::CsKernel;

/// Entry point for format conversion, construction and clip/patch
#[derive(Debug, Clone)]
pub struct BlockEngine<K: Kernel = CsKernel> {
    kernel: K,
    config: EngineConfig,
}

impl BlockEngine<CsKernel> {
    /// Create an engine over the reference kernel
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine over the reference kernel with custom settings
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            kernel: CsKernel,
            config,
        }
    }
}

impl Default for BlockEngine<CsKernel> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Kernel> BlockEngine<K> {
    /// Create an engine over any kernel
    pub fn with_kernel(kernel: K, config: EngineConfig) -> Self {
        Self { kernel, config }
    }

    /// Get the kernel
    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    /// Get the engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compress a triplet matrix through the kernel
    pub fn compress(&self, t: &TripletMatrix) -> Result<CscMatrix> {
        self.kernel.compress(t)
    }

    /// Multiply two compressed matrices through the kernel
    pub fn multiply(&self, a: &CscMatrix, b: &CscMatrix) -> Result<CscMatrix> {
        self.kernel.multiply(a, b)
    }

    /// Scratch triplet accumulator sized from the configuration
    pub(crate) fn accumulator(&self, nrows: usize, ncols: usize) -> TripletMatrix {
        self.kernel
            .allocate_triplet(nrows, ncols, self.config.skeleton_capacity)
    }
}
