//! Configuration for the block engine and the Matrix Market loader

/// Configuration for [`crate::BlockEngine`]
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Initial capacity of skeletons and scratch accumulators
    pub skeleton_capacity: usize,
}

impl EngineConfig {
    /// Set the initial capacity of skeletons and scratch accumulators
    pub fn with_skeleton_capacity(mut self, capacity: usize) -> Self {
        self.skeleton_capacity = capacity.max(1);
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            skeleton_capacity: 1,
        }
    }
}

/// Configuration for loading Matrix Market files
#[derive(Debug, Clone)]
pub struct LoadConfig {
    /// Entry count from which entry lines are parsed on the rayon pool
    pub parallel_threshold: usize,
    /// Read the file through a memory map instead of a buffered read
    pub use_mmap: bool,
}

impl LoadConfig {
    /// Set the entry count that switches parsing to the rayon pool
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Read files through a memory map; without the `mmap` feature the file is
    /// read normally and a warning is logged
    pub fn with_mmap(mut self, use_mmap: bool) -> Self {
        self.use_mmap = use_mmap;
        self
    }

    /// Whether `nnz` entries are enough to parse in parallel
    pub fn parse_in_parallel(&self, nnz: usize) -> bool {
        nnz >= self.parallel_threshold
    }
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 100_000,
            use_mmap: false,
        }
    }
}
