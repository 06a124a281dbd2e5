//! Run parameters.

use std::num::NonZeroUsize;

/// Fragment count and worker-pool size.
pub const DEFAULT_NUM_CHUNKS: NonZeroUsize = match NonZeroUsize::new(8) {
    Some(n) => n,
    None => unreachable!(),
};

/// Number of words handed to the visualizer.
pub const DEFAULT_TOP_N: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Fragments to split the text into; also the number of concurrent workers.
    pub num_chunks: NonZeroUsize,
    pub top_n: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            num_chunks: DEFAULT_NUM_CHUNKS,
            top_n: DEFAULT_TOP_N,
        }
    }
}
