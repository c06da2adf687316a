//! Partitioning of the input into worker-sized chunks.

use crate::domain::ChunkingMode;

pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Resolved chunk size strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkStrategy {
    Fixed(usize),
    PerWorker,
}

impl Default for ChunkStrategy {
    fn default() -> Self {
        ChunkStrategy::Fixed(DEFAULT_CHUNK_SIZE)
    }
}

impl ChunkStrategy {
    pub fn from_mode(mode: ChunkingMode, chunk_size: usize) -> Self {
        match mode {
            ChunkingMode::Fixed => ChunkStrategy::Fixed(chunk_size),
            ChunkingMode::PerWorker => ChunkStrategy::PerWorker,
        }
    }

    /// Number of records per chunk for `total` records and `workers` threads.
    /// Never zero.
    pub fn chunk_size(self, total: usize, workers: usize) -> usize {
        match self {
            ChunkStrategy::Fixed(n) => n.max(1),
            ChunkStrategy::PerWorker => total.div_ceil(workers.max(1)).max(1),
        }
    }
}
