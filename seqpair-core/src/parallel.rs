//! Parallel processing utilities

use crate::{SeqpairError, SeqpairResult};

/// Resolve a requested thread count, where 0 means every available core.
pub fn effective_threads(threads: usize) -> usize {
    if threads == 0 {
        num_cpus::get()
    } else {
        threads
    }
}

/// Configure the global thread pool
pub fn configure_thread_pool(threads: usize) -> SeqpairResult<()> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(effective_threads(threads))
        .build_global()
        .map_err(|e| SeqpairError::Configuration(format!("Failed to build thread pool: {}", e)))
}

/// Build a dedicated pool that caps how many tasks run at once.
pub fn bounded_pool(max_in_flight: usize) -> SeqpairResult<rayon::ThreadPool> {
    let threads = effective_threads(max_in_flight);
    tracing::trace!(threads, "building bounded pool");

    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("seqpair-extend-{}", i))
        .build()
        .map_err(|e| SeqpairError::Configuration(format!("Failed to build thread pool: {}", e)))
}
