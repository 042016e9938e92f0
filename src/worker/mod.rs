//! Worker pool for parallel vanity address search.
//!
//! This module provides:
//! - Multi-threaded CPU workers
//! - Pool coordination: first-match wins, cooperative stop, grace-period join
//! - Shared attempt statistics

mod cpu;
mod pool;

pub use cpu::{CpuWorker, WorkerStats, BATCH_SIZE};
pub use pool::{VanityResult, WorkerPool, SHUTDOWN_GRACE};
