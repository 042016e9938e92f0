//! CPU-based search worker.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use crossbeam_channel::Sender;

use crate::crypto::{Keypair, NetworkProfile};
use crate::matcher::Pattern;

use super::VanityResult;

/// Keys generated between stop-flag checks and counter updates.
///
/// Amortizes atomic contention while bounding cancellation latency to
/// one batch's generation time.
pub const BATCH_SIZE: u64 = 1000;

/// Shared search statistics, updated by all workers.
#[derive(Debug, Default)]
pub struct WorkerStats {
    /// Total keys generated
    pub keys_generated: AtomicU64,
    /// Matches found
    pub matches_found: AtomicU64,
}

impl WorkerStats {
    /// Creates new worker stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total keys generated.
    pub fn total_keys(&self) -> u64 {
        self.keys_generated.load(Ordering::Relaxed)
    }

    /// Returns the total matches found.
    pub fn total_matches(&self) -> u64 {
        self.matches_found.load(Ordering::Relaxed)
    }
}

/// A CPU worker that generates and tests keypairs.
pub struct CpuWorker {
    /// Worker ID
    id: usize,
    /// The pattern to match against
    pattern: Pattern,
    /// Which address encoding to derive
    profile: NetworkProfile,
    /// Channel to send the winning result
    result_tx: Sender<VanityResult>,
    /// Shared stop flag
    stop_flag: Arc<AtomicBool>,
    /// Shared statistics
    stats: Arc<WorkerStats>,
}

impl CpuWorker {
    /// Creates a new CPU worker.
    pub fn new(
        id: usize,
        pattern: Pattern,
        profile: NetworkProfile,
        result_tx: Sender<VanityResult>,
        stop_flag: Arc<AtomicBool>,
        stats: Arc<WorkerStats>,
    ) -> Self {
        Self {
            id,
            pattern,
            profile,
            result_tx,
            stop_flag,
            stats,
        }
    }

    /// Runs the worker loop.
    ///
    /// Generates keypairs in batches until a match is found or the stop
    /// flag is observed. The first matching worker publishes its result
    /// and latches the stop flag; all others exit at their next batch
    /// boundary. Partial batch counts are flushed on exit so the shared
    /// counter reflects the keys actually tested.
    pub fn run(&self) {
        loop {
            if self.stop_flag.load(Ordering::Relaxed) {
                break;
            }

            let mut tried = 0u64;
            let mut found = false;

            for _ in 0..BATCH_SIZE {
                let keypair = Keypair::generate(self.profile);
                tried += 1;

                if self.pattern.matches(keypair.address()).is_match() {
                    self.stats.matches_found.fetch_add(1, Ordering::Relaxed);

                    let result = VanityResult {
                        private_key: keypair.private_key_hex(),
                        address: keypair.address().to_string(),
                        worker_id: self.id,
                    };

                    // Single-slot channel: the first sender wins, a losing
                    // send fails without blocking and is simply dropped.
                    let _ = self.result_tx.try_send(result);
                    self.stop_flag.store(true, Ordering::Relaxed);
                    found = true;
                    break;
                }
            }

            self.stats.keys_generated.fetch_add(tried, Ordering::Relaxed);

            if found {
                break;
            }
        }
    }

    /// Returns the worker ID.
    pub fn id(&self) -> usize {
        self.id
    }
}
