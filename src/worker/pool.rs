//! Worker pool management.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender};

use crate::crypto::NetworkProfile;
use crate::matcher::Pattern;

use super::cpu::{CpuWorker, WorkerStats};

/// How long `join` waits for workers after the stop flag is raised.
///
/// Workers poll the flag at batch boundaries, so anything beyond one
/// batch's generation time indicates a stuck worker.
pub const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

/// How often the result wait re-checks the stop flag for external
/// cancellation.
const CANCEL_POLL: Duration = Duration::from_millis(100);

/// Result of a successful vanity address search.
#[derive(Debug, Clone)]
pub struct VanityResult {
    /// The private key (hex encoded, no 0x prefix)
    pub private_key: String,
    /// The FLUX address (base58check encoded)
    pub address: String,
    /// The ID of the worker that found this result
    pub worker_id: usize,
}

/// Manages a pool of workers searching for a single vanity address.
pub struct WorkerPool {
    /// Number of workers
    num_workers: usize,
    /// The pattern being searched for
    pattern: Pattern,
    /// Worker thread handles (Option to allow taking during join)
    handles: Option<Vec<JoinHandle<()>>>,
    /// Channel receiver for the winning result
    result_rx: Receiver<VanityResult>,
    /// Shared stop flag
    stop_flag: Arc<AtomicBool>,
    /// Shared statistics
    stats: Arc<WorkerStats>,
    /// Start time
    start_time: Instant,
}

impl WorkerPool {
    /// Creates a new worker pool with the specified number of workers.
    pub fn new(num_workers: usize, pattern: Pattern, profile: NetworkProfile) -> Self {
        // Single-slot channel: the first worker to match wins; losing
        // senders use try_send and never block on the full slot.
        let (result_tx, result_rx) = bounded(1);
        let stop_flag = Arc::new(AtomicBool::new(false));
        let stats = Arc::new(WorkerStats::new());

        let handles = Self::spawn_workers(
            num_workers,
            pattern.clone(),
            profile,
            result_tx,
            stop_flag.clone(),
            stats.clone(),
        );

        Self {
            num_workers,
            pattern,
            handles: Some(handles),
            result_rx,
            stop_flag,
            stats,
            start_time: Instant::now(),
        }
    }

    /// Spawns worker threads.
    fn spawn_workers(
        num_workers: usize,
        pattern: Pattern,
        profile: NetworkProfile,
        result_tx: Sender<VanityResult>,
        stop_flag: Arc<AtomicBool>,
        stats: Arc<WorkerStats>,
    ) -> Vec<JoinHandle<()>> {
        (0..num_workers)
            .map(|id| {
                let pattern = pattern.clone();
                let result_tx = result_tx.clone();
                let stop_flag = stop_flag.clone();
                let stats = stats.clone();

                thread::Builder::new()
                    .name(format!("vanity-worker-{}", id))
                    .spawn(move || {
                        let worker =
                            CpuWorker::new(id, pattern, profile, result_tx, stop_flag, stats);
                        worker.run();
                    })
                    .expect("Failed to spawn worker thread")
            })
            .collect()
    }

    /// Blocks until a worker finds a match or the pool is cancelled.
    ///
    /// Returns `Some(result)` for the first accepted match, `None` when
    /// the stop flag was raised externally (e.g. Ctrl-C) without a
    /// result. Either way the stop flag is set on return, so all
    /// workers exit at their next batch boundary.
    pub fn run(&self) -> Option<VanityResult> {
        loop {
            match self.result_rx.recv_timeout(CANCEL_POLL) {
                Ok(result) => {
                    self.stop();
                    return Some(result);
                }
                Err(RecvTimeoutError::Timeout) => {
                    if self.is_stopped() {
                        // Cancelled externally, or a winner latched the
                        // flag between polls. The winner sends before it
                        // raises the flag, but both are independent
                        // relaxed operations, so give a racing send one
                        // more poll interval to land before giving up.
                        return self.result_rx.recv_timeout(CANCEL_POLL).ok();
                    }
                }
                Err(RecvTimeoutError::Disconnected) => return None,
            }
        }
    }

    /// Waits for a result with a timeout.
    ///
    /// Returns `Some(result)` if a match arrives in time, `None` otherwise.
    pub fn wait_for_result(&self, timeout: Duration) -> Option<VanityResult> {
        self.result_rx.recv_timeout(timeout).ok()
    }

    /// Signals all workers to stop. Idempotent.
    pub fn stop(&self) {
        self.stop_flag.store(true, Ordering::Relaxed);
    }

    /// Stops the pool and waits for every worker to exit.
    ///
    /// Workers still running when the grace period expires are reported
    /// and detached; std threads cannot be killed, and a straggler here
    /// cannot affect an already-accepted result.
    pub fn join(mut self, grace: Duration) {
        self.stop();
        let deadline = Instant::now() + grace;

        if let Some(handles) = self.handles.take() {
            for handle in handles {
                while !handle.is_finished() && Instant::now() < deadline {
                    thread::sleep(Duration::from_millis(10));
                }

                if handle.is_finished() {
                    let _ = handle.join();
                } else {
                    eprintln!(
                        "Warning: worker {:?} did not exit within {:?}, detaching",
                        handle.thread().name().unwrap_or("?"),
                        grace
                    );
                }
            }
        }
    }

    /// Returns the number of workers.
    pub fn num_workers(&self) -> usize {
        self.num_workers
    }

    /// Returns the pattern being searched for.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Returns the total keys generated across all workers.
    pub fn total_keys(&self) -> u64 {
        self.stats.total_keys()
    }

    /// Returns the total matches found.
    pub fn total_matches(&self) -> u64 {
        self.stats.total_matches()
    }

    /// Returns the elapsed time since the pool was created.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Returns the average generation rate (keys per second).
    pub fn keys_per_second(&self) -> f64 {
        let elapsed = self.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            self.total_keys() as f64 / elapsed
        } else {
            0.0
        }
    }

    /// Returns a clone of the stop flag for external use (e.g. signal handlers).
    pub fn stop_flag_clone(&self) -> Arc<AtomicBool> {
        self.stop_flag.clone()
    }

    /// Returns a clone of the shared statistics handle.
    pub fn stats_clone(&self) -> Arc<WorkerStats> {
        self.stats.clone()
    }

    /// Returns true if the pool has been signaled to stop.
    pub fn is_stopped(&self) -> bool {
        self.stop_flag.load(Ordering::Relaxed)
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        self.stop();
        // Wait for workers to finish if they haven't been joined
        if let Some(handles) = self.handles.take() {
            for handle in handles {
                let _ = handle.join();
            }
        }
    }
}
