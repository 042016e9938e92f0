//! Periodic throughput reporting.
//!
//! The reporter runs on its own thread, samples the shared attempt
//! counter at a fixed interval and prints the delta-based rate. It
//! reads shared state but never mutates it, and exits as soon as the
//! stop flag is observed.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::worker::WorkerStats;

/// Granularity of the reporter's sleep, so a raised stop flag is
/// noticed well before the next report is due.
const POLL_SLICE: Duration = Duration::from_millis(100);

/// Samples worker statistics on a background thread.
pub struct ProgressReporter {
    handle: Option<JoinHandle<()>>,
}

impl ProgressReporter {
    /// Spawns the reporter thread.
    pub fn spawn(
        stats: Arc<WorkerStats>,
        stop_flag: Arc<AtomicBool>,
        interval: Duration,
    ) -> Self {
        let handle = thread::Builder::new()
            .name("vanity-reporter".into())
            .spawn(move || {
                let start = Instant::now();
                let mut last_total = 0u64;

                loop {
                    let wake = Instant::now() + interval;
                    while Instant::now() < wake {
                        if stop_flag.load(Ordering::Relaxed) {
                            return;
                        }
                        thread::sleep(POLL_SLICE);
                    }

                    let total = stats.total_keys();
                    let rate = sample_rate(last_total, total, interval);
                    last_total = total;

                    println!(
                        "Tried {} keys ({}/s) - elapsed {}s",
                        format_number(total),
                        format_number(rate as u64),
                        start.elapsed().as_secs()
                    );
                }
            })
            .expect("Failed to spawn reporter thread");

        Self {
            handle: Some(handle),
        }
    }

    /// Waits for the reporter to exit. It only exits once the stop flag
    /// is set, so call this after the pool has been stopped.
    pub fn join(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Keys per second over one sampling interval.
#[inline]
fn sample_rate(previous: u64, current: u64, interval: Duration) -> f64 {
    let secs = interval.as_secs_f64();
    if secs > 0.0 {
        current.saturating_sub(previous) as f64 / secs
    } else {
        0.0
    }
}

/// Format a number with comma separators.
pub fn format_number(n: u64) -> String {
    n.to_string()
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(std::str::from_utf8)
        .collect::<Result<Vec<&str>, _>>()
        .unwrap()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_rate() {
        assert_eq!(sample_rate(0, 5000, Duration::from_secs(5)), 1000.0);
        assert_eq!(sample_rate(2000, 2000, Duration::from_secs(5)), 0.0);
        // Counter resets cannot happen (monotone), but a stale sample
        // must not underflow.
        assert_eq!(sample_rate(100, 50, Duration::from_secs(5)), 0.0);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1_234_567), "1,234,567");
    }

    #[test]
    fn test_reporter_exits_on_stop() {
        let stats = Arc::new(WorkerStats::new());
        let stop_flag = Arc::new(AtomicBool::new(false));

        let reporter =
            ProgressReporter::spawn(stats, stop_flag.clone(), Duration::from_secs(60));
        stop_flag.store(true, Ordering::Relaxed);

        // join() returns promptly because the sleep is sliced
        let start = Instant::now();
        reporter.join();
        assert!(start.elapsed() < Duration::from_secs(5));
    }
}
