//! Progress logging utilities.

use log::info;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Logs how many of the expected results have been consumed so far.
pub fn log_progress(start_time: std::time::Instant, received: &Arc<AtomicUsize>, expected: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let received = received.load(Ordering::SeqCst);
    let rate = if elapsed_secs > 0.0 {
        received as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Received {}/{} results in {:.2} seconds (~{:.2} results/sec)",
        received, expected, elapsed_secs, rate
    );
}
