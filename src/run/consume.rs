//! The dispatch-pace-aggregate loop.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use futures::StreamExt;
use log::debug;
use tokio_util::sync::CancellationToken;

use super::ScanReport;
use crate::aggregate::Aggregator;
use crate::app::{log_progress, shutdown_gracefully};
use crate::config::LOGGING_INTERVAL;
use crate::dispatch::Dispatcher;
use crate::error_handling::ProcessingStats;
use crate::probe::Prober;
use crate::rate_limit::RateLimiter;

/// Probes `hosts`, paces every completion through `limiter` and aggregates.
///
/// Cannot fail: every target produces exactly one result.
pub(crate) async fn consume<P>(
    hosts: &[String],
    prober: Arc<P>,
    concurrency: usize,
    filter: Option<u16>,
    mut limiter: RateLimiter,
    stats: Arc<ProcessingStats>,
) -> ScanReport
where
    P: Prober + Send + Sync + 'static,
{
    let dispatcher = Dispatcher::new(prober, concurrency).with_stats(stats);
    let mut aggregator = Aggregator::new(filter);

    aggregator.start();
    let start_time = std::time::Instant::now();
    let mut completions = dispatcher.dispatch(hosts);
    let targets = completions.expected();

    let received = Arc::new(AtomicUsize::new(0));
    let cancel = CancellationToken::new();
    let cancel_logging = cancel.child_token();
    let received_for_logging = Arc::clone(&received);
    let logging_task = tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(LOGGING_INTERVAL));
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    log_progress(start_time, &received_for_logging, targets);
                }
                _ = cancel_logging.cancelled() => {
                    break;
                }
            }
        }
    });

    while let Some(result) = completions.next().await {
        debug!("{} -> {}", result.url, result.outcome);
        aggregator.record(result);
        received.fetch_add(1, Ordering::SeqCst);
        limiter.pace().await;
    }

    shutdown_gracefully(cancel, Some(logging_task)).await;
    log_progress(start_time, &received, targets);

    let received = aggregator.received();
    let kept = aggregator.kept();
    let (groups, elapsed) = aggregator.finish();

    ScanReport {
        groups,
        elapsed_seconds: elapsed.as_secs_f64(),
        hosts: hosts.len(),
        targets,
        received,
        kept,
    }
}
