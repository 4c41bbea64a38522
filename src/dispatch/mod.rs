//! Bounded-concurrency fan-out of probe targets.
//!
//! Every host becomes two targets (http, then https). A feeder task takes one
//! semaphore permit per target and spawns a worker that probes and sends the
//! result down an unbounded channel. The consumer reads the channel through
//! [`Completions`] in completion order, so pacing on the consumer side never
//! holds up a probe.

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures::Stream;
use log::{debug, warn};
use tokio::sync::{mpsc, Semaphore};

use crate::error_handling::{ErrorType, ProcessingStats};
use crate::initialization::init_semaphore;
use crate::probe::{targets_for, ProbeOutcome, ProbeResult, Prober};

/// Runs probes on a fixed-size worker pool.
pub struct Dispatcher<P> {
    prober: Arc<P>,
    semaphore: Arc<Semaphore>,
    stats: Option<Arc<ProcessingStats>>,
}

impl<P> Dispatcher<P>
where
    P: Prober + Send + Sync + 'static,
{
    /// Creates a dispatcher allowing at most `concurrency` probes in flight.
    pub fn new(prober: Arc<P>, concurrency: usize) -> Self {
        Dispatcher {
            prober,
            semaphore: init_semaphore(concurrency),
            stats: None,
        }
    }

    /// Records panicked probes in `stats`.
    pub fn with_stats(mut self, stats: Arc<ProcessingStats>) -> Self {
        self.stats = Some(stats);
        self
    }

    /// Submits two targets per host and returns the stream of completions.
    ///
    /// Hosts are trimmed; hosts that are empty afterwards are skipped. Must be
    /// called from within a tokio runtime.
    pub fn dispatch<S: AsRef<str>>(&self, hosts: &[S]) -> Completions {
        let targets: Vec<String> = hosts
            .iter()
            .map(|host| host.as_ref().trim())
            .filter(|host| !host.is_empty())
            .flat_map(targets_for)
            .collect();
        let expected = targets.len();
        debug!("Dispatching {expected} probe targets");

        let (tx, rx) = mpsc::unbounded_channel();
        let prober = Arc::clone(&self.prober);
        let semaphore = Arc::clone(&self.semaphore);
        let stats = self.stats.clone();

        tokio::spawn(async move {
            for url in targets {
                let permit = match Arc::clone(&semaphore).acquire_owned().await {
                    Ok(permit) => permit,
                    Err(e) => {
                        warn!("Worker pool closed before probing {url}: {e}");
                        let _ = tx.send(ProbeResult::new(url, ProbeOutcome::Unreachable));
                        continue;
                    }
                };

                let tx = tx.clone();
                let prober = Arc::clone(&prober);
                let stats = stats.clone();
                tokio::spawn(async move {
                    let _permit = permit;
                    let outcome = run_probe(prober, url.clone(), stats.as_deref()).await;
                    // The receiver only goes away if the consumer gave up.
                    let _ = tx.send(ProbeResult::new(url, outcome));
                });
            }
        });

        Completions { rx, expected }
    }
}

/// Probes `url` in its own task so a panic becomes `Unreachable`.
async fn run_probe<P>(prober: Arc<P>, url: String, stats: Option<&ProcessingStats>) -> ProbeOutcome
where
    P: Prober + Send + Sync + 'static,
{
    let probe_url = url.clone();
    match tokio::spawn(async move { prober.probe(&probe_url).await }).await {
        Ok(outcome) => outcome,
        Err(e) => {
            warn!("Probe of {url} did not complete: {e}");
            if let Some(stats) = stats {
                stats.increment_error(ErrorType::ProbeTaskPanicked);
            }
            ProbeOutcome::Unreachable
        }
    }
}

/// Probe results in completion order.
///
/// Ends after every submitted target has reported.
pub struct Completions {
    rx: mpsc::UnboundedReceiver<ProbeResult>,
    expected: usize,
}

impl Completions {
    /// Number of results this stream will yield.
    pub fn expected(&self) -> usize {
        self.expected
    }
}

impl Stream for Completions {
    type Item = ProbeResult;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_recv(cx)
    }
}
