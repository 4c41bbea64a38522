//! Result aggregation.
//!
//! The aggregator is owned by the consuming loop; nothing else touches the
//! groups while a scan runs.

mod group;

use std::time::{Duration, Instant};

use log::trace;

use crate::probe::{ProbeOutcome, ProbeResult};

pub use group::ResultGroup;

/// Groups probe results by outcome, dropping those rejected by the filter.
#[derive(Debug)]
pub struct Aggregator {
    filter: Option<u16>,
    groups: ResultGroup,
    started: Option<Instant>,
    received: usize,
    kept: usize,
}

impl Aggregator {
    /// `filter` keeps only results whose status equals it.
    pub fn new(filter: Option<u16>) -> Self {
        Aggregator {
            filter,
            groups: ResultGroup::default(),
            started: None,
            received: 0,
            kept: 0,
        }
    }

    /// Starts the scan clock.
    pub fn start(&mut self) {
        self.started = Some(Instant::now());
    }

    /// Records one result; returns whether it passed the filter.
    pub fn record(&mut self, result: ProbeResult) -> bool {
        self.received += 1;
        if let Some(code) = self.filter {
            if result.outcome != ProbeOutcome::Status(code) {
                trace!("Filtered out {} ({})", result.url, result.outcome);
                return false;
            }
        }
        self.kept += 1;
        self.groups.insert(result.outcome, result.url);
        true
    }

    /// Results recorded so far, filtered or not.
    pub fn received(&self) -> usize {
        self.received
    }

    /// Results that passed the filter.
    pub fn kept(&self) -> usize {
        self.kept
    }

    /// Stops the clock and hands over the groups.
    ///
    /// Elapsed time is zero if [`Aggregator::start`] was never called.
    pub fn finish(self) -> (ResultGroup, Duration) {
        let elapsed = self
            .started
            .map(|started| started.elapsed())
            .unwrap_or_default();
        (self.groups, elapsed)
    }
}
