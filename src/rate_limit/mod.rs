//! Consumer-side pacing of probe results.
//!
//! The limiter sits between the completion stream and the aggregator. It only
//! delays the consumer; probes already in flight keep running and their
//! results queue up in the completion channel.

use std::time::Duration;

use tokio::time::Instant;

use crate::config::{Pacing, RateLimit};

/// Paces result consumption to at most `rate_limit` results per second.
#[derive(Debug)]
pub struct RateLimiter {
    strategy: Strategy,
}

#[derive(Debug)]
enum Strategy {
    /// Sleep one interval after every result.
    Fixed { interval: Duration },
    /// Classic token bucket refilled from elapsed time.
    TokenBucket {
        rate: f64,
        capacity: f64,
        tokens: f64,
        last_refill: Instant,
    },
}

impl RateLimiter {
    /// Sleeps `1 / rate` seconds after each consumed result.
    pub fn fixed(rate: RateLimit) -> Self {
        RateLimiter {
            strategy: Strategy::Fixed {
                interval: rate.interval(),
            },
        }
    }

    /// Allows up to `burst` results back to back, then `rate` per second.
    ///
    /// The bucket starts full. A `burst` of zero is treated as one.
    pub fn token_bucket(rate: RateLimit, burst: u32) -> Self {
        let capacity = f64::from(burst.max(1));
        RateLimiter {
            strategy: Strategy::TokenBucket {
                rate: f64::from(rate.per_second()),
                capacity,
                tokens: capacity,
                last_refill: Instant::now(),
            },
        }
    }

    /// Builds the limiter for the selected pacing strategy.
    pub fn new(pacing: Pacing, rate: RateLimit, burst: u32) -> Self {
        match pacing {
            Pacing::Fixed => Self::fixed(rate),
            Pacing::TokenBucket => Self::token_bucket(rate, burst),
        }
    }

    /// Waits as long as the strategy requires after a result was consumed.
    pub async fn pace(&mut self) {
        match &mut self.strategy {
            Strategy::Fixed { interval } => tokio::time::sleep(*interval).await,
            Strategy::TokenBucket {
                rate,
                capacity,
                tokens,
                last_refill,
            } => {
                let now = Instant::now();
                let elapsed = now.duration_since(*last_refill).as_secs_f64();
                *tokens = (*tokens + elapsed * *rate).min(*capacity);
                *last_refill = now;

                if *tokens >= 1.0 {
                    *tokens -= 1.0;
                    return;
                }

                // Wait for the missing fraction of a token, then spend it.
                let wait = Duration::from_secs_f64((1.0 - *tokens) / *rate);
                tokio::time::sleep(wait).await;
                *tokens = 0.0;
                *last_refill = Instant::now();
            }
        }
    }
}
