//! Minimum spacing between outgoing requests

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::{Mutex as AsyncMutex, MutexGuard as AsyncMutexGuard};
use tokio::time::{sleep, Instant};
use tracing::debug;

/// Default spacing between two requests
pub const RATE_DELAY: Duration = Duration::from_millis(2000);

/// Client-side rate limiter shared by every request that should count
/// against the same budget.
///
/// While enabled, dispatches are serialized: a caller holds the dispatch
/// gate from the end of its wait until its request completes, and the
/// completion time becomes the start of the next window.
#[derive(Debug)]
pub struct RateLimiter {
    delay: Duration,
    enabled: AtomicBool,
    last_query: Mutex<Option<Instant>>,
    gate: AsyncMutex<()>,
}

/// Proof that the caller may dispatch one request
///
/// Dropping the permit records the completion time, whichever way the
/// request ended.
#[derive(Debug)]
pub struct RatePermit<'a> {
    limiter: &'a RateLimiter,
    _gate: Option<AsyncMutexGuard<'a, ()>>,
}

impl RateLimiter {
    /// Create a new enabled rate limiter
    pub fn new(delay: Duration) -> Self {
        Self::with_enabled(delay, true)
    }

    /// Create a rate limiter, enabled or not
    pub fn with_enabled(delay: Duration, enabled: bool) -> Self {
        Self {
            delay,
            enabled: AtomicBool::new(enabled),
            last_query: Mutex::new(None),
            gate: AsyncMutex::new(()),
        }
    }

    /// Minimum spacing between requests
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Are we throttling queries?
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    /// Turn throttling on or off
    ///
    /// Turning it back on forgets the last recorded request, so the next
    /// call goes out immediately and throttling resumes from there. An
    /// off-then-on toggle therefore lets that call skip the window left by
    /// the last throttled request.
    pub fn set_enabled(&self, enabled: bool) {
        let was_enabled = self.enabled.swap(enabled, Ordering::SeqCst);
        if enabled && !was_enabled {
            *self.last_query() = None;
            debug!("Rate control re-enabled");
        }
    }

    /// Completion time of the last throttled request
    pub fn last_query_time(&self) -> Option<Instant> {
        *self.last_query()
    }

    /// Wait until a request may be sent
    pub async fn acquire(&self) -> RatePermit<'_> {
        if !self.is_enabled() {
            return RatePermit {
                limiter: self,
                _gate: None,
            };
        }

        let gate = self.gate.lock().await;

        // The window is a floor, so re-check after every wake-up.
        loop {
            let Some(last) = self.last_query_time() else {
                break;
            };
            let ready_at = last + self.delay;
            let now = Instant::now();
            if now >= ready_at {
                break;
            }
            let wait = ready_at - now;
            debug!("Throttling request for {:?}", wait);
            sleep(wait).await;
        }

        RatePermit {
            limiter: self,
            _gate: Some(gate),
        }
    }

    fn last_query(&self) -> std::sync::MutexGuard<'_, Option<Instant>> {
        self.last_query.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self) {
        if !self.is_enabled() {
            return;
        }
        let mut last = self.last_query();
        let now = Instant::now();
        // Keep the timestamp monotonic even if callers race on re-enable.
        if last.map_or(true, |prev| now >= prev) {
            *last = Some(now);
        }
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(RATE_DELAY)
    }
}

impl Drop for RatePermit<'_> {
    fn drop(&mut self) {
        self.limiter.record();
    }
}
