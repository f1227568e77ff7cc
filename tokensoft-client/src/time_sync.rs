//! Server clock offset cache.
//!
//! Every signed request is stamped with the server's notion of "now". The
//! server time is probed once and then extrapolated with the local clock
//! until the observation is older than the configured maximum age.

use crate::clock::Clock;
use crate::error::{ClientError, ClientResult};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::debug;

/// A server time observation and the local time it was taken at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeCache {
    pub server_ms: i64,
    pub local_ms: i64,
}

impl TimeCache {
    /// Server time extrapolated to local time `now_ms`, or `None` if that
    /// falls outside the `i64` range.
    pub fn adjusted(&self, now_ms: i64) -> Option<i64> {
        now_ms
            .checked_sub(self.local_ms)
            .and_then(|elapsed| self.server_ms.checked_add(elapsed))
    }

    /// Returns true while the observation is younger than `max_age_ms`.
    pub fn is_fresh(&self, now_ms: i64, max_age_ms: i64) -> bool {
        now_ms.saturating_sub(self.local_ms) < max_age_ms
    }
}

/// Lazily refreshed server time estimate.
///
/// Concurrent callers that both find the cache cold will both probe; the
/// last write wins and either observation is valid.
pub struct TimeSync {
    cache: RwLock<Option<TimeCache>>,
    max_age_ms: i64,
    clock: Arc<dyn Clock>,
}

impl TimeSync {
    pub fn new(max_age: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            cache: RwLock::new(None),
            max_age_ms: i64::try_from(max_age.as_millis()).unwrap_or(i64::MAX),
            clock,
        }
    }

    /// Returns the adjusted server time as a decimal string of milliseconds,
    /// calling `probe` first if the cache is cold.
    ///
    /// A failed probe leaves the cache untouched.
    pub async fn adjusted_time<F, Fut>(&self, probe: F) -> ClientResult<String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ClientResult<i64>>,
    {
        let warm = {
            let guard = self.cache.read().await;
            (*guard).filter(|cache| cache.is_fresh(self.clock.now_ms(), self.max_age_ms))
        }; // read lock dropped here

        let cache = match warm {
            Some(cache) => cache,
            None => {
                let server_ms = probe().await?;
                let cache = TimeCache {
                    server_ms,
                    local_ms: self.clock.now_ms(),
                };
                debug!(
                    "Refreshed server time cache: server={} local={}",
                    cache.server_ms, cache.local_ms
                );
                *self.cache.write().await = Some(cache);
                cache
            }
        };

        let now_ms = self.clock.now_ms();
        cache
            .adjusted(now_ms)
            .map(|ms| ms.to_string())
            .ok_or_else(|| {
                ClientError::Protocol(format!(
                    "server time {} cannot be extrapolated to local time {}",
                    cache.server_ms, now_ms
                ))
            })
    }

    /// The current observation, if any (fresh or not).
    pub async fn snapshot(&self) -> Option<TimeCache> {
        *self.cache.read().await
    }

    /// Drops the observation so the next call probes again.
    pub async fn invalidate(&self) {
        *self.cache.write().await = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjusted_adds_elapsed_local_time() {
        let cache = TimeCache {
            server_ms: 10_000,
            local_ms: 4_000,
        };
        assert_eq!(cache.adjusted(4_000), Some(10_000));
        assert_eq!(cache.adjusted(4_250), Some(10_250));
    }

    #[test]
    fn adjusted_out_of_range_is_none() {
        let cache = TimeCache {
            server_ms: i64::MAX,
            local_ms: 1_000,
        };
        assert_eq!(cache.adjusted(1_000), Some(i64::MAX));
        assert_eq!(cache.adjusted(1_005), None);

        let cache = TimeCache {
            server_ms: 0,
            local_ms: i64::MIN,
        };
        assert_eq!(cache.adjusted(i64::MAX), None);
        assert!(!cache.is_fresh(i64::MAX, i64::MAX));
    }

    #[test]
    fn zero_max_age_is_never_fresh() {
        let cache = TimeCache {
            server_ms: 0,
            local_ms: 100,
        };
        assert!(!cache.is_fresh(100, 0));
        assert!(cache.is_fresh(100, 1));
        assert!(!cache.is_fresh(101, 1));
    }
}
