use crate::{policy::FetchPolicy, ttl_cache::TtlCache};
use log::{debug, error, warn};
use std::{fmt::Display, future::Future, sync::Arc};

/// Classification the orchestrator needs from a producer's error.
pub trait FetchFailure: Display {
    /// Upstream signalled HTTP 429 or an equivalent quota error.
    fn is_rate_limited(&self) -> bool;

    /// Whether another attempt could succeed at all.
    fn is_retryable(&self) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Hit,   // 未过期的缓存
    Miss,  // 本次从上游获取
    Stale, // 上游失败，返回过期缓存
}

impl CacheStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheStatus::Hit => "HIT",
            CacheStatus::Miss => "MISS",
            CacheStatus::Stale => "STALE",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Fetched<V> {
    pub value: V,
    pub status: CacheStatus,
    pub attempts: u32,
}

pub struct CachedFetcher<V> {
    store: Arc<TtlCache<V>>,
}

impl<V: Clone> CachedFetcher<V> {
    pub fn new(store: Arc<TtlCache<V>>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<TtlCache<V>> {
        &self.store
    }

    /// Serves `key` from cache while fresh, otherwise calls `producer`.
    ///
    /// A failed attempt falls back to the last stored value of any age before
    /// anything else; without one, rate-limited failures wait out the backoff
    /// schedule and other failures wait `retry_delay`, up to
    /// `policy.max_attempts` calls in total. Errors that are not retryable, or
    /// the last error once attempts run out, are returned as is.
    pub async fn fetch<F, Fut, E>(
        &self,
        key: &str,
        policy: &FetchPolicy,
        mut producer: F,
    ) -> Result<Fetched<V>, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<V, E>>,
        E: FetchFailure,
    {
        if !policy.bypass_fresh {
            if let Some(value) = self.store.get_fresh(key, policy.ttl) {
                debug!("cache hit: {}", key);
                return Ok(Fetched {
                    value,
                    status: CacheStatus::Hit,
                    attempts: 0,
                });
            }
        }

        let max_attempts = policy.max_attempts.max(1);
        let mut attempt = 0;
        // 退避按429次数取，不按总尝试次数
        let mut rate_limited = 0;
        loop {
            attempt += 1;
            let result = match &policy.limiter {
                Some(limiter) => limiter.throttled_call(|| producer()).await,
                None => producer().await,
            };

            let err = match result {
                Ok(value) => {
                    self.store.put(key, value.clone());
                    debug!("cache refreshed: {} (attempt {})", key, attempt);
                    return Ok(Fetched {
                        value,
                        status: CacheStatus::Miss,
                        attempts: attempt,
                    });
                }
                Err(err) => err,
            };

            if let Some(value) = self.store.get_any(key) {
                warn!("fetch {} failed: {}, serving stale cache", key, err);
                return Ok(Fetched {
                    value,
                    status: CacheStatus::Stale,
                    attempts: attempt,
                });
            }

            if !err.is_retryable() || attempt >= max_attempts {
                error!(
                    "fetch {} failed after {} attempt(s), no cache to fall back on: {}",
                    key, attempt, err
                );
                return Err(err);
            }

            let delay = if err.is_rate_limited() {
                rate_limited += 1;
                policy.backoff_for(rate_limited)
            } else {
                policy.retry_delay
            };
            warn!(
                "fetch {} attempt {}/{} failed: {}, retrying in {:?}",
                key, attempt, max_attempts, err, delay
            );
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        }
    }
}

impl<V> Clone for CachedFetcher<V> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}
