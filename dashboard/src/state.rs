use crate::config::DashboardConfig;
use crate::data_provider::DataProvider;
use cache::{CachedFetcher, FetchPolicy, TtlCache};
use rate_limiter::RateLimiter;
use serde_json::Value;
use std::{sync::Arc, time::Duration};
use tokio::time::Instant;

/// Process-wide state, built once in `main` and shared by every handler.
pub struct AppState {
    pub config: DashboardConfig,
    pub provider: Arc<dyn DataProvider>,
    pub fetcher: CachedFetcher<Value>,
    // CoinGecko所有接口共用一个限频器
    pub coingecko_limiter: Arc<RateLimiter>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: DashboardConfig, provider: Arc<dyn DataProvider>) -> Self {
        let coingecko_limiter = Arc::new(RateLimiter::new(
            "coingecko",
            Duration::from_millis(config.upstream.coingecko_min_interval_milli_secs),
        ));
        AppState {
            config,
            provider,
            fetcher: CachedFetcher::new(Arc::new(TtlCache::new())),
            coingecko_limiter,
            started_at: Instant::now(),
        }
    }

    /// Policy for one request: `ttl_secs` freshness, the CoinGecko gate when
    /// `throttled`, and no fresh hit when the client asked for a hard refresh.
    pub fn policy(&self, ttl_secs: u64, throttled: bool, hard_refresh: bool) -> FetchPolicy {
        self.config
            .retry
            .policy(Duration::from_secs(ttl_secs))
            .with_limiter(throttled.then(|| self.coingecko_limiter.clone()))
            .bypass_fresh(hard_refresh)
    }

    pub fn cache_len(&self) -> usize {
        self.fetcher.store().len()
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}
