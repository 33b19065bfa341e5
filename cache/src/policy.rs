use rate_limiter::RateLimiter;
use std::{sync::Arc, time::Duration};

pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_BACKOFF_SECS: [u64; 3] = [3, 7, 11];
pub const DEFAULT_RETRY_DELAY_MILLI_SECS: u64 = 500;

/// How one cached fetch is allowed to hit its upstream.
#[derive(Clone)]
pub struct FetchPolicy {
    pub ttl: Duration,
    pub max_attempts: u32,
    // 429之后的等待时间，超出长度时重复最后一项
    pub backoff_schedule: Vec<Duration>,
    // 其他错误的重试间隔
    pub retry_delay: Duration,
    pub limiter: Option<Arc<RateLimiter>>,
    pub bypass_fresh: bool,
}

impl FetchPolicy {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            backoff_schedule: DEFAULT_BACKOFF_SECS
                .iter()
                .map(|s| Duration::from_secs(*s))
                .collect(),
            retry_delay: Duration::from_millis(DEFAULT_RETRY_DELAY_MILLI_SECS),
            limiter: None,
            bypass_fresh: false,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_backoff_schedule(mut self, schedule: Vec<Duration>) -> Self {
        self.backoff_schedule = schedule;
        self
    }

    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    pub fn with_limiter(mut self, limiter: Option<Arc<RateLimiter>>) -> Self {
        self.limiter = limiter;
        self
    }

    pub fn bypass_fresh(mut self, bypass: bool) -> Self {
        self.bypass_fresh = bypass;
        self
    }

    /// Delay after the `nth` (1-based) rate-limited failure of one fetch.
    pub fn backoff_for(&self, nth: u32) -> Duration {
        if self.backoff_schedule.is_empty() {
            return self.retry_delay;
        }
        let idx = (nth.saturating_sub(1) as usize).min(self.backoff_schedule.len() - 1);
        self.backoff_schedule[idx]
    }
}
