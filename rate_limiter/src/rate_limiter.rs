use log::info;
use std::future::Future;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{Instant, sleep_until};

struct Inner {
    last_call_at: Option<Instant>,
    calls: u64,
}

/// Spaces out calls to one upstream provider.
///
/// Every caller queues on a fair (FIFO) mutex; the holder sleeps until
/// `min_interval` has passed since the previous call *started*, records its
/// own start and releases the queue before running the actual request, so
/// the request round trip never delays the next waiter.
pub struct RateLimiter {
    name: String,
    min_interval: Duration,
    inner: Mutex<Inner>,
}

impl RateLimiter {
    pub fn new(name: impl Into<String>, min_interval: Duration) -> Self {
        Self {
            name: name.into(),
            min_interval,
            inner: Mutex::new(Inner {
                last_call_at: None,
                calls: 0,
            }),
        }
    }

    // 等待轮到自己，返回后即可发起请求
    pub async fn wait(&self) {
        let mut inner = self.inner.lock().await;

        if let Some(last_call_at) = inner.last_call_at {
            let eligible_at = last_call_at + self.min_interval;
            let now = Instant::now();
            if eligible_at > now {
                info!(
                    "RateLimiter[{}] sleeping for {:?} to respect min interval",
                    self.name,
                    eligible_at - now
                );
                sleep_until(eligible_at).await;
            }
        }

        inner.last_call_at = Some(Instant::now());
        inner.calls += 1;
    }

    /// Runs `operation` once its turn arrives. The operation's result (an
    /// error included) is returned untouched; the queue has already moved on.
    pub async fn throttled_call<F, Fut, T>(&self, operation: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        self.wait().await;
        operation().await
    }

    pub async fn calls_issued(&self) -> u64 {
        self.inner.lock().await.calls
    }
}
