use std::time::{Duration, Instant};

pub struct LatencyGuard {
    process_name: String,
    slow_threshold: Option<Duration>,
    start: Instant,
}

impl LatencyGuard {
    pub fn new(process_name: impl Into<String>) -> Self {
        Self {
            process_name: process_name.into(),
            slow_threshold: None,
            start: Instant::now(),
        }
    }

    // 超过阈值时以warn级别输出
    pub fn with_slow_threshold(mut self, threshold: Duration) -> Self {
        self.slow_threshold = Some(threshold);
        self
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for LatencyGuard {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        match self.slow_threshold {
            Some(threshold) if elapsed >= threshold => log::warn!(
                "{} slow, took {} ms (threshold {} ms)",
                self.process_name,
                elapsed.as_millis(),
                threshold.as_millis()
            ),
            _ => log::debug!(
                "{} took {} us, {} ms",
                self.process_name,
                elapsed.as_micros(),
                elapsed.as_millis()
            ),
        }
    }
}
