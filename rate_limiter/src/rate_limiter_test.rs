#[cfg(test)]
mod tests {
    use crate::RateLimiter;
    use futures::future::join_all;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tokio::time::{Instant, sleep};

    #[tokio::test(start_paused = true)]
    async fn test_first_call_is_immediate() {
        let limiter = RateLimiter::new("test", Duration::from_millis(500));
        let start = Instant::now();
        let v = limiter.throttled_call(|| async { 7 }).await;
        assert_eq!(v, 7);
        assert_eq!(start.elapsed(), Duration::ZERO);
        assert_eq!(limiter.calls_issued().await, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_call_waits_for_interval() {
        let limiter = RateLimiter::new("test", Duration::from_millis(500));
        let start = Instant::now();
        limiter.throttled_call(|| async {}).await;
        limiter.throttled_call(|| async {}).await;
        assert!(start.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_wait_when_interval_already_elapsed() {
        let limiter = RateLimiter::new("test", Duration::from_millis(100));
        limiter.throttled_call(|| async {}).await;

        sleep(Duration::from_millis(250)).await;

        let start = Instant::now();
        limiter.throttled_call(|| async {}).await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_calls_are_spaced_in_fifo_order() {
        let interval = Duration::from_millis(200);
        let limiter = Arc::new(RateLimiter::new("test", interval));
        let starts: Arc<Mutex<Vec<(usize, Instant)>>> = Arc::new(Mutex::new(Vec::new()));
        let n = 6;

        let begin = Instant::now();
        let calls = (0..n).map(|i| {
            let limiter = limiter.clone();
            let starts = starts.clone();
            async move {
                limiter
                    .throttled_call(|| async move {
                        starts.lock().unwrap().push((i, Instant::now()));
                        // 请求本身耗时不影响下一个调用的间隔
                        sleep(Duration::from_millis(50)).await;
                        i
                    })
                    .await
            }
        });
        let results = join_all(calls).await;
        assert_eq!(results, (0..n).collect::<Vec<_>>());

        let starts = starts.lock().unwrap();
        assert_eq!(starts.len(), n);
        for (pos, (i, _)) in starts.iter().enumerate() {
            assert_eq!(*i, pos);
        }
        for pair in starts.windows(2) {
            assert!(pair[1].1 - pair[0].1 >= interval);
        }
        assert!(begin.elapsed() >= interval * (n as u32 - 1));
        assert_eq!(limiter.calls_issued().await, n as u64);
    }

    #[tokio::test(start_paused = true)]
    async fn test_spacing_measured_from_call_start() {
        let interval = Duration::from_millis(100);
        let limiter = RateLimiter::new("test", interval);
        let begin = Instant::now();

        // 第一个请求耗时超过间隔，第二个请求无需额外等待
        limiter
            .throttled_call(|| async { sleep(Duration::from_millis(300)).await })
            .await;
        let second_start = Instant::now();
        limiter.throttled_call(|| async {}).await;
        assert_eq!(second_start - begin, Duration::from_millis(300));
        assert_eq!(second_start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_operation_does_not_block_queue() {
        let limiter = Arc::new(RateLimiter::new("test", Duration::from_millis(100)));

        let first: Result<(), String> = limiter
            .throttled_call(|| async { Err("upstream exploded".to_string()) })
            .await;
        assert!(first.is_err());

        let second: Result<u32, String> = limiter.throttled_call(|| async { Ok(1) }).await;
        assert_eq!(second, Ok(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_spawned_callers_all_complete() {
        let interval = Duration::from_millis(50);
        let limiter = Arc::new(RateLimiter::new("test", interval));
        let begin = Instant::now();
        let mut handles = vec![];

        for i in 0..4u32 {
            let limiter = limiter.clone();
            handles.push(tokio::spawn(async move {
                limiter.throttled_call(|| async move { i * 2 }).await
            }));
        }

        let mut sum = 0;
        for handle in handles {
            sum += handle.await.unwrap();
        }
        assert_eq!(sum, 12);
        assert!(begin.elapsed() >= interval * 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_waiter_releases_queue() {
        let interval = Duration::from_millis(100);
        let limiter = Arc::new(RateLimiter::new("test", interval));
        limiter.throttled_call(|| async {}).await;

        // 等待中的调用被取消后，后续调用仍可继续
        let cancelled = tokio::time::timeout(
            Duration::from_millis(10),
            limiter.throttled_call(|| async {}),
        )
        .await;
        assert!(cancelled.is_err());

        let start = Instant::now();
        limiter.throttled_call(|| async {}).await;
        assert!(start.elapsed() <= interval);
        assert_eq!(limiter.calls_issued().await, 2);
    }
}
