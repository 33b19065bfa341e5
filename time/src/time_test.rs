#[cfg(test)]
mod tests {
    use crate::{LatencyGuard, format_millis_rfc3339, parse_date_millis, secs_to_millis};
    use std::time::Duration;

    #[test]
    fn test_parse_date_millis() {
        assert_eq!(parse_date_millis("1970-01-02"), Some(86_400_000));
        assert_eq!(parse_date_millis(" 2024-03-01 "), Some(1_709_251_200_000));
        assert_eq!(parse_date_millis("not a date"), None);
        assert_eq!(parse_date_millis(""), None);
    }

    #[test]
    fn test_secs_to_millis() {
        assert_eq!(secs_to_millis(1_700_000_000), 1_700_000_000_000);
        assert_eq!(secs_to_millis(i64::MAX), i64::MAX);
    }

    #[test]
    fn test_format_millis() {
        assert_eq!(
            format_millis_rfc3339(0).as_deref(),
            Some("1970-01-01T00:00:00+00:00")
        );
    }

    #[test]
    fn test_latency_guard_elapsed() {
        let guard = LatencyGuard::new("test").with_slow_threshold(Duration::from_secs(60));
        std::thread::sleep(Duration::from_millis(5));
        assert!(guard.elapsed() >= Duration::from_millis(5));
    }
}
