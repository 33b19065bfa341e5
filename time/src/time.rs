use chrono::{DateTime, Utc};

// 上游接口的时间字段混用秒和毫秒，统一换算为毫秒
pub fn secs_to_millis(secs: i64) -> i64 {
    secs.saturating_mul(1000)
}

/// Parses a `YYYY-MM-DD` date (as used by CSV series) into a UTC millisecond timestamp.
pub fn parse_date_millis(date: &str) -> Option<i64> {
    let naive = chrono::NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()?;
    let dt = naive.and_hms_opt(0, 0, 0)?;
    Some(dt.and_utc().timestamp_millis())
}

pub fn format_millis_rfc3339(millis: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp_millis(millis).map(|dt| dt.to_rfc3339())
}
