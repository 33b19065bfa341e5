use crate::consts::{NEWS_BODY_CHARS, NEWS_LIMIT};
use crate::errors::{Result, UpstreamError};
use crate::models::*;
use json::{get_array, get_i64, get_str};
use serde_json::Value;

pub fn parse_fear_greed(data: &str) -> Result<FearGreedIndex> {
    let value: Value = json::loads(data)?;
    if let Some(err) = get_str(&value, "/metadata/error") {
        return Err(UpstreamError::parse(format!("fear greed error: {}", err)));
    }
    let rows = json::require_array(&value, "/data")?;
    let data = rows
        .iter()
        .filter_map(|row| {
            Some(FearGreedEntry {
                value: get_i64(row, "/value")?.clamp(0, 100) as u32,
                value_classification: get_str(row, "/value_classification")
                    .unwrap_or("Unknown")
                    .to_string(),
                timestamp: get_i64(row, "/timestamp")?,
            })
        })
        .collect();
    Ok(FearGreedIndex { data })
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Top stories from the news feed, capped and with bodies shortened.
pub fn parse_news(data: &str) -> Result<Vec<NewsItem>> {
    let value: Value = json::loads(data)?;

    // 超限时仍然返回200，只能从Message判断
    if get_str(&value, "/Response") == Some("Error") {
        let message = get_str(&value, "/Message").unwrap_or_default().to_string();
        if message.to_lowercase().contains("rate limit") {
            return Err(UpstreamError::RateLimited { message });
        }
        return Err(UpstreamError::parse(format!("news error: {}", message)));
    }

    let Some(rows) = get_array(&value, "/Data") else {
        return Ok(vec![]);
    };
    Ok(rows
        .iter()
        .filter_map(|row| {
            let title = get_str(row, "/title")?.to_string();
            let url = get_str(row, "/url")?.to_string();
            Some(NewsItem {
                title,
                url,
                source: get_str(row, "/source_info/name")
                    .or_else(|| get_str(row, "/source"))
                    .unwrap_or("Unknown")
                    .to_string(),
                body: truncate_chars(get_str(row, "/body").unwrap_or_default(), NEWS_BODY_CHARS),
                image: get_str(row, "/imageurl").map(str::to_string),
                published: get_i64(row, "/published_on").unwrap_or_default(),
                categories: get_str(row, "/categories").map(str::to_string),
            })
        })
        .take(NEWS_LIMIT)
        .collect())
}
