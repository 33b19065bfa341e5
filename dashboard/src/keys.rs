use crate::errors::{DashboardError, Result};
use std::fmt;
use upstream::models::{LongRange, SeriesRange};

pub const DEFAULT_VS: &str = "usd";
const MAX_DAYS: u32 = 3650;

/// Cache key per (endpoint, parameters). Parameters are validated before a
/// key is built and the only free-form part (the coin id) always comes last,
/// so distinct parameter sets never render to the same string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheKey {
    Prices { vs: String },
    Chart { vs: String, days: String, coin: String },
    ChartLong(LongRange),
    Global,
    FearGreed,
    News,
    Ta { coin: String },
    Macro(SeriesRange),
    Mining(SeriesRange),
    Lightning(SeriesRange),
    XPosts,
    ExchangeRate { vs: String },
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheKey::Prices { vs } => write!(f, "prices-{}", vs),
            CacheKey::Chart { vs, days, coin } => write!(f, "chart-{}-{}-{}", vs, days, coin),
            CacheKey::ChartLong(range) => write!(f, "chart-long-{}", range.as_str()),
            CacheKey::Global => write!(f, "global"),
            CacheKey::FearGreed => write!(f, "fear-greed"),
            CacheKey::News => write!(f, "news"),
            CacheKey::Ta { coin } => write!(f, "ta-{}", coin),
            CacheKey::Macro(range) => write!(f, "macro-{}", range.as_str()),
            CacheKey::Mining(range) => write!(f, "mining-{}", range.as_str()),
            CacheKey::Lightning(range) => write!(f, "lightning-{}", range.as_str()),
            CacheKey::XPosts => write!(f, "x-posts"),
            CacheKey::ExchangeRate { vs } => write!(f, "exchange-rate-{}", vs),
        }
    }
}

/// Quote currency: 2-10 ascii letters, lowercased. Absent → usd.
pub fn parse_vs(vs: Option<&str>) -> Result<String> {
    let vs = vs.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_VS);
    let vs = vs.to_ascii_lowercase();
    if !(2..=10).contains(&vs.len()) || !vs.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(DashboardError::invalid(format!("vs currency {:?}", vs)));
    }
    Ok(vs)
}

pub fn parse_coin(coin: &str) -> Result<String> {
    let coin = coin.trim().to_ascii_lowercase();
    let valid = !coin.is_empty()
        && coin.len() <= 64
        && coin
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-');
    if !valid {
        return Err(DashboardError::invalid(format!("coin id {:?}", coin)));
    }
    Ok(coin)
}

/// Chart window: a day count in 1..=3650 or `max`.
pub fn parse_days(days: &str) -> Result<String> {
    let days = days.trim().to_ascii_lowercase();
    if days == "max" {
        return Ok(days);
    }
    match days.parse::<u32>() {
        Ok(n) if (1..=MAX_DAYS).contains(&n) => Ok(n.to_string()),
        _ => Err(DashboardError::invalid(format!("days {:?}", days))),
    }
}

pub fn parse_series_range(range: Option<&str>) -> Result<SeriesRange> {
    match range.map(str::trim).filter(|r| !r.is_empty()) {
        None => Ok(SeriesRange::default()),
        Some(r) => SeriesRange::parse(&r.to_ascii_lowercase())
            .ok_or_else(|| DashboardError::invalid(format!("range {:?}", r))),
    }
}

pub fn parse_long_range(range: &str) -> Result<LongRange> {
    LongRange::parse(&range.trim().to_ascii_lowercase())
        .ok_or_else(|| DashboardError::invalid(format!("range {:?}", range)))
}

