use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One row of the price table. Everything the aggregator may leave out is
/// optional and omitted from the output when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoinPrice {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub current_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_cap_rank: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_volume: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_24h: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low_24h: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_change_percentage_1h: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_change_percentage_24h: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_change_percentage_7d: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_change_percentage_30d: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub circulating_supply: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_supply: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ath: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ath_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sparkline: Option<Vec<f64>>,
}

/// `[timestamp_ms, value]` pairs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceChart {
    pub prices: Vec<[f64; 2]>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub market_caps: Vec<[f64; 2]>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub total_volumes: Vec<[f64; 2]>,
}

impl PriceChart {
    pub fn closes(&self) -> Vec<f64> {
        self.prices.iter().map(|p| p[1]).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_cryptocurrencies: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markets: Option<u64>,
    pub total_market_cap: BTreeMap<String, f64>,
    pub total_volume: BTreeMap<String, f64>,
    pub market_cap_percentage: BTreeMap<String, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_cap_change_percentage_24h_usd: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FearGreedEntry {
    pub value: u32,
    pub value_classification: String,
    pub timestamp: i64, // 秒
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FearGreedIndex {
    pub data: Vec<FearGreedEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub url: String,
    pub source: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub published: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRate {
    pub vs: String,
    pub rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub btc_usd: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub btc_vs: Option<f64>,
}

impl ExchangeRate {
    // 以美元计价时无需请求上游
    pub fn usd() -> Self {
        ExchangeRate {
            vs: "usd".to_string(),
            rate: 1.0,
            btc_usd: None,
            btc_vs: None,
        }
    }
}
