use crate::errors::{Result, UpstreamError};
use crate::models::*;
use log::warn;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SparklineRaw {
    price: Vec<Option<f64>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CoinMarketRaw {
    id: Option<String>,
    symbol: Option<String>,
    name: Option<String>,
    image: Option<String>,
    current_price: Option<f64>,
    market_cap: Option<f64>,
    market_cap_rank: Option<u32>,
    total_volume: Option<f64>,
    high_24h: Option<f64>,
    low_24h: Option<f64>,
    price_change_percentage_24h: Option<f64>,
    price_change_percentage_1h_in_currency: Option<f64>,
    price_change_percentage_24h_in_currency: Option<f64>,
    price_change_percentage_7d_in_currency: Option<f64>,
    price_change_percentage_30d_in_currency: Option<f64>,
    circulating_supply: Option<f64>,
    max_supply: Option<f64>,
    ath: Option<f64>,
    ath_date: Option<String>,
    sparkline_in_7d: Option<SparklineRaw>,
}

impl CoinMarketRaw {
    // 缺少id或价格的行直接丢弃
    fn into_price(self) -> Option<CoinPrice> {
        let id = self.id?;
        let current_price = self.current_price?;
        let sparkline = self
            .sparkline_in_7d
            .map(|s| s.price.into_iter().flatten().collect::<Vec<f64>>())
            .filter(|s| !s.is_empty());
        Some(CoinPrice {
            id,
            symbol: self.symbol,
            name: self.name,
            image: self.image,
            current_price,
            market_cap: self.market_cap,
            market_cap_rank: self.market_cap_rank,
            total_volume: self.total_volume,
            high_24h: self.high_24h,
            low_24h: self.low_24h,
            price_change_percentage_1h: self.price_change_percentage_1h_in_currency,
            price_change_percentage_24h: self
                .price_change_percentage_24h_in_currency
                .or(self.price_change_percentage_24h),
            price_change_percentage_7d: self.price_change_percentage_7d_in_currency,
            price_change_percentage_30d: self.price_change_percentage_30d_in_currency,
            circulating_supply: self.circulating_supply,
            max_supply: self.max_supply,
            ath: self.ath,
            ath_date: self.ath_date,
            sparkline,
        })
    }
}

pub fn parse_markets(data: &str) -> Result<Vec<CoinPrice>> {
    let raw: Vec<CoinMarketRaw> = json::loads(data)?;
    let total = raw.len();
    let prices: Vec<CoinPrice> = raw.into_iter().filter_map(CoinMarketRaw::into_price).collect();
    if prices.len() < total {
        warn!(
            "coingecko markets: dropped {} row(s) without id or price",
            total - prices.len()
        );
    }
    Ok(prices)
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MarketChartRaw {
    prices: Vec<Vec<Option<f64>>>,
    market_caps: Vec<Vec<Option<f64>>>,
    total_volumes: Vec<Vec<Option<f64>>>,
}

fn to_pairs(raw: Vec<Vec<Option<f64>>>) -> Vec<[f64; 2]> {
    raw.into_iter()
        .filter_map(|pair| match pair.as_slice() {
            [Some(t), Some(v)] => Some([*t, *v]),
            _ => None,
        })
        .collect()
}

pub fn parse_market_chart(data: &str) -> Result<PriceChart> {
    let raw: MarketChartRaw = json::loads(data)?;
    let chart = PriceChart {
        prices: to_pairs(raw.prices),
        market_caps: to_pairs(raw.market_caps),
        total_volumes: to_pairs(raw.total_volumes),
    };
    if chart.prices.is_empty() {
        return Err(UpstreamError::parse("market chart has no prices"));
    }
    Ok(chart)
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GlobalDataRaw {
    active_cryptocurrencies: Option<u64>,
    markets: Option<u64>,
    total_market_cap: BTreeMap<String, f64>,
    total_volume: BTreeMap<String, f64>,
    market_cap_percentage: BTreeMap<String, f64>,
    market_cap_change_percentage_24h_usd: Option<f64>,
    updated_at: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct GlobalRaw {
    data: GlobalDataRaw,
}

pub fn parse_global(data: &str) -> Result<GlobalStats> {
    let raw: GlobalRaw = json::loads(data)?;
    let d = raw.data;
    Ok(GlobalStats {
        active_cryptocurrencies: d.active_cryptocurrencies,
        markets: d.markets,
        total_market_cap: d.total_market_cap,
        total_volume: d.total_volume,
        market_cap_percentage: d.market_cap_percentage,
        market_cap_change_percentage_24h_usd: d.market_cap_change_percentage_24h_usd,
        updated_at: d.updated_at,
    })
}

/// Reads `{coin: {vs: price}}` from `/simple/price`.
pub fn parse_simple_price(data: &str, coin: &str, vs: &str) -> Result<f64> {
    let value: serde_json::Value = json::loads(data)?;
    json::require_f64(&value, &format!("/{}/{}", coin, vs)).map_err(UpstreamError::from)
}

/// Cross rate USD→`vs` derived from BTC quoted in both currencies. Good enough
/// for display conversion, nothing more.
pub fn derive_cross_rate(vs: &str, btc_usd: f64, btc_vs: f64) -> Result<ExchangeRate> {
    if btc_usd <= 0.0 || btc_vs <= 0.0 {
        return Err(UpstreamError::parse(format!(
            "invalid btc quotes for cross rate: usd={}, {}={}",
            btc_usd, vs, btc_vs
        )));
    }
    Ok(ExchangeRate {
        vs: vs.to_string(),
        rate: btc_vs / btc_usd,
        btc_usd: Some(btc_usd),
        btc_vs: Some(btc_vs),
    })
}
