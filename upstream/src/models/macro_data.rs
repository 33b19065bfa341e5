use super::network::SeriesPoint;
use serde::{Deserialize, Serialize};

/// Last price of a market instrument plus its change over the requested window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketQuote {
    pub symbol: String,
    pub price: f64,
    pub change_pct: f64,
    pub sparkline: Vec<SeriesPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneySupply {
    pub value: f64, // 十亿美元
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mom_change: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yoy_change: Option<f64>,
    pub sparkline: Vec<SeriesPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyRate {
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_value: Option<f64>,
    pub sparkline: Vec<SeriesPoint>,
}

/// Macro bundle; a series whose fetch failed is simply absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroBundle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dxy: Option<MarketQuote>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spx: Option<MarketQuote>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub djia: Option<MarketQuote>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yield10y: Option<MarketQuote>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gold: Option<MarketQuote>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub silver: Option<MarketQuote>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub m2: Option<MoneySupply>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fed_rate: Option<PolicyRate>,
}

impl MacroBundle {
    pub fn is_empty(&self) -> bool {
        self.dxy.is_none()
            && self.spx.is_none()
            && self.djia.is_none()
            && self.yield10y.is_none()
            && self.gold.is_none()
            && self.silver.is_none()
            && self.m2.is_none()
            && self.fed_rate.is_none()
    }
}
