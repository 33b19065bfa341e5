use crate::errors::{Result, UpstreamError};
use crate::models::PriceChart;
use json::{get_f64, get_i64, get_str};
use serde_json::Value;

/// blockchain.info `/charts/market-price` → price pairs `[ms, usd]`, oldest first.
pub fn parse_long_chart(data: &str) -> Result<PriceChart> {
    let value: Value = json::loads(data)?;
    if let Some(status) = get_str(&value, "/status") {
        if status != "ok" {
            return Err(UpstreamError::parse(format!("chart status: {}", status)));
        }
    }
    let rows = json::require_array(&value, "/values")?;
    let mut prices = rows
        .iter()
        .filter_map(|row| {
            let t = time::secs_to_millis(get_i64(row, "/x")?);
            let y = get_f64(row, "/y")?;
            Some([t as f64, y])
        })
        .collect::<Vec<_>>();
    if prices.is_empty() {
        return Err(UpstreamError::parse("long chart without values"));
    }
    prices.sort_by(|a, b| a[0].total_cmp(&b[0]));
    Ok(PriceChart {
        prices,
        market_caps: vec![],
        total_volumes: vec![],
    })
}
