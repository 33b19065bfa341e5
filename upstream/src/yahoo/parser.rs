use crate::errors::{Result, UpstreamError};
use crate::models::*;
use json::{as_f64, get_array, get_f64, get_i64, get_str};
use serde_json::Value;

/// Yahoo `/v8/finance/chart/{symbol}` → quote over `range`.
///
/// Null closes (holidays, halted sessions) are skipped. For ranges Yahoo
/// does not offer the caller fetches a longer one; the series is cut back
/// to `range` here. Also returns the last regular-market trade time (ms)
/// when Yahoo reports one.
pub fn parse_chart_quote(
    data: &str,
    symbol: &str,
    range: SeriesRange,
) -> Result<(MarketQuote, Option<i64>)> {
    let value: Value = json::loads(data)?;
    if let Some(description) = get_str(&value, "/chart/error/description") {
        return Err(UpstreamError::parse(format!("{}: {}", symbol, description)));
    }
    let result = value
        .pointer("/chart/result/0")
        .ok_or_else(|| UpstreamError::parse(format!("{}: empty chart result", symbol)))?;

    let timestamps = get_array(result, "/timestamp").cloned().unwrap_or_default();
    let closes = get_array(result, "/indicators/quote/0/close")
        .cloned()
        .unwrap_or_default();
    let points = timestamps
        .iter()
        .zip(closes.iter())
        .filter_map(|(t, c)| {
            Some(SeriesPoint {
                t: time::secs_to_millis(t.as_i64()?),
                v: as_f64(c)?,
            })
        })
        .collect::<Vec<_>>();
    let sparkline = trim_to_window(points, range.millis());

    let price = get_f64(result, "/meta/regularMarketPrice")
        .or_else(|| sparkline.last().map(|p| p.v))
        .ok_or_else(|| UpstreamError::parse(format!("{}: no price", symbol)))?;
    let change_pct = match sparkline.first() {
        Some(first) if first.v.abs() > f64::EPSILON => (price - first.v) / first.v * 100.0,
        _ => 0.0,
    };

    let market_time = get_i64(result, "/meta/regularMarketTime").map(time::secs_to_millis);
    let quote = MarketQuote {
        symbol: get_str(result, "/meta/symbol").unwrap_or(symbol).to_string(),
        price,
        change_pct,
        sparkline,
    };
    Ok((quote, market_time))
}
