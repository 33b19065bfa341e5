use super::parser::*;
use crate::errors::*;
use crate::http::HttpApi;
use crate::models::*;
use log::debug;
use std::sync::Arc;

pub struct YahooApi {
    http: Arc<HttpApi>,
    base_url: String,
}

impl YahooApi {
    pub fn new(http: Arc<HttpApi>, base_url: String) -> Self {
        YahooApi { http, base_url }
    }

    pub async fn get_quote(&self, symbol: &str, range: SeriesRange) -> Result<MarketQuote> {
        let url = format!(
            "{}/v8/finance/chart/{}",
            self.base_url,
            urlencoding::encode(symbol)
        );
        let params = [
            ("range", range.yahoo_str().to_string()),
            ("interval", "1d".to_string()),
        ];
        let text = self.http.get_text(&url, &params, &[]).await?;
        let (quote, market_time) = parse_chart_quote(&text, symbol, range)?;
        if let Some(ts) = market_time {
            debug!(
                "{} last trade at {}",
                symbol,
                time::format_millis_rfc3339(ts).unwrap_or_default()
            );
        }
        Ok(quote)
    }
}
