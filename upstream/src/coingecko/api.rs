use super::parser::*;
use crate::errors::*;
use crate::http::HttpApi;
use crate::models::*;
use log::error;
use std::sync::Arc;

pub struct CoinGeckoApi {
    http: Arc<HttpApi>,
    base_url: String,
    api_key: Option<String>, // demo key，可选
}

impl CoinGeckoApi {
    pub fn new(http: Arc<HttpApi>, base_url: String, api_key: Option<String>) -> Self {
        CoinGeckoApi {
            http,
            base_url,
            api_key,
        }
    }

    fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = vec![("Accept", "application/json".to_string())];
        if let Some(key) = &self.api_key {
            headers.push(("x-cg-demo-api-key", key.clone()));
        }
        headers
    }

    async fn get(&self, endpoint: &str, params: Vec<(&str, String)>) -> Result<String> {
        self.http
            .get_text(
                &format!("{}{}", self.base_url, endpoint),
                &params,
                &self.headers(),
            )
            .await
    }

    pub async fn get_markets(&self, vs: &str, ids: &[String]) -> Result<Vec<CoinPrice>> {
        let params = vec![
            ("vs_currency", vs.to_string()),
            ("ids", ids.join(",")),
            ("order", "market_cap_desc".to_string()),
            ("sparkline", "true".to_string()),
            ("price_change_percentage", "1h,24h,7d,30d".to_string()),
        ];
        let text = self.get("/coins/markets", params).await?;
        parse_markets(&text).map_err(|e| {
            error!("Parse markets result error: {:?}", e);
            e
        })
    }

    pub async fn get_market_chart(&self, coin: &str, days: &str, vs: &str) -> Result<PriceChart> {
        let endpoint = format!("/coins/{}/market_chart", urlencoding::encode(coin));
        let mut params = vec![("vs_currency", vs.to_string()), ("days", days.to_string())];
        if days != "1" {
            params.push(("interval", "daily".to_string()));
        }
        let text = self.get(&endpoint, params).await?;
        parse_market_chart(&text).map_err(|e| {
            error!("Parse market chart {} result error: {:?}", coin, e);
            e
        })
    }

    pub async fn get_global(&self) -> Result<GlobalStats> {
        let text = self.get("/global", vec![]).await?;
        parse_global(&text)
    }

    /// BTC priced in USD and in `vs`, from a single `/simple/price` call.
    pub async fn get_btc_quotes(&self, vs: &str) -> Result<(f64, f64)> {
        let params = vec![
            ("ids", "bitcoin".to_string()),
            ("vs_currencies", format!("usd,{}", vs)),
        ];
        let text = self.get("/simple/price", params).await?;
        let btc_usd = parse_simple_price(&text, "bitcoin", "usd")?;
        let btc_vs = parse_simple_price(&text, "bitcoin", vs)?;
        Ok((btc_usd, btc_vs))
    }
}
