use super::parser::*;
use crate::errors::*;
use crate::http::HttpApi;
use crate::models::*;
use log::error;
use std::sync::Arc;

pub struct BlockchainApi {
    http: Arc<HttpApi>,
    base_url: String,
}

impl BlockchainApi {
    pub fn new(http: Arc<HttpApi>, base_url: String) -> Self {
        BlockchainApi { http, base_url }
    }

    pub async fn get_long_chart(&self, range: LongRange) -> Result<PriceChart> {
        let params = [
            ("timespan", range.timespan().to_string()),
            ("format", "json".to_string()),
            ("sampled", "true".to_string()),
        ];
        let text = self
            .http
            .get_text(&format!("{}/charts/market-price", self.base_url), &params, &[])
            .await?;
        parse_long_chart(&text).map_err(|e| {
            error!("Parse long chart {} error: {:?}", range.as_str(), e);
            e
        })
    }
}
