use super::parser::*;
use crate::consts::{FRED_FED_FUNDS, FRED_M2};
use crate::errors::*;
use crate::http::HttpApi;
use crate::models::*;
use std::sync::Arc;

pub struct FredApi {
    http: Arc<HttpApi>,
    base_url: String,
}

impl FredApi {
    pub fn new(http: Arc<HttpApi>, base_url: String) -> Self {
        FredApi { http, base_url }
    }

    async fn get_series(&self, series_id: &str) -> Result<Vec<SeriesPoint>> {
        let text = self
            .http
            .get_text(
                &format!("{}/graph/fredgraph.csv", self.base_url),
                &[("id", series_id.to_string())],
                &[],
            )
            .await?;
        parse_fred_csv(&text)
    }

    pub async fn get_m2(&self, range: SeriesRange) -> Result<MoneySupply> {
        build_money_supply(self.get_series(FRED_M2).await?, range)
    }

    pub async fn get_fed_rate(&self, range: SeriesRange) -> Result<PolicyRate> {
        build_policy_rate(self.get_series(FRED_FED_FUNDS).await?, range)
    }
}
