use super::parser::*;
use crate::consts::FEAR_GREED_LIMIT;
use crate::errors::*;
use crate::http::HttpApi;
use crate::models::*;
use std::sync::Arc;

pub struct FearGreedApi {
    http: Arc<HttpApi>,
    base_url: String,
}

impl FearGreedApi {
    pub fn new(http: Arc<HttpApi>, base_url: String) -> Self {
        FearGreedApi { http, base_url }
    }

    pub async fn get_index(&self) -> Result<FearGreedIndex> {
        let text = self
            .http
            .get_text(
                &format!("{}/fng/", self.base_url),
                &[("limit", FEAR_GREED_LIMIT.to_string())],
                &[],
            )
            .await?;
        parse_fear_greed(&text)
    }
}

pub struct NewsApi {
    http: Arc<HttpApi>,
    base_url: String,
}

impl NewsApi {
    pub fn new(http: Arc<HttpApi>, base_url: String) -> Self {
        NewsApi { http, base_url }
    }

    pub async fn get_news(&self) -> Result<Vec<NewsItem>> {
        let params = [
            ("lang", "EN".to_string()),
            ("sortOrder", "popular".to_string()),
            ("categories", "BTC,Bitcoin,Mining,Regulation".to_string()),
        ];
        let text = self
            .http
            .get_text(&format!("{}/data/v2/news/", self.base_url), &params, &[])
            .await?;
        parse_news(&text)
    }
}
