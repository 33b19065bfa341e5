use super::parser::*;
use crate::consts::{SOCIAL_LIMIT, SOCIAL_QUERY};
use crate::errors::*;
use crate::http::HttpApi;
use crate::models::*;
use log::info;
use std::sync::Arc;

/// Web search used for the social digest. Without an API key the digest is
/// empty and no request is made.
pub struct SearchApi {
    http: Arc<HttpApi>,
    base_url: String,
    api_key: Option<String>,
}

impl SearchApi {
    pub fn new(http: Arc<HttpApi>, base_url: String, api_key: Option<String>) -> Self {
        SearchApi {
            http,
            base_url,
            api_key,
        }
    }

    pub async fn get_posts(&self) -> Result<Vec<SocialPost>> {
        let Some(key) = self.api_key.as_ref().filter(|k| !k.is_empty()) else {
            info!("search api key not configured, social digest is empty");
            return Ok(vec![]);
        };
        let params = [
            ("q", SOCIAL_QUERY.to_string()),
            ("count", SOCIAL_LIMIT.to_string()),
            ("freshness", "pw".to_string()),
        ];
        let headers = [
            ("Accept", "application/json".to_string()),
            ("X-Subscription-Token", key.clone()),
        ];
        let text = self
            .http
            .get_text(&format!("{}/res/v1/web/search", self.base_url), &params, &headers)
            .await?;
        parse_search_results(&text, SOCIAL_LIMIT)
    }
}
