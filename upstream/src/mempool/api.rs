use super::parser::*;
use crate::errors::*;
use crate::http::HttpApi;
use crate::models::*;
use log::warn;
use std::sync::Arc;

pub struct MempoolApi {
    http: Arc<HttpApi>,
    base_url: String,
}

impl MempoolApi {
    pub fn new(http: Arc<HttpApi>, base_url: String) -> Self {
        MempoolApi { http, base_url }
    }

    async fn get(&self, endpoint: &str) -> Result<String> {
        self.http
            .get_text(&format!("{}{}", self.base_url, endpoint), &[], &[])
            .await
    }

    /// The difficulty adjustment is mandatory; hashrate series and tip height
    /// are decoration and are dropped when their calls fail.
    pub async fn get_mining(&self, range: SeriesRange) -> Result<MiningSnapshot> {
        let hashrate_endpoint = format!("/api/v1/mining/hashrate/{}", range.as_str());
        let (adjustment, hashrate, height) = tokio::join!(
            self.get("/api/v1/difficulty-adjustment"),
            self.get(&hashrate_endpoint),
            self.get("/api/blocks/tip/height"),
        );

        let adjustment = parse_difficulty_adjustment(&adjustment?)?;
        let hashrate = match hashrate.and_then(|text| parse_hashrate(&text)) {
            Ok(h) => Some(h),
            Err(e) => {
                warn!("mempool hashrate {} unavailable: {}", range.as_str(), e);
                None
            }
        };
        let height = match height.and_then(|text| parse_tip_height(&text)) {
            Ok(h) => Some(h),
            Err(e) => {
                warn!("mempool tip height unavailable: {}", e);
                None
            }
        };
        Ok(build_mining_snapshot(adjustment, hashrate, height))
    }

    pub async fn get_lightning(&self, range: SeriesRange) -> Result<LightningSnapshot> {
        let history_endpoint = format!("/api/v1/lightning/statistics/{}", range.as_str());
        let (latest, history) = tokio::join!(
            self.get("/api/v1/lightning/statistics/latest"),
            self.get(&history_endpoint),
        );

        let latest = parse_lightning_latest(&latest?)?;
        let history = match history.and_then(|text| parse_lightning_history(&text)) {
            Ok(h) => h,
            Err(e) => {
                warn!("lightning history {} unavailable: {}", range.as_str(), e);
                vec![]
            }
        };
        Ok(build_lightning_snapshot(latest, history))
    }
}
