use super::DataProvider;
use crate::config::DashboardConfig;
use crate::errors::{DashboardError, Result};
use async_trait::async_trait;
use std::sync::Arc;
use upstream::blockchain::BlockchainApi;
use upstream::coingecko::CoinGeckoApi;
use upstream::fred::FredApi;
use upstream::mempool::MempoolApi;
use upstream::models::*;
use upstream::search::SearchApi;
use upstream::sentiment::{FearGreedApi, NewsApi};
use upstream::yahoo::YahooApi;
use upstream::HttpApi;

pub struct UpstreamDataProvider {
    coin_ids: Vec<String>,
    coingecko: CoinGeckoApi,
    fear_greed: FearGreedApi,
    news: NewsApi,
    mempool: MempoolApi,
    blockchain: BlockchainApi,
    yahoo: YahooApi,
    fred: FredApi,
    search: SearchApi,
}

impl UpstreamDataProvider {
    pub fn new(config: &DashboardConfig) -> Result<Self> {
        let up = &config.upstream;
        let mut http = HttpApi::new(config.proxy_url(), up.api_timeout_milli_secs);
        http.init().map_err(|e| DashboardError::ConfigError {
            message: e.to_string(),
        })?;
        let http = Arc::new(http);

        Ok(UpstreamDataProvider {
            coin_ids: up.coin_ids.clone(),
            coingecko: CoinGeckoApi::new(
                http.clone(),
                up.coingecko_base_url.clone(),
                up.coingecko_api_key.clone(),
            ),
            fear_greed: FearGreedApi::new(http.clone(), up.fear_greed_base_url.clone()),
            news: NewsApi::new(http.clone(), up.news_base_url.clone()),
            mempool: MempoolApi::new(http.clone(), up.mempool_base_url.clone()),
            blockchain: BlockchainApi::new(http.clone(), up.blockchain_base_url.clone()),
            yahoo: YahooApi::new(http.clone(), up.yahoo_base_url.clone()),
            fred: FredApi::new(http.clone(), up.fred_base_url.clone()),
            search: SearchApi::new(http, up.search_base_url.clone(), up.search_api_key.clone()),
        })
    }
}

#[async_trait]
impl DataProvider for UpstreamDataProvider {
    async fn get_prices(&self, vs: &str) -> Result<Vec<CoinPrice>> {
        Ok(self.coingecko.get_markets(vs, &self.coin_ids).await?)
    }

    async fn get_chart(&self, coin: &str, days: &str, vs: &str) -> Result<PriceChart> {
        Ok(self.coingecko.get_market_chart(coin, days, vs).await?)
    }

    async fn get_long_chart(&self, range: LongRange) -> Result<PriceChart> {
        Ok(self.blockchain.get_long_chart(range).await?)
    }

    async fn get_global(&self) -> Result<GlobalStats> {
        Ok(self.coingecko.get_global().await?)
    }

    async fn get_btc_quotes(&self, vs: &str) -> Result<(f64, f64)> {
        Ok(self.coingecko.get_btc_quotes(vs).await?)
    }

    async fn get_fear_greed(&self) -> Result<FearGreedIndex> {
        Ok(self.fear_greed.get_index().await?)
    }

    async fn get_news(&self) -> Result<Vec<NewsItem>> {
        Ok(self.news.get_news().await?)
    }

    async fn get_social_posts(&self) -> Result<Vec<SocialPost>> {
        Ok(self.search.get_posts().await?)
    }

    async fn get_market_quote(&self, symbol: &str, range: SeriesRange) -> Result<MarketQuote> {
        Ok(self.yahoo.get_quote(symbol, range).await?)
    }

    async fn get_m2(&self, range: SeriesRange) -> Result<MoneySupply> {
        Ok(self.fred.get_m2(range).await?)
    }

    async fn get_fed_rate(&self, range: SeriesRange) -> Result<PolicyRate> {
        Ok(self.fred.get_fed_rate(range).await?)
    }

    async fn get_mining(&self, range: SeriesRange) -> Result<MiningSnapshot> {
        Ok(self.mempool.get_mining(range).await?)
    }

    async fn get_lightning(&self, range: SeriesRange) -> Result<LightningSnapshot> {
        Ok(self.mempool.get_lightning(range).await?)
    }
}
