use crate::errors::Result;
use async_trait::async_trait;
use upstream::models::*;

/// Every upstream read the dashboard performs, already normalized.
#[async_trait]
pub trait DataProvider: Send + Sync {
    async fn get_prices(&self, vs: &str) -> Result<Vec<CoinPrice>>;
    async fn get_chart(&self, coin: &str, days: &str, vs: &str) -> Result<PriceChart>;
    async fn get_long_chart(&self, range: LongRange) -> Result<PriceChart>;
    async fn get_global(&self) -> Result<GlobalStats>;
    async fn get_btc_quotes(&self, vs: &str) -> Result<(f64, f64)>;

    async fn get_fear_greed(&self) -> Result<FearGreedIndex>;
    async fn get_news(&self) -> Result<Vec<NewsItem>>;
    async fn get_social_posts(&self) -> Result<Vec<SocialPost>>;

    async fn get_market_quote(&self, symbol: &str, range: SeriesRange) -> Result<MarketQuote>;
    async fn get_m2(&self, range: SeriesRange) -> Result<MoneySupply>;
    async fn get_fed_rate(&self, range: SeriesRange) -> Result<PolicyRate>;

    async fn get_mining(&self, range: SeriesRange) -> Result<MiningSnapshot>;
    async fn get_lightning(&self, range: SeriesRange) -> Result<LightningSnapshot>;
}
