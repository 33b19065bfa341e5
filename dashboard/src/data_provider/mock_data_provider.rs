use super::DataProvider;
use crate::errors::{DashboardError, Result};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;
use upstream::models::*;

/// Canned data. Every call is recorded as a label (`prices:usd`,
/// `quote:GC=F`, ...); a label registered with `fail_on` returns that error.
pub(crate) struct MockDataProvider {
    calls: Mutex<Vec<String>>,
    failures: Mutex<HashMap<String, DashboardError>>,
    pub chart_points: usize,
}

impl MockDataProvider {
    pub fn new() -> Self {
        MockDataProvider {
            calls: Mutex::new(vec![]),
            failures: Mutex::new(HashMap::new()),
            chart_points: 120,
        }
    }

    pub fn with_chart_points(mut self, n: usize) -> Self {
        self.chart_points = n;
        self
    }

    pub fn fail_on(&self, label: &str, err: DashboardError) {
        self.failures.lock().unwrap().insert(label.to_string(), err);
    }

    pub fn recover(&self, label: &str) {
        self.failures.lock().unwrap().remove(label);
    }

    pub fn count(&self, label: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| *c == label).count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, label: String) -> Result<()> {
        self.calls.lock().unwrap().push(label.clone());
        match self.failures.lock().unwrap().get(&label) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn series(n: usize, start: f64) -> Vec<SeriesPoint> {
        (0..n)
            .map(|i| SeriesPoint {
                t: 1_700_000_000_000 + i as i64 * 86_400_000,
                v: start + i as f64,
            })
            .collect()
    }
}

#[async_trait]
impl DataProvider for MockDataProvider {
    async fn get_prices(&self, vs: &str) -> Result<Vec<CoinPrice>> {
        self.record(format!("prices:{}", vs))?;
        Ok(vec![CoinPrice {
            id: "bitcoin".to_string(),
            symbol: Some("btc".to_string()),
            current_price: 65000.0,
            ..Default::default()
        }])
    }

    async fn get_chart(&self, coin: &str, days: &str, vs: &str) -> Result<PriceChart> {
        self.record(format!("chart:{}:{}:{}", coin, days, vs))?;
        // 带周期波动的价格序列，便于产生支撑/阻力点
        let prices = (0..self.chart_points)
            .map(|i| {
                let t = 1_700_000_000_000.0 + i as f64 * 86_400_000.0;
                let p = 60000.0 + i as f64 * 50.0 + ((i as f64) * 0.7).sin() * 800.0;
                [t, p]
            })
            .collect();
        Ok(PriceChart {
            prices,
            market_caps: vec![],
            total_volumes: vec![],
        })
    }

    async fn get_long_chart(&self, range: LongRange) -> Result<PriceChart> {
        self.record(format!("chart-long:{}", range.as_str()))?;
        Ok(PriceChart {
            prices: vec![[1_600_000_000_000.0, 10000.0], [1_700_000_000_000.0, 37000.0]],
            market_caps: vec![],
            total_volumes: vec![],
        })
    }

    async fn get_global(&self) -> Result<GlobalStats> {
        self.record("global".to_string())?;
        let mut total_market_cap = BTreeMap::new();
        total_market_cap.insert("usd".to_string(), 2.4e12);
        Ok(GlobalStats {
            total_market_cap,
            ..Default::default()
        })
    }

    async fn get_btc_quotes(&self, vs: &str) -> Result<(f64, f64)> {
        self.record(format!("btc-quotes:{}", vs))?;
        Ok((60000.0, 55000.0))
    }

    async fn get_fear_greed(&self) -> Result<FearGreedIndex> {
        self.record("fear-greed".to_string())?;
        Ok(FearGreedIndex {
            data: vec![FearGreedEntry {
                value: 72,
                value_classification: "Greed".to_string(),
                timestamp: 1_700_000_000,
            }],
        })
    }

    async fn get_news(&self) -> Result<Vec<NewsItem>> {
        self.record("news".to_string())?;
        Ok(vec![])
    }

    async fn get_social_posts(&self) -> Result<Vec<SocialPost>> {
        self.record("x-posts".to_string())?;
        Ok(vec![])
    }

    async fn get_market_quote(&self, symbol: &str, _range: SeriesRange) -> Result<MarketQuote> {
        self.record(format!("quote:{}", symbol))?;
        Ok(MarketQuote {
            symbol: symbol.to_string(),
            price: 100.0,
            change_pct: 1.5,
            sparkline: Self::series(5, 98.0),
        })
    }

    async fn get_m2(&self, _range: SeriesRange) -> Result<MoneySupply> {
        self.record("m2".to_string())?;
        Ok(MoneySupply {
            value: 21000.0,
            mom_change: Some(0.3),
            yoy_change: Some(2.1),
            sparkline: Self::series(3, 20900.0),
        })
    }

    async fn get_fed_rate(&self, _range: SeriesRange) -> Result<PolicyRate> {
        self.record("fed-rate".to_string())?;
        Ok(PolicyRate {
            value: 4.33,
            prev_value: Some(4.58),
            sparkline: Self::series(3, 4.0),
        })
    }

    async fn get_mining(&self, range: SeriesRange) -> Result<MiningSnapshot> {
        self.record(format!("mining:{}", range.as_str()))?;
        let points = Self::series(4, 600.0);
        Ok(MiningSnapshot {
            adjustment: DifficultyAdjustment {
                progress_percent: 50.0,
                difficulty_change: 1.2,
                estimated_retarget_date: 1_700_600_000_000,
                remaining_blocks: 1008,
                remaining_time: 604_800_000,
                previous_retarget: -0.5,
                next_retarget_height: 842_688,
                time_avg: 600_000,
            },
            hashrate: Some(603.0),
            difficulty: Some(83.1),
            block_height: Some(841_680),
            hash_stats: SeriesStats::from_points(&points),
            hash_sparkline: points,
        })
    }

    async fn get_lightning(&self, range: SeriesRange) -> Result<LightningSnapshot> {
        self.record(format!("lightning:{}", range.as_str()))?;
        Ok(LightningSnapshot {
            capacity_btc: 5200.0,
            channels: 52000,
            nodes: 13000,
            tor_nodes: None,
            clearnet_nodes: None,
            avg_capacity: None,
            med_fee_rate: None,
            capacity_history: vec![],
            capacity_stats: None,
        })
    }
}
