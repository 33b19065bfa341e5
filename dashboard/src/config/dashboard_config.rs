use super::Config;
use crate::errors::{DashboardError, Result};
use cache::FetchPolicy;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use upstream::consts::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Proxy {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind: "0.0.0.0".to_string(),
            port: 3847,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    pub api_timeout_milli_secs: u64,

    pub coingecko_base_url: String,
    pub fear_greed_base_url: String,
    pub news_base_url: String,
    pub mempool_base_url: String,
    pub blockchain_base_url: String,
    pub yahoo_base_url: String,
    pub fred_base_url: String,
    pub search_base_url: String,

    pub coingecko_api_key: Option<String>, // demo key
    pub search_api_key: Option<String>,    // 没有则社交摘要为空

    // CoinGecko免费档全局限频，所有key共享
    pub coingecko_min_interval_milli_secs: u64,

    pub coin_ids: Vec<String>,
    pub ta_days: u32, // 技术指标使用的日线数量
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        UpstreamConfig {
            api_timeout_milli_secs: 10000,
            coingecko_base_url: COINGECKO_BASE_URL.to_string(),
            fear_greed_base_url: FEAR_GREED_BASE_URL.to_string(),
            news_base_url: CRYPTOCOMPARE_BASE_URL.to_string(),
            mempool_base_url: MEMPOOL_BASE_URL.to_string(),
            blockchain_base_url: BLOCKCHAIN_BASE_URL.to_string(),
            yahoo_base_url: YAHOO_BASE_URL.to_string(),
            fred_base_url: FRED_BASE_URL.to_string(),
            search_base_url: BRAVE_SEARCH_BASE_URL.to_string(),
            coingecko_api_key: None,
            search_api_key: None,
            coingecko_min_interval_milli_secs: 2500,
            coin_ids: DEFAULT_COIN_IDS.iter().map(|s| s.to_string()).collect(),
            ta_days: 200,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub backoff_secs: Vec<u64>,
    pub retry_delay_milli_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        RetryConfig {
            max_attempts: cache::policy::DEFAULT_MAX_ATTEMPTS,
            backoff_secs: cache::policy::DEFAULT_BACKOFF_SECS.to_vec(),
            retry_delay_milli_secs: cache::policy::DEFAULT_RETRY_DELAY_MILLI_SECS,
        }
    }
}

impl RetryConfig {
    pub fn policy(&self, ttl: Duration) -> FetchPolicy {
        FetchPolicy::new(ttl)
            .with_max_attempts(self.max_attempts)
            .with_backoff_schedule(self.backoff_secs.iter().map(|s| Duration::from_secs(*s)).collect())
            .with_retry_delay(Duration::from_millis(self.retry_delay_milli_secs))
    }
}

/// Freshness window per endpoint, in seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TtlConfig {
    pub prices: u64,
    pub chart: u64,
    pub chart_long: u64,
    pub global: u64,
    pub fear_greed: u64,
    pub news: u64,
    pub ta: u64,
    #[serde(rename = "macro")]
    pub macro_bundle: u64,
    pub mining: u64,
    pub lightning: u64,
    pub x_posts: u64,
    pub exchange_rate: u64,
}

impl Default for TtlConfig {
    fn default() -> Self {
        TtlConfig {
            prices: 60,
            chart: 120,
            chart_long: 3600,
            global: 120,
            fear_greed: 300,
            news: 300,
            ta: 300,
            macro_bundle: 900,
            mining: 300,
            lightning: 600,
            x_posts: 1800,
            exchange_rate: 300,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DashboardConfig {
    pub server: ServerConfig,
    pub log_file: Option<String>,
    pub proxy: Option<Proxy>,
    pub upstream: UpstreamConfig,
    pub retry: RetryConfig,
    pub ttl: TtlConfig,
}

fn config_err(key: &str, e: super::ConfigError) -> DashboardError {
    DashboardError::ConfigError {
        message: format!("get {} err: {}", key, e),
    }
}

impl DashboardConfig {
    pub fn from_config(config: Config) -> Result<Self> {
        let dashboard_config = DashboardConfig {
            server: config
                .get_opt("server")
                .map_err(|e| config_err("server", e))?
                .unwrap_or_default(),
            log_file: config
                .get_opt("log_file")
                .map_err(|e| config_err("log_file", e))?,
            proxy: config.get_opt("proxy").map_err(|e| config_err("proxy", e))?,
            upstream: config
                .get_opt("upstream")
                .map_err(|e| config_err("upstream", e))?
                .unwrap_or_default(),
            retry: config
                .get_opt("retry")
                .map_err(|e| config_err("retry", e))?
                .unwrap_or_default(),
            ttl: config
                .get_opt("ttl")
                .map_err(|e| config_err("ttl", e))?
                .unwrap_or_default(),
        };
        dashboard_config.validate()?;
        Ok(dashboard_config)
    }

    /// `PORT` from the environment wins over the file.
    pub fn with_port_override(mut self, port: Option<&str>) -> Result<Self> {
        if let Some(port) = port.map(str::trim).filter(|p| !p.is_empty()) {
            self.server.port = port.parse().map_err(|e| DashboardError::ConfigError {
                message: format!("invalid PORT {:?}: {}", port, e),
            })?;
        }
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        if self.upstream.coin_ids.is_empty() {
            return Err(DashboardError::ConfigError {
                message: "upstream.coin_ids is empty".to_string(),
            });
        }
        if self.retry.max_attempts == 0 {
            return Err(DashboardError::ConfigError {
                message: "retry.max_attempts must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.bind, self.server.port)
    }

    pub fn proxy_url(&self) -> Option<String> {
        self.proxy.as_ref().map(|p| p.url.clone())
    }
}
