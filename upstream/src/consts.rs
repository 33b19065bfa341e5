// 免费接口，限频以各家文档为准；CoinGecko免费档约每分钟10-30次

pub const COINGECKO_BASE_URL: &str = "https://api.coingecko.com/api/v3";
pub const FEAR_GREED_BASE_URL: &str = "https://api.alternative.me";
pub const CRYPTOCOMPARE_BASE_URL: &str = "https://min-api.cryptocompare.com";
pub const MEMPOOL_BASE_URL: &str = "https://mempool.space";
pub const BLOCKCHAIN_BASE_URL: &str = "https://api.blockchain.info";
pub const YAHOO_BASE_URL: &str = "https://query1.finance.yahoo.com";
pub const FRED_BASE_URL: &str = "https://fred.stlouisfed.org";
pub const BRAVE_SEARCH_BASE_URL: &str = "https://api.search.brave.com";

pub const DEFAULT_USER_AGENT: &str = "btc-dashboard/0.1";

pub const DEFAULT_COIN_IDS: [&str; 8] = [
    "bitcoin",
    "ethereum",
    "solana",
    "cardano",
    "avalanche-2",
    "chainlink",
    "polkadot",
    "dogecoin",
];

// Yahoo Finance行情代码
pub const SYMBOL_DXY: &str = "DX-Y.NYB";
pub const SYMBOL_SPX: &str = "^GSPC";
pub const SYMBOL_DJIA: &str = "^DJI";
pub const SYMBOL_YIELD_10Y: &str = "^TNX";
pub const SYMBOL_GOLD: &str = "GC=F";
pub const SYMBOL_SILVER: &str = "SI=F";

// FRED序列
pub const FRED_M2: &str = "M2SL";
pub const FRED_FED_FUNDS: &str = "FEDFUNDS";

pub const NEWS_LIMIT: usize = 20;
pub const NEWS_BODY_CHARS: usize = 200;
pub const FEAR_GREED_LIMIT: u32 = 30;
pub const SOCIAL_QUERY: &str = "bitcoin site:x.com";
pub const SOCIAL_LIMIT: usize = 10;
