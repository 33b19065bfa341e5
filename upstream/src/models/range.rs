use serde::{Deserialize, Serialize};

/// Window for network statistics and macro series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeriesRange {
    #[serde(rename = "1m")]
    OneMonth,
    #[serde(rename = "3m")]
    ThreeMonths,
    #[serde(rename = "6m")]
    SixMonths,
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "2y")]
    TwoYears,
    #[serde(rename = "3y")]
    ThreeYears,
}

impl SeriesRange {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "1m" => Some(SeriesRange::OneMonth),
            "3m" => Some(SeriesRange::ThreeMonths),
            "6m" => Some(SeriesRange::SixMonths),
            "1y" => Some(SeriesRange::OneYear),
            "2y" => Some(SeriesRange::TwoYears),
            "3y" => Some(SeriesRange::ThreeYears),
            _ => None,
        }
    }

    // mempool.space 接口使用同样的写法
    pub fn as_str(&self) -> &'static str {
        match self {
            SeriesRange::OneMonth => "1m",
            SeriesRange::ThreeMonths => "3m",
            SeriesRange::SixMonths => "6m",
            SeriesRange::OneYear => "1y",
            SeriesRange::TwoYears => "2y",
            SeriesRange::ThreeYears => "3y",
        }
    }

    // Yahoo没有3y，取5y再截断
    pub fn yahoo_str(&self) -> &'static str {
        match self {
            SeriesRange::OneMonth => "1mo",
            SeriesRange::ThreeMonths => "3mo",
            SeriesRange::SixMonths => "6mo",
            SeriesRange::OneYear => "1y",
            SeriesRange::TwoYears => "2y",
            SeriesRange::ThreeYears => "5y",
        }
    }

    pub fn days(&self) -> i64 {
        match self {
            SeriesRange::OneMonth => 30,
            SeriesRange::ThreeMonths => 91,
            SeriesRange::SixMonths => 182,
            SeriesRange::OneYear => 365,
            SeriesRange::TwoYears => 730,
            SeriesRange::ThreeYears => 1095,
        }
    }

    pub fn millis(&self) -> i64 {
        self.days() * 24 * 3600 * 1000
    }
}

impl Default for SeriesRange {
    fn default() -> Self {
        SeriesRange::ThreeMonths
    }
}

/// Range for the long-horizon price chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LongRange {
    OneYear,
    TwoYears,
    ThreeYears,
    FiveYears,
    All,
}

impl LongRange {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "1y" => Some(LongRange::OneYear),
            "2y" => Some(LongRange::TwoYears),
            "3y" => Some(LongRange::ThreeYears),
            "5y" => Some(LongRange::FiveYears),
            "all" | "max" => Some(LongRange::All),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LongRange::OneYear => "1y",
            LongRange::TwoYears => "2y",
            LongRange::ThreeYears => "3y",
            LongRange::FiveYears => "5y",
            LongRange::All => "all",
        }
    }

    // blockchain.info charts timespan参数
    pub fn timespan(&self) -> &'static str {
        match self {
            LongRange::OneYear => "1year",
            LongRange::TwoYears => "2years",
            LongRange::ThreeYears => "3years",
            LongRange::FiveYears => "5years",
            LongRange::All => "all",
        }
    }
}
