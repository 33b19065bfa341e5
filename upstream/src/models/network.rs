use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub t: i64, // 毫秒
    pub v: f64,
}

/// Derived figures over a point series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesStats {
    pub first: f64,
    pub last: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_pct: Option<f64>,
    pub min: f64,
    pub max: f64,
}

impl SeriesStats {
    pub fn from_points(points: &[SeriesPoint]) -> Option<Self> {
        let first = points.first()?.v;
        let last = points.last()?.v;
        let (min, max) = points
            .iter()
            .fold((f64::MAX, f64::MIN), |(min, max), p| (min.min(p.v), max.max(p.v)));
        let change_pct = if first.abs() > f64::EPSILON {
            Some((last - first) / first * 100.0)
        } else {
            None
        };
        Some(Self {
            first,
            last,
            change_pct,
            min,
            max,
        })
    }
}

/// Sorts by time and keeps the points within `window_millis` of the newest one.
pub fn trim_to_window(mut points: Vec<SeriesPoint>, window_millis: i64) -> Vec<SeriesPoint> {
    points.sort_by_key(|p| p.t);
    let Some(newest) = points.last().map(|p| p.t) else {
        return points;
    };
    let cutoff = newest - window_millis;
    points.retain(|p| p.t >= cutoff);
    points
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DifficultyAdjustment {
    pub progress_percent: f64,
    pub difficulty_change: f64,
    pub estimated_retarget_date: i64, // 毫秒
    pub remaining_blocks: u64,
    pub remaining_time: i64, // 毫秒
    pub previous_retarget: f64,
    pub next_retarget_height: u64,
    pub time_avg: i64, // 毫秒
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiningSnapshot {
    pub adjustment: DifficultyAdjustment,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hashrate: Option<f64>, // EH/s
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<f64>, // T
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_height: Option<u64>,
    pub hash_sparkline: Vec<SeriesPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash_stats: Option<SeriesStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LightningSnapshot {
    pub capacity_btc: f64,
    pub channels: u64,
    pub nodes: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tor_nodes: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clearnet_nodes: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_capacity: Option<f64>, // BTC
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub med_fee_rate: Option<f64>, // ppm
    pub capacity_history: Vec<SeriesPoint>, // BTC
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity_stats: Option<SeriesStats>,
}
