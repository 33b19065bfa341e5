use crate::errors::{Result, UpstreamError};
use crate::models::*;
use json::{get_array, get_f64, get_i64, require_f64};
use serde_json::Value;

const SATS_PER_BTC: f64 = 100_000_000.0;
const HASHES_PER_EXAHASH: f64 = 1e18;
const DIFFICULTY_PER_TERA: f64 = 1e12;

pub fn parse_difficulty_adjustment(data: &str) -> Result<DifficultyAdjustment> {
    let value: Value = json::loads(data)?;
    let int = |pointer: &str| -> Result<i64> {
        get_i64(&value, pointer).ok_or_else(|| UpstreamError::from(json::JsonError::missing(pointer)))
    };
    Ok(DifficultyAdjustment {
        progress_percent: require_f64(&value, "/progressPercent")?,
        difficulty_change: require_f64(&value, "/difficultyChange")?,
        estimated_retarget_date: int("/estimatedRetargetDate")?,
        remaining_blocks: int("/remainingBlocks")?.max(0) as u64,
        remaining_time: int("/remainingTime")?,
        previous_retarget: get_f64(&value, "/previousRetarget").unwrap_or_default(),
        next_retarget_height: int("/nextRetargetHeight")?.max(0) as u64,
        time_avg: int("/timeAvg")?,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct HashrateSeries {
    pub points: Vec<SeriesPoint>, // EH/s
    pub current_hashrate: Option<f64>,   // EH/s
    pub current_difficulty: Option<f64>, // T
}

pub fn parse_hashrate(data: &str) -> Result<HashrateSeries> {
    let value: Value = json::loads(data)?;
    let rows = json::require_array(&value, "/hashrates")?;
    let mut points = rows
        .iter()
        .filter_map(|row| {
            Some(SeriesPoint {
                t: time::secs_to_millis(get_i64(row, "/timestamp")?),
                v: get_f64(row, "/avgHashrate")? / HASHES_PER_EXAHASH,
            })
        })
        .collect::<Vec<_>>();
    points.sort_by_key(|p| p.t);
    Ok(HashrateSeries {
        points,
        current_hashrate: get_f64(&value, "/currentHashrate").map(|h| h / HASHES_PER_EXAHASH),
        current_difficulty: get_f64(&value, "/currentDifficulty").map(|d| d / DIFFICULTY_PER_TERA),
    })
}

pub fn parse_tip_height(data: &str) -> Result<u64> {
    data.trim()
        .parse::<u64>()
        .map_err(|e| UpstreamError::parse(format!("tip height {:?}: {}", data, e)))
}

pub fn build_mining_snapshot(
    adjustment: DifficultyAdjustment,
    hashrate: Option<HashrateSeries>,
    block_height: Option<u64>,
) -> MiningSnapshot {
    let (points, current_hashrate, current_difficulty) = match hashrate {
        Some(h) => (h.points, h.current_hashrate, h.current_difficulty),
        None => (vec![], None, None),
    };
    MiningSnapshot {
        adjustment,
        hashrate: current_hashrate.or_else(|| points.last().map(|p| p.v)),
        difficulty: current_difficulty,
        block_height,
        hash_stats: SeriesStats::from_points(&points),
        hash_sparkline: points,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LightningLatest {
    pub capacity_btc: f64,
    pub channels: u64,
    pub nodes: u64,
    pub tor_nodes: Option<u64>,
    pub clearnet_nodes: Option<u64>,
    pub avg_capacity_btc: Option<f64>,
    pub med_fee_rate: Option<f64>,
}

pub fn parse_lightning_latest(data: &str) -> Result<LightningLatest> {
    let value: Value = json::loads(data)?;
    let latest = value
        .get("latest")
        .ok_or_else(|| UpstreamError::parse("lightning statistics without latest"))?;
    let count = |pointer: &str| get_i64(latest, pointer).map(|v| v.max(0) as u64);
    Ok(LightningLatest {
        capacity_btc: require_f64(latest, "/total_capacity")? / SATS_PER_BTC,
        channels: count("/channel_count")
            .ok_or_else(|| UpstreamError::parse("lightning statistics without channel_count"))?,
        nodes: count("/node_count")
            .ok_or_else(|| UpstreamError::parse("lightning statistics without node_count"))?,
        tor_nodes: count("/tor_nodes"),
        clearnet_nodes: count("/clearnet_nodes"),
        avg_capacity_btc: get_f64(latest, "/avg_capacity").map(|sats| sats / SATS_PER_BTC),
        med_fee_rate: get_f64(latest, "/med_fee_rate"),
    })
}

/// Capacity history in BTC, oldest first.
pub fn parse_lightning_history(data: &str) -> Result<Vec<SeriesPoint>> {
    let value: Value = json::loads(data)?;
    let rows = get_array(&value, "")
        .ok_or_else(|| UpstreamError::parse("lightning history is not an array"))?;
    let mut points: Vec<SeriesPoint> = rows
        .iter()
        .filter_map(|row| {
            Some(SeriesPoint {
                t: time::secs_to_millis(get_i64(row, "/added")?),
                v: get_f64(row, "/total_capacity")? / SATS_PER_BTC,
            })
        })
        .collect();
    points.sort_by_key(|p| p.t);
    Ok(points)
}

pub fn build_lightning_snapshot(
    latest: LightningLatest,
    history: Vec<SeriesPoint>,
) -> LightningSnapshot {
    LightningSnapshot {
        capacity_btc: latest.capacity_btc,
        channels: latest.channels,
        nodes: latest.nodes,
        tor_nodes: latest.tor_nodes,
        clearnet_nodes: latest.clearnet_nodes,
        avg_capacity: latest.avg_capacity_btc,
        med_fee_rate: latest.med_fee_rate,
        capacity_stats: SeriesStats::from_points(&history),
        capacity_history: history,
    }
}
