use crate::errors::{DashboardError, Result};
use serde::{Deserialize, Serialize};

pub const MIN_CLOSES: usize = 50;

const RSI_PERIOD: usize = 14;
const SMA_FAST: usize = 20;
const SMA_SLOW: usize = 50;
const EMA_FAST: usize = 12;
const EMA_SLOW: usize = 26;
const MACD_SIGNAL: usize = 9;
const BOLLINGER_PERIOD: usize = 20;
const BOLLINGER_WIDTH: f64 = 2.0;
const PIVOT_SPAN: usize = 2; // 左右各2根
const MAX_LEVELS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bollinger {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalAnalysis {
    pub price: f64,
    pub points: usize,

    // 动量
    pub rsi14: f64, // [0, 100]

    // 均线
    pub sma20: f64,
    pub sma50: f64,
    pub ema12: f64,
    pub ema26: f64,

    // MACD(12, 26, 9)
    pub macd: f64,
    pub macd_signal: f64,
    pub macd_histogram: f64,

    pub bollinger: Bollinger,

    // 5点枢轴，按时间顺序保留最近几个
    pub supports: Vec<f64>,
    pub resistances: Vec<f64>,
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn calc_sma(closes: &[f64], period: usize) -> f64 {
    mean(&closes[closes.len() - period..])
}

/// EMA seeded with the SMA of the first `period` values; one output per
/// input from index `period - 1` on.
fn calc_ema_series(values: &[f64], period: usize) -> Vec<f64> {
    if values.len() < period {
        return vec![];
    }
    let k = 2.0 / (period as f64 + 1.0);
    let mut ema = mean(&values[..period]);
    let mut out = Vec::with_capacity(values.len() - period + 1);
    out.push(ema);
    for v in &values[period..] {
        ema = v * k + ema * (1.0 - k);
        out.push(ema);
    }
    out
}

/// Wilder's RSI over the whole series.
fn calc_rsi(closes: &[f64], period: usize) -> f64 {
    let changes = closes.windows(2).map(|w| w[1] - w[0]).collect::<Vec<_>>();
    let (mut avg_gain, mut avg_loss) = changes[..period]
        .iter()
        .fold((0.0, 0.0), |(g, l), c| (g + c.max(0.0), l + (-c).max(0.0)));
    avg_gain /= period as f64;
    avg_loss /= period as f64;
    for c in &changes[period..] {
        avg_gain = (avg_gain * (period as f64 - 1.0) + c.max(0.0)) / period as f64;
        avg_loss = (avg_loss * (period as f64 - 1.0) + (-c).max(0.0)) / period as f64;
    }

    let rsi = if avg_loss <= f64::EPSILON {
        if avg_gain <= f64::EPSILON { 50.0 } else { 100.0 }
    } else {
        100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
    };
    rsi.clamp(0.0, 100.0)
}

fn calc_bollinger(closes: &[f64], period: usize, width: f64) -> Bollinger {
    let window = &closes[closes.len() - period..];
    let middle = mean(window);
    let variance = window.iter().map(|c| (c - middle).powi(2)).sum::<f64>() / period as f64;
    let std = variance.sqrt();
    Bollinger {
        upper: middle + width * std,
        middle,
        lower: middle - width * std,
    }
}

/// Local extremes strictly below (supports) or above (resistances) the
/// `PIVOT_SPAN` neighbours on each side.
fn calc_pivots(closes: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let mut supports = vec![];
    let mut resistances = vec![];
    for i in PIVOT_SPAN..closes.len().saturating_sub(PIVOT_SPAN) {
        let c = closes[i];
        let mut neighbours = (i - PIVOT_SPAN..=i + PIVOT_SPAN).filter(|j| *j != i);
        if neighbours.clone().all(|j| c < closes[j]) {
            supports.push(c);
        } else if neighbours.all(|j| c > closes[j]) {
            resistances.push(c);
        }
    }
    let keep_last = |mut v: Vec<f64>| {
        if v.len() > MAX_LEVELS {
            v.drain(..v.len() - MAX_LEVELS);
        }
        v
    };
    (keep_last(supports), keep_last(resistances))
}

pub fn calc_technical_analysis(closes: &[f64]) -> Result<TechnicalAnalysis> {
    if closes.len() < MIN_CLOSES {
        return Err(DashboardError::InsufficientData {
            message: format!(
                "technical analysis needs {} daily closes, got {}",
                MIN_CLOSES,
                closes.len()
            ),
        });
    }
    if closes.iter().any(|c| !c.is_finite()) {
        return Err(DashboardError::InsufficientData {
            message: "non-finite close in series".to_string(),
        });
    }

    let ema_fast = calc_ema_series(closes, EMA_FAST);
    let ema_slow = calc_ema_series(closes, EMA_SLOW);
    // 对齐到慢线起点
    let offset = EMA_SLOW - EMA_FAST;
    let macd_series = ema_slow
        .iter()
        .enumerate()
        .map(|(i, slow)| ema_fast[i + offset] - slow)
        .collect::<Vec<_>>();
    let signal_series = calc_ema_series(&macd_series, MACD_SIGNAL);

    let macd = macd_series.last().copied().unwrap_or_default();
    let macd_signal = signal_series.last().copied().unwrap_or_default();
    let (supports, resistances) = calc_pivots(closes);

    Ok(TechnicalAnalysis {
        price: closes[closes.len() - 1],
        points: closes.len(),
        rsi14: calc_rsi(closes, RSI_PERIOD),
        sma20: calc_sma(closes, SMA_FAST),
        sma50: calc_sma(closes, SMA_SLOW),
        ema12: ema_fast.last().copied().unwrap_or_default(),
        ema26: ema_slow.last().copied().unwrap_or_default(),
        macd,
        macd_signal,
        macd_histogram: macd - macd_signal,
        bollinger: calc_bollinger(closes, BOLLINGER_PERIOD, BOLLINGER_WIDTH),
        supports,
        resistances,
    })
}
