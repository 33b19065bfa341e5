use crate::errors::{Result, UpstreamError};
use crate::models::*;

const MONTHS_PER_YEAR: usize = 12;

/// FRED `fredgraph.csv` → observations, oldest first.
///
/// The date column is `observation_date` (older exports: `DATE`); the value
/// column is named after the series. `.` marks a missing observation.
pub fn parse_fred_csv(data: &str) -> Result<Vec<SeriesPoint>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(data.as_bytes());

    let headers = reader.headers()?.clone();
    let date_idx = headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case("observation_date") || h.eq_ignore_ascii_case("date"))
        .ok_or_else(|| UpstreamError::parse(format!("fred csv without date column: {:?}", headers)))?;
    let value_idx = (0..headers.len())
        .find(|i| *i != date_idx)
        .ok_or_else(|| UpstreamError::parse("fred csv without value column"))?;

    let mut points = vec![];
    for record in reader.records() {
        let record = record?;
        let (Some(date), Some(value)) = (record.get(date_idx), record.get(value_idx)) else {
            continue;
        };
        let (Some(t), Ok(v)) = (time::parse_date_millis(date), value.parse::<f64>()) else {
            continue;
        };
        if v.is_finite() {
            points.push(SeriesPoint { t, v });
        }
    }
    points.sort_by_key(|p| p.t);
    Ok(points)
}

fn pct_change(now: f64, before: f64) -> Option<f64> {
    if before.abs() > f64::EPSILON {
        Some((now - before) / before * 100.0)
    } else {
        None
    }
}

/// M2 money stock (billions USD, monthly).
pub fn build_money_supply(points: Vec<SeriesPoint>, range: SeriesRange) -> Result<MoneySupply> {
    let n = points.len();
    let value = points
        .last()
        .map(|p| p.v)
        .ok_or_else(|| UpstreamError::parse("m2 series is empty"))?;
    let mom_change = (n >= 2)
        .then(|| pct_change(value, points[n - 2].v))
        .flatten();
    let yoy_change = (n > MONTHS_PER_YEAR)
        .then(|| pct_change(value, points[n - 1 - MONTHS_PER_YEAR].v))
        .flatten();
    Ok(MoneySupply {
        value,
        mom_change,
        yoy_change,
        sparkline: trim_to_window(points, range.millis()),
    })
}

/// Effective federal funds rate (percent, monthly).
pub fn build_policy_rate(points: Vec<SeriesPoint>, range: SeriesRange) -> Result<PolicyRate> {
    let n = points.len();
    let value = points
        .last()
        .map(|p| p.v)
        .ok_or_else(|| UpstreamError::parse("fed funds series is empty"))?;
    let prev_value = (n >= 2).then(|| points[n - 2].v);
    Ok(PolicyRate {
        value,
        prev_value,
        sparkline: trim_to_window(points, range.millis()),
    })
}
