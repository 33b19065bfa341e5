#[cfg(test)]
mod tests {
    use crate::models::*;

    fn pts(values: &[(i64, f64)]) -> Vec<SeriesPoint> {
        values.iter().map(|(t, v)| SeriesPoint { t: *t, v: *v }).collect()
    }

    #[test]
    fn test_series_stats() {
        let stats = SeriesStats::from_points(&pts(&[(1, 500.0), (2, 450.0), (3, 650.0), (4, 600.0)]))
            .unwrap();
        assert_eq!(stats.first, 500.0);
        assert_eq!(stats.last, 600.0);
        assert_eq!(stats.min, 450.0);
        assert_eq!(stats.max, 650.0);
        assert!((stats.change_pct.unwrap() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_series_stats_edge_cases() {
        assert!(SeriesStats::from_points(&[]).is_none());

        let single = SeriesStats::from_points(&pts(&[(1, 3.0)])).unwrap();
        assert_eq!(single.change_pct, Some(0.0));
        assert_eq!(single.min, 3.0);
        assert_eq!(single.max, 3.0);

        // 起点为0时无法计算百分比
        let zero = SeriesStats::from_points(&pts(&[(1, 0.0), (2, 5.0)])).unwrap();
        assert_eq!(zero.change_pct, None);
    }

    #[test]
    fn test_trim_to_window() {
        let points = pts(&[(300, 3.0), (100, 1.0), (200, 2.0), (50, 0.5)]);
        let trimmed = trim_to_window(points, 150);
        assert_eq!(trimmed, pts(&[(200, 2.0), (300, 3.0)]));
        assert!(trim_to_window(vec![], 10).is_empty());
    }

    #[test]
    fn test_mining_snapshot_serializes_camel_case() {
        let snapshot = MiningSnapshot {
            adjustment: DifficultyAdjustment {
                progress_percent: 50.0,
                difficulty_change: 1.5,
                estimated_retarget_date: 1,
                remaining_blocks: 1008,
                remaining_time: 2,
                previous_retarget: -0.5,
                next_retarget_height: 842_688,
                time_avg: 600_000,
            },
            hashrate: None,
            difficulty: Some(83.1),
            block_height: Some(841_680),
            hash_sparkline: vec![],
            hash_stats: None,
        };
        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(value["adjustment"]["progressPercent"], 50.0);
        assert_eq!(value["blockHeight"], 841_680);
        assert!(value.get("hashrate").is_none());
        assert!(value["hashSparkline"].as_array().unwrap().is_empty());
    }
}
