#[cfg(test)]
mod tests {
    use crate::models::{LongRange, SeriesRange};

    #[test]
    fn test_series_range_round_trip_strings() {
        for s in ["1m", "3m", "6m", "1y", "2y", "3y"] {
            assert_eq!(SeriesRange::parse(s).unwrap().as_str(), s);
        }
        assert_eq!(SeriesRange::parse("5y"), None);
        assert_eq!(SeriesRange::parse(""), None);
        assert_eq!(SeriesRange::default(), SeriesRange::ThreeMonths);
        assert_eq!(SeriesRange::ThreeYears.yahoo_str(), "5y");
    }

    #[test]
    fn test_long_range() {
        assert_eq!(LongRange::parse("max"), Some(LongRange::All));
        assert_eq!(LongRange::parse("5y").unwrap().timespan(), "5years");
        assert_eq!(LongRange::parse("1y").unwrap().timespan(), "1year");
        assert_eq!(LongRange::parse("10y"), None);
    }
}
