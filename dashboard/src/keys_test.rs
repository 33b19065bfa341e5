#[cfg(test)]
mod tests {
    use crate::keys::*;
    use std::collections::HashSet;
    use upstream::models::{LongRange, SeriesRange};

    #[test]
    fn test_key_rendering() {
        assert_eq!(CacheKey::Prices { vs: "usd".into() }.to_string(), "prices-usd");
        assert_eq!(
            CacheKey::Chart {
                vs: "eur".into(),
                days: "30".into(),
                coin: "avalanche-2".into()
            }
            .to_string(),
            "chart-eur-30-avalanche-2"
        );
        assert_eq!(CacheKey::ChartLong(LongRange::All).to_string(), "chart-long-all");
        assert_eq!(CacheKey::Macro(SeriesRange::ThreeYears).to_string(), "macro-3y");
        assert_eq!(CacheKey::FearGreed.to_string(), "fear-greed");
        assert_eq!(CacheKey::ExchangeRate { vs: "jpy".into() }.to_string(), "exchange-rate-jpy");
    }

    #[test]
    fn test_chart_keys_do_not_collide() {
        let mut seen = HashSet::new();
        for vs in ["usd", "eur"] {
            for days in ["1", "30", "max"] {
                for coin in ["bitcoin", "bitcoin-cash", "30-bitcoin", "usd-coin"] {
                    let key = CacheKey::Chart {
                        vs: parse_vs(Some(vs)).unwrap(),
                        days: parse_days(days).unwrap(),
                        coin: parse_coin(coin).unwrap(),
                    };
                    assert!(seen.insert(key.to_string()), "duplicate key {}", key);
                }
            }
        }
    }

    #[test]
    fn test_parse_vs() {
        assert_eq!(parse_vs(None).unwrap(), "usd");
        assert_eq!(parse_vs(Some("")).unwrap(), "usd");
        assert_eq!(parse_vs(Some("EUR")).unwrap(), "eur");
        assert!(parse_vs(Some("u")).is_err());
        assert!(parse_vs(Some("us-d")).is_err());
        assert!(parse_vs(Some("usd1")).is_err());
    }

    #[test]
    fn test_parse_coin_and_days() {
        assert_eq!(parse_coin("Bitcoin").unwrap(), "bitcoin");
        assert!(parse_coin("").is_err());
        assert!(parse_coin("../etc").is_err());
        assert!(parse_coin("bit coin").is_err());

        assert_eq!(parse_days("007").unwrap(), "7");
        assert_eq!(parse_days("MAX").unwrap(), "max");
        assert!(parse_days("0").is_err());
        assert!(parse_days("3651").is_err());
        assert!(parse_days("-1").is_err());
    }

    #[test]
    fn test_parse_ranges() {
        assert_eq!(parse_series_range(None).unwrap(), SeriesRange::ThreeMonths);
        assert_eq!(parse_series_range(Some("1Y")).unwrap(), SeriesRange::OneYear);
        assert!(parse_series_range(Some("10y")).is_err());
        assert_eq!(parse_long_range("max").unwrap(), LongRange::All);
        assert_eq!(parse_long_range("5y").unwrap(), LongRange::FiveYears);
        assert!(parse_long_range("6m").is_err());
    }
}
