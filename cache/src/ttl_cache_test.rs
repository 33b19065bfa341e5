#[cfg(test)]
mod tests {
    use crate::TtlCache;
    use serde_json::json;
    use std::time::Duration;
    use tokio::time::advance;

    #[tokio::test(start_paused = true)]
    async fn test_put_then_get_fresh() {
        let cache = TtlCache::new();
        cache.put("prices-usd", json!([{"id": "bitcoin"}]));

        let ttl = Duration::from_secs(60);
        assert_eq!(
            cache.get_fresh("prices-usd", ttl),
            Some(json!([{"id": "bitcoin"}]))
        );
        assert_eq!(cache.get_fresh("prices-eur", ttl), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_expired_entry_still_available_via_get_any() {
        let cache = TtlCache::new();
        let ttl = Duration::from_secs(60);
        cache.put("global", json!({"btc": 54.1}));

        advance(Duration::from_secs(59)).await;
        assert!(cache.get_fresh("global", ttl).is_some());

        // age == ttl 已不算新鲜
        advance(Duration::from_secs(1)).await;
        assert_eq!(cache.get_fresh("global", ttl), None);
        assert_eq!(cache.get_any("global"), Some(json!({"btc": 54.1})));
        assert_eq!(cache.age("global"), Some(Duration::from_secs(60)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_put_replaces_and_resets_age() {
        let cache = TtlCache::new();
        let ttl = Duration::from_secs(10);
        cache.put("news", 1);
        advance(Duration::from_secs(20)).await;
        assert_eq!(cache.get_fresh("news", ttl), None);

        cache.put("news", 2);
        assert_eq!(cache.get_fresh("news", ttl), Some(2));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.age("news"), Some(Duration::ZERO));
    }

    #[tokio::test]
    async fn test_zero_ttl_is_never_fresh() {
        let cache = TtlCache::new();
        cache.put("k", "v".to_string());
        assert_eq!(cache.get_fresh("k", Duration::ZERO), None);
        assert_eq!(cache.get_any("k"), Some("v".to_string()));
    }

    #[test]
    fn test_invalidate() {
        let cache = TtlCache::new();
        cache.put("a", 1);
        cache.put("b", 2);
        cache.put("c", 3);
        assert_eq!(cache.keys(), vec!["a", "b", "c"]);

        assert!(cache.invalidate("b"));
        assert!(!cache.invalidate("b"));
        assert_eq!(cache.get_any("b"), None);
        assert_eq!(cache.len(), 2);

        assert_eq!(cache.invalidate_all(), 2);
        assert!(cache.is_empty());
        assert_eq!(cache.get_any("a"), None);
    }
}
