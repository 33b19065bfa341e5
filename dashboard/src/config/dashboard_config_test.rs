#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::time::Duration;
    use tempfile::NamedTempFile;

    use crate::config::*;

    fn load(content: &str) -> crate::errors::Result<DashboardConfig> {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", content).unwrap();
        DashboardConfig::from_config(Config::from_toml(file.path().to_str().unwrap()).unwrap())
    }

    #[test]
    fn test_defaults() {
        let cfg = DashboardConfig::from_config(Config::empty()).unwrap();
        assert_eq!(cfg.bind_addr(), "0.0.0.0:3847");
        assert!(cfg.log_file.is_none());
        assert!(cfg.proxy_url().is_none());
        assert_eq!(cfg.upstream.coin_ids.len(), 8);
        assert_eq!(cfg.upstream.coin_ids[0], "bitcoin");
        assert_eq!(cfg.ttl.prices, 60);
        assert_eq!(cfg.ttl.macro_bundle, 900);
        assert_eq!(cfg.retry.max_attempts, 3);

        let policy = cfg.retry.policy(Duration::from_secs(60));
        assert_eq!(policy.backoff_for(1), Duration::from_secs(3));
        assert_eq!(policy.backoff_for(5), Duration::from_secs(11));
        assert_eq!(policy.retry_delay, Duration::from_millis(500));
    }

    #[test]
    fn test_partial_tables() {
        let cfg = load(
            r#"
log_file = "dashboard.log"
proxy = { url = "socks5://127.0.0.1:1080" }

[server]
port = 9000

[upstream]
coin_ids = ["bitcoin", "ethereum"]
search_api_key = "k"

[ttl]
macro = 60
"#,
        )
        .unwrap();
        assert_eq!(cfg.bind_addr(), "0.0.0.0:9000");
        assert_eq!(cfg.log_file.as_deref(), Some("dashboard.log"));
        assert_eq!(cfg.proxy_url().as_deref(), Some("socks5://127.0.0.1:1080"));
        assert_eq!(cfg.upstream.coin_ids, vec!["bitcoin", "ethereum"]);
        assert_eq!(cfg.upstream.search_api_key.as_deref(), Some("k"));
        assert_eq!(cfg.upstream.api_timeout_milli_secs, 10000);
        assert_eq!(cfg.ttl.macro_bundle, 60);
        assert_eq!(cfg.ttl.prices, 60);
    }

    #[test]
    fn test_invalid_values() {
        assert!(load("[retry]\nmax_attempts = 0").is_err());
        assert!(load("[upstream]\ncoin_ids = []").is_err());
        assert!(load("[server]\nport = \"not a port\"").is_err());
    }

    #[test]
    fn test_port_override() {
        let cfg = DashboardConfig::default();
        let cfg = cfg.with_port_override(Some("8088")).unwrap();
        assert_eq!(cfg.server.port, 8088);
        let cfg = cfg.with_port_override(None).unwrap();
        assert_eq!(cfg.server.port, 8088);
        assert!(cfg.with_port_override(Some("http")).is_err());
    }
}
