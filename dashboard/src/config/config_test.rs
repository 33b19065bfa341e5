#[cfg(test)]
mod tests {
    use std::io::Write;
    use tempfile::NamedTempFile;

    use crate::config::*;

    fn temp_with_suffix(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        writeln!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_load_json_config() {
        let file = temp_with_suffix(".json", r#"{ "server": { "port": 8080 } }"#);
        let config = Config::from_json(file.path().to_str().unwrap()).unwrap();
        let port: u16 = config.get("server.port").unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn test_load_yaml_config() {
        let file = temp_with_suffix(".yaml", "server:\n  port: 8081");
        let config = Config::from_path(file.path().to_str().unwrap()).unwrap();
        let port: u16 = config.get("server.port").unwrap();
        assert_eq!(port, 8081);
    }

    #[test]
    fn test_load_toml_config() {
        let file = temp_with_suffix(".toml", "[api]\ncoingecko_key = \"demo\"");
        let config = Config::from_toml(file.path().to_str().unwrap()).unwrap();
        let key: String = config.get("api.coingecko_key").unwrap();
        assert_eq!(key, "demo");
        assert_eq!(config.get_opt::<String>("api.search_key").unwrap(), None);
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            Config::from_toml("/nonexistent/dashboard_conf.toml"),
            Err(ConfigError::FileError { .. })
        ));
    }
}
