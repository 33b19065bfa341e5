#[cfg(test)]
mod tests {
    use crate::json::*;
    use crate::JsonError;
    use serde_json::json;

    #[test]
    fn test_loads() {
        let back: Vec<String> = loads(r#"["example", "test"]"#).unwrap();
        assert_eq!(back, vec!["example".to_string(), "test".to_string()]);
        assert!(matches!(
            loads::<Vec<String>>("{not json"),
            Err(JsonError::SerdeError(_))
        ));
    }

    #[test]
    fn test_get_f64_accepts_strings() {
        let value = json!({"a": {"b": [1.5, "2.25", "x", null]}});
        assert_eq!(get_f64(&value, "/a/b/0"), Some(1.5));
        assert_eq!(get_f64(&value, "/a/b/1"), Some(2.25));
        assert_eq!(get_f64(&value, "/a/b/2"), None);
        assert_eq!(get_f64(&value, "/a/b/3"), None);
        assert_eq!(get_f64(&value, "/missing"), None);
    }

    #[test]
    fn test_get_i64_and_str() {
        let value = json!({"height": 840000, "ts": "1700000000", "name": "btc", "f": 12.9});
        assert_eq!(get_i64(&value, "/height"), Some(840000));
        assert_eq!(get_i64(&value, "/ts"), Some(1_700_000_000));
        assert_eq!(get_i64(&value, "/f"), Some(12));
        assert_eq!(get_str(&value, "/name"), Some("btc"));
        assert_eq!(get_str(&value, "/height"), None);
    }

    #[test]
    fn test_require_reports_field() {
        let value = json!({"list": []});
        assert!(require_array(&value, "/list").unwrap().is_empty());
        match require_f64(&value, "/price") {
            Err(JsonError::MissingField { field }) => assert_eq!(field, "/price"),
            other => panic!("unexpected: {:?}", other),
        }
    }
}
