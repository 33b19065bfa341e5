#[cfg(test)]
mod tests {
    use crate::errors::UpstreamError;
    use crate::http::*;

    #[test]
    fn test_status_error_classification() {
        let err = status_error("https://api.example/markets", 429, "Too Many Requests");
        assert!(err.is_rate_limited());
        assert_eq!(err.status(), Some(429));

        let err = status_error("https://api.example/markets", 503, &"x".repeat(1000));
        assert!(!err.is_rate_limited());
        assert_eq!(err.status(), Some(503));
        match err {
            UpstreamError::HttpStatus { message, .. } => assert!(message.len() < 300),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_without_init() {
        let api = HttpApi::new(None, 1000);
        let err = api.get_text("http://127.0.0.1:1/", &[], &[]).await.unwrap_err();
        assert!(matches!(err, UpstreamError::ClientError { .. }));
    }

    #[test]
    fn test_init_rejects_bad_proxy() {
        let mut api = HttpApi::new(Some("not a proxy url".to_string()), 1000);
        assert!(matches!(
            api.init(),
            Err(UpstreamError::ParametersInvalid { .. })
        ));

        let mut api = HttpApi::new(None, 1500);
        assert!(api.init().is_ok());
        assert_eq!(api.timeout().as_millis(), 1500);
    }
}
