use crate::consts::DEFAULT_USER_AGENT;
use crate::errors::*;
use log::error;
use std::time::Duration;
use time::LatencyGuard;

/// Shared HTTP client for every upstream provider.
pub struct HttpApi {
    client: Option<reqwest::Client>,
    proxy_url: Option<String>,
    timeout_milli_secs: u64,
}

impl HttpApi {
    pub fn new(proxy_url: Option<String>, timeout_milli_secs: u64) -> Self {
        HttpApi {
            client: None,
            proxy_url,
            timeout_milli_secs,
        }
    }

    pub fn init(&mut self) -> Result<()> {
        let client_builder = reqwest::Client::builder().user_agent(DEFAULT_USER_AGENT);

        let client = if let Some(proxy_url) = &self.proxy_url {
            client_builder
                .proxy(reqwest::Proxy::all(proxy_url).map_err(|e| {
                    UpstreamError::ParametersInvalid {
                        message: format!("proxy url invalid: {}, error: {}", proxy_url, e),
                    }
                })?)
                .build()
                .map_err(|e| UpstreamError::ParametersInvalid {
                    message: format!("build client with proxy url: {} failed: {}", proxy_url, e),
                })?
        } else {
            client_builder
                .build()
                .map_err(|e| UpstreamError::ParametersInvalid {
                    message: format!("build client failed: {}", e),
                })?
        };

        self.client = Some(client);
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milli_secs)
    }

    pub async fn get_text(
        &self,
        url: &str,
        params: &[(&str, String)],
        headers: &[(&str, String)],
    ) -> Result<String> {
        let Some(client) = self.client.as_ref() else {
            return Err(UpstreamError::ClientError {
                message: "client is not initialized, please call init() first".to_string(),
            });
        };

        let _lg = LatencyGuard::new(format!("GET {}", url))
            .with_slow_threshold(self.timeout() / 2);

        let mut req = client.get(url).query(params).timeout(self.timeout());
        for (name, value) in headers {
            req = req.header(*name, value);
        }

        let resp = req.send().await.map_err(|e| {
            error!("Network error: {} {:?}", url, e);
            if e.is_timeout() {
                UpstreamError::Timeout {
                    message: format!("{}: {}", url, e),
                }
            } else {
                UpstreamError::NetworkError {
                    message: e.to_string(),
                }
            }
        })?;

        let status = resp.status().as_u16();
        if !resp.status().is_success() {
            let text = resp.text().await.unwrap_or_default();
            error!("Response error: {} status: {}, text: {}", url, status, text);
            return Err(status_error(url, status, &text));
        }

        resp.text().await.map_err(|e| {
            error!("Network error: {} {:?}", url, e);
            UpstreamError::NetworkError {
                message: e.to_string(),
            }
        })
    }
}

/// Maps a non-2xx response onto the error taxonomy: 429 is the only status
/// treated as a rate-limit signal.
pub fn status_error(url: &str, status: u16, body: &str) -> UpstreamError {
    let snippet: String = body.chars().take(200).collect();
    if status == 429 {
        UpstreamError::RateLimited {
            message: format!("{} returned 429: {}", url, snippet),
        }
    } else {
        UpstreamError::HttpStatus {
            status,
            message: format!("{}: {}", url, snippet),
        }
    }
}
