//! Base action-dispatch HTTP client.
//!
//! Provides `execute()` for Nano RPC actions (POST of a JSON `{"action": ..}`
//! envelope to the node URL). Supports Bearer/API-key/Basic auth, configurable
//! timeout, and retry with linear backoff.

use crate::error::RpcError;
use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Authentication scheme applied to every request.
///
/// Exactly one variant is active per client; the scheme is fixed at
/// construction. Empty strings stand in for absent credentials and still
/// produce the header (`"Bearer "`, an empty `x-api-key`, `Basic` over `":"`),
/// matching what permissive RPC proxies accept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthScheme {
    /// No authentication header.
    #[default]
    None,
    /// `Authorization: Bearer <token>`.
    Bearer { token: String },
    /// `x-api-key: <key>`.
    ApiKey { key: String },
    /// `Authorization: Basic <base64(username:password)>`.
    Basic { username: String, password: String },
}

/// Sink for dispatch failure diagnostics.
///
/// The client reports every failed attempt here before retrying. Injected so
/// tests can capture the stream; the default forwards to the `log` crate.
pub trait LogSink: Send + Sync {
    /// Record an attempt failure.
    fn error(&self, message: &str);
}

/// Default sink forwarding to the `log` crate macros.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFacade;

impl LogSink for LogFacade {
    fn error(&self, message: &str) {
        log::error!("{}", message);
    }
}

/// Configuration for an RPC client.
#[derive(Clone)]
pub struct RpcConfig {
    /// Node RPC endpoint URL (e.g., `http://localhost:7076`).
    pub url: String,
    /// Authentication scheme.
    pub auth: AuthScheme,
    /// Number of retries after a failed attempt (total attempts = retries + 1).
    pub retries: u32,
    /// Transport-level request timeout.
    pub timeout: Duration,
    /// Base delay between attempts; the wait before attempt k+1 is
    /// `retry_delay * k` (linear backoff).
    pub retry_delay: Duration,
    /// Failure diagnostics sink.
    pub sink: Arc<dyn LogSink>,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:7076".to_string(),
            auth: AuthScheme::None,
            retries: 3,
            timeout: Duration::from_secs(30),
            retry_delay: Duration::from_secs(1),
            sink: Arc::new(LogFacade),
        }
    }
}

impl fmt::Debug for RpcConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RpcConfig")
            .field("url", &self.url)
            .field("auth", &self.auth)
            .field("retries", &self.retries)
            .field("timeout", &self.timeout)
            .field("retry_delay", &self.retry_delay)
            .finish_non_exhaustive()
    }
}

/// Async HTTP client dispatching Nano RPC actions.
///
/// All state is fixed at construction; concurrent calls share the client
/// freely without locking.
pub struct RpcClient {
    client: reqwest::Client,
    config: RpcConfig,
}

impl RpcClient {
    /// Create a new client with the given URL and default configuration.
    pub fn new(url: &str) -> Self {
        Self::with_config(RpcConfig {
            url: url.trim_end_matches('/').to_string(),
            ..Default::default()
        })
    }

    /// Create a new client with full configuration.
    pub fn with_config(config: RpcConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(4)
            .build()
            .expect("failed to create HTTP client");

        Self { client, config }
    }

    /// Get the configured endpoint URL.
    pub fn url(&self) -> &str {
        &self.config.url
    }

    fn build_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        match &self.config.auth {
            AuthScheme::None => {}
            AuthScheme::Bearer { token } => {
                if let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", token)) {
                    headers.insert(AUTHORIZATION, value);
                }
            }
            AuthScheme::ApiKey { key } => {
                if let Ok(value) = HeaderValue::from_str(key) {
                    headers.insert("x-api-key", value);
                }
            }
            AuthScheme::Basic { username, password } => {
                let creds = format!("{}:{}", username, password);
                let encoded = base64::engine::general_purpose::STANDARD.encode(creds);
                if let Ok(value) = HeaderValue::from_str(&format!("Basic {}", encoded)) {
                    headers.insert(AUTHORIZATION, value);
                }
            }
        }
        headers
    }

    /// Delay before the next attempt: linear in the attempt number, saturating
    /// instead of overflowing for extreme configurations.
    fn backoff_delay(base: Duration, attempt: u32) -> Duration {
        base.checked_mul(attempt).unwrap_or(Duration::MAX)
    }

    /// Build the request envelope: params with null-valued keys dropped, plus
    /// the `action` key.
    fn build_envelope(action: &str, params: Value) -> Result<Map<String, Value>, RpcError> {
        let mut envelope = match params {
            Value::Null => Map::new(),
            other => serde_json::from_value::<Map<String, Value>>(other)?,
        };
        envelope.retain(|_, v| !v.is_null());
        envelope.insert("action".to_string(), Value::String(action.to_string()));
        Ok(envelope)
    }

    /// Execute an RPC action with the given parameters.
    ///
    /// `params` must serialize to a JSON object (or be `Value::Null` for
    /// actions without parameters). Null-valued keys are dropped, so optional
    /// parameters can be passed uniformly.
    ///
    /// Any failure — transport error, non-success HTTP status, malformed JSON
    /// body, or a response carrying a non-empty `error` field — is retried up
    /// to the configured budget, waiting `retry_delay * attempt` between
    /// attempts. A response with a non-empty `error` field is never returned
    /// as a success. Once the budget is spent the last failure is wrapped in
    /// [`RpcError::RetriesExhausted`].
    pub async fn execute(&self, action: &str, params: Value) -> Result<Value, RpcError> {
        let envelope = Self::build_envelope(action, params)?;

        let mut attempt = 0u32;
        loop {
            attempt += 1;
            match self.do_execute(action, &envelope).await {
                Ok(val) => return Ok(val),
                Err(e) => {
                    let message = e.to_string();
                    self.config.sink.error(&format!(
                        "RPC call '{}' attempt {} failed: {}",
                        action, attempt, message
                    ));
                    if attempt > self.config.retries {
                        return Err(RpcError::RetriesExhausted {
                            action: action.to_string(),
                            retries: self.config.retries,
                            message,
                        });
                    }
                    tokio::time::sleep(Self::backoff_delay(self.config.retry_delay, attempt))
                        .await;
                }
            }
        }
    }

    async fn do_execute(
        &self,
        action: &str,
        envelope: &Map<String, Value>,
    ) -> Result<Value, RpcError> {
        let url = &self.config.url;
        let resp = self
            .client
            .post(url)
            .headers(self.build_headers())
            .json(envelope)
            .send()
            .await
            .map_err(|e| RpcError::Http {
                action: action.to_string(),
                url: url.clone(),
                source: e,
            })?;

        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RpcError::HttpStatus {
                action: action.to_string(),
                url: url.clone(),
                status: status.as_u16(),
                body: body.chars().take(500).collect(),
            });
        }

        let text = resp.text().await.map_err(|e| RpcError::Http {
            action: action.to_string(),
            url: url.clone(),
            source: e,
        })?;
        let body: Value = serde_json::from_str(&text)?;

        if let Some(message) = body.get("error").and_then(Value::as_str) {
            if !message.is_empty() {
                return Err(RpcError::Node {
                    action: action.to_string(),
                    message: message.to_string(),
                });
            }
        }

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = RpcConfig::default();
        assert_eq!(config.url, "http://localhost:7076");
        assert_eq!(config.auth, AuthScheme::None);
        assert_eq!(config.retries, 3);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.retry_delay, Duration::from_secs(1));
    }

    #[test]
    fn test_client_url_trims_trailing_slash() {
        let client = RpcClient::new("http://example.com:7076/");
        assert_eq!(client.url(), "http://example.com:7076");
    }

    #[test]
    fn test_bearer_header() {
        let client = RpcClient::with_config(RpcConfig {
            auth: AuthScheme::Bearer {
                token: "T".to_string(),
            },
            ..Default::default()
        });
        let headers = client.build_headers();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer T");
    }

    #[test]
    fn test_bearer_header_empty_token() {
        let client = RpcClient::with_config(RpcConfig {
            auth: AuthScheme::Bearer {
                token: String::new(),
            },
            ..Default::default()
        });
        let headers = client.build_headers();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer ");
    }

    #[test]
    fn test_api_key_header() {
        let client = RpcClient::with_config(RpcConfig {
            auth: AuthScheme::ApiKey {
                key: "secret".to_string(),
            },
            ..Default::default()
        });
        let headers = client.build_headers();
        assert_eq!(headers.get("x-api-key").unwrap(), "secret");
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_basic_header() {
        let client = RpcClient::with_config(RpcConfig {
            auth: AuthScheme::Basic {
                username: "u".to_string(),
                password: "p".to_string(),
            },
            ..Default::default()
        });
        let headers = client.build_headers();
        // base64("u:p") == "dTpw"
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Basic dTpw");
    }

    #[test]
    fn test_basic_header_empty_credentials() {
        let client = RpcClient::with_config(RpcConfig {
            auth: AuthScheme::Basic {
                username: String::new(),
                password: String::new(),
            },
            ..Default::default()
        });
        let headers = client.build_headers();
        // base64(":") == "Og=="
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Basic Og==");
    }

    #[test]
    fn test_api_key_header_empty_key() {
        let client = RpcClient::with_config(RpcConfig {
            auth: AuthScheme::ApiKey { key: String::new() },
            ..Default::default()
        });
        let headers = client.build_headers();
        assert_eq!(headers.get("x-api-key").unwrap(), "");
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_backoff_delay_saturates() {
        assert_eq!(
            RpcClient::backoff_delay(Duration::from_secs(1), 3),
            Duration::from_secs(3)
        );
        assert_eq!(RpcClient::backoff_delay(Duration::MAX, 2), Duration::MAX);
    }

    #[test]
    fn test_no_auth_header_by_default() {
        let client = RpcClient::new("http://localhost:7076");
        let headers = client.build_headers();
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
        assert!(headers.get(AUTHORIZATION).is_none());
        assert!(headers.get("x-api-key").is_none());
    }

    #[test]
    fn test_envelope_drops_null_keys() {
        let envelope = RpcClient::build_envelope(
            "account_info",
            serde_json::json!({
                "account": "nano_1abc",
                "weight": null,
                "representative": true,
            }),
        )
        .unwrap();
        assert_eq!(envelope.get("action").unwrap(), "account_info");
        assert_eq!(envelope.get("account").unwrap(), "nano_1abc");
        assert_eq!(envelope.get("representative").unwrap(), true);
        assert!(!envelope.contains_key("weight"));
    }

    #[test]
    fn test_envelope_null_params() {
        let envelope = RpcClient::build_envelope("version", Value::Null).unwrap();
        assert_eq!(envelope.len(), 1);
        assert_eq!(envelope.get("action").unwrap(), "version");
    }

    #[test]
    fn test_envelope_rejects_non_object_params() {
        assert!(RpcClient::build_envelope("version", serde_json::json!([1, 2])).is_err());
    }
}
