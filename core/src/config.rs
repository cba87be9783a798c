//! Client configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config and
//! points the client at the mock server's hero collection.

use std::time::Duration;

use serde::Deserialize;

use crate::error::ApiError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_COLLECTION_PATH: &str = "api/heroes";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub collection_path: String,
    /// Prepended as `"<prefix>: "` to every notifier message.
    pub log_prefix: Option<String>,
    /// Whole-request timeout in milliseconds, applied by `UreqTransport`.
    pub timeout_ms: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            collection_path: DEFAULT_COLLECTION_PATH.to_string(),
            log_prefix: None,
            timeout_ms: None,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Self::default()
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, ApiError> {
        serde_json::from_str(raw).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn with_collection_path(mut self, path: &str) -> Self {
        self.collection_path = path.to_string();
        self
    }

    pub fn with_log_prefix(mut self, prefix: &str) -> Self {
        self.log_prefix = Some(prefix.to_string());
        self
    }

    /// Sub-millisecond remainders round up, so a non-zero timeout never
    /// collapses to zero.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        let millis = timeout.as_nanos().div_ceil(1_000_000);
        self.timeout_ms = Some(u64::try_from(millis).unwrap_or(u64::MAX));
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// Absolute URL of the collection, `P` in every request path.
    pub fn collection_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.collection_path.trim_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_yields_defaults() {
        let config = ClientConfig::from_json("{}").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.collection_url(), "http://localhost:3000/api/heroes");
    }

    #[test]
    fn partial_json_overrides_only_given_fields() {
        let raw = r#"{"collection_path":"/v2/villains/","log_prefix":"VillainService"}"#;
        let config = ClientConfig::from_json(raw).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.collection_url(), "http://localhost:3000/v2/villains");
        assert_eq!(config.log_prefix.as_deref(), Some("VillainService"));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let config = ClientConfig::new("http://localhost:3000/");
        assert_eq!(config.collection_url(), "http://localhost:3000/api/heroes");
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = ClientConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn timeout_round_trips_through_seconds() {
        let config = ClientConfig::default().with_timeout(Duration::from_secs(5));
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn sub_second_timeout_is_kept() {
        let config = ClientConfig::default().with_timeout(Duration::from_millis(500));
        assert_eq!(config.timeout_ms, Some(500));
        assert_eq!(config.timeout(), Some(Duration::from_millis(500)));
    }

    #[test]
    fn sub_millisecond_timeout_rounds_up() {
        let config = ClientConfig::default().with_timeout(Duration::from_micros(1));
        assert_eq!(config.timeout(), Some(Duration::from_millis(1)));
    }

    #[test]
    fn timeout_reads_from_json_in_millis() {
        let config = ClientConfig::from_json(r#"{"timeout_ms":250}"#).unwrap();
        assert_eq!(config.timeout(), Some(Duration::from_millis(250)));
    }
}
