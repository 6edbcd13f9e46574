use serde::Deserialize;
use std::time::Duration;

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn deserialize_timeout_secs<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: serde::Deserializer<'de>,
{
    u64::deserialize(deserializer).map(Duration::from_secs)
}

/// Connection settings for the classification service.
///
/// The base URL is environment-specific and always injected by the
/// caller, which is what lets tests point the client at a local mock
/// server.
#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    #[serde(
        rename = "timeout_secs",
        default = "default_timeout",
        deserialize_with = "deserialize_timeout_secs"
    )]
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: default_timeout(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn classify_url(&self) -> String {
        format!("{}/classify", self.base_url.trim_end_matches('/'))
    }
}
