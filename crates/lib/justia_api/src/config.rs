//! API server configuration.

use std::time::Duration;

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "0.0.0.0:8000").
    pub bind_addr: String,
    /// Simulated upstream latency for `POST /api/court-lookup`.
    pub court_lookup_delay: Duration,
    /// Pause between characters when streaming an offline reply.
    pub stream_char_delay: Duration,
}

impl ApiConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable                | Default        |
    /// |-------------------------|----------------|
    /// | `BIND_ADDR`             | `0.0.0.0:8000` |
    /// | `COURT_LOOKUP_DELAY_MS` | `500`          |
    /// | `STREAM_CHAR_DELAY_MS`  | `10`           |
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".into()),
            court_lookup_delay: millis_from_env("COURT_LOOKUP_DELAY_MS", 500),
            stream_char_delay: millis_from_env("STREAM_CHAR_DELAY_MS", 10),
        }
    }
}

fn millis_from_env(key: &str, default: u64) -> Duration {
    let ms = std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default);
    Duration::from_millis(ms)
}
