//! External AI provider gateway.
//!
//! The rest of the crate talks to [`ChatProvider`] only; the concrete client
//! is picked once at start-up from [`ProviderConfig`]. A missing API key means
//! mock-only mode, which callers express as `Option<Arc<dyn ChatProvider>>`.

pub mod anthropic;

use std::env;
use std::time::Duration;

use async_trait::async_trait;
use futures_util::stream::BoxStream;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use anthropic::AnthropicProvider;

pub const DEFAULT_MODEL: &str = "claude-opus-4-6";
pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_MAX_TOKENS: u32 = 1024;
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Errors from a provider call. None of these reach end users; the caller
/// falls back to the offline responder.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Provider returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Provider error: {0}")]
    Api(String),

    #[error("Failed to decode provider response: {0}")]
    Decode(String),

    #[error("Provider returned no text")]
    EmptyResponse,
}

/// Who authored a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One conversation turn, in the shape the provider expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Ordered text increments of a streamed reply.
pub type TextStream = BoxStream<'static, Result<String, ProviderError>>;

/// A generative chat backend.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Request a full reply.
    async fn complete(&self, system: &str, messages: &[ChatMessage])
    -> Result<String, ProviderError>;

    /// Request a reply as a stream of text deltas.
    async fn stream(
        &self,
        system: &str,
        messages: &[ChatMessage],
    ) -> Result<TextStream, ProviderError>;

    /// Short name used in logs.
    fn name(&self) -> &str;
}

/// Provider settings resolved from the environment.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl ProviderConfig {
    /// Read `ANTHROPIC_*` variables. Returns `None` when no API key is set.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let api_key = get("ANTHROPIC_API_KEY").filter(|k| !k.trim().is_empty())?;
        let max_tokens = get("ANTHROPIC_MAX_TOKENS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_TOKENS);

        Some(Self {
            api_key,
            model: get("ANTHROPIC_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: get("ANTHROPIC_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            max_tokens,
            timeout: REQUEST_TIMEOUT,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_key_means_mock_only() {
        assert!(ProviderConfig::from_lookup(lookup(&[])).is_none());
        assert!(ProviderConfig::from_lookup(lookup(&[("ANTHROPIC_API_KEY", "  ")])).is_none());
    }

    #[test]
    fn defaults_apply() {
        let config = ProviderConfig::from_lookup(lookup(&[("ANTHROPIC_API_KEY", "sk-test")]))
            .expect("configured");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.max_tokens, 1024);
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn overrides_apply() {
        let config = ProviderConfig::from_lookup(lookup(&[
            ("ANTHROPIC_API_KEY", "sk-test"),
            ("ANTHROPIC_MODEL", "claude-haiku"),
            ("ANTHROPIC_BASE_URL", "http://localhost:9999"),
            ("ANTHROPIC_MAX_TOKENS", "256"),
        ]))
        .expect("configured");
        assert_eq!(config.model, "claude-haiku");
        assert_eq!(config.base_url, "http://localhost:9999");
        assert_eq!(config.max_tokens, 256);
    }

    #[test]
    fn bad_max_tokens_uses_default() {
        let config = ProviderConfig::from_lookup(lookup(&[
            ("ANTHROPIC_API_KEY", "sk-test"),
            ("ANTHROPIC_MAX_TOKENS", "lots"),
        ]))
        .expect("configured");
        assert_eq!(config.max_tokens, DEFAULT_MAX_TOKENS);
    }

    #[test]
    fn roles_serialize_lowercase() {
        let json = serde_json::to_string(&ChatMessage::assistant("hi")).expect("serialize");
        assert_eq!(json, r#"{"role":"assistant","content":"hi"}"#);
    }
}
